//! City records and the request bodies exchanged with the backend

use serde::{Deserialize, Serialize};

/// Server-assigned city identifier
pub type CityId = i64;

/// A city with its current weather readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    /// Display name, used as the lookup key for edit and delete
    pub nazov: String,
    /// Wind strength in km/h
    pub sila_vetra: f64,
    /// Precipitation in mm
    pub mm_zrazky: f64,
    /// Temperature in °C
    pub teplota: f64,
}

impl City {
    pub fn summary(&self) -> CitySummary {
        CitySummary {
            id: self.id,
            nazov: self.nazov.clone(),
        }
    }

    pub fn readings(&self) -> CityReadings {
        CityReadings {
            sila_vetra: self.sila_vetra,
            mm_zrazky: self.mm_zrazky,
            teplota: self.teplota,
        }
    }
}

/// The part of a city the listing needs.
///
/// Deserializes from a full [`City`] as well, unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySummary {
    pub id: CityId,
    pub nazov: String,
}

/// Body of `POST /mesto`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCity {
    pub nazov: String,
    pub sila_vetra: f64,
    pub mm_zrazky: f64,
    pub teplota: f64,
}

/// Body of `PUT /mesto/{id}`; the name is never sent on update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityReadings {
    pub sila_vetra: f64,
    pub mm_zrazky: f64,
    pub teplota: f64,
}

/// Outcome of looking a city up by its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup<'a> {
    NotFound,
    Unique(&'a CitySummary),
    /// More than one case-insensitive match; `first` is the one acted upon
    Ambiguous {
        first: &'a CitySummary,
        matches: usize,
    },
}

impl<'a> NameLookup<'a> {
    /// The city an edit or delete should act on, if any
    pub fn target(&self) -> Option<&'a CitySummary> {
        match *self {
            NameLookup::NotFound => None,
            NameLookup::Unique(city) => Some(city),
            NameLookup::Ambiguous { first, .. } => Some(first),
        }
    }
}

/// Resolve a typed-in name against the fetched collection, ignoring case.
pub fn resolve_by_name<'a>(cities: &'a [CitySummary], name: &str) -> NameLookup<'a> {
    let wanted = name.to_lowercase();
    let mut matches = cities
        .iter()
        .filter(|city| city.nazov.to_lowercase() == wanted);

    let Some(first) = matches.next() else {
        return NameLookup::NotFound;
    };

    match matches.count() {
        0 => NameLookup::Unique(first),
        extra => NameLookup::Ambiguous {
            first,
            matches: extra + 1,
        },
    }
}
