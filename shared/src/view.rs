//! Pure rendering of the city list and the city detail panel
//!
//! A render produces a whole [`View`]; whoever displays it replaces the
//! previous view wholesale.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::models::{
    select_animation, City, CityId, CitySummary, WeatherAnimation, ANIMATIONS_DIR,
};

/// Everything the browser can show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    CityList { cards: Vec<CityCard> },
    CityDetail(CityDetail),
}

/// One city in the listing, with the action that opens its detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCard {
    pub id: CityId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityDetail {
    pub id: CityId,
    pub title: String,
    pub wind_kmh: f64,
    pub precipitation_mm: f64,
    pub temperature_c: f64,
    pub animation: Option<WeatherAnimation>,
}

pub fn render_city_list(cities: &[CitySummary]) -> View {
    View::CityList {
        cards: cities
            .iter()
            .map(|city| CityCard {
                id: city.id,
                title: city.nazov.clone(),
            })
            .collect(),
    }
}

pub fn render_city_detail(city: &City) -> View {
    View::CityDetail(CityDetail {
        id: city.id,
        title: city.nazov.clone(),
        wind_kmh: city.sila_vetra,
        precipitation_mm: city.mm_zrazky,
        temperature_c: city.teplota,
        animation: select_animation(city.mm_zrazky, city.teplota, city.sila_vetra),
    })
}

impl View {
    /// Card ids in listing order; empty for a detail view
    pub fn card_ids(&self) -> Vec<CityId> {
        match self {
            View::CityList { cards } => cards.iter().map(|card| card.id).collect(),
            View::CityDetail(_) => Vec::new(),
        }
    }

    /// Markup for the page's main content, animations served from `animations/`
    pub fn to_html(&self) -> String {
        self.to_html_with_assets(ANIMATIONS_DIR)
    }

    pub fn to_html_with_assets(&self, animations_dir: &str) -> String {
        let mut html = String::new();
        match self {
            View::CityList { cards } => {
                html.push_str("<div class=\"row\" id=\"cityCards\">\n");
                for card in cards {
                    // writing into a String cannot fail
                    let _ = write!(
                        html,
                        concat!(
                            "  <div class=\"mb-4 d-flex justify-content-center\">\n",
                            "    <div class=\"card shadow-sm city-card text-center\">\n",
                            "      <div class=\"card-body\">\n",
                            "        <h5 class=\"card-title\">{title}</h5>\n",
                            "        <button class=\"btn btn-primary\" onclick=\"showMestoDetail({id})\">Vstúpiť</button>\n",
                            "      </div>\n",
                            "    </div>\n",
                            "  </div>\n",
                        ),
                        title = escape_html(&card.title),
                        id = card.id,
                    );
                }
                html.push_str("</div>\n");
            }
            View::CityDetail(detail) => {
                let background = detail
                    .animation
                    .map(|animation| {
                        format!(
                            " style=\"background-image: url('{}')\"",
                            escape_html(&animation.asset_path(animations_dir))
                        )
                    })
                    .unwrap_or_default();
                let _ = write!(
                    html,
                    concat!(
                        "<div class=\"container-center position-relative\">\n",
                        "  <div class=\"weather-bg\" id=\"weather-animation\"{background}></div>\n",
                        "  <div class=\"card shadow-sm position-relative\" style=\"width: 22rem; z-index: 1;\">\n",
                        "    <div class=\"card-body\">\n",
                        "      <h2 class=\"card-title\">{title}</h2>\n",
                        "      <p><strong>Sila vetra:</strong> {wind} km/h</p>\n",
                        "      <p><strong>Zrážky:</strong> {rain} mm</p>\n",
                        "      <p><strong>Teplota:</strong> {temp} °C</p>\n",
                        "      <button class=\"btn btn-secondary\" onclick=\"backToCities()\">Späť na zoznam miest</button>\n",
                        "    </div>\n",
                        "  </div>\n",
                        "</div>\n",
                    ),
                    background = background,
                    title = escape_html(&detail.title),
                    wind = detail.wind_kmh,
                    rain = detail.precipitation_mm,
                    temp = detail.temperature_c,
                );
            }
        }
        html
    }
}

/// Plain-text rendition for terminals
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::CityList { cards } if cards.is_empty() => writeln!(f, "(žiadne mestá)"),
            View::CityList { cards } => {
                for card in cards {
                    writeln!(f, "[{}] {}", card.id, card.title)?;
                }
                Ok(())
            }
            View::CityDetail(detail) => {
                writeln!(f, "{}", detail.title)?;
                writeln!(f, "  Sila vetra: {} km/h", detail.wind_kmh)?;
                writeln!(f, "  Zrážky:     {} mm", detail.precipitation_mm)?;
                writeln!(f, "  Teplota:    {} °C", detail.temperature_c)?;
                match detail.animation {
                    Some(animation) => writeln!(f, "  Počasie:    {}", animation),
                    None => writeln!(f, "  Počasie:    -"),
                }
            }
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: CityId, nazov: &str, wind: f64, rain: f64, temp: f64) -> City {
        City {
            id,
            nazov: nazov.to_string(),
            sila_vetra: wind,
            mm_zrazky: rain,
            teplota: temp,
        }
    }

    #[test]
    fn test_list_keeps_server_order() {
        let cities = vec![
            city(3, "Nitra", 1.0, 1.0, 1.0).summary(),
            city(1, "Bratislava", 1.0, 1.0, 1.0).summary(),
        ];
        let view = render_city_list(&cities);

        assert_eq!(view.card_ids(), vec![3, 1]);
        let html = view.to_html();
        assert!(html.contains("showMestoDetail(3)"));
        assert!(html.find("Nitra").unwrap() < html.find("Bratislava").unwrap());
    }

    #[test]
    fn test_empty_list() {
        let view = render_city_list(&[]);
        assert!(view.card_ids().is_empty());
        assert_eq!(view.to_string(), "(žiadne mestá)\n");
    }

    #[test]
    fn test_detail_selects_animation() {
        let view = render_city_detail(&city(1, "Poprad", 2.0, 12.0, -1.0));
        match &view {
            View::CityDetail(detail) => assert_eq!(detail.animation, Some(WeatherAnimation::Snow)),
            other => panic!("unexpected view {:?}", other),
        }
        let html = view.to_html();
        assert!(html.contains("url('animations/snow.gif')"));
        assert!(html.contains("<strong>Teplota:</strong> -1 °C"));
        assert!(view.card_ids().is_empty());
    }

    #[test]
    fn test_detail_without_animation() {
        let view = render_city_detail(&city(1, "Nikde", 3.0, -2.0, 10.0));
        let html = view.to_html();
        assert!(!html.contains("background-image"));
        assert!(view.to_string().contains("Počasie:    -"));
    }

    #[test]
    fn test_names_are_escaped() {
        let hostile = city(1, "<script>alert('x')</script>", 0.0, 0.0, 0.0);
        let view = render_city_list(&[hostile.summary()]);
        let html = view.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_text_rendition() {
        let view = render_city_detail(&city(2, "Košice", 8.0, 5.0, 5.5));
        let text = view.to_string();
        assert!(text.starts_with("Košice\n"));
        assert!(text.contains("Sila vetra: 8 km/h"));
        assert!(text.contains("Počasie:    wind"));
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let view = render_city_list(&[city(1, "Trnava", 0.0, 0.0, 0.0).summary()]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "city_list");
        assert_eq!(json["cards"][0]["title"], "Trnava");
    }
}
