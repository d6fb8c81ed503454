//! City service for the weather records

use serde::Deserialize;
use shared::{City, CityId, CityReadings};
use sqlx::SqlitePool;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// City service for managing weather records
#[derive(Clone)]
pub struct CityService {
    db: SqlitePool,
}

/// Row of the `mesta` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct CityRow {
    id: i64,
    nazov: String,
    sila_vetra: f64,
    mm_zrazky: f64,
    teplota: f64,
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        City {
            id: row.id,
            nazov: row.nazov,
            sila_vetra: row.sila_vetra,
            mm_zrazky: row.mm_zrazky,
            teplota: row.teplota,
        }
    }
}

/// Input for creating a city
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCityInput {
    #[validate(custom = "not_blank")]
    pub nazov: String,
    pub sila_vetra: f64,
    pub mm_zrazky: f64,
    pub teplota: f64,
}

fn not_blank(nazov: &str) -> Result<(), ValidationError> {
    if nazov.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl CityService {
    /// Create a new CityService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all cities, oldest first
    pub async fn list_cities(&self) -> AppResult<Vec<City>> {
        let rows = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, nazov, sila_vetra, mm_zrazky, teplota
            FROM mesta
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    /// Get a city by ID
    pub async fn get_city(&self, id: CityId) -> AppResult<City> {
        let row = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, nazov, sila_vetra, mm_zrazky, teplota
            FROM mesta
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::CityNotFound(id))?;

        Ok(row.into())
    }

    /// Create a new city; names are unique
    pub async fn create_city(&self, input: CreateCityInput) -> AppResult<City> {
        input.validate()?;
        let nazov = input.nazov.trim().to_string();

        let row = sqlx::query_as::<_, CityRow>(
            r#"
            INSERT INTO mesta (nazov, sila_vetra, mm_zrazky, teplota)
            VALUES (?, ?, ?, ?)
            RETURNING id, nazov, sila_vetra, mm_zrazky, teplota
            "#,
        )
        .bind(&nazov)
        .bind(input.sila_vetra)
        .bind(input.mm_zrazky)
        .bind(input.teplota)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateCity(nazov.clone())
            }
            other => AppError::DatabaseError(other),
        })?;

        tracing::info!(city_id = row.id, nazov = %row.nazov, "City created");
        Ok(row.into())
    }

    /// Replace a city's weather readings; the name is left untouched
    pub async fn update_readings(&self, id: CityId, readings: CityReadings) -> AppResult<City> {
        let row = sqlx::query_as::<_, CityRow>(
            r#"
            UPDATE mesta
            SET sila_vetra = ?, mm_zrazky = ?, teplota = ?
            WHERE id = ?
            RETURNING id, nazov, sila_vetra, mm_zrazky, teplota
            "#,
        )
        .bind(readings.sila_vetra)
        .bind(readings.mm_zrazky)
        .bind(readings.teplota)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::CityNotFound(id))?;

        tracing::info!(city_id = id, "City readings updated");
        Ok(row.into())
    }

    /// Delete a city, returning the removed record
    pub async fn delete_city(&self, id: CityId) -> AppResult<City> {
        let row = sqlx::query_as::<_, CityRow>(
            r#"
            DELETE FROM mesta
            WHERE id = ?
            RETURNING id, nazov, sila_vetra, mm_zrazky, teplota
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::CityNotFound(id))?;

        tracing::info!(city_id = id, "City deleted");
        Ok(row.into())
    }
}
