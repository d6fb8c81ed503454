//! Client errors and the alerts they surface as

use reqwest::StatusCode;
use shared::{FormError, Language};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid input: {0}")]
    Form(#[from] FormError),

    #[error("no city named {0:?}")]
    CityNotFound(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Mutations a user can trigger from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Static alert text shown when this operation fails with `error`
    pub fn alert_message(&self, error: &ClientError, language: Language) -> &'static str {
        match (self, error) {
            (_, ClientError::CityNotFound(_)) => {
                language.pick("Mesto nenájdené", "City not found")
            }
            (Operation::Create, ClientError::Form(_)) => {
                language.pick("Vyplň všetky polia!", "Fill in all fields!")
            }
            (_, ClientError::Form(_)) => language.pick(
                "Vyplň všetky číselné hodnoty!",
                "Fill in all numeric values!",
            ),
            (Operation::Create, _) => {
                language.pick("Nepodarilo sa pridať mesto.", "Failed to add the city.")
            }
            (Operation::Update, _) => {
                language.pick("Nepodarilo sa upraviť mesto.", "Failed to update the city.")
            }
            (Operation::Delete, _) => {
                language.pick("Nepodarilo sa vymazať mesto.", "Failed to delete the city.")
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}
