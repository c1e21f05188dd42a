pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{GooglePlacesClient, LocalStorage};
pub use config::Settings;
pub use crate::core::search::SearchClient;
pub use domain::model::{PlaceDetails, PlaceResult, SearchMode, SearchOutcome};
pub use utils::error::{PlacesError, Result};
