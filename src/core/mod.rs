pub mod report;
pub mod search;
pub mod variations;

pub use crate::domain::model::{PlaceDetails, PlaceResult, SearchMode, SearchOutcome, SearchPage};
pub use crate::domain::ports::{PlacesApi, Storage};
pub use crate::utils::error::Result;
