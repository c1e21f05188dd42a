// Adapters layer: concrete implementations for the Places API and output storage.

pub mod google_places;
pub mod storage;

pub use google_places::GooglePlacesClient;
pub use storage::LocalStorage;
