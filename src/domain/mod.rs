// Domain layer: search models and ports (interfaces) to the Places API and storage.

pub mod model;
pub mod ports;
