mod settings;

pub use settings::{LookupConfig, PlacesConfig, Settings, API_KEY_ENV};
