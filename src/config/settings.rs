use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use secrecy::{ExposeSecret, SecretBox};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::SearchCriteria;

/// Environment variable conventionally holding the places API key.
pub const API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";

const DEFAULT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const DEFAULT_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const DEFAULT_PHOTO_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";
const DEFAULT_PHOTO_MAX_WIDTH: i64 = 400;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub places: PlacesConfig,
    #[serde(default)]
    pub lookup: Option<LookupConfig>,
}

#[derive(Debug, Deserialize)]
pub struct PlacesConfig {
    #[serde(default)]
    pub api_key: Option<SecretBox<String>>,
    pub search_url: String,
    pub details_url: String,
    pub photo_url: String,
    pub photo_max_width: u32,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// Criteria the binary runs when invoked without arguments.
#[derive(Debug, Deserialize, Clone)]
pub struct LookupConfig {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub max_price: Option<u8>,
}

impl From<LookupConfig> for SearchCriteria {
    fn from(lookup: LookupConfig) -> Self {
        SearchCriteria {
            lat: lookup.lat,
            lng: lookup.lng,
            radius: lookup.radius,
            min_rating: lookup.min_rating,
            max_price: lookup.max_price,
        }
    }
}

impl Settings {
    /// Loads `config/default.*` (optional), `APP_*` variables and
    /// `GOOGLE_PLACES_API_KEY`. Fails when no API key is configured.
    pub fn new() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__"))
            .set_override_option("places.api_key", std::env::var(API_KEY_ENV).ok())?;

        Self::build(builder)
    }

    /// Loads settings from a single file on top of the built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from(path));
        Self::build(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            .set_default("places.search_url", DEFAULT_SEARCH_URL)?
            .set_default("places.details_url", DEFAULT_DETAILS_URL)?
            .set_default("places.photo_url", DEFAULT_PHOTO_URL)?
            .set_default("places.photo_max_width", DEFAULT_PHOTO_MAX_WIDTH)?;
        Ok(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        match &settings.places.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => {}
            _ => return Err(Error::MissingApiKey),
        }

        debug!(
            search_url = %settings.places.search_url,
            details_url = %settings.places.details_url,
            headers = ?settings.places.headers.keys().collect::<Vec<_>>(),
            "Loaded places configuration"
        );

        Ok(settings)
    }
}
