//! Nearby restaurant lookup over the Google Places web service: one nearby
//! search, one details request per hit, merged into [`Restaurant`] records.

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use crate::config::Settings;
pub use crate::error::{Error, Result, TransportError};
pub use models::{Restaurant, SearchCriteria};
pub use services::{GooglePlacesApi, PlacesApi, RestaurantService};
