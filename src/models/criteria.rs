use serde::{Deserialize, Serialize};

/// Filters for a nearby restaurant lookup. Coordinates are passed through
/// unvalidated; `radius` is in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
    pub min_rating: Option<f64>,
    pub max_price: Option<u8>,
}

impl SearchCriteria {
    pub fn new(lat: f64, lng: f64, radius: u32) -> Self {
        Self {
            lat,
            lng,
            radius,
            min_rating: None,
            max_price: None,
        }
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_max_price(mut self, max_price: u8) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// `"lat,lng"` as the search endpoint expects it.
    pub fn location(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}
