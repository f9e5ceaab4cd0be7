use serde::Deserialize;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price_level: Option<u8>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub photo_reference: String,
}

impl PlaceDetails {
    /// Reference of the first photo, if it has one.
    pub fn first_photo_reference(&self) -> Option<&str> {
        self.photos
            .first()
            .map(|photo| photo.photo_reference.as_str())
            .filter(|reference| !reference.is_empty())
    }
}
