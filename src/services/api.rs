use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretBox};
use tracing::debug;

use crate::clients::HttpClient;
use crate::config::PlacesConfig;
use crate::error::{Error, Result, TransportError};
use crate::models::{NearbySearchResponse, PlaceDetailsResponse, SearchCriteria};

const PLACE_TYPE: &str = "restaurant";
const DETAIL_FIELDS: &str = "formatted_address,photos,url,types";

/// The two places endpoints a lookup needs, plus photo URL construction.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn nearby_search(
        &self,
        criteria: &SearchCriteria,
    ) -> std::result::Result<NearbySearchResponse, TransportError>;

    async fn place_details(
        &self,
        place_id: &str,
    ) -> std::result::Result<PlaceDetailsResponse, TransportError>;

    fn photo_url(&self, photo_reference: &str) -> String;
}

pub struct GooglePlacesApi {
    client: HttpClient,
    api_key: SecretBox<String>,
    search_url: String,
    details_url: String,
    photo_url: String,
    photo_max_width: u32,
}

impl GooglePlacesApi {
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let api_key = config.api_key.ok_or(Error::MissingApiKey)?;
        if api_key.expose_secret().trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let client = HttpClient::new(&config.headers).map_err(Error::Client)?;

        Ok(Self {
            client,
            api_key,
            search_url: config.search_url,
            details_url: config.details_url,
            photo_url: config.photo_url,
            photo_max_width: config.photo_max_width,
        })
    }

    fn search_params(&self, criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.api_key.expose_secret().clone()),
            ("location", criteria.location()),
            ("radius", criteria.radius.to_string()),
            ("type", PLACE_TYPE.to_string()),
        ];
        // A zero tier leaves the price filter off.
        if let Some(max_price) = criteria.max_price.filter(|tier| *tier > 0) {
            params.push(("maxprice", max_price.to_string()));
        }
        params
    }

    fn details_params(&self, place_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.api_key.expose_secret().clone()),
            ("place_id", place_id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
        ]
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesApi {
    async fn nearby_search(
        &self,
        criteria: &SearchCriteria,
    ) -> std::result::Result<NearbySearchResponse, TransportError> {
        debug!(
            location = %criteria.location(),
            radius = criteria.radius,
            max_price = ?criteria.max_price,
            "Searching nearby restaurants"
        );
        let params = self.search_params(criteria);
        self.client.get_json(&self.search_url, &params).await
    }

    async fn place_details(
        &self,
        place_id: &str,
    ) -> std::result::Result<PlaceDetailsResponse, TransportError> {
        debug!(place_id = place_id, "Fetching place details");
        let params = self.details_params(place_id);
        self.client.get_json(&self.details_url, &params).await
    }

    fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}?maxwidth={}&photo_reference={}&key={}",
            self.photo_url,
            self.photo_max_width,
            photo_reference,
            self.api_key.expose_secret()
        )
    }
}
