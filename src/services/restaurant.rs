use futures::future::try_join_all;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::{PlaceSummary, Restaurant, SearchCriteria, STATUS_OK, STATUS_ZERO_RESULTS};
use crate::services::api::{GooglePlacesApi, PlacesApi};

pub struct RestaurantService<A> {
    api: A,
}

impl RestaurantService<GooglePlacesApi> {
    pub fn from_settings(settings: Settings) -> Result<Self> {
        Ok(Self::new(GooglePlacesApi::new(settings.places)?))
    }
}

impl<A: PlacesApi> RestaurantService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Searches around the criteria's location, drops places under
    /// `min_rating`, then fetches details for every survivor concurrently.
    /// Any failing request fails the whole lookup. Output keeps search order.
    pub async fn get_nearby_restaurants(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Restaurant>> {
        info!(
            location = %criteria.location(),
            radius = criteria.radius,
            min_rating = ?criteria.min_rating,
            max_price = ?criteria.max_price,
            "Looking up nearby restaurants"
        );

        let response = self
            .api
            .nearby_search(criteria)
            .await
            .map_err(Error::NearbySearch)?;

        ensure_status(
            &response.status,
            response.error_message,
            &[STATUS_OK, STATUS_ZERO_RESULTS],
        )?;

        let found = response.results.len();
        let places = filter_by_rating(response.results, criteria.min_rating);

        debug!(
            found = found,
            retained = places.len(),
            "Filtered search results by rating"
        );

        let restaurants = try_join_all(places.into_iter().map(|place| self.enrich(place))).await?;

        info!(count = restaurants.len(), "Nearby restaurant lookup complete");

        Ok(restaurants)
    }

    async fn enrich(&self, place: PlaceSummary) -> Result<Restaurant> {
        let response = match self.api.place_details(&place.place_id).await {
            Ok(response) => response,
            Err(source) => {
                error!(
                    error = %source,
                    place_id = %place.place_id,
                    name = %place.name,
                    "Failed to fetch place details"
                );
                return Err(Error::PlaceDetails {
                    name: place.name,
                    source,
                });
            }
        };

        ensure_status(&response.status, response.error_message, &[STATUS_OK])?;

        let details = response.result.ok_or_else(|| Error::MissingDetails {
            name: place.name.clone(),
        })?;

        let photo_url = details
            .first_photo_reference()
            .map(|reference| self.api.photo_url(reference))
            .unwrap_or_default();

        Ok(Restaurant::from_place(place, details, photo_url))
    }
}

fn ensure_status(status: &str, message: Option<String>, accepted: &[&str]) -> Result<()> {
    if accepted.contains(&status) {
        return Ok(());
    }
    error!(status = status, message = ?message, "Places API returned an error status");
    Err(Error::Api {
        status: status.to_string(),
        message,
    })
}

fn filter_by_rating(places: Vec<PlaceSummary>, min_rating: Option<f64>) -> Vec<PlaceSummary> {
    match min_rating {
        Some(min) => places.into_iter().filter(|place| place.rating >= min).collect(),
        None => places,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Geometry, LatLng};

    fn place(id: &str, rating: f64) -> PlaceSummary {
        PlaceSummary {
            place_id: id.to_string(),
            name: id.to_string(),
            rating,
            price_level: None,
            geometry: Geometry {
                location: LatLng { lat: 0.0, lng: 0.0 },
            },
        }
    }

    #[test]
    fn rating_filter_is_inclusive() {
        let places = vec![place("a", 4.0), place("b", 3.9), place("c", 4.8)];
        let kept: Vec<_> = filter_by_rating(places, Some(4.0))
            .into_iter()
            .map(|p| p.place_id)
            .collect();
        assert_eq!(kept, vec!["a", "c"]);
    }

    #[test]
    fn no_min_rating_keeps_everything() {
        let places = vec![place("a", 1.0), place("b", 0.0)];
        assert_eq!(filter_by_rating(places, None).len(), 2);
    }

    #[test]
    fn ensure_status_accepts_listed_statuses() {
        assert!(ensure_status("OK", None, &[STATUS_OK, STATUS_ZERO_RESULTS]).is_ok());
        assert!(ensure_status("ZERO_RESULTS", None, &[STATUS_OK, STATUS_ZERO_RESULTS]).is_ok());

        let err = ensure_status("ZERO_RESULTS", None, &[STATUS_OK]).unwrap_err();
        assert_eq!(err.api_status(), Some("ZERO_RESULTS"));
    }
}
