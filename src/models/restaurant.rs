use serde::{Deserialize, Serialize};

use super::response::{PlaceDetails, PlaceSummary};

/// Type tags too generic to describe a cuisine.
pub const EXCLUDED_TYPES: [&str; 4] = ["restaurant", "food", "point_of_interest", "establishment"];

const FALLBACK_CUISINE: &str = "restaurant";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub cuisine_type: String,
    pub price_level: u8,
    pub rating: f64,
    pub lat: f64,
    pub lng: f64,
    pub photo_url: String,
    pub maps_url: String,
}

impl Restaurant {
    /// Merges a search hit with its details. `photo_url` is already resolved
    /// by the caller since building it needs the API key.
    pub fn from_place(place: PlaceSummary, details: PlaceDetails, photo_url: String) -> Self {
        let cuisine_type = cuisine_label(&details.types);

        Self {
            id: place.place_id,
            name: place.name,
            address: details.formatted_address,
            cuisine_type,
            price_level: place.price_level.unwrap_or(0),
            rating: place.rating,
            lat: place.geometry.location.lat,
            lng: place.geometry.location.lng,
            photo_url,
            maps_url: details.url,
        }
    }
}

/// First type tag that is not generic, with underscores turned into spaces.
pub fn cuisine_label(types: &[String]) -> String {
    types
        .iter()
        .find(|tag| !tag.is_empty() && !EXCLUDED_TYPES.contains(&tag.as_str()))
        .map(|tag| tag.replace('_', " "))
        .unwrap_or_else(|| FALLBACK_CUISINE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Geometry, LatLng};

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn generic_tags_fall_back_to_restaurant() {
        let types = tags(&["restaurant", "food", "point_of_interest", "establishment"]);
        assert_eq!(cuisine_label(&types), "restaurant");
        assert_eq!(cuisine_label(&[]), "restaurant");
    }

    #[test]
    fn first_specific_tag_wins() {
        let types = tags(&["restaurant", "point_of_interest", "italian_restaurant", "food"]);
        assert_eq!(cuisine_label(&types), "italian restaurant");

        let types = tags(&["food", "meal_takeaway", "bar"]);
        assert_eq!(cuisine_label(&types), "meal takeaway");
    }

    #[test]
    fn empty_tag_is_skipped() {
        let types = tags(&["", "cafe"]);
        assert_eq!(cuisine_label(&types), "cafe");
    }

    #[test]
    fn missing_price_level_defaults_to_zero() {
        let place = PlaceSummary {
            place_id: "p1".to_string(),
            name: "Diner".to_string(),
            rating: 4.1,
            price_level: None,
            geometry: Geometry {
                location: LatLng { lat: 1.0, lng: 2.0 },
            },
        };
        let details = PlaceDetails {
            formatted_address: "1 Main St".to_string(),
            url: "https://maps.google.com/?cid=1".to_string(),
            types: tags(&["diner", "food"]),
            ..Default::default()
        };

        let restaurant = Restaurant::from_place(place, details, String::new());
        assert_eq!(restaurant.price_level, 0);
        assert_eq!(restaurant.cuisine_type, "diner");
        assert_eq!(restaurant.address, "1 Main St");
        assert_eq!(restaurant.maps_url, "https://maps.google.com/?cid=1");
        assert_eq!(restaurant.photo_url, "");
        assert_eq!((restaurant.lat, restaurant.lng), (1.0, 2.0));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let restaurant = Restaurant {
            id: "p1".to_string(),
            name: "Diner".to_string(),
            address: "1 Main St".to_string(),
            cuisine_type: "diner".to_string(),
            price_level: 2,
            rating: 4.5,
            lat: 1.0,
            lng: 2.0,
            photo_url: String::new(),
            maps_url: "https://maps.google.com/?cid=1".to_string(),
        };
        let value = serde_json::to_value(&restaurant).unwrap();

        for key in ["cuisineType", "priceLevel", "photoUrl", "mapsUrl"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["priceLevel"], 2);
    }
}
