pub mod api;
pub mod restaurant;

pub use api::{GooglePlacesApi, PlacesApi};
pub use restaurant::RestaurantService;
