mod criteria;
mod response;
mod restaurant;

pub use criteria::SearchCriteria;
pub use response::{
    Geometry, LatLng, NearbySearchResponse, Photo, PlaceDetails, PlaceDetailsResponse,
    PlaceSummary, STATUS_OK, STATUS_ZERO_RESULTS,
};
pub use restaurant::{cuisine_label, Restaurant, EXCLUDED_TYPES};
