//! Data-transfer objects returned by server functions.

use dinesafe_common::Restaurant;
use serde::{Deserialize, Serialize};

/// Restaurants for the listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantList {
    pub restaurants: Vec<Restaurant>,
    /// Image shown until (or instead of) the real card image.
    pub placeholder_image: String,
}

/// One restaurant for its own page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub placeholder_image: String,
}
