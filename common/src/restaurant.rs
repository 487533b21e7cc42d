//! The restaurant record and the document → record mapper.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::DocumentHandle;

/// A flat, read-only restaurant record.
///
/// Every field except `id` may be absent in the store; absent flags read
/// as `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub avg_rating: Option<f64>,
    pub avg_cost: Option<f64>,

    // ── postal address ───────────────────────────────────────────────
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,

    // ── contact ──────────────────────────────────────────────────────
    pub phone_number: Option<String>,
    pub url: Option<String>,
    /// Object-storage path of the card image (not yet a URL).
    pub image: Option<String>,

    pub features: Features,
    pub safety: SafetyProtocols,

    /// Share of users rating the restaurant COVID-friendly, in percent.
    pub avg_thumbs: Option<f64>,
}

/// Availability flags, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub is_dine_in_available: bool,
    pub is_takeout_available: bool,
    pub is_delivery_available: bool,
}

/// Safety-protocol flags, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyProtocols {
    pub is_mask_required: bool,
    pub is_reduced_seatings: bool,
    pub is_distanced_tables: bool,
    pub is_sanitizing_available: bool,
}

impl Restaurant {
    /// Map one store document into a record.
    ///
    /// `average_thumbs` is stored as a fraction (0..=1) and rescaled to a
    /// percentage here.
    pub fn from_document<D: DocumentHandle + ?Sized>(doc: &D) -> Self {
        let restaurant = Restaurant {
            id: doc.id().to_string(),
            name: doc.str_field("name"),
            description: doc.str_field("description"),
            avg_rating: doc.f64_field("average_rating"),
            avg_cost: doc.f64_field("average_cost"),
            address: doc.str_field("address"),
            postal_code: doc.str_field("postal_code"),
            city: doc.str_field("city"),
            province: doc.str_field("province"),
            phone_number: doc.str_field("phone_number"),
            url: doc.str_field("website_url"),
            image: doc.str_field("image"),
            features: Features {
                is_dine_in_available: doc.bool_field("isDineInAvailable"),
                is_takeout_available: doc.bool_field("isTakeoutAvailable"),
                is_delivery_available: doc.bool_field("isDeliveryAvailable"),
            },
            safety: SafetyProtocols {
                is_mask_required: doc.bool_field("isMaskRequired"),
                is_reduced_seatings: doc.bool_field("isReducedSeatings"),
                is_distanced_tables: doc.bool_field("isDistancedTables"),
                is_sanitizing_available: doc.bool_field("isSanitizingAvailable"),
            },
            avg_thumbs: doc.f64_field("average_thumbs").map(fraction_to_pct),
        };
        debug!("Mapped restaurant {}", restaurant.id);
        restaurant
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.id)
    }

    /// DOM id of the card image (`{id}-restImage`).
    pub fn image_element_id(&self) -> String {
        format!("{}-restImage", self.id)
    }

    /// Single-line postal address for the detail page; empty parts are skipped.
    pub fn postal_address(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.city, &self.province, &self.postal_code]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Average rating with one decimal, e.g. `"4.3"`.
    pub fn rating_label(&self) -> Option<String> {
        self.avg_rating.map(|r| format!("{r:.1}"))
    }

    /// Price level as `$` signs (1..=4).
    pub fn cost_label(&self) -> Option<String> {
        self.avg_cost
            .filter(|c| c.is_finite())
            .map(|c| "$".repeat(c.round().clamp(1.0, 4.0) as usize))
    }
}

/// Rescale a 0..=1 fraction to a percentage, rounded to 2 decimals so
/// values like 0.666 display as `66.6` rather than `66.60000000000001`.
fn fraction_to_pct(fraction: f64) -> f64 {
    (fraction * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn full_doc() -> Document {
        Document::new("r42")
            .with("name", "Green Leaf")
            .with("description", "Vegan bistro")
            .with("average_rating", 4.3)
            .with("average_cost", 2)
            .with("address", "1 Main St")
            .with("postal_code", "A1A1A1")
            .with("city", "Town")
            .with("province", "ON")
            .with("phone_number", "5551234567")
            .with("website_url", "https://example.com")
            .with("image", "restaurants/r42.jpg")
            .with("isDineInAvailable", true)
            .with("isTakeoutAvailable", false)
            .with("isDeliveryAvailable", true)
            .with("isMaskRequired", true)
            .with("isReducedSeatings", false)
            .with("isDistancedTables", true)
            .with("isSanitizingAvailable", false)
            .with("average_thumbs", 0.75)
    }

    #[test]
    fn test_from_document_full() {
        let r = Restaurant::from_document(&full_doc());
        assert_eq!(r.id, "r42");
        assert_eq!(r.name.as_deref(), Some("Green Leaf"));
        assert_eq!(r.url.as_deref(), Some("https://example.com"));
        assert_eq!(r.image.as_deref(), Some("restaurants/r42.jpg"));
        assert_eq!(r.avg_cost, Some(2.0));
        assert_eq!(r.avg_thumbs, Some(75.0));
        assert!(r.features.is_dine_in_available);
        assert!(!r.features.is_takeout_available);
        assert!(r.safety.is_distanced_tables);
        assert!(!r.safety.is_sanitizing_available);
    }

    #[test]
    fn test_from_document_empty() {
        let r = Restaurant::from_document(&Document::new("bare"));
        assert_eq!(r.id, "bare");
        assert_eq!(r.name, None);
        assert_eq!(r.avg_thumbs, None);
        assert_eq!(r.features, Features::default());
        assert_eq!(r.safety, SafetyProtocols::default());
        assert_eq!(r.display_name(), "bare");
    }

    #[test]
    fn test_wrong_types_read_as_absent() {
        let doc = Document::new("x")
            .with("name", 12)
            .with("average_rating", "high")
            .with("isMaskRequired", "true");
        let r = Restaurant::from_document(&doc);
        assert_eq!(r.name, None);
        assert_eq!(r.avg_rating, None);
        assert!(!r.safety.is_mask_required);
    }

    #[test]
    fn test_thumbs_rounding() {
        let r = Restaurant::from_document(&Document::new("t").with("average_thumbs", 0.666));
        assert_eq!(r.avg_thumbs, Some(66.6));
    }

    #[test]
    fn test_labels() {
        let r = Restaurant::from_document(&full_doc());
        assert_eq!(r.image_element_id(), "r42-restImage");
        assert_eq!(r.rating_label().as_deref(), Some("4.3"));
        assert_eq!(r.cost_label().as_deref(), Some("$$"));
        assert_eq!(
            r.postal_address().as_deref(),
            Some("1 Main St, Town, ON, A1A1A1")
        );

        let cheap = Restaurant {
            avg_cost: Some(0.2),
            ..Default::default()
        };
        assert_eq!(cheap.cost_label().as_deref(), Some("$"));
        assert_eq!(cheap.postal_address(), None);
    }
}
