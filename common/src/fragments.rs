//! View models for the pieces of a restaurant card.
//!
//! Each renderer is a pure function from a few record fields to a small
//! value describing what to draw.  The web crate turns these into markup;
//! keeping the branching here lets it be tested without a DOM.

use crate::restaurant::{Features, SafetyProtocols};

// ─── Badges ──────────────────────────────────────────────────────────────────

/// Which badge group a badge belongs to (drives its CSS class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Safety,
    Feature,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Safety => "restaurant__feature--safety",
            BadgeTone::Feature => "restaurant__feature--other",
        }
    }

    /// Inline colour override; only safety badges have one.
    pub fn style(self) -> Option<&'static str> {
        match self {
            BadgeTone::Safety => Some("color: #3AAFA9"),
            BadgeTone::Feature => None,
        }
    }
}

/// A checkmark + label unit shown for one true flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub tone: BadgeTone,
    pub label: &'static str,
}

/// Safety badges for every true flag, in declaration order.
/// Empty when no flag is set.
pub fn safety_badges(flags: &SafetyProtocols) -> Vec<Badge> {
    collect_badges(
        BadgeTone::Safety,
        &[
            (flags.is_mask_required, "Mask Required"),
            (flags.is_reduced_seatings, "Reduced Seatings"),
            (flags.is_distanced_tables, "Distanced Tables"),
            (flags.is_sanitizing_available, "Sanitizing Stations Available"),
        ],
    )
}

/// Feature badges for every true flag, in declaration order.
/// Empty when no flag is set.
pub fn feature_badges(flags: &Features) -> Vec<Badge> {
    collect_badges(
        BadgeTone::Feature,
        &[
            (flags.is_dine_in_available, "Dine-in Available"),
            (flags.is_takeout_available, "Takeout Available"),
            (flags.is_delivery_available, "Delivery Available"),
        ],
    )
}

fn collect_badges(tone: BadgeTone, table: &[(bool, &'static str)]) -> Vec<Badge> {
    table
        .iter()
        .filter(|(on, _)| *on)
        .map(|&(_, label)| Badge { tone, label })
        .collect()
}

// ─── Actions ─────────────────────────────────────────────────────────────────

/// Contact medium of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Call,
    Directions,
    Website,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Call => "Call",
            ActionKind::Directions => "Directions",
            ActionKind::Website => "Website",
        }
    }

    /// Bootstrap-icons class of the glyph.
    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Call => "bi-telephone",
            ActionKind::Directions => "bi-map",
            ActionKind::Website => "bi-globe2",
        }
    }
}

/// An action button: enabled when it has a target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub href: Option<String>,
}

impl Action {
    fn new(kind: ActionKind, href: Option<String>) -> Self {
        Action { kind, href }
    }

    pub fn is_enabled(&self) -> bool {
        self.href.is_some()
    }

    /// CSS classes; disabled actions carry `isDisabled`.
    pub fn class(&self) -> String {
        let mut class = String::from("restaurant__action");
        if self.kind == ActionKind::Website {
            class.push_str(" restaurant__website");
        }
        if !self.is_enabled() {
            class.push_str(" isDisabled");
        }
        class
    }

    /// Disabled call/directions render as a plain block; a disabled website
    /// action stays an anchor, just without `href`.
    pub fn renders_as_anchor(&self) -> bool {
        self.is_enabled() || self.kind == ActionKind::Website
    }
}

/// "Call" action (`tel:` link).
pub fn phone_action(phone_number: Option<&str>) -> Action {
    let href = non_empty(phone_number).map(|p| format!("tel:{p}"));
    Action::new(ActionKind::Call, href)
}

/// "Directions" action pointing at a Google Maps search.
///
/// Segments are appended in this order, each only when its field is set:
/// `{address}+`, `{city}+`, `, {province}`, `{postal_code}, Canada`.
pub fn map_action(
    address: Option<&str>,
    postal_code: Option<&str>,
    city: Option<&str>,
    province: Option<&str>,
) -> Action {
    let query = map_query(address, postal_code, city, province);
    let href = (!query.is_empty()).then(|| format!("https://www.google.com/maps?q={query}"));
    Action::new(ActionKind::Directions, href)
}

fn map_query(
    address: Option<&str>,
    postal_code: Option<&str>,
    city: Option<&str>,
    province: Option<&str>,
) -> String {
    let mut query = String::new();
    if let Some(a) = non_empty(address) {
        query.push_str(&urlencoded(a));
        query.push('+');
    }
    if let Some(c) = non_empty(city) {
        query.push_str(&urlencoded(c));
        query.push('+');
    }
    if let Some(p) = non_empty(province) {
        query.push_str(", ");
        query.push_str(&urlencoded(p));
    }
    if let Some(pc) = non_empty(postal_code) {
        query.push_str(&urlencoded(pc));
        query.push_str(", Canada");
    }
    query
}

/// "Website" action linking to the restaurant's own site.
pub fn website_action(url: Option<&str>) -> Action {
    Action::new(ActionKind::Website, non_empty(url).map(str::to_string))
}

// ─── COVID-friendliness indicator ────────────────────────────────────────────

/// Percentage at or above which a restaurant counts as COVID-friendly.
pub const THUMBS_UP_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Friendly,
    NotFriendly,
}

/// The thumbs up/down indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumbs {
    pub verdict: Verdict,
    pub percent: f64,
}

impl Thumbs {
    pub fn icon_class(&self) -> &'static str {
        match self.verdict {
            Verdict::Friendly => "fa fa-thumbs-up selectedThumbs",
            Verdict::NotFriendly => "fa fa-thumbs-down selectedThumbs",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self.verdict {
            Verdict::Friendly => "Majority of users think this restaurant is COVID-friendly!",
            Verdict::NotFriendly => {
                "Majority of users think this restaurant is not COVID-friendly!"
            }
        }
    }

    /// The percentage as shown, e.g. `"75%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

pub fn thumbs(percent: f64) -> Thumbs {
    let verdict = if percent >= THUMBS_UP_THRESHOLD {
        Verdict::Friendly
    } else {
        Verdict::NotFriendly
    };
    Thumbs { verdict, percent }
}

// ─── helpers ─────────────────────────────────────────────────────────────────

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Minimal URL-encoding for a query parameter value.  `%` goes first so
/// the escapes added afterwards are left alone.
fn urlencoded(s: &str) -> String {
    s.replace('%', "%25")
        .replace('+', "%2B")
        .replace(' ', "+")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('#', "%23")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(badges: &[Badge]) -> Vec<&'static str> {
        badges.iter().map(|b| b.label).collect()
    }

    #[test]
    fn test_badges_empty_when_no_flag_set() {
        assert!(safety_badges(&SafetyProtocols::default()).is_empty());
        assert!(feature_badges(&Features::default()).is_empty());
    }

    #[test]
    fn test_safety_badges_follow_declaration_order() {
        let flags = SafetyProtocols {
            is_mask_required: false,
            is_reduced_seatings: true,
            is_distanced_tables: false,
            is_sanitizing_available: true,
        };
        let badges = safety_badges(&flags);
        assert_eq!(
            labels(&badges),
            vec!["Reduced Seatings", "Sanitizing Stations Available"]
        );
        assert!(badges.iter().all(|b| b.tone == BadgeTone::Safety));
        assert_eq!(BadgeTone::Safety.style(), Some("color: #3AAFA9"));
    }

    #[test]
    fn test_all_safety_badges() {
        let flags = SafetyProtocols {
            is_mask_required: true,
            is_reduced_seatings: true,
            is_distanced_tables: true,
            is_sanitizing_available: true,
        };
        assert_eq!(
            labels(&safety_badges(&flags)),
            vec![
                "Mask Required",
                "Reduced Seatings",
                "Distanced Tables",
                "Sanitizing Stations Available"
            ]
        );
    }

    #[test]
    fn test_feature_badges() {
        let flags = Features {
            is_dine_in_available: true,
            is_takeout_available: false,
            is_delivery_available: true,
        };
        let badges = feature_badges(&flags);
        assert_eq!(labels(&badges), vec!["Dine-in Available", "Delivery Available"]);
        assert_eq!(badges[0].tone.class(), "restaurant__feature--other");
        assert_eq!(badges[0].tone.style(), None);
    }

    #[test]
    fn test_phone_action() {
        for missing in [None, Some(""), Some("   ")] {
            let a = phone_action(missing);
            assert!(!a.is_enabled());
            assert!(!a.renders_as_anchor());
            assert_eq!(a.class(), "restaurant__action isDisabled");
        }

        let a = phone_action(Some("5551234567"));
        assert_eq!(a.href.as_deref(), Some("tel:5551234567"));
        assert_eq!(a.class(), "restaurant__action");
        assert_eq!(a.kind.label(), "Call");
        assert_eq!(a.kind.icon(), "bi-telephone");
    }

    #[test]
    fn test_map_action_disabled_without_address() {
        let a = map_action(Some(""), Some(""), Some(""), Some(""));
        assert!(!a.is_enabled());
        assert!(!a.renders_as_anchor());
        assert!(!map_action(None, None, None, None).is_enabled());
    }

    #[test]
    fn test_map_action_full_address() {
        let a = map_action(Some("1 Main St"), Some("A1A1A1"), Some("Town"), Some("ON"));
        let href = a.href.unwrap();
        assert_eq!(
            href,
            "https://www.google.com/maps?q=1+Main+St+Town+, ONA1A1A1, Canada"
        );
        let pos = href.find("1+Main+St+Town+, ON").unwrap();
        assert!(href[pos..].contains("A1A1A1, Canada"));
    }

    #[test]
    fn test_map_action_escapes_plus_and_percent() {
        let a = map_action(Some("A+B Plaza"), None, Some("100% Vegan"), None);
        assert_eq!(
            a.href.as_deref(),
            Some("https://www.google.com/maps?q=A%2BB+Plaza+100%25+Vegan+")
        );
    }

    #[test]
    fn test_map_action_partial_address() {
        let a = map_action(None, None, Some("Town"), None);
        assert_eq!(a.href.as_deref(), Some("https://www.google.com/maps?q=Town+"));

        let a = map_action(None, Some("A1A1A1"), None, None);
        assert_eq!(
            a.href.as_deref(),
            Some("https://www.google.com/maps?q=A1A1A1, Canada")
        );

        let a = map_action(Some("5 Fish & Chips Ln"), None, None, None);
        assert_eq!(
            a.href.as_deref(),
            Some("https://www.google.com/maps?q=5+Fish+%26+Chips+Ln+")
        );
    }

    #[test]
    fn test_website_action() {
        let a = website_action(None);
        assert!(!a.is_enabled());
        assert!(a.renders_as_anchor());
        assert_eq!(a.class(), "restaurant__action restaurant__website isDisabled");

        let a = website_action(Some("https://example.com"));
        assert_eq!(a.href.as_deref(), Some("https://example.com"));
        assert_eq!(a.class(), "restaurant__action restaurant__website");
    }

    #[test]
    fn test_thumbs_threshold_is_inclusive() {
        for pct in [50.0, 100.0] {
            let t = thumbs(pct);
            assert_eq!(t.verdict, Verdict::Friendly);
            assert!(t.icon_class().contains("fa-thumbs-up"));
            assert!(t.tooltip().ends_with("is COVID-friendly!"));
        }
        for pct in [49.0, 0.0] {
            let t = thumbs(pct);
            assert_eq!(t.verdict, Verdict::NotFriendly);
            assert!(t.icon_class().contains("fa-thumbs-down"));
            assert!(t.tooltip().contains("not COVID-friendly"));
        }
    }

    #[test]
    fn test_thumbs_label_shows_literal_percentage() {
        assert_eq!(thumbs(50.0).label(), "50%");
        assert_eq!(thumbs(100.0).label(), "100%");
        assert_eq!(thumbs(49.0).label(), "49%");
        assert_eq!(thumbs(0.0).label(), "0%");
        assert_eq!(thumbs(66.6).label(), "66.6%");
    }
}
