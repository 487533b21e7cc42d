//! Safety-protocol and feature badge lists.

use leptos::prelude::*;

use dinesafe_common::fragments::Badge;

use crate::components::icons::CheckIcon;

/// A group of badges.  Renders nothing at all (not even the group) when
/// `badges` is empty.
#[component]
pub fn BadgeList(badges: Vec<Badge>) -> impl IntoView {
    (!badges.is_empty()).then(move || {
        view! {
            <div class="restaurant__feature-group">
                {badges
                    .into_iter()
                    .map(|badge| view! { <BadgeItem badge=badge/> })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
fn BadgeItem(badge: Badge) -> impl IntoView {
    view! {
        <div class=badge.tone.class() style=badge.tone.style()>
            <CheckIcon/>
            <p class="card-text">{badge.label}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use dinesafe_common::fragments::safety_badges;
    use dinesafe_common::restaurant::SafetyProtocols;

    #[test]
    fn test_empty_list_renders_no_group() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <BadgeList badges=Vec::new()/> }.to_html();
        assert!(!html.contains("restaurant__feature-group"));
        assert!(!html.contains("card-text"));
    }

    #[test]
    fn test_safety_badges_render_in_order() {
        let owner = Owner::new();
        owner.set();

        let badges = safety_badges(&SafetyProtocols {
            is_mask_required: true,
            is_sanitizing_available: true,
            ..Default::default()
        });
        let html = view! { <BadgeList badges=badges/> }.to_html();

        assert_eq!(html.matches("restaurant__feature-group").count(), 1);
        assert_eq!(html.matches("restaurant__feature--safety").count(), 2);
        assert!(html.contains("color: #3AAFA9"));
        let mask = html.find("Mask Required").unwrap();
        let sanitizing = html.find("Sanitizing Stations Available").unwrap();
        assert!(mask < sanitizing);
        assert!(!html.contains("Distanced Tables"));
    }
}
