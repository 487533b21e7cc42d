//! Restaurant card: image, name, COVID indicator, badges and actions.

use leptos::prelude::*;
use leptos::task::spawn_local_scoped_with_cancellation;

use dinesafe_common::fragments::{
    feature_badges, map_action, phone_action, safety_badges, website_action,
};
use dinesafe_common::Restaurant;

use crate::components::actions::ActionButton;
use crate::components::badges::BadgeList;
use crate::components::thumbs::ThumbsMain;

// ─── Server functions ────────────────────────────────────────────────────────

/// Turn a storage reference into a downloadable image URL.
#[server]
pub async fn resolve_image_url(reference: String) -> Result<String, ServerFnError> {
    use crate::server::storage;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    storage::resolve(&state.http, &state.image_cache, &state.config, &reference)
        .await
        .map_err(|e| {
            tracing::warn!("Image lookup failed for {reference}: {e}");
            ServerFnError::new(format!("Storage error: {e}"))
        })
}

// ─── Components ──────────────────────────────────────────────────────────────

/// A single restaurant card.
///
/// The image starts as `placeholder` and is swapped for the real one once
/// its URL resolves in the browser.  A failed lookup keeps the placeholder;
/// a pending lookup is aborted when the card is disposed.
#[component]
pub fn RestaurantCard(restaurant: Restaurant, placeholder: String) -> impl IntoView {
    let href = format!("/restaurant/{}", restaurant.id);
    let name = restaurant.display_name().to_string();
    let image_src = card_image(restaurant.image.clone(), placeholder);

    let features = feature_badges(&restaurant.features);
    let safety = safety_badges(&restaurant.safety);
    let phone = phone_action(restaurant.phone_number.as_deref());
    let directions = map_action(
        restaurant.address.as_deref(),
        restaurant.postal_code.as_deref(),
        restaurant.city.as_deref(),
        restaurant.province.as_deref(),
    );
    let website = website_action(restaurant.url.as_deref());

    let rating = restaurant.rating_label();
    let cost = restaurant.cost_label();

    view! {
        <div class="card restaurant" id=restaurant.id.clone()>
            <img
                id=restaurant.image_element_id()
                class="card-img-top restaurant__image"
                src=move || image_src.get()
                alt=name.clone()
                loading="lazy"
            />
            <div class="card-body">
                <div class="restaurant__header">
                    <h5 class="card-title">
                        <a href=href class="restaurant__name">{name}</a>
                    </h5>
                    {restaurant.avg_thumbs.map(|pct| view! { <ThumbsMain percent=pct/> })}
                </div>
                <div class="restaurant__meta">
                    {rating.map(|r| view! { <span class="restaurant__rating">"★ " {r}</span> })}
                    {cost.map(|c| view! { <span class="restaurant__cost">{c}</span> })}
                </div>
                {restaurant
                    .description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .map(|d| view! { <p class="card-text restaurant__description">{d}</p> })}
                <BadgeList badges=features/>
                <BadgeList badges=safety/>
                <div class="restaurant__actions">
                    <ActionButton action=phone/>
                    <ActionButton action=directions/>
                    <ActionButton action=website/>
                </div>
            </div>
        </div>
    }
}

/// Reactive `src` for the card image.
///
/// Server render and first client render both show the placeholder.  The
/// lookup is started from an effect, which only runs in the browser, and is
/// kept out of any surrounding `<Suspense>` so it never delays the card.
/// Without a reference there is no lookup at all.
fn card_image(reference: Option<String>, placeholder: String) -> RwSignal<String> {
    let src = RwSignal::new(placeholder);

    if let Some(reference) = reference.filter(|r| !r.is_empty()) {
        Effect::new(move |_| {
            let reference = reference.clone();
            spawn_local_scoped_with_cancellation(async move {
                match resolve_image_url(reference.clone()).await {
                    Ok(url) => {
                        src.try_set(url);
                    }
                    Err(e) => {
                        leptos::logging::warn!("Keeping placeholder for {reference}: {e}");
                    }
                }
            });
        });
    }

    src
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use dinesafe_common::Document;
    use futures::StreamExt;

    async fn render_in_suspense(restaurant: Restaurant) -> String {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        let app = view! {
            <Suspense fallback=|| view! { <p>"Loading restaurants…"</p> }>
                <RestaurantCard restaurant=restaurant placeholder="/placeholder.svg".to_string()/>
            </Suspense>
        };
        app.to_html_stream_in_order().collect::<String>().await
    }

    fn green_leaf() -> Document {
        Document::new("r1")
            .with("name", "Green Leaf")
            .with("isTakeoutAvailable", true)
    }

    #[tokio::test]
    async fn test_card_renders_inside_suspense_without_image() {
        let html = render_in_suspense(Restaurant::from_document(&green_leaf())).await;

        assert!(html.contains("Green Leaf"));
        assert!(!html.contains("Loading restaurants"));
        assert!(html.contains(r#"src="/placeholder.svg""#));
        assert!(html.contains(r#"id="r1-restImage""#));
    }

    #[tokio::test]
    async fn test_image_lookup_does_not_hold_back_card() {
        let doc = green_leaf().with("image", "images/green-leaf.jpg");
        let html = render_in_suspense(Restaurant::from_document(&doc)).await;

        assert!(html.contains("Green Leaf"));
        assert!(!html.contains("Loading restaurants"));
        assert!(html.contains(r#"src="/placeholder.svg""#));
        assert!(html.contains("Takeout Available"));
    }
}
