//! Restaurant page – one card plus the full postal address.

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::restaurant_card::RestaurantCard;
use crate::model::RestaurantDetail;

// ─── Server functions ────────────────────────────────────────────────────────

#[server]
pub async fn get_restaurant(id: String) -> Result<Option<RestaurantDetail>, ServerFnError> {
    use crate::server::source;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let restaurant = source::get_restaurant(&state.source, &id)
        .await
        .map_err(|e| ServerFnError::new(format!("Store error: {e}")))?;

    Ok(restaurant.map(|restaurant| RestaurantDetail {
        restaurant,
        placeholder_image: state.config.placeholder_image.clone(),
    }))
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn RestaurantPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let detail = Resource::new(id, |id| async move { get_restaurant(id).await });

    view! {
        <div class="restaurant-page">
            <a href="/" class="back-link">"← All Restaurants"</a>

            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || Suspend::new(async move {
                    match detail.await {
                        Ok(Some(d)) => EitherOf3::A(view! { <RestaurantDetailView detail=d/> }),
                        Ok(None) => EitherOf3::B(view! {
                            <p class="error">"Restaurant not found."</p>
                        }),
                        Err(e) => EitherOf3::C(view! {
                            <p class="error">"Error: " {e.to_string()}</p>
                        }),
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn RestaurantDetailView(detail: RestaurantDetail) -> impl IntoView {
    let address = detail.restaurant.postal_address();

    view! {
        <section class="restaurant-detail">
            <RestaurantCard restaurant=detail.restaurant placeholder=detail.placeholder_image/>
            {address.map(|a| view! {
                <p class="restaurant__address">
                    <span class="label">"Address: "</span>
                    {a}
                </p>
            })}
        </section>
    }
}
