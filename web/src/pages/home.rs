//! Home page – grid of restaurant cards.

use leptos::either::Either;
use leptos::prelude::*;

use dinesafe_common::Restaurant;

use crate::components::restaurant_card::RestaurantCard;
use crate::model::RestaurantList;

// ─── Server functions ────────────────────────────────────────────────────────

#[server]
pub async fn get_restaurants() -> Result<RestaurantList, ServerFnError> {
    use crate::server::source;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let restaurants = source::list_restaurants(&state.source, state.config.list_limit)
        .await
        .map_err(|e| {
            tracing::error!("Cannot list restaurants: {e}");
            ServerFnError::new(format!("Store error: {e}"))
        })?;

    Ok(RestaurantList {
        restaurants,
        placeholder_image: state.config.placeholder_image.clone(),
    })
}

// ─── Page component ──────────────────────────────────────────────────────────

/// All restaurants, sorted by name.
#[component]
pub fn Home() -> impl IntoView {
    let listing = Resource::new(|| (), |_| async { get_restaurants().await });

    view! {
        <div class="home-page">
            <h1>"Restaurants"</h1>

            <Suspense fallback=move || view! { <p class="loading">"Loading restaurants…"</p> }>
                {move || Suspend::new(async move {
                    match listing.await {
                        Ok(list) => Either::Left(view! { <RestaurantGrid list=list/> }),
                        Err(e) => Either::Right(view! {
                            <p class="error">"Error: " {e.to_string()}</p>
                        }),
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn RestaurantGrid(list: RestaurantList) -> impl IntoView {
    let RestaurantList {
        restaurants,
        placeholder_image,
    } = list;

    if restaurants.is_empty() {
        return Either::Left(view! { <p class="empty">"No restaurants yet."</p> });
    }

    Either::Right(view! {
        <div class="restaurant-grid">
            <For
                each=move || restaurants.clone()
                key=|r| r.id.clone()
                children=move |r: Restaurant| {
                    view! { <RestaurantCard restaurant=r placeholder=placeholder_image.clone()/> }
                }
            />
        </div>
    })
}
