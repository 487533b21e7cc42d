//! COVID-friendliness indicator.

use leptos::prelude::*;

use dinesafe_common::fragments::thumbs;

/// Thumbs up at 50% and above, thumbs down below, with the percentage.
#[component]
pub fn ThumbsMain(percent: f64) -> impl IntoView {
    let t = thumbs(percent);

    view! {
        <div
            class="restaurant__covid-rating"
            data-toggle="tooltip"
            data-placement="top"
            title=t.tooltip()
        >
            <i class=t.icon_class()></i>
            {t.label()}
        </div>
    }
}
