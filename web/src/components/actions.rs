//! Call / Directions / Website buttons.

use leptos::either::Either;
use leptos::prelude::*;

use dinesafe_common::fragments::Action;

use crate::components::icons::ActionIcon;

/// One action button.  Enabled actions are links; disabled ones keep the
/// same look with the `isDisabled` class and no `href`.
#[component]
pub fn ActionButton(action: Action) -> impl IntoView {
    let class = action.class();
    let kind = action.kind;
    let content = move || {
        view! {
            <ActionIcon kind=kind/>
            <p class="card-text action__text">{kind.label()}</p>
        }
    };

    if action.renders_as_anchor() {
        Either::Left(view! { <a class=class href=action.href>{content()}</a> })
    } else {
        Either::Right(view! { <div class=class>{content()}</div> })
    }
}
