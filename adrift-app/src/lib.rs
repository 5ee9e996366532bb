pub mod components;
pub mod decor;
pub mod error_screen;
pub mod pointer;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::error_screen::ErrorScreen;

/// Root of the app. The error screen is the entire surface, so there is no
/// router here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! { <ErrorScreen /> }
}
