//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::AppConfig;
use crate::pages::upload_bulk_waste::UploadBulkWastePage;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Loads build-time config, provides shared contexts, and sets up routing.
/// A broken config replaces the whole UI with the error so a misbuilt bundle
/// never reaches the submit path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("config error: {e}");
            return view! { <p class="config-error">{e.to_string()}</p> }.into_any();
        }
    };

    provide_context(config);
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Title text="List Waste Item"/>

        <Router>
            <ToastStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=UploadBulkWastePage/>
                <Route path=(StaticSegment("bulk-waste"), StaticSegment("upload")) view=UploadBulkWastePage/>
            </Routes>
        </Router>
    }
    .into_any()
}
