//! Page for listing a bulk-waste item with an image.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the form signals for one listing. Field edits land in `UploadState`;
//! submit hands a snapshot of the form and the chosen file to
//! `SubmissionController` and applies the resulting actions.

#[cfg(test)]
#[path = "upload_bulk_waste_test.rs"]
mod upload_bulk_waste_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::show_toast;
use crate::config::AppConfig;
use crate::net::api::{BulkWasteApi, CloudinaryHost};
use crate::state::toast::ToastState;
use crate::state::upload::{FormField, QuantityUnit, SelectedFile, UploadState};
use crate::submit::{SubmissionController, SubmitAction, actions_for};
use crate::util::session;

fn submit_button_label(loading: bool) -> &'static str {
    if loading { "Submitting..." } else { "List Waste Item" }
}

fn selected_file_caption(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Selected: {name}"),
        None => "No image selected".to_owned(),
    }
}

fn apply_actions<F>(actions: Vec<SubmitAction>, toasts: RwSignal<ToastState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    for action in actions {
        match action {
            SubmitAction::Toast { kind, message } => show_toast(toasts, kind, message),
            SubmitAction::ClearSessionToken => session::clear_token(),
            SubmitAction::Navigate(path) => navigate(path, NavigateOptions::default()),
        }
    }
}

/// Bulk-waste upload page: image picker on the left, listing form on the right.
#[component]
pub fn UploadBulkWastePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let upload = RwSignal::new(UploadState::default());
    let selected = RwSignal::new_local(None::<SelectedFile>);

    // Every form control carries a `name` matching its field, so one handler
    // covers inputs, the textarea and the unit dropdown.
    let on_field_input = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(name) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.get_attribute("name"))
                else {
                    return;
                };
                let value = event_target_value(&ev);
                upload.update(|s| {
                    s.form.update_by_name(&name, &value);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_image_change = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(file) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0))
                else {
                    return;
                };
                selected.set(Some(SelectedFile::from(file)));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        upload.update(|s| started = s.begin_submit());
        if !started {
            return;
        }

        let form = upload.get_untracked().form;
        let file = selected.get_untracked();
        let controller =
            SubmissionController::new(CloudinaryHost::new(config.clone()), BulkWasteApi::new(&config));
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = controller.submit(&form, file.as_ref()).await;
            upload.update(|s| s.finish_submit(&result));
            apply_actions(actions_for(&result), toasts, &navigate);
        });
    };

    let loading = move || upload.get().loading;
    let caption = move || selected_file_caption(selected.with(|f| f.as_ref().map(|f| f.name.clone())).as_deref());

    view! {
        <div class="upload-page">
            <div class="upload-card">
                <section class="upload-card__image">
                    <h2>"List Your Waste Item"</h2>
                    <p>"Upload an image of your waste item for recycling or reuse!"</p>
                    <label class="upload-image">
                        <input type="file" accept="image/*" on:change=on_image_change/>
                        <span class="upload-image__caption">{caption}</span>
                    </label>
                </section>
                <section class="upload-card__form">
                    <h1>"Upload Waste Item"</h1>
                    <p class="upload-card__subtitle">"Fill in the details below to list your waste item"</p>
                    <form class="upload-form" on:input=on_field_input on:submit=on_submit>
                        <div class="upload-form__grid">
                            <label class="upload-field">
                                "Item Name"
                                <input
                                    class="upload-input"
                                    type="text"
                                    name=FormField::Name.name()
                                    placeholder="Enter item name"
                                />
                            </label>
                            <label class="upload-field">
                                "Quantity"
                                <input
                                    class="upload-input"
                                    type="number"
                                    name=FormField::QuantityAvailable.name()
                                    placeholder="Enter quantity"
                                />
                            </label>
                            <label class="upload-field">
                                "Choose a unit"
                                <select class="upload-input" name=FormField::QuantityUnit.name()>
                                    <option value="">"Select"</option>
                                    {QuantityUnit::ALL
                                        .into_iter()
                                        .map(|unit| view! { <option value=unit.label()>{unit.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="upload-field">
                                "Price"
                                <input
                                    class="upload-input"
                                    type="number"
                                    name=FormField::Price.name()
                                    placeholder="Enter price"
                                />
                            </label>
                        </div>
                        <label class="upload-field">
                            "Item Description"
                            <textarea
                                class="upload-input upload-input--area"
                                name=FormField::Description.name()
                                placeholder="Describe your waste item"
                            ></textarea>
                        </label>
                        <Show when=move || upload.get().error.is_some()>
                            <p class="upload-form__error">{move || upload.get().error.unwrap_or_default()}</p>
                        </Show>
                        <button class="upload-button" type="submit" disabled=loading>
                            {move || submit_button_label(loading())}
                        </button>
                    </form>
                </section>
            </div>
        </div>
    }
}
