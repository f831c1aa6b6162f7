use std::cell::RefCell;

use leptos::reactive::owner::Owner;

use super::*;
use crate::net::error::SubmitError;
use crate::state::toast::ToastKind;
use crate::submit::{PROFILE_PATH, SIGNIN_PATH, SUCCESS_MESSAGE};

#[test]
fn submit_button_label_reflects_loading() {
    assert_eq!(submit_button_label(true), "Submitting...");
    assert_eq!(submit_button_label(false), "List Waste Item");
}

#[test]
fn selected_file_caption_names_the_chosen_file() {
    assert_eq!(selected_file_caption(Some("bottles.jpg")), "Selected: bottles.jpg");
    assert_eq!(selected_file_caption(None), "No image selected");
}

// =============================================================
// apply_actions
// =============================================================

fn run_actions<T>(result: &Result<T, SubmitError>) -> (Vec<(ToastKind, String)>, Vec<String>) {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let visited = RefCell::new(Vec::new());
        let navigate = |path: &str, _options: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        apply_actions(actions_for(result), toasts, &navigate);

        let shown = toasts.get_untracked().toasts.into_iter().map(|t| (t.kind, t.message)).collect();
        (shown, visited.into_inner())
    })
}

#[test]
fn apply_actions_created_shows_one_toast_and_navigates_to_profile_once() {
    let (shown, visited) = run_actions::<()>(&Ok(()));
    assert_eq!(shown, vec![(ToastKind::Success, SUCCESS_MESSAGE.to_owned())]);
    assert_eq!(visited, vec![PROFILE_PATH.to_owned()]);
}

#[test]
fn apply_actions_auth_failure_navigates_only_to_signin() {
    let (shown, visited) = run_actions::<()>(&Err(SubmitError::auth()));
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, ToastKind::Error);
    assert_eq!(visited, vec![SIGNIN_PATH.to_owned()]);
}

#[test]
fn apply_actions_rejection_toasts_without_navigating() {
    let rejected = SubmitError::Validation { message: "Price too low".to_owned() };
    let (shown, visited) = run_actions::<()>(&Err(rejected));
    assert_eq!(shown, vec![(ToastKind::Error, "Price too low".to_owned())]);
    assert!(visited.is_empty());
}
