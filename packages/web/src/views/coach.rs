use dioxus::prelude::*;
use store::Role;
use ui::{use_auth, CoachDashboard};

use crate::home_route;

/// Coach dashboard, guarded by role.
#[component]
pub fn Coach() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if state.loading {
        return rsx! { div { class: "splash" } };
    }
    if state.user.as_ref().map(|u| u.role) != Some(Role::Coach) {
        nav.replace(home_route(state.user.as_ref()));
        return rsx! {};
    }

    rsx! {
        CoachDashboard {}
    }
}
