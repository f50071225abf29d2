//! Sign-in page.

use dioxus::prelude::*;
use store::User;
use ui::{use_auth, LoginForm};

use crate::home_route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: go straight to the dashboard.
    if !auth().loading && auth().user.is_some() {
        nav.replace(home_route(auth().user.as_ref()));
    }

    rsx! {
        LoginForm {
            on_success: move |user: User| {
                nav.replace(home_route(Some(&user)));
            },
        }
    }
}
