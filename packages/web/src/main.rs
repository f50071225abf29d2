use dioxus::prelude::*;

use store::{ClubConfig, Lang, Role, User};
use ui::{AuthProvider, ClubProvider, LangSignal, ToastProvider};
use views::{Coach, Login, Parent};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/coach")]
    Coach {},
    #[route("/parent")]
    Parent {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CLUB_TOML: &str = include_str!("../club.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

/// Where a visitor belongs given who is signed in.
fn home_route(user: Option<&User>) -> Route {
    let role = user.map(|u| u.role);
    let route = match role {
        None => Route::Login {},
        Some(Role::Coach) => Route::Coach {},
        Some(Role::Parent) => Route::Parent {},
    };
    tracing::debug!(?role, ?route, "home route");
    route
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClubConfig::from_toml_or_default(CLUB_TOML));
    let toast_ms = config.notifications.toast_duration_ms;

    let mut lang: LangSignal = use_context_provider(|| Signal::new(Lang::default()));
    use_effect(move || {
        ui::load_lang_from_storage(&mut lang);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::CLUB_CSS }

        ClubProvider {
            config,
            ToastProvider {
                duration_ms: toast_ms,
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to the signed-in user's dashboard, or to `/login`.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        nav.replace(home_route(auth().user.as_ref()));
    }

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u".to_string(),
            name: "n".to_string(),
            phone: "0500000000".to_string(),
            email: None,
            role,
            avatar: None,
        }
    }

    #[test]
    fn test_home_route_per_role() {
        assert_eq!(home_route(None), Route::Login {});
        assert_eq!(home_route(Some(&user(Role::Coach))), Route::Coach {});
        assert_eq!(home_route(Some(&user(Role::Parent))), Route::Parent {});
    }
}
