//! Page chrome for the signed-in screens.

use dioxus::prelude::*;
use store::Localized;

use crate::auth::{logout, use_auth};
use crate::club::use_config;
use crate::components::{Button, ButtonVariant};
use crate::i18n::{set_lang, use_lang, LangSignal};
use crate::icons::{FaGlobe, FaRightFromBracket, FaUsers};
use crate::Icon;

/// Header with title, club name, signed-in user, language toggle and logout.
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    let mut auth = use_auth();
    let mut lang_signal = use_context::<LangSignal>();
    let lang = use_lang();
    let config = use_config();

    let club_name = config.club.display_name(lang).to_string();
    let user = auth().user;
    let user_name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let role = user.as_ref().map(|u| u.role.label(lang)).unwrap_or_default();
    let other_lang = lang.pick("English", "العربية");
    let logout_label = lang.pick("تسجيل خروج", "Log out");

    rsx! {
        div {
            class: "app-shell",
            header {
                class: "app-header",
                div {
                    class: "app-header-inner",
                    div {
                        class: "app-brand",
                        div { class: "app-logo", Icon { icon: FaUsers, width: 22, height: 22 } }
                        div {
                            class: "app-titles",
                            h1 { class: "app-title", "{title}" }
                            p { class: "app-club", "{club_name}" }
                        }
                    }
                    div {
                        class: "app-actions",
                        div {
                            class: "app-user",
                            p { class: "app-user-name", "{user_name}" }
                            p { class: "app-user-role", "{role}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| set_lang(&mut lang_signal, lang.toggled()),
                            Icon { icon: FaGlobe, width: 14, height: 14 }
                            span { "{other_lang}" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "logout-button",
                            onclick: move |_| logout(&mut auth),
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            span { "{logout_label}" }
                        }
                    }
                }
            }
            main { class: "app-main", {children} }
        }
    }
}
