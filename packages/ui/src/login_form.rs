//! Phone + role sign-in card.

use dioxus::prelude::*;
use store::{Localized, Role, User};

use crate::auth::{login, use_auth};
use crate::club::use_config;
use crate::components::{Button, Input, Label};
use crate::i18n::{error_title, form_error_message, set_lang, use_lang, LangSignal};
use crate::icons::{FaGlobe, FaPhone, FaUsers};
use crate::toast::{notify, use_toasts, ToastKind};
use crate::Icon;

#[component]
pub fn LoginForm(on_success: EventHandler<User>) -> Element {
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let mut lang_signal = use_context::<LangSignal>();
    let lang = use_lang();
    let config = use_config();
    let delay_ms = config.auth.login_delay_ms;

    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Coach);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            match login(&mut auth, &phone(), role(), delay_ms).await {
                Ok(user) => {
                    notify(
                        &mut toasts,
                        ToastKind::Success,
                        lang.pick("مرحباً!", "Welcome!"),
                        lang.pick("تم تسجيل الدخول بنجاح", "Signed in successfully"),
                    );
                    on_success.call(user);
                }
                Err(e) => {
                    notify(
                        &mut toasts,
                        ToastKind::Error,
                        error_title(lang),
                        &form_error_message(&e, lang),
                    );
                }
            }
        });
    };

    let club_name = config.club.display_name(lang).to_string();
    let subtitle = lang.pick(
        "تسجيل الدخول إلى نظام إدارة التدريبات",
        "Sign in to the training management system",
    );
    let phone_label = lang.pick("رقم الجوال", "Phone number");
    let account_label = lang.pick("نوع الحساب", "Account type");
    let loading = auth().loading;
    let submit_label = if loading {
        lang.pick("جاري تسجيل الدخول...", "Signing in...")
    } else {
        lang.pick("تسجيل الدخول", "Sign in")
    };
    let other_lang = lang.pick("English", "العربية");

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                button {
                    class: "login-lang",
                    r#type: "button",
                    onclick: move |_| set_lang(&mut lang_signal, lang.toggled()),
                    Icon { icon: FaGlobe, width: 12, height: 12 }
                    span { "{other_lang}" }
                }
                div { class: "login-logo", Icon { icon: FaUsers, width: 28, height: 28 } }
                h1 { class: "login-title", "{club_name}" }
                p { class: "login-subtitle", "{subtitle}" }

                form {
                    class: "login-form",
                    onsubmit: handle_submit,

                    div {
                        class: "field",
                        Label {
                            html_for: "phone",
                            Icon { icon: FaPhone, width: 12, height: 12 }
                            span { "{phone_label}" }
                        }
                        Input {
                            id: "phone",
                            input_type: "tel",
                            placeholder: "05xxxxxxxx",
                            dir: Some("ltr"),
                            value: phone(),
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }

                    fieldset {
                        class: "field role-choice",
                        legend { class: "label", "{account_label}" }
                        for option in [Role::Coach, Role::Parent] {
                            label {
                                key: "{option}",
                                class: "radio",
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    value: "{option}",
                                    checked: role() == option,
                                    onchange: move |_| role.set(option),
                                }
                                span { {option.label(lang)} }
                            }
                        }
                    }

                    Button {
                        class: "w-full",
                        button_type: "submit",
                        disabled: loading,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
