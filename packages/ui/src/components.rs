//! Small building blocks shared by every screen.

use dioxus::prelude::*;

use crate::i18n::use_lang;
use crate::icons::FaArrowRight;
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Success,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button")] button_type: &'static str,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: button_type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] min: String,
    #[props(default)] max: String,
    #[props(default)] dir: Option<&'static str>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id,
            class: "input {class}",
            r#type: input_type,
            placeholder,
            value,
            min,
            max,
            dir,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

#[component]
pub fn Card(
    #[props(default)] class: String,
    title: Option<String>,
    description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "card {class}",
            if title.is_some() || description.is_some() {
                header {
                    class: "card-header",
                    if let Some(title) = title {
                        h2 { class: "card-title", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

#[component]
pub fn Badge(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        span { class: "badge {class}", {children} }
    }
}

/// Coloured number tile used on dashboards.
#[component]
pub fn StatCard(label: String, value: String, tone: &'static str) -> Element {
    rsx! {
        div {
            class: "stat-card tone-{tone}",
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}

/// "Back" button shown at the top of every coach tool.
#[component]
pub fn BackButton(onclick: EventHandler<()>) -> Element {
    let back = use_lang().pick("العودة", "Back");
    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            class: "back-button",
            onclick: move |_| onclick.call(()),
            span { class: "flip-ltr", Icon { icon: FaArrowRight, width: 14, height: 14 } }
            span { "{back}" }
        }
    }
}
