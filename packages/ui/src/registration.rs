//! Student registration: student, parent, schedule and session sections.
//!
//! All four sections edit one shared [`RegistrationForm`] signal. Submitting
//! validates it through `store`; a failure leaves every field as typed.

use dioxus::prelude::*;
use store::registration::RegistrationForm;
use store::{DayOfWeek, Lang, Level, Localized};

use crate::club::{use_club, use_config};
use crate::components::{BackButton, Badge, Button, Card, Input, Label};
use crate::i18n::{error_title, field_label, form_error_message, schedule_error_message, use_lang};
use crate::icons::{FaCalendar, FaUser, FaUserPlus, FaUsers};
use crate::time::now_utc;
use crate::toast::{notify, use_toasts, ToastKind};
use crate::Icon;

#[component]
pub fn StudentRegistrationForm(on_back: EventHandler<()>) -> Element {
    let mut club = use_club();
    let mut toasts = use_toasts();
    let config = use_config();
    let lang = use_lang();
    let mut draft = use_signal(RegistrationForm::default);
    let mut missing = use_signal(Vec::<&'static str>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = match draft.read().validate(&config.students) {
            Ok(registration) => registration,
            Err(e) => {
                if let store::FormError::MissingFields(fields) = &e {
                    missing.set(fields.clone());
                }
                notify(&mut toasts, ToastKind::Error, error_title(lang), &form_error_message(&e, lang));
                return;
            }
        };
        missing.set(Vec::new());

        let done = club.write().register(registration, now_utc());
        for (_, e) in &done.rejected {
            notify(&mut toasts, ToastKind::Error, error_title(lang), &schedule_error_message(e, lang));
        }
        let description = match lang {
            Lang::Ar => format!("تم تسجيل الطالب {} بنجاح", done.student_name),
            Lang::En => format!("Student {} has been registered", done.student_name),
        };
        notify(
            &mut toasts,
            ToastKind::Success,
            lang.pick("تم التسجيل بنجاح!", "Registration complete!"),
            &description,
        );
        draft.write().reset();
    };

    let title = lang.pick("تسجيل طالب جديد", "Register a new student");
    let description = lang.pick(
        "أدخل بيانات الطالب وولي الأمر ومواعيد التدريب",
        "Enter the student, parent and training schedule details",
    );
    let submit = lang.pick("تسجيل الطالب", "Register student");
    let missing_labels = missing()
        .iter()
        .map(|key| field_label(key, lang))
        .collect::<Vec<_>>()
        .join(lang.pick("، ", ", "));

    rsx! {
        div {
            class: "tool",
            div { class: "tool-bar", BackButton { onclick: move |_| on_back.call(()) } }
            Card {
                title: title.to_string(),
                description: description.to_string(),
                form {
                    class: "registration-form",
                    onsubmit: handle_submit,
                    StudentInfoSection { draft }
                    ParentInfoSection { draft }
                    ScheduleSection { draft }
                    SessionSelection { draft }
                    if !missing_labels.is_empty() {
                        p { class: "form-missing", "{missing_labels}" }
                    }
                    Button {
                        class: "w-full",
                        button_type: "submit",
                        Icon { icon: FaUserPlus, width: 14, height: 14 }
                        span { "{submit}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StudentInfoSection(draft: Signal<RegistrationForm>) -> Element {
    let mut draft = draft;
    let lang = use_lang();
    let heading = lang.pick("بيانات الطالب", "Student details");
    let first = field_label("student_first_name", lang);
    let last = field_label("student_last_name", lang);
    let age = field_label("student_age", lang);
    let level_label = field_label("level", lang);
    let choose = lang.pick("اختر المستوى", "Choose a level");
    let current = draft.read().level.map(|l| l.as_str()).unwrap_or_default();

    rsx! {
        fieldset {
            class: "form-section",
            h3 { class: "form-section-title", Icon { icon: FaUser, width: 14, height: 14 } span { "{heading}" } }
            div {
                class: "form-grid",
                div {
                    class: "field",
                    Label { html_for: "student-first", "{first} *" }
                    Input {
                        id: "student-first",
                        value: draft.read().student_first_name.clone(),
                        oninput: move |evt: FormEvent| draft.write().student_first_name = evt.value(),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "student-last", "{last} *" }
                    Input {
                        id: "student-last",
                        value: draft.read().student_last_name.clone(),
                        oninput: move |evt: FormEvent| draft.write().student_last_name = evt.value(),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "student-age", "{age} *" }
                    Input {
                        id: "student-age",
                        input_type: "number",
                        value: draft.read().student_age.clone(),
                        oninput: move |evt: FormEvent| draft.write().student_age = evt.value(),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "student-level", "{level_label} *" }
                    select {
                        id: "student-level",
                        class: "input",
                        value: current,
                        onchange: move |evt: FormEvent| draft.write().set_level(evt.value().parse::<Level>().ok()),
                        option { value: "", "{choose}" }
                        for level in Level::ALL {
                            option { key: "{level.as_str()}", value: level.as_str(), {level.label(lang)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ParentInfoSection(draft: Signal<RegistrationForm>) -> Element {
    let mut draft = draft;
    let lang = use_lang();
    let heading = lang.pick("بيانات ولي الأمر", "Parent details");
    let first = field_label("parent_first_name", lang);
    let last = field_label("parent_last_name", lang);
    let phone = field_label("parent_phone", lang);

    rsx! {
        fieldset {
            class: "form-section",
            h3 { class: "form-section-title", Icon { icon: FaUsers, width: 14, height: 14 } span { "{heading}" } }
            div {
                class: "form-grid",
                div {
                    class: "field",
                    Label { html_for: "parent-first", "{first} *" }
                    Input {
                        id: "parent-first",
                        value: draft.read().parent_first_name.clone(),
                        oninput: move |evt: FormEvent| draft.write().parent_first_name = evt.value(),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "parent-last", "{last} *" }
                    Input {
                        id: "parent-last",
                        value: draft.read().parent_last_name.clone(),
                        oninput: move |evt: FormEvent| draft.write().parent_last_name = evt.value(),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "parent-phone", "{phone} *" }
                    Input {
                        id: "parent-phone",
                        input_type: "tel",
                        placeholder: "05xxxxxxxx",
                        dir: Some("ltr"),
                        value: draft.read().parent_phone.clone(),
                        oninput: move |evt: FormEvent| draft.write().parent_phone = evt.value(),
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleSection(draft: Signal<RegistrationForm>) -> Element {
    let mut draft = draft;
    let lang = use_lang();
    let heading = lang.pick("مواعيد التدريب", "Training schedule");
    let days = field_label("selected_days", lang);
    let start = field_label("start_time", lang);
    let end = field_label("end_time", lang);

    rsx! {
        fieldset {
            class: "form-section",
            h3 { class: "form-section-title", Icon { icon: FaCalendar, width: 14, height: 14 } span { "{heading}" } }
            div {
                class: "field",
                Label { "{days} *" }
                div {
                    class: "day-picker",
                    for day in DayOfWeek::all() {
                        button {
                            key: "{day.index()}",
                            r#type: "button",
                            class: if draft.read().is_day_selected(day) { "day-chip selected" } else { "day-chip" },
                            onclick: move |_| draft.write().toggle_day(day),
                            {day.label(lang)}
                        }
                    }
                }
            }
            div {
                class: "form-grid",
                div {
                    class: "field",
                    Label { html_for: "start-time", "{start} *" }
                    Input {
                        id: "start-time",
                        input_type: "time",
                        value: draft.read().start_time.clone(),
                        oninput: move |evt: FormEvent| draft.write().start_time = evt.value(),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "end-time", "{end} *" }
                    Input {
                        id: "end-time",
                        input_type: "time",
                        value: draft.read().end_time.clone(),
                        oninput: move |evt: FormEvent| draft.write().end_time = evt.value(),
                    }
                }
            }
        }
    }
}

/// Optional group sessions for the chosen level that still have seats.
#[component]
fn SessionSelection(draft: Signal<RegistrationForm>) -> Element {
    let mut draft = draft;
    let club = use_club();
    let lang = use_lang();
    let Some(level) = draft.read().level else {
        return rsx! {};
    };

    let heading = lang.pick("اختيار الحصص المتاحة", "Choose available sessions");
    let empty = lang.pick(
        "لا توجد حصص متاحة لهذا المستوى حالياً",
        "No open sessions for this level right now",
    );
    let available = lang.pick("متاحة", "Open");
    let rows: Vec<(String, String, String)> = club
        .read()
        .open_sessions(level)
        .into_iter()
        .map(|s| {
            let when = format!("{} - {}", s.day_of_week.label(lang), s.time);
            let seats = match lang {
                Lang::Ar => format!("المتاح: {} من {} مقاعد", s.available_seats(), s.max_students),
                Lang::En => format!("{} of {} seats free", s.available_seats(), s.max_students),
            };
            (s.id.clone(), when, seats)
        })
        .collect();

    rsx! {
        fieldset {
            class: "form-section",
            h3 { class: "form-section-title", Icon { icon: FaCalendar, width: 14, height: 14 } span { "{heading}" } }
            if rows.is_empty() {
                p { class: "muted", "{empty}" }
            }
            for (id, when, seats) in rows {
                label {
                    key: "{id}",
                    class: "session-option",
                    input {
                        r#type: "checkbox",
                        checked: draft.read().selected_sessions.contains(&id),
                        onchange: {
                            let id = id.clone();
                            move |_| draft.write().toggle_session(&id)
                        },
                    }
                    div {
                        class: "session-option-text",
                        p { class: "session-option-when", "{when}" }
                        p { class: "muted", "{seats}" }
                    }
                    Badge { class: "badge-success", "{available}" }
                }
            }
        }
    }
}
