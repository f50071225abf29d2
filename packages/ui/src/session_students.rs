//! Enroll and remove students in a selected session.

use dioxus::prelude::*;
use store::{Lang, Localized};

use crate::club::use_club;
use crate::components::{BackButton, Badge, Button, ButtonVariant, Card, Label};
use crate::i18n::{error_title, schedule_error_message, use_lang};
use crate::icons::{FaPhone, FaTrash, FaUser, FaUserPlus};
use crate::schedule_management::capacity_badge;
use crate::toast::{notify, use_toasts, ToastKind};
use crate::Icon;

#[component]
pub fn SessionStudents(on_back: EventHandler<()>) -> Element {
    let mut club = use_club();
    let mut toasts = use_toasts();
    let lang = use_lang();

    let mut selected_session = use_signal(String::new);
    let mut student_to_add = use_signal(String::new);

    let handle_add = move |_: MouseEvent| {
        let session_id = selected_session();
        let student_id = student_to_add();
        if session_id.is_empty() || student_id.is_empty() {
            notify(
                &mut toasts,
                ToastKind::Error,
                error_title(lang),
                lang.pick("يرجى اختيار الحصة والطالب", "Please choose a session and a student"),
            );
            return;
        }
        let result = club.write().enroll(&session_id, &student_id);
        match result {
            Ok(()) => {
                let name = club.read().student(&student_id).map(|s| s.name.clone()).unwrap_or_default();
                let description = match lang {
                    Lang::Ar => format!("تم إضافة {name} للحصة بنجاح"),
                    Lang::En => format!("{name} was added to the session"),
                };
                notify(
                    &mut toasts,
                    ToastKind::Success,
                    lang.pick("تم إضافة الطالب", "Student added"),
                    &description,
                );
                student_to_add.set(String::new());
            }
            Err(e) => notify(&mut toasts, ToastKind::Error, error_title(lang), &schedule_error_message(&e, lang)),
        }
    };

    let mut handle_remove = move |student_id: String| {
        let session_id = selected_session();
        let name = club.read().student(&student_id).map(|s| s.name.clone()).unwrap_or_default();
        let result = club.write().unenroll(&session_id, &student_id);
        match result {
            Ok(()) => {
                let description = match lang {
                    Lang::Ar => format!("تم إزالة {name} من الحصة"),
                    Lang::En => format!("{name} was removed from the session"),
                };
                notify(
                    &mut toasts,
                    ToastKind::Success,
                    lang.pick("تم إزالة الطالب", "Student removed"),
                    &description,
                );
            }
            Err(e) => notify(&mut toasts, ToastKind::Error, error_title(lang), &schedule_error_message(&e, lang)),
        }
    };

    let data = club.read();
    let sessions: Vec<(String, String)> = data
        .sessions
        .iter()
        .map(|s| {
            let label = format!(
                "{} - {} ({}) {}/{}",
                s.day_of_week.label(lang),
                s.time,
                s.level.label(lang),
                s.current_students(),
                s.max_students
            );
            (s.id.clone(), label)
        })
        .collect();
    let session = data.session(&selected_session()).cloned();
    let enrolled: Vec<_> = data
        .enrolled_students(&selected_session())
        .into_iter()
        .cloned()
        .collect();
    let candidates: Vec<(String, String)> = data
        .candidates(&selected_session())
        .into_iter()
        .map(|s| (s.id.clone(), s.name.clone()))
        .collect();
    drop(data);

    let heading = lang.pick("إدارة طلاب الحصص", "Session students");
    let choose_session = lang.pick("اختر الحصة", "Choose a session");
    let choose_student = lang.pick("اختر الطالب", "Choose a student");
    let enrolled_title = lang.pick("الطلاب المسجلون", "Enrolled students");
    let add_title = lang.pick("إضافة طالب للحصة", "Add a student");
    let no_students = lang.pick("لا يوجد طلاب في هذه الحصة", "No students in this session");
    let no_candidates = lang.pick("لا يوجد طلاب متاحون بنفس المستوى", "No students of this level available");
    let add = lang.pick("إضافة", "Add");
    let is_full = session.as_ref().is_some_and(|s| s.is_full());

    rsx! {
        div {
            class: "tool",
            div {
                class: "tool-bar",
                BackButton { onclick: move |_| on_back.call(()) }
                h2 { class: "tool-title", "{heading}" }
            }

            Card {
                div {
                    class: "field",
                    Label { html_for: "pick-session", "{choose_session}" }
                    select {
                        id: "pick-session",
                        class: "input",
                        value: "{selected_session}",
                        onchange: move |evt: FormEvent| {
                            selected_session.set(evt.value());
                            student_to_add.set(String::new());
                        },
                        option { value: "", "{choose_session}" }
                        for (id, label) in sessions {
                            option { key: "{id}", value: "{id}", "{label}" }
                        }
                    }
                }
            }

            if let Some(session) = session {
                Card {
                    title: enrolled_title.to_string(),
                    div {
                        class: "session-capacity",
                        span { class: "capacity", "{session.current_students()}/{session.max_students}" }
                        {
                            let (class, label) = capacity_badge(&session, lang);
                            rsx! { Badge { class: "{class}", "{label}" } }
                        }
                    }
                    if enrolled.is_empty() {
                        p { class: "muted", "{no_students}" }
                    }
                    ul {
                        class: "roster",
                        for student in enrolled {
                            li {
                                key: "{student.id}",
                                class: "roster-row",
                                div {
                                    class: "roster-student",
                                    Icon { icon: FaUser, width: 20, height: 20 }
                                    div {
                                        p { class: "roster-name", "{student.name}" }
                                        p { class: "muted", "{student.parent_name}" }
                                        p {
                                            class: "muted",
                                            dir: "ltr",
                                            Icon { icon: FaPhone, width: 10, height: 10 }
                                            " {student.parent_phone}"
                                        }
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let id = student.id.clone();
                                        move |_: MouseEvent| handle_remove(id.clone())
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }

                Card {
                    title: add_title.to_string(),
                    if candidates.is_empty() {
                        p { class: "muted", "{no_candidates}" }
                    } else {
                        div {
                            class: "add-student",
                            select {
                                class: "input grow",
                                value: "{student_to_add}",
                                onchange: move |evt: FormEvent| student_to_add.set(evt.value()),
                                option { value: "", "{choose_student}" }
                                for (id, name) in candidates {
                                    option { key: "{id}", value: "{id}", "{name}" }
                                }
                            }
                            Button {
                                disabled: is_full || student_to_add().is_empty(),
                                onclick: handle_add,
                                Icon { icon: FaUserPlus, width: 14, height: 14 }
                                span { "{add}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
