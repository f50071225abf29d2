//! Add and remove group sessions.

use dioxus::prelude::*;
use store::schedule::NewSessionForm;
use store::{DayOfWeek, Lang, Level, Localized, Session};

use crate::club::{use_club, use_config};
use crate::components::{BackButton, Badge, Button, ButtonVariant, Card, Input, Label};
use crate::i18n::{error_title, field_label, form_error_message, schedule_error_message, use_lang};
use crate::icons::{FaCalendar, FaPlus, FaTrash};
use crate::toast::{notify, use_toasts, ToastKind};
use crate::Icon;

/// "Full" / "Open" badge for a session.
pub(crate) fn capacity_badge(session: &Session, lang: Lang) -> (&'static str, &'static str) {
    if session.is_full() {
        ("badge-danger", lang.pick("مكتملة", "Full"))
    } else {
        ("badge-success", lang.pick("متاحة", "Open"))
    }
}

#[component]
pub fn ScheduleManagement(on_back: EventHandler<()>) -> Element {
    let mut club = use_club();
    let mut toasts = use_toasts();
    let config = use_config();
    let lang = use_lang();
    let max_capacity = config.sessions.max_capacity;

    let mut draft = use_signal(NewSessionForm::default);

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let session = match draft.read().validate(max_capacity) {
            Ok(session) => session,
            Err(e) => {
                notify(&mut toasts, ToastKind::Error, error_title(lang), &form_error_message(&e, lang));
                return;
            }
        };
        club.write().add_session(session);
        notify(
            &mut toasts,
            ToastKind::Success,
            lang.pick("تم إضافة الحصة", "Session added"),
            lang.pick("تم إضافة الحصة الجديدة بنجاح", "The new session was added"),
        );
        draft.write().reset();
    };

    let mut handle_delete = move |session_id: String| match club.write().remove_session(&session_id) {
        Ok(_) => notify(
            &mut toasts,
            ToastKind::Success,
            lang.pick("تم حذف الحصة", "Session deleted"),
            lang.pick("تم حذف الحصة بنجاح", "The session was deleted"),
        ),
        Err(e) => notify(&mut toasts, ToastKind::Error, error_title(lang), &schedule_error_message(&e, lang)),
    };

    let heading = lang.pick("إدارة الحصص", "Manage sessions");
    let add_title = lang.pick("إضافة حصة جديدة", "Add a new session");
    let list_title = lang.pick("الحصص المتاحة", "Scheduled sessions");
    let empty = lang.pick("لا توجد حصص مجدولة", "No sessions scheduled");
    let day_label = field_label("day", lang);
    let level_label = field_label("level", lang);
    let start_label = field_label("start_time", lang);
    let end_label = field_label("end_time", lang);
    let max_label = field_label("max_students", lang);
    let choose_day = lang.pick("اختر اليوم", "Choose a day");
    let choose_level = lang.pick("اختر المستوى", "Choose a level");
    let add = lang.pick("إضافة الحصة", "Add session");
    let current_day = draft.read().day.map(|d| d.index().to_string()).unwrap_or_default();
    let current_level = draft.read().level.map(|l| l.as_str()).unwrap_or_default();
    let sessions = club.read().sessions.clone();

    rsx! {
        div {
            class: "tool",
            div {
                class: "tool-bar",
                BackButton { onclick: move |_| on_back.call(()) }
                h2 { class: "tool-title", "{heading}" }
            }

            Card {
                title: add_title.to_string(),
                form {
                    class: "session-form",
                    onsubmit: handle_add,
                    div {
                        class: "form-grid",
                        div {
                            class: "field",
                            Label { html_for: "session-day", "{day_label} *" }
                            select {
                                id: "session-day",
                                class: "input",
                                value: "{current_day}",
                                onchange: move |evt: FormEvent| {
                                    draft.write().day = evt.value().parse::<u8>().ok().and_then(DayOfWeek::new);
                                },
                                option { value: "", "{choose_day}" }
                                for day in DayOfWeek::all() {
                                    option { key: "{day.index()}", value: "{day.index()}", {day.label(lang)} }
                                }
                            }
                        }
                        div {
                            class: "field",
                            Label { html_for: "session-level", "{level_label} *" }
                            select {
                                id: "session-level",
                                class: "input",
                                value: current_level,
                                onchange: move |evt: FormEvent| draft.write().level = evt.value().parse::<Level>().ok(),
                                option { value: "", "{choose_level}" }
                                for level in Level::ALL {
                                    option { key: "{level.as_str()}", value: level.as_str(), {level.label(lang)} }
                                }
                            }
                        }
                        div {
                            class: "field",
                            Label { html_for: "session-start", "{start_label} *" }
                            Input {
                                id: "session-start",
                                input_type: "time",
                                value: draft.read().start_time.clone(),
                                oninput: move |evt: FormEvent| draft.write().start_time = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            Label { html_for: "session-end", "{end_label} *" }
                            Input {
                                id: "session-end",
                                input_type: "time",
                                value: draft.read().end_time.clone(),
                                oninput: move |evt: FormEvent| draft.write().end_time = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "field",
                        Label { html_for: "session-max", "{max_label} *" }
                        Input {
                            id: "session-max",
                            input_type: "number",
                            min: "1",
                            max: "{max_capacity}",
                            value: draft.read().max_students.clone(),
                            oninput: move |evt: FormEvent| draft.write().max_students = evt.value(),
                        }
                    }
                    Button {
                        class: "w-full",
                        button_type: "submit",
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "{add}" }
                    }
                }
            }

            Card {
                title: list_title.to_string(),
                if sessions.is_empty() {
                    p { class: "muted empty", "{empty}" }
                }
                ul {
                    class: "session-list",
                    for session in sessions {
                        li {
                            key: "{session.id}",
                            class: "session-row",
                            div {
                                class: "session-info",
                                p {
                                    class: "session-name",
                                    Icon { icon: FaCalendar, width: 12, height: 12 }
                                    {format!("{} - {}", session.day_of_week.label(lang), session.level.label(lang))}
                                }
                                p { class: "muted", "{session.time}" }
                            }
                            div {
                                class: "session-capacity",
                                span { class: "capacity", "{session.current_students()}/{session.max_students}" }
                                {
                                    let (class, label) = capacity_badge(&session, lang);
                                    rsx! { Badge { class: "{class}", "{label}" } }
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let id = session.id.clone();
                                        move |_: MouseEvent| handle_delete(id.clone())
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::TimeRange;

    #[test]
    fn test_capacity_badge() {
        let mut session = Session {
            id: "s".to_string(),
            day_of_week: DayOfWeek::MONDAY,
            time: TimeRange::parse("10:00", "11:00").unwrap(),
            level: Level::Intermediate,
            max_students: 1,
            enrolled: Vec::new(),
        };
        assert_eq!(capacity_badge(&session, Lang::En), ("badge-success", "Open"));
        session.enrolled.push("a".to_string());
        assert_eq!(capacity_badge(&session, Lang::Ar), ("badge-danger", "مكتملة"));
    }
}
