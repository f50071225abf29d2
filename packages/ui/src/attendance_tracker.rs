//! Daily attendance sheet for coaches.

use chrono::NaiveDate;
use dioxus::prelude::*;
use store::attendance::AttendanceSheet;
use store::{AttendanceStatus, Lang, Localized};

use crate::auth::use_auth;
use crate::club::use_club;
use crate::components::{BackButton, Badge, Button, ButtonVariant, Card, StatCard};
use crate::i18n::{attendance_error_message, error_title, use_lang};
use crate::icons::{FaFloppyDisk, FaPaperPlane, FaUser};
use crate::time::{now_utc, today};
use crate::toast::{notify, use_toasts, ToastKind};
use crate::Icon;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSS class and label for a roster status badge.
pub(crate) fn status_badge(status: Option<AttendanceStatus>, lang: Lang) -> (&'static str, &'static str) {
    match status {
        Some(AttendanceStatus::Present) => ("badge-success", AttendanceStatus::Present.label(lang)),
        Some(AttendanceStatus::Absent) => ("badge-danger", AttendanceStatus::Absent.label(lang)),
        Some(AttendanceStatus::Visitor) => ("badge-info", AttendanceStatus::Visitor.label(lang)),
        None => ("badge-outline", lang.pick("في الانتظار", "Pending")),
    }
}

#[component]
pub fn AttendanceTracker(on_back: EventHandler<()>) -> Element {
    let mut club = use_club();
    let auth = use_auth();
    let mut toasts = use_toasts();
    let lang = use_lang();

    let mut date = use_signal(today);
    let mut sheet = use_signal(|| club.peek().attendance_sheet(today()));

    let mut change_date = move |raw: String| {
        let Ok(picked) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) else {
            return;
        };
        date.set(picked);
        sheet.set(club.peek().attendance_sheet(picked));
    };

    let handle_save = move |_: MouseEvent| {
        let coach_id = auth().user.map(|u| u.id).unwrap_or_default();
        let result = club.write().save_attendance(&sheet.read(), &coach_id, now_utc());
        match result {
            Ok(count) => {
                let description = match lang {
                    Lang::Ar => format!("تم حفظ حضور {count} طالب"),
                    Lang::En => format!("Saved attendance for {count} students"),
                };
                notify(
                    &mut toasts,
                    ToastKind::Success,
                    lang.pick("تم حفظ سجل الحضور", "Attendance saved"),
                    &description,
                );
            }
            Err(e) => notify(
                &mut toasts,
                ToastKind::Error,
                error_title(lang),
                &attendance_error_message(&e, lang),
            ),
        }
    };

    let handle_report = move |_: MouseEvent| {
        notify(
            &mut toasts,
            ToastKind::Info,
            lang.pick("إرسال التقرير", "Send report"),
            lang.pick(
                "سيتم إرسال تقرير الحضور لأولياء الأمور",
                "The attendance report will be sent to parents",
            ),
        );
    };

    let stats = sheet.read().stats();
    let date_value = date().format(DATE_FORMAT).to_string();
    let date_label = lang.pick("التاريخ:", "Date:");
    let title = lang.pick("تسجيل الحضور والغياب", "Attendance");
    let description = lang.pick(
        "اضغط على الأزرار لتسجيل حضور أو غياب الطلاب",
        "Use the buttons to mark each student present or absent",
    );
    let empty = lang.pick("لا توجد حصص في هذا اليوم", "No sessions on this day");
    let save = lang.pick("حفظ سجل الحضور", "Save attendance");
    let total_label = lang.pick("إجمالي الطلاب", "Total students");
    let present_label = AttendanceStatus::Present.label(lang);
    let absent_label = AttendanceStatus::Absent.label(lang);
    let pending_label = lang.pick("في الانتظار", "Pending");
    let report = lang.pick("إرسال تقرير لأولياء الأمور", "Send report to parents");

    rsx! {
        div {
            class: "tool",
            div {
                class: "tool-bar",
                BackButton { onclick: move |_| on_back.call(()) }
                label {
                    class: "date-picker",
                    span { "{date_label}" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{date_value}",
                        oninput: move |evt: FormEvent| change_date(evt.value()),
                    }
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "{total_label}", value: "{stats.total}", tone: "blue" }
                StatCard { label: "{present_label}", value: "{stats.present}", tone: "green" }
                StatCard { label: "{absent_label}", value: "{stats.absent}", tone: "red" }
                StatCard { label: "{pending_label}", value: "{stats.pending}", tone: "orange" }
            }
            if stats.visitor > 0 {
                p {
                    class: "muted",
                    {format!("{}: {}", AttendanceStatus::Visitor.label(lang), stats.visitor)}
                }
            }

            Card {
                title: title.to_string(),
                description: description.to_string(),
                if sheet.read().entries.is_empty() {
                    p { class: "muted", "{empty}" }
                }
                RosterList { sheet }
            }

            div {
                class: "tool-actions",
                Button {
                    class: "grow",
                    onclick: handle_save,
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    span { "{save}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "grow",
                    onclick: handle_report,
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    span { "{report}" }
                }
            }
        }
    }
}

#[component]
fn RosterList(sheet: Signal<AttendanceSheet>) -> Element {
    let mut sheet = sheet;
    let lang = use_lang();
    let entries = sheet.read().entries.clone();

    rsx! {
        ul {
            class: "roster",
            for entry in entries {
                li {
                    key: "{entry.student_id}",
                    class: "roster-row",
                    div {
                        class: "roster-student",
                        Icon { icon: FaUser, width: 24, height: 24 }
                        div {
                            p { class: "roster-name", "{entry.student_name}" }
                            div {
                                class: "roster-meta",
                                span { class: "muted", "{entry.time}" }
                                Badge { class: "badge-outline", {entry.level.label(lang)} }
                            }
                        }
                    }
                    div {
                        class: "roster-actions",
                        {
                            let (class, label) = status_badge(entry.status, lang);
                            rsx! { Badge { class: "{class}", "{label}" } }
                        }
                        for status in [AttendanceStatus::Present, AttendanceStatus::Absent, AttendanceStatus::Visitor] {
                            Button {
                                key: "{status.label(Lang::En)}",
                                variant: match status {
                                    AttendanceStatus::Present => ButtonVariant::Success,
                                    AttendanceStatus::Absent => ButtonVariant::Destructive,
                                    AttendanceStatus::Visitor => ButtonVariant::Outline,
                                },
                                disabled: entry.status == Some(status),
                                onclick: {
                                    let student_id = entry.student_id.clone();
                                    move |_: MouseEvent| {
                                        if let Err(e) = sheet.write().mark(&student_id, status) {
                                            tracing::warn!("{e}");
                                        }
                                    }
                                },
                                {status.label(lang)}
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

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge(None, Lang::Ar), ("badge-outline", "في الانتظار"));
        assert_eq!(
            status_badge(Some(AttendanceStatus::Present), Lang::En),
            ("badge-success", "Present")
        );
        assert_eq!(status_badge(Some(AttendanceStatus::Absent), Lang::Ar).1, "غائب");
    }
}
