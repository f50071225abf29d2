//! Coach home screen and tool switching.

use dioxus::prelude::*;
use store::attendance::RosterEntry;
use store::{Lang, Localized};

use crate::attendance_tracker::{status_badge, AttendanceTracker};
use crate::club::use_club;
use crate::components::{Badge, Button, ButtonVariant, Card, StatCard};
use crate::i18n::{error_title, schedule_error_message, use_lang};
use crate::icons::{FaCalendar, FaCircleCheck, FaClock, FaUserPlus, FaUsers, FaXmark};
use crate::layout::Layout;
use crate::registration::StudentRegistrationForm;
use crate::schedule_management::ScheduleManagement;
use crate::session_students::SessionStudents;
use crate::time::today;
use crate::toast::{notify, use_toasts, ToastKind};
use crate::Icon;

/// Which coach tool is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoachTab {
    #[default]
    Overview,
    Register,
    Attendance,
    Schedule,
    SessionStudents,
}

#[component]
pub fn CoachDashboard() -> Element {
    let lang = use_lang();
    let mut tab = use_signal(CoachTab::default);
    let back = move |_: ()| tab.set(CoachTab::Overview);
    let title = lang.pick("لوحة تحكم المدرب", "Coach dashboard");
    let current = tab();

    rsx! {
        Layout {
            title: "{title}",
            nav {
                class: "tabs",
                for item in CoachTab::ALL {
                    button {
                        key: "{item.label(Lang::En)}",
                        r#type: "button",
                        class: if item == current { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(item),
                        {item.label(lang)}
                    }
                }
            }
            {match current {
                CoachTab::Overview => rsx! { Overview { on_select: move |next| tab.set(next) } },
                CoachTab::Register => rsx! { StudentRegistrationForm { on_back: back } },
                CoachTab::Attendance => rsx! { AttendanceTracker { on_back: back } },
                CoachTab::Schedule => rsx! { ScheduleManagement { on_back: back } },
                CoachTab::SessionStudents => rsx! { SessionStudents { on_back: back } },
            }}
        }
    }
}

#[component]
fn Overview(on_select: EventHandler<CoachTab>) -> Element {
    let club = use_club();
    let lang = use_lang();
    let stats = club.read().overview(today());

    let total = lang.pick("إجمالي الطلاب", "Total students");
    let sessions_today = lang.pick("حصص اليوم", "Sessions today");
    let present = lang.pick("الحضور اليوم", "Present today");
    let absent = lang.pick("الغياب اليوم", "Absent today");

    rsx! {
        div {
            class: "overview",
            div {
                class: "stat-grid",
                StatCard { label: "{total}", value: "{stats.total_students}", tone: "blue" }
                StatCard { label: "{sessions_today}", value: "{stats.sessions_today}", tone: "green" }
                StatCard { label: "{present}", value: "{stats.present_today}", tone: "orange" }
                StatCard { label: "{absent}", value: "{stats.absent_today}", tone: "red" }
            }
            QuickActions { on_select }
            TodaySchedule {}
            WaitingList {}
        }
    }
}

#[component]
fn QuickActions(on_select: EventHandler<CoachTab>) -> Element {
    let lang = use_lang();
    let actions = [
        (CoachTab::Register, lang.pick("تسجيل طالب جديد", "Register a student"), "blue"),
        (CoachTab::Attendance, lang.pick("تسجيل الحضور والغياب", "Take attendance"), "green"),
        (CoachTab::Schedule, lang.pick("إدارة الحصص", "Manage sessions"), "purple"),
        (CoachTab::SessionStudents, lang.pick("إدارة طلاب الحصص", "Session students"), "orange"),
    ];

    rsx! {
        div {
            class: "quick-actions",
            for (target, label, tone) in actions {
                button {
                    key: "{label}",
                    r#type: "button",
                    class: "quick-action tone-{tone}",
                    onclick: move |_| on_select.call(target),
                    {action_icon(target)}
                    span { "{label}" }
                }
            }
        }
    }
}

fn action_icon(tab: CoachTab) -> Element {
    match tab {
        CoachTab::Register => rsx! { Icon { icon: FaUserPlus, width: 28, height: 28 } },
        CoachTab::Attendance => rsx! { Icon { icon: FaCircleCheck, width: 28, height: 28 } },
        CoachTab::Schedule => rsx! { Icon { icon: FaCalendar, width: 28, height: 28 } },
        CoachTab::SessionStudents | CoachTab::Overview => {
            rsx! { Icon { icon: FaUsers, width: 28, height: 28 } }
        }
    }
}

/// Every session held today with its enrolled students and the status
/// recorded so far.
#[component]
fn TodaySchedule() -> Element {
    let club = use_club();
    let lang = use_lang();
    let entries: Vec<(String, RosterEntry)> = club
        .read()
        .today_schedule(today())
        .into_iter()
        .map(|e| (format!("{}-{}", e.session_id.as_deref().unwrap_or_default(), e.student_id), e))
        .collect();

    let title = lang.pick("جدول اليوم", "Today's schedule");
    let description = lang.pick("الحصص المجدولة لليوم الحالي", "Sessions scheduled for today");
    let empty = lang.pick("لا توجد حصص اليوم", "No sessions today");

    rsx! {
        Card {
            title: title.to_string(),
            description: description.to_string(),
            if entries.is_empty() {
                p { class: "muted", "{empty}" }
            }
            ul {
                class: "today-list",
                for (key, entry) in entries {
                    li {
                        key: "{key}",
                        class: "today-row",
                        div {
                            class: "today-time",
                            Icon { icon: FaClock, width: 12, height: 12 }
                            span { "{entry.time}" }
                        }
                        div {
                            class: "today-student",
                            p { class: "roster-name", "{entry.student_name}" }
                            p { class: "muted", {entry.level.label(lang)} }
                        }
                        {
                            let (class, label) = status_badge(entry.status, lang);
                            rsx! { Badge { class: "{class}", "{label}" } }
                        }
                    }
                }
            }
        }
    }
}

/// Pending one-off visit requests.
#[component]
fn WaitingList() -> Element {
    let mut club = use_club();
    let mut toasts = use_toasts();
    let lang = use_lang();

    let mut resolve = move |entry_id: String, name: String, approve: bool| {
        let result = club.write().resolve_request(&entry_id, approve, None);
        match result {
            Ok(()) => {
                let title = if approve {
                    lang.pick("تمت الموافقة على الطلب", "Request approved")
                } else {
                    lang.pick("تم رفض الطلب", "Request rejected")
                };
                let description = match lang {
                    Lang::Ar => format!("تم تحديث طلب {name}"),
                    Lang::En => format!("The request of {name} was updated"),
                };
                notify(&mut toasts, ToastKind::Success, title, &description);
            }
            Err(e) => notify(&mut toasts, ToastKind::Error, error_title(lang), &schedule_error_message(&e, lang)),
        }
    };

    let rows: Vec<(String, String, String)> = {
        let data = club.read();
        data.pending_requests()
            .into_iter()
            .map(|entry| {
                let name = data
                    .student(&entry.student_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                (entry.id.clone(), name, entry.requested_date.format("%Y-%m-%d").to_string())
            })
            .collect()
    };

    if rows.is_empty() {
        return rsx! {};
    }

    let title = lang.pick("قائمة الانتظار", "Waiting list");
    let description = lang.pick("طلبات حضور حصص إضافية", "Requests to visit an extra session");
    let approve = lang.pick("قبول", "Approve");
    let reject = lang.pick("رفض", "Reject");

    rsx! {
        Card {
            title: title.to_string(),
            description: description.to_string(),
            ul {
                class: "waiting-list",
                for (id, name, date) in rows {
                    li {
                        key: "{id}",
                        class: "waiting-row",
                        div {
                            p { class: "roster-name", "{name}" }
                            p { class: "muted", dir: "ltr", "{date}" }
                        }
                        div {
                            class: "roster-actions",
                            Button {
                                variant: ButtonVariant::Success,
                                onclick: {
                                    let (id, name) = (id.clone(), name.clone());
                                    move |_: MouseEvent| resolve(id.clone(), name.clone(), true)
                                },
                                Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                span { "{approve}" }
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: {
                                    let (id, name) = (id.clone(), name.clone());
                                    move |_: MouseEvent| resolve(id.clone(), name.clone(), false)
                                },
                                Icon { icon: FaXmark, width: 12, height: 12 }
                                span { "{reject}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl CoachTab {
    pub const ALL: [CoachTab; 5] = [
        CoachTab::Overview,
        CoachTab::Register,
        CoachTab::Attendance,
        CoachTab::Schedule,
        CoachTab::SessionStudents,
    ];

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            CoachTab::Overview => lang.pick("نظرة عامة", "Overview"),
            CoachTab::Register => lang.pick("تسجيل طالب", "Register"),
            CoachTab::Attendance => lang.pick("الحضور", "Attendance"),
            CoachTab::Schedule => lang.pick("الحصص", "Sessions"),
            CoachTab::SessionStudents => lang.pick("طلاب الحصص", "Session students"),
        }
    }
}
