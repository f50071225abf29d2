//! Read-only view of a parent's children.

use chrono::{Duration, NaiveDateTime};
use dioxus::prelude::*;
use store::schedule::{next_occurrence, sorted_week};
use store::{DayOfWeek, Lang, Localized, Student};

use crate::attendance_tracker::status_badge;
use crate::auth::use_auth;
use crate::club::{use_club, use_config};
use crate::components::{Badge, Button, ButtonVariant, Card};
use crate::i18n::use_lang;
use crate::icons::{FaBell, FaCalendar, FaClock, FaEnvelope, FaPhone, FaUser, FaWhatsapp};
use crate::layout::Layout;
use crate::time::{now_local, today};
use crate::Icon;

/// Human text for the next training start relative to `now`.
pub fn next_session_label(next: Option<NaiveDateTime>, now: NaiveDateTime, lang: Lang) -> String {
    let Some(next) = next else {
        return lang.pick("لا توجد حصص قادمة", "No upcoming sessions").to_string();
    };
    let clock = next.format("%H:%M");
    let date = next.date();
    if date == now.date() {
        match lang {
            Lang::Ar => format!("اليوم في تمام الساعة {clock}"),
            Lang::En => format!("Today at {clock}"),
        }
    } else if date == now.date() + Duration::days(1) {
        let day = DayOfWeek::of(date).label(lang);
        match lang {
            Lang::Ar => format!("غداً {day} في تمام الساعة {clock}"),
            Lang::En => format!("Tomorrow ({day}) at {clock}"),
        }
    } else {
        let day = DayOfWeek::of(date).label(lang);
        match lang {
            Lang::Ar => format!("{day} في تمام الساعة {clock}"),
            Lang::En => format!("{day} at {clock}"),
        }
    }
}

#[component]
pub fn ParentDashboard() -> Element {
    let auth = use_auth();
    let club = use_club();
    let lang = use_lang();

    let phone = auth().user.map(|u| u.phone).unwrap_or_default();
    let children: Vec<Student> = club
        .read()
        .children_of(&phone)
        .into_iter()
        .cloned()
        .collect();
    let title = lang.pick("لوحة تحكم ولي الأمر", "Parent dashboard");

    rsx! {
        Layout {
            title: "{title}",
            div {
                class: "parent-view",
                for child in children {
                    ChildPanel { key: "{child.id}", child: child.clone() }
                }
            }
        }
    }
}

#[component]
fn ChildPanel(child: Student) -> Element {
    let club = use_club();
    let config = use_config();
    let lang = use_lang();

    let schedule = club.read().schedule_for(&child.id);
    let next = next_session_label(next_occurrence(&schedule, now_local()), now_local(), lang);
    let details = match lang {
        Lang::Ar => format!("العمر: {} سنة • المستوى: {}", child.age, child.level.label(lang)),
        Lang::En => format!("Age: {} • Level: {}", child.age, child.level.label(lang)),
    };
    let next_title = lang.pick("الحصة القادمة", "Next session");

    rsx! {
        div {
            class: "child-panel",
            Card {
                class: "child-card",
                div {
                    class: "child-heading",
                    Icon { icon: FaUser, width: 18, height: 18 }
                    h2 { class: "card-title", "{child.name}" }
                }
                p { class: "muted", "{details}" }
            }
            Card {
                class: "next-session",
                div {
                    class: "next-session-body",
                    Icon { icon: FaBell, width: 28, height: 28 }
                    div {
                        h3 { class: "next-session-title", "{next_title}" }
                        p { class: "next-session-when", "{next}" }
                    }
                }
            }
            div {
                class: "two-col",
                WeeklySchedule { student_id: child.id.clone() }
                RecentAttendance { student_id: child.id.clone(), count: config.attendance.recent_count }
            }
            AttendanceStats { student_id: child.id.clone(), window_days: config.attendance.stats_window_days }
            ContactCoach {}
        }
    }
}

#[component]
fn WeeklySchedule(student_id: String) -> Element {
    let club = use_club();
    let lang = use_lang();
    let rows: Vec<(String, String, String)> = {
        let slots = club.read().schedule_for(&student_id);
        sorted_week(&slots)
            .into_iter()
            .map(|slot| (slot.id.clone(), slot.day_of_week.label(lang).to_string(), slot.time.to_string()))
            .collect()
    };

    let title = lang.pick("الجدول الأسبوعي", "Weekly schedule");
    let description = lang.pick("أوقات التدريبات المجدولة أسبوعياً", "Training times every week");
    let empty = lang.pick("لا توجد مواعيد تدريب", "No training times");

    rsx! {
        Card {
            title: title.to_string(),
            description: description.to_string(),
            if rows.is_empty() {
                p { class: "muted", "{empty}" }
            }
            ul {
                class: "week-list",
                for (id, day, time) in rows {
                    li {
                        key: "{id}",
                        class: "week-row",
                        span { class: "week-day", Icon { icon: FaCalendar, width: 12, height: 12 } " {day}" }
                        span { class: "week-time", Icon { icon: FaClock, width: 12, height: 12 } " {time}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentAttendance(student_id: String, count: usize) -> Element {
    let club = use_club();
    let lang = use_lang();
    let rows: Vec<(String, String, store::AttendanceStatus)> = club
        .read()
        .recent_attendance(&student_id, count)
        .into_iter()
        .map(|r| (r.id.clone(), r.date.format("%Y-%m-%d").to_string(), r.status))
        .collect();

    let title = lang.pick("سجل الحضور الأخير", "Recent attendance");
    let description = match lang {
        Lang::Ar => format!("آخر {count} حصص تدريبية"),
        Lang::En => format!("Last {count} sessions"),
    };
    let empty = lang.pick("لا يوجد سجل حضور بعد", "No attendance recorded yet");

    rsx! {
        Card {
            title: title.to_string(),
            description,
            if rows.is_empty() {
                p { class: "muted", "{empty}" }
            }
            ul {
                class: "week-list",
                for (id, date, status) in rows {
                    li {
                        key: "{id}",
                        class: "week-row",
                        span { class: "muted", dir: "ltr", "{date}" }
                        {
                            let (class, label) = status_badge(Some(status), lang);
                            rsx! { Badge { class: "{class}", "{label}" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendanceStats(student_id: String, window_days: u32) -> Element {
    let club = use_club();
    let lang = use_lang();
    let summary = club.read().attendance_summary(&student_id, today(), window_days);

    let title = lang.pick("إحصائيات الحضور", "Attendance statistics");
    let description = match lang {
        Lang::Ar => format!("آخر {window_days} يوم"),
        Lang::En => format!("Last {window_days} days"),
    };
    let rate_label = lang.pick("معدل الحضور", "Attendance rate");
    let attended = lang.pick("حصص حضر", "Attended");
    let missed = lang.pick("حصص غاب", "Missed");

    rsx! {
        Card {
            title: title.to_string(),
            description,
            div {
                class: "stat-row",
                div {
                    class: "stat-cell tone-green",
                    p { class: "stat-value", "{summary.rate()}%" }
                    p { class: "stat-label", "{rate_label}" }
                }
                div {
                    class: "stat-cell tone-blue",
                    p { class: "stat-value", "{summary.present}" }
                    p { class: "stat-label", "{attended}" }
                }
                div {
                    class: "stat-cell tone-red",
                    p { class: "stat-value", "{summary.absent}" }
                    p { class: "stat-label", "{missed}" }
                }
            }
        }
    }
}

/// Contact buttons. They carry no action.
#[component]
fn ContactCoach() -> Element {
    let lang = use_lang();
    let title = lang.pick("التواصل مع المدرب", "Contact the coach");
    let description = lang.pick("لأي استفسارات أو طلبات خاصة", "For questions or special requests");

    rsx! {
        Card {
            title: title.to_string(),
            description: description.to_string(),
            div {
                class: "contact-actions",
                Button {
                    variant: ButtonVariant::Success,
                    Icon { icon: FaWhatsapp, width: 14, height: 14 }
                    span { {lang.pick("واتساب", "WhatsApp")} }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    Icon { icon: FaPhone, width: 14, height: 14 }
                    span { {lang.pick("اتصال", "Call")} }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    span { {lang.pick("رسالة", "Message")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        // 2024-01-14 is a Sunday
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_no_upcoming_session() {
        assert_eq!(next_session_label(None, at(14, 7), Lang::En), "No upcoming sessions");
        assert_eq!(next_session_label(None, at(14, 7), Lang::Ar), "لا توجد حصص قادمة");
    }

    #[test]
    fn test_next_session_today() {
        let label = next_session_label(Some(at(14, 8)), at(14, 7), Lang::Ar);
        assert_eq!(label, "اليوم في تمام الساعة 08:00");
    }

    #[test]
    fn test_next_session_tomorrow() {
        let label = next_session_label(Some(at(15, 10)), at(14, 20), Lang::En);
        assert_eq!(label, "Tomorrow (Monday) at 10:00");
        let label = next_session_label(Some(at(14, 8)), at(13, 20), Lang::Ar);
        assert_eq!(label, "غداً الأحد في تمام الساعة 08:00");
    }

    #[test]
    fn test_next_session_later_in_week() {
        let label = next_session_label(Some(at(16, 8)), at(14, 9), Lang::En);
        assert_eq!(label, "Tuesday at 08:00");
    }
}
