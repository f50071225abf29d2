//! # Club data: the in-memory aggregate
//!
//! [`ClubData`] owns every student, session, attendance record and waiting
//! list entry for the lifetime of the page. The UI holds one instance in a
//! signal and calls the methods here for every change, so capacity and
//! roster rules are enforced in a single place:
//!
//! - a student is enrolled in a session at most once
//! - enrollment never pushes a session past `max_students`
//! - only students of the session's level can be enrolled
//! - saving attendance replaces earlier records of the same student and date
//!
//! [`ClubData::demo`] seeds a small club so every screen has something to
//! show. Dates in the seed are relative to the day it is built.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::attendance::{self, AttendanceSheet, AttendanceSummary, RosterEntry};
use crate::error::{AttendanceError, ScheduleError};
use crate::models::{
    new_id, AttendanceRecord, AttendanceStatus, DayOfWeek, Level, ScheduleSlot, Session, Student,
    TimeRange, WaitingListEntry, WaitingStatus,
};
use crate::registration::Registration;
use crate::schedule;

/// Parent phone of the family shown to parents with no registered children.
pub const DEMO_PARENT_PHONE: &str = "0501234567";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClubData {
    pub students: Vec<Student>,
    pub sessions: Vec<Session>,
    pub attendance: Vec<AttendanceRecord>,
    pub waiting_list: Vec<WaitingListEntry>,
}

/// Numbers shown on the coach overview cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub total_students: usize,
    pub sessions_today: usize,
    pub present_today: usize,
    pub absent_today: usize,
}

/// Result of [`ClubData::register`].
#[derive(Clone, Debug, PartialEq)]
pub struct Registered {
    pub student_id: String,
    pub student_name: String,
    /// Session picks that could not be honoured, with the reason.
    pub rejected: Vec<(String, ScheduleError)>,
}

impl ClubData {
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    // ── Students ─────────────────────────────────────────────────────

    /// Add a validated registration and enroll it in the chosen sessions.
    pub fn register(&mut self, registration: Registration, now: DateTime<Utc>) -> Registered {
        let sessions = registration.sessions.clone();
        let student = registration.into_student(now);
        let student_id = student.id.clone();
        let student_name = student.name.clone();
        self.students.push(student);
        tracing::info!(student = %student_id, "registered student");

        let rejected = sessions
            .into_iter()
            .filter_map(|session_id| match self.enroll(&session_id, &student_id) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(session = %session_id, "enrollment skipped: {e}");
                    Some((session_id, e))
                }
            })
            .collect();

        Registered {
            student_id,
            student_name,
            rejected,
        }
    }

    /// Children of the parent with this phone, or the demo family when the
    /// phone matches nobody.
    pub fn children_of(&self, parent_phone: &str) -> Vec<&Student> {
        let phone = parent_phone.trim();
        let children: Vec<&Student> = self
            .students
            .iter()
            .filter(|s| s.parent_phone == phone)
            .collect();
        if !children.is_empty() {
            return children;
        }
        self.students
            .iter()
            .filter(|s| s.parent_phone == DEMO_PARENT_PHONE)
            .collect()
    }

    /// A student's weekly schedule: personal active slots plus every
    /// session they are enrolled in, without duplicates, sorted by day and
    /// start time.
    pub fn schedule_for(&self, student_id: &str) -> Vec<ScheduleSlot> {
        let mut slots: Vec<ScheduleSlot> = self
            .student(student_id)
            .map(|s| s.active_slots().cloned().collect())
            .unwrap_or_default();
        for session in self.sessions.iter().filter(|s| s.is_enrolled(student_id)) {
            let taken = slots
                .iter()
                .any(|slot| slot.day_of_week == session.day_of_week && slot.time == session.time);
            if !taken {
                slots.push(ScheduleSlot {
                    id: session.id.clone(),
                    student_id: student_id.to_string(),
                    day_of_week: session.day_of_week,
                    time: session.time,
                    is_active: true,
                });
            }
        }
        slots.sort_by_key(|s| (s.day_of_week, s.time.start));
        slots
    }

    // ── Sessions ─────────────────────────────────────────────────────

    pub fn add_session(&mut self, session: Session) {
        tracing::info!(session = %session.id, day = session.day_of_week.index(), "session added");
        self.sessions.push(session);
    }

    pub fn remove_session(&mut self, session_id: &str) -> Result<Session, ScheduleError> {
        let pos = self
            .sessions
            .iter()
            .position(|s| s.id == session_id)
            .ok_or_else(|| ScheduleError::SessionNotFound(session_id.to_string()))?;
        tracing::info!(session = %session_id, "session removed");
        Ok(self.sessions.remove(pos))
    }

    /// Sessions of the level with at least one free seat.
    pub fn open_sessions(&self, level: Level) -> Vec<&Session> {
        schedule::open_sessions_for(&self.sessions, level)
    }

    pub fn enroll(&mut self, session_id: &str, student_id: &str) -> Result<(), ScheduleError> {
        let level = self
            .student(student_id)
            .map(|s| s.level)
            .ok_or_else(|| ScheduleError::StudentNotFound(student_id.to_string()))?;
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| ScheduleError::SessionNotFound(session_id.to_string()))?;

        if session.is_enrolled(student_id) {
            return Err(ScheduleError::AlreadyEnrolled);
        }
        if session.level != level {
            return Err(ScheduleError::LevelMismatch);
        }
        if session.is_full() {
            return Err(ScheduleError::SessionFull {
                max: session.max_students,
            });
        }
        session.enrolled.push(student_id.to_string());
        tracing::info!(session = %session_id, student = %student_id, "student enrolled");
        Ok(())
    }

    pub fn unenroll(&mut self, session_id: &str, student_id: &str) -> Result<(), ScheduleError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| ScheduleError::SessionNotFound(session_id.to_string()))?;
        let pos = session
            .enrolled
            .iter()
            .position(|id| id == student_id)
            .ok_or(ScheduleError::NotEnrolled)?;
        session.enrolled.remove(pos);
        tracing::info!(session = %session_id, student = %student_id, "student removed from session");
        Ok(())
    }

    /// Students enrolled in the session, in enrollment order.
    pub fn enrolled_students(&self, session_id: &str) -> Vec<&Student> {
        self.session(session_id)
            .map(|session| {
                session
                    .enrolled
                    .iter()
                    .filter_map(|id| self.student(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Students who could join the session: same level, not yet enrolled.
    pub fn candidates(&self, session_id: &str) -> Vec<&Student> {
        let Some(session) = self.session(session_id) else {
            return Vec::new();
        };
        self.students
            .iter()
            .filter(|s| s.level == session.level && !session.is_enrolled(&s.id))
            .collect()
    }

    // ── Attendance ───────────────────────────────────────────────────

    /// The roster for `date` with statuses already saved for that date.
    ///
    /// Includes everyone enrolled in a session on that weekday and everyone
    /// with a personal slot on it. A student listed twice keeps their
    /// earliest time.
    pub fn attendance_sheet(&self, date: NaiveDate) -> AttendanceSheet {
        let day = DayOfWeek::of(date);
        let mut found: Vec<(&str, TimeRange, Option<&str>)> = Vec::new();
        for session in schedule::sessions_on(&self.sessions, day) {
            for student_id in &session.enrolled {
                found.push((student_id.as_str(), session.time, Some(session.id.as_str())));
            }
        }
        for student in &self.students {
            for slot in student.active_slots().filter(|s| s.day_of_week == day) {
                found.push((student.id.as_str(), slot.time, None));
            }
        }

        let mut by_student: HashMap<&str, (TimeRange, Option<&str>)> = HashMap::new();
        for (student_id, time, session_id) in found {
            let replace = by_student
                .get(student_id)
                .map_or(true, |(current, _)| time.start < current.start);
            if replace {
                by_student.insert(student_id, (time, session_id));
            }
        }

        let entries = by_student
            .into_iter()
            .filter_map(|(student_id, (time, session_id))| {
                let student = self.student(student_id)?;
                Some(RosterEntry {
                    student_id: student_id.to_string(),
                    student_name: student.name.clone(),
                    level: student.level,
                    time,
                    session_id: session_id.map(str::to_string),
                    status: attendance::status_on(&self.attendance, student_id, date),
                })
            })
            .collect();
        AttendanceSheet::new(date, entries)
    }

    /// One row per group session held on `date` and student enrolled in
    /// it, ordered by start time. A student in two sessions that day shows
    /// up twice.
    pub fn today_schedule(&self, date: NaiveDate) -> Vec<RosterEntry> {
        schedule::sessions_on(&self.sessions, DayOfWeek::of(date))
            .into_iter()
            .flat_map(|session| {
                let mut rows: Vec<RosterEntry> = session
                    .enrolled
                    .iter()
                    .filter_map(|student_id| self.student(student_id))
                    .map(|student| RosterEntry {
                        student_id: student.id.clone(),
                        student_name: student.name.clone(),
                        level: student.level,
                        time: session.time,
                        session_id: Some(session.id.clone()),
                        status: attendance::status_on(&self.attendance, &student.id, date),
                    })
                    .collect();
                rows.sort_by(|a, b| a.student_name.cmp(&b.student_name));
                rows
            })
            .collect()
    }

    /// Save the marked entries of a sheet. Returns how many were written.
    pub fn save_attendance(
        &mut self,
        sheet: &AttendanceSheet,
        recorded_by: &str,
        now: DateTime<Utc>,
    ) -> Result<usize, AttendanceError> {
        let records = sheet.to_records(recorded_by, now)?;
        self.attendance.retain(|old| {
            !(old.date == sheet.date && records.iter().any(|r| r.student_id == old.student_id))
        });
        let count = records.len();
        self.attendance.extend(records);
        tracing::info!(date = %sheet.date, count, "attendance saved");
        Ok(count)
    }

    pub fn recent_attendance(&self, student_id: &str, count: usize) -> Vec<&AttendanceRecord> {
        attendance::recent(&self.attendance, student_id, count)
    }

    /// Totals over the last `window_days` calendar days, `today` included.
    ///
    /// A window reaching past the earliest representable date covers all
    /// history.
    pub fn attendance_summary(
        &self,
        student_id: &str,
        today: NaiveDate,
        window_days: u32,
    ) -> AttendanceSummary {
        let span = Duration::days(i64::from(window_days.saturating_sub(1)));
        let from = today.checked_sub_signed(span).unwrap_or(NaiveDate::MIN);
        attendance::summarize(&self.attendance, student_id, from, today)
    }

    pub fn overview(&self, date: NaiveDate) -> Overview {
        let today: Vec<&AttendanceRecord> =
            self.attendance.iter().filter(|r| r.date == date).collect();
        let count = |status: AttendanceStatus| today.iter().filter(|r| r.status == status).count();
        Overview {
            total_students: self.students.len(),
            sessions_today: schedule::sessions_on(&self.sessions, DayOfWeek::of(date)).len(),
            present_today: count(AttendanceStatus::Present),
            absent_today: count(AttendanceStatus::Absent),
        }
    }

    // ── Waiting list ─────────────────────────────────────────────────

    /// File a pending request for `student_id` to attend on `date`.
    ///
    /// Besides the demo seed this is the only producer of waiting list
    /// entries. Coaches resolve them with [`ClubData::resolve_request`].
    pub fn request_visit(
        &mut self,
        student_id: &str,
        date: NaiveDate,
    ) -> Result<String, ScheduleError> {
        if self.student(student_id).is_none() {
            return Err(ScheduleError::StudentNotFound(student_id.to_string()));
        }
        let entry = WaitingListEntry {
            id: new_id(),
            student_id: student_id.to_string(),
            requested_date: date,
            status: WaitingStatus::Pending,
            coach_notes: None,
        };
        let id = entry.id.clone();
        self.waiting_list.push(entry);
        Ok(id)
    }

    /// Pending requests, earliest requested date first.
    pub fn pending_requests(&self) -> Vec<&WaitingListEntry> {
        let mut pending: Vec<&WaitingListEntry> = self
            .waiting_list
            .iter()
            .filter(|e| e.status == WaitingStatus::Pending)
            .collect();
        pending.sort_by_key(|e| e.requested_date);
        pending
    }

    pub fn resolve_request(
        &mut self,
        entry_id: &str,
        approve: bool,
        notes: Option<String>,
    ) -> Result<(), ScheduleError> {
        let entry = self
            .waiting_list
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| ScheduleError::EntryNotFound(entry_id.to_string()))?;
        entry.status = if approve {
            WaitingStatus::Approved
        } else {
            WaitingStatus::Rejected
        };
        entry.coach_notes = notes;
        tracing::info!(entry = %entry_id, approve, "waiting list entry resolved");
        Ok(())
    }

    // ── Demo seed ────────────────────────────────────────────────────

    pub fn demo(today: NaiveDate) -> Self {
        let created_at = DateTime::from_naive_utc_and_offset(
            (today - Duration::days(60)).and_time(NaiveTime::MIN),
            Utc,
        );
        let student = |id: &str, name: &str, age: u8, level: Level, parent: &str, phone: &str| Student {
            id: id.to_string(),
            name: name.to_string(),
            age,
            level,
            parent_id: format!("parent_{id}"),
            parent_name: parent.to_string(),
            parent_phone: phone.to_string(),
            schedule: Vec::new(),
            created_at,
        };
        let slot = |student_id: &str, day: DayOfWeek, time: TimeRange| ScheduleSlot {
            id: format!("slot_{student_id}_{}", u8::from(day)),
            student_id: student_id.to_string(),
            day_of_week: day,
            time,
            is_active: true,
        };
        let morning = TimeRange::hm((8, 0), (9, 0));

        let mut ahmed = student("1", "أحمد محمد", 12, Level::Advanced, "محمد أحمد", DEMO_PARENT_PHONE);
        ahmed.schedule = [DayOfWeek::SUNDAY, DayOfWeek::TUESDAY, DayOfWeek::THURSDAY]
            .into_iter()
            .map(|day| slot("1", day, morning))
            .collect();

        let students = vec![
            ahmed,
            student("2", "سارة علي", 10, Level::Beginner, "علي حسن", "0507654321"),
            student("3", "خالد عبدالله", 14, Level::Intermediate, "عبدالله خالد", "0509876543"),
            student("4", "فاطمة أحمد", 9, Level::Beginner, "أحمد فاطمة", "0502468135"),
            student("5", "عمر سالم", 13, Level::Intermediate, "سالم عمر", "0503691470"),
            student("6", "نورا حسن", 15, Level::Advanced, "حسن نورا", "0508529637"),
            student("7", "يوسف كريم", 8, Level::Beginner, "كريم يوسف", "0507418520"),
        ];

        let session = |id: &str,
                       day: DayOfWeek,
                       time: TimeRange,
                       level: Level,
                       max: u32,
                       enrolled: &[&str]| Session {
            id: id.to_string(),
            day_of_week: day,
            time,
            level,
            max_students: max,
            enrolled: enrolled.iter().map(|s| s.to_string()).collect(),
        };
        let sessions = vec![
            session("s1", DayOfWeek::SUNDAY, morning, Level::Beginner, 5, &["2", "7"]),
            session(
                "s2",
                DayOfWeek::MONDAY,
                TimeRange::hm((10, 0), (11, 0)),
                Level::Intermediate,
                4,
                &["3"],
            ),
            session(
                "s3",
                DayOfWeek::TUESDAY,
                TimeRange::hm((16, 0), (17, 0)),
                Level::Beginner,
                6,
                &["4"],
            ),
            session(
                "s4",
                DayOfWeek::WEDNESDAY,
                TimeRange::hm((9, 0), (10, 0)),
                Level::Advanced,
                2,
                &["1", "6"],
            ),
        ];

        let record = |student_id: &str, days_ago: i64, status: AttendanceStatus| {
            let date = today - Duration::days(days_ago);
            AttendanceRecord {
                id: new_id(),
                student_id: student_id.to_string(),
                date,
                status,
                recorded_by: "coach_demo".to_string(),
                recorded_at: DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc),
                notes: None,
            }
        };
        use AttendanceStatus::{Absent, Present, Visitor};
        let attendance = vec![
            record("1", 1, Present),
            record("1", 3, Present),
            record("1", 5, Absent),
            record("1", 8, Present),
            record("1", 12, Present),
            record("1", 15, Absent),
            record("1", 45, Present),
            record("2", 7, Present),
            record("3", 6, Absent),
            record("5", 6, Visitor),
        ];

        let waiting = |id: &str, student_id: &str, days_ahead: i64| WaitingListEntry {
            id: id.to_string(),
            student_id: student_id.to_string(),
            requested_date: today + Duration::days(days_ahead),
            status: WaitingStatus::Pending,
            coach_notes: None,
        };
        let waiting_list = vec![waiting("w1", "5", 2), waiting("w2", "7", 1)];

        Self {
            students,
            sessions,
            attendance,
            waiting_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudentConfig;
    use crate::registration::RegistrationForm;

    // 2024-01-14 was a Sunday
    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()
    }

    fn club() -> ClubData {
        ClubData::demo(sunday())
    }

    fn registration(level: Level, sessions: &[&str]) -> Registration {
        RegistrationForm {
            student_first_name: "ليلى".to_string(),
            student_last_name: "سمير".to_string(),
            student_age: "11".to_string(),
            level: Some(level),
            parent_first_name: "سمير".to_string(),
            parent_last_name: "ناصر".to_string(),
            parent_phone: "0551112222".to_string(),
            selected_days: vec![DayOfWeek::MONDAY],
            start_time: "17:00".to_string(),
            end_time: "18:00".to_string(),
            selected_sessions: sessions.iter().map(|s| s.to_string()).collect(),
        }
        .validate(&StudentConfig::default())
        .unwrap()
    }

    #[test]
    fn test_demo_is_consistent() {
        let club = club();
        assert_eq!(club.students.len(), 7);
        for session in &club.sessions {
            assert!(session.current_students() <= session.max_students);
            for id in &session.enrolled {
                assert_eq!(club.student(id).map(|s| s.level), Some(session.level));
            }
        }
        assert!(club.session("s4").unwrap().is_full());
    }

    #[test]
    fn test_register_enrolls_in_open_sessions() {
        let mut club = club();
        let done = club.register(registration(Level::Beginner, &["s1", "s3"]), Utc::now());
        assert!(done.rejected.is_empty());
        assert_eq!(done.student_name, "ليلى سمير");
        assert!(club.session("s1").unwrap().is_enrolled(&done.student_id));
        assert!(club.session("s3").unwrap().is_enrolled(&done.student_id));
        assert_eq!(club.students.len(), 8);
    }

    #[test]
    fn test_register_reports_rejected_sessions() {
        let mut club = club();
        let done = club.register(registration(Level::Advanced, &["s4", "nope"]), Utc::now());
        assert_eq!(
            done.rejected,
            vec![
                ("s4".to_string(), ScheduleError::SessionFull { max: 2 }),
                (
                    "nope".to_string(),
                    ScheduleError::SessionNotFound("nope".to_string())
                ),
            ]
        );
        // The student is still registered
        assert!(club.student(&done.student_id).is_some());
    }

    #[test]
    fn test_enroll_rules() {
        let mut club = club();
        assert_eq!(club.enroll("s1", "2"), Err(ScheduleError::AlreadyEnrolled));
        assert_eq!(club.enroll("s1", "3"), Err(ScheduleError::LevelMismatch));
        assert_eq!(club.enroll("s1", "x"), Err(ScheduleError::StudentNotFound("x".to_string())));
        assert_eq!(club.enroll("s9", "2"), Err(ScheduleError::SessionNotFound("s9".to_string())));

        club.enroll("s2", "5").unwrap();
        assert_eq!(club.session("s2").unwrap().current_students(), 2);
    }

    #[test]
    fn test_enroll_stops_at_capacity() {
        let mut club = club();
        club.sessions[0].max_students = 3;
        club.enroll("s1", "4").unwrap();
        assert_eq!(club.enroll("s1", "7"), Err(ScheduleError::AlreadyEnrolled));
        let extra = club.register(registration(Level::Beginner, &[]), Utc::now());
        assert_eq!(
            club.enroll("s1", &extra.student_id),
            Err(ScheduleError::SessionFull { max: 3 })
        );
        assert_eq!(club.session("s1").unwrap().current_students(), 3);
    }

    #[test]
    fn test_unenroll() {
        let mut club = club();
        club.unenroll("s1", "2").unwrap();
        assert!(!club.session("s1").unwrap().is_enrolled("2"));
        assert_eq!(club.unenroll("s1", "2"), Err(ScheduleError::NotEnrolled));
    }

    #[test]
    fn test_candidates_same_level_not_enrolled() {
        let club = club();
        let ids: Vec<_> = club.candidates("s1").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
        let names: Vec<_> = club.enrolled_students("s1").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["سارة علي", "يوسف كريم"]);
        assert!(club.candidates("missing").is_empty());
    }

    #[test]
    fn test_add_and_remove_session() {
        let mut club = club();
        let session = Session {
            id: "s5".to_string(),
            day_of_week: DayOfWeek::FRIDAY,
            time: TimeRange::hm((18, 0), (19, 0)),
            level: Level::Advanced,
            max_students: 3,
            enrolled: Vec::new(),
        };
        club.add_session(session);
        assert_eq!(club.open_sessions(Level::Advanced).len(), 1);
        assert_eq!(club.remove_session("s5").unwrap().id, "s5");
        assert!(matches!(
            club.remove_session("s5"),
            Err(ScheduleError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_children_fall_back_to_demo_family() {
        let club = club();
        let mine: Vec<_> = club.children_of("0509876543").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(mine, vec!["3"]);
        let demo: Vec<_> = club.children_of("0000000000").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(demo, vec!["1"]);
    }

    #[test]
    fn test_schedule_merges_slots_and_sessions() {
        let club = club();
        let week = club.schedule_for("1");
        let days: Vec<_> = week.iter().map(|s| s.day_of_week).collect();
        assert_eq!(
            days,
            vec![
                DayOfWeek::SUNDAY,
                DayOfWeek::TUESDAY,
                DayOfWeek::WEDNESDAY,
                DayOfWeek::THURSDAY
            ]
        );
        assert!(club.schedule_for("nobody").is_empty());
    }

    #[test]
    fn test_sunday_sheet() {
        let club = club();
        let sheet = club.attendance_sheet(sunday());
        let ids: Vec<_> = sheet.entries.iter().map(|e| e.student_id.as_str()).collect();
        // Session s1 (2, 7) and Ahmed's personal slot, all at 08:00
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"1") && ids.contains(&"2") && ids.contains(&"7"));
        assert_eq!(sheet.stats().pending, 3);
    }

    #[test]
    fn test_sheet_shows_saved_status() {
        let club = club();
        // Monday: session s2 with student 3, absent six days before the seed date
        let monday = sunday() - Duration::days(6);
        let sheet = club.attendance_sheet(monday);
        assert_eq!(sheet.entries.len(), 1);
        assert_eq!(sheet.status_of("3"), Some(AttendanceStatus::Absent));
    }

    #[test]
    fn test_save_replaces_same_day_records() {
        let mut club = club();
        let mut sheet = club.attendance_sheet(sunday());
        sheet.mark("2", AttendanceStatus::Present).unwrap();
        sheet.mark("7", AttendanceStatus::Absent).unwrap();
        assert_eq!(club.save_attendance(&sheet, "coach_1", Utc::now()), Ok(2));

        sheet.mark("2", AttendanceStatus::Absent).unwrap();
        club.save_attendance(&sheet, "coach_1", Utc::now()).unwrap();

        let on_day: Vec<_> = club
            .attendance
            .iter()
            .filter(|r| r.date == sunday() && r.student_id == "2")
            .collect();
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].status, AttendanceStatus::Absent);
        assert_eq!(on_day[0].recorded_by, "coach_1");

        let overview = club.overview(sunday());
        assert_eq!(overview.absent_today, 2);
        assert_eq!(overview.present_today, 0);
        assert_eq!(overview.sessions_today, 1);
        assert_eq!(overview.total_students, 7);
    }

    #[test]
    fn test_save_without_marks_fails() {
        let mut club = club();
        let sheet = club.attendance_sheet(sunday());
        assert_eq!(
            club.save_attendance(&sheet, "coach_1", Utc::now()),
            Err(AttendanceError::NothingMarked)
        );
    }

    #[test]
    fn test_demo_child_history() {
        let club = club();
        let recent = club.recent_attendance("1", 4);
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].date, sunday() - Duration::days(1));

        let summary = club.attendance_summary("1", sunday(), 30);
        assert_eq!(summary.present, 4);
        assert_eq!(summary.absent, 2);
        assert_eq!(summary.rate(), 67);

        // The 45-day-old record needs a 46-day window
        assert_eq!(club.attendance_summary("1", sunday(), 45).present, 4);
        assert_eq!(club.attendance_summary("1", sunday(), 46).present, 5);
    }

    #[test]
    fn test_summary_window_counts_today_as_first_day() {
        let mut club = club();
        let mut add = |days_ago: i64| {
            let date = sunday() - Duration::days(days_ago);
            club.attendance.push(AttendanceRecord {
                id: new_id(),
                student_id: "6".to_string(),
                date,
                status: AttendanceStatus::Present,
                recorded_by: "coach_1".to_string(),
                recorded_at: Utc::now(),
                notes: None,
            });
        };
        add(29);
        add(30);

        // 30 days ending today start 29 days back
        assert_eq!(club.attendance_summary("6", sunday(), 30).present, 1);
        assert_eq!(club.attendance_summary("6", sunday(), 31).present, 2);
        assert_eq!(club.attendance_summary("6", sunday(), 1).present, 0);
        assert_eq!(club.attendance_summary("6", sunday(), 0).present, 0);
    }

    #[test]
    fn test_summary_with_huge_window_covers_all_history() {
        let club = club();
        let summary = club.attendance_summary("1", sunday(), u32::MAX);
        assert_eq!(summary.present, 5);
        assert_eq!(summary.absent, 2);
    }

    #[test]
    fn test_today_schedule_has_a_row_per_session() {
        let mut club = club();
        club.sessions.push(Session {
            id: "s5".to_string(),
            day_of_week: DayOfWeek::SUNDAY,
            time: TimeRange::hm((17, 0), (18, 0)),
            level: Level::Beginner,
            max_students: 5,
            enrolled: vec!["2".to_string()],
        });
        club.attendance.push(AttendanceRecord {
            id: new_id(),
            student_id: "7".to_string(),
            date: sunday(),
            status: AttendanceStatus::Absent,
            recorded_by: "coach_1".to_string(),
            recorded_at: Utc::now(),
            notes: None,
        });

        let rows = club.today_schedule(sunday());
        let keys: Vec<_> = rows
            .iter()
            .map(|r| (r.session_id.as_deref().unwrap(), r.student_id.as_str()))
            .collect();
        // s1 lists سارة before يوسف; Ahmed's personal slot is not a session
        assert_eq!(keys, vec![("s1", "2"), ("s1", "7"), ("s5", "2")]);
        assert_eq!(rows[1].status, Some(AttendanceStatus::Absent));
        assert_eq!(rows[2].time.start, NaiveTime::from_hms_opt(17, 0, 0).unwrap());

        let monday = sunday() - Duration::days(6);
        assert_eq!(club.today_schedule(monday).len(), 1);
        assert!(club.today_schedule(sunday() - Duration::days(2)).is_empty());
    }

    #[test]
    fn test_waiting_list_flow() {
        let mut club = club();
        let pending: Vec<_> = club.pending_requests().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(pending, vec!["w2", "w1"]);

        club.resolve_request("w2", true, None).unwrap();
        club.resolve_request("w1", false, Some("full".to_string())).unwrap();
        assert!(club.pending_requests().is_empty());
        assert_eq!(club.waiting_list[0].coach_notes.as_deref(), Some("full"));

        let id = club.request_visit("4", sunday()).unwrap();
        assert_eq!(club.pending_requests()[0].id, id);
        assert!(club.request_visit("nobody", sunday()).is_err());
        assert!(matches!(
            club.resolve_request("nope", true, None),
            Err(ScheduleError::EntryNotFound(_))
        ));
    }
}
