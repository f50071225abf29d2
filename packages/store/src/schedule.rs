//! # Sessions and weekly schedules
//!
//! - [`NewSessionForm`] validates the coach's "add session" form.
//! - [`open_sessions_for`] is the session picker used during registration:
//!   sessions of the student's level that still have a free seat.
//! - [`sorted_week`] orders slots Sunday → Saturday, then by start time.
//! - [`next_occurrence`] finds the next time a weekly slot starts after a
//!   given instant, wrapping around the week.

use chrono::{Duration, NaiveDateTime};

use crate::error::FormError;
use crate::models::{new_id, DayOfWeek, Level, ScheduleSlot, Session, TimeRange};

/// Raw "add session" form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewSessionForm {
    pub day: Option<DayOfWeek>,
    pub level: Option<Level>,
    pub start_time: String,
    pub end_time: String,
    pub max_students: String,
}

impl NewSessionForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.day.is_none() {
            missing.push("day");
        }
        if self.level.is_none() {
            missing.push("level");
        }
        if self.start_time.trim().is_empty() {
            missing.push("start_time");
        }
        if self.end_time.trim().is_empty() {
            missing.push("end_time");
        }
        if self.max_students.trim().is_empty() {
            missing.push("max_students");
        }
        missing
    }

    /// Validate into a new, empty session. `max_capacity` bounds "max students".
    pub fn validate(&self, max_capacity: u32) -> Result<Session, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        let (Some(day), Some(level)) = (self.day, self.level) else {
            return Err(FormError::MissingFields(vec!["day", "level"]));
        };

        let max_students: u32 = self
            .max_students
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidCapacity(self.max_students.clone()))?;
        if max_students == 0 || max_students > max_capacity {
            return Err(FormError::InvalidCapacity(self.max_students.clone()));
        }

        let time = TimeRange::parse(&self.start_time, &self.end_time)?;

        Ok(Session {
            id: new_id(),
            day_of_week: day,
            time,
            level,
            max_students,
            enrolled: Vec::new(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sessions of `level` that still have at least one free seat.
pub fn open_sessions_for(sessions: &[Session], level: Level) -> Vec<&Session> {
    sessions
        .iter()
        .filter(|s| s.level == level && !s.is_full())
        .collect()
}

/// Sessions held on `day`, ordered by start time.
pub fn sessions_on(sessions: &[Session], day: DayOfWeek) -> Vec<&Session> {
    let mut found: Vec<&Session> = sessions.iter().filter(|s| s.day_of_week == day).collect();
    found.sort_by_key(|s| s.time.start);
    found
}

/// Active slots ordered by day (Sunday first) and start time.
pub fn sorted_week(slots: &[ScheduleSlot]) -> Vec<&ScheduleSlot> {
    let mut week: Vec<&ScheduleSlot> = slots.iter().filter(|s| s.is_active).collect();
    week.sort_by_key(|s| (s.day_of_week, s.time.start));
    week
}

/// The next start of any active slot strictly after `now`.
///
/// Looks at today and the following seven days, so a slot earlier today is
/// found again next week.
pub fn next_occurrence(slots: &[ScheduleSlot], now: NaiveDateTime) -> Option<NaiveDateTime> {
    (0..=7).find_map(|offset| {
        let date = now.date() + Duration::days(offset);
        let day = DayOfWeek::of(date);
        slots
            .iter()
            .filter(|s| s.is_active && s.day_of_week == day)
            .map(|s| date.and_time(s.time.start))
            .filter(|start| *start > now)
            .min()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session(id: &str, day: DayOfWeek, level: Level, max: u32, enrolled: usize) -> Session {
        Session {
            id: id.to_string(),
            day_of_week: day,
            time: TimeRange::hm((8, 0), (9, 0)),
            level,
            max_students: max,
            enrolled: (0..enrolled).map(|i| format!("st{i}")).collect(),
        }
    }

    fn slot(day: DayOfWeek, start: (u32, u32), active: bool) -> ScheduleSlot {
        ScheduleSlot {
            id: new_id(),
            student_id: "s".to_string(),
            day_of_week: day,
            time: TimeRange::hm(start, (start.0 + 1, start.1)),
            is_active: active,
        }
    }

    // 2024-01-14 was a Sunday
    fn sunday_at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_new_session_requires_every_field() {
        let form = NewSessionForm {
            day: Some(DayOfWeek::MONDAY),
            ..Default::default()
        };
        assert_eq!(
            form.validate(10),
            Err(FormError::MissingFields(vec![
                "level",
                "start_time",
                "end_time",
                "max_students"
            ]))
        );
    }

    #[test]
    fn test_new_session_capacity_bounds() {
        let mut form = NewSessionForm {
            day: Some(DayOfWeek::MONDAY),
            level: Some(Level::Intermediate),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            max_students: "0".to_string(),
        };
        assert!(matches!(form.validate(10), Err(FormError::InvalidCapacity(_))));
        form.max_students = "11".to_string();
        assert!(matches!(form.validate(10), Err(FormError::InvalidCapacity(_))));
        form.max_students = "4".to_string();

        let session = form.validate(10).unwrap();
        assert_eq!(session.max_students, 4);
        assert_eq!(session.current_students(), 0);
        assert_eq!(session.time.to_string(), "10:00 - 11:00");
    }

    #[test]
    fn test_open_sessions_filter_level_and_capacity() {
        let sessions = vec![
            session("1", DayOfWeek::SUNDAY, Level::Beginner, 5, 3),
            session("2", DayOfWeek::MONDAY, Level::Intermediate, 4, 2),
            session("3", DayOfWeek::TUESDAY, Level::Beginner, 6, 1),
            session("4", DayOfWeek::WEDNESDAY, Level::Advanced, 3, 3),
        ];
        let ids: Vec<_> = open_sessions_for(&sessions, Level::Beginner)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(open_sessions_for(&sessions, Level::Advanced).is_empty());
    }

    #[test]
    fn test_sorted_week_skips_inactive() {
        let slots = vec![
            slot(DayOfWeek::THURSDAY, (8, 0), true),
            slot(DayOfWeek::SUNDAY, (10, 0), true),
            slot(DayOfWeek::SUNDAY, (8, 0), true),
            slot(DayOfWeek::MONDAY, (8, 0), false),
        ];
        let week = sorted_week(&slots);
        assert_eq!(week.len(), 3);
        assert_eq!(week[0].day_of_week, DayOfWeek::SUNDAY);
        assert_eq!(week[0].time.start_label(), "08:00");
        assert_eq!(week[1].time.start_label(), "10:00");
        assert_eq!(week[2].day_of_week, DayOfWeek::THURSDAY);
    }

    #[test]
    fn test_next_occurrence_later_today() {
        let slots = vec![slot(DayOfWeek::SUNDAY, (16, 0), true)];
        assert_eq!(next_occurrence(&slots, sunday_at(9, 0)), Some(sunday_at(16, 0)));
    }

    #[test]
    fn test_next_occurrence_wraps_to_next_week() {
        let slots = vec![slot(DayOfWeek::SUNDAY, (8, 0), true)];
        let next = next_occurrence(&slots, sunday_at(8, 0)).unwrap();
        assert_eq!(next, sunday_at(8, 0) + Duration::days(7));
    }

    #[test]
    fn test_next_occurrence_picks_nearest_day() {
        let slots = vec![
            slot(DayOfWeek::THURSDAY, (8, 0), true),
            slot(DayOfWeek::TUESDAY, (8, 0), true),
            slot(DayOfWeek::MONDAY, (8, 0), false),
        ];
        let next = next_occurrence(&slots, sunday_at(20, 0)).unwrap();
        assert_eq!(DayOfWeek::of(next.date()), DayOfWeek::TUESDAY);
    }

    #[test]
    fn test_next_occurrence_none_without_active_slots() {
        let slots = vec![slot(DayOfWeek::MONDAY, (8, 0), false)];
        assert!(next_occurrence(&slots, sunday_at(8, 0)).is_none());
        assert!(next_occurrence(&[], sunday_at(8, 0)).is_none());
    }
}
