//! # Student registration form
//!
//! [`RegistrationForm`] holds the raw text of the coach's "register a new
//! student" form exactly as typed. [`RegistrationForm::validate`] turns it into
//! a [`Registration`], or reports the first problem as a [`FormError`]:
//!
//! 1. any required field empty, or no training day selected → `MissingFields`
//! 2. age not an integer within the configured bounds → `InvalidAge`
//! 3. start/end not `HH:mm`, or start not before end → `InvalidTime` / `TimeOrder`
//!
//! A failed validation never touches the form, so the user can fix the input.

use chrono::{DateTime, Utc};

use crate::config::StudentConfig;
use crate::error::FormError;
use crate::models::{new_id, DayOfWeek, Level, ScheduleSlot, Student, TimeRange};

/// Raw form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub student_first_name: String,
    pub student_last_name: String,
    pub student_age: String,
    pub level: Option<Level>,
    pub parent_first_name: String,
    pub parent_last_name: String,
    pub parent_phone: String,
    pub selected_days: Vec<DayOfWeek>,
    pub start_time: String,
    pub end_time: String,
    /// Ids of group sessions to enroll in after registering.
    pub selected_sessions: Vec<String>,
}

/// A validated registration.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub student_name: String,
    pub age: u8,
    pub level: Level,
    pub parent_name: String,
    pub parent_phone: String,
    pub days: Vec<DayOfWeek>,
    pub time: TimeRange,
    pub sessions: Vec<String>,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl RegistrationForm {
    /// Add the day if absent, remove it if present.
    pub fn toggle_day(&mut self, day: DayOfWeek) {
        if let Some(pos) = self.selected_days.iter().position(|d| *d == day) {
            self.selected_days.remove(pos);
        } else {
            self.selected_days.push(day);
        }
    }

    pub fn is_day_selected(&self, day: DayOfWeek) -> bool {
        self.selected_days.contains(&day)
    }

    pub fn toggle_session(&mut self, session_id: &str) {
        if let Some(pos) = self.selected_sessions.iter().position(|s| s == session_id) {
            self.selected_sessions.remove(pos);
        } else {
            self.selected_sessions.push(session_id.to_string());
        }
    }

    /// Change the level, dropping session picks made for the previous one.
    pub fn set_level(&mut self, level: Option<Level>) {
        if self.level != level {
            self.selected_sessions.clear();
        }
        self.level = level;
    }

    /// Keys of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let text = [
            ("student_first_name", &self.student_first_name),
            ("student_last_name", &self.student_last_name),
            ("student_age", &self.student_age),
        ];
        missing.extend(text.iter().filter(|(_, v)| is_blank(v)).map(|(k, _)| *k));
        if self.level.is_none() {
            missing.push("level");
        }
        let text = [
            ("parent_first_name", &self.parent_first_name),
            ("parent_last_name", &self.parent_last_name),
            ("parent_phone", &self.parent_phone),
        ];
        missing.extend(text.iter().filter(|(_, v)| is_blank(v)).map(|(k, _)| *k));
        if self.selected_days.is_empty() {
            missing.push("selected_days");
        }
        if is_blank(&self.start_time) {
            missing.push("start_time");
        }
        if is_blank(&self.end_time) {
            missing.push("end_time");
        }
        missing
    }

    pub fn validate(&self, limits: &StudentConfig) -> Result<Registration, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        // missing_fields() guarantees a level
        let level = self
            .level
            .ok_or(FormError::MissingFields(vec!["level"]))?;

        let age: u8 = self
            .student_age
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidAge(self.student_age.clone()))?;
        if age < limits.min_age || age > limits.max_age {
            return Err(FormError::InvalidAge(self.student_age.clone()));
        }

        let time = TimeRange::parse(&self.start_time, &self.end_time)?;

        let mut days = self.selected_days.clone();
        days.sort();

        Ok(Registration {
            student_name: format!(
                "{} {}",
                self.student_first_name.trim(),
                self.student_last_name.trim()
            ),
            age,
            level,
            parent_name: format!(
                "{} {}",
                self.parent_first_name.trim(),
                self.parent_last_name.trim()
            ),
            parent_phone: self.parent_phone.trim().to_string(),
            days,
            time,
            sessions: self.selected_sessions.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Registration {
    /// Create the student record with one active slot per selected day.
    pub fn into_student(self, now: DateTime<Utc>) -> Student {
        let id = new_id();
        let schedule = self
            .days
            .iter()
            .map(|day| ScheduleSlot {
                id: new_id(),
                student_id: id.clone(),
                day_of_week: *day,
                time: self.time,
                is_active: true,
            })
            .collect();
        Student {
            id,
            name: self.student_name,
            age: self.age,
            level: self.level,
            parent_id: format!("parent_{}", new_id()),
            parent_name: self.parent_name,
            parent_phone: self.parent_phone,
            schedule,
            created_at: now,
        }
    }
}
