//! # Domain models for the club
//!
//! Plain records shared by every screen. They are `Serialize + Deserialize`
//! so the signed-in [`User`] can be written to local storage as JSON and so
//! demo data can be inspected or exported.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in account, either a coach or a parent. |
//! | [`Student`] | A registered trainee with parent contact details and personal weekly slots. |
//! | [`ScheduleSlot`] | One weekly training time of a student. |
//! | [`Session`] | A recurring group slot at a given level with a capacity limit. |
//! | [`AttendanceRecord`] | The saved status of one student on one date. |
//! | [`WaitingListEntry`] | A request for a one-off visit, reviewed by a coach. |
//!
//! Days use [`DayOfWeek`], where Sunday is `0` and Saturday is `6`. Times of day
//! are `HH:mm` strings on the wire and [`chrono::NaiveTime`] in memory.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Generate a fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Coach,
    Parent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Coach => "coach",
            Role::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coach" => Ok(Role::Coach),
            "parent" => Ok(Role::Parent),
            _ => Err(()),
        }
    }
}

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Skill level of a student or a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

/// Day of the week, `0` = Sunday through `6` = Saturday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: DayOfWeek = DayOfWeek(0);
    pub const MONDAY: DayOfWeek = DayOfWeek(1);
    pub const TUESDAY: DayOfWeek = DayOfWeek(2);
    pub const WEDNESDAY: DayOfWeek = DayOfWeek(3);
    pub const THURSDAY: DayOfWeek = DayOfWeek(4);
    pub const FRIDAY: DayOfWeek = DayOfWeek(5);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);

    pub fn new(index: u8) -> Option<Self> {
        (index < 7).then_some(DayOfWeek(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// All seven days, starting on Sunday.
    pub fn all() -> impl Iterator<Item = DayOfWeek> {
        (0..7).map(DayOfWeek)
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    pub fn weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        DayOfWeek(day.num_days_from_sunday() as u8)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = FormError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        DayOfWeek::new(index).ok_or(FormError::InvalidDay(index))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

/// Parse an `HH:mm` (or `HH:mm:ss`, as some time pickers emit) string.
pub fn parse_clock(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .ok()
}

/// A start/end time of day where start is strictly before end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "clock")]
    pub start: NaiveTime,
    #[serde(with = "clock")]
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, FormError> {
        if start >= end {
            return Err(FormError::TimeOrder);
        }
        Ok(Self { start, end })
    }

    /// Parse two `HH:mm` strings into a range.
    pub fn parse(start: &str, end: &str) -> Result<Self, FormError> {
        let s = parse_clock(start).ok_or_else(|| FormError::InvalidTime(start.to_string()))?;
        let e = parse_clock(end).ok_or_else(|| FormError::InvalidTime(end.to_string()))?;
        Self::new(s, e)
    }

    /// Build a range from hour/minute pairs. Used for seed data.
    pub(crate) fn hm(start: (u32, u32), end: (u32, u32)) -> Self {
        let at = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        Self {
            start: at(start),
            end: at(end),
        }
    }

    pub fn start_label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_label(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_label(), self.end_label())
    }
}

mod clock {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).ok_or_else(|| D::Error::custom(format!("invalid time {raw:?}")))
    }
}

/// One weekly training time of a student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: String,
    pub student_id: String,
    pub day_of_week: DayOfWeek,
    pub time: TimeRange,
    pub is_active: bool,
}

/// A registered trainee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub level: Level,
    pub parent_id: String,
    pub parent_name: String,
    pub parent_phone: String,
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn active_slots(&self) -> impl Iterator<Item = &ScheduleSlot> {
        self.schedule.iter().filter(|slot| slot.is_active)
    }
}

/// Saved attendance status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Visitor,
}

/// Attendance of one student on one date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Id of the coach who recorded it.
    pub recorded_by: String,
    pub recorded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitingStatus {
    Pending,
    Approved,
    Rejected,
}

/// A request for a one-off visit on a given date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaitingListEntry {
    pub id: String,
    pub student_id: String,
    pub requested_date: NaiveDate,
    pub status: WaitingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_notes: Option<String>,
}

/// A recurring group slot with a capacity limit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub day_of_week: DayOfWeek,
    pub time: TimeRange,
    pub level: Level,
    pub max_students: u32,
    /// Ids of enrolled students, in enrollment order.
    #[serde(default)]
    pub enrolled: Vec<String>,
}

impl Session {
    pub fn current_students(&self) -> u32 {
        self.enrolled.len() as u32
    }

    pub fn is_full(&self) -> bool {
        self.current_students() >= self.max_students
    }

    pub fn available_seats(&self) -> u32 {
        self.max_students.saturating_sub(self.current_students())
    }

    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_bounds() {
        assert_eq!(DayOfWeek::new(0), Some(DayOfWeek::SUNDAY));
        assert_eq!(DayOfWeek::new(6), Some(DayOfWeek::SATURDAY));
        assert!(DayOfWeek::new(7).is_none());
        assert_eq!(DayOfWeek::try_from(9u8), Err(FormError::InvalidDay(9)));
        assert_eq!(DayOfWeek::all().count(), 7);
    }

    #[test]
    fn test_day_of_week_from_date() {
        // 2024-01-14 was a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(DayOfWeek::of(sunday), DayOfWeek::SUNDAY);
        assert_eq!(DayOfWeek::of(sunday.succ_opt().unwrap()), DayOfWeek::MONDAY);
        assert_eq!(DayOfWeek::SATURDAY.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_time_range_parse() {
        let range = TimeRange::parse("08:00", "09:30").unwrap();
        assert_eq!(range.to_string(), "08:00 - 09:30");
        assert!(TimeRange::parse("08:00:00", "09:00:00").is_ok());
        assert_eq!(TimeRange::parse("09:00", "08:00"), Err(FormError::TimeOrder));
        assert_eq!(TimeRange::parse("09:00", "09:00"), Err(FormError::TimeOrder));
        assert_eq!(
            TimeRange::parse("nine", "10:00"),
            Err(FormError::InvalidTime("nine".to_string()))
        );
    }

    #[test]
    fn test_session_capacity() {
        let mut session = Session {
            id: "s1".to_string(),
            day_of_week: DayOfWeek::SUNDAY,
            time: TimeRange::hm((8, 0), (9, 0)),
            level: Level::Beginner,
            max_students: 2,
            enrolled: vec!["a".to_string()],
        };
        assert!(!session.is_full());
        assert_eq!(session.available_seats(), 1);
        session.enrolled.push("b".to_string());
        assert!(session.is_full());
        assert_eq!(session.available_seats(), 0);
        assert!(session.is_enrolled("b"));
    }

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: "coach_1".to_string(),
            name: "Coach".to_string(),
            phone: "0500000000".to_string(),
            email: None,
            role: Role::Coach,
            avatar: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "coach");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_slot_serializes_clock_strings() {
        let slot = ScheduleSlot {
            id: "x".to_string(),
            student_id: "s".to_string(),
            day_of_week: DayOfWeek::TUESDAY,
            time: TimeRange::hm((16, 0), (17, 0)),
            is_active: true,
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["day_of_week"], 2);
        assert_eq!(json["time"]["start"], "16:00");
        let back: ScheduleSlot = serde_json::from_value(json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_level_and_role_from_str() {
        assert_eq!("advanced".parse::<Level>(), Ok(Level::Advanced));
        assert!("expert".parse::<Level>().is_err());
        assert_eq!("parent".parse::<Role>(), Ok(Role::Parent));
    }
}
