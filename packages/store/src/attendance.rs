//! # Attendance
//!
//! An [`AttendanceSheet`] is the coach's working copy of one day's roster.
//! Marks are held on the sheet until it is saved, at which point
//! [`AttendanceSheet::to_records`] produces one [`AttendanceRecord`] per
//! marked student. Unmarked entries are "pending" and produce nothing.
//!
//! The history helpers ([`status_on`], [`recent`], [`summarize`]) answer the
//! parent dashboard's questions over saved records.
//!
//! ## Counting
//!
//! | Status | Counts toward |
//! |--------|---------------|
//! | present | `present` and the attendance rate numerator and denominator |
//! | absent | `absent` and the rate denominator |
//! | visitor | `visitor` only |
//! | unmarked | `pending` (sheets only) |

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AttendanceError;
use crate::models::{new_id, AttendanceRecord, AttendanceStatus, Level, TimeRange};

/// One student expected on the sheet's date.
#[derive(Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub student_id: String,
    pub student_name: String,
    pub level: Level,
    pub time: TimeRange,
    /// `None` when the student attends a personal slot rather than a group session.
    pub session_id: Option<String>,
    pub status: Option<AttendanceStatus>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SheetStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub visitor: usize,
    pub pending: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceSheet {
    pub date: NaiveDate,
    pub entries: Vec<RosterEntry>,
}

impl AttendanceSheet {
    pub fn new(date: NaiveDate, mut entries: Vec<RosterEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.time
                .start
                .cmp(&b.time.start)
                .then_with(|| a.student_name.cmp(&b.student_name))
        });
        Self { date, entries }
    }

    /// Set the status of a student on the roster.
    pub fn mark(
        &mut self,
        student_id: &str,
        status: AttendanceStatus,
    ) -> Result<(), AttendanceError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.student_id == student_id)
            .ok_or_else(|| AttendanceError::NotOnRoster(student_id.to_string()))?;
        entry.status = Some(status);
        Ok(())
    }

    pub fn status_of(&self, student_id: &str) -> Option<AttendanceStatus> {
        self.entries
            .iter()
            .find(|e| e.student_id == student_id)
            .and_then(|e| e.status)
    }

    pub fn stats(&self) -> SheetStats {
        let mut stats = SheetStats {
            total: self.entries.len(),
            ..Default::default()
        };
        for entry in &self.entries {
            match entry.status {
                Some(AttendanceStatus::Present) => stats.present += 1,
                Some(AttendanceStatus::Absent) => stats.absent += 1,
                Some(AttendanceStatus::Visitor) => stats.visitor += 1,
                None => stats.pending += 1,
            }
        }
        stats
    }

    /// Records for every marked entry, attributed to `recorded_by`.
    pub fn to_records(
        &self,
        recorded_by: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        let records: Vec<AttendanceRecord> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry.status.map(|status| AttendanceRecord {
                    id: new_id(),
                    student_id: entry.student_id.clone(),
                    date: self.date,
                    status,
                    recorded_by: recorded_by.to_string(),
                    recorded_at: now,
                    notes: None,
                })
            })
            .collect();
        if records.is_empty() {
            return Err(AttendanceError::NothingMarked);
        }
        Ok(records)
    }
}

/// Saved status of a student on a date.
pub fn status_on(
    records: &[AttendanceRecord],
    student_id: &str,
    date: NaiveDate,
) -> Option<AttendanceStatus> {
    records
        .iter()
        .filter(|r| r.student_id == student_id && r.date == date)
        .max_by_key(|r| r.recorded_at)
        .map(|r| r.status)
}

/// The `count` most recent records of a student, newest first.
pub fn recent<'a>(
    records: &'a [AttendanceRecord],
    student_id: &str,
    count: usize,
) -> Vec<&'a AttendanceRecord> {
    let mut found: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.student_id == student_id)
        .collect();
    found.sort_by(|a, b| b.date.cmp(&a.date).then(b.recorded_at.cmp(&a.recorded_at)));
    found.truncate(count);
    found
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub visitor: u32,
}

impl AttendanceSummary {
    /// Percentage of present over present + absent, rounded. `0` with no data.
    pub fn rate(&self) -> u32 {
        let counted = self.present + self.absent;
        if counted == 0 {
            return 0;
        }
        (f64::from(self.present) * 100.0 / f64::from(counted)).round() as u32
    }
}

/// Count a student's records dated within `from..=to`.
pub fn summarize(
    records: &[AttendanceRecord],
    student_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AttendanceSummary {
    records
        .iter()
        .filter(|r| r.student_id == student_id && r.date >= from && r.date <= to)
        .fold(AttendanceSummary::default(), |mut sum, r| {
            match r.status {
                AttendanceStatus::Present => sum.present += 1,
                AttendanceStatus::Absent => sum.absent += 1,
                AttendanceStatus::Visitor => sum.visitor += 1,
            }
            sum
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn entry(id: &str, name: &str, start: u32) -> RosterEntry {
        RosterEntry {
            student_id: id.to_string(),
            student_name: name.to_string(),
            level: Level::Beginner,
            time: TimeRange::hm((start, 0), (start + 1, 0)),
            session_id: None,
            status: None,
        }
    }

    fn record(student: &str, date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: new_id(),
            student_id: student.to_string(),
            date,
            status,
            recorded_by: "coach_1".to_string(),
            recorded_at: Utc.from_utc_datetime(&date.and_hms_opt(18, 0, 0).unwrap()),
            notes: None,
        }
    }

    #[test]
    fn test_sheet_orders_by_time() {
        let sheet = AttendanceSheet::new(
            day(14),
            vec![entry("b", "B", 10), entry("a", "A", 8), entry("c", "C", 8)],
        );
        let ids: Vec<_> = sheet.entries.iter().map(|e| e.student_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_marking_updates_stats() {
        let mut sheet = AttendanceSheet::new(
            day(14),
            vec![entry("a", "A", 8), entry("b", "B", 8), entry("c", "C", 8), entry("d", "D", 8)],
        );
        assert_eq!(sheet.stats().pending, 4);

        sheet.mark("a", AttendanceStatus::Present).unwrap();
        sheet.mark("b", AttendanceStatus::Absent).unwrap();
        sheet.mark("c", AttendanceStatus::Visitor).unwrap();
        sheet.mark("a", AttendanceStatus::Absent).unwrap();

        assert_eq!(
            sheet.stats(),
            SheetStats {
                total: 4,
                present: 0,
                absent: 2,
                visitor: 1,
                pending: 1,
            }
        );
        assert_eq!(sheet.status_of("a"), Some(AttendanceStatus::Absent));
        assert_eq!(
            sheet.mark("zz", AttendanceStatus::Present),
            Err(AttendanceError::NotOnRoster("zz".to_string()))
        );
    }

    #[test]
    fn test_records_only_for_marked_entries() {
        let mut sheet = AttendanceSheet::new(day(14), vec![entry("a", "A", 8), entry("b", "B", 9)]);
        assert_eq!(
            sheet.to_records("coach_1", Utc::now()),
            Err(AttendanceError::NothingMarked)
        );

        sheet.mark("b", AttendanceStatus::Present).unwrap();
        let records = sheet.to_records("coach_1", Utc::now()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].student_id, "b");
        assert_eq!(records[0].date, day(14));
        assert_eq!(records[0].recorded_by, "coach_1");
    }

    #[test]
    fn test_recent_is_newest_first() {
        let records = vec![
            record("a", day(1), AttendanceStatus::Present),
            record("a", day(8), AttendanceStatus::Absent),
            record("b", day(9), AttendanceStatus::Present),
            record("a", day(3), AttendanceStatus::Present),
            record("a", day(5), AttendanceStatus::Visitor),
            record("a", day(7), AttendanceStatus::Present),
        ];
        let dates: Vec<_> = recent(&records, "a", 4).iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(8), day(7), day(5), day(3)]);
        assert!(recent(&records, "nobody", 4).is_empty());
    }

    #[test]
    fn test_status_on_prefers_latest_save() {
        let mut late = record("a", day(2), AttendanceStatus::Absent);
        late.recorded_at += Duration::hours(1);
        let records = vec![record("a", day(2), AttendanceStatus::Present), late];
        assert_eq!(status_on(&records, "a", day(2)), Some(AttendanceStatus::Absent));
        assert_eq!(status_on(&records, "a", day(3)), None);
    }

    #[test]
    fn test_summary_window_and_rate() {
        let records = vec![
            record("a", day(1), AttendanceStatus::Present),
            record("a", day(10), AttendanceStatus::Present),
            record("a", day(11), AttendanceStatus::Absent),
            record("a", day(12), AttendanceStatus::Present),
            record("a", day(13), AttendanceStatus::Visitor),
            record("b", day(12), AttendanceStatus::Absent),
        ];
        let summary = summarize(&records, "a", day(10), day(20));
        assert_eq!(
            summary,
            AttendanceSummary {
                present: 2,
                absent: 1,
                visitor: 1,
            }
        );
        // 2 / 3 = 66.7%
        assert_eq!(summary.rate(), 67);
    }

    #[test]
    fn test_rate_without_records_is_zero() {
        assert_eq!(AttendanceSummary::default().rate(), 0);
        let visitors_only = AttendanceSummary {
            visitor: 3,
            ..Default::default()
        };
        assert_eq!(visitors_only.rate(), 0);
    }
}
