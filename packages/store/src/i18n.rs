//! Interface language and localized labels for domain values.
//!
//! Arabic is the default and renders right-to-left. UI chrome strings live in
//! the `ui` crate; this module only covers values that come from the model.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceStatus, DayOfWeek, Level, Role, WaitingStatus};

/// Storage key for the chosen language.
pub const LANG_STORAGE_KEY: &str = "sportClubLang";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    /// BCP 47 code for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "ar" => Some(Lang::Ar),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }

    /// Pick between an Arabic and an English string.
    pub fn pick(self, ar: &'static str, en: &'static str) -> &'static str {
        match self {
            Lang::Ar => ar,
            Lang::En => en,
        }
    }
}

/// A value with a human-readable label in each language.
pub trait Localized {
    fn label(&self, lang: Lang) -> &'static str;
}

impl Localized for Role {
    fn label(&self, lang: Lang) -> &'static str {
        match self {
            Role::Coach => lang.pick("مدرب", "Coach"),
            Role::Parent => lang.pick("ولي أمر", "Parent"),
        }
    }
}

impl Localized for Level {
    fn label(&self, lang: Lang) -> &'static str {
        match self {
            Level::Beginner => lang.pick("مبتدئ", "Beginner"),
            Level::Intermediate => lang.pick("متوسط", "Intermediate"),
            Level::Advanced => lang.pick("متقدم", "Advanced"),
        }
    }
}

impl Localized for DayOfWeek {
    fn label(&self, lang: Lang) -> &'static str {
        match self.index() {
            0 => lang.pick("الأحد", "Sunday"),
            1 => lang.pick("الاثنين", "Monday"),
            2 => lang.pick("الثلاثاء", "Tuesday"),
            3 => lang.pick("الأربعاء", "Wednesday"),
            4 => lang.pick("الخميس", "Thursday"),
            5 => lang.pick("الجمعة", "Friday"),
            _ => lang.pick("السبت", "Saturday"),
        }
    }
}

impl Localized for AttendanceStatus {
    fn label(&self, lang: Lang) -> &'static str {
        match self {
            AttendanceStatus::Present => lang.pick("حاضر", "Present"),
            AttendanceStatus::Absent => lang.pick("غائب", "Absent"),
            AttendanceStatus::Visitor => lang.pick("زائر", "Visitor"),
        }
    }
}

impl Localized for WaitingStatus {
    fn label(&self, lang: Lang) -> &'static str {
        match self {
            WaitingStatus::Pending => lang.pick("قيد المراجعة", "Pending"),
            WaitingStatus::Approved => lang.pick("مقبول", "Approved"),
            WaitingStatus::Rejected => lang.pick("مرفوض", "Rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_language() {
        assert_eq!(Lang::default(), Lang::Ar);
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Ar.toggled(), Lang::En);
        assert_eq!(Lang::from_code(" en "), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn test_every_day_has_distinct_labels() {
        for lang in [Lang::Ar, Lang::En] {
            let labels: Vec<_> = DayOfWeek::all().map(|d| d.label(lang)).collect();
            let mut unique = labels.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 7);
        }
        assert_eq!(DayOfWeek::SUNDAY.label(Lang::Ar), "الأحد");
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::Advanced.label(Lang::Ar), "متقدم");
        assert_eq!(Level::Beginner.label(Lang::En), "Beginner");
    }
}
