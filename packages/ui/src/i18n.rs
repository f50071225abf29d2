//! Interface language context.
//!
//! The chosen [`Lang`] lives in a [`LangSignal`] provided at the root. It is
//! persisted under [`store::i18n::LANG_STORAGE_KEY`] and mirrored onto the
//! document root as `lang`/`dir` attributes so the whole page flips between
//! right-to-left Arabic and left-to-right English.
//!
//! Error values from `store` are turned into user-facing text here.

use dioxus::prelude::*;
use store::i18n::LANG_STORAGE_KEY;
use store::{AttendanceError, FormError, KeyValueStore, Lang, ScheduleError};

use crate::storage::make_store;

pub type LangSignal = Signal<Lang>;

/// Current interface language.
pub fn use_lang() -> Lang {
    use_context::<LangSignal>()()
}

/// Restore the saved language, if any, and apply it to the document.
pub fn load_lang_from_storage(lang: &mut LangSignal) {
    let saved = make_store()
        .get(LANG_STORAGE_KEY)
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default();
    apply_lang(saved);
    lang.set(saved);
}

/// Switch language, persist the choice and apply it.
pub fn set_lang(lang: &mut LangSignal, next: Lang) {
    if let Err(e) = make_store().set(LANG_STORAGE_KEY, next.code()) {
        tracing::warn!("failed to persist language: {e}");
    }
    apply_lang(next);
    lang.set(next);
    tracing::debug!(lang = next.code(), "language changed");
}

/// Set `lang` and `dir` on the document root element.
pub fn apply_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", lang.code());
            let _ = root.set_attribute("dir", lang.dir());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;
}

/// Label of a form field key reported by [`FormError::MissingFields`].
pub fn field_label(key: &str, lang: Lang) -> &'static str {
    match key {
        "student_first_name" => lang.pick("الاسم الأول للطالب", "Student first name"),
        "student_last_name" => lang.pick("اسم العائلة للطالب", "Student last name"),
        "student_age" => lang.pick("العمر", "Age"),
        "level" => lang.pick("المستوى", "Level"),
        "parent_first_name" => lang.pick("الاسم الأول لولي الأمر", "Parent first name"),
        "parent_last_name" => lang.pick("اسم العائلة لولي الأمر", "Parent last name"),
        "parent_phone" => lang.pick("رقم جوال ولي الأمر", "Parent phone"),
        "selected_days" => lang.pick("أيام التدريب", "Training days"),
        "start_time" => lang.pick("وقت البداية", "Start time"),
        "end_time" => lang.pick("وقت النهاية", "End time"),
        "day" => lang.pick("اليوم", "Day"),
        "max_students" => lang.pick("الحد الأقصى للطلاب", "Max students"),
        _ => lang.pick("حقل", "Field"),
    }
}

pub fn form_error_message(error: &FormError, lang: Lang) -> String {
    match error {
        FormError::MissingFields(_) => {
            lang.pick("يرجى ملء جميع الحقول المطلوبة", "Please fill in all required fields").to_string()
        }
        FormError::MissingPhone => {
            lang.pick("يرجى إدخال رقم الجوال", "Please enter your phone number").to_string()
        }
        FormError::InvalidAge(_) => lang
            .pick("يرجى إدخال عمر صحيح", "Please enter a valid age")
            .to_string(),
        FormError::InvalidTime(raw) => match lang {
            Lang::Ar => format!("وقت غير صالح: {raw}"),
            Lang::En => format!("Invalid time: {raw}"),
        },
        FormError::TimeOrder => lang
            .pick(
                "يجب أن يكون وقت البداية قبل وقت النهاية",
                "Start time must be before end time",
            )
            .to_string(),
        FormError::InvalidCapacity(_) => lang
            .pick("عدد الطلاب غير صالح", "Invalid number of students")
            .to_string(),
        FormError::InvalidDay(_) => lang.pick("يوم غير صالح", "Invalid day").to_string(),
    }
}

pub fn schedule_error_message(error: &ScheduleError, lang: Lang) -> String {
    match error {
        ScheduleError::SessionNotFound(_) => {
            lang.pick("الحصة غير موجودة", "Session not found").to_string()
        }
        ScheduleError::StudentNotFound(_) => {
            lang.pick("الطالب غير موجود", "Student not found").to_string()
        }
        ScheduleError::EntryNotFound(_) => {
            lang.pick("الطلب غير موجود", "Request not found").to_string()
        }
        ScheduleError::SessionFull { .. } => {
            lang.pick("الحصة مكتملة العدد", "The session is full").to_string()
        }
        ScheduleError::LevelMismatch => lang
            .pick("مستوى الطالب لا يطابق مستوى الحصة", "Student level does not match the session")
            .to_string(),
        ScheduleError::AlreadyEnrolled => lang
            .pick("الطالب مسجل في الحصة بالفعل", "Student is already in this session")
            .to_string(),
        ScheduleError::NotEnrolled => lang
            .pick("الطالب غير مسجل في الحصة", "Student is not in this session")
            .to_string(),
    }
}

pub fn attendance_error_message(error: &AttendanceError, lang: Lang) -> String {
    match error {
        AttendanceError::NothingMarked => lang
            .pick("لم يتم تسجيل أي حضور بعد", "No attendance has been marked yet")
            .to_string(),
        AttendanceError::NotOnRoster(_) => lang
            .pick("الطالب غير موجود في القائمة", "Student is not on this roster")
            .to_string(),
    }
}

/// Title used on every error toast.
pub fn error_title(lang: Lang) -> &'static str {
    lang.pick("خطأ", "Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_form_field_has_labels() {
        let keys = [
            "student_first_name",
            "student_last_name",
            "student_age",
            "level",
            "parent_first_name",
            "parent_last_name",
            "parent_phone",
            "selected_days",
            "start_time",
            "end_time",
            "day",
            "max_students",
        ];
        for key in keys {
            assert_ne!(field_label(key, Lang::Ar), "حقل", "{key}");
            assert_ne!(field_label(key, Lang::En), "Field", "{key}");
        }
    }

    #[test]
    fn test_missing_fields_message() {
        let error = FormError::MissingFields(vec!["level"]);
        assert_eq!(form_error_message(&error, Lang::Ar), "يرجى ملء جميع الحقول المطلوبة");
        assert_eq!(
            form_error_message(&error, Lang::En),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_full_session_message() {
        let error = ScheduleError::SessionFull { max: 3 };
        assert_eq!(schedule_error_message(&error, Lang::Ar), "الحصة مكتملة العدد");
    }

    #[test]
    fn test_invalid_time_names_input() {
        let error = FormError::InvalidTime("25:00".to_string());
        assert_eq!(form_error_message(&error, Lang::En), "Invalid time: 25:00");
    }
}
