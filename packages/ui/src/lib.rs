//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaWhatsapp;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const CLUB_CSS: Asset = asset!("/assets/styling/club.css");

mod storage;
pub use storage::make_store;

pub mod time;

mod auth;
pub use auth::{login, logout, use_auth, AuthProvider, AuthState};

pub mod i18n;
pub use i18n::{load_lang_from_storage, set_lang, use_lang, LangSignal};

mod club;
pub use club::{use_club, use_config, ClubProvider};

pub mod toast;
pub use toast::{notify, use_toasts, ToastKind, ToastProvider};

mod layout;
pub use layout::Layout;

mod login_form;
pub use login_form::LoginForm;

mod registration;
pub use registration::StudentRegistrationForm;

mod attendance_tracker;
pub use attendance_tracker::AttendanceTracker;

mod schedule_management;
pub use schedule_management::ScheduleManagement;

mod session_students;
pub use session_students::SessionStudents;

mod coach_dashboard;
pub use coach_dashboard::{CoachDashboard, CoachTab};

mod parent_dashboard;
pub use parent_dashboard::{next_session_label, ParentDashboard};
