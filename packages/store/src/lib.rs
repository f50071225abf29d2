//! # Store crate: club domain model and pure operations
//!
//! Everything the sports-club front-end knows about students, sessions and
//! attendance lives here, free of any UI dependency so it can be unit tested
//! natively.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Plain records: users, students, schedule slots, sessions, attendance, waiting list |
//! | [`i18n`] | Language selection and localized labels for domain enums |
//! | [`auth`] | Mock sign-in and persistence of the signed-in user |
//! | [`registration`] | Student registration form state and validation |
//! | [`schedule`] | Session form validation and weekly schedule queries |
//! | [`attendance`] | Attendance sheets, statistics and history queries |
//! | [`club`] | The in-memory club aggregate and its demo seed |
//! | [`config`] | `club.toml` configuration |
//! | [`kv`] | Key-value persistence (memory or browser local storage) |

pub mod attendance;
pub mod auth;
pub mod club;
pub mod config;
pub mod error;
pub mod i18n;
pub mod kv;
pub mod models;
pub mod registration;
pub mod schedule;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use club::ClubData;
pub use config::ClubConfig;
pub use error::{AttendanceError, ConfigError, FormError, ScheduleError, StorageError};
pub use i18n::{Lang, Localized};
pub use kv::KeyValueStore;
pub use models::{
    AttendanceRecord, AttendanceStatus, DayOfWeek, Level, Role, ScheduleSlot, Session, Student,
    TimeRange, User, WaitingListEntry, WaitingStatus,
};
