//! Clock and timer helpers that work on both WASM and native builds.

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};

/// Current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn now_utc() -> chrono::DateTime<Utc> {
    Utc::now()
}

pub(crate) async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
