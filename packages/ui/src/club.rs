//! Club data and configuration contexts.

use dioxus::prelude::*;
use store::{ClubConfig, ClubData};

use crate::time::today;

/// Get the club data signal. Every screen reads and mutates the same instance.
pub fn use_club() -> Signal<ClubData> {
    use_context::<Signal<ClubData>>()
}

pub fn use_config() -> ClubConfig {
    use_context::<ClubConfig>()
}

/// Provides the configuration and a demo-seeded [`ClubData`] to its children.
#[component]
pub fn ClubProvider(config: ClubConfig, children: Element) -> Element {
    use_context_provider(|| config);
    use_context_provider(|| {
        let data = ClubData::demo(today());
        tracing::debug!(
            students = data.students.len(),
            sessions = data.sessions.len(),
            "seeded club data"
        );
        Signal::new(data)
    });

    rsx! {
        {children}
    }
}
