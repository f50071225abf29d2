//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::auth::{clear_user, load_user, mock_user, save_user, validate_phone};
use store::{FormError, Role, User};

use crate::storage::make_store;
use crate::time::{now_utc, sleep_ms};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while the saved session is restored and during sign-in.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the saved user on mount
    use_effect(move || {
        let user = load_user(&make_store());
        if let Some(user) = &user {
            tracing::info!(user = %user.id, role = %user.role, "restored session");
        }
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Sign in with any non-empty phone number after a simulated delay.
///
/// An empty phone fails immediately and leaves the state untouched.
pub async fn login(
    auth: &mut Signal<AuthState>,
    phone: &str,
    role: Role,
    delay_ms: u64,
) -> Result<User, FormError> {
    let phone = validate_phone(phone)?;

    auth.write().loading = true;
    sleep_ms(delay_ms).await;

    let user = mock_user(&phone, role, now_utc());
    if let Err(e) = save_user(&make_store(), &user) {
        tracing::warn!("failed to persist session: {e}");
    }
    tracing::info!(user = %user.id, role = %role, "signed in");
    auth.set(AuthState {
        user: Some(user.clone()),
        loading: false,
    });
    Ok(user)
}

pub fn logout(auth: &mut Signal<AuthState>) {
    clear_user(&make_store());
    if let Some(user) = &auth.peek().user {
        tracing::info!(user = %user.id, "signed out");
    }
    auth.set(AuthState {
        user: None,
        loading: false,
    });
}
