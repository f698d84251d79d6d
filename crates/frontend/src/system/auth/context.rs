use contracts::system::auth::{LoginRequest, Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// True until the stored token has been checked against the backend.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user_info.as_ref().map(|u| u.role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let access_token = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: access_token.is_some(),
        user_info: access_token.as_ref().and_then(|_| storage::get_user()),
        access_token,
    });

    // Validate the restored token by fetching the current user
    if auth_state.get_untracked().restoring {
        spawn_local(async move {
            match api::me().await {
                Ok(user_info) => {
                    storage::save_user(&user_info);
                    set_auth_state.update(|state| {
                        state.user_info = Some(user_info);
                        state.restoring = false;
                    });
                }
                Err(e) => {
                    log::warn!("stored session rejected: {e}");
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Role of the signed-in user, tracked.
pub fn current_role() -> Signal<Option<Role>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.role()))
}

/// Helper: Perform login
pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserInfo, String> {
    let response = api::login(&request).await?;
    storage::save_session(&response.access_token, &response.user);
    log::info!("signed in as {}", response.user.email);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user.clone()),
        restoring: false,
    });

    Ok(response.user)
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {e}");
    }
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_requires_token_and_user() {
        let mut state = AuthState {
            access_token: Some("t".into()),
            ..Default::default()
        };
        assert!(!state.is_authenticated());
        state.user_info = Some(UserInfo {
            id: "1".into(),
            email: "a@shop.test".into(),
            full_name: None,
            role: Role::Staff,
        });
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Staff));
    }
}
