//! Persisted session: the bearer token and the signed-in user.

use contracts::system::auth::UserInfo;

use crate::shared::storage;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_KEY: &str = "auth_user";

pub fn save_session(access_token: &str, user: &UserInfo) {
    storage::set(ACCESS_TOKEN_KEY, access_token);
    storage::set_json(USER_KEY, user);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    storage::get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn get_user() -> Option<UserInfo> {
    storage::get_json(USER_KEY)
}

pub fn save_user(user: &UserInfo) {
    storage::set_json(USER_KEY, user);
}

/// Clear all authentication state
pub fn clear_session() {
    storage::clear(ACCESS_TOKEN_KEY);
    storage::clear(USER_KEY);
}
