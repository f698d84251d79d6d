use contracts::system::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    ResetPasswordRequest, UserInfo,
};

use crate::shared::api_utils;

const AUTH_PATH: &str = "/api/auth";

fn path(endpoint: &str) -> String {
    format!("{AUTH_PATH}/{endpoint}")
}

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    api_utils::post_json(&path("login"), request).await
}

/// Current user for the stored token
pub async fn me() -> Result<UserInfo, String> {
    api_utils::get_json(&path("me")).await
}

pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<MessageResponse, String> {
    api_utils::post_json(&path("forgot-password"), request).await
}

pub async fn reset_password(request: &ResetPasswordRequest) -> Result<MessageResponse, String> {
    api_utils::post_json(&path("reset-password"), request).await
}

pub async fn change_password(request: &ChangePasswordRequest) -> Result<MessageResponse, String> {
    api_utils::post_json(&path("change-password"), request).await
}

/// Revokes the token server-side. Local state is cleared regardless.
pub async fn logout() -> Result<(), String> {
    api_utils::post(&path("logout"), &serde_json::json!({})).await
}
