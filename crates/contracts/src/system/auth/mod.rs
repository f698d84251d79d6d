use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

/// Back-office role. Permission checks derived from it are presentational;
/// the backend enforces access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    #[default]
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Staff, Role::Customer];
    pub const NAMES: &'static [&'static str] = &["admin", "staff", "customer"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        }
    }

    /// Unknown names fall back to the least privileged role.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            _ => Role::Customer,
        }
    }

    pub fn is_back_office(&self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }

    pub fn can_manage_catalog(&self) -> bool {
        self.is_back_office()
    }

    /// Staff records, payroll, users and themes are admin-only.
    pub fn can_manage_staff(&self) -> bool {
        *self == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Plain acknowledgement returned by the password endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

const PASSWORD_PATTERN: &str = r"^(.*[A-Za-z].*[0-9].*|.*[0-9].*[A-Za-z].*)$";
const PASSWORD_HINT: &str = "Password must contain a letter and a digit";

pub const LOGIN_SCHEMA: FormSchema = FormSchema {
    name: "login",
    rules: &[
        FieldRule::new("email", "Email", FieldKind::Email).required(),
        FieldRule::new("password", "Password", FieldKind::Password).required(),
    ],
};

pub const FORGOT_PASSWORD_SCHEMA: FormSchema = FormSchema {
    name: "forgot_password",
    rules: &[FieldRule::new("email", "Email", FieldKind::Email).required()],
};

pub const RESET_PASSWORD_SCHEMA: FormSchema = FormSchema {
    name: "reset_password",
    rules: &[
        FieldRule::new("token", "Reset link", FieldKind::Text).required(),
        FieldRule::new("password", "New password", FieldKind::Password)
            .required()
            .length(8, 128)
            .pattern(PASSWORD_PATTERN, PASSWORD_HINT),
        FieldRule::new("confirm_password", "Password confirmation", FieldKind::Password)
            .required()
            .matches("password"),
    ],
};

pub const CHANGE_PASSWORD_SCHEMA: FormSchema = FormSchema {
    name: "change_password",
    rules: &[
        FieldRule::new("current_password", "Current password", FieldKind::Password).required(),
        FieldRule::new("new_password", "New password", FieldKind::Password)
            .required()
            .length(8, 128)
            .pattern(PASSWORD_PATTERN, PASSWORD_HINT),
        FieldRule::new("confirm_password", "Password confirmation", FieldKind::Password)
            .required()
            .matches("new_password"),
    ],
};

impl FromForm for LoginRequest {
    fn schema() -> &'static FormSchema {
        &LOGIN_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            email: fields.text("email").to_lowercase(),
            password: fields.value_raw("password"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new().with("email", self.email.as_str())
    }
}

impl FromForm for ForgotPasswordRequest {
    fn schema() -> &'static FormSchema {
        &FORGOT_PASSWORD_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            email: fields.text("email").to_lowercase(),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new().with("email", self.email.as_str())
    }
}

impl FromForm for ResetPasswordRequest {
    fn schema() -> &'static FormSchema {
        &RESET_PASSWORD_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            token: fields.text("token"),
            password: fields.value_raw("password"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new().with("token", self.token.as_str())
    }
}

impl FromForm for ChangePasswordRequest {
    fn schema() -> &'static FormSchema {
        &CHANGE_PASSWORD_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            current_password: fields.value_raw("current_password"),
            new_password: fields.value_raw("new_password"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert!(Role::Admin.can_manage_staff());
        assert!(!Role::Staff.can_manage_staff());
        assert!(Role::Staff.can_manage_catalog());
        assert!(!Role::Customer.is_back_office());
        assert_eq!(Role::parse(" ADMIN "), Role::Admin);
        assert_eq!(Role::parse("root"), Role::Customer);
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
    }

    #[test]
    fn test_login_form() {
        let fields = FormFields::new()
            .with("email", " Admin@Shop.test ")
            .with("password", " pass ");
        let request = LoginRequest::from_form(&fields).unwrap();
        assert_eq!(request.email, "admin@shop.test");
        assert_eq!(request.password, " pass ");

        let errors = LoginRequest::from_form(&FormFields::new()).unwrap_err();
        assert_eq!(errors.0.len(), 2);
    }

    #[test]
    fn test_reset_password_rules() {
        let base = FormFields::new().with("token", "t-1");

        let weak = base
            .clone()
            .with("password", "onlyletters")
            .with("confirm_password", "onlyletters");
        let errors = ResetPasswordRequest::from_form(&weak).unwrap_err();
        assert_eq!(errors.for_field("password"), Some(PASSWORD_HINT));

        let mismatch = base
            .clone()
            .with("password", "letters123")
            .with("confirm_password", "letters124");
        let errors = ResetPasswordRequest::from_form(&mismatch).unwrap_err();
        assert_eq!(
            errors.for_field("confirm_password"),
            Some("Password confirmation does not match")
        );

        let ok = base
            .with("password", "123letters")
            .with("confirm_password", "123letters");
        let request = ResetPasswordRequest::from_form(&ok).unwrap();
        assert_eq!(request.token, "t-1");
        assert_eq!(request.password, "123letters");
    }

    #[test]
    fn test_change_password_requires_current() {
        let fields = FormFields::new()
            .with("new_password", "abc12345")
            .with("confirm_password", "abc12345");
        let errors = ChangePasswordRequest::from_form(&fields).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "current_password");
    }
}
