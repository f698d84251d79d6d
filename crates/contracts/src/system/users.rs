use serde::{Deserialize, Serialize};

use super::auth::Role;
use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    /// Only sent when creating a user or resetting the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

pub const USER_SCHEMA: FormSchema = FormSchema {
    name: "user",
    rules: &[
        FieldRule::new("email", "Email", FieldKind::Email).required(),
        FieldRule::new("full_name", "Full name", FieldKind::Text).max_length(120),
        FieldRule::new("role", "Role", FieldKind::Text)
            .required()
            .choices(Role::NAMES),
        FieldRule::new("password", "Initial password", FieldKind::Password).length(8, 128),
    ],
};

impl FromForm for UserDraft {
    fn schema() -> &'static FormSchema {
        &USER_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            email: fields.text("email").to_lowercase(),
            full_name: fields.opt_text("full_name"),
            role: Role::parse(&fields.text("role")),
            password: Some(fields.value_raw("password")).filter(|p| !p.trim().is_empty()),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("email", self.email.as_str())
            .with("full_name", self.full_name.clone().unwrap_or_default())
            .with("role", self.role.as_str())
    }
}

impl Sortable for User {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "email" => (&self.email).into(),
            "full_name" => self.full_name.as_ref().into(),
            "role" => self.role.as_str().into(),
            "is_active" => self.is_active.into(),
            "created_at" => (&self.created_at).into(),
            "last_login_at" => self.last_login_at.as_ref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.email, needle)
            || self
                .full_name
                .as_deref()
                .is_some_and(|n| contains_ci(n, needle))
            || self.role.as_str().contains(needle)
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const TITLE: &'static str = "User";
    type Draft = UserDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            password: None,
        }
    }

    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{sort_items, SortConfig, SortDirection};

    fn user(email: &str, last_login_at: Option<&str>) -> User {
        User {
            id: email.to_string(),
            email: email.to_string(),
            full_name: None,
            role: Role::Staff,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_login_at: last_login_at.map(str::to_string),
        }
    }

    #[test]
    fn test_never_logged_in_sorts_last() {
        let users = vec![
            user("a@x.io", None),
            user("b@x.io", Some("2024-05-02T10:00:00Z")),
            user("c@x.io", Some("2024-05-01T10:00:00Z")),
        ];
        let sorted = sort_items(&users, &SortConfig::new("last_login_at", SortDirection::Desc));
        let emails: Vec<_> = sorted.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["b@x.io", "c@x.io", "a@x.io"]);
    }

    #[test]
    fn test_draft_password_is_optional() {
        let fields = FormFields::new()
            .with("email", "New@Shop.test")
            .with("role", "staff");
        let draft = UserDraft::from_form(&fields).unwrap();
        assert_eq!(draft.email, "new@shop.test");
        assert_eq!(draft.role, Role::Staff);
        assert_eq!(draft.password, None);
        assert!(!serde_json::to_string(&draft).unwrap().contains("password"));

        let short = fields.with("password", "short1");
        assert!(UserDraft::from_form(&short).is_err());
    }
}
