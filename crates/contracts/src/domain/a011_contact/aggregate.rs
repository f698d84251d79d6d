use serde::{Deserialize, Serialize};

use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

/// Message sent through the storefront contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: String,
}

impl ContactMessage {
    /// First line of the message, cut to `max` characters.
    pub fn preview(&self, max: usize) -> String {
        let line = self.message.lines().next().unwrap_or_default();
        if line.chars().count() <= max {
            return line.to_string();
        }
        let cut: String = line.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub const CONTACT_SCHEMA: FormSchema = FormSchema {
    name: "contact",
    rules: &[
        FieldRule::new("name", "Name", FieldKind::Text)
            .required()
            .length(2, 120),
        FieldRule::new("email", "Email", FieldKind::Email).required(),
        FieldRule::new("subject", "Subject", FieldKind::Text)
            .required()
            .length(3, 200),
        FieldRule::new("message", "Message", FieldKind::TextArea)
            .required()
            .length(10, 5000),
    ],
};

impl FromForm for ContactMessageDraft {
    fn schema() -> &'static FormSchema {
        &CONTACT_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            email: fields.text("email").to_lowercase(),
            subject: fields.text("subject"),
            message: fields.text("message"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("subject", self.subject.as_str())
            .with("message", self.message.as_str())
    }
}

impl Sortable for ContactMessage {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "email" => (&self.email).into(),
            "subject" => (&self.subject).into(),
            "is_resolved" => self.is_resolved.into(),
            "created_at" => (&self.created_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for ContactMessage {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.email, needle)
            || contains_ci(&self.subject, needle)
            || contains_ci(&self.message, needle)
    }
}

impl Resource for ContactMessage {
    const COLLECTION: &'static str = "contact-messages";
    const TITLE: &'static str = "Message";
    type Draft = ContactMessageDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ContactMessageDraft {
        ContactMessageDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.is_resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> ContactMessage {
        ContactMessage {
            id: "m1".to_string(),
            name: "Sam".to_string(),
            email: "sam@mail.test".to_string(),
            subject: "Order".to_string(),
            message: text.to_string(),
            is_resolved: false,
            created_at: "2024-06-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_preview() {
        assert_eq!(message("Short one\nsecond line").preview(20), "Short one");
        assert_eq!(message("Where is my parcel please").preview(11), "Where is my…");
        assert_eq!(message("").preview(5), "");
    }

    #[test]
    fn test_message_too_short() {
        let fields = FormFields::new()
            .with("name", "Sam")
            .with("email", "sam@mail.test")
            .with("subject", "Hi")
            .with("message", "Hello");
        let errors = ContactMessageDraft::from_form(&fields).unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert!(errors.for_field("subject").is_some());
        assert!(errors.for_field("message").is_some());
    }
}
