use serde::{Deserialize, Serialize};

use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

/// Storefront/back-office color theme. Exactly one theme is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub id: String,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDraft {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for ThemeDraft {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            primary_color: "#2563eb".to_string(),
            secondary_color: "#64748b".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#111827".to_string(),
        }
    }
}

impl ThemeDraft {
    /// CSS custom properties applied to the document root.
    pub fn css_variables(&self) -> [(&'static str, &str); 4] {
        [
            ("--color-primary", self.primary_color.as_str()),
            ("--color-secondary", self.secondary_color.as_str()),
            ("--color-background", self.background_color.as_str()),
            ("--color-text", self.text_color.as_str()),
        ]
    }
}

pub const THEME_SCHEMA: FormSchema = FormSchema {
    name: "theme",
    rules: &[
        FieldRule::new("name", "Name", FieldKind::Text).required().length(2, 60),
        FieldRule::new("primary_color", "Primary color", FieldKind::Color).required(),
        FieldRule::new("secondary_color", "Secondary color", FieldKind::Color).required(),
        FieldRule::new("background_color", "Background color", FieldKind::Color).required(),
        FieldRule::new("text_color", "Text color", FieldKind::Color).required(),
    ],
};

impl FromForm for ThemeDraft {
    fn schema() -> &'static FormSchema {
        &THEME_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            primary_color: fields.text("primary_color").to_lowercase(),
            secondary_color: fields.text("secondary_color").to_lowercase(),
            background_color: fields.text("background_color").to_lowercase(),
            text_color: fields.text("text_color").to_lowercase(),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("name", self.name.as_str())
            .with("primary_color", self.primary_color.as_str())
            .with("secondary_color", self.secondary_color.as_str())
            .with("background_color", self.background_color.as_str())
            .with("text_color", self.text_color.as_str())
    }
}

impl Sortable for ThemeConfig {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "primary_color" => (&self.primary_color).into(),
            "is_active" => self.is_active.into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for ThemeConfig {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
    }
}

impl Resource for ThemeConfig {
    const COLLECTION: &'static str = "themes";
    const TITLE: &'static str = "Theme";
    type Draft = ThemeDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ThemeDraft {
        ThemeDraft {
            name: self.name.clone(),
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
        }
    }

    /// Toggling activates the theme; the backend deactivates the others.
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

    #[test]
    fn test_default_draft_is_valid() {
        let draft = ThemeDraft::default();
        assert_eq!(ThemeDraft::from_form(&draft.to_form()), Ok(draft));
    }

    #[test]
    fn test_colors_are_normalized() {
        let fields = ThemeDraft::default()
            .to_form()
            .with("primary_color", "#AABBCC");
        let draft = ThemeDraft::from_form(&fields).unwrap();
        assert_eq!(draft.css_variables()[0], ("--color-primary", "#aabbcc"));
    }

    #[test]
    fn test_invalid_color() {
        let fields = ThemeDraft::default().to_form().with("text_color", "black");
        let errors = ThemeDraft::from_form(&fields).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "text_color");
    }
}
