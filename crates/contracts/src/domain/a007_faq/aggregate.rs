use serde::{Deserialize, Serialize};

use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
}

pub const FAQ_SCHEMA: FormSchema = FormSchema {
    name: "faq",
    rules: &[
        FieldRule::new("question", "Question", FieldKind::Text)
            .required()
            .length(5, 300),
        FieldRule::new("answer", "Answer", FieldKind::TextArea)
            .required()
            .max_length(5000),
        FieldRule::new("category", "Category", FieldKind::Text).max_length(60),
        FieldRule::new("sort_order", "Sort order", FieldKind::Integer).range(0.0, 10_000.0),
        FieldRule::new("is_published", "Published", FieldKind::Bool),
    ],
};

impl FromForm for FaqDraft {
    fn schema() -> &'static FormSchema {
        &FAQ_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            question: fields.text("question"),
            answer: fields.text("answer"),
            category: fields.opt_text("category"),
            sort_order: fields.integer("sort_order") as i32,
            is_published: fields.flag("is_published"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("question", self.question.as_str())
            .with("answer", self.answer.as_str())
            .with("category", self.category.clone().unwrap_or_default())
            .with("sort_order", self.sort_order.to_string())
            .with("is_published", self.is_published.to_string())
    }
}

impl Sortable for Faq {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "question" => (&self.question).into(),
            "category" => self.category.as_ref().into(),
            "sort_order" => self.sort_order.into(),
            "is_published" => self.is_published.into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Faq {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.question, needle)
            || contains_ci(&self.answer, needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| contains_ci(c, needle))
    }
}

impl Resource for Faq {
    const COLLECTION: &'static str = "faqs";
    const TITLE: &'static str = "FAQ";
    type Draft = FaqDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> FaqDraft {
        FaqDraft {
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category.clone(),
            sort_order: self.sort_order,
            is_published: self.is_published,
        }
    }

    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.is_published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_box_is_unpublished() {
        let fields = FormFields::new()
            .with("question", "How do returns work?")
            .with("answer", "Within 30 days.");
        let draft = FaqDraft::from_form(&fields).unwrap();
        assert!(!draft.is_published);
        assert_eq!(draft.sort_order, 0);
        assert_eq!(draft.category, None);
    }

    #[test]
    fn test_edit_form_roundtrip() {
        let draft = FaqDraft {
            question: "Do you ship abroad?".to_string(),
            answer: "Yes.".to_string(),
            category: Some("Shipping".to_string()),
            sort_order: 3,
            is_published: true,
        };
        assert_eq!(FaqDraft::from_form(&draft.to_form()), Ok(draft));
    }
}
