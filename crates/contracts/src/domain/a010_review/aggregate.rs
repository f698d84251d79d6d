use serde::{Deserialize, Serialize};

use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

/// Customer product review. Only approved reviews are shown in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub author_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub is_approved: bool,
    pub created_at: String,
}

impl Review {
    /// `★★★☆☆`
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub product_id: String,
    pub author_name: String,
    pub rating: u8,
    pub comment: Option<String>,
}

pub const REVIEW_SCHEMA: FormSchema = FormSchema {
    name: "review",
    rules: &[
        FieldRule::new("product_id", "Product ID", FieldKind::Text).required(),
        FieldRule::new("author_name", "Author", FieldKind::Text)
            .required()
            .length(2, 80),
        FieldRule::new("rating", "Rating", FieldKind::Integer)
            .required()
            .range(1.0, 5.0),
        FieldRule::new("comment", "Comment", FieldKind::TextArea).max_length(2000),
    ],
};

impl FromForm for ReviewDraft {
    fn schema() -> &'static FormSchema {
        &REVIEW_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            product_id: fields.text("product_id"),
            author_name: fields.text("author_name"),
            rating: fields.integer("rating").clamp(1, 5) as u8,
            comment: fields.opt_text("comment"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("product_id", self.product_id.as_str())
            .with("author_name", self.author_name.as_str())
            .with("rating", self.rating.to_string())
            .with("comment", self.comment.clone().unwrap_or_default())
    }
}

impl Sortable for Review {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "product_name" => (&self.product_name).into(),
            "author_name" => (&self.author_name).into(),
            "rating" => self.rating.into(),
            "is_approved" => self.is_approved.into(),
            "created_at" => (&self.created_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Review {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.product_name, needle)
            || contains_ci(&self.author_name, needle)
            || self
                .comment
                .as_deref()
                .is_some_and(|c| contains_ci(c, needle))
    }
}

impl Resource for Review {
    const COLLECTION: &'static str = "reviews";
    const TITLE: &'static str = "Review";
    type Draft = ReviewDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ReviewDraft {
        ReviewDraft {
            product_id: self.product_id.clone(),
            author_name: self.author_name.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
        }
    }

    /// Toggling approves or hides the review.
    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.is_approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let base = FormFields::new()
            .with("product_id", "p1")
            .with("author_name", "Jo");
        assert!(ReviewDraft::from_form(&base.clone().with("rating", "0")).is_err());
        assert!(ReviewDraft::from_form(&base.clone().with("rating", "4.5")).is_err());
        let draft = ReviewDraft::from_form(&base.with("rating", "5")).unwrap();
        assert_eq!(draft.rating, 5);
    }

    #[test]
    fn test_stars() {
        let review = Review {
            id: "r1".to_string(),
            product_id: "p1".to_string(),
            product_name: "Mug".to_string(),
            author_name: "Jo".to_string(),
            rating: 3,
            comment: None,
            is_approved: false,
            created_at: "2024-02-02".to_string(),
        };
        assert_eq!(review.stars(), "★★★☆☆");
    }
}
