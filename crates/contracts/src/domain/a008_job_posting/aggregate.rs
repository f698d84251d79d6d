use serde::{Deserialize, Serialize};

use crate::shared::money::deserialize_money_opt;
use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{
    validate, FieldError, FieldKind, FieldRule, FormFields, FormSchema, FromForm, ValidationErrors,
};

pub const EMPLOYMENT_TYPES: &[&str] = &["full_time", "part_time", "contract", "internship"];

pub fn employment_type_label(value: &str) -> &str {
    match value {
        "full_time" => "Full time",
        "part_time" => "Part time",
        "contract" => "Contract",
        "internship" => "Internship",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_money_opt")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_money_opt")]
    pub salary_max: Option<f64>,
    pub is_open: bool,
    pub posted_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

pub const JOB_POSTING_SCHEMA: FormSchema = FormSchema {
    name: "job_posting",
    rules: &[
        FieldRule::new("title", "Title", FieldKind::Text)
            .required()
            .length(3, 120),
        FieldRule::new("department", "Department", FieldKind::Text)
            .required()
            .max_length(80),
        FieldRule::new("location", "Location", FieldKind::Text)
            .required()
            .max_length(80),
        FieldRule::new("employment_type", "Employment type", FieldKind::Text)
            .required()
            .choices(EMPLOYMENT_TYPES),
        FieldRule::new("description", "Description", FieldKind::TextArea)
            .required()
            .max_length(10_000),
        FieldRule::new("salary_min", "Minimum salary", FieldKind::Number).min(0.0),
        FieldRule::new("salary_max", "Maximum salary", FieldKind::Number).min(0.0),
    ],
};

impl FromForm for JobPostingDraft {
    fn schema() -> &'static FormSchema {
        &JOB_POSTING_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            title: fields.text("title"),
            department: fields.text("department"),
            location: fields.text("location"),
            employment_type: fields.text("employment_type"),
            description: fields.text("description"),
            salary_min: fields.opt_number("salary_min"),
            salary_max: fields.opt_number("salary_max"),
        }
    }

    fn to_form(&self) -> FormFields {
        let amount = |v: Option<f64>| v.map(|v| format!("{v:.2}")).unwrap_or_default();
        FormFields::new()
            .with("title", self.title.as_str())
            .with("department", self.department.as_str())
            .with("location", self.location.as_str())
            .with("employment_type", self.employment_type.as_str())
            .with("description", self.description.as_str())
            .with("salary_min", amount(self.salary_min))
            .with("salary_max", amount(self.salary_max))
    }

    /// The salary range may be open on either side but not inverted.
    fn from_form(fields: &FormFields) -> Result<Self, ValidationErrors> {
        validate(&JOB_POSTING_SCHEMA, fields)?;
        let draft = Self::build(fields);
        if let (Some(min), Some(max)) = (draft.salary_min, draft.salary_max) {
            if min > max {
                return Err(ValidationErrors(vec![FieldError::new(
                    "salary_max",
                    "Maximum salary must not be below the minimum",
                )]));
            }
        }
        Ok(draft)
    }
}

impl Sortable for JobPosting {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "title" => (&self.title).into(),
            "department" => (&self.department).into(),
            "location" => (&self.location).into(),
            "employment_type" => (&self.employment_type).into(),
            "salary_min" => self.salary_min.into(),
            "salary_max" => self.salary_max.into(),
            "is_open" => self.is_open.into(),
            "posted_at" => (&self.posted_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for JobPosting {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
            || contains_ci(&self.department, needle)
            || contains_ci(&self.location, needle)
    }
}

impl Resource for JobPosting {
    const COLLECTION: &'static str = "job-postings";
    const TITLE: &'static str = "Job posting";
    type Draft = JobPostingDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> JobPostingDraft {
        JobPostingDraft {
            title: self.title.clone(),
            department: self.department.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            description: self.description.clone(),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
        }
    }

    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormFields {
        FormFields::new()
            .with("title", "Warehouse lead")
            .with("department", "Logistics")
            .with("location", "Riga")
            .with("employment_type", "full_time")
            .with("description", "Run the night shift.")
    }

    #[test]
    fn test_open_salary_range() {
        let draft = JobPostingDraft::from_form(&form().with("salary_min", "1,800")).unwrap();
        assert_eq!(draft.salary_min, Some(1800.0));
        assert_eq!(draft.salary_max, None);
    }

    #[test]
    fn test_inverted_salary_range() {
        let fields = form().with("salary_min", "3000").with("salary_max", "2000");
        let errors = JobPostingDraft::from_form(&fields).unwrap_err();
        assert!(errors.for_field("salary_max").is_some());
    }

    #[test]
    fn test_unknown_employment_type() {
        let errors = JobPostingDraft::from_form(&form().with("employment_type", "gig")).unwrap_err();
        assert_eq!(
            errors.for_field("employment_type"),
            Some("Employment type must be one of: full_time, part_time, contract, internship")
        );
    }

    #[test]
    fn test_salary_accepts_string_amounts() {
        let json = r#"{"id":"1","title":"t","department":"d","location":"l",
            "employment_type":"contract","description":"x","salary_min":"1200.00",
            "salary_max":null,"is_open":true,"posted_at":"2024-03-01"}"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.salary_min, Some(1200.0));
        assert_eq!(posting.salary_max, None);
        assert_eq!(employment_type_label(&posting.employment_type), "Contract");
    }
}
