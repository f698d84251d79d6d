use serde::{Deserialize, Serialize};

use crate::shared::money::deserialize_money;
use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

/// Employee record managed by administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: String,
    pub department: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub salary: f64,
    pub hired_at: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffDraft {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hired_at: String,
}

pub const STAFF_SCHEMA: FormSchema = FormSchema {
    name: "staff",
    rules: &[
        FieldRule::new("full_name", "Full name", FieldKind::Text)
            .required()
            .length(2, 120),
        FieldRule::new("email", "Email", FieldKind::Email).required(),
        FieldRule::new("phone", "Phone", FieldKind::Text)
            .pattern(r"^\+?[0-9 ()-]{7,20}$", "Phone may contain digits, spaces, dashes and a leading +"),
        FieldRule::new("position", "Position", FieldKind::Text)
            .required()
            .max_length(80),
        FieldRule::new("department", "Department", FieldKind::Text)
            .required()
            .max_length(80),
        FieldRule::new("salary", "Monthly salary", FieldKind::Number)
            .required()
            .min(0.0),
        FieldRule::new("hired_at", "Hire date", FieldKind::Date).required(),
    ],
};

impl FromForm for StaffDraft {
    fn schema() -> &'static FormSchema {
        &STAFF_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            full_name: fields.text("full_name"),
            email: fields.text("email").to_lowercase(),
            phone: fields.opt_text("phone"),
            position: fields.text("position"),
            department: fields.text("department"),
            salary: fields.number("salary"),
            hired_at: fields.text("hired_at"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("full_name", self.full_name.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.clone().unwrap_or_default())
            .with("position", self.position.as_str())
            .with("department", self.department.as_str())
            .with("salary", format!("{:.2}", self.salary))
            .with("hired_at", self.hired_at.as_str())
    }
}

impl Sortable for Staff {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "full_name" => (&self.full_name).into(),
            "email" => (&self.email).into(),
            "position" => (&self.position).into(),
            "department" => (&self.department).into(),
            "salary" => self.salary.into(),
            "hired_at" => (&self.hired_at).into(),
            "is_active" => self.is_active.into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Staff {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.full_name, needle)
            || contains_ci(&self.email, needle)
            || contains_ci(&self.position, needle)
            || contains_ci(&self.department, needle)
    }
}

impl Resource for Staff {
    const COLLECTION: &'static str = "staff";
    const TITLE: &'static str = "Staff member";
    type Draft = StaffDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> StaffDraft {
        StaffDraft {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary,
            hired_at: self.hired_at.clone(),
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

    #[test]
    fn test_staff_form_validation() {
        let fields = FormFields::new()
            .with("full_name", "Bo Chen")
            .with("email", "bo@shop.test")
            .with("position", "Picker")
            .with("department", "Warehouse")
            .with("salary", "2,400")
            .with("hired_at", "2023-02-30");
        let errors = StaffDraft::from_form(&fields).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "hired_at");

        let draft = StaffDraft::from_form(&fields.with("hired_at", "2023-02-28")).unwrap();
        assert_eq!(draft.salary, 2400.0);
        assert_eq!(draft.phone, None);
    }
}
