use serde::{Deserialize, Serialize};

use crate::shared::money::{deserialize_money, round_cents};
use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{
    validate, FieldError, FieldKind, FieldRule, FormFields, FormSchema, FromForm, ValidationErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    #[default]
    Pending,
    Paid,
}

/// Salary payment for one staff member and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    pub id: String,
    pub staff_id: String,
    pub staff_name: String,
    /// `YYYY-MM`
    pub period: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub gross: f64,
    #[serde(deserialize_with = "deserialize_money")]
    pub deductions: f64,
    pub status: PayrollStatus,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl Payroll {
    pub fn net(&self) -> f64 {
        round_cents(self.gross - self.deductions)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDraft {
    pub staff_id: String,
    pub period: String,
    pub gross: f64,
    pub deductions: f64,
}

pub const PAYROLL_SCHEMA: FormSchema = FormSchema {
    name: "payroll",
    rules: &[
        FieldRule::new("staff_id", "Staff ID", FieldKind::Text).required(),
        FieldRule::new("period", "Period", FieldKind::Text)
            .required()
            .pattern(r"^\d{4}-(0[1-9]|1[0-2])$", "Period is a month like 2024-07"),
        FieldRule::new("gross", "Gross pay", FieldKind::Number)
            .required()
            .min(0.0),
        FieldRule::new("deductions", "Deductions", FieldKind::Number)
            .required()
            .min(0.0),
    ],
};

impl FromForm for PayrollDraft {
    fn schema() -> &'static FormSchema {
        &PAYROLL_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            staff_id: fields.text("staff_id"),
            period: fields.text("period"),
            gross: fields.number("gross"),
            deductions: fields.number("deductions"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("staff_id", self.staff_id.as_str())
            .with("period", self.period.as_str())
            .with("gross", format!("{:.2}", self.gross))
            .with("deductions", format!("{:.2}", self.deductions))
    }

    /// Deductions may not exceed gross pay.
    fn from_form(fields: &FormFields) -> Result<Self, ValidationErrors> {
        validate(&PAYROLL_SCHEMA, fields)?;
        let draft = Self::build(fields);
        if draft.deductions > draft.gross {
            return Err(ValidationErrors(vec![FieldError::new(
                "deductions",
                "Deductions cannot exceed gross pay",
            )]));
        }
        Ok(draft)
    }
}

impl Sortable for Payroll {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "staff_name" => (&self.staff_name).into(),
            "period" => (&self.period).into(),
            "gross" => self.gross.into(),
            "deductions" => self.deductions.into(),
            "net" => self.net().into(),
            "status" => (self.status == PayrollStatus::Paid).into(),
            "paid_at" => self.paid_at.as_ref().into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Payroll {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.staff_name, needle) || self.period.contains(needle)
    }
}

impl Resource for Payroll {
    const COLLECTION: &'static str = "payroll";
    const TITLE: &'static str = "Payroll entry";
    type Draft = PayrollDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> PayrollDraft {
        PayrollDraft {
            staff_id: self.staff_id.clone(),
            period: self.period.clone(),
            gross: self.gross,
            deductions: self.deductions,
        }
    }

    /// Toggling marks the entry paid or back to pending.
    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.status == PayrollStatus::Paid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(gross: &str, deductions: &str) -> FormFields {
        FormFields::new()
            .with("staff_id", "s-1")
            .with("period", "2024-07")
            .with("gross", gross)
            .with("deductions", deductions)
    }

    #[test]
    fn test_deductions_cannot_exceed_gross() {
        let errors = PayrollDraft::from_form(&fields("100", "150")).unwrap_err();
        assert_eq!(
            errors.for_field("deductions"),
            Some("Deductions cannot exceed gross pay")
        );
        assert!(PayrollDraft::from_form(&fields("3000", "450.25")).is_ok());
    }

    #[test]
    fn test_period_format() {
        let errors = PayrollDraft::from_form(&fields("1", "0").with("period", "2024-13")).unwrap_err();
        assert_eq!(errors.for_field("period"), Some("Period is a month like 2024-07"));
    }

    #[test]
    fn test_net_pay() {
        let entry: Payroll = serde_json::from_str(
            r#"{"id":"1","staff_id":"s","staff_name":"Bo","period":"2024-07",
                "gross":"3000.10","deductions":450.05,"status":"paid"}"#,
        )
        .unwrap();
        assert_eq!(entry.net(), 2550.05);
        assert_eq!(entry.is_enabled(), Some(true));
    }
}
