use serde::{Deserialize, Serialize};

use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Reviewing,
    Interview,
    Offered,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Interview,
        ApplicationStatus::Offered,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    pub const NAMES: &'static [&'static str] = &[
        "submitted",
        "reviewing",
        "interview",
        "offered",
        "rejected",
        "hired",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offered => "offered",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Reviewing => "Reviewing",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offered => "Offered",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Hired)
    }

    /// Pipeline position, used for sorting.
    pub fn rank(&self) -> i64 {
        Self::ALL
            .iter()
            .position(|status| status == self)
            .unwrap_or_default() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub applicant_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationDraft {
    pub job_id: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
}

pub const JOB_APPLICATION_SCHEMA: FormSchema = FormSchema {
    name: "job_application",
    rules: &[
        FieldRule::new("job_id", "Job ID", FieldKind::Text).required(),
        FieldRule::new("applicant_name", "Applicant", FieldKind::Text)
            .required()
            .length(2, 120),
        FieldRule::new("email", "Email", FieldKind::Email).required(),
        FieldRule::new("phone", "Phone", FieldKind::Text)
            .pattern(r"^\+?[0-9 ()-]{6,20}$", "Phone may contain digits, spaces, dashes and a leading +"),
        FieldRule::new("resume_url", "Resume URL", FieldKind::Text)
            .pattern(r"^https?://\S+$", "Resume URL must start with http:// or https://"),
        FieldRule::new("cover_letter", "Cover letter", FieldKind::TextArea).max_length(5000),
        FieldRule::new("status", "Status", FieldKind::Text)
            .required()
            .choices(ApplicationStatus::NAMES),
    ],
};

impl FromForm for JobApplicationDraft {
    fn schema() -> &'static FormSchema {
        &JOB_APPLICATION_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            job_id: fields.text("job_id"),
            applicant_name: fields.text("applicant_name"),
            email: fields.text("email").to_lowercase(),
            phone: fields.opt_text("phone"),
            resume_url: fields.opt_text("resume_url"),
            cover_letter: fields.opt_text("cover_letter"),
            status: ApplicationStatus::parse(&fields.text("status")).unwrap_or_default(),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("job_id", self.job_id.as_str())
            .with("applicant_name", self.applicant_name.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.clone().unwrap_or_default())
            .with("resume_url", self.resume_url.clone().unwrap_or_default())
            .with("cover_letter", self.cover_letter.clone().unwrap_or_default())
            .with("status", self.status.as_str())
    }
}

impl Sortable for JobApplication {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "job_title" => (&self.job_title).into(),
            "applicant_name" => (&self.applicant_name).into(),
            "email" => (&self.email).into(),
            "status" => self.status.rank().into(),
            "applied_at" => (&self.applied_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for JobApplication {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.applicant_name, needle)
            || contains_ci(&self.email, needle)
            || contains_ci(&self.job_title, needle)
            || self.status.as_str().contains(needle)
    }
}

impl Resource for JobApplication {
    const COLLECTION: &'static str = "job-applications";
    const TITLE: &'static str = "Application";
    type Draft = JobApplicationDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> JobApplicationDraft {
        JobApplicationDraft {
            job_id: self.job_id.clone(),
            applicant_name: self.applicant_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            resume_url: self.resume_url.clone(),
            cover_letter: self.cover_letter.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{sort_items, SortConfig, SortDirection};

    fn application(name: &str, status: ApplicationStatus) -> JobApplication {
        JobApplication {
            id: name.to_string(),
            job_id: "job-1".to_string(),
            job_title: "Picker".to_string(),
            applicant_name: name.to_string(),
            email: format!("{name}@mail.test"),
            phone: None,
            resume_url: None,
            cover_letter: None,
            status,
            applied_at: "2024-04-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_status_sorts_by_pipeline_stage() {
        let apps = vec![
            application("hired", ApplicationStatus::Hired),
            application("new", ApplicationStatus::Submitted),
            application("talk", ApplicationStatus::Interview),
        ];
        let sorted = sort_items(&apps, &SortConfig::new("status", SortDirection::Asc));
        let names: Vec<_> = sorted.iter().map(|a| a.applicant_name.as_str()).collect();
        assert_eq!(names, vec!["new", "talk", "hired"]);
    }

    #[test]
    fn test_resume_url_must_be_http() {
        let fields = FormFields::new()
            .with("job_id", "job-1")
            .with("applicant_name", "Ann Lee")
            .with("email", "ann@mail.test")
            .with("resume_url", "ftp://files/cv.pdf")
            .with("status", "reviewing");
        let errors = JobApplicationDraft::from_form(&fields).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert!(errors.for_field("resume_url").is_some());

        let ok = fields.with("resume_url", "https://files.test/cv.pdf");
        let draft = JobApplicationDraft::from_form(&ok).unwrap();
        assert_eq!(draft.status, ApplicationStatus::Reviewing);
    }

    #[test]
    fn test_closed_statuses() {
        assert!(ApplicationStatus::Hired.is_closed());
        assert!(!ApplicationStatus::Offered.is_closed());
        assert_eq!(ApplicationStatus::parse("bogus"), None);
    }
}
