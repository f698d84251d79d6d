//! Declarative form schemas and their validation.
//!
//! A schema is a static list of [`FieldRule`]s. [`validate`] checks raw form
//! input against it and reports every failing field at once, so a form can
//! highlight all problems in one pass.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use thiserror::Error;

use super::money::parse_money;
use super::table::parse_date;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const COLOR_PATTERN: &str = r"^#[0-9a-fA-F]{6}$";

static REGEX_CACHE: Lazy<Mutex<HashMap<&'static str, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Input widget and value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Password,
    Number,
    Integer,
    Color,
    Date,
    Bool,
    /// One of [`FieldRule::options`].
    Choice,
}

impl FieldKind {
    /// HTML `type` attribute for the input rendering this field.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number | FieldKind::Integer => "number",
            FieldKind::Color => "color",
            FieldKind::Date => "date",
            FieldKind::Bool => "checkbox",
            FieldKind::Choice => "select",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<&'static str>,
    pub pattern_message: Option<&'static str>,
    /// Name of another field this one must equal (password confirmation).
    pub matches: Option<&'static str>,
    pub options: &'static [&'static str],
}

impl FieldRule {
    pub const fn new(field: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            label,
            kind,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            pattern: None,
            pattern_message: None,
            matches: None,
            options: &[],
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn pattern(self, pattern: &'static str, message: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            pattern_message: Some(message),
            ..self
        }
    }

    pub const fn matches(self, other: &'static str) -> Self {
        Self {
            matches: Some(other),
            ..self
        }
    }

    pub const fn choices(self, options: &'static [&'static str]) -> Self {
        Self {
            kind: FieldKind::Choice,
            options,
            ..self
        }
    }

    /// Passwords are submitted untrimmed, so they are checked untrimmed.
    fn exact<'v>(&self, value: &'v str) -> &'v str {
        if self.kind == FieldKind::Password {
            value
        } else {
            value.trim()
        }
    }

    /// Checks this rule only; the first failing constraint wins.
    pub fn check(&self, values: &dyn FormValues) -> Result<(), FieldError> {
        let untrimmed = values.value(self.field).unwrap_or("");
        let raw = untrimmed.trim();
        let fail = |message: String| Err(FieldError::new(self.field, message));

        if self.kind == FieldKind::Bool {
            if self.required && raw != "true" {
                return fail(format!("{} must be accepted", self.label));
            }
            return Ok(());
        }

        if raw.is_empty() {
            if self.required {
                return fail(format!("{} is required", self.label));
            }
            return Ok(());
        }

        let length = self.exact(untrimmed).chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return fail(format!("{} must be at least {} characters", self.label, min));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return fail(format!("{} must be at most {} characters", self.label, max));
            }
        }

        match self.kind {
            FieldKind::Email if !regex_matches(EMAIL_PATTERN, raw).unwrap_or(false) => {
                return fail(format!("{} must be a valid email address", self.label));
            }
            FieldKind::Color if !regex_matches(COLOR_PATTERN, raw).unwrap_or(false) => {
                return fail(format!("{} must be a hex color like #1a2b3c", self.label));
            }
            FieldKind::Choice if !self.options.iter().any(|o| *o == raw) => {
                return fail(format!("{} must be one of: {}", self.label, self.options.join(", ")));
            }
            FieldKind::Date if parse_date(raw).is_none() => {
                return fail(format!("{} must be a date (YYYY-MM-DD)", self.label));
            }
            FieldKind::Number | FieldKind::Integer => {
                let Some(number) = parse_money(raw) else {
                    return fail(format!("{} must be a number", self.label));
                };
                if self.kind == FieldKind::Integer && number.fract() != 0.0 {
                    return fail(format!("{} must be a whole number", self.label));
                }
                if let Some(min) = self.min {
                    if number < min {
                        return fail(format!("{} must be at least {}", self.label, min));
                    }
                }
                if let Some(max) = self.max {
                    if number > max {
                        return fail(format!("{} must be at most {}", self.label, max));
                    }
                }
            }
            _ => {}
        }

        if let Some(pattern) = self.pattern {
            match regex_matches(pattern, self.exact(untrimmed)) {
                Some(true) => {}
                Some(false) => {
                    return fail(
                        self.pattern_message
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{} has an invalid format", self.label)),
                    );
                }
                None => return fail(format!("{} cannot be checked", self.label)),
            }
        }

        if let Some(other) = self.matches {
            if self.exact(untrimmed) != self.exact(values.value(other).unwrap_or("")) {
                return fail(format!("{} does not match", self.label));
            }
        }

        Ok(())
    }
}

/// `None` when the pattern itself does not compile.
fn regex_matches(pattern: &'static str, value: &str) -> Option<bool> {
    let mut cache = REGEX_CACHE.lock().ok()?;
    if let Some(re) = cache.get(pattern) {
        return Some(re.is_match(value));
    }
    let re = Regex::new(pattern).ok()?;
    let matched = re.is_match(value);
    cache.insert(pattern, re);
    Some(matched)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSchema {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

impl FormSchema {
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// Raw string input of a form, keyed by field name.
pub trait FormValues {
    fn value(&self, field: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormValues for FormFields {
    fn value(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn text(&self, field: &str) -> String {
        self.value(field).unwrap_or("").trim().to_string()
    }

    /// Untrimmed value, for secrets.
    pub fn value_raw(&self, field: &str) -> String {
        self.value(field).unwrap_or("").to_string()
    }

    /// Blank input becomes `None`.
    pub fn opt_text(&self, field: &str) -> Option<String> {
        Some(self.text(field)).filter(|s| !s.is_empty())
    }

    pub fn number(&self, field: &str) -> f64 {
        self.opt_number(field).unwrap_or(0.0)
    }

    pub fn opt_number(&self, field: &str) -> Option<f64> {
        self.value(field).and_then(parse_money)
    }

    pub fn integer(&self, field: &str) -> i64 {
        self.number(field) as i64
    }

    pub fn flag(&self, field: &str) -> bool {
        self.value(field).map(str::trim) == Some("true")
    }
}

pub fn validate(schema: &FormSchema, values: &dyn FormValues) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = schema
        .rules
        .iter()
        .filter_map(|rule| rule.check(values).err())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Typed draft built from a validated form.
pub trait FromForm: Sized {
    fn schema() -> &'static FormSchema;

    /// Builds the draft from input that already passed [`validate`].
    fn build(fields: &FormFields) -> Self;

    /// Prefills the form when editing an existing record.
    fn to_form(&self) -> FormFields;

    fn from_form(fields: &FormFields) -> Result<Self, ValidationErrors> {
        validate(Self::schema(), fields)?;
        Ok(Self::build(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNUP: FormSchema = FormSchema {
        name: "signup",
        rules: &[
            FieldRule::new("name", "Name", FieldKind::Text).required().length(2, 20),
            FieldRule::new("email", "Email", FieldKind::Email).required(),
            FieldRule::new("age", "Age", FieldKind::Integer).range(18.0, 120.0),
            FieldRule::new("code", "Code", FieldKind::Text)
                .pattern(r"^[A-Z]{3}-\d{2}$", "Code looks like ABC-12"),
            FieldRule::new("password", "Password", FieldKind::Password).required(),
            FieldRule::new("confirm", "Confirmation", FieldKind::Password)
                .required()
                .matches("password"),
            FieldRule::new("terms", "Terms", FieldKind::Bool).required(),
        ],
    };

    fn valid() -> FormFields {
        FormFields::new()
            .with("name", "Ann")
            .with("email", "ann@example.com")
            .with("age", "30")
            .with("code", "ABC-12")
            .with("password", "secret1")
            .with("confirm", "secret1")
            .with("terms", "true")
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&SIGNUP, &valid()), Ok(()));
    }

    #[test]
    fn test_collects_every_failing_field() {
        let fields = FormFields::new()
            .with("name", "A")
            .with("email", "not-an-email")
            .with("age", "12.5")
            .with("code", "abc")
            .with("password", "x")
            .with("confirm", "y");
        let errors = validate(&SIGNUP, &fields).unwrap_err();
        let failed: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(failed, vec!["name", "email", "age", "code", "confirm", "terms"]);
        assert_eq!(errors.for_field("code"), Some("Code looks like ABC-12"));
        assert_eq!(errors.for_field("age"), Some("Age must be a whole number"));
        assert_eq!(errors.for_field("terms"), Some("Terms must be accepted"));
    }

    #[test]
    fn test_password_confirmation_is_not_trimmed() {
        let padded = valid().with("confirm", "secret1 ");
        let errors = validate(&SIGNUP, &padded).unwrap_err();
        assert_eq!(errors.for_field("confirm"), Some("Confirmation does not match"));

        let both_padded = valid().with("password", " secret1").with("confirm", " secret1");
        assert_eq!(validate(&SIGNUP, &both_padded), Ok(()));
    }

    #[test]
    fn test_optional_blank_fields_skip_checks() {
        let fields = valid().with("age", "  ").with("code", "");
        assert_eq!(validate(&SIGNUP, &fields), Ok(()));
    }

    #[test]
    fn test_required_message_and_range() {
        let fields = valid().with("name", "   ").with("age", "130");
        let errors = validate(&SIGNUP, &fields).unwrap_err();
        assert_eq!(errors.for_field("name"), Some("Name is required"));
        assert_eq!(errors.for_field("age"), Some("Age must be at most 120"));
    }

    #[test]
    fn test_display_joins_messages() {
        let errors = ValidationErrors(vec![
            FieldError::new("a", "A is required"),
            FieldError::new("b", "B is required"),
        ]);
        assert_eq!(errors.to_string(), "A is required; B is required");
    }

    #[test]
    fn test_choice_rule() {
        const ROLE: FormSchema = FormSchema {
            name: "role",
            rules: &[FieldRule::new("role", "Role", FieldKind::Text)
                .required()
                .choices(&["admin", "staff"])],
        };
        assert_eq!(ROLE.rules[0].kind, FieldKind::Choice);
        assert!(validate(&ROLE, &FormFields::new().with("role", "staff")).is_ok());
        let errors = validate(&ROLE, &FormFields::new().with("role", "root")).unwrap_err();
        assert_eq!(errors.for_field("role"), Some("Role must be one of: admin, staff"));
    }

    #[test]
    fn test_color_rule() {
        const THEME: FormSchema = FormSchema {
            name: "theme",
            rules: &[FieldRule::new("primary", "Primary", FieldKind::Color).required()],
        };
        assert!(validate(&THEME, &FormFields::new().with("primary", "#12abEF")).is_ok());
        assert!(validate(&THEME, &FormFields::new().with("primary", "12abef")).is_err());
    }

    #[test]
    fn test_form_fields_accessors() {
        let fields = FormFields::new()
            .with("price", "1,250.50")
            .with("note", "  ")
            .with("active", "true");
        assert_eq!(fields.number("price"), 1250.5);
        assert_eq!(fields.opt_text("note"), None);
        assert!(fields.flag("active"));
        assert!(!fields.flag("missing"));
        assert_eq!(fields.integer("missing"), 0);
    }
}
