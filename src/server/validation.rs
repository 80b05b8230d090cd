//! Declarative request validation.
//!
//! Each request type lists its field checks through the `Validate` trait. A
//! check names where the value came from, the field, and the ordered rules it
//! must satisfy. Checks stop at the first failed rule for a field, and every
//! failing field is reported together.

use crate::{
    model::{
        api::{ViolationDto, ViolationLocation},
        task::{CreateTaskDto, TaskOwnerPath},
        user::CreateUserDto,
    },
    server::{error::AppError, util::parse::parse_identifier},
};

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value is present and contains a non-whitespace character.
    NotBlank,
    /// Value is a structurally valid store identifier. Existence is not checked.
    Identifier,
}

impl Rule {
    fn check(self, value: Option<&str>) -> Result<(), &'static str> {
        match self {
            Rule::NotBlank => match value {
                Some(v) if !v.trim().is_empty() => Ok(()),
                _ => Err("must be present and non-empty"),
            },
            Rule::Identifier => match value.map(parse_identifier) {
                Some(Ok(_)) => Ok(()),
                _ => Err("must be a valid identifier"),
            },
        }
    }
}

/// Rules to apply to one field of a request.
pub struct FieldCheck<'a> {
    location: ViolationLocation,
    field: &'static str,
    value: Option<&'a str>,
    rules: &'static [Rule],
}

impl<'a> FieldCheck<'a> {
    pub fn body(field: &'static str, value: Option<&'a str>, rules: &'static [Rule]) -> Self {
        Self {
            location: ViolationLocation::Body,
            field,
            value,
            rules,
        }
    }

    pub fn path(field: &'static str, value: Option<&'a str>, rules: &'static [Rule]) -> Self {
        Self {
            location: ViolationLocation::Path,
            field,
            value,
            rules,
        }
    }

    fn run(&self) -> Option<Violation> {
        self.rules.iter().find_map(|rule| {
            rule.check(self.value).err().map(|message| {
                Violation::new(
                    self.location,
                    self.field,
                    message,
                    self.value.map(str::to_string),
                )
            })
        })
    }
}

/// A failed rule, reported back to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub location: ViolationLocation,
    pub field: String,
    pub message: String,
    pub value: Option<String>,
}

impl Violation {
    pub fn new(
        location: ViolationLocation,
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            location,
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    /// Violation for a body that could not be deserialized at all.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::new(ViolationLocation::Body, "body", detail, None)
    }

    /// Violation for a path segment that could not be decoded.
    pub fn malformed_path(field: &'static str, detail: impl Into<String>) -> Self {
        Self::new(ViolationLocation::Path, field, detail, None)
    }

    pub fn into_dto(self) -> ViolationDto {
        ViolationDto {
            location: self.location,
            field: self.field,
            message: self.message,
            value: self.value,
        }
    }
}

/// Request data that carries its own validation rules.
pub trait Validate {
    /// Field checks for this request, in reporting order.
    fn checks(&self) -> Vec<FieldCheck<'_>>;

    /// Runs every check and collects the violations.
    ///
    /// # Returns
    /// - `Ok(())` - All rules passed
    /// - `Err(AppError::Validation)` - At least one field failed a rule
    fn validate(&self) -> Result<(), AppError> {
        let violations: Vec<Violation> = self.checks().iter().filter_map(FieldCheck::run).collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }
}

impl Validate for CreateUserDto {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![FieldCheck::body(
            "username",
            self.username.as_deref(),
            &[Rule::NotBlank],
        )]
    }
}

impl Validate for CreateTaskDto {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::body("title", self.title.as_deref(), &[Rule::NotBlank]),
            FieldCheck::body(
                "user",
                self.user.as_deref(),
                &[Rule::NotBlank, Rule::Identifier],
            ),
        ]
    }
}

impl Validate for TaskOwnerPath {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![FieldCheck::path(
            "userId",
            Some(self.user_id.as_str()),
            &[Rule::Identifier],
        )]
    }
}
