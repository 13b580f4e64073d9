//! Per-view form drafts and their validation.
//!
//! DESIGN
//! ======
//! Drafts are plain values owned by a page signal and dropped with the page.
//! Validation returns a translation key so pages render the message in the
//! active language.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use contract::proposal::REQUIRED_FIELD;
use contract::{GenerateRequest, ProposalKind};

/// Provider default minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingField,
    MissingProjectName,
    PasswordMismatch,
    PasswordTooShort,
}

impl DraftError {
    pub fn message_key(self) -> &'static str {
        match self {
            Self::MissingField => "form.required",
            Self::MissingProjectName => "upload.projectNameRequired",
            Self::PasswordMismatch => "form.passwordMismatch",
            Self::PasswordTooShort => "form.passwordTooShort",
        }
    }
}

/// RFP/TOR project metadata being filled in on the upload page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub kind: ProposalKind,
    values: Vec<(String, String)>,
}

impl FormDraft {
    pub fn new(kind: ProposalKind) -> Self {
        Self { kind, values: Vec::new() }
    }

    pub fn get(&self, field: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| k == field)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Set a schema field; names outside the current schema are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        if !self.kind.fields().contains(&field) {
            return;
        }
        match self.values.iter_mut().find(|(k, _)| k == field) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((field.to_owned(), value)),
        }
    }

    /// Change document type, keeping values of fields both schemas share.
    pub fn switch_kind(&mut self, kind: ProposalKind) {
        self.kind = kind;
        self.values.retain(|(k, _)| kind.fields().contains(&k.as_str()));
    }

    /// Build the generate request, requiring a project name.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingProjectName`] when the name is blank.
    pub fn to_request(&self) -> Result<GenerateRequest, DraftError> {
        if self.get(REQUIRED_FIELD).trim().is_empty() {
            return Err(DraftError::MissingProjectName);
        }
        Ok(GenerateRequest::new(
            self.kind,
            self.values.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ))
    }
}

/// Translation keys for a field's label and placeholder.
pub fn field_keys(field: &str) -> (&'static str, &'static str) {
    match field {
        "Project_Name" => ("upload.projectName", "upload.projectNamePlaceholder"),
        "Project_Objective" => ("upload.projectObjective", "upload.projectObjectivePlaceholder"),
        "Scope_of_Work" => ("upload.scopeOfWork", "upload.scopeOfWorkPlaceholder"),
        "Timeline" => ("upload.timeline", "upload.timelinePlaceholder"),
        "Budget" => ("upload.budget", "upload.budgetPlaceholder"),
        "Deliverables" => ("upload.deliverables", "upload.deliverablesPlaceholder"),
        "Constraints" => ("upload.constraints", "upload.constraintsPlaceholder"),
        "Background" => ("upload.background", "upload.backgroundPlaceholder"),
        "Objectives" => ("upload.objectives", "upload.objectivesPlaceholder"),
        "Qualifications" => ("upload.qualifications", "upload.qualificationsPlaceholder"),
        _ => ("", ""),
    }
}

/// Long-form fields render as a textarea.
pub fn is_multiline(field: &str) -> bool {
    !matches!(field, "Project_Name" | "Timeline" | "Budget")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    /// # Errors
    ///
    /// Returns [`DraftError::MissingField`] when either field is blank.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(DraftError::MissingField);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpDraft {
    /// # Errors
    ///
    /// Blank fields, mismatched passwords, or a password shorter than
    /// [`MIN_PASSWORD_LEN`].
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(DraftError::MissingField);
        }
        validate_new_password(&self.password, &self.confirm_password)
    }
}

/// Profile page change-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordDraft {
    /// # Errors
    ///
    /// Same rules as sign-up passwords.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.new_password.is_empty() || self.confirm_password.is_empty() {
            return Err(DraftError::MissingField);
        }
        validate_new_password(&self.new_password, &self.confirm_password)
    }
}

fn validate_new_password(password: &str, confirm: &str) -> Result<(), DraftError> {
    if password != confirm {
        return Err(DraftError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DraftError::PasswordTooShort);
    }
    Ok(())
}
