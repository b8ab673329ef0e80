//! Contact form validation and submission status.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ShowreelError, ShowreelResult};

/// RFC-light shape check: something, an @, something, a dot, something.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Inline validation errors for a submission, empty when the form is valid.
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().chars().count() < NAME_MIN_CHARS {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name must be at least 2 characters",
        });
    }

    if !is_valid_email(form.email.trim()) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }

    if form.message.trim().chars().count() < MESSAGE_MIN_CHARS {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message must be at least 10 characters",
        });
    }

    errors
}

/// Submission lifecycle: `Idle -> Loading -> Success | Error`. A finished
/// form may be resubmitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn begin(self) -> ShowreelResult<Self> {
        match self {
            Self::Loading => Err(ShowreelError::validation(
                "submission already in flight",
            )),
            Self::Idle | Self::Success | Self::Error => Ok(Self::Loading),
        }
    }

    pub fn finish(self, ok: bool) -> ShowreelResult<Self> {
        match self {
            Self::Loading => Ok(if ok { Self::Success } else { Self::Error }),
            _ => Err(ShowreelError::validation(
                "cannot finish a submission that is not loading",
            )),
        }
    }
}
