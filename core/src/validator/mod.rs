use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const MIN_DESCRIPTION_CHARS: usize = 25;

/// Posting fields as received from the request layer. Missing keys deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

impl RawPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
        }
    }
}

/// Trimmed fields that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPosting {
    title: String,
    company: String,
    description: String,
}

impl ValidatedPosting {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `title company description`, the text both the detector and the classifier see.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.company, self.description)
    }
}

/// Missing fields are reported before a short description.
pub fn validate(raw: &RawPosting) -> Result<ValidatedPosting, ValidationError> {
    let title = raw.title.trim();
    let company = raw.company.trim();
    let description = raw.description.trim();

    for (field, value) in [
        ("title", title),
        ("company", company),
        ("description", description),
    ] {
        if value.is_empty() {
            return Err(ValidationError::MissingField { field });
        }
    }

    let actual_chars = description.chars().count();
    if actual_chars < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort {
            min_chars: MIN_DESCRIPTION_CHARS,
            actual_chars,
        });
    }

    Ok(ValidatedPosting {
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
    })
}
