use gpui::SharedString;

/// A single validation failure reported by the form layer.
///
/// An entry without a message carries the empty string and renders as a
/// blank row.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ValidationError {
    message: SharedString,
}

impl ValidationError {
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &SharedString {
        &self.message
    }
}

impl From<&str> for ValidationError {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SharedString> for ValidationError {
    fn from(value: SharedString) -> Self {
        Self::new(value)
    }
}

/// Errors as handed to a field: nothing, one entry, or a list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FieldErrors {
    #[default]
    Absent,
    Single(ValidationError),
    Many(Vec<ValidationError>),
}

impl FieldErrors {
    /// Canonical ordered sequence. Lists pass through untouched, so order and
    /// duplicates survive.
    pub fn normalize(self) -> Vec<ValidationError> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(error) => vec![error],
            Self::Many(errors) => errors,
        }
    }
}

impl From<ValidationError> for FieldErrors {
    fn from(value: ValidationError) -> Self {
        Self::Single(value)
    }
}

impl From<Option<ValidationError>> for FieldErrors {
    fn from(value: Option<ValidationError>) -> Self {
        value.map_or(Self::Absent, Self::Single)
    }
}

impl From<Vec<ValidationError>> for FieldErrors {
    fn from(value: Vec<ValidationError>) -> Self {
        Self::Many(value)
    }
}

impl<const N: usize> From<[ValidationError; N]> for FieldErrors {
    fn from(value: [ValidationError; N]) -> Self {
        Self::Many(value.into())
    }
}

impl From<&str> for FieldErrors {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<String> for FieldErrors {
    fn from(value: String) -> Self {
        Self::Single(value.into())
    }
}
