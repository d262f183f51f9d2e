use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::Display;

/// The constraint a field violated, reported as the error `code`.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum Constraint {
    NotNull,
    Size,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    #[serde(rename = "objectName")]
    pub object_name: String,
    pub field: String,
    #[serde(rename = "rejectedValue")]
    pub rejected_value: Option<Value>,
    pub code: String,
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

/// Collects field errors in the order the checks run.
#[derive(Debug)]
pub struct Validator {
    object_name: &'static str,
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new(object_name: &'static str) -> Self {
        Self {
            object_name,
            errors: Vec::new(),
        }
    }

    /// Length is counted in characters. A missing value fails with `NotNull`.
    pub fn min_length(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: usize,
        message: &str,
    ) -> &mut Self {
        match value {
            None => self.reject(field, None, Constraint::NotNull, message),
            Some(value) if value.chars().count() < min => self.reject(
                field,
                Some(Value::String(value.to_string())),
                Constraint::Size,
                message,
            ),
            Some(_) => {}
        }
        self
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn reject(
        &mut self,
        field: &str,
        rejected_value: Option<Value>,
        constraint: Constraint,
        message: &str,
    ) {
        self.errors.push(FieldError {
            object_name: self.object_name.to_string(),
            field: field.to_string(),
            rejected_value,
            code: constraint.to_string(),
            default_message: message.to_string(),
        });
    }
}
