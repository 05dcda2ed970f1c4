//! Validation helpers for DTOs, including the ordered required-field chain run on raw bodies.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::error::ServiceError;

/// A single check run against a raw JSON request body.
pub trait FieldCheck: Send + Sync {
    /// Inspect `body`, failing with the error to answer.
    fn check(&self, body: &Value) -> Result<(), ServiceError>;
}

/// Fails with [`ServiceError::MissingParameter`] when the field is absent or `null`.
#[derive(Debug, Clone, Copy)]
pub struct RequiredField(pub &'static str);

impl FieldCheck for RequiredField {
    fn check(&self, body: &Value) -> Result<(), ServiceError> {
        match body.get(self.0) {
            None | Some(Value::Null) => Err(ServiceError::MissingParameter(self.0)),
            Some(_) => Ok(()),
        }
    }
}

/// Ordered list of checks. Evaluation stops at the first failing check; errors are never
/// aggregated.
#[derive(Default)]
pub struct FieldChain {
    checks: Vec<Box<dyn FieldCheck>>,
}

impl FieldChain {
    /// Empty chain accepting every body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain requiring every field of `fields`, checked in the given order.
    pub fn required(fields: &[&'static str]) -> Self {
        fields
            .iter()
            .fold(Self::new(), |chain, &field| chain.with(RequiredField(field)))
    }

    /// Append a check after the existing ones.
    pub fn with(mut self, check: impl FieldCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run the checks in order and return the first failure.
    pub fn check(&self, body: &Value) -> Result<(), ServiceError> {
        self.checks.iter().try_for_each(|check| check.check(body))
    }
}

/// Deserialize a body that already passed its field chain and run its `validator` rules.
pub fn decode<T>(body: Value) -> Result<T, ServiceError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(body)
        .map_err(|err| ServiceError::InvalidInput(format!("invalid parameter: {err}")))?;
    value.validate()?;
    Ok(value)
}

/// Deserialize a label with its surrounding whitespace removed, so the value checked by the
/// services is the value persisted.
pub fn trimmed_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(label.trim().to_owned())
}

/// Optional variant of [`trimmed_label`].
pub fn trimmed_optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.map(|label| label.trim().to_owned()))
}

/// Validates that a team, player or winner label is not blank.
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        let mut err = ValidationError::new("blank_label");
        err.message = Some("label must not be blank".into());
        return Err(err);
    }
    Ok(())
}
