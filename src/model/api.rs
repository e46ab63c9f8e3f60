use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    /// Per-field messages, present for validation and uniqueness failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    pub fn with_field(error: impl Into<String>, field: &str) -> Self {
        let error = error.into();
        let fields = BTreeMap::from([(field.to_string(), vec![error.clone()])]);

        Self {
            error,
            fields: Some(fields),
        }
    }
}
