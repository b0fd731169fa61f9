use serde::{Deserialize, Serialize};

/// Body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Empty JSON object returned by endpoints with nothing to report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmptyDto {}
