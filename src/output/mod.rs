//! Machine-readable output. Every command prints exactly one envelope:
//! on stdout when it succeeds, on stderr when it fails.

pub mod human;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Error,
}

/// Failure class reported in `error.code`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A profile value is present but unusable.
    InvalidProfile,
    GeneralError,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Envelope {
    pub status: Status,
    pub command: String,
    pub data: Option<Value>,
    pub error: Option<ErrorBody>,
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

pub fn success(command: &str, data: Value) -> Envelope {
    Envelope {
        status: Status::Ok,
        command: command.to_string(),
        data: Some(data),
        error: None,
    }
}

pub fn error(command: &str, code: ErrorCode, message: impl Into<String>) -> Envelope {
    Envelope {
        status: Status::Error,
        command: command.to_string(),
        data: None,
        error: Some(ErrorBody {
            code,
            message: message.into(),
        }),
    }
}
