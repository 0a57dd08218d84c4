use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{config::LoadError, domain::CqlParseError, infra::error::InfraError};

/// Diagnostic attached to error responses so the logging middleware can emit
/// the full source chain without leaking it to the client body.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

/// Request-level failures of the fixture. All of these indicate a bug in the
/// consuming test harness, so none map to a graceful 4xx: they surface as
/// plain 500s and are logged with their chain.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Cql(#[from] CqlParseError),
    #[error("attachment `{name}` was never listed")]
    UnknownAttachment { name: String },
}

impl FixtureError {
    fn presentation_message(&self) -> &'static str {
        match self {
            FixtureError::Cql(_) => "Malformed CQL query",
            FixtureError::UnknownAttachment { .. } => "Unknown attachment",
        }
    }
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let report = ErrorReport::from_error("application::error::FixtureError", status, &self);
        let mut response = (status, self.presentation_message()).into_response();
        report.attach(&mut response);
        response
    }
}

/// Top-level binary error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
