//! Minimal extraction of the two CQL fragments the fixture understands.
//!
//! Real Confluence accepts a full query language; the ingestion clients this
//! fixture serves only ever send queries shaped like
//! `space in ('space_0') AND type=page`, so nothing more is parsed.

use thiserror::Error;

const SPACE_CLAUSE_OPEN: &str = "space in ('";
const SPACE_CLAUSE_CLOSE: &str = "')";
const TYPE_CLAUSE: &str = "type=";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CqlParseError {
    #[error("cql `{cql}` has no `space in ('...')` clause")]
    MissingSpaceClause { cql: String },
    #[error("cql `{cql}` has no `type=` clause")]
    MissingContentType { cql: String },
}

/// The space identifier and content type extracted from a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CqlFilter {
    pub space: String,
    pub content_type: String,
}

impl CqlFilter {
    /// A malformed query is a harness bug, not a runtime condition: callers
    /// surface the error as a plain server failure.
    pub fn parse(cql: &str) -> Result<Self, CqlParseError> {
        let space_start = cql
            .find(SPACE_CLAUSE_OPEN)
            .map(|at| at + SPACE_CLAUSE_OPEN.len())
            .ok_or_else(|| CqlParseError::MissingSpaceClause {
                cql: cql.to_string(),
            })?;
        let space_len = cql[space_start..]
            .find(SPACE_CLAUSE_CLOSE)
            .ok_or_else(|| CqlParseError::MissingSpaceClause {
                cql: cql.to_string(),
            })?;

        let type_start = cql
            .find(TYPE_CLAUSE)
            .map(|at| at + TYPE_CLAUSE.len())
            .ok_or_else(|| CqlParseError::MissingContentType {
                cql: cql.to_string(),
            })?;

        Ok(Self {
            space: cql[space_start..space_start + space_len].to_string(),
            content_type: cql[type_start..].to_string(),
        })
    }
}
