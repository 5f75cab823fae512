//! Strictly typed bindings for the AST the solc compiler emits as part of
//! its `--standard-json` output.
//!
//! Decoding is deliberately unforgiving: unknown fields and unknown
//! `nodeType` discriminators fail the whole compilation unit. Supporting a
//! dozen compiler versions on top of a lenient schema hides bugs; a strict
//! schema with explicit `Option<T>` fields per version keeps every
//! divergence visible at the type level.

pub mod enums;
pub mod location;
pub mod nodes;
pub mod output;
pub mod walk;

pub use enums::*;
pub use location::{AstNodeId, Src};
pub use nodes::*;
pub use output::{SolcOutput, SolcOutputError, SolcOutputSource};
pub use walk::Walk;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstError {
    /// The compiler JSON does not match the schema. Fatal for the CU.
    #[error("solc AST does not match the schema: {0}")]
    SchemaViolation(#[from] serde_json::Error),
}

/// Decodes one source file's AST from its standard-JSON `ast` value.
pub fn parse_source_unit(value: &serde_json::Value) -> Result<SolcSourceUnit, AstError> {
    Ok(serde_json::from_value(value.clone())?)
}

/// Decodes a full standard-JSON compiler output object.
pub fn parse_output(raw: &str) -> Result<SolcOutput, AstError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests;
