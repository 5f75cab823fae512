//! Container types for `solc --standard-json` output.
//!
//! Only the `sources` section is decoded strictly; the per-contract
//! `contracts` section (ABI, bytecode, method identifiers) is opaque to
//! the IR and kept as raw JSON values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::nodes::SolcSourceUnit;

/// The full standard-JSON output of one compiler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolcOutput {
    /// Keyed by source unit name.
    #[serde(default)]
    pub sources: BTreeMap<String, SolcOutputSource>,
    /// `contracts[<source unit name>][<contract name>]`, opaque.
    #[serde(default)]
    pub contracts: BTreeMap<String, BTreeMap<String, JsonValue>>,
    #[serde(default)]
    pub errors: Vec<SolcOutputError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolcOutputSource {
    pub id: i64,
    pub ast: SolcSourceUnit,
}

/// Diagnostics the compiler attaches to its output. Decoded loosely; the
/// IR only cares whether a `severity: "error"` entry is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolcOutputError {
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "formattedMessage")]
    pub formatted_message: Option<String>,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, JsonValue>,
}

impl SolcOutput {
    /// Whether any reported diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.severity.as_deref() == Some("error"))
    }
}
