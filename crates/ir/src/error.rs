//! Error kinds of the IR pipeline.
//!
//! Only conditions a caller can trigger surface as `IrError`. Conditions
//! that indicate a bug in the pipeline itself (a referenced AST id missing
//! from the resolver, a type identifier that does not parse, state read
//! before its post-process ran) are asserted instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IrError {
    /// A `nodeType` newer than this implementation knows. Fail fast and
    /// name it so the gap is actionable.
    #[error("unsupported construct: unknown node type {node_type:?}")]
    UnsupportedConstruct { node_type: String },

    /// The compiler JSON failed strict decoding. Fatal for the CU.
    #[error(transparent)]
    SchemaViolation(#[from] ast::AstError),

    /// Two compilation units produced ASTs of the same file that disagree
    /// beyond the tolerated divergences.
    #[error(
        "structural drift in {file}: expected {expected} but got {found} \
         at traversal index {index} (ast id {ast_id})"
    )]
    StructuralDrift {
        file: PathBuf,
        index: usize,
        expected: String,
        found: String,
        ast_id: i64,
    },

    /// An operation referenced a file unknown to the build.
    #[error("no source unit loaded for {0}")]
    MissingFile(PathBuf),

    /// A CFG was requested for an unimplemented declaration.
    #[error("cannot build control flow graph: declaration has no body")]
    MissingBody,
}
