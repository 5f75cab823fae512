//! Kind-specific payload records of the IR nodes.
//!
//! Payloads keep typed links (as [`NodeId`]s) to their children next to
//! the plain attributes decoded from the AST. The `children` list on the
//! common record keeps the syntactic order; the typed fields here answer
//! "which child is the condition" style questions without matching.

mod decl;
mod expr;
mod meta;
mod stmt;
mod type_name;
mod yul;

pub use decl::*;
pub use expr::*;
pub use meta::*;
pub use stmt::*;
pub use type_name::*;
pub use yul::*;

use std::collections::BTreeSet;

use ast::AstNodeId;
use once_cell::sync::OnceCell;

use crate::node::{ByteRange, NodeId, RefSite};
use crate::types::SolType;

/// Fields shared by all declarations.
#[derive(Debug)]
pub struct DeclarationCore {
    /// User-defined name of the declared entity.
    pub name: String,
    /// Byte range of the name. Pre-0.8.2 compilers do not report it, in
    /// which case it is recovered lazily from the source.
    pub name_location: OnceCell<ByteRange>,
    /// Every IR site referring to this declaration. Filled during
    /// post-processing, shrunk by file eviction.
    pub references: BTreeSet<RefSite>,
}

impl DeclarationCore {
    pub fn new(name: String, name_location: Option<ByteRange>) -> Self {
        let cell = OnceCell::new();
        if let Some(range) = name_location {
            cell.set(range).ok();
        }
        DeclarationCore {
            name,
            name_location: cell,
            references: BTreeSet::new(),
        }
    }
}

/// Type description attached to expressions and type names, parsed into a
/// [`SolType`] on first use.
#[derive(Debug)]
pub struct TypeInfo {
    pub type_identifier: Option<String>,
    pub type_string: Option<String>,
    pub parsed: OnceCell<SolType>,
}

impl TypeInfo {
    pub fn new(descriptions: &ast::TypeDescriptions) -> Self {
        TypeInfo {
            type_identifier: descriptions.type_identifier.clone(),
            type_string: descriptions.type_string.clone(),
            parsed: OnceCell::new(),
        }
    }

    /// The parsed type. Asserts the mini-language parse succeeds; a type
    /// identifier that does not parse is a bug.
    pub fn parsed(&self) -> Option<&SolType> {
        let identifier = self.type_identifier.as_deref()?;
        Some(
            self.parsed
                .get_or_init(|| crate::types::parse_type_identifier(identifier)),
        )
    }
}

/// NatSpec documentation: a structured node since solc 0.6.3, a raw
/// string before that.
#[derive(Debug)]
pub enum DocComment {
    Structured(NodeId),
    Raw(String),
}

/// Symbol alias of an import directive.
#[derive(Debug)]
pub struct SymbolAlias {
    /// `Identifier` IR node referencing the symbol in the imported file.
    pub foreign: NodeId,
    /// Local alias name, if the `symbol as alias` form was used.
    pub local: Option<String>,
}

/// One resolved part of a dotted identifier path such as `A.B.C`.
///
/// Not an IR node of its own; addressed as
/// [`RefSite::IdentifierPathPart`](crate::RefSite).
#[derive(Debug)]
pub struct IdentifierPathPart {
    /// Byte range of just this part.
    pub location: ByteRange,
    pub name: String,
    /// Referenced declaration (or source unit), as an AST id valid in the
    /// owning file's canonical compilation unit.
    pub referenced_declaration_id: AstNodeId,
}

/// A Yul identifier inside `assembly {}` naming a Solidity declaration.
///
/// Not an IR node of its own; the Yul identifier at the same span is.
/// Addressed as [`RefSite::ExternalReference`](crate::RefSite).
#[derive(Debug)]
pub struct ExternalReference {
    /// Byte range including the suffix, e.g. `x.slot`.
    pub location: ByteRange,
    /// Byte range of just the identifier, e.g. `x`.
    pub identifier_location: OnceCell<ByteRange>,
    pub suffix: Option<ast::InlineAssemblySuffix>,
    pub value_size: i64,
    /// The referenced `VariableDeclaration`, as an AST id in the owning
    /// file's canonical compilation unit.
    pub referenced_declaration_id: AstNodeId,
    /// The `YulIdentifier` node at the identifier span. Linked during
    /// post-processing.
    pub yul_identifier: Option<NodeId>,
}
