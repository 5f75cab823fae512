//! Meta-node payloads: source unit, directives, helper nodes.

use ast::{AstNodeId, ModifierInvocationKind, UserDefinedOperator};
use once_cell::sync::OnceCell;

use crate::node::{ByteRange, NodeId};
use crate::nodes::{IdentifierPathPart, SymbolAlias};

/// Root IR node of one source file.
#[derive(Debug)]
pub struct SourceUnit {
    /// Source unit name as the compiler knows the file.
    pub source_unit_name: String,
    pub license: Option<String>,
    pub pragmas: Vec<NodeId>,
    pub imports: Vec<NodeId>,
    pub contracts: Vec<NodeId>,
    pub functions: Vec<NodeId>,
    pub declared_variables: Vec<NodeId>,
    pub structs: Vec<NodeId>,
    pub enums: Vec<NodeId>,
    pub errors: Vec<NodeId>,
    pub events: Vec<NodeId>,
    pub user_defined_value_types: Vec<NodeId>,
    pub using_for_directives: Vec<NodeId>,
}

#[derive(Debug)]
pub struct PragmaDirective {
    pub literals: Vec<String>,
}

#[derive(Debug)]
pub struct ImportDirective {
    /// Source unit name of the imported file, the key the compiler (and
    /// [`Build::file_by_source_unit_name`](crate::Build)) knows it by.
    pub imported_source_unit_name: String,
    /// The import string exactly as written in the source.
    pub import_string: String,
    /// AST id of the imported source unit in the canonical CU.
    pub imported_source_unit_id: AstNodeId,
    pub symbol_aliases: Vec<SymbolAlias>,
    /// Namespace alias for `import "f.sol" as F;` style imports.
    pub unit_alias: Option<String>,
    pub import_string_location: OnceCell<ByteRange>,
}

#[derive(Debug)]
pub struct UsingForFunction {
    /// `IdentifierPath` of the attached function.
    pub function: NodeId,
    /// Set when the function is bound to an operator.
    pub operator: Option<UserDefinedOperator>,
}

#[derive(Debug)]
pub struct UsingForDirective {
    pub functions: Vec<UsingForFunction>,
    pub library_name: Option<NodeId>,
    pub type_name: Option<NodeId>,
    pub is_global: bool,
}

#[derive(Debug)]
pub struct InheritanceSpecifier {
    pub base_name: NodeId,
    pub arguments: Vec<NodeId>,
}

#[derive(Debug)]
pub struct ModifierInvocation {
    pub modifier_name: NodeId,
    pub arguments: Vec<NodeId>,
    pub kind: Option<ModifierInvocationKind>,
}

#[derive(Debug)]
pub struct OverrideSpecifier {
    pub overrides: Vec<NodeId>,
}

#[derive(Debug)]
pub struct ParameterList {
    pub parameters: Vec<NodeId>,
}

#[derive(Debug)]
pub struct StructuredDocumentation {
    pub text: String,
}

/// Dotted path of identifiers, e.g. `A.B.C`.
#[derive(Debug)]
pub struct IdentifierPath {
    pub name: String,
    /// Referenced declaration of the rightmost part, as an AST id in the
    /// canonical CU.
    pub referenced_declaration_id: AstNodeId,
    /// One entry per dotted part, left to right. Filled during
    /// post-processing.
    pub parts: Vec<IdentifierPathPart>,
}

#[derive(Debug)]
pub struct TryCatchClause {
    /// `Error` for revert clauses, `Panic` for panic clauses, empty for
    /// the success and catch-all clauses.
    pub error_name: String,
    pub parameters: Option<NodeId>,
    pub block: NodeId,
}
