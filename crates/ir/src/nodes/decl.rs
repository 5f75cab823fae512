//! Declaration payloads.

use std::collections::BTreeSet;

use ast::{
    AstNodeId, ContractKind, DataLocation, FunctionKind, Mutability, StateMutability, Visibility,
};
use once_cell::sync::OnceCell;
use serde_json::Value as JsonValue;

use crate::cfg::ControlFlowGraph;
use crate::node::NodeId;
use crate::nodes::{DeclarationCore, DocComment, TypeInfo};

#[derive(Debug)]
pub struct ContractDefinition {
    pub decl: DeclarationCore,
    pub kind: ContractKind,
    pub is_abstract: bool,
    pub canonical_name: Option<String>,
    pub fully_implemented: Option<bool>,
    /// `InheritanceSpecifier` children, in source order.
    pub base_contracts: Vec<NodeId>,
    /// C3-linearized base contract ids (self first), as AST ids in the
    /// canonical compilation unit.
    pub linearized_base_contract_ids: Vec<AstNodeId>,
    pub used_error_ids: Vec<AstNodeId>,
    pub used_event_ids: Vec<AstNodeId>,
    pub documentation: Option<DocComment>,
    /// Opaque per-contract section of the standard-JSON output (ABI,
    /// bytecode, method identifiers), when the caller provided it.
    pub compilation_info: Option<JsonValue>,
    /// Contracts directly inheriting from this one. Maintained by
    /// post-processing and eviction.
    pub child_contracts: BTreeSet<NodeId>,
    /// Errors usable by this contract, including inherited ones.
    pub used_errors: BTreeSet<NodeId>,
    /// Events this contract may emit, including inherited ones.
    pub used_events: BTreeSet<NodeId>,
    pub enums: Vec<NodeId>,
    pub errors: Vec<NodeId>,
    pub events: Vec<NodeId>,
    pub functions: Vec<NodeId>,
    pub modifiers: Vec<NodeId>,
    pub structs: Vec<NodeId>,
    pub user_defined_value_types: Vec<NodeId>,
    pub using_for_directives: Vec<NodeId>,
    pub declared_variables: Vec<NodeId>,
}

#[derive(Debug)]
pub struct FunctionDefinition {
    pub decl: DeclarationCore,
    pub kind: FunctionKind,
    pub implemented: bool,
    pub visibility: Visibility,
    pub state_mutability: StateMutability,
    pub is_virtual: bool,
    /// 4-byte selector as a hex string, for external/public functions.
    pub function_selector: Option<String>,
    pub parameters: NodeId,
    pub return_parameters: NodeId,
    pub modifiers: Vec<NodeId>,
    pub overrides: Option<NodeId>,
    pub documentation: Option<DocComment>,
    pub body: Option<NodeId>,
    /// Functions this one overrides, as AST ids in the canonical CU.
    pub base_function_ids: Vec<AstNodeId>,
    /// Functions declaring this one as a base. Maintained by
    /// post-processing and eviction.
    pub child_functions: BTreeSet<NodeId>,
    /// Built on first access.
    pub cfg: OnceCell<ControlFlowGraph>,
}

#[derive(Debug)]
pub struct ModifierDefinition {
    pub decl: DeclarationCore,
    pub visibility: Visibility,
    pub is_virtual: bool,
    pub parameters: NodeId,
    pub overrides: Option<NodeId>,
    pub documentation: Option<DocComment>,
    pub body: Option<NodeId>,
    pub base_modifier_ids: Vec<AstNodeId>,
    pub child_modifiers: BTreeSet<NodeId>,
    pub cfg: OnceCell<ControlFlowGraph>,
}

#[derive(Debug)]
pub struct VariableDeclaration {
    pub decl: DeclarationCore,
    pub type_info: TypeInfo,
    pub constant: bool,
    /// Set when the compiler reported it; solc 0.6.5 omits the field for
    /// immutable variables, in which case [`mutability`] derives it from
    /// the source.
    pub declared_mutability: Option<Mutability>,
    pub derived_mutability: OnceCell<Mutability>,
    pub data_location: DataLocation,
    pub visibility: Visibility,
    pub is_state_variable: bool,
    pub indexed: bool,
    pub function_selector: Option<String>,
    pub type_name: Option<NodeId>,
    pub overrides: Option<NodeId>,
    pub documentation: Option<NodeId>,
    pub value: Option<NodeId>,
    pub base_function_ids: Vec<AstNodeId>,
}

#[derive(Debug)]
pub struct StructDefinition {
    pub decl: DeclarationCore,
    pub canonical_name: String,
    pub visibility: Visibility,
    pub members: Vec<NodeId>,
    pub documentation: Option<NodeId>,
}

#[derive(Debug)]
pub struct EnumDefinition {
    pub decl: DeclarationCore,
    pub canonical_name: String,
    pub values: Vec<NodeId>,
    pub documentation: Option<NodeId>,
}

#[derive(Debug)]
pub struct EnumValue {
    pub decl: DeclarationCore,
}

#[derive(Debug)]
pub struct EventDefinition {
    pub decl: DeclarationCore,
    pub anonymous: bool,
    pub parameters: NodeId,
    pub documentation: Option<DocComment>,
    /// 32-byte selector reported by the compiler, hex-encoded. Computed
    /// from the signature when absent.
    pub declared_selector: Option<String>,
    pub computed_selector: OnceCell<[u8; 32]>,
    /// Contracts that may emit or inherit this event.
    pub used_in: BTreeSet<NodeId>,
}

#[derive(Debug)]
pub struct ErrorDefinition {
    pub decl: DeclarationCore,
    pub parameters: NodeId,
    pub documentation: Option<NodeId>,
    /// 4-byte selector reported by the compiler, hex-encoded. Computed
    /// from the signature when absent.
    pub declared_selector: Option<String>,
    pub computed_selector: OnceCell<[u8; 4]>,
    /// Contracts that may revert with or inherit this error.
    pub used_in: BTreeSet<NodeId>,
}

#[derive(Debug)]
pub struct UserDefinedValueTypeDefinition {
    pub decl: DeclarationCore,
    pub canonical_name: Option<String>,
    pub underlying_type: NodeId,
}
