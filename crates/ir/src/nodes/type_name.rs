//! Type name payloads — syntactic type occurrences, distinct from the
//! parsed [`SolType`](crate::types::SolType) values.

use ast::{AstNodeId, StateMutability, Visibility};

use crate::node::NodeId;
use crate::nodes::TypeInfo;

#[derive(Debug)]
pub struct ArrayTypeName {
    pub type_info: TypeInfo,
    pub base_type: NodeId,
    pub length: Option<NodeId>,
}

#[derive(Debug)]
pub struct ElementaryTypeName {
    pub type_info: TypeInfo,
    pub name: String,
    /// Only set for `address` types.
    pub state_mutability: Option<StateMutability>,
}

#[derive(Debug)]
pub struct FunctionTypeName {
    pub type_info: TypeInfo,
    pub parameter_types: NodeId,
    pub return_parameter_types: NodeId,
    pub state_mutability: StateMutability,
    pub visibility: Visibility,
}

#[derive(Debug)]
pub struct Mapping {
    pub type_info: TypeInfo,
    pub key_type: NodeId,
    pub value_type: NodeId,
    pub key_name: Option<String>,
    pub value_name: Option<String>,
}

#[derive(Debug)]
pub struct UserDefinedTypeName {
    pub type_info: TypeInfo,
    /// As an AST id in the canonical CU of the owning file.
    pub referenced_declaration_id: AstNodeId,
    /// Dotted name, only present before solc 0.8.0.
    pub name: Option<String>,
    /// `IdentifierPath` child, only present since solc 0.8.0.
    pub path_node: Option<NodeId>,
}
