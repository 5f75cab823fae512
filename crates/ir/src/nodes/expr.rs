//! Expression payloads.

use ast::{
    AssignmentOperator, AstNodeId, BinaryOpOperator, FunctionCallKind, LiteralKind, UnaryOpOperator,
};
use once_cell::sync::OnceCell;

use crate::node::{ByteRange, NodeId};
use crate::nodes::TypeInfo;

#[derive(Debug)]
pub struct Assignment {
    pub type_info: TypeInfo,
    pub operator: AssignmentOperator,
    pub left_hand_side: NodeId,
    pub right_hand_side: NodeId,
}

#[derive(Debug)]
pub struct BinaryOperation {
    pub type_info: TypeInfo,
    pub operator: BinaryOpOperator,
    pub left_expression: NodeId,
    pub right_expression: NodeId,
    /// User-defined operator function (solc >= 0.8.19), as an AST id in
    /// the canonical CU of the owning file.
    pub function_id: Option<AstNodeId>,
}

#[derive(Debug)]
pub struct UnaryOperation {
    pub type_info: TypeInfo,
    pub operator: UnaryOpOperator,
    pub prefix: bool,
    pub sub_expression: NodeId,
    pub function_id: Option<AstNodeId>,
}

#[derive(Debug)]
pub struct Conditional {
    pub type_info: TypeInfo,
    pub condition: NodeId,
    pub true_expression: NodeId,
    pub false_expression: NodeId,
}

#[derive(Debug)]
pub struct ElementaryTypeNameExpression {
    pub type_info: TypeInfo,
    pub type_name: NodeId,
}

#[derive(Debug)]
pub struct FunctionCall {
    pub type_info: TypeInfo,
    pub kind: FunctionCallKind,
    pub names: Vec<String>,
    pub try_call: bool,
    pub arguments: Vec<NodeId>,
    pub expression: NodeId,
}

#[derive(Debug)]
pub struct FunctionCallOptions {
    pub type_info: TypeInfo,
    pub names: Vec<String>,
    pub options: Vec<NodeId>,
    pub expression: NodeId,
}

#[derive(Debug)]
pub struct Identifier {
    pub type_info: TypeInfo,
    pub name: String,
    pub overloaded_declaration_ids: Vec<AstNodeId>,
    /// Usually a single id. Empty at construction only for identifiers in
    /// import directive symbol aliases; multiple entries mean the name
    /// resolves to a set of overloaded functions.
    pub referenced_declaration_ids: Vec<AstNodeId>,
}

#[derive(Debug)]
pub struct IndexAccess {
    pub type_info: TypeInfo,
    pub base_expression: NodeId,
    pub index_expression: Option<NodeId>,
}

#[derive(Debug)]
pub struct IndexRangeAccess {
    pub type_info: TypeInfo,
    pub base_expression: NodeId,
    pub start_expression: Option<NodeId>,
    pub end_expression: Option<NodeId>,
}

#[derive(Debug)]
pub struct Literal {
    pub type_info: TypeInfo,
    pub kind: LiteralKind,
    pub hex_value: String,
    pub value: Option<String>,
    pub subdenomination: Option<String>,
}

#[derive(Debug)]
pub struct MemberAccess {
    pub type_info: TypeInfo,
    pub expression: NodeId,
    pub member_name: String,
    /// Missing for enum value accesses before solc 0.8.2 and for members
    /// the compiler has no id for; recovered during post-processing.
    pub referenced_declaration_id: Option<AstNodeId>,
    /// Byte range of the member name after the dot.
    pub member_location: OnceCell<ByteRange>,
}

#[derive(Debug)]
pub struct NewExpression {
    pub type_info: TypeInfo,
    pub type_name: NodeId,
}

#[derive(Debug)]
pub struct TupleExpression {
    pub type_info: TypeInfo,
    pub is_inline_array: bool,
    /// `None` slots for omitted components, e.g. `(, x)`.
    pub components: Vec<Option<NodeId>>,
}
