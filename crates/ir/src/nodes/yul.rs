//! Yul payloads for inline assembly bodies.

use ast::YulLiteralKind;
use once_cell::sync::OnceCell;

use crate::cfg::ControlFlowGraph;
use crate::node::NodeId;

#[derive(Debug)]
pub struct YulBlock {
    pub statements: Vec<NodeId>,
}

#[derive(Debug)]
pub struct YulAssignment {
    pub value: NodeId,
    pub variable_names: Vec<NodeId>,
}

#[derive(Debug)]
pub struct YulCase {
    /// `None` for the `default` case, otherwise the `YulLiteral` child.
    pub value: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug)]
pub struct YulExpressionStatement {
    pub expression: NodeId,
}

#[derive(Debug)]
pub struct YulForLoop {
    pub pre: NodeId,
    pub condition: NodeId,
    pub post: NodeId,
    pub body: NodeId,
}

#[derive(Debug)]
pub struct YulFunctionCall {
    pub function_name: NodeId,
    pub arguments: Vec<NodeId>,
}

#[derive(Debug)]
pub struct YulFunctionDefinition {
    pub name: String,
    pub parameters: Vec<NodeId>,
    pub return_variables: Vec<NodeId>,
    pub body: NodeId,
    pub cfg: OnceCell<ControlFlowGraph>,
}

#[derive(Debug)]
pub struct YulIdentifier {
    pub name: String,
    /// Back-link to the external reference covering this identifier, as
    /// `(inline assembly node, index)`. Linked during post-processing.
    pub external_reference: Option<(NodeId, u32)>,
}

#[derive(Debug)]
pub struct YulIf {
    pub condition: NodeId,
    pub body: NodeId,
}

#[derive(Debug)]
pub struct YulLiteral {
    pub kind: YulLiteralKind,
    pub type_name: String,
    /// At least one of `value` and `hex_value` is set.
    pub value: Option<String>,
    pub hex_value: Option<String>,
}

#[derive(Debug)]
pub struct YulSwitch {
    pub expression: NodeId,
    pub cases: Vec<NodeId>,
}

#[derive(Debug)]
pub struct YulTypedName {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug)]
pub struct YulVariableDeclaration {
    pub variables: Vec<NodeId>,
    pub value: Option<NodeId>,
}
