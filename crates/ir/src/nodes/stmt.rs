//! Statement payloads.

use ast::{InlineAssemblyEvmVersion, InlineAssemblyFlag};

use crate::node::NodeId;
use crate::nodes::ExternalReference;

#[derive(Debug)]
pub struct Block {
    pub statements: Vec<NodeId>,
}

#[derive(Debug)]
pub struct DoWhileStatement {
    pub body: NodeId,
    pub condition: NodeId,
}

#[derive(Debug)]
pub struct EmitStatement {
    pub event_call: NodeId,
}

#[derive(Debug)]
pub struct ExpressionStatement {
    pub expression: NodeId,
}

#[derive(Debug)]
pub struct ForStatement {
    pub initialization_expression: Option<NodeId>,
    pub condition: Option<NodeId>,
    pub loop_expression: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug)]
pub struct IfStatement {
    pub condition: NodeId,
    pub true_body: NodeId,
    pub false_body: Option<NodeId>,
}

#[derive(Debug)]
pub struct InlineAssembly {
    pub yul_block: NodeId,
    pub evm_version: InlineAssemblyEvmVersion,
    pub flags: Vec<InlineAssemblyFlag>,
    /// Sorted by byte location at construction.
    pub external_references: Vec<ExternalReference>,
}

#[derive(Debug)]
pub struct Return {
    pub expression: Option<NodeId>,
    pub function_return_parameters_id: Option<ast::AstNodeId>,
}

#[derive(Debug)]
pub struct RevertStatement {
    pub error_call: NodeId,
}

#[derive(Debug)]
pub struct TryStatement {
    pub external_call: NodeId,
    /// The first clause is the success clause.
    pub clauses: Vec<NodeId>,
}

#[derive(Debug)]
pub struct VariableDeclarationStatement {
    /// `None` slots for omitted tuple components.
    pub declarations: Vec<Option<NodeId>>,
    pub initial_value: Option<NodeId>,
}

#[derive(Debug)]
pub struct WhileStatement {
    pub condition: NodeId,
    pub body: NodeId,
}
