//! Deterministic pre-order traversal over id-carrying nodes.
//!
//! The reference resolver keys nodes by their position in this walk, so
//! the order here is a wire format: it must stay identical across releases
//! and across compilation units of the same file. Children are visited in
//! schema field order; list elements in list order. Yul nodes carry no
//! compiler id and are skipped entirely.

use crate::location::AstNodeId;
use crate::nodes::*;

/// Callback invoked with every node's id and kind name, pre-order.
pub type NodeSink<'a> = dyn FnMut(AstNodeId, &'static str) + 'a;

pub trait Walk {
    fn walk(&self, f: &mut NodeSink<'_>);
}

impl<T: Walk> Walk for Option<T> {
    fn walk(&self, f: &mut NodeSink<'_>) {
        if let Some(inner) = self {
            inner.walk(f);
        }
    }
}

impl<T: Walk> Walk for Box<T> {
    fn walk(&self, f: &mut NodeSink<'_>) {
        (**self).walk(f);
    }
}

impl<T: Walk> Walk for Vec<T> {
    fn walk(&self, f: &mut NodeSink<'_>) {
        for item in self {
            item.walk(f);
        }
    }
}

impl SolcSourceUnit {
    /// Visits every id-carrying descendant of this source unit, the root
    /// itself excluded.
    pub fn walk_members(&self, f: &mut NodeSink<'_>) {
        self.nodes.walk(f);
    }
}

impl Walk for SolcSourceUnitMember {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::PragmaDirective(n) => n.walk(f),
            Self::ImportDirective(n) => n.walk(f),
            Self::VariableDeclaration(n) => n.walk(f),
            Self::EnumDefinition(n) => n.walk(f),
            Self::FunctionDefinition(n) => n.walk(f),
            Self::StructDefinition(n) => n.walk(f),
            Self::ErrorDefinition(n) => n.walk(f),
            Self::UserDefinedValueTypeDefinition(n) => n.walk(f),
            Self::UsingForDirective(n) => n.walk(f),
            Self::EventDefinition(n) => n.walk(f),
            Self::ContractDefinition(n) => n.walk(f),
        }
    }
}

impl Walk for SolcContractMember {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::EnumDefinition(n) => n.walk(f),
            Self::ErrorDefinition(n) => n.walk(f),
            Self::EventDefinition(n) => n.walk(f),
            Self::FunctionDefinition(n) => n.walk(f),
            Self::ModifierDefinition(n) => n.walk(f),
            Self::StructDefinition(n) => n.walk(f),
            Self::UserDefinedValueTypeDefinition(n) => n.walk(f),
            Self::UsingForDirective(n) => n.walk(f),
            Self::VariableDeclaration(n) => n.walk(f),
        }
    }
}

impl Walk for SolcTypeName {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::ArrayTypeName(n) => n.walk(f),
            Self::ElementaryTypeName(n) => n.walk(f),
            Self::FunctionTypeName(n) => n.walk(f),
            Self::Mapping(n) => n.walk(f),
            Self::UserDefinedTypeName(n) => n.walk(f),
        }
    }
}

impl Walk for SolcExpression {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::Assignment(n) => n.walk(f),
            Self::BinaryOperation(n) => n.walk(f),
            Self::Conditional(n) => n.walk(f),
            Self::ElementaryTypeNameExpression(n) => n.walk(f),
            Self::FunctionCall(n) => n.walk(f),
            Self::FunctionCallOptions(n) => n.walk(f),
            Self::Identifier(n) => n.walk(f),
            Self::IndexAccess(n) => n.walk(f),
            Self::IndexRangeAccess(n) => n.walk(f),
            Self::Literal(n) => n.walk(f),
            Self::MemberAccess(n) => n.walk(f),
            Self::NewExpression(n) => n.walk(f),
            Self::TupleExpression(n) => n.walk(f),
            Self::UnaryOperation(n) => n.walk(f),
        }
    }
}

impl Walk for SolcStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::Block(n) => n.walk(f),
            Self::Break(n) => n.walk(f),
            Self::Continue(n) => n.walk(f),
            Self::DoWhileStatement(n) => n.walk(f),
            Self::EmitStatement(n) => n.walk(f),
            Self::ExpressionStatement(n) => n.walk(f),
            Self::ForStatement(n) => n.walk(f),
            Self::IfStatement(n) => n.walk(f),
            Self::InlineAssembly(n) => n.walk(f),
            Self::PlaceholderStatement(n) => n.walk(f),
            Self::Return(n) => n.walk(f),
            Self::RevertStatement(n) => n.walk(f),
            Self::TryStatement(n) => n.walk(f),
            Self::UncheckedBlock(n) => n.walk(f),
            Self::VariableDeclarationStatement(n) => n.walk(f),
            Self::WhileStatement(n) => n.walk(f),
        }
    }
}

impl Walk for SolcForInitialization {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::ExpressionStatement(n) => n.walk(f),
            Self::VariableDeclarationStatement(n) => n.walk(f),
        }
    }
}

impl Walk for SolcTypeNameOrPath {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::UserDefinedTypeName(n) => n.walk(f),
            Self::IdentifierPath(n) => n.walk(f),
        }
    }
}

impl Walk for SolcModifierName {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::Identifier(n) => n.walk(f),
            Self::IdentifierPath(n) => n.walk(f),
        }
    }
}

impl Walk for SolcPragmaDirective {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "PragmaDirective");
    }
}

impl Walk for SolcImportDirective {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ImportDirective");
        for alias in &self.symbol_aliases {
            alias.foreign.walk(f);
        }
    }
}

impl Walk for SolcVariableDeclaration {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "VariableDeclaration");
        self.documentation.walk(f);
        self.overrides.walk(f);
        self.type_name.walk(f);
        self.value.walk(f);
    }
}

impl Walk for SolcEnumDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "EnumDefinition");
        self.members.walk(f);
        self.documentation.walk(f);
    }
}

impl Walk for SolcFunctionDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "FunctionDefinition");
        self.modifiers.walk(f);
        self.parameters.walk(f);
        self.return_parameters.walk(f);
        self.documentation.walk(f);
        self.body.walk(f);
        self.overrides.walk(f);
    }
}

impl Walk for SolcStructDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "StructDefinition");
        self.members.walk(f);
        self.documentation.walk(f);
    }
}

impl Walk for SolcErrorDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ErrorDefinition");
        self.parameters.walk(f);
        self.documentation.walk(f);
    }
}

impl Walk for SolcUserDefinedValueTypeDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "UserDefinedValueTypeDefinition");
        self.underlying_type.walk(f);
    }
}

impl Walk for SolcContractDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ContractDefinition");
        self.base_contracts.walk(f);
        self.nodes.walk(f);
        self.documentation.walk(f);
    }
}

impl Walk for SolcEventDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "EventDefinition");
        self.parameters.walk(f);
        self.documentation.walk(f);
    }
}

impl Walk for SolcModifierDefinition {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ModifierDefinition");
        self.parameters.walk(f);
        self.body.walk(f);
        self.documentation.walk(f);
        self.overrides.walk(f);
    }
}

impl Walk for SolcUsingForDirective {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "UsingForDirective");
        if let Some(functions) = &self.function_list {
            for entry in functions {
                entry.function.walk(f);
                entry.definition.walk(f);
            }
        }
        self.library_name.walk(f);
        self.type_name.walk(f);
    }
}

impl Walk for SolcDocumentation {
    fn walk(&self, f: &mut NodeSink<'_>) {
        match self {
            Self::Structured(n) => n.walk(f),
            Self::Raw(_) => {}
        }
    }
}

impl Walk for SolcArrayTypeName {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ArrayTypeName");
        self.base_type.walk(f);
        self.length.walk(f);
    }
}

impl Walk for SolcElementaryTypeName {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ElementaryTypeName");
    }
}

impl Walk for SolcFunctionTypeName {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "FunctionTypeName");
        self.parameter_types.walk(f);
        self.return_parameter_types.walk(f);
    }
}

impl Walk for SolcMapping {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Mapping");
        self.key_type.walk(f);
        self.value_type.walk(f);
    }
}

impl Walk for SolcUserDefinedTypeName {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "UserDefinedTypeName");
        self.path_node.walk(f);
    }
}

impl Walk for SolcBlock {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Block");
        self.statements.walk(f);
    }
}

impl Walk for SolcBreak {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Break");
    }
}

impl Walk for SolcContinue {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Continue");
    }
}

impl Walk for SolcDoWhileStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "DoWhileStatement");
        self.body.walk(f);
        self.condition.walk(f);
    }
}

impl Walk for SolcEmitStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "EmitStatement");
        self.event_call.walk(f);
    }
}

impl Walk for SolcExpressionStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ExpressionStatement");
        self.expression.walk(f);
    }
}

impl Walk for SolcForStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ForStatement");
        self.body.walk(f);
        self.condition.walk(f);
        self.initialization_expression.walk(f);
        self.loop_expression.walk(f);
    }
}

impl Walk for SolcIfStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "IfStatement");
        self.condition.walk(f);
        self.true_body.walk(f);
        self.false_body.walk(f);
    }
}

impl Walk for SolcInlineAssembly {
    fn walk(&self, f: &mut NodeSink<'_>) {
        // The embedded Yul AST carries no node ids.
        f(self.id, "InlineAssembly");
    }
}

impl Walk for SolcPlaceholderStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "PlaceholderStatement");
    }
}

impl Walk for SolcReturn {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Return");
        self.expression.walk(f);
    }
}

impl Walk for SolcRevertStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "RevertStatement");
        self.error_call.walk(f);
    }
}

impl Walk for SolcTryStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "TryStatement");
        self.clauses.walk(f);
        self.external_call.walk(f);
    }
}

impl Walk for SolcUncheckedBlock {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "UncheckedBlock");
        self.statements.walk(f);
    }
}

impl Walk for SolcVariableDeclarationStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "VariableDeclarationStatement");
        for declaration in self.declarations.iter().flatten() {
            declaration.walk(f);
        }
        self.initial_value.walk(f);
    }
}

impl Walk for SolcWhileStatement {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "WhileStatement");
        self.body.walk(f);
        self.condition.walk(f);
    }
}

impl Walk for SolcAssignment {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Assignment");
        self.left_hand_side.walk(f);
        self.right_hand_side.walk(f);
    }
}

impl Walk for SolcBinaryOperation {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "BinaryOperation");
        self.left_expression.walk(f);
        self.right_expression.walk(f);
    }
}

impl Walk for SolcConditional {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Conditional");
        self.condition.walk(f);
        self.false_expression.walk(f);
        self.true_expression.walk(f);
    }
}

impl Walk for SolcElementaryTypeNameExpression {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ElementaryTypeNameExpression");
        self.type_name.walk(f);
    }
}

impl Walk for SolcFunctionCall {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "FunctionCall");
        self.arguments.walk(f);
        self.expression.walk(f);
    }
}

impl Walk for SolcFunctionCallOptions {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "FunctionCallOptions");
        self.expression.walk(f);
        self.options.walk(f);
    }
}

impl Walk for SolcIdentifier {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Identifier");
    }
}

impl Walk for SolcIndexAccess {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "IndexAccess");
        self.base_expression.walk(f);
        self.index_expression.walk(f);
    }
}

impl Walk for SolcIndexRangeAccess {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "IndexRangeAccess");
        self.base_expression.walk(f);
        self.end_expression.walk(f);
        self.start_expression.walk(f);
    }
}

impl Walk for SolcLiteral {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "Literal");
    }
}

impl Walk for SolcMemberAccess {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "MemberAccess");
        self.expression.walk(f);
    }
}

impl Walk for SolcNewExpression {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "NewExpression");
        self.type_name.walk(f);
    }
}

impl Walk for SolcTupleExpression {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "TupleExpression");
        for component in self.components.iter().flatten() {
            component.walk(f);
        }
    }
}

impl Walk for SolcUnaryOperation {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "UnaryOperation");
        self.sub_expression.walk(f);
    }
}

impl Walk for SolcOverrideSpecifier {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "OverrideSpecifier");
        self.overrides.walk(f);
    }
}

impl Walk for SolcIdentifierPath {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "IdentifierPath");
    }
}

impl Walk for SolcParameterList {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ParameterList");
        self.parameters.walk(f);
    }
}

impl Walk for SolcTryCatchClause {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "TryCatchClause");
        self.block.walk(f);
        self.parameters.walk(f);
    }
}

impl Walk for SolcStructuredDocumentation {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "StructuredDocumentation");
    }
}

impl Walk for SolcEnumValue {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "EnumValue");
    }
}

impl Walk for SolcInheritanceSpecifier {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "InheritanceSpecifier");
        self.base_name.walk(f);
        if let Some(arguments) = &self.arguments {
            arguments.walk(f);
        }
    }
}

impl Walk for SolcModifierInvocation {
    fn walk(&self, f: &mut NodeSink<'_>) {
        f(self.id, "ModifierInvocation");
        self.modifier_name.walk(f);
        if let Some(arguments) = &self.arguments {
            arguments.walk(f);
        }
    }
}
