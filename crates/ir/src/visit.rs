//! Visitor dispatch over the IR tree.
//!
//! Implement the hooks you care about; every hook defaults to doing
//! nothing. [`walk`] drives a visitor through a subtree in syntactic
//! order, calling the kind-specific hook plus [`Visitor::visit_node`]
//! for every node.

use crate::node::{NodeId, NodeKind};
use crate::nodes::*;
use crate::Build;

#[allow(unused_variables)]
pub trait Visitor {
    /// Called for every node before its kind-specific hook.
    fn visit_node(&mut self, build: &Build, id: NodeId) {}

    fn visit_source_unit(&mut self, build: &Build, id: NodeId, node: &SourceUnit) {}
    fn visit_pragma_directive(&mut self, build: &Build, id: NodeId, node: &PragmaDirective) {}
    fn visit_import_directive(&mut self, build: &Build, id: NodeId, node: &ImportDirective) {}
    fn visit_using_for_directive(&mut self, build: &Build, id: NodeId, node: &UsingForDirective) {}
    fn visit_inheritance_specifier(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &InheritanceSpecifier,
    ) {
    }
    fn visit_modifier_invocation(&mut self, build: &Build, id: NodeId, node: &ModifierInvocation) {}
    fn visit_override_specifier(&mut self, build: &Build, id: NodeId, node: &OverrideSpecifier) {}
    fn visit_parameter_list(&mut self, build: &Build, id: NodeId, node: &ParameterList) {}
    fn visit_structured_documentation(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &StructuredDocumentation,
    ) {
    }
    fn visit_identifier_path(&mut self, build: &Build, id: NodeId, node: &IdentifierPath) {}
    fn visit_try_catch_clause(&mut self, build: &Build, id: NodeId, node: &TryCatchClause) {}

    fn visit_contract_definition(&mut self, build: &Build, id: NodeId, node: &ContractDefinition) {}
    fn visit_function_definition(&mut self, build: &Build, id: NodeId, node: &FunctionDefinition) {}
    fn visit_modifier_definition(&mut self, build: &Build, id: NodeId, node: &ModifierDefinition) {}
    fn visit_variable_declaration(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &VariableDeclaration,
    ) {
    }
    fn visit_struct_definition(&mut self, build: &Build, id: NodeId, node: &StructDefinition) {}
    fn visit_enum_definition(&mut self, build: &Build, id: NodeId, node: &EnumDefinition) {}
    fn visit_enum_value(&mut self, build: &Build, id: NodeId, node: &EnumValue) {}
    fn visit_event_definition(&mut self, build: &Build, id: NodeId, node: &EventDefinition) {}
    fn visit_error_definition(&mut self, build: &Build, id: NodeId, node: &ErrorDefinition) {}
    fn visit_user_defined_value_type_definition(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &UserDefinedValueTypeDefinition,
    ) {
    }

    fn visit_assignment(&mut self, build: &Build, id: NodeId, node: &Assignment) {}
    fn visit_binary_operation(&mut self, build: &Build, id: NodeId, node: &BinaryOperation) {}
    fn visit_unary_operation(&mut self, build: &Build, id: NodeId, node: &UnaryOperation) {}
    fn visit_conditional(&mut self, build: &Build, id: NodeId, node: &Conditional) {}
    fn visit_elementary_type_name_expression(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &ElementaryTypeNameExpression,
    ) {
    }
    fn visit_function_call(&mut self, build: &Build, id: NodeId, node: &FunctionCall) {}
    fn visit_function_call_options(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &FunctionCallOptions,
    ) {
    }
    fn visit_identifier(&mut self, build: &Build, id: NodeId, node: &Identifier) {}
    fn visit_index_access(&mut self, build: &Build, id: NodeId, node: &IndexAccess) {}
    fn visit_index_range_access(&mut self, build: &Build, id: NodeId, node: &IndexRangeAccess) {}
    fn visit_literal(&mut self, build: &Build, id: NodeId, node: &Literal) {}
    fn visit_member_access(&mut self, build: &Build, id: NodeId, node: &MemberAccess) {}
    fn visit_new_expression(&mut self, build: &Build, id: NodeId, node: &NewExpression) {}
    fn visit_tuple_expression(&mut self, build: &Build, id: NodeId, node: &TupleExpression) {}

    fn visit_block(&mut self, build: &Build, id: NodeId, node: &Block) {}
    fn visit_unchecked_block(&mut self, build: &Build, id: NodeId, node: &Block) {}
    fn visit_break(&mut self, build: &Build, id: NodeId) {}
    fn visit_continue(&mut self, build: &Build, id: NodeId) {}
    fn visit_do_while_statement(&mut self, build: &Build, id: NodeId, node: &DoWhileStatement) {}
    fn visit_emit_statement(&mut self, build: &Build, id: NodeId, node: &EmitStatement) {}
    fn visit_expression_statement(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &ExpressionStatement,
    ) {
    }
    fn visit_for_statement(&mut self, build: &Build, id: NodeId, node: &ForStatement) {}
    fn visit_if_statement(&mut self, build: &Build, id: NodeId, node: &IfStatement) {}
    fn visit_inline_assembly(&mut self, build: &Build, id: NodeId, node: &InlineAssembly) {}
    fn visit_placeholder_statement(&mut self, build: &Build, id: NodeId) {}
    fn visit_return(&mut self, build: &Build, id: NodeId, node: &Return) {}
    fn visit_revert_statement(&mut self, build: &Build, id: NodeId, node: &RevertStatement) {}
    fn visit_try_statement(&mut self, build: &Build, id: NodeId, node: &TryStatement) {}
    fn visit_variable_declaration_statement(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &VariableDeclarationStatement,
    ) {
    }
    fn visit_while_statement(&mut self, build: &Build, id: NodeId, node: &WhileStatement) {}

    fn visit_array_type_name(&mut self, build: &Build, id: NodeId, node: &ArrayTypeName) {}
    fn visit_elementary_type_name(&mut self, build: &Build, id: NodeId, node: &ElementaryTypeName) {
    }
    fn visit_function_type_name(&mut self, build: &Build, id: NodeId, node: &FunctionTypeName) {}
    fn visit_mapping(&mut self, build: &Build, id: NodeId, node: &Mapping) {}
    fn visit_user_defined_type_name(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &UserDefinedTypeName,
    ) {
    }

    fn visit_yul_block(&mut self, build: &Build, id: NodeId, node: &YulBlock) {}
    fn visit_yul_assignment(&mut self, build: &Build, id: NodeId, node: &YulAssignment) {}
    fn visit_yul_break(&mut self, build: &Build, id: NodeId) {}
    fn visit_yul_case(&mut self, build: &Build, id: NodeId, node: &YulCase) {}
    fn visit_yul_continue(&mut self, build: &Build, id: NodeId) {}
    fn visit_yul_expression_statement(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &YulExpressionStatement,
    ) {
    }
    fn visit_yul_for_loop(&mut self, build: &Build, id: NodeId, node: &YulForLoop) {}
    fn visit_yul_function_call(&mut self, build: &Build, id: NodeId, node: &YulFunctionCall) {}
    fn visit_yul_function_definition(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &YulFunctionDefinition,
    ) {
    }
    fn visit_yul_identifier(&mut self, build: &Build, id: NodeId, node: &YulIdentifier) {}
    fn visit_yul_if(&mut self, build: &Build, id: NodeId, node: &YulIf) {}
    fn visit_yul_leave(&mut self, build: &Build, id: NodeId) {}
    fn visit_yul_literal(&mut self, build: &Build, id: NodeId, node: &YulLiteral) {}
    fn visit_yul_switch(&mut self, build: &Build, id: NodeId, node: &YulSwitch) {}
    fn visit_yul_typed_name(&mut self, build: &Build, id: NodeId, node: &YulTypedName) {}
    fn visit_yul_variable_declaration(
        &mut self,
        build: &Build,
        id: NodeId,
        node: &YulVariableDeclaration,
    ) {
    }
}

/// Drives `visitor` through `root` and all its descendants, pre-order,
/// children in syntactic order.
pub fn walk<V: Visitor + ?Sized>(build: &Build, root: NodeId, visitor: &mut V) {
    for id in build.descendants(root) {
        visitor.visit_node(build, id);
        dispatch(build, id, visitor);
    }
}

fn dispatch<V: Visitor + ?Sized>(build: &Build, id: NodeId, visitor: &mut V) {
    use NodeKind::*;
    match &build.node(id).kind {
        SourceUnit(n) => visitor.visit_source_unit(build, id, n),
        PragmaDirective(n) => visitor.visit_pragma_directive(build, id, n),
        ImportDirective(n) => visitor.visit_import_directive(build, id, n),
        UsingForDirective(n) => visitor.visit_using_for_directive(build, id, n),
        InheritanceSpecifier(n) => visitor.visit_inheritance_specifier(build, id, n),
        ModifierInvocation(n) => visitor.visit_modifier_invocation(build, id, n),
        OverrideSpecifier(n) => visitor.visit_override_specifier(build, id, n),
        ParameterList(n) => visitor.visit_parameter_list(build, id, n),
        StructuredDocumentation(n) => visitor.visit_structured_documentation(build, id, n),
        IdentifierPath(n) => visitor.visit_identifier_path(build, id, n),
        TryCatchClause(n) => visitor.visit_try_catch_clause(build, id, n),
        ContractDefinition(n) => visitor.visit_contract_definition(build, id, n),
        FunctionDefinition(n) => visitor.visit_function_definition(build, id, n),
        ModifierDefinition(n) => visitor.visit_modifier_definition(build, id, n),
        VariableDeclaration(n) => visitor.visit_variable_declaration(build, id, n),
        StructDefinition(n) => visitor.visit_struct_definition(build, id, n),
        EnumDefinition(n) => visitor.visit_enum_definition(build, id, n),
        EnumValue(n) => visitor.visit_enum_value(build, id, n),
        EventDefinition(n) => visitor.visit_event_definition(build, id, n),
        ErrorDefinition(n) => visitor.visit_error_definition(build, id, n),
        UserDefinedValueTypeDefinition(n) => {
            visitor.visit_user_defined_value_type_definition(build, id, n)
        }
        Assignment(n) => visitor.visit_assignment(build, id, n),
        BinaryOperation(n) => visitor.visit_binary_operation(build, id, n),
        UnaryOperation(n) => visitor.visit_unary_operation(build, id, n),
        Conditional(n) => visitor.visit_conditional(build, id, n),
        ElementaryTypeNameExpression(n) => {
            visitor.visit_elementary_type_name_expression(build, id, n)
        }
        FunctionCall(n) => visitor.visit_function_call(build, id, n),
        FunctionCallOptions(n) => visitor.visit_function_call_options(build, id, n),
        Identifier(n) => visitor.visit_identifier(build, id, n),
        IndexAccess(n) => visitor.visit_index_access(build, id, n),
        IndexRangeAccess(n) => visitor.visit_index_range_access(build, id, n),
        Literal(n) => visitor.visit_literal(build, id, n),
        MemberAccess(n) => visitor.visit_member_access(build, id, n),
        NewExpression(n) => visitor.visit_new_expression(build, id, n),
        TupleExpression(n) => visitor.visit_tuple_expression(build, id, n),
        Block(n) => visitor.visit_block(build, id, n),
        UncheckedBlock(n) => visitor.visit_unchecked_block(build, id, n),
        Break => visitor.visit_break(build, id),
        Continue => visitor.visit_continue(build, id),
        DoWhileStatement(n) => visitor.visit_do_while_statement(build, id, n),
        EmitStatement(n) => visitor.visit_emit_statement(build, id, n),
        ExpressionStatement(n) => visitor.visit_expression_statement(build, id, n),
        ForStatement(n) => visitor.visit_for_statement(build, id, n),
        IfStatement(n) => visitor.visit_if_statement(build, id, n),
        InlineAssembly(n) => visitor.visit_inline_assembly(build, id, n),
        PlaceholderStatement => visitor.visit_placeholder_statement(build, id),
        Return(n) => visitor.visit_return(build, id, n),
        RevertStatement(n) => visitor.visit_revert_statement(build, id, n),
        TryStatement(n) => visitor.visit_try_statement(build, id, n),
        VariableDeclarationStatement(n) => {
            visitor.visit_variable_declaration_statement(build, id, n)
        }
        WhileStatement(n) => visitor.visit_while_statement(build, id, n),
        ArrayTypeName(n) => visitor.visit_array_type_name(build, id, n),
        ElementaryTypeName(n) => visitor.visit_elementary_type_name(build, id, n),
        FunctionTypeName(n) => visitor.visit_function_type_name(build, id, n),
        Mapping(n) => visitor.visit_mapping(build, id, n),
        UserDefinedTypeName(n) => visitor.visit_user_defined_type_name(build, id, n),
        YulBlock(n) => visitor.visit_yul_block(build, id, n),
        YulAssignment(n) => visitor.visit_yul_assignment(build, id, n),
        YulBreak => visitor.visit_yul_break(build, id),
        YulCase(n) => visitor.visit_yul_case(build, id, n),
        YulContinue => visitor.visit_yul_continue(build, id),
        YulExpressionStatement(n) => visitor.visit_yul_expression_statement(build, id, n),
        YulForLoop(n) => visitor.visit_yul_for_loop(build, id, n),
        YulFunctionCall(n) => visitor.visit_yul_function_call(build, id, n),
        YulFunctionDefinition(n) => visitor.visit_yul_function_definition(build, id, n),
        YulIdentifier(n) => visitor.visit_yul_identifier(build, id, n),
        YulIf(n) => visitor.visit_yul_if(build, id, n),
        YulLeave => visitor.visit_yul_leave(build, id),
        YulLiteral(n) => visitor.visit_yul_literal(build, id, n),
        YulSwitch(n) => visitor.visit_yul_switch(build, id, n),
        YulTypedName(n) => visitor.visit_yul_typed_name(build, id, n),
        YulVariableDeclaration(n) => visitor.visit_yul_variable_declaration(build, id, n),
    }
}
