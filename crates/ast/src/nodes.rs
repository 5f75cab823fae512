//! The solc AST node schema.
//!
//! One struct per node kind, one internally tagged enum per union the
//! compiler can emit in a given position. Decoding is strict: every struct
//! carries `deny_unknown_fields`, so a field added by a newer compiler
//! fails the whole compilation unit instead of being silently dropped.
//!
//! Optional fields are version-dependent; the compiler version that
//! introduced (or removed) a field is noted inline. Together these notes
//! form the supported-compiler compatibility table.
//!
//! Structs referenced directly (outside a tagged union, e.g. a function
//! body which is always a `Block`) still see the raw `nodeType` key, which
//! is why every struct keeps an optional `node_type` passthrough field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::location::{AstNodeId, Src};

/// `typeDescriptions` attribute attached to expressions and type names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeDescriptions {
    #[serde(default)]
    pub type_identifier: Option<String>,
    #[serde(default)]
    pub type_string: Option<String>,
}

/// One entry of an import directive's `symbolAliases` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SymbolAlias {
    pub foreign: SolcIdentifier,
    #[serde(default)]
    pub local: Option<String>,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
}

/// One entry of an inline assembly block's `externalReferences` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExternalReferenceModel {
    pub declaration: AstNodeId,
    pub is_offset: bool,
    pub is_slot: bool,
    pub src: Src,
    pub value_size: i64,
    #[serde(default)]
    pub suffix: Option<InlineAssemblySuffix>,
}

/// `documentation` is a plain string in old compilers and a
/// `StructuredDocumentation` node since solc 0.6.3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolcDocumentation {
    Structured(SolcStructuredDocumentation),
    Raw(String),
}

/// One entry of a using-for directive's `functionList` (new in 0.8.13;
/// `definition`/`operator` added in 0.8.19).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UsingForFunction {
    #[serde(default)]
    pub function: Option<SolcIdentifierPath>,
    #[serde(default)]
    pub definition: Option<SolcIdentifierPath>,
    #[serde(default)]
    pub operator: Option<UserDefinedOperator>,
}

// ---------------------------------------------------------------------------
// Unions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcSourceUnitMember {
    PragmaDirective(SolcPragmaDirective),
    ImportDirective(SolcImportDirective),
    VariableDeclaration(SolcVariableDeclaration),
    EnumDefinition(SolcEnumDefinition),
    FunctionDefinition(SolcFunctionDefinition),
    StructDefinition(SolcStructDefinition),
    /// New in solc 0.8.4.
    ErrorDefinition(SolcErrorDefinition),
    /// New in solc 0.8.8.
    UserDefinedValueTypeDefinition(SolcUserDefinedValueTypeDefinition),
    /// Allowed at file level since solc 0.8.13.
    UsingForDirective(SolcUsingForDirective),
    /// Allowed at file level since solc 0.8.22.
    EventDefinition(SolcEventDefinition),
    ContractDefinition(SolcContractDefinition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcContractMember {
    EnumDefinition(SolcEnumDefinition),
    ErrorDefinition(SolcErrorDefinition),
    EventDefinition(SolcEventDefinition),
    FunctionDefinition(SolcFunctionDefinition),
    ModifierDefinition(SolcModifierDefinition),
    StructDefinition(SolcStructDefinition),
    UserDefinedValueTypeDefinition(SolcUserDefinedValueTypeDefinition),
    UsingForDirective(SolcUsingForDirective),
    VariableDeclaration(SolcVariableDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcTypeName {
    ArrayTypeName(SolcArrayTypeName),
    ElementaryTypeName(SolcElementaryTypeName),
    FunctionTypeName(SolcFunctionTypeName),
    Mapping(SolcMapping),
    UserDefinedTypeName(SolcUserDefinedTypeName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcExpression {
    Assignment(SolcAssignment),
    BinaryOperation(SolcBinaryOperation),
    Conditional(SolcConditional),
    ElementaryTypeNameExpression(SolcElementaryTypeNameExpression),
    FunctionCall(SolcFunctionCall),
    FunctionCallOptions(SolcFunctionCallOptions),
    Identifier(SolcIdentifier),
    IndexAccess(SolcIndexAccess),
    IndexRangeAccess(SolcIndexRangeAccess),
    Literal(SolcLiteral),
    MemberAccess(SolcMemberAccess),
    NewExpression(SolcNewExpression),
    TupleExpression(SolcTupleExpression),
    UnaryOperation(SolcUnaryOperation),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcStatement {
    Block(SolcBlock),
    Break(SolcBreak),
    Continue(SolcContinue),
    DoWhileStatement(SolcDoWhileStatement),
    EmitStatement(SolcEmitStatement),
    ExpressionStatement(SolcExpressionStatement),
    ForStatement(SolcForStatement),
    IfStatement(SolcIfStatement),
    InlineAssembly(SolcInlineAssembly),
    PlaceholderStatement(SolcPlaceholderStatement),
    Return(SolcReturn),
    RevertStatement(SolcRevertStatement),
    TryStatement(SolcTryStatement),
    /// New in solc 0.8.0.
    UncheckedBlock(SolcUncheckedBlock),
    VariableDeclarationStatement(SolcVariableDeclarationStatement),
    WhileStatement(SolcWhileStatement),
}

/// Initialization slot of a `for` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcForInitialization {
    ExpressionStatement(SolcExpressionStatement),
    VariableDeclarationStatement(SolcVariableDeclarationStatement),
}

/// Positions where pre-0.8 compilers emit `UserDefinedTypeName` and newer
/// ones emit `IdentifierPath` (inheritance base names, using-for library
/// names, override lists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcTypeNameOrPath {
    UserDefinedTypeName(SolcUserDefinedTypeName),
    IdentifierPath(SolcIdentifierPath),
}

/// Name slot of a modifier invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcModifierName {
    Identifier(SolcIdentifier),
    IdentifierPath(SolcIdentifierPath),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcYulStatement {
    YulAssignment(SolcYulAssignment),
    YulBlock(SolcYulBlock),
    YulBreak(SolcYulBreak),
    YulContinue(SolcYulContinue),
    YulExpressionStatement(SolcYulExpressionStatement),
    YulLeave(SolcYulLeave),
    YulForLoop(SolcYulForLoop),
    YulFunctionDefinition(SolcYulFunctionDefinition),
    YulIf(SolcYulIf),
    YulSwitch(SolcYulSwitch),
    YulVariableDeclaration(SolcYulVariableDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum SolcYulExpression {
    YulFunctionCall(SolcYulFunctionCall),
    YulIdentifier(SolcYulIdentifier),
    YulLiteral(SolcYulLiteral),
}

/// A Yul switch case matches either a literal or the `default` keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolcYulCaseValue {
    Literal(SolcYulLiteral),
    /// Always the string `"default"`; validated during IR construction.
    Default(String),
}

// ---------------------------------------------------------------------------
// Source unit and top-level members
// ---------------------------------------------------------------------------

/// The root node of one source file's AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcSourceUnit {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub absolute_path: String,
    pub exported_symbols: BTreeMap<String, Vec<AstNodeId>>,
    pub nodes: Vec<SolcSourceUnitMember>,
    #[serde(default)]
    pub license: Option<String>,
    /// New in solc 0.8.30.
    #[serde(default)]
    pub experimental_solidity: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcPragmaDirective {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub literals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcImportDirective {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub absolute_path: String,
    pub file: String,
    pub scope: AstNodeId,
    pub source_unit: AstNodeId,
    pub symbol_aliases: Vec<SymbolAlias>,
    pub unit_alias: String,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcVariableDeclaration {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub constant: bool,
    pub scope: AstNodeId,
    pub state_variable: bool,
    pub storage_location: DataLocation,
    pub type_descriptions: TypeDescriptions,
    pub visibility: Visibility,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    /// `immutable` is new in 0.6.5, but the field is only exported since
    /// 0.6.6; in 0.6.5 it is missing for immutable variables because of a
    /// compiler bug. Constants are additionally marked by `constant`.
    #[serde(default)]
    pub mutability: Option<Mutability>,
    #[serde(default)]
    pub base_functions: Option<Vec<AstNodeId>>,
    /// Added in solc 0.6.9 for state variables.
    #[serde(default)]
    pub documentation: Option<SolcStructuredDocumentation>,
    #[serde(default)]
    pub function_selector: Option<String>,
    #[serde(default)]
    pub indexed: Option<bool>,
    #[serde(default)]
    pub overrides: Option<SolcOverrideSpecifier>,
    /// `None` only for <0.5.0 sources using the `var` keyword.
    #[serde(default)]
    pub type_name: Option<SolcTypeName>,
    #[serde(default)]
    pub value: Option<Box<SolcExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcEnumDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub canonical_name: String,
    pub members: Vec<SolcEnumValue>,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    /// New in solc 0.8.20.
    #[serde(default)]
    pub documentation: Option<SolcStructuredDocumentation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcFunctionDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub implemented: bool,
    pub kind: FunctionKind,
    pub modifiers: Vec<SolcModifierInvocation>,
    pub parameters: SolcParameterList,
    pub return_parameters: SolcParameterList,
    pub scope: AstNodeId,
    pub state_mutability: StateMutability,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub visibility: Visibility,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    #[serde(default)]
    pub base_functions: Option<Vec<AstNodeId>>,
    #[serde(default)]
    pub documentation: Option<SolcDocumentation>,
    #[serde(default)]
    pub function_selector: Option<String>,
    #[serde(default)]
    pub body: Option<SolcBlock>,
    #[serde(default)]
    pub overrides: Option<SolcOverrideSpecifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcStructDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub canonical_name: String,
    pub members: Vec<SolcVariableDeclaration>,
    pub scope: AstNodeId,
    pub visibility: Visibility,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    /// New in solc 0.8.20.
    #[serde(default)]
    pub documentation: Option<SolcStructuredDocumentation>,
}

/// New in solc 0.8.4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcErrorDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub name_location: Src,
    pub parameters: SolcParameterList,
    #[serde(default)]
    pub documentation: Option<SolcStructuredDocumentation>,
    #[serde(default)]
    pub error_selector: Option<String>,
}

/// New in solc 0.8.8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcUserDefinedValueTypeDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub underlying_type: SolcElementaryTypeName,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    /// Exported only since 0.8.9 because of a compiler bug.
    #[serde(default)]
    pub canonical_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcContractDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub base_contracts: Vec<SolcInheritanceSpecifier>,
    pub contract_dependencies: Vec<AstNodeId>,
    pub contract_kind: ContractKind,
    pub linearized_base_contracts: Vec<AstNodeId>,
    pub nodes: Vec<SolcContractMember>,
    pub scope: AstNodeId,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    /// Exported only since 0.8.9 because of a compiler bug.
    #[serde(default)]
    pub canonical_name: Option<String>,
    /// Missing when a file importing the contract cannot be compiled.
    #[serde(default)]
    pub fully_implemented: Option<bool>,
    #[serde(default)]
    pub documentation: Option<SolcDocumentation>,
    /// New in solc 0.8.4.
    #[serde(default)]
    pub used_errors: Option<Vec<AstNodeId>>,
    /// New in solc 0.8.20.
    #[serde(default)]
    pub used_events: Option<Vec<AstNodeId>>,
    #[serde(default, rename = "internalFunctionIDs")]
    pub internal_function_ids: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcEventDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub anonymous: bool,
    pub parameters: SolcParameterList,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    #[serde(default)]
    pub documentation: Option<SolcDocumentation>,
    #[serde(default)]
    pub event_selector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcModifierDefinition {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub parameters: SolcParameterList,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub visibility: Visibility,
    #[serde(default)]
    pub body: Option<SolcBlock>,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
    #[serde(default)]
    pub base_modifiers: Option<Vec<AstNodeId>>,
    #[serde(default)]
    pub documentation: Option<SolcDocumentation>,
    #[serde(default)]
    pub overrides: Option<SolcOverrideSpecifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcUsingForDirective {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    /// New in solc 0.8.13.
    #[serde(default)]
    pub function_list: Option<Vec<UsingForFunction>>,
    #[serde(default)]
    pub library_name: Option<SolcTypeNameOrPath>,
    #[serde(default)]
    pub type_name: Option<SolcTypeName>,
    /// New in solc 0.8.13.
    #[serde(default, rename = "global")]
    pub is_global: Option<bool>,
}

// ---------------------------------------------------------------------------
// Type names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcArrayTypeName {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub type_descriptions: TypeDescriptions,
    pub base_type: Box<SolcTypeName>,
    #[serde(default)]
    pub length: Option<Box<SolcExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcElementaryTypeName {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub type_descriptions: TypeDescriptions,
    pub name: String,
    /// Only set for `address` (`payable` or `nonpayable`).
    #[serde(default)]
    pub state_mutability: Option<StateMutability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcFunctionTypeName {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub type_descriptions: TypeDescriptions,
    pub parameter_types: SolcParameterList,
    pub return_parameter_types: SolcParameterList,
    pub state_mutability: StateMutability,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcMapping {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub type_descriptions: TypeDescriptions,
    pub key_type: Box<SolcTypeName>,
    pub value_type: Box<SolcTypeName>,
    /// New in solc 0.8.18.
    #[serde(default)]
    pub key_name: Option<String>,
    #[serde(default)]
    pub key_name_location: Option<Src>,
    #[serde(default)]
    pub value_name: Option<String>,
    #[serde(default)]
    pub value_name_location: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcUserDefinedTypeName {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub type_descriptions: TypeDescriptions,
    pub referenced_declaration: AstNodeId,
    /// Removed in solc 0.8.0.
    #[serde(default)]
    pub contract_scope: Option<AstNodeId>,
    /// Removed in solc 0.8.0 in favor of `pathNode`.
    #[serde(default)]
    pub name: Option<String>,
    /// Added in solc 0.8.0.
    #[serde(default)]
    pub path_node: Option<SolcIdentifierPath>,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcBlock {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub statements: Vec<SolcStatement>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcBreak {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcContinue {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcDoWhileStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub body: Box<SolcStatement>,
    pub condition: Box<SolcExpression>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcEmitStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub event_call: SolcFunctionCall,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcExpressionStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub expression: Box<SolcExpression>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcForStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub body: Box<SolcStatement>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub condition: Option<Box<SolcExpression>>,
    #[serde(default)]
    pub initialization_expression: Option<Box<SolcForInitialization>>,
    #[serde(default)]
    pub loop_expression: Option<SolcExpressionStatement>,
    /// New in solc 0.8.22.
    #[serde(default)]
    pub is_simple_counter_loop: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcIfStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub condition: Box<SolcExpression>,
    pub true_body: Box<SolcStatement>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub false_body: Option<Box<SolcStatement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcInlineAssembly {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(rename = "AST")]
    pub ast: SolcYulBlock,
    pub evm_version: InlineAssemblyEvmVersion,
    pub external_references: Vec<ExternalReferenceModel>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub flags: Option<Vec<InlineAssemblyFlag>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcPlaceholderStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcReturn {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub function_return_parameters: Option<AstNodeId>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub expression: Option<Box<SolcExpression>>,
}

/// `revert CustomError(…)` statement, new in solc 0.8.4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcRevertStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub error_call: SolcFunctionCall,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcTryStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub clauses: Vec<SolcTryCatchClause>,
    pub external_call: SolcFunctionCall,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// New in solc 0.8.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcUncheckedBlock {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub statements: Vec<SolcStatement>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcVariableDeclarationStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    /// One entry per declared slot; `null` for omitted tuple components.
    pub assignments: Vec<Option<AstNodeId>>,
    pub declarations: Vec<Option<SolcVariableDeclaration>>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub initial_value: Option<Box<SolcExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcWhileStatement {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub body: Box<SolcStatement>,
    pub condition: Box<SolcExpression>,
    #[serde(default)]
    pub documentation: Option<String>,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------
//
// `isConstant`, `isPure` and `isLValue` default to `false` because solc
// <=0.7.2 omitted them when false.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcAssignment {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub left_hand_side: Box<SolcExpression>,
    pub operator: AssignmentOperator,
    pub right_hand_side: Box<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcBinaryOperation {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub common_type: TypeDescriptions,
    pub left_expression: Box<SolcExpression>,
    pub operator: BinaryOpOperator,
    pub right_expression: Box<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// User-defined operator function, added in solc 0.8.19.
    #[serde(default)]
    pub function: Option<AstNodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcConditional {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub condition: Box<SolcExpression>,
    pub false_expression: Box<SolcExpression>,
    pub true_expression: Box<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcElementaryTypeNameExpression {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    /// A plain string in solc <0.6.0; such sources are unsupported.
    pub type_name: SolcElementaryTypeName,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcFunctionCall {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub arguments: Vec<SolcExpression>,
    pub expression: Box<SolcExpression>,
    pub kind: FunctionCallKind,
    pub names: Vec<String>,
    pub try_call: bool,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// Added in solc 0.8.16.
    #[serde(default)]
    pub name_locations: Option<Vec<Src>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcFunctionCallOptions {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub expression: Box<SolcExpression>,
    pub names: Vec<String>,
    pub options: Vec<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcIdentifier {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub overloaded_declarations: Vec<AstNodeId>,
    pub type_descriptions: TypeDescriptions,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// `None` only inside import directive symbol aliases.
    #[serde(default)]
    pub referenced_declaration: Option<AstNodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcIndexAccess {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub base_expression: Box<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// `None` e.g. in `abi.decode(data, (uint[], bool))`.
    #[serde(default)]
    pub index_expression: Option<Box<SolcExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcIndexRangeAccess {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub base_expression: Box<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    #[serde(default)]
    pub end_expression: Option<Box<SolcExpression>>,
    #[serde(default)]
    pub start_expression: Option<Box<SolcExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcLiteral {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub hex_value: String,
    pub kind: LiteralKind,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// For example `days` or `ether`.
    #[serde(default)]
    pub subdenomination: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcMemberAccess {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub expression: Box<SolcExpression>,
    pub member_name: String,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// `None` for enum value accesses before solc 0.8.2 (compiler bug).
    #[serde(default)]
    pub referenced_declaration: Option<AstNodeId>,
    /// Added in solc 0.8.16.
    #[serde(default)]
    pub member_location: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcNewExpression {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub type_name: Box<SolcTypeName>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcTupleExpression {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    /// `null` slots for omitted components, e.g. `(, x) = f()`.
    pub components: Vec<Option<SolcExpression>>,
    pub is_inline_array: bool,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcUnaryOperation {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub is_l_value: bool,
    #[serde(default)]
    pub is_pure: bool,
    pub l_value_requested: bool,
    pub type_descriptions: TypeDescriptions,
    pub operator: UnaryOpOperator,
    pub prefix: bool,
    pub sub_expression: Box<SolcExpression>,
    #[serde(default)]
    pub argument_types: Option<Vec<TypeDescriptions>>,
    /// User-defined operator function, added in solc 0.8.19.
    #[serde(default)]
    pub function: Option<AstNodeId>,
}

// ---------------------------------------------------------------------------
// Meta nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcOverrideSpecifier {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub overrides: Vec<SolcTypeNameOrPath>,
}

/// Replaces `UserDefinedTypeName` in many positions since solc 0.8.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcIdentifierPath {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    pub referenced_declaration: AstNodeId,
    /// Added in solc 0.8.16.
    #[serde(default)]
    pub name_locations: Option<Vec<Src>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcParameterList {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub parameters: Vec<SolcVariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcTryCatchClause {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub block: SolcBlock,
    pub error_name: String,
    #[serde(default)]
    pub parameters: Option<SolcParameterList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcStructuredDocumentation {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcEnumValue {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub name: String,
    /// New in solc 0.8.2.
    #[serde(default)]
    pub name_location: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcInheritanceSpecifier {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub base_name: SolcTypeNameOrPath,
    #[serde(default)]
    pub arguments: Option<Vec<SolcExpression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcModifierInvocation {
    pub id: AstNodeId,
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    pub modifier_name: SolcModifierName,
    #[serde(default)]
    pub arguments: Option<Vec<SolcExpression>>,
    /// New in solc 0.8.3; reliable for base constructor calls since 0.8.4.
    #[serde(default)]
    pub kind: Option<ModifierInvocationKind>,
}

// ---------------------------------------------------------------------------
// Yul nodes
// ---------------------------------------------------------------------------
//
// Yul nodes carry no `id`; `nativeSrc` (the location within the Yul AST
// itself) is new in solc 0.8.21.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulBlock {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub statements: Vec<SolcYulStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulAssignment {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub value: SolcYulExpression,
    pub variable_names: Vec<SolcYulIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulBreak {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulContinue {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulExpressionStatement {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub expression: SolcYulExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulLeave {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulForLoop {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub body: SolcYulBlock,
    pub condition: SolcYulExpression,
    pub post: SolcYulBlock,
    pub pre: SolcYulBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulFunctionDefinition {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub body: SolcYulBlock,
    pub name: String,
    #[serde(default)]
    pub parameters: Option<Vec<SolcYulTypedName>>,
    #[serde(default)]
    pub return_variables: Option<Vec<SolcYulTypedName>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulIf {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub body: SolcYulBlock,
    pub condition: SolcYulExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulSwitch {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub cases: Vec<SolcYulCase>,
    pub expression: SolcYulExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulVariableDeclaration {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub variables: Vec<SolcYulTypedName>,
    #[serde(default)]
    pub value: Option<SolcYulExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulFunctionCall {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub arguments: Vec<SolcYulExpression>,
    pub function_name: SolcYulIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulIdentifier {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulLiteral {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub kind: YulLiteralKind,
    #[serde(rename = "type")]
    pub type_: String,
    /// At least one of `value` and `hexValue` is set; `hexValue` exists
    /// since solc 0.8.5.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub hex_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulTypedName {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolcYulCase {
    pub src: Src,
    #[serde(default, rename = "nodeType", skip_serializing)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub native_src: Option<Src>,
    pub body: SolcYulBlock,
    pub value: SolcYulCaseValue,
}
