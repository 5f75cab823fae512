//! The common IR node record and its tagged payload.
//!
//! The original compiler AST is a deep class hierarchy; here it is
//! flattened into one record type ([`IrNode`]) holding the fields every
//! node shares, plus a tagged union ([`NodeKind`]) for the kind-specific
//! data. Nodes live in per-file arenas and address each other through
//! [`NodeId`], which never owns its target: evicting a file empties its
//! arena and the teardown actions remove any ids that pointed into it.

use ast::AstNodeId;

use crate::nodes::*;

/// Index of a source file within a [`Build`](crate::Build). Stable for
/// the lifetime of the build, across eviction and re-ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

/// Arena handle of one IR node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub file: FileId,
    pub index: u32,
}

impl NodeId {
    pub fn source_unit_of(file: FileId) -> Self {
        NodeId { file, index: 0 }
    }
}

/// Half-open `[start, end)` byte range within a source file.
pub type ByteRange = (usize, usize);

/// A site referring to a declaration. Identifier-path parts and external
/// references are not IR nodes of their own, so they are addressed as
/// `(owning node, index)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefSite {
    Identifier(NodeId),
    MemberAccess(NodeId),
    /// Part `.1` of the identifier path `.0`.
    IdentifierPathPart(NodeId, u32),
    /// External reference `.1` of the inline assembly block `.0`.
    ExternalReference(NodeId, u32),
    UnaryOperation(NodeId),
    BinaryOperation(NodeId),
}

impl RefSite {
    /// The IR node the site lives in.
    pub fn node(self) -> NodeId {
        match self {
            RefSite::Identifier(n)
            | RefSite::MemberAccess(n)
            | RefSite::IdentifierPathPart(n, _)
            | RefSite::ExternalReference(n, _)
            | RefSite::UnaryOperation(n)
            | RefSite::BinaryOperation(n) => n,
        }
    }
}

/// Fields shared by every IR node.
#[derive(Debug)]
pub struct IrNode {
    /// `None` only for the source unit root.
    pub parent: Option<NodeId>,
    /// Depth in the tree; the source unit has depth 0.
    pub depth: u32,
    /// Byte range the node covers in its file.
    pub location: ByteRange,
    /// The compiler's integer node id. `None` for Yul nodes, which carry
    /// no id.
    pub ast_id: Option<AstNodeId>,
    /// Direct children in syntactic order.
    pub children: Vec<NodeId>,
    pub kind: NodeKind,
}

/// Kind-specific payload of an IR node.
#[derive(Debug)]
pub enum NodeKind {
    // Meta
    SourceUnit(SourceUnit),
    PragmaDirective(PragmaDirective),
    ImportDirective(ImportDirective),
    UsingForDirective(UsingForDirective),
    InheritanceSpecifier(InheritanceSpecifier),
    ModifierInvocation(ModifierInvocation),
    OverrideSpecifier(OverrideSpecifier),
    ParameterList(ParameterList),
    StructuredDocumentation(StructuredDocumentation),
    IdentifierPath(IdentifierPath),
    TryCatchClause(TryCatchClause),

    // Declarations
    ContractDefinition(Box<ContractDefinition>),
    FunctionDefinition(Box<FunctionDefinition>),
    ModifierDefinition(Box<ModifierDefinition>),
    VariableDeclaration(Box<VariableDeclaration>),
    StructDefinition(StructDefinition),
    EnumDefinition(EnumDefinition),
    EnumValue(EnumValue),
    EventDefinition(EventDefinition),
    ErrorDefinition(ErrorDefinition),
    UserDefinedValueTypeDefinition(UserDefinedValueTypeDefinition),

    // Expressions
    Assignment(Assignment),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    Conditional(Conditional),
    ElementaryTypeNameExpression(ElementaryTypeNameExpression),
    FunctionCall(FunctionCall),
    FunctionCallOptions(FunctionCallOptions),
    Identifier(Identifier),
    IndexAccess(IndexAccess),
    IndexRangeAccess(IndexRangeAccess),
    Literal(Literal),
    MemberAccess(MemberAccess),
    NewExpression(NewExpression),
    TupleExpression(TupleExpression),

    // Statements
    Block(Block),
    UncheckedBlock(Block),
    Break,
    Continue,
    DoWhileStatement(DoWhileStatement),
    EmitStatement(EmitStatement),
    ExpressionStatement(ExpressionStatement),
    ForStatement(ForStatement),
    IfStatement(IfStatement),
    InlineAssembly(Box<InlineAssembly>),
    PlaceholderStatement,
    Return(Return),
    RevertStatement(RevertStatement),
    TryStatement(TryStatement),
    VariableDeclarationStatement(VariableDeclarationStatement),
    WhileStatement(WhileStatement),

    // Type names
    ArrayTypeName(ArrayTypeName),
    ElementaryTypeName(ElementaryTypeName),
    FunctionTypeName(FunctionTypeName),
    Mapping(Mapping),
    UserDefinedTypeName(UserDefinedTypeName),

    // Yul
    YulBlock(YulBlock),
    YulAssignment(YulAssignment),
    YulBreak,
    YulCase(YulCase),
    YulContinue,
    YulExpressionStatement(YulExpressionStatement),
    YulForLoop(YulForLoop),
    YulFunctionCall(YulFunctionCall),
    YulFunctionDefinition(YulFunctionDefinition),
    YulIdentifier(YulIdentifier),
    YulIf(YulIf),
    YulLeave,
    YulLiteral(YulLiteral),
    YulSwitch(YulSwitch),
    YulTypedName(YulTypedName),
    YulVariableDeclaration(YulVariableDeclaration),
}

impl NodeKind {
    /// The kind name, matching the compiler's `nodeType` vocabulary.
    pub fn name(&self) -> &'static str {
        use NodeKind::*;
        match self {
            SourceUnit(_) => "SourceUnit",
            PragmaDirective(_) => "PragmaDirective",
            ImportDirective(_) => "ImportDirective",
            UsingForDirective(_) => "UsingForDirective",
            InheritanceSpecifier(_) => "InheritanceSpecifier",
            ModifierInvocation(_) => "ModifierInvocation",
            OverrideSpecifier(_) => "OverrideSpecifier",
            ParameterList(_) => "ParameterList",
            StructuredDocumentation(_) => "StructuredDocumentation",
            IdentifierPath(_) => "IdentifierPath",
            TryCatchClause(_) => "TryCatchClause",
            ContractDefinition(_) => "ContractDefinition",
            FunctionDefinition(_) => "FunctionDefinition",
            ModifierDefinition(_) => "ModifierDefinition",
            VariableDeclaration(_) => "VariableDeclaration",
            StructDefinition(_) => "StructDefinition",
            EnumDefinition(_) => "EnumDefinition",
            EnumValue(_) => "EnumValue",
            EventDefinition(_) => "EventDefinition",
            ErrorDefinition(_) => "ErrorDefinition",
            UserDefinedValueTypeDefinition(_) => "UserDefinedValueTypeDefinition",
            Assignment(_) => "Assignment",
            BinaryOperation(_) => "BinaryOperation",
            UnaryOperation(_) => "UnaryOperation",
            Conditional(_) => "Conditional",
            ElementaryTypeNameExpression(_) => "ElementaryTypeNameExpression",
            FunctionCall(_) => "FunctionCall",
            FunctionCallOptions(_) => "FunctionCallOptions",
            Identifier(_) => "Identifier",
            IndexAccess(_) => "IndexAccess",
            IndexRangeAccess(_) => "IndexRangeAccess",
            Literal(_) => "Literal",
            MemberAccess(_) => "MemberAccess",
            NewExpression(_) => "NewExpression",
            TupleExpression(_) => "TupleExpression",
            Block(_) => "Block",
            UncheckedBlock(_) => "UncheckedBlock",
            Break => "Break",
            Continue => "Continue",
            DoWhileStatement(_) => "DoWhileStatement",
            EmitStatement(_) => "EmitStatement",
            ExpressionStatement(_) => "ExpressionStatement",
            ForStatement(_) => "ForStatement",
            IfStatement(_) => "IfStatement",
            InlineAssembly(_) => "InlineAssembly",
            PlaceholderStatement => "PlaceholderStatement",
            Return(_) => "Return",
            RevertStatement(_) => "RevertStatement",
            TryStatement(_) => "TryStatement",
            VariableDeclarationStatement(_) => "VariableDeclarationStatement",
            WhileStatement(_) => "WhileStatement",
            ArrayTypeName(_) => "ArrayTypeName",
            ElementaryTypeName(_) => "ElementaryTypeName",
            FunctionTypeName(_) => "FunctionTypeName",
            Mapping(_) => "Mapping",
            UserDefinedTypeName(_) => "UserDefinedTypeName",
            YulBlock(_) => "YulBlock",
            YulAssignment(_) => "YulAssignment",
            YulBreak => "YulBreak",
            YulCase(_) => "YulCase",
            YulContinue => "YulContinue",
            YulExpressionStatement(_) => "YulExpressionStatement",
            YulForLoop(_) => "YulForLoop",
            YulFunctionCall(_) => "YulFunctionCall",
            YulFunctionDefinition(_) => "YulFunctionDefinition",
            YulIdentifier(_) => "YulIdentifier",
            YulIf(_) => "YulIf",
            YulLeave => "YulLeave",
            YulLiteral(_) => "YulLiteral",
            YulSwitch(_) => "YulSwitch",
            YulTypedName(_) => "YulTypedName",
            YulVariableDeclaration(_) => "YulVariableDeclaration",
        }
    }

    /// Whether the node introduces a named, referenceable entity.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::ContractDefinition(_)
                | NodeKind::FunctionDefinition(_)
                | NodeKind::ModifierDefinition(_)
                | NodeKind::VariableDeclaration(_)
                | NodeKind::StructDefinition(_)
                | NodeKind::EnumDefinition(_)
                | NodeKind::EnumValue(_)
                | NodeKind::EventDefinition(_)
                | NodeKind::ErrorDefinition(_)
                | NodeKind::UserDefinedValueTypeDefinition(_)
        )
    }

    /// Whether the node belongs to the Yul sub-hierarchy.
    pub fn is_yul(&self) -> bool {
        matches!(
            self,
            NodeKind::YulBlock(_)
                | NodeKind::YulAssignment(_)
                | NodeKind::YulBreak
                | NodeKind::YulCase(_)
                | NodeKind::YulContinue
                | NodeKind::YulExpressionStatement(_)
                | NodeKind::YulForLoop(_)
                | NodeKind::YulFunctionCall(_)
                | NodeKind::YulFunctionDefinition(_)
                | NodeKind::YulIdentifier(_)
                | NodeKind::YulIf(_)
                | NodeKind::YulLeave
                | NodeKind::YulLiteral(_)
                | NodeKind::YulSwitch(_)
                | NodeKind::YulTypedName(_)
                | NodeKind::YulVariableDeclaration(_)
        )
    }

    /// Whether the node is a Solidity or Yul statement.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Block(_)
                | NodeKind::UncheckedBlock(_)
                | NodeKind::Break
                | NodeKind::Continue
                | NodeKind::DoWhileStatement(_)
                | NodeKind::EmitStatement(_)
                | NodeKind::ExpressionStatement(_)
                | NodeKind::ForStatement(_)
                | NodeKind::IfStatement(_)
                | NodeKind::InlineAssembly(_)
                | NodeKind::PlaceholderStatement
                | NodeKind::Return(_)
                | NodeKind::RevertStatement(_)
                | NodeKind::TryStatement(_)
                | NodeKind::VariableDeclarationStatement(_)
                | NodeKind::WhileStatement(_)
                | NodeKind::YulBlock(_)
                | NodeKind::YulAssignment(_)
                | NodeKind::YulBreak
                | NodeKind::YulCase(_)
                | NodeKind::YulContinue
                | NodeKind::YulExpressionStatement(_)
                | NodeKind::YulForLoop(_)
                | NodeKind::YulFunctionDefinition(_)
                | NodeKind::YulIf(_)
                | NodeKind::YulLeave
                | NodeKind::YulSwitch(_)
                | NodeKind::YulVariableDeclaration(_)
        )
    }

    /// Whether the node is an expression (has a value and a type).
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::Assignment(_)
                | NodeKind::BinaryOperation(_)
                | NodeKind::UnaryOperation(_)
                | NodeKind::Conditional(_)
                | NodeKind::ElementaryTypeNameExpression(_)
                | NodeKind::FunctionCall(_)
                | NodeKind::FunctionCallOptions(_)
                | NodeKind::Identifier(_)
                | NodeKind::IndexAccess(_)
                | NodeKind::IndexRangeAccess(_)
                | NodeKind::Literal(_)
                | NodeKind::MemberAccess(_)
                | NodeKind::NewExpression(_)
                | NodeKind::TupleExpression(_)
        )
    }
}

impl IrNode {
    /// Byte length of the node's source range.
    pub fn byte_len(&self) -> usize {
        self.location.1 - self.location.0
    }
}
