//! Semantic queries over the finished IR: reference resolution, lazily
//! derived attributes (name locations, mutability, selectors) and the
//! typed links detectors consume.

use std::collections::BTreeSet;

use ast::{AstNodeId, FunctionKind, Mutability};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use tiny_keccak::{Hasher, Keccak};

use crate::cfg::ControlFlowGraph;
use crate::error::IrError;
use crate::global::GlobalSymbol;
use crate::node::{ByteRange, NodeId, NodeKind, RefSite};
use crate::nodes::{DeclarationCore, ExternalReference, IdentifierPathPart};
use crate::types::SolType;
use crate::Build;

/// What a reference site resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferencedDeclaration {
    Declaration(NodeId),
    /// Namespace alias imports resolve to whole source units.
    SourceUnit(NodeId),
    Global(GlobalSymbol),
    /// Identifiers in import symbol aliases may name several overloaded
    /// functions at once.
    Overloaded(Vec<NodeId>),
}

/// What a function call invokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalledEntity {
    /// Contract (via `new`), function, event, error, struct or public
    /// state variable getter.
    Declaration(NodeId),
    Global(GlobalSymbol),
    /// Type conversions and `new` over array/elementary type names.
    TypeName(NodeId),
}

const IDENT: &str = r"[a-zA-Z$_][a-zA-Z0-9$_]*";

static CONTRACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*(?:abstract\s+)?contract\s+({IDENT})")).unwrap());
static INTERFACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*interface\s+({IDENT})")).unwrap());
static LIBRARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*library\s+({IDENT})")).unwrap());
static ENUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*enum\s+({IDENT})")).unwrap());
static STRUCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*struct\s+({IDENT})")).unwrap());
static EVENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*event\s+({IDENT})")).unwrap());
static ERROR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*error\s+({IDENT})")).unwrap());
static MODIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*modifier\s+({IDENT})")).unwrap());
static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*function\s+({IDENT})")).unwrap());
static SPECIAL_FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(constructor|fallback|receive)").unwrap());
static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*type\s+({IDENT})")).unwrap());
static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"({IDENT})(\s*=)?\s*$")).unwrap());
static MEMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*\.\s*({IDENT})")).unwrap());
static EXTERNAL_REF_IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{IDENT}")).unwrap());

const FILENAME: &str = r#"(?P<filename>'.*[^\\]'|".*[^\\]")"#;
static IMPORT_FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"import\s*{FILENAME}\s*")).unwrap());
static IMPORT_AS_FROM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"import\s*\*\s*as\s+{IDENT}\s+from\s*{FILENAME}\s*")).unwrap()
});
static IMPORT_AS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"import\s*{FILENAME}\s*as\s+{IDENT}\s*")).unwrap());
static IMPORT_ALIAS_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    let alias = format!(r"\s*{IDENT}(?:\s+as\s+{IDENT})?\s*");
    Regex::new(&format!(
        r"import\s*\{{{alias}(?:,{alias})*\}}\s*from\s*{FILENAME}\s*"
    ))
    .unwrap()
});

impl Build {
    // -- declarations -----------------------------------------------------

    pub fn declaration_core(&self, id: NodeId) -> Option<&DeclarationCore> {
        use NodeKind::*;
        Some(match &self.node(id).kind {
            ContractDefinition(n) => &n.decl,
            FunctionDefinition(n) => &n.decl,
            ModifierDefinition(n) => &n.decl,
            VariableDeclaration(n) => &n.decl,
            StructDefinition(n) => &n.decl,
            EnumDefinition(n) => &n.decl,
            EnumValue(n) => &n.decl,
            EventDefinition(n) => &n.decl,
            ErrorDefinition(n) => &n.decl,
            UserDefinedValueTypeDefinition(n) => &n.decl,
            _ => return None,
        })
    }

    /// Display name of a declaration.
    pub fn declaration_name(&self, id: NodeId) -> Option<&str> {
        Some(self.declaration_core(id)?.name.as_str())
    }

    /// Every site referring to the declaration.
    pub fn references(&self, id: NodeId) -> &BTreeSet<RefSite> {
        &self
            .declaration_core(id)
            .expect("not a declaration")
            .references
    }

    /// Byte range of the declaration's name. Recovered from the source
    /// when the compiler did not report it (pre-0.8.2 ASTs).
    pub fn name_location(&self, id: NodeId) -> ByteRange {
        let core = self.declaration_core(id).expect("not a declaration");
        *core
            .name_location
            .get_or_init(|| self.recover_name_location(id))
    }

    fn recover_name_location(&self, id: NodeId) -> ByteRange {
        let node = self.node(id);
        let regex: &Regex = match &node.kind {
            NodeKind::ContractDefinition(contract) => match contract.kind {
                ast::ContractKind::Contract => &CONTRACT_RE,
                ast::ContractKind::Interface => &INTERFACE_RE,
                ast::ContractKind::Library => &LIBRARY_RE,
            },
            NodeKind::EnumDefinition(_) => &ENUM_RE,
            NodeKind::StructDefinition(_) => &STRUCT_RE,
            NodeKind::EventDefinition(_) => &EVENT_RE,
            NodeKind::ErrorDefinition(_) => &ERROR_RE,
            NodeKind::ModifierDefinition(_) => &MODIFIER_RE,
            NodeKind::UserDefinedValueTypeDefinition(_) => &TYPE_RE,
            NodeKind::FunctionDefinition(function) => match function.kind {
                FunctionKind::Function | FunctionKind::FreeFunction => &FUNCTION_RE,
                FunctionKind::Constructor | FunctionKind::Fallback | FunctionKind::Receive => {
                    &SPECIAL_FUNCTION_RE
                }
            },
            NodeKind::VariableDeclaration(variable) => {
                // Parsed from the end, skipping an assigned value.
                let until = variable
                    .value
                    .map(|value| self.node(value).location.0)
                    .unwrap_or(node.location.1);
                let stripped =
                    crate::source::strip_comments(&self.file(id.file).source[node.location.0..until]);
                let captures = VARIABLE_RE
                    .captures(&stripped.text)
                    .expect("variable name not found in source");
                let group = captures.get(1).unwrap();
                let start = node.location.0 + stripped.to_original(group.start());
                return (start, start + group.len());
            }
            other => panic!("no name location recovery for {}", other.name()),
        };

        let stripped = crate::source::strip_comments(self.source_of(id));
        let captures = regex
            .captures(&stripped.text)
            .expect("declaration name not found in source");
        let group = captures.get(1).unwrap();
        let start = node.location.0 + stripped.to_original(group.start());
        (start, start + group.len())
    }

    /// Mutability of a variable, deriving the solc 0.6.5 gap from the
    /// source between the type name and the variable name.
    pub fn variable_mutability(&self, id: NodeId) -> Mutability {
        let variable = match &self.node(id).kind {
            NodeKind::VariableDeclaration(variable) => variable,
            other => panic!("expected VariableDeclaration, got {}", other.name()),
        };
        if let Some(declared) = variable.declared_mutability {
            return declared;
        }
        *variable.derived_mutability.get_or_init(|| {
            let keywords = match variable.type_name {
                Some(type_name) => {
                    let type_end = self.node(type_name).location.1;
                    let name_start = self.name_location(id).0;
                    &self.file(id.file).source[type_end..name_start]
                }
                None => &[][..],
            };
            if keywords.windows(b"immutable".len()).any(|w| w == b"immutable") {
                Mutability::Immutable
            } else if variable.constant {
                Mutability::Constant
            } else {
                Mutability::Mutable
            }
        })
    }

    /// Contracts of the C3 linearization, the contract itself first.
    pub fn linearized_base_contracts(&self, id: NodeId) -> Vec<NodeId> {
        let cu = self.file(id.file).cu_hash;
        match &self.node(id).kind {
            NodeKind::ContractDefinition(contract) => contract
                .linearized_base_contract_ids
                .iter()
                .map(|&base_id| self.resolver.resolve_node(base_id, cu))
                .collect(),
            other => panic!("expected ContractDefinition, got {}", other.name()),
        }
    }

    /// Functions (or public state variable getters) this declaration
    /// overrides.
    pub fn base_functions(&self, id: NodeId) -> Vec<NodeId> {
        let cu = self.file(id.file).cu_hash;
        let ids: &[AstNodeId] = match &self.node(id).kind {
            NodeKind::FunctionDefinition(f) => &f.base_function_ids,
            NodeKind::VariableDeclaration(v) => &v.base_function_ids,
            NodeKind::ModifierDefinition(m) => &m.base_modifier_ids,
            other => panic!("no base functions on {}", other.name()),
        };
        ids.iter()
            .map(|&base_id| self.resolver.resolve_node(base_id, cu))
            .collect()
    }

    /// 32-byte selector of an event, computed from the signature when
    /// the compiler did not report one.
    pub fn event_selector(&self, id: NodeId) -> [u8; 32] {
        let event = match &self.node(id).kind {
            NodeKind::EventDefinition(event) => event,
            other => panic!("expected EventDefinition, got {}", other.name()),
        };
        if let Some(declared) = &event.declared_selector {
            let mut out = [0u8; 32];
            decode_hex(declared, &mut out);
            return out;
        }
        *event.computed_selector.get_or_init(|| {
            keccak256(self.signature_of(&event.decl.name, event.parameters).as_bytes())
        })
    }

    /// 4-byte selector of an error, computed from the signature when the
    /// compiler did not report one.
    pub fn error_selector(&self, id: NodeId) -> [u8; 4] {
        let error = match &self.node(id).kind {
            NodeKind::ErrorDefinition(error) => error,
            other => panic!("expected ErrorDefinition, got {}", other.name()),
        };
        if let Some(declared) = &error.declared_selector {
            let mut out = [0u8; 4];
            decode_hex(declared, &mut out);
            return out;
        }
        *error.computed_selector.get_or_init(|| {
            let digest =
                keccak256(self.signature_of(&error.decl.name, error.parameters).as_bytes());
            [digest[0], digest[1], digest[2], digest[3]]
        })
    }

    fn signature_of(&self, name: &str, parameters: NodeId) -> String {
        let parameter_ids = match &self.node(parameters).kind {
            NodeKind::ParameterList(list) => &list.parameters,
            other => panic!("expected ParameterList, got {}", other.name()),
        };
        let types: Vec<String> = parameter_ids
            .iter()
            .map(|&parameter| self.variable_abi_type(parameter))
            .collect();
        format!("{name}({})", types.join(","))
    }

    /// Canonical ABI type of a variable declaration.
    pub fn variable_abi_type(&self, id: NodeId) -> String {
        let parsed = self
            .type_of(id)
            .unwrap_or_else(|| panic!("variable without a type identifier"));
        self.abi_type(&parsed.clone(), id)
    }

    fn abi_type(&self, parsed: &SolType, context: NodeId) -> String {
        let cu = self.file(context.file).cu_hash;
        match parsed {
            SolType::Address { .. } | SolType::Contract { .. } => "address".into(),
            SolType::Bool => "bool".into(),
            SolType::Int { bits } => format!("int{bits}"),
            SolType::UInt { bits } => format!("uint{bits}"),
            SolType::Fixed {
                total_bits,
                fractional_digits,
            } => format!("fixed{total_bits}x{fractional_digits}"),
            SolType::UFixed {
                total_bits,
                fractional_digits,
            } => format!("ufixed{total_bits}x{fractional_digits}"),
            SolType::StringType { .. } => "string".into(),
            SolType::Bytes { .. } => "bytes".into(),
            SolType::FixedBytes { bytes } => format!("bytes{bytes}"),
            SolType::Enum { .. } => "uint8".into(),
            SolType::Function { .. } => "function".into(),
            SolType::Array { base, length, .. } => {
                let base = self.abi_type(base, context);
                match length {
                    Some(length) => format!("{base}[{length}]"),
                    None => format!("{base}[]"),
                }
            }
            SolType::Struct { ast_id, .. } => {
                let declaration = self.resolver.resolve_node(*ast_id, cu);
                let members = match &self.node(declaration).kind {
                    NodeKind::StructDefinition(def) => def.members.clone(),
                    other => panic!("struct type resolves to {}", other.name()),
                };
                let fields: Vec<String> = members
                    .iter()
                    .map(|&member| self.variable_abi_type(member))
                    .collect();
                format!("({})", fields.join(","))
            }
            SolType::UserDefinedValueType { ast_id, .. } => {
                let declaration = self.resolver.resolve_node(*ast_id, cu);
                let underlying = match &self.node(declaration).kind {
                    NodeKind::UserDefinedValueTypeDefinition(def) => def.underlying_type,
                    other => panic!("value type resolves to {}", other.name()),
                };
                match &self.node(underlying).kind {
                    NodeKind::ElementaryTypeName(name) => name.name.clone(),
                    other => panic!("underlying type is {}", other.name()),
                }
            }
            other => panic!("type has no ABI encoding: {other:?}"),
        }
    }

    // -- expressions ------------------------------------------------------

    /// The parsed type of an expression, type name or variable.
    pub fn type_of(&self, id: NodeId) -> Option<&SolType> {
        self.type_info_of(id)?.parsed()
    }

    /// The compiler's human-readable type string.
    pub fn type_string_of(&self, id: NodeId) -> Option<&str> {
        self.type_info_of(id)?.type_string.as_deref()
    }

    fn type_info_of(&self, id: NodeId) -> Option<&crate::nodes::TypeInfo> {
        use NodeKind::*;
        Some(match &self.node(id).kind {
            Assignment(n) => &n.type_info,
            BinaryOperation(n) => &n.type_info,
            UnaryOperation(n) => &n.type_info,
            Conditional(n) => &n.type_info,
            ElementaryTypeNameExpression(n) => &n.type_info,
            FunctionCall(n) => &n.type_info,
            FunctionCallOptions(n) => &n.type_info,
            Identifier(n) => &n.type_info,
            IndexAccess(n) => &n.type_info,
            IndexRangeAccess(n) => &n.type_info,
            Literal(n) => &n.type_info,
            MemberAccess(n) => &n.type_info,
            NewExpression(n) => &n.type_info,
            TupleExpression(n) => &n.type_info,
            ArrayTypeName(n) => &n.type_info,
            ElementaryTypeName(n) => &n.type_info,
            FunctionTypeName(n) => &n.type_info,
            Mapping(n) => &n.type_info,
            UserDefinedTypeName(n) => &n.type_info,
            VariableDeclaration(n) => &n.type_info,
            _ => return None,
        })
    }

    /// What a reference node (identifier, member access, identifier
    /// path or user-defined type name) resolves to.
    pub fn referenced_declaration(&self, id: NodeId) -> Option<ReferencedDeclaration> {
        let cu = self.file(id.file).cu_hash;
        let single = |referenced_id: AstNodeId| {
            if referenced_id < 0 {
                return ReferencedDeclaration::Global(
                    GlobalSymbol::from_id(referenced_id).expect("unknown global symbol"),
                );
            }
            let node = self.resolver.resolve_node(referenced_id, cu);
            if matches!(self.node(node).kind, NodeKind::SourceUnit(_)) {
                ReferencedDeclaration::SourceUnit(node)
            } else {
                ReferencedDeclaration::Declaration(node)
            }
        };

        match &self.node(id).kind {
            NodeKind::Identifier(identifier) => {
                match identifier.referenced_declaration_ids.as_slice() {
                    [] => None,
                    [referenced_id] => Some(single(*referenced_id)),
                    many => {
                        let functions: Vec<NodeId> = many
                            .iter()
                            .map(|&referenced_id| {
                                let node = self.resolver.resolve_node(referenced_id, cu);
                                assert!(
                                    matches!(
                                        self.node(node).kind,
                                        NodeKind::FunctionDefinition(_)
                                    ),
                                    "overload set contains a non-function"
                                );
                                node
                            })
                            .collect();
                        Some(ReferencedDeclaration::Overloaded(functions))
                    }
                }
            }
            NodeKind::MemberAccess(member) => member.referenced_declaration_id.map(single),
            NodeKind::IdentifierPath(path) => Some(single(path.referenced_declaration_id)),
            NodeKind::UserDefinedTypeName(type_name) => {
                Some(single(type_name.referenced_declaration_id))
            }
            _ => None,
        }
    }

    /// Whether the expression reads or writes a state variable.
    ///
    /// The predicate follows member access and index chains but not
    /// function return values.
    pub fn is_ref_to_state_variable(&self, id: NodeId) -> bool {
        let is_state_variable = |node: NodeId| {
            matches!(
                &self.node(node).kind,
                NodeKind::VariableDeclaration(v) if v.is_state_variable
            )
        };
        match &self.node(id).kind {
            NodeKind::Identifier(_) => matches!(
                self.referenced_declaration(id),
                Some(ReferencedDeclaration::Declaration(node)) if is_state_variable(node)
            ),
            NodeKind::MemberAccess(member) => {
                let direct = matches!(
                    self.referenced_declaration(id),
                    Some(ReferencedDeclaration::Declaration(node)) if is_state_variable(node)
                );
                direct || self.is_ref_to_state_variable(member.expression)
            }
            NodeKind::IndexAccess(access) => self.is_ref_to_state_variable(access.base_expression),
            NodeKind::IndexRangeAccess(access) => {
                self.is_ref_to_state_variable(access.base_expression)
            }
            NodeKind::Conditional(conditional) => {
                self.is_ref_to_state_variable(conditional.true_expression)
                    || self.is_ref_to_state_variable(conditional.false_expression)
            }
            NodeKind::TupleExpression(tuple) => match tuple.components.as_slice() {
                [Some(single)] => self.is_ref_to_state_variable(*single),
                _ => false,
            },
            _ => false,
        }
    }

    /// The innermost statement containing the expression, if any.
    pub fn statement_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.node(id).parent;
        while let Some(node) = current {
            if self.node(node).kind.is_statement() {
                return Some(node);
            }
            current = self.node(node).parent;
        }
        None
    }

    /// What a function call invokes: a declaration, a global symbol or a
    /// type name (conversions, `new` over arrays).
    pub fn function_called(&self, id: NodeId) -> Option<CalledEntity> {
        let call = match &self.node(id).kind {
            NodeKind::FunctionCall(call) => call,
            other => panic!("expected FunctionCall, got {}", other.name()),
        };
        self.call_target(call.expression)
    }

    fn call_target(&self, expression: NodeId) -> Option<CalledEntity> {
        match &self.node(expression).kind {
            NodeKind::Identifier(_) | NodeKind::MemberAccess(_) => {
                match self.referenced_declaration(expression)? {
                    ReferencedDeclaration::Declaration(node) => {
                        Some(CalledEntity::Declaration(node))
                    }
                    ReferencedDeclaration::Global(symbol) => Some(CalledEntity::Global(symbol)),
                    ReferencedDeclaration::SourceUnit(_) => None,
                    ReferencedDeclaration::Overloaded(_) => None,
                }
            }
            NodeKind::NewExpression(new_expression) => {
                match &self.node(new_expression.type_name).kind {
                    NodeKind::UserDefinedTypeName(_) => {
                        match self.referenced_declaration(new_expression.type_name)? {
                            ReferencedDeclaration::Declaration(node) => {
                                Some(CalledEntity::Declaration(node))
                            }
                            _ => None,
                        }
                    }
                    _ => Some(CalledEntity::TypeName(new_expression.type_name)),
                }
            }
            NodeKind::ElementaryTypeNameExpression(expr) => {
                Some(CalledEntity::TypeName(expr.type_name))
            }
            NodeKind::FunctionCallOptions(options) => self.call_target(options.expression),
            NodeKind::TupleExpression(tuple) => match tuple.components.as_slice() {
                [Some(single)] => self.call_target(*single),
                _ => None,
            },
            _ => None,
        }
    }

    /// Byte range of the member name after the dot.
    pub fn member_location(&self, id: NodeId) -> ByteRange {
        let member = match &self.node(id).kind {
            NodeKind::MemberAccess(member) => member,
            other => panic!("expected MemberAccess, got {}", other.name()),
        };
        *member.member_location.get_or_init(|| {
            let expression_end = self.node(member.expression).location.1;
            let node_end = self.node(id).location.1;
            let slice = &self.file(id.file).source[expression_end..node_end];
            let captures = MEMBER_RE
                .captures(slice)
                .expect("member name not found after expression");
            let group = captures.get(1).unwrap();
            (expression_end + group.start(), expression_end + group.end())
        })
    }

    /// Byte range of the quoted filename inside an import directive.
    pub fn import_string_location(&self, id: NodeId) -> ByteRange {
        let import = match &self.node(id).kind {
            NodeKind::ImportDirective(import) => import,
            other => panic!("expected ImportDirective, got {}", other.name()),
        };
        *import.import_string_location.get_or_init(|| {
            let source = self.source_of(id);
            let start = self.node(id).location.0;
            for regex in [
                &*IMPORT_FILENAME_RE,
                &*IMPORT_AS_FROM_RE,
                &*IMPORT_AS_RE,
                &*IMPORT_ALIAS_LIST_RE,
            ] {
                if let Some(captures) = regex.captures(source) {
                    let group = captures.name("filename").unwrap();
                    return (start + group.start(), start + group.end());
                }
            }
            panic!("import string not found in source")
        })
    }

    /// Resolved parts of an identifier path, left to right.
    pub fn identifier_path_parts(&self, id: NodeId) -> &[IdentifierPathPart] {
        match &self.node(id).kind {
            NodeKind::IdentifierPath(path) => &path.parts,
            other => panic!("expected IdentifierPath, got {}", other.name()),
        }
    }

    /// External references of an inline assembly block, ordered by byte
    /// location.
    pub fn external_references(&self, id: NodeId) -> &[ExternalReference] {
        match &self.node(id).kind {
            NodeKind::InlineAssembly(assembly) => &assembly.external_references,
            other => panic!("expected InlineAssembly, got {}", other.name()),
        }
    }

    /// Byte range of just the identifier of an external reference,
    /// excluding a `.slot`-style suffix.
    pub fn external_reference_identifier_location(
        &self,
        assembly: NodeId,
        index: u32,
    ) -> ByteRange {
        let reference = &self.external_references(assembly)[index as usize];
        *reference.identifier_location.get_or_init(|| {
            let slice = &self.file(assembly.file).source[reference.location.0..reference.location.1];
            let matched = EXTERNAL_REF_IDENT_RE
                .find(slice)
                .expect("external reference does not start with an identifier");
            (
                reference.location.0 + matched.start(),
                reference.location.0 + matched.end(),
            )
        })
    }

    // -- control flow -----------------------------------------------------

    /// The control flow graph of a function, modifier or Yul function.
    /// Built on first access and cached.
    pub fn cfg_of(&self, id: NodeId) -> Result<&ControlFlowGraph, IrError> {
        match &self.node(id).kind {
            NodeKind::FunctionDefinition(function) => {
                let body = function.body.ok_or(IrError::MissingBody)?;
                Ok(function
                    .cfg
                    .get_or_init(|| crate::cfg::build_cfg(self, id, body)))
            }
            NodeKind::ModifierDefinition(modifier) => {
                let body = modifier.body.ok_or(IrError::MissingBody)?;
                Ok(modifier
                    .cfg
                    .get_or_init(|| crate::cfg::build_cfg(self, id, body)))
            }
            NodeKind::YulFunctionDefinition(function) => {
                let body = function.body;
                Ok(function
                    .cfg
                    .get_or_init(|| crate::cfg::build_cfg(self, id, body)))
            }
            other => panic!("no control flow graph for {}", other.name()),
        }
    }
}

pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

fn decode_hex(hex: &str, out: &mut [u8]) {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    assert_eq!(
        hex.len(),
        out.len() * 2,
        "selector hex string has unexpected length"
    );
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .expect("selector is not valid hex");
    }
}

#[cfg(test)]
mod tests {
    use super::keccak256;

    #[test]
    fn keccak_of_transfer_signature() {
        // Selector of the canonical ERC-20 Transfer event.
        let digest = keccak256(b"Transfer(address,address,uint256)");
        assert_eq!(
            digest[..4],
            [0xdd, 0xf2, 0x52, 0xad],
        );
    }
}
