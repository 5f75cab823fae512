//! IR construction: one top-down walk per source file.
//!
//! Every constructor registers the node with the reference resolver
//! (Solidity nodes only; Yul nodes carry no compiler id), inserts its
//! byte range into the interval set when non-empty, records children in
//! syntactic order and enqueues whatever post-process work the node kind
//! requires.

use std::collections::BTreeMap;

use ast::{AstNodeId, Src};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::binding::{
    PRIORITY_BIND_IDENTIFIERS, PRIORITY_IMPORT_REBIND, PRIORITY_LINK_INHERITED_EVENTS,
    PRIORITY_RESOLVE_STRUCTURE,
};
use crate::node::{FileId, IrNode, NodeId, NodeKind};
use crate::nodes::*;
use crate::resolver::{CuHash, ReferenceResolver, WorkItem};

pub(crate) struct BuiltFile {
    pub nodes: Vec<IrNode>,
    pub intervals: Vec<(usize, usize, u32)>,
}

pub(crate) struct FileBuilder<'a> {
    file: FileId,
    cu_hash: CuHash,
    nodes: Vec<IrNode>,
    intervals: Vec<(usize, usize, u32)>,
    resolver: &'a mut ReferenceResolver,
    contracts_info: Option<&'a BTreeMap<String, JsonValue>>,
}

pub(crate) fn build_file(
    file: FileId,
    cu_hash: CuHash,
    ast: &ast::SolcSourceUnit,
    contracts_info: Option<&BTreeMap<String, JsonValue>>,
    resolver: &mut ReferenceResolver,
) -> BuiltFile {
    let mut builder = FileBuilder {
        file,
        cu_hash,
        nodes: Vec::new(),
        intervals: Vec::new(),
        resolver,
        contracts_info,
    };
    builder.build_source_unit(ast);
    debug!(nodes = builder.nodes.len(), "materialized IR nodes");
    BuiltFile {
        nodes: builder.nodes,
        intervals: builder.intervals,
    }
}

impl<'a> FileBuilder<'a> {
    /// Allocates the common record of a Solidity node and wires it into
    /// the tree, resolver and interval set. The payload is attached by
    /// [`finish`](Self::finish) once the children exist.
    fn begin(&mut self, parent: Option<NodeId>, src: Src, ast_id: AstNodeId) -> NodeId {
        let id = self.begin_raw(parent, src, Some(ast_id));
        self.resolver.register_node(id, ast_id, self.cu_hash);
        id
    }

    /// Same as [`begin`](Self::begin) for Yul nodes, which have no
    /// compiler id to register.
    fn begin_yul(&mut self, parent: NodeId, src: Src) -> NodeId {
        self.begin_raw(Some(parent), src, None)
    }

    fn begin_raw(&mut self, parent: Option<NodeId>, src: Src, ast_id: Option<AstNodeId>) -> NodeId {
        let location = src.offsets();
        let index = self.nodes.len() as u32;
        let id = NodeId {
            file: self.file,
            index,
        };
        let depth = match parent {
            Some(p) => {
                self.nodes[p.index as usize].children.push(id);
                self.nodes[p.index as usize].depth + 1
            }
            None => 0,
        };
        self.nodes.push(IrNode {
            parent,
            depth,
            location,
            ast_id,
            children: Vec::new(),
            // Replaced by `finish`; a placeholder statement carries no
            // payload so it doubles as the pre-finish marker.
            kind: NodeKind::PlaceholderStatement,
        });
        if location.0 != location.1 {
            self.intervals.push((location.0, location.1, index));
        }
        id
    }

    fn finish(&mut self, id: NodeId, kind: NodeKind) {
        self.nodes[id.index as usize].kind = kind;
    }

    fn enqueue(&mut self, priority: i32, item: WorkItem) {
        self.resolver.enqueue(priority, item);
    }

    // -- source unit ------------------------------------------------------

    fn build_source_unit(&mut self, unit: &ast::SolcSourceUnit) -> NodeId {
        let id = self.begin(None, unit.src, unit.id);
        let mut payload = SourceUnit {
            source_unit_name: unit.absolute_path.clone(),
            license: unit.license.clone(),
            pragmas: Vec::new(),
            imports: Vec::new(),
            contracts: Vec::new(),
            functions: Vec::new(),
            declared_variables: Vec::new(),
            structs: Vec::new(),
            enums: Vec::new(),
            errors: Vec::new(),
            events: Vec::new(),
            user_defined_value_types: Vec::new(),
            using_for_directives: Vec::new(),
        };
        for member in &unit.nodes {
            use ast::SolcSourceUnitMember as M;
            match member {
                M::PragmaDirective(n) => {
                    let child = self.build_pragma(id, n);
                    payload.pragmas.push(child);
                }
                M::ImportDirective(n) => {
                    let child = self.build_import(id, n);
                    payload.imports.push(child);
                }
                M::VariableDeclaration(n) => {
                    let child = self.build_variable_declaration(id, n);
                    payload.declared_variables.push(child);
                }
                M::EnumDefinition(n) => {
                    let child = self.build_enum(id, n);
                    payload.enums.push(child);
                }
                M::FunctionDefinition(n) => {
                    let child = self.build_function(id, n);
                    payload.functions.push(child);
                }
                M::StructDefinition(n) => {
                    let child = self.build_struct(id, n);
                    payload.structs.push(child);
                }
                M::ErrorDefinition(n) => {
                    let child = self.build_error(id, n);
                    payload.errors.push(child);
                }
                M::UserDefinedValueTypeDefinition(n) => {
                    let child = self.build_user_defined_value_type(id, n);
                    payload.user_defined_value_types.push(child);
                }
                M::UsingForDirective(n) => {
                    let child = self.build_using_for(id, n);
                    payload.using_for_directives.push(child);
                }
                M::EventDefinition(n) => {
                    let child = self.build_event(id, n);
                    payload.events.push(child);
                }
                M::ContractDefinition(n) => {
                    let child = self.build_contract(id, n);
                    payload.contracts.push(child);
                }
            }
        }
        self.finish(id, NodeKind::SourceUnit(payload));
        id
    }

    fn build_pragma(&mut self, parent: NodeId, node: &ast::SolcPragmaDirective) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        self.finish(
            id,
            NodeKind::PragmaDirective(PragmaDirective {
                literals: node.literals.clone(),
            }),
        );
        id
    }

    fn build_import(&mut self, parent: NodeId, node: &ast::SolcImportDirective) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let mut aliases = Vec::new();
        for alias in &node.symbol_aliases {
            let foreign = self.build_identifier(id, &alias.foreign);
            aliases.push(SymbolAlias {
                foreign,
                local: alias.local.clone(),
            });
        }
        self.finish(
            id,
            NodeKind::ImportDirective(ImportDirective {
                imported_source_unit_name: node.absolute_path.clone(),
                import_string: node.file.clone(),
                imported_source_unit_id: node.source_unit,
                symbol_aliases: aliases,
                unit_alias: if node.unit_alias.is_empty() {
                    None
                } else {
                    Some(node.unit_alias.clone())
                },
                import_string_location: Default::default(),
            }),
        );
        self.enqueue(PRIORITY_IMPORT_REBIND, WorkItem::RebindImportAliases(id));
        id
    }

    fn build_using_for(&mut self, parent: NodeId, node: &ast::SolcUsingForDirective) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let mut functions = Vec::new();
        if let Some(entries) = &node.function_list {
            for entry in entries {
                let path = entry.function.as_ref().or(entry.definition.as_ref());
                if let Some(path) = path {
                    functions.push(UsingForFunction {
                        function: self.build_identifier_path(id, path),
                        operator: entry.operator,
                    });
                }
            }
        }
        let library_name = node
            .library_name
            .as_ref()
            .map(|n| self.build_type_name_or_path(id, n));
        let type_name = node.type_name.as_ref().map(|n| self.build_type_name(id, n));
        self.finish(
            id,
            NodeKind::UsingForDirective(UsingForDirective {
                functions,
                library_name,
                type_name,
                is_global: node.is_global.unwrap_or(false),
            }),
        );
        id
    }

    // -- declarations -----------------------------------------------------

    fn decl_core(name: &str, name_location: Option<Src>) -> DeclarationCore {
        let range = name_location.filter(Src::is_set).map(|l| l.offsets());
        DeclarationCore::new(name.to_string(), range)
    }

    fn build_contract(&mut self, parent: NodeId, node: &ast::SolcContractDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = self.build_documentation(id, node.documentation.as_ref());
        let base_contracts = node
            .base_contracts
            .iter()
            .map(|b| self.build_inheritance_specifier(id, b))
            .collect();

        let mut payload = ContractDefinition {
            decl: Self::decl_core(&node.name, node.name_location),
            kind: node.contract_kind,
            is_abstract: node.is_abstract,
            canonical_name: node.canonical_name.clone(),
            fully_implemented: node.fully_implemented,
            base_contracts,
            linearized_base_contract_ids: node.linearized_base_contracts.clone(),
            used_error_ids: node.used_errors.clone().unwrap_or_default(),
            used_event_ids: node.used_events.clone().unwrap_or_default(),
            documentation,
            compilation_info: self
                .contracts_info
                .and_then(|info| info.get(&node.name).cloned()),
            child_contracts: Default::default(),
            used_errors: Default::default(),
            used_events: Default::default(),
            enums: Vec::new(),
            errors: Vec::new(),
            events: Vec::new(),
            functions: Vec::new(),
            modifiers: Vec::new(),
            structs: Vec::new(),
            user_defined_value_types: Vec::new(),
            using_for_directives: Vec::new(),
            declared_variables: Vec::new(),
        };

        for member in &node.nodes {
            use ast::SolcContractMember as M;
            match member {
                M::EnumDefinition(n) => {
                    let child = self.build_enum(id, n);
                    payload.enums.push(child);
                }
                M::ErrorDefinition(n) => {
                    let child = self.build_error(id, n);
                    payload.errors.push(child);
                }
                M::EventDefinition(n) => {
                    let child = self.build_event(id, n);
                    payload.events.push(child);
                }
                M::FunctionDefinition(n) => {
                    let child = self.build_function(id, n);
                    payload.functions.push(child);
                }
                M::ModifierDefinition(n) => {
                    let child = self.build_modifier(id, n);
                    payload.modifiers.push(child);
                }
                M::StructDefinition(n) => {
                    let child = self.build_struct(id, n);
                    payload.structs.push(child);
                }
                M::UserDefinedValueTypeDefinition(n) => {
                    let child = self.build_user_defined_value_type(id, n);
                    payload.user_defined_value_types.push(child);
                }
                M::UsingForDirective(n) => {
                    let child = self.build_using_for(id, n);
                    payload.using_for_directives.push(child);
                }
                M::VariableDeclaration(n) => {
                    let child = self.build_variable_declaration(id, n);
                    payload.declared_variables.push(child);
                }
            }
        }

        self.finish(id, NodeKind::ContractDefinition(Box::new(payload)));
        self.enqueue(PRIORITY_RESOLVE_STRUCTURE, WorkItem::LinkContract(id));
        self.enqueue(
            PRIORITY_LINK_INHERITED_EVENTS,
            WorkItem::LinkInheritedEvents(id),
        );
        id
    }

    fn build_function(&mut self, parent: NodeId, node: &ast::SolcFunctionDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = self.build_documentation(id, node.documentation.as_ref());
        let parameters = self.build_parameter_list(id, &node.parameters);
        let modifiers = node
            .modifiers
            .iter()
            .map(|m| self.build_modifier_invocation(id, m))
            .collect();
        let overrides = node
            .overrides
            .as_ref()
            .map(|o| self.build_override_specifier(id, o));
        let return_parameters = self.build_parameter_list(id, &node.return_parameters);
        let body = node.body.as_ref().map(|b| self.build_block(id, b));

        self.finish(
            id,
            NodeKind::FunctionDefinition(Box::new(FunctionDefinition {
                decl: Self::decl_core(&node.name, node.name_location),
                kind: node.kind,
                implemented: node.implemented,
                visibility: node.visibility,
                state_mutability: node.state_mutability,
                is_virtual: node.is_virtual,
                function_selector: node.function_selector.clone(),
                parameters,
                return_parameters,
                modifiers,
                overrides,
                documentation,
                body,
                base_function_ids: node.base_functions.clone().unwrap_or_default(),
                child_functions: Default::default(),
                cfg: Default::default(),
            })),
        );
        if node.base_functions.as_ref().is_some_and(|b| !b.is_empty()) {
            self.enqueue(PRIORITY_RESOLVE_STRUCTURE, WorkItem::LinkBases(id));
        }
        id
    }

    fn build_modifier(&mut self, parent: NodeId, node: &ast::SolcModifierDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = self.build_documentation(id, node.documentation.as_ref());
        let parameters = self.build_parameter_list(id, &node.parameters);
        let overrides = node
            .overrides
            .as_ref()
            .map(|o| self.build_override_specifier(id, o));
        let body = node.body.as_ref().map(|b| self.build_block(id, b));
        self.finish(
            id,
            NodeKind::ModifierDefinition(Box::new(ModifierDefinition {
                decl: Self::decl_core(&node.name, node.name_location),
                visibility: node.visibility,
                is_virtual: node.is_virtual,
                parameters,
                overrides,
                documentation,
                body,
                base_modifier_ids: node.base_modifiers.clone().unwrap_or_default(),
                child_modifiers: Default::default(),
                cfg: Default::default(),
            })),
        );
        if node.base_modifiers.as_ref().is_some_and(|b| !b.is_empty()) {
            self.enqueue(PRIORITY_RESOLVE_STRUCTURE, WorkItem::LinkBases(id));
        }
        id
    }

    fn build_variable_declaration(
        &mut self,
        parent: NodeId,
        node: &ast::SolcVariableDeclaration,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = node
            .documentation
            .as_ref()
            .map(|d| self.build_structured_documentation(id, d));
        let type_name = node.type_name.as_ref().map(|t| self.build_type_name(id, t));
        let overrides = node
            .overrides
            .as_ref()
            .map(|o| self.build_override_specifier(id, o));
        let value = node.value.as_ref().map(|v| self.build_expression(id, v));
        self.finish(
            id,
            NodeKind::VariableDeclaration(Box::new(VariableDeclaration {
                decl: Self::decl_core(&node.name, node.name_location),
                type_info: TypeInfo::new(&node.type_descriptions),
                constant: node.constant,
                declared_mutability: node.mutability,
                derived_mutability: Default::default(),
                data_location: node.storage_location,
                visibility: node.visibility,
                is_state_variable: node.state_variable,
                indexed: node.indexed.unwrap_or(false),
                function_selector: node.function_selector.clone(),
                type_name,
                overrides,
                documentation,
                value,
                base_function_ids: node.base_functions.clone().unwrap_or_default(),
            })),
        );
        if node.base_functions.as_ref().is_some_and(|b| !b.is_empty()) {
            self.enqueue(PRIORITY_RESOLVE_STRUCTURE, WorkItem::LinkBases(id));
        }
        id
    }

    fn build_struct(&mut self, parent: NodeId, node: &ast::SolcStructDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = node
            .documentation
            .as_ref()
            .map(|d| self.build_structured_documentation(id, d));
        let members = node
            .members
            .iter()
            .map(|m| self.build_variable_declaration(id, m))
            .collect();
        self.finish(
            id,
            NodeKind::StructDefinition(StructDefinition {
                decl: Self::decl_core(&node.name, node.name_location),
                canonical_name: node.canonical_name.clone(),
                visibility: node.visibility,
                members,
                documentation,
            }),
        );
        id
    }

    fn build_enum(&mut self, parent: NodeId, node: &ast::SolcEnumDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = node
            .documentation
            .as_ref()
            .map(|d| self.build_structured_documentation(id, d));
        let values = node
            .members
            .iter()
            .map(|m| self.build_enum_value(id, m))
            .collect();
        self.finish(
            id,
            NodeKind::EnumDefinition(EnumDefinition {
                decl: Self::decl_core(&node.name, node.name_location),
                canonical_name: node.canonical_name.clone(),
                values,
                documentation,
            }),
        );
        id
    }

    fn build_enum_value(&mut self, parent: NodeId, node: &ast::SolcEnumValue) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        // The name location of an enum value is its whole byte range.
        let decl = Self::decl_core(&node.name, node.name_location);
        if decl.name_location.get().is_none() {
            decl.name_location.set(node.src.offsets()).ok();
        }
        self.finish(id, NodeKind::EnumValue(EnumValue { decl }));
        id
    }

    fn build_event(&mut self, parent: NodeId, node: &ast::SolcEventDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = self.build_documentation(id, node.documentation.as_ref());
        let parameters = self.build_parameter_list(id, &node.parameters);
        self.finish(
            id,
            NodeKind::EventDefinition(EventDefinition {
                decl: Self::decl_core(&node.name, node.name_location),
                anonymous: node.anonymous,
                parameters,
                documentation,
                declared_selector: node.event_selector.clone(),
                computed_selector: Default::default(),
                used_in: Default::default(),
            }),
        );
        id
    }

    fn build_error(&mut self, parent: NodeId, node: &ast::SolcErrorDefinition) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let documentation = node
            .documentation
            .as_ref()
            .map(|d| self.build_structured_documentation(id, d));
        let parameters = self.build_parameter_list(id, &node.parameters);
        self.finish(
            id,
            NodeKind::ErrorDefinition(ErrorDefinition {
                decl: Self::decl_core(&node.name, Some(node.name_location)),
                parameters,
                documentation,
                declared_selector: node.error_selector.clone(),
                computed_selector: Default::default(),
                used_in: Default::default(),
            }),
        );
        id
    }

    fn build_user_defined_value_type(
        &mut self,
        parent: NodeId,
        node: &ast::SolcUserDefinedValueTypeDefinition,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let underlying_type = self.build_elementary_type_name(id, &node.underlying_type);
        self.finish(
            id,
            NodeKind::UserDefinedValueTypeDefinition(UserDefinedValueTypeDefinition {
                decl: Self::decl_core(&node.name, node.name_location),
                canonical_name: node.canonical_name.clone(),
                underlying_type,
            }),
        );
        id
    }

    // -- meta -------------------------------------------------------------

    fn build_documentation(
        &mut self,
        parent: NodeId,
        doc: Option<&ast::SolcDocumentation>,
    ) -> Option<DocComment> {
        match doc {
            None => None,
            Some(ast::SolcDocumentation::Raw(text)) => Some(DocComment::Raw(text.clone())),
            Some(ast::SolcDocumentation::Structured(node)) => Some(DocComment::Structured(
                self.build_structured_documentation(parent, node),
            )),
        }
    }

    fn build_structured_documentation(
        &mut self,
        parent: NodeId,
        node: &ast::SolcStructuredDocumentation,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        self.finish(
            id,
            NodeKind::StructuredDocumentation(StructuredDocumentation {
                text: node.text.clone(),
            }),
        );
        id
    }

    fn build_parameter_list(&mut self, parent: NodeId, node: &ast::SolcParameterList) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let parameters = node
            .parameters
            .iter()
            .map(|p| self.build_variable_declaration(id, p))
            .collect();
        self.finish(id, NodeKind::ParameterList(ParameterList { parameters }));
        id
    }

    fn build_inheritance_specifier(
        &mut self,
        parent: NodeId,
        node: &ast::SolcInheritanceSpecifier,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let base_name = self.build_type_name_or_path(id, &node.base_name);
        let arguments = node
            .arguments
            .iter()
            .flatten()
            .map(|a| self.build_expression(id, a))
            .collect();
        self.finish(
            id,
            NodeKind::InheritanceSpecifier(InheritanceSpecifier {
                base_name,
                arguments,
            }),
        );
        id
    }

    fn build_modifier_invocation(
        &mut self,
        parent: NodeId,
        node: &ast::SolcModifierInvocation,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let modifier_name = match &node.modifier_name {
            ast::SolcModifierName::Identifier(n) => self.build_identifier(id, n),
            ast::SolcModifierName::IdentifierPath(n) => self.build_identifier_path(id, n),
        };
        let arguments = node
            .arguments
            .iter()
            .flatten()
            .map(|a| self.build_expression(id, a))
            .collect();
        self.finish(
            id,
            NodeKind::ModifierInvocation(ModifierInvocation {
                modifier_name,
                arguments,
                kind: node.kind,
            }),
        );
        id
    }

    fn build_override_specifier(
        &mut self,
        parent: NodeId,
        node: &ast::SolcOverrideSpecifier,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let overrides = node
            .overrides
            .iter()
            .map(|o| self.build_type_name_or_path(id, o))
            .collect();
        self.finish(
            id,
            NodeKind::OverrideSpecifier(OverrideSpecifier { overrides }),
        );
        id
    }

    fn build_identifier_path(&mut self, parent: NodeId, node: &ast::SolcIdentifierPath) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        assert!(
            node.referenced_declaration >= 0,
            "identifier path with negative referenced declaration"
        );
        self.finish(
            id,
            NodeKind::IdentifierPath(IdentifierPath {
                name: node.name.clone(),
                referenced_declaration_id: node.referenced_declaration,
                parts: Vec::new(),
            }),
        );
        self.enqueue(
            PRIORITY_RESOLVE_STRUCTURE,
            WorkItem::ResolveIdentifierPath(id),
        );
        id
    }

    fn build_type_name_or_path(&mut self, parent: NodeId, node: &ast::SolcTypeNameOrPath) -> NodeId {
        match node {
            ast::SolcTypeNameOrPath::UserDefinedTypeName(n) => {
                self.build_user_defined_type_name(parent, n)
            }
            ast::SolcTypeNameOrPath::IdentifierPath(n) => self.build_identifier_path(parent, n),
        }
    }

    // -- type names -------------------------------------------------------

    fn build_type_name(&mut self, parent: NodeId, node: &ast::SolcTypeName) -> NodeId {
        match node {
            ast::SolcTypeName::ArrayTypeName(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let base_type = self.build_type_name(id, &n.base_type);
                let length = n.length.as_ref().map(|l| self.build_expression(id, l));
                self.finish(
                    id,
                    NodeKind::ArrayTypeName(ArrayTypeName {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        base_type,
                        length,
                    }),
                );
                id
            }
            ast::SolcTypeName::ElementaryTypeName(n) => self.build_elementary_type_name(parent, n),
            ast::SolcTypeName::FunctionTypeName(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let parameter_types = self.build_parameter_list(id, &n.parameter_types);
                let return_parameter_types = self.build_parameter_list(id, &n.return_parameter_types);
                self.finish(
                    id,
                    NodeKind::FunctionTypeName(FunctionTypeName {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        parameter_types,
                        return_parameter_types,
                        state_mutability: n.state_mutability,
                        visibility: n.visibility,
                    }),
                );
                id
            }
            ast::SolcTypeName::Mapping(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let key_type = self.build_type_name(id, &n.key_type);
                let value_type = self.build_type_name(id, &n.value_type);
                self.finish(
                    id,
                    NodeKind::Mapping(Mapping {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        key_type,
                        value_type,
                        key_name: n.key_name.clone(),
                        value_name: n.value_name.clone(),
                    }),
                );
                id
            }
            ast::SolcTypeName::UserDefinedTypeName(n) => {
                self.build_user_defined_type_name(parent, n)
            }
        }
    }

    fn build_elementary_type_name(
        &mut self,
        parent: NodeId,
        node: &ast::SolcElementaryTypeName,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        self.finish(
            id,
            NodeKind::ElementaryTypeName(ElementaryTypeName {
                type_info: TypeInfo::new(&node.type_descriptions),
                name: node.name.clone(),
                state_mutability: node.state_mutability,
            }),
        );
        id
    }

    fn build_user_defined_type_name(
        &mut self,
        parent: NodeId,
        node: &ast::SolcUserDefinedTypeName,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let path_node = node
            .path_node
            .as_ref()
            .map(|p| self.build_identifier_path(id, p));
        self.finish(
            id,
            NodeKind::UserDefinedTypeName(UserDefinedTypeName {
                type_info: TypeInfo::new(&node.type_descriptions),
                referenced_declaration_id: node.referenced_declaration,
                name: node.name.clone(),
                path_node,
            }),
        );
        id
    }

    // -- statements -------------------------------------------------------

    fn build_block(&mut self, parent: NodeId, node: &ast::SolcBlock) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let statements = node
            .statements
            .iter()
            .map(|s| self.build_statement(id, s))
            .collect();
        self.finish(id, NodeKind::Block(Block { statements }));
        id
    }

    fn build_statement(&mut self, parent: NodeId, node: &ast::SolcStatement) -> NodeId {
        use ast::SolcStatement as S;
        match node {
            S::Block(n) => self.build_block(parent, n),
            S::Break(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                self.finish(id, NodeKind::Break);
                id
            }
            S::Continue(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                self.finish(id, NodeKind::Continue);
                id
            }
            S::DoWhileStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let body = self.build_statement(id, &n.body);
                let condition = self.build_expression(id, &n.condition);
                self.finish(
                    id,
                    NodeKind::DoWhileStatement(DoWhileStatement { body, condition }),
                );
                id
            }
            S::EmitStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let event_call = self.build_function_call(id, &n.event_call);
                self.finish(id, NodeKind::EmitStatement(EmitStatement { event_call }));
                id
            }
            S::ExpressionStatement(n) => self.build_expression_statement(parent, n),
            S::ForStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let initialization_expression = n.initialization_expression.as_ref().map(|init| {
                    match &**init {
                        ast::SolcForInitialization::ExpressionStatement(s) => {
                            self.build_expression_statement(id, s)
                        }
                        ast::SolcForInitialization::VariableDeclarationStatement(s) => {
                            self.build_variable_declaration_statement(id, s)
                        }
                    }
                });
                let condition = n.condition.as_ref().map(|c| self.build_expression(id, c));
                let loop_expression = n
                    .loop_expression
                    .as_ref()
                    .map(|l| self.build_expression_statement(id, l));
                let body = self.build_statement(id, &n.body);
                self.finish(
                    id,
                    NodeKind::ForStatement(ForStatement {
                        initialization_expression,
                        condition,
                        loop_expression,
                        body,
                    }),
                );
                id
            }
            S::IfStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let condition = self.build_expression(id, &n.condition);
                let true_body = self.build_statement(id, &n.true_body);
                let false_body = n.false_body.as_ref().map(|f| self.build_statement(id, f));
                self.finish(
                    id,
                    NodeKind::IfStatement(IfStatement {
                        condition,
                        true_body,
                        false_body,
                    }),
                );
                id
            }
            S::InlineAssembly(n) => self.build_inline_assembly(parent, n),
            S::PlaceholderStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                self.finish(id, NodeKind::PlaceholderStatement);
                id
            }
            S::Return(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let expression = n.expression.as_ref().map(|e| self.build_expression(id, e));
                self.finish(
                    id,
                    NodeKind::Return(Return {
                        expression,
                        function_return_parameters_id: n.function_return_parameters,
                    }),
                );
                id
            }
            S::RevertStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let error_call = self.build_function_call(id, &n.error_call);
                self.finish(id, NodeKind::RevertStatement(RevertStatement { error_call }));
                id
            }
            S::TryStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let external_call = self.build_function_call(id, &n.external_call);
                let clauses = n
                    .clauses
                    .iter()
                    .map(|c| self.build_try_catch_clause(id, c))
                    .collect();
                self.finish(
                    id,
                    NodeKind::TryStatement(TryStatement {
                        external_call,
                        clauses,
                    }),
                );
                id
            }
            S::UncheckedBlock(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let statements = n
                    .statements
                    .iter()
                    .map(|s| self.build_statement(id, s))
                    .collect();
                self.finish(id, NodeKind::UncheckedBlock(Block { statements }));
                id
            }
            S::VariableDeclarationStatement(n) => {
                self.build_variable_declaration_statement(parent, n)
            }
            S::WhileStatement(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let condition = self.build_expression(id, &n.condition);
                let body = self.build_statement(id, &n.body);
                self.finish(id, NodeKind::WhileStatement(WhileStatement { condition, body }));
                id
            }
        }
    }

    fn build_expression_statement(
        &mut self,
        parent: NodeId,
        node: &ast::SolcExpressionStatement,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let expression = self.build_expression(id, &node.expression);
        self.finish(
            id,
            NodeKind::ExpressionStatement(ExpressionStatement { expression }),
        );
        id
    }

    fn build_variable_declaration_statement(
        &mut self,
        parent: NodeId,
        node: &ast::SolcVariableDeclarationStatement,
    ) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let declarations = node
            .declarations
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|d| self.build_variable_declaration(id, d))
            })
            .collect();
        let initial_value = node
            .initial_value
            .as_ref()
            .map(|v| self.build_expression(id, v));
        self.finish(
            id,
            NodeKind::VariableDeclarationStatement(VariableDeclarationStatement {
                declarations,
                initial_value,
            }),
        );
        id
    }

    fn build_try_catch_clause(&mut self, parent: NodeId, node: &ast::SolcTryCatchClause) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let parameters = node
            .parameters
            .as_ref()
            .map(|p| self.build_parameter_list(id, p));
        let block = self.build_block(id, &node.block);
        self.finish(
            id,
            NodeKind::TryCatchClause(TryCatchClause {
                error_name: node.error_name.clone(),
                parameters,
                block,
            }),
        );
        id
    }

    fn build_inline_assembly(&mut self, parent: NodeId, node: &ast::SolcInlineAssembly) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let yul_block = self.build_yul_block(id, &node.ast);
        let mut external_references: Vec<ExternalReference> = node
            .external_references
            .iter()
            .map(|model| {
                let mut suffix = model.suffix;
                if model.is_offset {
                    suffix = Some(ast::InlineAssemblySuffix::Offset);
                } else if model.is_slot {
                    suffix = Some(ast::InlineAssemblySuffix::Slot);
                }
                assert!(
                    model.declaration >= 0,
                    "external reference to a negative declaration id"
                );
                ExternalReference {
                    location: model.src.offsets(),
                    identifier_location: Default::default(),
                    suffix,
                    value_size: model.value_size,
                    referenced_declaration_id: model.declaration,
                    yul_identifier: None,
                }
            })
            .collect();
        external_references.sort_by_key(|r| r.location);
        self.finish(
            id,
            NodeKind::InlineAssembly(Box::new(InlineAssembly {
                yul_block,
                evm_version: node.evm_version,
                flags: node.flags.clone().unwrap_or_default(),
                external_references,
            })),
        );
        self.enqueue(
            PRIORITY_RESOLVE_STRUCTURE,
            WorkItem::ResolveExternalReferences(id),
        );
        id
    }

    // -- expressions ------------------------------------------------------

    fn build_expression(&mut self, parent: NodeId, node: &ast::SolcExpression) -> NodeId {
        use ast::SolcExpression as E;
        match node {
            E::Assignment(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let left_hand_side = self.build_expression(id, &n.left_hand_side);
                let right_hand_side = self.build_expression(id, &n.right_hand_side);
                self.finish(
                    id,
                    NodeKind::Assignment(Assignment {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        operator: n.operator,
                        left_hand_side,
                        right_hand_side,
                    }),
                );
                id
            }
            E::BinaryOperation(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let left_expression = self.build_expression(id, &n.left_expression);
                let right_expression = self.build_expression(id, &n.right_expression);
                self.finish(
                    id,
                    NodeKind::BinaryOperation(BinaryOperation {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        operator: n.operator,
                        left_expression,
                        right_expression,
                        function_id: n.function,
                    }),
                );
                if n.function.is_some() {
                    self.enqueue(PRIORITY_RESOLVE_STRUCTURE, WorkItem::BindOperator(id));
                }
                id
            }
            E::Conditional(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let condition = self.build_expression(id, &n.condition);
                let true_expression = self.build_expression(id, &n.true_expression);
                let false_expression = self.build_expression(id, &n.false_expression);
                self.finish(
                    id,
                    NodeKind::Conditional(Conditional {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        condition,
                        true_expression,
                        false_expression,
                    }),
                );
                id
            }
            E::ElementaryTypeNameExpression(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let type_name = self.build_elementary_type_name(id, &n.type_name);
                self.finish(
                    id,
                    NodeKind::ElementaryTypeNameExpression(ElementaryTypeNameExpression {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        type_name,
                    }),
                );
                id
            }
            E::FunctionCall(n) => self.build_function_call(parent, n),
            E::FunctionCallOptions(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let expression = self.build_expression(id, &n.expression);
                let options = n
                    .options
                    .iter()
                    .map(|o| self.build_expression(id, o))
                    .collect();
                self.finish(
                    id,
                    NodeKind::FunctionCallOptions(FunctionCallOptions {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        names: n.names.clone(),
                        options,
                        expression,
                    }),
                );
                id
            }
            E::Identifier(n) => self.build_identifier(parent, n),
            E::IndexAccess(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let base_expression = self.build_expression(id, &n.base_expression);
                let index_expression = n
                    .index_expression
                    .as_ref()
                    .map(|e| self.build_expression(id, e));
                self.finish(
                    id,
                    NodeKind::IndexAccess(IndexAccess {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        base_expression,
                        index_expression,
                    }),
                );
                id
            }
            E::IndexRangeAccess(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let base_expression = self.build_expression(id, &n.base_expression);
                let start_expression = n
                    .start_expression
                    .as_ref()
                    .map(|e| self.build_expression(id, e));
                let end_expression = n
                    .end_expression
                    .as_ref()
                    .map(|e| self.build_expression(id, e));
                self.finish(
                    id,
                    NodeKind::IndexRangeAccess(IndexRangeAccess {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        base_expression,
                        start_expression,
                        end_expression,
                    }),
                );
                id
            }
            E::Literal(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                self.finish(
                    id,
                    NodeKind::Literal(Literal {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        kind: n.kind,
                        hex_value: n.hex_value.clone(),
                        value: n.value.clone(),
                        subdenomination: n.subdenomination.clone(),
                    }),
                );
                id
            }
            E::MemberAccess(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let expression = self.build_expression(id, &n.expression);
                let member_location = Default::default();
                let payload = MemberAccess {
                    type_info: TypeInfo::new(&n.type_descriptions),
                    expression,
                    member_name: n.member_name.clone(),
                    referenced_declaration_id: n.referenced_declaration,
                    member_location,
                };
                if let Some(location) = n.member_location.filter(Src::is_set) {
                    payload.member_location.set(location.offsets()).ok();
                }
                self.finish(id, NodeKind::MemberAccess(payload));
                self.enqueue(PRIORITY_BIND_IDENTIFIERS, WorkItem::BindMemberAccess(id));
                id
            }
            E::NewExpression(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let type_name = self.build_type_name(id, &n.type_name);
                self.finish(
                    id,
                    NodeKind::NewExpression(NewExpression {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        type_name,
                    }),
                );
                id
            }
            E::TupleExpression(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let components = n
                    .components
                    .iter()
                    .map(|slot| slot.as_ref().map(|e| self.build_expression(id, e)))
                    .collect();
                self.finish(
                    id,
                    NodeKind::TupleExpression(TupleExpression {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        is_inline_array: n.is_inline_array,
                        components,
                    }),
                );
                id
            }
            E::UnaryOperation(n) => {
                let id = self.begin(Some(parent), n.src, n.id);
                let sub_expression = self.build_expression(id, &n.sub_expression);
                self.finish(
                    id,
                    NodeKind::UnaryOperation(UnaryOperation {
                        type_info: TypeInfo::new(&n.type_descriptions),
                        operator: n.operator,
                        prefix: n.prefix,
                        sub_expression,
                        function_id: n.function,
                    }),
                );
                if n.function.is_some() {
                    self.enqueue(PRIORITY_RESOLVE_STRUCTURE, WorkItem::BindOperator(id));
                }
                id
            }
        }
    }

    fn build_function_call(&mut self, parent: NodeId, node: &ast::SolcFunctionCall) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let expression = self.build_expression(id, &node.expression);
        let arguments = node
            .arguments
            .iter()
            .map(|a| self.build_expression(id, a))
            .collect();
        self.finish(
            id,
            NodeKind::FunctionCall(FunctionCall {
                type_info: TypeInfo::new(&node.type_descriptions),
                kind: node.kind,
                names: node.names.clone(),
                try_call: node.try_call,
                arguments,
                expression,
            }),
        );
        id
    }

    fn build_identifier(&mut self, parent: NodeId, node: &ast::SolcIdentifier) -> NodeId {
        let id = self.begin(Some(parent), node.src, node.id);
        let referenced = match node.referenced_declaration {
            Some(decl) => vec![decl],
            // Only identifiers inside import directive symbol aliases
            // come without a referenced declaration; those are resolved
            // by the import rebind pass.
            None => Vec::new(),
        };
        self.finish(
            id,
            NodeKind::Identifier(Identifier {
                type_info: TypeInfo::new(&node.type_descriptions),
                name: node.name.clone(),
                overloaded_declaration_ids: node.overloaded_declarations.clone(),
                referenced_declaration_ids: referenced,
            }),
        );
        self.enqueue(PRIORITY_BIND_IDENTIFIERS, WorkItem::BindIdentifier(id));
        id
    }

    // -- Yul --------------------------------------------------------------

    fn build_yul_block(&mut self, parent: NodeId, node: &ast::SolcYulBlock) -> NodeId {
        let id = self.begin_yul(parent, node.src);
        let statements = node
            .statements
            .iter()
            .map(|s| self.build_yul_statement(id, s))
            .collect();
        self.finish(id, NodeKind::YulBlock(YulBlock { statements }));
        id
    }

    fn build_yul_statement(&mut self, parent: NodeId, node: &ast::SolcYulStatement) -> NodeId {
        use ast::SolcYulStatement as S;
        match node {
            S::YulAssignment(n) => {
                let id = self.begin_yul(parent, n.src);
                let variable_names = n
                    .variable_names
                    .iter()
                    .map(|v| self.build_yul_identifier(id, v))
                    .collect();
                let value = self.build_yul_expression(id, &n.value);
                self.finish(
                    id,
                    NodeKind::YulAssignment(YulAssignment {
                        value,
                        variable_names,
                    }),
                );
                id
            }
            S::YulBlock(n) => self.build_yul_block(parent, n),
            S::YulBreak(n) => {
                let id = self.begin_yul(parent, n.src);
                self.finish(id, NodeKind::YulBreak);
                id
            }
            S::YulContinue(n) => {
                let id = self.begin_yul(parent, n.src);
                self.finish(id, NodeKind::YulContinue);
                id
            }
            S::YulExpressionStatement(n) => {
                let id = self.begin_yul(parent, n.src);
                let expression = self.build_yul_expression(id, &n.expression);
                self.finish(
                    id,
                    NodeKind::YulExpressionStatement(YulExpressionStatement { expression }),
                );
                id
            }
            S::YulLeave(n) => {
                let id = self.begin_yul(parent, n.src);
                self.finish(id, NodeKind::YulLeave);
                id
            }
            S::YulForLoop(n) => {
                let id = self.begin_yul(parent, n.src);
                let pre = self.build_yul_block(id, &n.pre);
                let condition = self.build_yul_expression(id, &n.condition);
                let post = self.build_yul_block(id, &n.post);
                let body = self.build_yul_block(id, &n.body);
                self.finish(
                    id,
                    NodeKind::YulForLoop(YulForLoop {
                        pre,
                        condition,
                        post,
                        body,
                    }),
                );
                id
            }
            S::YulFunctionDefinition(n) => {
                let id = self.begin_yul(parent, n.src);
                let parameters = n
                    .parameters
                    .iter()
                    .flatten()
                    .map(|p| self.build_yul_typed_name(id, p))
                    .collect();
                let return_variables = n
                    .return_variables
                    .iter()
                    .flatten()
                    .map(|p| self.build_yul_typed_name(id, p))
                    .collect();
                let body = self.build_yul_block(id, &n.body);
                self.finish(
                    id,
                    NodeKind::YulFunctionDefinition(YulFunctionDefinition {
                        name: n.name.clone(),
                        parameters,
                        return_variables,
                        body,
                        cfg: Default::default(),
                    }),
                );
                id
            }
            S::YulIf(n) => {
                let id = self.begin_yul(parent, n.src);
                let condition = self.build_yul_expression(id, &n.condition);
                let body = self.build_yul_block(id, &n.body);
                self.finish(id, NodeKind::YulIf(YulIf { condition, body }));
                id
            }
            S::YulSwitch(n) => {
                let id = self.begin_yul(parent, n.src);
                let expression = self.build_yul_expression(id, &n.expression);
                let cases = n
                    .cases
                    .iter()
                    .map(|c| self.build_yul_case(id, c))
                    .collect();
                self.finish(id, NodeKind::YulSwitch(YulSwitch { expression, cases }));
                id
            }
            S::YulVariableDeclaration(n) => {
                let id = self.begin_yul(parent, n.src);
                let variables = n
                    .variables
                    .iter()
                    .map(|v| self.build_yul_typed_name(id, v))
                    .collect();
                let value = n.value.as_ref().map(|v| self.build_yul_expression(id, v));
                self.finish(
                    id,
                    NodeKind::YulVariableDeclaration(YulVariableDeclaration { variables, value }),
                );
                id
            }
        }
    }

    fn build_yul_case(&mut self, parent: NodeId, node: &ast::SolcYulCase) -> NodeId {
        let id = self.begin_yul(parent, node.src);
        let value = match &node.value {
            ast::SolcYulCaseValue::Literal(literal) => Some(self.build_yul_literal(id, literal)),
            ast::SolcYulCaseValue::Default(keyword) => {
                assert_eq!(keyword, "default", "unexpected Yul case keyword");
                None
            }
        };
        let body = self.build_yul_block(id, &node.body);
        self.finish(id, NodeKind::YulCase(YulCase { value, body }));
        id
    }

    fn build_yul_expression(&mut self, parent: NodeId, node: &ast::SolcYulExpression) -> NodeId {
        use ast::SolcYulExpression as E;
        match node {
            E::YulFunctionCall(n) => {
                let id = self.begin_yul(parent, n.src);
                let function_name = self.build_yul_identifier(id, &n.function_name);
                let arguments = n
                    .arguments
                    .iter()
                    .map(|a| self.build_yul_expression(id, a))
                    .collect();
                self.finish(
                    id,
                    NodeKind::YulFunctionCall(YulFunctionCall {
                        function_name,
                        arguments,
                    }),
                );
                id
            }
            E::YulIdentifier(n) => self.build_yul_identifier(parent, n),
            E::YulLiteral(n) => self.build_yul_literal(parent, n),
        }
    }

    fn build_yul_identifier(&mut self, parent: NodeId, node: &ast::SolcYulIdentifier) -> NodeId {
        let id = self.begin_yul(parent, node.src);
        self.finish(
            id,
            NodeKind::YulIdentifier(YulIdentifier {
                name: node.name.clone(),
                external_reference: None,
            }),
        );
        id
    }

    fn build_yul_literal(&mut self, parent: NodeId, node: &ast::SolcYulLiteral) -> NodeId {
        let id = self.begin_yul(parent, node.src);
        assert!(
            node.value.is_some() || node.hex_value.is_some(),
            "Yul literal without value or hexValue"
        );
        self.finish(
            id,
            NodeKind::YulLiteral(YulLiteral {
                kind: node.kind,
                type_name: node.type_.clone(),
                value: node.value.clone(),
                hex_value: node.hex_value.clone(),
            }),
        );
        id
    }

    fn build_yul_typed_name(&mut self, parent: NodeId, node: &ast::SolcYulTypedName) -> NodeId {
        let id = self.begin_yul(parent, node.src);
        self.finish(
            id,
            NodeKind::YulTypedName(YulTypedName {
                name: node.name.clone(),
                type_name: node.type_.clone(),
            }),
        );
        id
    }
}
