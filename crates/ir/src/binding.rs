//! Declaration binding: the post-process passes that resolve
//! identifiers, member accesses, identifier paths, import aliases,
//! inline-assembly external references and inheritance links, and the
//! teardown actions that undo them on eviction.

use std::collections::{HashSet, VecDeque};

use ast::AstNodeId;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use tracing::trace;

use crate::global::GlobalSymbol;
use crate::node::{FileId, NodeId, NodeKind, RefSite};
use crate::nodes::{DeclarationCore, IdentifierPathPart};
use crate::resolver::{CuHash, DestroyAction, WorkItem};
use crate::types::{MagicTypeKind, SolType};
use crate::Build;

/// Import symbol aliases resolve first so identifier binding sees their
/// referenced ids.
pub const PRIORITY_IMPORT_REBIND: i32 = -2;
/// Identifiers and member accesses bind before structural resolution
/// needs them.
pub const PRIORITY_BIND_IDENTIFIERS: i32 = -1;
/// Identifier paths, external references, inheritance and used-error
/// links.
pub const PRIORITY_RESOLVE_STRUCTURE: i32 = 0;
/// Used events pulled out of linearized base contracts; must run after
/// every base contract finished its own structural pass.
pub const PRIORITY_LINK_INHERITED_EVENTS: i32 = 1;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z$_][a-zA-Z0-9$_]*").unwrap());

impl Build {
    pub(crate) fn run_work_item(&mut self, item: WorkItem) {
        trace!(?item, "running post-process work item");
        match item {
            WorkItem::RebindImportAliases(id) => self.rebind_import_aliases(id),
            WorkItem::BindIdentifier(id) => self.bind_identifier(id),
            WorkItem::BindMemberAccess(id) => self.bind_member_access(id),
            WorkItem::ResolveIdentifierPath(id) => self.resolve_identifier_path(id),
            WorkItem::ResolveExternalReferences(id) => self.resolve_external_references(id),
            WorkItem::LinkContract(id) => self.link_contract(id),
            WorkItem::LinkBases(id) => self.link_bases(id),
            WorkItem::BindOperator(id) => self.bind_operator(id),
            WorkItem::LinkInheritedEvents(id) => self.link_inherited_events(id),
        }
    }

    pub(crate) fn run_destroy_action(&mut self, action: DestroyAction) {
        match action {
            DestroyAction::UnregisterReference { declaration, site } => {
                if let Some(core) = self.try_declaration_core_mut(declaration) {
                    core.references.remove(&site);
                }
            }
            DestroyAction::UnregisterGlobalReference { symbol, site } => {
                self.resolver.unregister_global_symbol_reference(symbol, site);
            }
            DestroyAction::DetachChildContract { base, child } => {
                if let Some(NodeKind::ContractDefinition(contract)) =
                    self.try_node_kind_mut(base)
                {
                    contract.child_contracts.remove(&child);
                }
            }
            DestroyAction::DetachChildFunction { base, child } => {
                if let Some(NodeKind::FunctionDefinition(function)) =
                    self.try_node_kind_mut(base)
                {
                    function.child_functions.remove(&child);
                }
            }
            DestroyAction::DetachChildModifier { base, child } => {
                if let Some(NodeKind::ModifierDefinition(modifier)) =
                    self.try_node_kind_mut(base)
                {
                    modifier.child_modifiers.remove(&child);
                }
            }
            DestroyAction::DetachUsedError { error, contract } => {
                if let Some(NodeKind::ErrorDefinition(err)) = self.try_node_kind_mut(error) {
                    err.used_in.remove(&contract);
                }
            }
            DestroyAction::DetachUsedEvent { event, contract } => {
                if let Some(NodeKind::EventDefinition(ev)) = self.try_node_kind_mut(event) {
                    ev.used_in.remove(&contract);
                }
            }
        }
    }

    fn try_node_kind_mut(&mut self, id: NodeId) -> Option<&mut NodeKind> {
        let file = self.files.get_mut(id.file.0 as usize)?.as_mut()?;
        Some(&mut file.nodes.get_mut(id.index as usize)?.kind)
    }

    fn try_declaration_core_mut(&mut self, id: NodeId) -> Option<&mut DeclarationCore> {
        use NodeKind::*;
        Some(match self.try_node_kind_mut(id)? {
            ContractDefinition(n) => &mut n.decl,
            FunctionDefinition(n) => &mut n.decl,
            ModifierDefinition(n) => &mut n.decl,
            VariableDeclaration(n) => &mut n.decl,
            StructDefinition(n) => &mut n.decl,
            EnumDefinition(n) => &mut n.decl,
            EnumValue(n) => &mut n.decl,
            EventDefinition(n) => &mut n.decl,
            ErrorDefinition(n) => &mut n.decl,
            UserDefinedValueTypeDefinition(n) => &mut n.decl,
            _ => return None,
        })
    }

    pub(crate) fn register_reference(&mut self, declaration: NodeId, site: RefSite) {
        let core = self
            .try_declaration_core_mut(declaration)
            .expect("reference target is not a declaration");
        core.references.insert(site);
    }

    fn add_destroy(&mut self, file: FileId, action: DestroyAction) {
        self.resolver.register_destroy_action(file, action);
    }

    fn cu_of(&self, file: FileId) -> CuHash {
        self.file(file).cu_hash
    }

    /// Translates an id valid in the canonical CU of `node`'s file into
    /// the canonical CU of `target_file`.
    fn translate_node_id(&self, node: NodeId, target_file: FileId) -> AstNodeId {
        let ast_id = self
            .node(node)
            .ast_id
            .expect("cannot translate a Yul node across CUs");
        self.resolver
            .translate_id(ast_id, self.cu_of(node.file), self.cu_of(target_file))
    }

    // -- identifiers ------------------------------------------------------

    fn bind_identifier(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let ids = match &self.node(id).kind {
            NodeKind::Identifier(identifier) => identifier.referenced_declaration_ids.clone(),
            other => panic!("expected Identifier, got {}", other.name()),
        };

        let mut new_ids = Vec::with_capacity(ids.len());
        for referenced_id in ids {
            new_ids.push(self.bind_reference_site(referenced_id, cu, RefSite::Identifier(id)));
        }

        if let NodeKind::Identifier(identifier) = &mut self.node_mut(id).kind {
            identifier.referenced_declaration_ids = new_ids;
        }
    }

    /// Binds one referenced id for the given site: registers global
    /// symbol or declaration back-references (plus their teardown) and
    /// rewrites namespace-alias import directives to the imported source
    /// unit. Returns the id the site should keep.
    fn bind_reference_site(
        &mut self,
        referenced_id: AstNodeId,
        cu: CuHash,
        site: RefSite,
    ) -> AstNodeId {
        let site_file = site.node().file;
        if referenced_id < 0 {
            let symbol = GlobalSymbol::from_id(referenced_id)
                .unwrap_or_else(|| panic!("unknown global symbol id {referenced_id}"));
            self.resolver.register_global_symbol_reference(symbol, site);
            self.add_destroy(
                site_file,
                DestroyAction::UnregisterGlobalReference { symbol, site },
            );
            return referenced_id;
        }

        let target = self.resolver.resolve_node(referenced_id, cu);
        enum Target {
            Declaration,
            NamespaceImport(String),
            SourceUnit,
        }
        let resolved = match &self.node(target).kind {
            kind if kind.is_declaration() => Target::Declaration,
            NodeKind::ImportDirective(import) => {
                // A namespace alias: make the site reference the imported
                // source unit directly.
                assert!(
                    import.unit_alias.is_some(),
                    "identifier references an import directive without a unit alias"
                );
                Target::NamespaceImport(import.imported_source_unit_name.clone())
            }
            NodeKind::SourceUnit(_) => Target::SourceUnit,
            other => panic!("unexpected reference target {}", other.name()),
        };

        match resolved {
            Target::Declaration => {
                self.register_reference(target, site);
                self.add_destroy(
                    site_file,
                    DestroyAction::UnregisterReference {
                        declaration: target,
                        site,
                    },
                );
                referenced_id
            }
            Target::NamespaceImport(unit_name) => {
                let imported = self
                    .file_by_source_unit_name(&unit_name)
                    .expect("imported source unit is not ingested");
                let source_unit = NodeId::source_unit_of(imported);
                self.translate_node_id(source_unit, site.node().file)
            }
            Target::SourceUnit => referenced_id,
        }
    }

    // -- member accesses --------------------------------------------------

    fn bind_member_access(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let (expression, member_name, mut referenced_id) = match &self.node(id).kind {
            NodeKind::MemberAccess(member) => (
                member.expression,
                member.member_name.clone(),
                member.referenced_declaration_id,
            ),
            other => panic!("expected MemberAccess, got {}", other.name()),
        };

        // Enum value accesses lack a referenced declaration before solc
        // 0.8.2; recover it from the enum definition by name.
        if referenced_id.is_none() {
            if let Some(expr_target) = self.single_reference_of(expression) {
                if let NodeKind::EnumDefinition(enum_def) = &self.node(expr_target).kind {
                    let values = enum_def.values.clone();
                    for value in values {
                        let matches = matches!(
                            &self.node(value).kind,
                            NodeKind::EnumValue(v) if v.decl.name == member_name
                        );
                        if matches {
                            referenced_id = Some(self.translate_node_id(value, id.file));
                            break;
                        }
                    }
                }
            }
        }

        // Built-in members are derived from the expression's type.
        if referenced_id.is_none() {
            let symbol = self
                .derive_member_symbol(expression, &member_name)
                .unwrap_or_else(|| panic!("unknown member {member_name:?}"));
            referenced_id = Some(symbol.id());
        }

        let bound =
            self.bind_reference_site(referenced_id.unwrap(), cu, RefSite::MemberAccess(id));
        if let NodeKind::MemberAccess(member) = &mut self.node_mut(id).kind {
            member.referenced_declaration_id = Some(bound);
        }
    }

    /// The single referenced declaration node of an identifier or member
    /// access expression, if it has exactly one.
    fn single_reference_of(&self, expression: NodeId) -> Option<NodeId> {
        let referenced_id = match &self.node(expression).kind {
            NodeKind::Identifier(identifier) => {
                match identifier.referenced_declaration_ids.as_slice() {
                    [single] => *single,
                    _ => return None,
                }
            }
            NodeKind::MemberAccess(member) => member.referenced_declaration_id?,
            _ => return None,
        };
        if referenced_id < 0 {
            return None;
        }
        self.resolver
            .try_resolve_node(referenced_id, self.cu_of(expression.file))
    }

    fn derive_member_symbol(&self, expression: NodeId, member: &str) -> Option<GlobalSymbol> {
        use GlobalSymbol::*;
        let parsed = self.type_of(expression)?;
        let symbol = match parsed {
            SolType::Address { .. } => match member {
                "balance" => AddressBalance,
                "code" => AddressCode,
                "codehash" => AddressCodehash,
                "transfer" => AddressTransfer,
                "send" => AddressSend,
                "call" => AddressCall,
                "delegatecall" => AddressDelegatecall,
                "staticcall" => AddressStaticcall,
                _ => panic!("unknown address member {member:?}"),
            },
            SolType::Array { .. } => match member {
                "length" => ArrayLength,
                "push" => ArrayPush,
                "pop" => ArrayPop,
                _ => panic!("unknown array member {member:?}"),
            },
            SolType::Bytes { .. } | SolType::FixedBytes { .. } => match member {
                "length" => BytesLength,
                "push" => BytesPush,
                _ => panic!("unknown bytes member {member:?}"),
            },
            SolType::Function { .. } => match member {
                "selector" => FunctionSelector,
                "value" => FunctionValue,
                "gas" => FunctionGas,
                "address" => FunctionAddress,
                _ => panic!("unknown function member {member:?}"),
            },
            SolType::Magic { kind, .. } => match kind {
                MagicTypeKind::Block => match member {
                    "basefee" => BlockBasefee,
                    "blobbasefee" => BlockBlobbasefee,
                    "chainid" => BlockChainid,
                    "coinbase" => BlockCoinbase,
                    "difficulty" => BlockDifficulty,
                    "gaslimit" => BlockGaslimit,
                    "number" => BlockNumber,
                    "timestamp" => BlockTimestamp,
                    "prevrandao" => BlockPrevrandao,
                    _ => panic!("unknown block member {member:?}"),
                },
                MagicTypeKind::Message => match member {
                    "data" => MsgData,
                    "sender" => MsgSender,
                    "sig" => MsgSig,
                    "value" => MsgValue,
                    _ => panic!("unknown msg member {member:?}"),
                },
                MagicTypeKind::Transaction => match member {
                    "gasprice" => TxGasprice,
                    "origin" => TxOrigin,
                    _ => panic!("unknown tx member {member:?}"),
                },
                MagicTypeKind::Abi => match member {
                    "decode" => AbiDecode,
                    "encode" => AbiEncode,
                    "encodePacked" => AbiEncodePacked,
                    "encodeWithSelector" => AbiEncodeWithSelector,
                    "encodeWithSignature" => AbiEncodeWithSignature,
                    "encodeCall" => AbiEncodeCall,
                    _ => panic!("unknown abi member {member:?}"),
                },
                MagicTypeKind::MetaType => match member {
                    "name" => TypeName,
                    "creationCode" => TypeCreationCode,
                    "runtimeCode" => TypeRuntimeCode,
                    "interfaceId" => TypeInterfaceId,
                    "min" => TypeMin,
                    "max" => TypeMax,
                    _ => panic!("unknown type member {member:?}"),
                },
            },
            SolType::TypeType { actual } => match &**actual {
                SolType::Bytes { .. } => match member {
                    "concat" => BytesConcat,
                    _ => panic!("unknown bytes member {member:?}"),
                },
                SolType::StringType { .. } => match member {
                    "concat" => StringConcat,
                    _ => panic!("unknown string member {member:?}"),
                },
                SolType::UserDefinedValueType { .. } => match member {
                    "wrap" => UserDefinedValueTypeWrap,
                    "unwrap" => UserDefinedValueTypeUnwrap,
                    _ => panic!("unknown user defined value type member {member:?}"),
                },
                other => panic!("unknown member {member:?} on type {other:?}"),
            },
            _ => return None,
        };
        Some(symbol)
    }

    // -- identifier paths -------------------------------------------------

    fn resolve_identifier_path(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let (referenced_id, location) = match &self.node(id).kind {
            NodeKind::IdentifierPath(path) => {
                (path.referenced_declaration_id, self.node(id).location)
            }
            other => panic!("expected IdentifierPath, got {}", other.name()),
        };

        let stripped = crate::source::strip_comments(self.source_of(id));
        let matches: Vec<(usize, usize, String)> = IDENTIFIER_RE
            .find_iter(&stripped.text)
            .map(|m| {
                let start = location.0 + stripped.to_original(m.start());
                let end = location.0 + stripped.to_original(m.start()) + m.len();
                (start, end, String::from_utf8_lossy(m.as_bytes()).into_owned())
            })
            .collect();
        assert!(!matches.is_empty(), "identifier path without identifiers");

        // The compiler provides the leaf declaration; walk parents to
        // cover the inner parts, right to left.
        let leaf = self.resolver.resolve_node(referenced_id, cu);
        let mut chain: Vec<Option<NodeId>> = Vec::with_capacity(matches.len());
        let mut current = Some(leaf);
        for _ in 0..matches.len() {
            chain.push(current);
            current = current.and_then(|node| self.node(node).parent);
        }
        chain.reverse();

        let mut parts = Vec::with_capacity(matches.len());
        let mut sites = Vec::new();
        let mut search_file = id.file;
        for (index, ((start, end, name), target)) in
            matches.into_iter().zip(chain).enumerate()
        {
            let target = match target {
                Some(node)
                    if self.node(node).kind.is_declaration()
                        || matches!(self.node(node).kind, NodeKind::SourceUnit(_)) =>
                {
                    node
                }
                Some(other) => panic!(
                    "unexpected identifier path target {}",
                    self.node(other).kind.name()
                ),
                None => {
                    // Exhausted parents: the leftmost parts name source
                    // unit aliases reachable through imports.
                    let file = self.find_source_unit_alias(&name, search_file);
                    search_file = file;
                    NodeId::source_unit_of(file)
                }
            };

            let translated = self.translate_node_id(target, id.file);
            parts.push(IdentifierPathPart {
                location: (start, end),
                name,
                referenced_declaration_id: translated,
            });
            if self.node(target).kind.is_declaration() {
                sites.push((target, RefSite::IdentifierPathPart(id, index as u32)));
            }
        }

        for (target, site) in sites {
            self.register_reference(target, site);
            self.add_destroy(
                id.file,
                DestroyAction::UnregisterReference {
                    declaration: target,
                    site,
                },
            );
        }
        if let NodeKind::IdentifierPath(path) = &mut self.node_mut(id).kind {
            path.parts = parts;
        }
    }

    /// Finds the source unit a namespace alias name refers to, breadth
    /// first over the imports reachable from `start`.
    fn find_source_unit_alias(&self, name: &str, start: FileId) -> FileId {
        let mut queue = VecDeque::from([start]);
        let mut processed: HashSet<FileId> = HashSet::from([start]);

        while let Some(file) = queue.pop_front() {
            let imports = match &self.node(NodeId::source_unit_of(file)).kind {
                NodeKind::SourceUnit(unit) => unit.imports.clone(),
                _ => unreachable!("file root is always a source unit"),
            };
            for import_id in imports {
                let import = match &self.node(import_id).kind {
                    NodeKind::ImportDirective(import) => import,
                    _ => unreachable!(),
                };
                if import.unit_alias.as_deref() == Some(name) {
                    return self
                        .file_by_source_unit_name(&import.imported_source_unit_name)
                        .expect("imported source unit is not ingested");
                }
                for alias in &import.symbol_aliases {
                    if alias.local.as_deref() == Some(name) {
                        if let Some(target) = self.single_reference_of(alias.foreign) {
                            if matches!(self.node(target).kind, NodeKind::SourceUnit(_)) {
                                return target.file;
                            }
                        }
                    }
                }
                let imported = self
                    .file_by_source_unit_name(&import.imported_source_unit_name)
                    .expect("imported source unit is not ingested");
                if processed.insert(imported) {
                    queue.push_back(imported);
                }
            }
        }
        panic!("source unit alias {name:?} not found through imports");
    }

    // -- import symbol aliases -------------------------------------------

    /// The compiler leaves `referencedDeclaration` unset on import symbol
    /// aliases because a name may resolve to several overloaded
    /// functions. Search the imported file and its transitive imports and
    /// fill the ids in manually.
    fn rebind_import_aliases(&mut self, id: NodeId) {
        let (imported_name, aliases) = match &self.node(id).kind {
            NodeKind::ImportDirective(import) => (
                import.imported_source_unit_name.clone(),
                import
                    .symbol_aliases
                    .iter()
                    .map(|a| a.foreign)
                    .collect::<Vec<_>>(),
            ),
            other => panic!("expected ImportDirective, got {}", other.name()),
        };

        for foreign in aliases {
            let (needs_binding, name) = match &self.node(foreign).kind {
                NodeKind::Identifier(identifier) => (
                    identifier.referenced_declaration_ids.is_empty(),
                    identifier.name.clone(),
                ),
                _ => unreachable!("symbol alias foreign is always an identifier"),
            };
            if !needs_binding {
                continue;
            }

            let start = self
                .file_by_source_unit_name(&imported_name)
                .expect("imported source unit is not ingested");
            let referenced = self.search_exported_declarations(&name, start);
            assert!(
                !referenced.is_empty(),
                "import alias {name:?} does not resolve to any declaration"
            );

            let ids: Vec<AstNodeId> = referenced
                .into_iter()
                .map(|node| self.translate_node_id(node, foreign.file))
                .collect();
            if let NodeKind::Identifier(identifier) = &mut self.node_mut(foreign).kind {
                identifier.referenced_declaration_ids = ids;
            }
        }
    }

    /// Breadth-first search for exported declarations matching `name`,
    /// starting at `start` and following imports. A non-function match
    /// ends the search immediately; otherwise every matching function is
    /// collected (the overload set).
    fn search_exported_declarations(&self, name: &str, start: FileId) -> Vec<NodeId> {
        let mut queue = VecDeque::from([start]);
        let mut processed: HashSet<FileId> = HashSet::from([start]);
        let mut found = Vec::new();
        let mut searched = name.to_string();

        while let Some(file) = queue.pop_front() {
            let root = NodeId::source_unit_of(file);
            for &member in self.children(root) {
                let kind = &self.node(member).kind;
                if !kind.is_declaration() {
                    continue;
                }
                let decl_name = self
                    .declaration_core(member)
                    .map(|core| core.name.as_str())
                    .unwrap_or_default();
                if decl_name == searched {
                    let is_function = matches!(kind, NodeKind::FunctionDefinition(_));
                    found.push(member);
                    if !is_function {
                        return found;
                    }
                }
            }

            let imports = match &self.node(root).kind {
                NodeKind::SourceUnit(unit) => unit.imports.clone(),
                _ => unreachable!(),
            };
            for import_id in imports {
                let import = match &self.node(import_id).kind {
                    NodeKind::ImportDirective(import) => import,
                    _ => unreachable!(),
                };
                if import.unit_alias.as_deref() == Some(searched.as_str()) {
                    found.push(import_id);
                    break;
                }
                // An imported symbol may itself be an alias of another
                // name.
                for alias in &import.symbol_aliases {
                    if alias.local.as_deref() == Some(searched.as_str()) {
                        if let NodeKind::Identifier(identifier) =
                            &self.node(alias.foreign).kind
                        {
                            searched = identifier.name.clone();
                        }
                    }
                }
                let imported = self
                    .file_by_source_unit_name(&import.imported_source_unit_name)
                    .expect("imported source unit is not ingested");
                if processed.insert(imported) {
                    queue.push_back(imported);
                }
            }
        }
        found
    }

    // -- inline assembly --------------------------------------------------

    fn resolve_external_references(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let references: Vec<(usize, crate::node::ByteRange, AstNodeId)> =
            match &self.node(id).kind {
                NodeKind::InlineAssembly(assembly) => assembly
                    .external_references
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (i, r.location, r.referenced_declaration_id))
                    .collect(),
                other => panic!("expected InlineAssembly, got {}", other.name()),
            };

        for (index, location, referenced_id) in references {
            let site = RefSite::ExternalReference(id, index as u32);
            let declaration = self.resolver.resolve_node(referenced_id, cu);
            assert!(
                matches!(self.node(declaration).kind, NodeKind::VariableDeclaration(_)),
                "external reference target is not a variable declaration"
            );
            self.register_reference(declaration, site);
            self.add_destroy(
                id.file,
                DestroyAction::UnregisterReference {
                    declaration,
                    site,
                },
            );

            // The Yul identifier occupies exactly the same span.
            let yul_identifier = self
                .file(id.file)
                .intervals
                .stab(location.0)
                .into_iter()
                .map(|index| NodeId {
                    file: id.file,
                    index,
                })
                .find(|&candidate| {
                    self.node(candidate).location == location
                        && matches!(self.node(candidate).kind, NodeKind::YulIdentifier(_))
                })
                .unwrap_or_else(|| {
                    panic!("no Yul identifier at external reference span {location:?}")
                });

            if let NodeKind::InlineAssembly(assembly) = &mut self.node_mut(id).kind {
                assembly.external_references[index].yul_identifier = Some(yul_identifier);
            }
            if let NodeKind::YulIdentifier(yul) = &mut self.node_mut(yul_identifier).kind {
                yul.external_reference = Some((id, index as u32));
            }
        }
    }

    // -- inheritance, used errors and events ------------------------------

    fn link_contract(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let (base_specifiers, used_error_ids, used_event_ids, own_events) =
            match &self.node(id).kind {
                NodeKind::ContractDefinition(contract) => (
                    contract.base_contracts.clone(),
                    contract.used_error_ids.clone(),
                    contract.used_event_ids.clone(),
                    contract.events.clone(),
                ),
                other => panic!("expected ContractDefinition, got {}", other.name()),
            };

        for specifier in base_specifiers {
            let base_name = match &self.node(specifier).kind {
                NodeKind::InheritanceSpecifier(spec) => spec.base_name,
                _ => unreachable!(),
            };
            let referenced_id = match &self.node(base_name).kind {
                NodeKind::UserDefinedTypeName(n) => n.referenced_declaration_id,
                NodeKind::IdentifierPath(n) => n.referenced_declaration_id,
                other => panic!("unexpected base name node {}", other.name()),
            };
            let base = self.resolver.resolve_node(referenced_id, cu);
            match &mut self.node_mut(base).kind {
                NodeKind::ContractDefinition(contract) => {
                    contract.child_contracts.insert(id);
                }
                other => panic!("base contract resolves to {}", other.name()),
            }
            self.add_destroy(
                id.file,
                DestroyAction::DetachChildContract { base, child: id },
            );
        }

        for error_id in used_error_ids {
            let error = self.resolver.resolve_node(error_id, cu);
            match &mut self.node_mut(error).kind {
                NodeKind::ErrorDefinition(err) => {
                    err.used_in.insert(id);
                }
                other => panic!("used error resolves to {}", other.name()),
            }
            if let NodeKind::ContractDefinition(contract) = &mut self.node_mut(id).kind {
                contract.used_errors.insert(error);
            }
            self.add_destroy(
                id.file,
                DestroyAction::DetachUsedError { error, contract: id },
            );
        }

        // Events declared by the contract itself count as used even
        // before solc 0.8.20 started exporting usedEvents.
        let mut used_events: Vec<NodeId> = own_events;
        for event_id in used_event_ids {
            used_events.push(self.resolver.resolve_node(event_id, cu));
        }
        if let NodeKind::ContractDefinition(contract) = &mut self.node_mut(id).kind {
            contract.used_events.extend(used_events);
        }
    }

    fn link_inherited_events(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let linearized = match &self.node(id).kind {
            NodeKind::ContractDefinition(contract) => {
                contract.linearized_base_contract_ids.clone()
            }
            other => panic!("expected ContractDefinition, got {}", other.name()),
        };

        let mut inherited = Vec::new();
        for base_id in linearized {
            let base = self.resolver.resolve_node(base_id, cu);
            if let NodeKind::ContractDefinition(contract) = &self.node(base).kind {
                inherited.extend(contract.used_events.iter().copied());
            }
        }

        let all_events: Vec<NodeId> = {
            let contract = match &mut self.node_mut(id).kind {
                NodeKind::ContractDefinition(contract) => contract,
                _ => unreachable!(),
            };
            contract.used_events.extend(inherited);
            contract.used_events.iter().copied().collect()
        };

        for event in all_events {
            if let NodeKind::EventDefinition(ev) = &mut self.node_mut(event).kind {
                ev.used_in.insert(id);
            }
            self.add_destroy(
                id.file,
                DestroyAction::DetachUsedEvent { event, contract: id },
            );
        }
    }

    fn link_bases(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        enum BaseKind {
            Function,
            Modifier,
        }
        let (base_ids, kind) = match &self.node(id).kind {
            NodeKind::FunctionDefinition(f) => (f.base_function_ids.clone(), BaseKind::Function),
            NodeKind::VariableDeclaration(v) => (v.base_function_ids.clone(), BaseKind::Function),
            NodeKind::ModifierDefinition(m) => (m.base_modifier_ids.clone(), BaseKind::Modifier),
            other => panic!("unexpected base link node {}", other.name()),
        };

        for base_id in base_ids {
            let base = self.resolver.resolve_node(base_id, cu);
            let action = match (&kind, &mut self.node_mut(base).kind) {
                (BaseKind::Function, NodeKind::FunctionDefinition(f)) => {
                    f.child_functions.insert(id);
                    DestroyAction::DetachChildFunction { base, child: id }
                }
                (BaseKind::Modifier, NodeKind::ModifierDefinition(m)) => {
                    m.child_modifiers.insert(id);
                    DestroyAction::DetachChildModifier { base, child: id }
                }
                (_, other) => panic!("base declaration resolves to {}", other.name()),
            };
            self.add_destroy(id.file, action);
        }
    }

    fn bind_operator(&mut self, id: NodeId) {
        let cu = self.cu_of(id.file);
        let (function_id, site) = match &self.node(id).kind {
            NodeKind::BinaryOperation(op) => (op.function_id, RefSite::BinaryOperation(id)),
            NodeKind::UnaryOperation(op) => (op.function_id, RefSite::UnaryOperation(id)),
            other => panic!("unexpected operator node {}", other.name()),
        };
        let Some(function_id) = function_id else {
            return;
        };
        let function = self.resolver.resolve_node(function_id, cu);
        assert!(
            matches!(self.node(function).kind, NodeKind::FunctionDefinition(_)),
            "user-defined operator does not resolve to a function"
        );
        self.register_reference(function, site);
        self.add_destroy(
            id.file,
            DestroyAction::UnregisterReference {
                declaration: function,
                site,
            },
        );
    }
}
