//! The reference resolver: cross-CU node identity, post-process
//! scheduling and teardown bookkeeping.
//!
//! A single source file can be compiled in multiple compilation units,
//! each assigning different integer ids to the same AST node. Only one
//! `SourceUnit` IR node is kept per file (the first CU to ingest it is
//! canonical); every other CU merely indexes its ids. The unique key
//! across CUs is `(file, traversal index)` in the deterministic pre-order
//! walk of [`ast::Walk`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::path::Path;

use ast::{AstNodeId, SolcSourceUnit};
use tracing::debug;

use crate::error::IrError;
use crate::global::GlobalSymbol;
use crate::node::{FileId, NodeId, RefSite};

/// Content hash identifying a compilation unit.
pub type CuHash = [u8; 32];

/// Post-process work scheduled during IR construction, drained in
/// priority order once all compilation units are ingested.
#[derive(Debug)]
pub enum WorkItem {
    /// Resolve overloaded symbol aliases of an import directive.
    RebindImportAliases(NodeId),
    /// Bind an identifier to declarations or global symbols.
    BindIdentifier(NodeId),
    /// Bind a member access, deriving the member from the expression type
    /// when the compiler left it out.
    BindMemberAccess(NodeId),
    /// Split an identifier path into parts and bind each one.
    ResolveIdentifierPath(NodeId),
    /// Link the external references of an inline assembly block.
    ResolveExternalReferences(NodeId),
    /// Link base contracts, used errors and declared events.
    LinkContract(NodeId),
    /// Link base functions/modifiers into child back-sets.
    LinkBases(NodeId),
    /// Register a user-defined operator reference.
    BindOperator(NodeId),
    /// Pull used events out of linearized base contracts. Runs after
    /// every contract's own `LinkContract` finished.
    LinkInheritedEvents(NodeId),
}

/// Teardown action registered for a file, executed exactly once when the
/// file is evicted. Each action unregisters one cross-node edge.
#[derive(Debug)]
pub enum DestroyAction {
    UnregisterReference {
        declaration: NodeId,
        site: RefSite,
    },
    UnregisterGlobalReference {
        symbol: GlobalSymbol,
        site: RefSite,
    },
    DetachChildContract {
        base: NodeId,
        child: NodeId,
    },
    DetachChildFunction {
        base: NodeId,
        child: NodeId,
    },
    DetachChildModifier {
        base: NodeId,
        child: NodeId,
    },
    DetachUsedError {
        error: NodeId,
        contract: NodeId,
    },
    DetachUsedEvent {
        event: NodeId,
        contract: NodeId,
    },
}

#[derive(Debug)]
struct QueuedWork {
    priority: i32,
    seq: u64,
    item: WorkItem,
}

impl PartialEq for QueuedWork {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl Eq for QueuedWork {}
impl PartialOrd for QueuedWork {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueuedWork {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

#[derive(Debug, Default)]
pub struct ReferenceResolver {
    /// Per CU: compiler id -> canonical key.
    ordered_nodes: HashMap<CuHash, HashMap<AstNodeId, (FileId, u32)>>,
    /// Per CU: canonical key -> compiler id.
    ordered_nodes_inverted: HashMap<CuHash, HashMap<(FileId, u32), AstNodeId>>,
    /// Per CU: compiler source file id -> file.
    registered_source_files: HashMap<CuHash, HashMap<i64, FileId>>,
    /// Canonical key -> IR node.
    registered_nodes: HashMap<(FileId, u32), NodeId>,
    /// Node kind sequence per file, established by the first CU and
    /// checked against every further CU.
    node_kinds: HashMap<FileId, HashMap<u32, &'static str>>,
    queue: BinaryHeap<Reverse<QueuedWork>>,
    next_seq: u64,
    destroy: HashMap<FileId, Vec<DestroyAction>>,
    global_references: HashMap<GlobalSymbol, Vec<RefSite>>,
}

impl ReferenceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every id-carrying node of `root` under its `(file,
    /// traversal index)` key for the given CU.
    ///
    /// The first CU to index a file records the node kind sequence; every
    /// further CU is zipped against it. Exactly two divergences are
    /// tolerated: structured documentation present on one side only, and
    /// `UserDefinedTypeName` standing in for `IdentifierPath` (or the
    /// reverse) across the 0.8 boundary. Anything else is structural
    /// drift and fatal.
    pub fn index_nodes(
        &mut self,
        root: &SolcSourceUnit,
        file: FileId,
        path: &Path,
        cu_hash: CuHash,
    ) -> Result<(), IrError> {
        let mut sequence: Vec<(AstNodeId, &'static str)> = Vec::new();
        root.walk_members(&mut |id, kind| sequence.push((id, kind)));

        let check = self.node_kinds.contains_key(&file);
        let kinds = self.node_kinds.entry(file).or_default();
        if check {
            assert_eq!(kinds.get(&0), Some(&"SourceUnit"));
        } else {
            kinds.insert(0, "SourceUnit");
        }

        let forward = self.ordered_nodes.entry(cu_hash).or_default();
        let inverted = self.ordered_nodes_inverted.entry(cu_hash).or_default();
        forward.insert(root.id, (file, 0));
        inverted.insert((file, 0), root.id);

        let mut index: u32 = 1;
        let mut prev_kind: &'static str = "SourceUnit";
        for &(id, kind) in &sequence {
            if check {
                let mut skip = false;
                loop {
                    let other = kinds.get(&index).copied();
                    if other == Some(kind) {
                        break;
                    }
                    let prev_other = kinds.get(&(index - 1)).copied();
                    if other == Some("StructuredDocumentation") {
                        // Present in the stored walk, absent here.
                        index += 1;
                        continue;
                    } else if kind == "StructuredDocumentation" {
                        // Present here, absent in the stored walk.
                        skip = true;
                        prev_kind = "StructuredDocumentation";
                        break;
                    } else if prev_other == Some("UserDefinedTypeName")
                        && prev_kind == "UserDefinedTypeName"
                    {
                        // A 0.8 UserDefinedTypeName carries a nested
                        // IdentifierPath the old form lacks.
                        if other == Some("IdentifierPath") {
                            index += 1;
                            continue;
                        } else if kind == "IdentifierPath" {
                            skip = true;
                            prev_kind = "IdentifierPath";
                            break;
                        }
                    } else if matches!(
                        (other, kind),
                        (Some("IdentifierPath"), "UserDefinedTypeName")
                            | (Some("UserDefinedTypeName"), "IdentifierPath")
                    ) {
                        // Positionally interchangeable across the 0.8
                        // boundary.
                        break;
                    }

                    return Err(IrError::StructuralDrift {
                        file: path.to_path_buf(),
                        index: index as usize,
                        expected: other.unwrap_or("<end of walk>").to_string(),
                        found: kind.to_string(),
                        ast_id: id,
                    });
                }
                if skip {
                    continue;
                }
            } else {
                kinds.insert(index, kind);
            }

            forward.insert(id, (file, index));
            inverted.insert((file, index), id);
            prev_kind = kind;
            index += 1;
        }

        debug!(file = %path.display(), nodes = sequence.len(), "indexed AST nodes");
        Ok(())
    }

    pub fn register_source_file_id(&mut self, source_file_id: i64, file: FileId, cu_hash: CuHash) {
        self.registered_source_files
            .entry(cu_hash)
            .or_default()
            .insert(source_file_id, file);
    }

    /// The file registered for a compiler source file id in a CU.
    pub fn resolve_source_file_id(&self, source_file_id: i64, cu_hash: CuHash) -> Option<FileId> {
        self.registered_source_files
            .get(&cu_hash)?
            .get(&source_file_id)
            .copied()
    }

    /// The `(file, traversal index)` key for an AST id in a CU.
    pub fn node_path_order(&self, ast_id: AstNodeId, cu_hash: CuHash) -> (FileId, u32) {
        self.ordered_nodes
            .get(&cu_hash)
            .and_then(|m| m.get(&ast_id))
            .copied()
            .unwrap_or_else(|| panic!("AST id {ast_id} is not indexed in the given CU"))
    }

    /// The AST id a canonical key has in a CU.
    pub fn ast_id_from_path_order(&self, order: (FileId, u32), cu_hash: CuHash) -> AstNodeId {
        self.ordered_nodes_inverted
            .get(&cu_hash)
            .and_then(|m| m.get(&order))
            .copied()
            .unwrap_or_else(|| {
                panic!(
                    "canonical key ({:?}, {}) is not indexed in the given CU",
                    order.0, order.1
                )
            })
    }

    /// Translates an AST id valid in `from` into the id the same node has
    /// in `to`.
    pub fn translate_id(&self, ast_id: AstNodeId, from: CuHash, to: CuHash) -> AstNodeId {
        self.ast_id_from_path_order(self.node_path_order(ast_id, from), to)
    }

    pub fn register_node(&mut self, node: NodeId, ast_id: AstNodeId, cu_hash: CuHash) {
        let order = self.node_path_order(ast_id, cu_hash);
        self.registered_nodes.insert(order, node);
    }

    /// The IR node registered for an AST id in a CU. A missing entry is a
    /// bug in construction, hence the assertion.
    pub fn resolve_node(&self, ast_id: AstNodeId, cu_hash: CuHash) -> NodeId {
        self.try_resolve_node(ast_id, cu_hash)
            .unwrap_or_else(|| panic!("no IR node registered for AST id {ast_id}"))
    }

    pub fn try_resolve_node(&self, ast_id: AstNodeId, cu_hash: CuHash) -> Option<NodeId> {
        let order = self
            .ordered_nodes
            .get(&cu_hash)
            .and_then(|m| m.get(&ast_id))?;
        self.registered_nodes.get(order).copied()
    }

    /// Schedules post-process work. Lower priorities run first; equal
    /// priorities run in enqueue order.
    pub fn enqueue(&mut self, priority: i32, item: WorkItem) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(QueuedWork {
            priority,
            seq,
            item,
        }));
    }

    pub fn dequeue(&mut self) -> Option<WorkItem> {
        self.queue.pop().map(|Reverse(work)| work.item)
    }

    /// Registers a teardown action for a file.
    pub fn register_destroy_action(&mut self, file: FileId, action: DestroyAction) {
        self.destroy.entry(file).or_default().push(action);
    }

    /// Removes and returns the teardown actions of a file, most recently
    /// registered first.
    pub fn take_destroy_actions(&mut self, file: FileId) -> Vec<DestroyAction> {
        let mut actions = self.destroy.remove(&file).unwrap_or_default();
        actions.reverse();
        actions
    }

    pub fn register_global_symbol_reference(&mut self, symbol: GlobalSymbol, site: RefSite) {
        self.global_references.entry(symbol).or_default().push(site);
    }

    pub fn unregister_global_symbol_reference(&mut self, symbol: GlobalSymbol, site: RefSite) {
        if let Some(sites) = self.global_references.get_mut(&symbol) {
            if let Some(at) = sites.iter().position(|s| *s == site) {
                sites.remove(at);
            }
        }
    }

    /// All uses of a global symbol, in registration order.
    pub fn global_symbol_references(&self, symbol: GlobalSymbol) -> &[RefSite] {
        self.global_references
            .get(&symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Forgets the registered IR nodes of a file. CU id indexes and the
    /// recorded kind sequence survive so a re-ingest from the same CU
    /// reproduces identical keys.
    pub fn forget_file_nodes(&mut self, file: FileId) {
        self.registered_nodes.retain(|&(f, _), _| f != file);
    }

    /// Drops the recorded kind sequences for the given files, allowing a
    /// re-index from a structurally different AST.
    pub fn clear_indexed_nodes<'a>(&mut self, files: impl IntoIterator<Item = &'a FileId>) {
        for file in files {
            self.node_kinds.remove(file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_orders_by_priority_then_sequence() {
        let mut resolver = ReferenceResolver::new();
        let a = NodeId {
            file: FileId(0),
            index: 1,
        };
        let b = NodeId {
            file: FileId(0),
            index: 2,
        };
        let c = NodeId {
            file: FileId(0),
            index: 3,
        };
        resolver.enqueue(0, WorkItem::LinkContract(a));
        resolver.enqueue(-1, WorkItem::BindIdentifier(b));
        resolver.enqueue(0, WorkItem::LinkContract(c));
        resolver.enqueue(1, WorkItem::LinkInheritedEvents(a));

        match resolver.dequeue() {
            Some(WorkItem::BindIdentifier(id)) => assert_eq!(id, b),
            other => panic!("unexpected {other:?}"),
        }
        match resolver.dequeue() {
            Some(WorkItem::LinkContract(id)) => assert_eq!(id, a),
            other => panic!("unexpected {other:?}"),
        }
        match resolver.dequeue() {
            Some(WorkItem::LinkContract(id)) => assert_eq!(id, c),
            other => panic!("unexpected {other:?}"),
        }
        match resolver.dequeue() {
            Some(WorkItem::LinkInheritedEvents(_)) => {}
            other => panic!("unexpected {other:?}"),
        }
        assert!(resolver.dequeue().is_none());
    }

    #[test]
    fn destroy_actions_come_back_reversed() {
        let mut resolver = ReferenceResolver::new();
        let file = FileId(3);
        let decl = NodeId { file, index: 4 };
        let site_a = RefSite::Identifier(NodeId { file, index: 5 });
        let site_b = RefSite::Identifier(NodeId { file, index: 6 });
        resolver.register_destroy_action(
            file,
            DestroyAction::UnregisterReference {
                declaration: decl,
                site: site_a,
            },
        );
        resolver.register_destroy_action(
            file,
            DestroyAction::UnregisterReference {
                declaration: decl,
                site: site_b,
            },
        );
        let actions = resolver.take_destroy_actions(file);
        match &actions[0] {
            DestroyAction::UnregisterReference { site, .. } => assert_eq!(*site, site_b),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(actions.len(), 2);
        assert!(resolver.take_destroy_actions(file).is_empty());
    }

    #[test]
    fn global_references_track_registration() {
        let mut resolver = ReferenceResolver::new();
        let site = RefSite::MemberAccess(NodeId {
            file: FileId(0),
            index: 9,
        });
        resolver.register_global_symbol_reference(GlobalSymbol::MsgSender, site);
        assert_eq!(
            resolver.global_symbol_references(GlobalSymbol::MsgSender),
            &[site]
        );
        resolver.unregister_global_symbol_reference(GlobalSymbol::MsgSender, site);
        assert!(resolver
            .global_symbol_references(GlobalSymbol::MsgSender)
            .is_empty());
    }
}
