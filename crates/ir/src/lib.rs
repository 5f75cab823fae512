//! Intermediate representation of Solidity sources, built from the
//! compiler's standard-JSON AST output and optimized for static
//! analysis.
//!
//! The IR links every node to its source bytes, its parent and children,
//! the declarations it references and the declarations referencing it.
//! On top of that sit the cross-CU reference resolver, the declaration
//! binding passes and the per-function control flow graphs.
//!
//! The entry point is [`Build`]: ingest one or more compilation units
//! with [`Build::ingest_output`], run [`Build::finalize`] once all of
//! them are in, then query away. Files can be dropped again with
//! [`Build::evict`]; every cross-file edge into an evicted file is torn
//! down by the registered destroy actions.

pub mod binding;
pub mod builder;
pub mod cfg;
pub mod error;
pub mod global;
pub mod node;
pub mod nodes;
pub mod resolver;
pub mod semantic;
pub mod source;
pub mod types;
pub mod visit;

pub use cfg::{CfgBlockId, ControlFlowGraph, TransitionCondition};
pub use error::IrError;
pub use global::GlobalSymbol;
pub use node::{ByteRange, FileId, IrNode, NodeId, NodeKind, RefSite};
pub use resolver::{CuHash, ReferenceResolver};
pub use semantic::{CalledEntity, ReferencedDeclaration};
pub use types::SolType;
pub use visit::Visitor;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use semver::VersionReq;
use tracing::{debug, info};

use crate::source::{IntervalIndex, LineIndex};

/// Descriptor of one compiler invocation over a set of source files.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    /// Content hash identifying the CU.
    pub hash: CuHash,
    /// Compiler versions the CU may have been produced by.
    pub version_range: VersionReq,
}

impl CompilationUnit {
    pub fn new(hash: CuHash, version_range: VersionReq) -> Self {
        CompilationUnit {
            hash,
            version_range,
        }
    }

    /// Derives the CU hash from raw content (typically the standard-JSON
    /// input or output bytes).
    pub fn from_content(content: &[u8], version_range: VersionReq) -> Self {
        CompilationUnit {
            hash: *blake3::hash(content).as_bytes(),
            version_range,
        }
    }
}

/// One ingested source file: raw bytes plus the IR arena built over
/// them.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub source_unit_name: String,
    pub source: Vec<u8>,
    /// The CU whose AST materialized this file's IR nodes.
    pub cu_hash: CuHash,
    pub(crate) nodes: Vec<IrNode>,
    pub(crate) intervals: IntervalIndex,
    lines: OnceCell<LineIndex>,
}

impl SourceFile {
    pub(crate) fn lines(&self) -> &LineIndex {
        self.lines.get_or_init(|| LineIndex::new(&self.source))
    }
}

/// Raw bytes and path identity of one source file handed to ingestion.
#[derive(Debug, Clone)]
pub struct SourceInput {
    /// Absolute path, the eviction key.
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Top-level owner of all IR state.
#[derive(Debug, Default)]
pub struct Build {
    /// Slot per [`FileId`]; eviction leaves a hole so ids stay stable.
    pub(crate) files: Vec<Option<SourceFile>>,
    paths: HashMap<PathBuf, FileId>,
    unit_names: HashMap<String, FileId>,
    pub(crate) resolver: ReferenceResolver,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one compilation unit's standard-JSON output.
    ///
    /// `sources` maps source unit names to their raw bytes. Every file of
    /// the CU is indexed for cross-CU identity; files seen for the first
    /// time are materialized into IR, files already materialized by an
    /// earlier CU are only indexed. Call [`finalize`](Self::finalize)
    /// after the last CU of a batch.
    pub fn ingest_output(
        &mut self,
        cu: &CompilationUnit,
        output: &ast::SolcOutput,
        sources: &BTreeMap<String, SourceInput>,
    ) -> Result<(), IrError> {
        for (unit_name, out_source) in &output.sources {
            let input = sources
                .get(unit_name)
                .ok_or_else(|| IrError::MissingFile(PathBuf::from(unit_name)))?;
            self.ingest_source(
                cu,
                unit_name,
                input,
                &out_source.ast,
                out_source.id,
                output.contracts.get(unit_name),
            )?;
        }
        Ok(())
    }

    fn ingest_source(
        &mut self,
        cu: &CompilationUnit,
        unit_name: &str,
        input: &SourceInput,
        unit_ast: &ast::SolcSourceUnit,
        source_file_id: i64,
        contracts_info: Option<&BTreeMap<String, serde_json::Value>>,
    ) -> Result<(), IrError> {
        let file = match self.paths.get(&input.path) {
            Some(&file) => file,
            None => {
                let file = FileId(self.files.len() as u32);
                self.files.push(None);
                self.paths.insert(input.path.clone(), file);
                file
            }
        };

        self.resolver
            .index_nodes(unit_ast, file, &input.path, cu.hash)?;
        self.resolver
            .register_source_file_id(source_file_id, file, cu.hash);

        if self.files[file.0 as usize].is_some() {
            // Already materialized by an earlier CU; indexing above is
            // all this CU contributes.
            debug!(file = %input.path.display(), "source unit already materialized");
            return Ok(());
        }

        let built = builder::build_file(file, cu.hash, unit_ast, contracts_info, &mut self.resolver);
        self.files[file.0 as usize] = Some(SourceFile {
            path: input.path.clone(),
            source_unit_name: unit_name.to_string(),
            source: input.content.clone(),
            cu_hash: cu.hash,
            nodes: built.nodes,
            intervals: IntervalIndex::build(built.intervals),
            lines: OnceCell::new(),
        });
        self.unit_names.insert(unit_name.to_string(), file);
        info!(file = %input.path.display(), "ingested source unit");
        Ok(())
    }

    /// Runs all pending post-process work in priority order. Must run
    /// after the last CU of a batch and before any semantic query; the IR
    /// is immutable from here until the next ingest or eviction.
    pub fn finalize(&mut self) {
        let mut processed = 0usize;
        while let Some(item) = self.resolver.dequeue() {
            self.run_work_item(item);
            processed += 1;
        }
        debug!(work_items = processed, "post-processing finished");
    }

    /// Evicts a file: runs its destroy actions (most recently registered
    /// first), unregisters its nodes and drops its arena. Cross-CU id
    /// indexes survive so re-ingesting the same CU reproduces identical
    /// state.
    pub fn evict(&mut self, path: &Path) -> Result<(), IrError> {
        let file = self
            .paths
            .get(path)
            .copied()
            .ok_or_else(|| IrError::MissingFile(path.to_path_buf()))?;
        if self.files[file.0 as usize].is_none() {
            return Err(IrError::MissingFile(path.to_path_buf()));
        }

        for action in self.resolver.take_destroy_actions(file) {
            self.run_destroy_action(action);
        }
        self.resolver.forget_file_nodes(file);
        let dropped = self.files[file.0 as usize].take();
        if let Some(dropped) = dropped {
            self.unit_names.remove(&dropped.source_unit_name);
            info!(file = %dropped.path.display(), "evicted source unit");
        }
        Ok(())
    }

    // -- node access ------------------------------------------------------

    pub fn file(&self, file: FileId) -> &SourceFile {
        self.files[file.0 as usize]
            .as_ref()
            .expect("file has been evicted")
    }

    pub fn try_file(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(file.0 as usize)?.as_ref()
    }

    pub fn file_by_path(&self, path: &Path) -> Option<FileId> {
        let file = *self.paths.get(path)?;
        self.try_file(file).map(|_| file)
    }

    pub fn file_by_source_unit_name(&self, unit_name: &str) -> Option<FileId> {
        self.unit_names.get(unit_name).copied()
    }

    /// All currently materialized files.
    pub fn file_ids(&self) -> impl Iterator<Item = FileId> + '_ {
        self.files
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| FileId(i as u32))
    }

    pub fn node(&self, id: NodeId) -> &IrNode {
        &self.file(id.file).nodes[id.index as usize]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut IrNode {
        self.files[id.file.0 as usize]
            .as_mut()
            .expect("file has been evicted")
            .nodes
            .get_mut(id.index as usize)
            .expect("node index out of bounds")
    }

    pub(crate) fn try_node(&self, id: NodeId) -> Option<&IrNode> {
        self.try_file(id.file)?.nodes.get(id.index as usize)
    }

    /// The root node of a file.
    pub fn source_unit(&self, file: FileId) -> NodeId {
        NodeId::source_unit_of(file)
    }

    /// UTF-8 source slice the node covers.
    pub fn source_of(&self, id: NodeId) -> &[u8] {
        let node = self.node(id);
        &self.file(id.file).source[node.location.0..node.location.1]
    }

    /// Direct children in syntactic order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The node and all its descendants, pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            let children = self.children(current);
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// IR nodes covering the byte offset, most deeply nested first.
    pub fn nodes_at(&self, file: FileId, byte_offset: usize) -> Vec<NodeId> {
        let source_file = self.file(file);
        let mut hits: Vec<NodeId> = source_file
            .intervals
            .stab(byte_offset)
            .into_iter()
            .map(|index| NodeId { file, index })
            .collect();
        hits.sort_by_key(|&id| std::cmp::Reverse(self.node(id).depth));
        hits
    }

    /// 1-indexed line and UTF-16 column of a byte offset.
    pub fn position(&self, file: FileId, byte_offset: usize) -> (usize, usize) {
        let source_file = self.file(file);
        source_file.lines().position(&source_file.source, byte_offset)
    }

    /// All uses of a global symbol.
    pub fn global_symbol_references(&self, symbol: GlobalSymbol) -> &[RefSite] {
        self.resolver.global_symbol_references(symbol)
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }
}
