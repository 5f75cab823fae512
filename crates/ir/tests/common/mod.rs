//! Shared fixture helpers: compilation units over handwritten solc JSON.
//!
//! Byte offsets inside fixtures are computed from the source text so the
//! JSON stays in sync with the Solidity snippets.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use ir::{Build, CompilationUnit, SourceInput};
use semver::VersionReq;
use serde_json::{json, Value};

pub fn cu(tag: u8) -> CompilationUnit {
    CompilationUnit::new([tag; 32], VersionReq::STAR)
}

/// `"<offset>:<len>:<file>"` of the `n`-th occurrence of `needle`.
pub fn src_nth(source: &str, needle: &str, n: usize, file_id: i64) -> String {
    let mut from = 0;
    for _ in 0..n {
        from = source[from..]
            .find(needle)
            .map(|at| from + at + needle.len())
            .unwrap_or_else(|| panic!("occurrence {n} of {needle:?} not found"));
    }
    let offset = from
        + source[from..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in fixture source"));
    format!("{}:{}:{}", offset, needle.len(), file_id)
}

pub fn src_of(source: &str, needle: &str, file_id: i64) -> String {
    src_nth(source, needle, 0, file_id)
}

/// Byte offset of the `n`-th occurrence of `needle`.
pub fn offset_nth(source: &str, needle: &str, n: usize) -> usize {
    let src = src_nth(source, needle, n, 0);
    src.split(':').next().unwrap().parse().unwrap()
}

/// `src` of `target` located inside the first occurrence of `context`.
/// Disambiguates short tokens like a single identifier character.
pub fn src_in(source: &str, context: &str, target: &str, file_id: i64) -> String {
    let context_at = source
        .find(context)
        .unwrap_or_else(|| panic!("{context:?} not found in fixture source"));
    let target_at = context_at
        + context[..]
            .find(target)
            .unwrap_or_else(|| panic!("{target:?} not found in {context:?}"));
    format!("{}:{}:{}", target_at, target.len(), file_id)
}

pub fn whole(source: &str, file_id: i64) -> String {
    format!("0:{}:{}", source.len(), file_id)
}

pub fn type_descriptions(identifier: &str, readable: &str) -> Value {
    json!({ "typeIdentifier": identifier, "typeString": readable })
}

pub fn empty_parameter_list(id: i64, src: String) -> Value {
    json!({
        "id": id,
        "src": src,
        "nodeType": "ParameterList",
        "parameters": []
    })
}

/// Ingests `(unit name, source, ast)` triples as one compilation unit
/// and finalizes the build.
pub fn build_from(units: Vec<(&str, &str, Value)>) -> Build {
    let mut build = Build::new();
    ingest(&mut build, cu(1), &units);
    build.finalize();
    build
}

/// Ingests the triples into an existing build without finalizing.
pub fn ingest(build: &mut Build, cu: CompilationUnit, units: &[(&str, &str, Value)]) {
    let mut sources = BTreeMap::new();
    let mut output_sources = serde_json::Map::new();
    for (index, (unit_name, source, ast)) in units.iter().enumerate() {
        sources.insert(
            unit_name.to_string(),
            SourceInput {
                path: PathBuf::from(format!("/project/{unit_name}")),
                content: source.as_bytes().to_vec(),
            },
        );
        output_sources.insert(
            unit_name.to_string(),
            json!({ "id": index as i64, "ast": ast }),
        );
    }
    let output: ast::SolcOutput =
        serde_json::from_value(json!({ "sources": output_sources, "contracts": {} }))
            .expect("fixture does not match the standard-JSON schema");
    build
        .ingest_output(&cu, &output, &sources)
        .expect("fixture ingest failed");
}

/// Declaration node named `name` under `root`, by kind name.
pub fn find_declaration(build: &Build, root: ir::NodeId, kind: &str, name: &str) -> ir::NodeId {
    build
        .descendants(root)
        .into_iter()
        .find(|&id| {
            build.node(id).kind.name() == kind && build.declaration_name(id) == Some(name)
        })
        .unwrap_or_else(|| panic!("no {kind} named {name:?}"))
}

/// First descendant of the given kind.
pub fn find_kind(build: &Build, root: ir::NodeId, kind: &str) -> ir::NodeId {
    build
        .descendants(root)
        .into_iter()
        .find(|&id| build.node(id).kind.name() == kind)
        .unwrap_or_else(|| panic!("no {kind} node in fixture"))
}
