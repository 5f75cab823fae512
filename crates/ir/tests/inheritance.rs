//! Base contract linearization and child contract back-links.

mod common;

use common::*;
use ir::{NodeKind, ReferencedDeclaration};
use serde_json::json;

const SOURCE: &str = "contract A {} contract B is A {} contract C is B, A {}";

fn contract(source: &str, id: i64, name: &str, nth: usize, bases: Vec<serde_json::Value>, linearized: Vec<i64>, span: (usize, usize)) -> serde_json::Value {
    json!({
        "id": id,
        "src": format!("{}:{}:0", span.0, span.1 - span.0),
        "nodeType": "ContractDefinition",
        "name": name,
        "nameLocation": src_nth(source, name, nth, 0),
        "abstract": false,
        "baseContracts": bases,
        "contractDependencies": [],
        "contractKind": "contract",
        "linearizedBaseContracts": linearized,
        "nodes": [],
        "scope": 100,
        "fullyImplemented": true
    })
}

fn inheritance_fixture() -> serde_json::Value {
    let s = SOURCE;
    // `B is A` and `C is B, A`: inheritance specifiers sit on the base
    // names themselves.
    let spec_b_a = json!({
        "id": 20,
        "src": src_nth(s, "A", 1, 0),
        "nodeType": "InheritanceSpecifier",
        "baseName": {
            "id": 21,
            "src": src_nth(s, "A", 1, 0),
            "nodeType": "IdentifierPath",
            "name": "A",
            "referencedDeclaration": 1
        }
    });
    let spec_c_b = json!({
        "id": 22,
        "src": src_nth(s, "B", 1, 0),
        "nodeType": "InheritanceSpecifier",
        "baseName": {
            "id": 23,
            "src": src_nth(s, "B", 1, 0),
            "nodeType": "IdentifierPath",
            "name": "B",
            "referencedDeclaration": 2
        }
    });
    let spec_c_a = json!({
        "id": 24,
        "src": src_nth(s, "A", 2, 0),
        "nodeType": "InheritanceSpecifier",
        "baseName": {
            "id": 25,
            "src": src_nth(s, "A", 2, 0),
            "nodeType": "IdentifierPath",
            "name": "A",
            "referencedDeclaration": 1
        }
    });

    json!({
        "id": 100,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Inherit.sol",
        "exportedSymbols": { "A": [1], "B": [2], "C": [3] },
        "nodes": [
            contract(s, 1, "A", 0, vec![], vec![1], (0, 13)),
            contract(s, 2, "B", 0, vec![spec_b_a], vec![2, 1], (14, 32)),
            contract(s, 3, "C", 0, vec![spec_c_b, spec_c_a], vec![3, 2, 1], (33, 54)),
        ]
    })
}

#[test]
fn linearization_resolves_in_order() {
    let build = build_from(vec![("Inherit.sol", SOURCE, inheritance_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Inherit.sol").unwrap());

    let a = find_declaration(&build, root, "ContractDefinition", "A");
    let b = find_declaration(&build, root, "ContractDefinition", "B");
    let c = find_declaration(&build, root, "ContractDefinition", "C");

    assert_eq!(build.linearized_base_contracts(c), vec![c, b, a]);
}

#[test]
fn child_contracts_are_back_linked() {
    let build = build_from(vec![("Inherit.sol", SOURCE, inheritance_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Inherit.sol").unwrap());

    let a = find_declaration(&build, root, "ContractDefinition", "A");
    let b = find_declaration(&build, root, "ContractDefinition", "B");
    let c = find_declaration(&build, root, "ContractDefinition", "C");

    match &build.node(a).kind {
        NodeKind::ContractDefinition(contract) => {
            assert_eq!(
                contract.child_contracts.iter().copied().collect::<Vec<_>>(),
                vec![b, c]
            );
        }
        _ => unreachable!(),
    }
    match &build.node(b).kind {
        NodeKind::ContractDefinition(contract) => {
            assert_eq!(
                contract.child_contracts.iter().copied().collect::<Vec<_>>(),
                vec![c]
            );
        }
        _ => unreachable!(),
    }
}

#[test]
fn base_name_of_c_resolves_to_b() {
    let build = build_from(vec![("Inherit.sol", SOURCE, inheritance_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Inherit.sol").unwrap());

    let b = find_declaration(&build, root, "ContractDefinition", "B");
    let c = find_declaration(&build, root, "ContractDefinition", "C");

    let base_name = match &build.node(c).kind {
        NodeKind::ContractDefinition(contract) => {
            let specifier = contract.base_contracts[0];
            match &build.node(specifier).kind {
                NodeKind::InheritanceSpecifier(spec) => spec.base_name,
                _ => unreachable!(),
            }
        }
        _ => unreachable!(),
    };
    assert_eq!(
        build.referenced_declaration(base_name),
        Some(ReferencedDeclaration::Declaration(b))
    );

    // The path part registered itself as a reference of B.
    let parts = build.identifier_path_parts(base_name);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "B");
    assert!(build
        .references(b)
        .iter()
        .any(|site| matches!(site, ir::RefSite::IdentifierPathPart(node, 0) if *node == base_name)));
}

#[test]
fn intervals_and_parents_hold_for_every_node() {
    let build = build_from(vec![("Inherit.sol", SOURCE, inheritance_fixture())]);
    let file = build.file_by_source_unit_name("Inherit.sol").unwrap();
    let root = build.source_unit(file);

    for id in build.descendants(root) {
        let node = build.node(id);
        if node.location.0 != node.location.1 {
            for offset in node.location.0..node.location.1 {
                assert!(
                    build.nodes_at(file, offset).contains(&id),
                    "interval query at {offset} misses {}",
                    node.kind.name()
                );
            }
        }
        if let Some(parent) = node.parent {
            if !matches!(node.kind, NodeKind::StructuredDocumentation(_)) {
                let parent_location = build.node(parent).location;
                assert!(
                    parent_location.0 <= node.location.0 && node.location.1 <= parent_location.1,
                    "child range escapes parent"
                );
            }
        }
    }
}
