//! Cross-CU node identity: the same file compiled in several
//! compilation units with different id numberings, including the two
//! tolerated structural divergences.

mod common;

use common::*;
use ir::IrError;
use serde_json::{json, Value};

const SOURCE: &str = "contract A { function f() public { } }";

/// The same AST with every node id shifted, as a second compiler run
/// would number it.
fn fixture(shift: i64, with_documentation: bool) -> Value {
    let s = SOURCE;
    let documentation = if with_documentation {
        json!({
            "id": 60 + shift,
            "src": "0:0:0",
            "nodeType": "StructuredDocumentation",
            "text": "@notice docs"
        })
    } else {
        Value::Null
    };

    let mut function = json!({
        "id": 9 + shift,
        "src": src_of(s, "function f() public { }", 0),
        "nodeType": "FunctionDefinition",
        "name": "f",
        "nameLocation": src_in(s, "f()", "f", 0),
        "implemented": true,
        "kind": "function",
        "modifiers": [],
        "parameters": empty_parameter_list(3 + shift, src_of(s, "()", 0)),
        "returnParameters": empty_parameter_list(4 + shift, format!("{}:0:0", s.len() - 1)),
        "scope": 10 + shift,
        "stateMutability": "nonpayable",
        "virtual": false,
        "visibility": "public",
        "body": {
            "id": 8 + shift,
            "src": src_of(s, "{ }", 0),
            "nodeType": "Block",
            "statements": []
        }
    });
    if !documentation.is_null() {
        function["documentation"] = documentation;
    }

    json!({
        "id": 100 + shift,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Multi.sol",
        "exportedSymbols": { "A": [10 + shift] },
        "nodes": [{
            "id": 10 + shift,
            "src": whole(s, 0),
            "nodeType": "ContractDefinition",
            "name": "A",
            "nameLocation": src_in(s, "contract A", "A", 0),
            "abstract": false,
            "baseContracts": [],
            "contractDependencies": [],
            "contractKind": "contract",
            "linearizedBaseContracts": [10 + shift],
            "scope": 100 + shift,
            "fullyImplemented": true,
            "nodes": [function]
        }]
    })
}

#[test]
fn ids_translate_between_compilation_units() {
    let mut build = ir::Build::new();
    ingest(&mut build, cu(1), &[("Multi.sol", SOURCE, fixture(0, false))]);
    ingest(&mut build, cu(2), &[("Multi.sol", SOURCE, fixture(1000, false))]);
    build.finalize();

    let resolver = build.resolver();
    // Structurally equivalent nodes share their canonical key.
    assert_eq!(
        resolver.node_path_order(10, [1; 32]),
        resolver.node_path_order(1010, [2; 32])
    );
    assert_eq!(
        resolver.node_path_order(9, [1; 32]),
        resolver.node_path_order(1009, [2; 32])
    );
    assert_eq!(resolver.translate_id(9, [1; 32], [2; 32]), 1009);
    assert_eq!(resolver.translate_id(1010, [2; 32], [1; 32]), 10);

    // Both CU id spaces resolve to the single materialized IR node.
    assert_eq!(
        resolver.resolve_node(10, [1; 32]),
        resolver.resolve_node(1010, [2; 32])
    );
}

#[test]
fn structured_documentation_presence_is_tolerated() {
    let mut build = ir::Build::new();
    ingest(&mut build, cu(1), &[("Multi.sol", SOURCE, fixture(0, false))]);
    // The second CU carries a documentation node the first lacked.
    ingest(&mut build, cu(2), &[("Multi.sol", SOURCE, fixture(1000, true))]);
    build.finalize();

    let resolver = build.resolver();
    assert_eq!(resolver.translate_id(9, [1; 32], [2; 32]), 1009);
    assert_eq!(resolver.translate_id(1008, [2; 32], [1; 32]), 8);
}

#[test]
fn documentation_skipping_works_in_both_directions() {
    let mut build = ir::Build::new();
    ingest(&mut build, cu(1), &[("Multi.sol", SOURCE, fixture(0, true))]);
    ingest(&mut build, cu(2), &[("Multi.sol", SOURCE, fixture(1000, false))]);
    build.finalize();

    let resolver = build.resolver();
    assert_eq!(resolver.translate_id(8, [1; 32], [2; 32]), 1008);
}

#[test]
fn real_structural_drift_is_fatal() {
    let drifted = {
        let s = "pragma solidity ^0.8.0; contract A { function f() public { } }";
        json!({
            "id": 1100,
            "src": whole(s, 0),
            "nodeType": "SourceUnit",
            "absolutePath": "Multi.sol",
            "exportedSymbols": { "A": [1010] },
            "nodes": [
                {
                    "id": 1001,
                    "src": src_of(s, "pragma solidity ^0.8.0;", 0),
                    "nodeType": "PragmaDirective",
                    "literals": ["solidity", "^", "0.8", ".0"]
                },
                fixture(1000, false)["nodes"][0].clone()
            ]
        })
    };

    let mut build = ir::Build::new();
    ingest(&mut build, cu(1), &[("Multi.sol", SOURCE, fixture(0, false))]);

    let mut sources = std::collections::BTreeMap::new();
    sources.insert(
        "Multi.sol".to_string(),
        ir::SourceInput {
            path: std::path::PathBuf::from("/project/Multi.sol"),
            content: SOURCE.as_bytes().to_vec(),
        },
    );
    let output: ast::SolcOutput = serde_json::from_value(json!({
        "sources": { "Multi.sol": { "id": 0, "ast": drifted } },
        "contracts": {}
    }))
    .unwrap();

    let error = build.ingest_output(&cu(3), &output, &sources).unwrap_err();
    assert!(matches!(error, IrError::StructuralDrift { .. }), "{error}");
}
