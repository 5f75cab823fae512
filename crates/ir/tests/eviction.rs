//! File eviction: destroy actions tear down cross-file edges exactly
//! once, and re-ingesting the same CU restores identical state.

mod common;

use std::path::PathBuf;

use common::*;
use ir::{IrError, RefSite};
use serde_json::{json, Value};

const LIB_SOURCE: &str = "function helper() pure returns (uint) { }";
const APP_SOURCE: &str = "import { helper } from \"./Lib.sol\";";

fn lib_fixture() -> Value {
    let s = LIB_SOURCE;
    json!({
        "id": 100,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Lib.sol",
        "exportedSymbols": { "helper": [10] },
        "nodes": [{
            "id": 10,
            "src": src_of(s, "function helper() pure returns (uint) { }", 0),
            "nodeType": "FunctionDefinition",
            "name": "helper",
            "nameLocation": src_of(s, "helper", 0),
            "implemented": true,
            "kind": "freeFunction",
            "modifiers": [],
            "parameters": empty_parameter_list(1, src_of(s, "()", 0)),
            "returnParameters": {
                "id": 3,
                "src": src_of(s, "(uint)", 0),
                "nodeType": "ParameterList",
                "parameters": [{
                    "id": 2,
                    "src": src_in(s, "(uint)", "uint", 0),
                    "nodeType": "VariableDeclaration",
                    "name": "",
                    "constant": false,
                    "scope": 10,
                    "stateVariable": false,
                    "storageLocation": "default",
                    "typeDescriptions": type_descriptions("t_uint256", "uint256"),
                    "visibility": "internal",
                    "typeName": {
                        "id": 4,
                        "src": src_in(s, "(uint)", "uint", 0),
                        "nodeType": "ElementaryTypeName",
                        "name": "uint",
                        "typeDescriptions": type_descriptions("t_uint256", "uint256")
                    }
                }]
            },
            "scope": 100,
            "stateMutability": "pure",
            "virtual": false,
            "visibility": "internal",
            "body": {
                "id": 9,
                "src": src_of(s, "{ }", 0),
                "nodeType": "Block",
                "statements": []
            }
        }]
    })
}

fn app_fixture() -> Value {
    let s = APP_SOURCE;
    json!({
        "id": 300,
        "src": whole(s, 1),
        "nodeType": "SourceUnit",
        "absolutePath": "App.sol",
        "exportedSymbols": {},
        "nodes": [{
            "id": 202,
            "src": src_of(s, "import { helper } from \"./Lib.sol\"", 1),
            "nodeType": "ImportDirective",
            "absolutePath": "Lib.sol",
            "file": "./Lib.sol",
            "scope": 300,
            "sourceUnit": 100,
            "unitAlias": "",
            "symbolAliases": [{
                "foreign": {
                    "id": 201,
                    "src": src_of(s, "helper", 1),
                    "nodeType": "Identifier",
                    "name": "helper",
                    "overloadedDeclarations": [],
                    "typeDescriptions": {}
                },
                "local": "helper"
            }]
        }]
    })
}

fn units() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        ("App.sol", APP_SOURCE, app_fixture()),
        ("Lib.sol", LIB_SOURCE, lib_fixture()),
    ]
}

#[test]
fn eviction_detaches_cross_file_references() {
    let mut build = ir::Build::new();
    ingest(&mut build, cu(1), &units());
    build.finalize();

    let lib_root = build.source_unit(build.file_by_source_unit_name("Lib.sol").unwrap());
    let helper = find_declaration(&build, lib_root, "FunctionDefinition", "helper");
    assert_eq!(build.references(helper).len(), 1);

    build.evict(&PathBuf::from("/project/App.sol")).unwrap();
    assert!(build.references(helper).is_empty());
    assert!(build.file_by_source_unit_name("App.sol").is_none());

    // A second eviction of the same file is an error, not a repeat of
    // the destroy actions.
    let error = build.evict(&PathBuf::from("/project/App.sol")).unwrap_err();
    assert!(matches!(error, IrError::MissingFile(_)));
}

#[test]
fn reingest_after_eviction_restores_the_same_state() {
    let mut build = ir::Build::new();
    ingest(&mut build, cu(1), &units());
    build.finalize();

    let lib_root = build.source_unit(build.file_by_source_unit_name("Lib.sol").unwrap());
    let helper = find_declaration(&build, lib_root, "FunctionDefinition", "helper");
    let before: Vec<RefSite> = build.references(helper).iter().copied().collect();

    build.evict(&PathBuf::from("/project/App.sol")).unwrap();
    ingest(&mut build, cu(1), &units());
    build.finalize();

    let after: Vec<RefSite> = build.references(helper).iter().copied().collect();
    assert_eq!(before, after);

    let app_file = build.file_by_source_unit_name("App.sol").unwrap();
    let app_root = build.source_unit(app_file);
    let import = find_kind(&build, app_root, "ImportDirective");
    let foreign = match &build.node(import).kind {
        ir::NodeKind::ImportDirective(directive) => directive.symbol_aliases[0].foreign,
        _ => unreachable!(),
    };
    match build.referenced_declaration(foreign) {
        Some(ir::ReferencedDeclaration::Declaration(declaration)) => {
            assert_eq!(declaration, helper);
        }
        other => panic!("unexpected resolution {other:?}"),
    }
}
