//! Overloaded import symbol aliases resolve to the full overload set.

mod common;

use common::*;
use ir::{NodeKind, ReferencedDeclaration};
use serde_json::{json, Value};

const MATH_SOURCE: &str =
    "function max(uint a, uint b) pure returns (uint) { } function max(int a, int b) pure returns (int) { }";
const APP_SOURCE: &str = "import { max } from \"./Math.sol\";";

fn parameter(s: &str, id: i64, scope: i64, type_name: &str, name: &str, nth: usize) -> Value {
    let descriptions = type_descriptions(
        if type_name == "uint" { "t_uint256" } else { "t_int256" },
        if type_name == "uint" { "uint256" } else { "int256" },
    );
    let declaration = format!("{type_name} {name}");
    let declaration_at = offset_nth(s, &declaration, nth);
    json!({
        "id": id,
        "src": src_nth(s, &declaration, nth, 0),
        "nodeType": "VariableDeclaration",
        "name": name,
        "nameLocation": format!("{}:{}:0", declaration_at + type_name.len() + 1, name.len()),
        "constant": false,
        "scope": scope,
        "stateVariable": false,
        "storageLocation": "default",
        "typeDescriptions": descriptions,
        "visibility": "internal",
        "mutability": "mutable",
        "typeName": {
            "id": id + 100,
            "src": format!("{}:{}:0", declaration_at, type_name.len()),
            "nodeType": "ElementaryTypeName",
            "name": type_name,
            "typeDescriptions": descriptions
        }
    })
}

fn unnamed_return(s: &str, id: i64, scope: i64, type_name: &str, nth: usize) -> Value {
    let descriptions = type_descriptions(
        if type_name == "uint" { "t_uint256" } else { "t_int256" },
        if type_name == "uint" { "uint256" } else { "int256" },
    );
    json!({
        "id": id,
        "src": src_nth(s, &format!("({type_name})"), nth, 0),
        "nodeType": "VariableDeclaration",
        "name": "",
        "constant": false,
        "scope": scope,
        "stateVariable": false,
        "storageLocation": "default",
        "typeDescriptions": descriptions,
        "visibility": "internal",
        "mutability": "mutable",
        "typeName": {
            "id": id + 100,
            "src": src_nth(s, &format!("({type_name})"), nth, 0),
            "nodeType": "ElementaryTypeName",
            "name": type_name,
            "typeDescriptions": descriptions
        }
    })
}

fn math_fixture() -> Value {
    let s = MATH_SOURCE;
    let max_uint = json!({
        "id": 10,
        "src": src_of(s, "function max(uint a, uint b) pure returns (uint) { }", 0),
        "nodeType": "FunctionDefinition",
        "name": "max",
        "nameLocation": src_nth(s, "max", 0, 0),
        "implemented": true,
        "kind": "freeFunction",
        "modifiers": [],
        "parameters": {
            "id": 3,
            "src": src_of(s, "(uint a, uint b)", 0),
            "nodeType": "ParameterList",
            "parameters": [
                parameter(s, 1, 10, "uint", "a", 0),
                parameter(s, 2, 10, "uint", "b", 0)
            ]
        },
        "returnParameters": {
            "id": 5,
            "src": src_nth(s, "(uint)", 0, 0),
            "nodeType": "ParameterList",
            "parameters": [unnamed_return(s, 4, 10, "uint", 0)]
        },
        "scope": 100,
        "stateMutability": "pure",
        "virtual": false,
        "visibility": "internal",
        "body": {
            "id": 9,
            "src": src_nth(s, "{ }", 0, 0),
            "nodeType": "Block",
            "statements": []
        }
    });
    let max_int = json!({
        "id": 20,
        "src": src_of(s, "function max(int a, int b) pure returns (int) { }", 0),
        "nodeType": "FunctionDefinition",
        "name": "max",
        "nameLocation": src_nth(s, "max", 1, 0),
        "implemented": true,
        "kind": "freeFunction",
        "modifiers": [],
        "parameters": {
            "id": 13,
            "src": src_of(s, "(int a, int b)", 0),
            "nodeType": "ParameterList",
            "parameters": [
                // `int a` also occurs inside `uint a`; skip that one.
                parameter(s, 11, 20, "int", "a", 1),
                parameter(s, 12, 20, "int", "b", 1)
            ]
        },
        "returnParameters": {
            "id": 15,
            "src": src_nth(s, "(int)", 0, 0),
            "nodeType": "ParameterList",
            "parameters": [unnamed_return(s, 14, 20, "int", 0)]
        },
        "scope": 100,
        "stateMutability": "pure",
        "virtual": false,
        "visibility": "internal",
        "body": {
            "id": 19,
            "src": src_nth(s, "{ }", 1, 0),
            "nodeType": "Block",
            "statements": []
        }
    });

    json!({
        "id": 100,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Math.sol",
        "exportedSymbols": { "max": [10, 20] },
        "nodes": [max_uint, max_int]
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
            "src": src_of(s, "import { max } from \"./Math.sol\"", 1),
            "nodeType": "ImportDirective",
            "absolutePath": "Math.sol",
            "file": "./Math.sol",
            "scope": 300,
            "sourceUnit": 100,
            "unitAlias": "",
            "symbolAliases": [{
                "foreign": {
                    "id": 201,
                    "src": src_of(s, "max", 1),
                    "nodeType": "Identifier",
                    "name": "max",
                    "overloadedDeclarations": [],
                    "typeDescriptions": {}
                },
                "local": "max"
            }]
        }]
    })
}

#[test]
fn import_alias_collects_the_overload_set() {
    let build = build_from(vec![
        ("App.sol", APP_SOURCE, app_fixture()),
        ("Math.sol", MATH_SOURCE, math_fixture()),
    ]);

    let math_root = build.source_unit(build.file_by_source_unit_name("Math.sol").unwrap());
    let app_root = build.source_unit(build.file_by_source_unit_name("App.sol").unwrap());

    let max_uint = build
        .descendants(math_root)
        .into_iter()
        .find(|&id| {
            build.declaration_name(id) == Some("max")
                && build.node(id).kind.name() == "FunctionDefinition"
        })
        .unwrap();
    let both: Vec<_> = build
        .descendants(math_root)
        .into_iter()
        .filter(|&id| build.declaration_name(id) == Some("max"))
        .collect();
    assert_eq!(both.len(), 2);

    let import = find_kind(&build, app_root, "ImportDirective");
    let (foreign, unit_alias) = match &build.node(import).kind {
        NodeKind::ImportDirective(directive) => (
            directive.symbol_aliases[0].foreign,
            directive.unit_alias.clone(),
        ),
        _ => unreachable!(),
    };
    assert_eq!(unit_alias, None);

    match build.referenced_declaration(foreign) {
        Some(ReferencedDeclaration::Overloaded(functions)) => {
            assert_eq!(functions.len(), 2);
            assert!(functions.contains(&max_uint));
            assert!(functions.contains(&both[1]));
        }
        other => panic!("expected the overload set, got {other:?}"),
    }

    // Both overloads carry the identifier as a reference.
    for &function in &both {
        assert!(build
            .references(function)
            .iter()
            .any(|site| matches!(site, ir::RefSite::Identifier(node) if *node == foreign)));
    }
}
