//! Event and error selectors computed from signatures when the compiler
//! does not report them, and mutability derivation for old ASTs.

mod common;

use ast::Mutability;
use common::*;
use serde_json::{json, Value};

const SOURCE: &str = "contract A { event Transfer(address a, address b, uint256 c); } contract B { error Transfer(address a, address b, uint256 c); uint constant Z = 1; }";

/// Canonical ERC-20 `Transfer(address,address,uint256)` topic.
const TRANSFER_TOPIC: [u8; 32] = [
    0xdd, 0xf2, 0x52, 0xad, 0x1b, 0xe2, 0xc8, 0x9b, 0x69, 0xc2, 0xb0, 0x68, 0xfc, 0x37, 0x8d,
    0xaa, 0x95, 0x2b, 0xa7, 0xf1, 0x63, 0xc4, 0xa1, 0x16, 0x28, 0xf5, 0x5a, 0x4d, 0xf5, 0x23,
    0xb3, 0xef,
];

fn parameter(id: i64, scope: i64, type_token: &str, name: &str, nth: usize) -> Value {
    let s = SOURCE;
    let (identifier, readable) = match type_token {
        "address" => ("t_address", "address"),
        _ => ("t_uint256", "uint256"),
    };
    let declaration = format!("{type_token} {name}");
    json!({
        "id": id,
        "src": src_nth(s, &declaration, nth, 0),
        "nodeType": "VariableDeclaration",
        "name": name,
        "nameLocation": format!("{}:{}:0", offset_nth(s, &declaration, nth) + type_token.len() + 1, name.len()),
        "constant": false,
        "scope": scope,
        "stateVariable": false,
        "storageLocation": "default",
        "typeDescriptions": type_descriptions(identifier, readable),
        "visibility": "internal",
        "typeName": {
            "id": id + 100,
            "src": format!("{}:{}:0", offset_nth(s, &declaration, nth), type_token.len()),
            "nodeType": "ElementaryTypeName",
            "name": type_token,
            "typeDescriptions": type_descriptions(identifier, readable)
        }
    })
}

fn fixture() -> Value {
    let s = SOURCE;
    let event = json!({
        "id": 10,
        "src": src_of(s, "event Transfer(address a, address b, uint256 c)", 0),
        "nodeType": "EventDefinition",
        "name": "Transfer",
        "nameLocation": src_nth(s, "Transfer", 0, 0),
        "anonymous": false,
        "parameters": {
            "id": 9,
            "src": src_nth(s, "(address a, address b, uint256 c)", 0, 0),
            "nodeType": "ParameterList",
            "parameters": [
                parameter(6, 10, "address", "a", 0),
                parameter(7, 10, "address", "b", 0),
                parameter(8, 10, "uint256", "c", 0)
            ]
        }
    });

    let error = json!({
        "id": 20,
        "src": src_of(s, "error Transfer(address a, address b, uint256 c)", 0),
        "nodeType": "ErrorDefinition",
        "name": "Transfer",
        "nameLocation": src_nth(s, "Transfer", 1, 0),
        "parameters": {
            "id": 19,
            "src": src_nth(s, "(address a, address b, uint256 c)", 1, 0),
            "nodeType": "ParameterList",
            "parameters": [
                parameter(16, 20, "address", "a", 1),
                parameter(17, 20, "address", "b", 1),
                parameter(18, 20, "uint256", "c", 1)
            ]
        }
    });

    // `mutability` left out, as solc 0.6.5 does for the constant bug.
    let constant = json!({
        "id": 25,
        "src": src_of(s, "uint constant Z = 1", 0),
        "nodeType": "VariableDeclaration",
        "name": "Z",
        "nameLocation": src_in(s, "Z =", "Z", 0),
        "constant": true,
        "scope": 30,
        "stateVariable": true,
        "storageLocation": "default",
        "typeDescriptions": type_descriptions("t_uint256", "uint256"),
        "visibility": "internal",
        "typeName": {
            "id": 24,
            "src": src_in(s, "uint constant", "uint", 0),
            "nodeType": "ElementaryTypeName",
            "name": "uint",
            "typeDescriptions": type_descriptions("t_uint256", "uint256")
        },
        "value": {
            "id": 26,
            "src": src_in(s, "= 1;", "1", 0),
            "nodeType": "Literal",
            "lValueRequested": false,
            "hexValue": "31",
            "kind": "number",
            "value": "1",
            "typeDescriptions": type_descriptions("t_rational_1_by_1", "int_const 1")
        }
    });

    let contract = |id: i64, name: &str, span: &str, members: Value| {
        json!({
            "id": id,
            "src": src_of(s, span, 0),
            "nodeType": "ContractDefinition",
            "name": name,
            "nameLocation": src_in(s, &format!("contract {name}"), name, 0),
            "abstract": false,
            "baseContracts": [],
            "contractDependencies": [],
            "contractKind": "contract",
            "linearizedBaseContracts": [id],
            "scope": 100,
            "fullyImplemented": true,
            "nodes": members
        })
    };

    json!({
        "id": 100,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Selectors.sol",
        "exportedSymbols": { "A": [5], "B": [30] },
        "nodes": [
            contract(5, "A", "contract A { event Transfer(address a, address b, uint256 c); }", json!([event])),
            contract(
                30,
                "B",
                "contract B { error Transfer(address a, address b, uint256 c); uint constant Z = 1; }",
                json!([error, constant])
            ),
        ]
    })
}

#[test]
fn selectors_are_computed_from_signatures() {
    let build = build_from(vec![("Selectors.sol", SOURCE, fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Selectors.sol").unwrap());

    let event = find_kind(&build, root, "EventDefinition");
    assert_eq!(build.event_selector(event), TRANSFER_TOPIC);

    // An error selector is the first four bytes of the same digest.
    let error = find_kind(&build, root, "ErrorDefinition");
    assert_eq!(build.error_selector(error)[..], TRANSFER_TOPIC[..4]);
}

#[test]
fn declared_selectors_win_over_computation() {
    let mut ast_value = fixture();
    ast_value["nodes"][0]["nodes"][0]["eventSelector"] =
        json!("00000000000000000000000000000000000000000000000000000000000000ff");
    let build = build_from(vec![("Selectors.sol", SOURCE, ast_value)]);
    let root = build.source_unit(build.file_by_source_unit_name("Selectors.sol").unwrap());

    let event = find_kind(&build, root, "EventDefinition");
    let mut expected = [0u8; 32];
    expected[31] = 0xff;
    assert_eq!(build.event_selector(event), expected);
}

#[test]
fn missing_mutability_derives_from_the_source() {
    let build = build_from(vec![("Selectors.sol", SOURCE, fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Selectors.sol").unwrap());

    let constant = find_declaration(&build, root, "VariableDeclaration", "Z");
    assert_eq!(build.variable_mutability(constant), Mutability::Constant);
}
