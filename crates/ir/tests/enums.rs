//! Enum value member accesses under pre-0.8.2 ASTs, which lack both
//! `referencedDeclaration` on the access and `nameLocation` on
//! declarations.

mod common;

use common::*;
use ir::{NodeKind, ReferencedDeclaration};
use serde_json::{json, Value};

const SOURCE: &str = "contract K { enum E { A, B } function f() public pure { E x = E.A; } }";

fn fixture() -> Value {
    let s = SOURCE;
    let enum_type = type_descriptions("t_enum$_E_$3", "enum K.E");

    let enum_definition = json!({
        "id": 3,
        "src": src_of(s, "enum E { A, B }", 0),
        "nodeType": "EnumDefinition",
        "name": "E",
        "canonicalName": "K.E",
        "members": [
            {
                "id": 1,
                "src": src_in(s, "A,", "A", 0),
                "nodeType": "EnumValue",
                "name": "A"
            },
            {
                "id": 2,
                "src": src_in(s, "B }", "B", 0),
                "nodeType": "EnumValue",
                "name": "B"
            }
        ]
    });

    let declaration_statement = json!({
        "id": 7,
        "src": src_of(s, "E x = E.A", 0),
        "nodeType": "VariableDeclarationStatement",
        "assignments": [5],
        "declarations": [{
            "id": 5,
            "src": src_of(s, "E x", 0),
            "nodeType": "VariableDeclaration",
            "name": "x",
            "constant": false,
            "scope": 9,
            "stateVariable": false,
            "storageLocation": "default",
            "typeDescriptions": enum_type,
            "visibility": "internal",
            "typeName": {
                "id": 4,
                "src": src_in(s, "E x", "E", 0),
                "nodeType": "UserDefinedTypeName",
                "typeDescriptions": enum_type,
                "referencedDeclaration": 3,
                "pathNode": {
                    "id": 40,
                    "src": src_in(s, "E x", "E", 0),
                    "nodeType": "IdentifierPath",
                    "name": "E",
                    "referencedDeclaration": 3
                }
            }
        }],
        "initialValue": {
            "id": 6,
            "src": src_of(s, "E.A", 0),
            "nodeType": "MemberAccess",
            "lValueRequested": false,
            "memberName": "A",
            "typeDescriptions": enum_type,
            "expression": {
                "id": 41,
                "src": src_in(s, "E.A", "E", 0),
                "nodeType": "Identifier",
                "name": "E",
                "overloadedDeclarations": [],
                "referencedDeclaration": 3,
                "typeDescriptions": type_descriptions("t_type$_t_enum$_E_$3_$", "type(enum K.E)")
            }
        }
    });

    json!({
        "id": 100,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Enums.sol",
        "exportedSymbols": { "K": [10] },
        "nodes": [{
            "id": 10,
            "src": whole(s, 0),
            "nodeType": "ContractDefinition",
            "name": "K",
            "abstract": false,
            "baseContracts": [],
            "contractDependencies": [],
            "contractKind": "contract",
            "linearizedBaseContracts": [10],
            "scope": 100,
            "fullyImplemented": true,
            "nodes": [
                enum_definition,
                {
                    "id": 9,
                    "src": src_of(s, "function f() public pure { E x = E.A; }", 0),
                    "nodeType": "FunctionDefinition",
                    "name": "f",
                    "implemented": true,
                    "kind": "function",
                    "modifiers": [],
                    "parameters": empty_parameter_list(11, src_of(s, "()", 0)),
                    "returnParameters": empty_parameter_list(12, format!("{}:0:0", s.len() - 1)),
                    "scope": 10,
                    "stateMutability": "pure",
                    "virtual": false,
                    "visibility": "public",
                    "body": {
                        "id": 8,
                        "src": src_of(s, "{ E x = E.A; }", 0),
                        "nodeType": "Block",
                        "statements": [declaration_statement]
                    }
                }
            ]
        }]
    })
}

#[test]
fn member_access_recovers_the_enum_value() {
    let build = build_from(vec![("Enums.sol", SOURCE, fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Enums.sol").unwrap());

    let value_a = find_declaration(&build, root, "EnumValue", "A");
    let member = find_kind(&build, root, "MemberAccess");

    assert_eq!(
        build.referenced_declaration(member),
        Some(ReferencedDeclaration::Declaration(value_a))
    );
    assert!(build
        .references(value_a)
        .iter()
        .any(|site| matches!(site, ir::RefSite::MemberAccess(node) if *node == member)));

    // `B` stays unreferenced.
    let value_b = find_declaration(&build, root, "EnumValue", "B");
    assert!(build.references(value_b).is_empty());

    // The member sub-range covers just the name after the dot.
    let a_offset = SOURCE.find("E.A").unwrap() + 2;
    assert_eq!(build.member_location(member), (a_offset, a_offset + 1));
}

#[test]
fn name_locations_recover_from_source() {
    let build = build_from(vec![("Enums.sol", SOURCE, fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Enums.sol").unwrap());

    let contract = find_declaration(&build, root, "ContractDefinition", "K");
    let contract_name_at = SOURCE.find('K').unwrap();
    assert_eq!(
        build.name_location(contract),
        (contract_name_at, contract_name_at + 1)
    );

    let enum_definition = find_declaration(&build, root, "EnumDefinition", "E");
    let enum_name_at = SOURCE.find("E {").unwrap();
    assert_eq!(
        build.name_location(enum_definition),
        (enum_name_at, enum_name_at + 1)
    );

    // An enum value's name location is its own byte range.
    let value_a = find_declaration(&build, root, "EnumValue", "A");
    assert_eq!(build.name_location(value_a), build.node(value_a).location);

    // A local variable name is parsed from the end of its declaration.
    let variable = find_declaration(&build, root, "VariableDeclaration", "x");
    let x_at = SOURCE.find("x =").unwrap();
    assert_eq!(build.name_location(variable), (x_at, x_at + 1));

    let function = find_declaration(&build, root, "FunctionDefinition", "f");
    let f_at = SOURCE.find("f()").unwrap();
    assert_eq!(build.name_location(function), (f_at, f_at + 1));
}

#[test]
fn enum_type_name_path_binds_the_enum() {
    let build = build_from(vec![("Enums.sol", SOURCE, fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Enums.sol").unwrap());

    let enum_definition = find_declaration(&build, root, "EnumDefinition", "E");
    let path = find_kind(&build, root, "IdentifierPath");
    let parts = build.identifier_path_parts(path);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "E");

    assert!(build
        .references(enum_definition)
        .iter()
        .any(|site| matches!(site, ir::RefSite::IdentifierPathPart(node, 0) if *node == path)));

    match &build.node(enum_definition).kind {
        NodeKind::EnumDefinition(definition) => {
            assert_eq!(definition.canonical_name, "K.E");
        }
        _ => unreachable!(),
    }
}
