use serde_json::json;

use crate::nodes::*;
use crate::walk::Walk;

fn function_fixture() -> serde_json::Value {
    json!({
        "id": 10,
        "src": "17:60:0",
        "nodeType": "FunctionDefinition",
        "name": "f",
        "nameLocation": "26:1:0",
        "implemented": true,
        "kind": "function",
        "modifiers": [],
        "parameters": {
            "id": 5,
            "src": "27:2:0",
            "nodeType": "ParameterList",
            "parameters": []
        },
        "returnParameters": {
            "id": 6,
            "src": "37:0:0",
            "nodeType": "ParameterList",
            "parameters": []
        },
        "scope": 11,
        "stateMutability": "nonpayable",
        "virtual": false,
        "visibility": "public",
        "body": {
            "id": 9,
            "src": "37:40:0",
            "nodeType": "Block",
            "statements": []
        }
    })
}

#[test]
fn decodes_function_definition() {
    let func: SolcFunctionDefinition = serde_json::from_value(function_fixture()).unwrap();
    assert_eq!(func.name, "f");
    assert_eq!(func.kind, crate::enums::FunctionKind::Function);
    assert!(func.body.is_some());
    assert_eq!(func.src.offsets(), (17, 77));
    assert_eq!(func.name_location.unwrap().offsets(), (26, 27));
}

#[test]
fn rejects_unknown_fields() {
    let mut fixture = function_fixture();
    fixture["somethingNew"] = json!(true);
    let err = serde_json::from_value::<SolcFunctionDefinition>(fixture).unwrap_err();
    assert!(err.to_string().contains("somethingNew"), "{err}");
}

#[test]
fn rejects_unknown_node_type_in_union() {
    let fixture = json!({
        "id": 1,
        "src": "0:5:0",
        "nodeType": "FancyNewStatement"
    });
    assert!(serde_json::from_value::<SolcStatement>(fixture).is_err());
}

#[test]
fn decodes_statement_union_by_node_type() {
    let fixture = json!({
        "id": 3,
        "src": "40:6:0",
        "nodeType": "Break"
    });
    let statement: SolcStatement = serde_json::from_value(fixture).unwrap();
    assert!(matches!(statement, SolcStatement::Break(_)));
}

#[test]
fn decodes_documentation_in_both_shapes() {
    let raw: SolcDocumentation = serde_json::from_value(json!("a free-form note")).unwrap();
    assert!(matches!(raw, SolcDocumentation::Raw(_)));

    let structured: SolcDocumentation = serde_json::from_value(json!({
        "id": 2,
        "src": "0:16:0",
        "nodeType": "StructuredDocumentation",
        "text": "@notice hi"
    }))
    .unwrap();
    assert!(matches!(structured, SolcDocumentation::Structured(_)));
}

#[test]
fn decodes_yul_case_value_variants() {
    let default: SolcYulCaseValue = serde_json::from_value(json!("default")).unwrap();
    assert!(matches!(default, SolcYulCaseValue::Default(ref s) if s == "default"));

    let literal: SolcYulCaseValue = serde_json::from_value(json!({
        "src": "10:1:0",
        "nodeType": "YulLiteral",
        "kind": "number",
        "type": "",
        "value": "1"
    }))
    .unwrap();
    assert!(matches!(literal, SolcYulCaseValue::Literal(_)));
}

#[test]
fn expression_flags_default_to_false() {
    // solc <=0.7.2 omitted isConstant/isLValue/isPure when false.
    let literal: SolcLiteral = serde_json::from_value(json!({
        "id": 4,
        "src": "50:1:0",
        "nodeType": "Literal",
        "lValueRequested": false,
        "typeDescriptions": {
            "typeIdentifier": "t_rational_1_by_1",
            "typeString": "int_const 1"
        },
        "hexValue": "31",
        "kind": "number",
        "value": "1"
    }))
    .unwrap();
    assert!(!literal.is_constant && !literal.is_l_value && !literal.is_pure);
}

#[test]
fn walk_visits_nodes_in_pre_order() {
    let func: SolcFunctionDefinition = serde_json::from_value(function_fixture()).unwrap();
    let mut seen = Vec::new();
    func.walk(&mut |id, kind| seen.push((id, kind)));
    assert_eq!(
        seen,
        vec![
            (10, "FunctionDefinition"),
            (5, "ParameterList"),
            (6, "ParameterList"),
            (9, "Block"),
        ]
    );
}

#[test]
fn walk_skips_yul_subtree() {
    let assembly: SolcInlineAssembly = serde_json::from_value(json!({
        "id": 20,
        "src": "100:40:0",
        "nodeType": "InlineAssembly",
        "AST": {
            "src": "109:30:0",
            "nodeType": "YulBlock",
            "statements": []
        },
        "evmVersion": "shanghai",
        "externalReferences": []
    }))
    .unwrap();
    let mut seen = Vec::new();
    assembly.walk(&mut |id, kind| seen.push((id, kind)));
    assert_eq!(seen, vec![(20, "InlineAssembly")]);
}
