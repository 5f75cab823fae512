//! Control flow graph construction: `require` splitting, try/catch
//! edges and the normalization invariants.

#![recursion_limit = "256"]

mod common;

use common::*;
use ir::TransitionCondition;
use serde_json::{json, Value};

const REQUIRE_SOURCE: &str = "contract C { function f(uint x) public { require(x > 0); x += 1; } }";

fn require_fixture() -> Value {
    let s = REQUIRE_SOURCE;
    let uint256 = type_descriptions("t_uint256", "uint256");

    let parameter_x = json!({
        "id": 2,
        "src": src_of(s, "uint x", 0),
        "nodeType": "VariableDeclaration",
        "name": "x",
        "nameLocation": src_in(s, "x)", "x", 0),
        "constant": false,
        "scope": 9,
        "stateVariable": false,
        "storageLocation": "default",
        "typeDescriptions": uint256,
        "visibility": "internal",
        "mutability": "mutable",
        "typeName": {
            "id": 1,
            "src": src_of(s, "uint", 0),
            "nodeType": "ElementaryTypeName",
            "name": "uint",
            "typeDescriptions": uint256
        }
    });

    let require_call = json!({
        "id": 6,
        "src": src_of(s, "require(x > 0)", 0),
        "nodeType": "FunctionCall",
        "lValueRequested": false,
        "typeDescriptions": type_descriptions("t_tuple$__$", "tuple()"),
        "kind": "functionCall",
        "names": [],
        "tryCall": false,
        "expression": {
            "id": 40,
            "src": src_of(s, "require", 0),
            "nodeType": "Identifier",
            "name": "require",
            "overloadedDeclarations": [],
            "referencedDeclaration": -18,
            "typeDescriptions": type_descriptions(
                "t_function_require_pure$_t_bool_$returns$__$",
                "function (bool) pure"
            )
        },
        "arguments": [{
            "id": 5,
            "src": src_of(s, "x > 0", 0),
            "nodeType": "BinaryOperation",
            "lValueRequested": false,
            "operator": ">",
            "typeDescriptions": type_descriptions("t_bool", "bool"),
            "commonType": uint256,
            "leftExpression": {
                "id": 41,
                "src": src_in(s, "x >", "x", 0),
                "nodeType": "Identifier",
                "name": "x",
                "overloadedDeclarations": [],
                "referencedDeclaration": 2,
                "typeDescriptions": uint256
            },
            "rightExpression": {
                "id": 42,
                "src": src_in(s, "0)", "0", 0),
                "nodeType": "Literal",
                "lValueRequested": false,
                "hexValue": "30",
                "kind": "number",
                "value": "0",
                "typeDescriptions": type_descriptions("t_rational_0_by_1", "int_const 0")
            }
        }]
    });

    let increment = json!({
        "id": 43,
        "src": src_of(s, "x += 1", 0),
        "nodeType": "Assignment",
        "lValueRequested": true,
        "operator": "+=",
        "typeDescriptions": uint256,
        "leftHandSide": {
            "id": 45,
            "src": src_in(s, "x +=", "x", 0),
            "nodeType": "Identifier",
            "name": "x",
            "overloadedDeclarations": [],
            "referencedDeclaration": 2,
            "typeDescriptions": uint256
        },
        "rightHandSide": {
            "id": 46,
            "src": src_in(s, "1;", "1", 0),
            "nodeType": "Literal",
            "lValueRequested": false,
            "hexValue": "31",
            "kind": "number",
            "value": "1",
            "typeDescriptions": type_descriptions("t_rational_1_by_1", "int_const 1")
        }
    });

    json!({
        "id": 50,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Require.sol",
        "exportedSymbols": { "C": [10] },
        "nodes": [{
            "id": 10,
            "src": whole(s, 0),
            "nodeType": "ContractDefinition",
            "name": "C",
            "nameLocation": src_in(s, "contract C", "C", 0),
            "abstract": false,
            "baseContracts": [],
            "contractDependencies": [],
            "contractKind": "contract",
            "linearizedBaseContracts": [10],
            "scope": 50,
            "fullyImplemented": true,
            "nodes": [{
                "id": 9,
                "src": src_of(s, "function f(uint x) public { require(x > 0); x += 1; }", 0),
                "nodeType": "FunctionDefinition",
                "name": "f",
                "nameLocation": src_in(s, "f(uint", "f", 0),
                "implemented": true,
                "kind": "function",
                "modifiers": [],
                "parameters": {
                    "id": 3,
                    "src": src_of(s, "(uint x)", 0),
                    "nodeType": "ParameterList",
                    "parameters": [parameter_x]
                },
                "returnParameters": empty_parameter_list(4, format!("{}:0:0", s.find('}').unwrap())),
                "scope": 10,
                "stateMutability": "nonpayable",
                "virtual": false,
                "visibility": "public",
                "body": {
                    "id": 8,
                    "src": src_of(s, "{ require(x > 0); x += 1; }", 0),
                    "nodeType": "Block",
                    "statements": [
                        {
                            "id": 7,
                            "src": src_of(s, "require(x > 0)", 0),
                            "nodeType": "ExpressionStatement",
                            "expression": require_call
                        },
                        {
                            "id": 44,
                            "src": src_of(s, "x += 1", 0),
                            "nodeType": "ExpressionStatement",
                            "expression": increment
                        }
                    ]
                }
            }]
        }]
    })
}

#[test]
fn require_splits_the_block() {
    let build = build_from(vec![("Require.sol", REQUIRE_SOURCE, require_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Require.sol").unwrap());
    let function = find_declaration(&build, root, "FunctionDefinition", "f");

    let cfg = build.cfg_of(function).unwrap();

    let block_count = cfg.blocks().count();
    let end_blocks = [cfg.success_end_block(), cfg.revert_end_block()];
    let non_end = block_count - end_blocks.len();
    assert_eq!(non_end, 3, "start, require block and continuation");

    // The require block conditions both outcomes of its argument.
    let require_statement = find_kind(&build, function, "ExpressionStatement");
    let require_block = cfg.block_of(require_statement).unwrap();
    let mut conditions: Vec<TransitionCondition> = cfg
        .successors(require_block)
        .map(|edge| edge.condition)
        .collect();
    conditions.sort_by_key(|c| format!("{c}"));
    assert_eq!(
        conditions,
        vec![TransitionCondition::IsFalse, TransitionCondition::IsTrue]
    );
    for edge in cfg.successors(require_block) {
        match edge.condition {
            TransitionCondition::IsFalse => assert_eq!(edge.to, cfg.revert_end_block()),
            TransitionCondition::IsTrue => {
                let continuation = cfg.block(edge.to);
                assert_eq!(continuation.statements.len(), 1);
                let always: Vec<_> = cfg.successors(edge.to).collect();
                assert_eq!(always.len(), 1);
                assert_eq!(always[0].condition, TransitionCondition::Always);
                assert_eq!(always[0].to, cfg.success_end_block());
            }
            other => panic!("unexpected edge {other}"),
        }
    }
}

#[test]
fn cfg_invariants_hold() {
    let build = build_from(vec![("Require.sol", REQUIRE_SOURCE, require_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Require.sol").unwrap());
    let function = find_declaration(&build, root, "FunctionDefinition", "f");
    let cfg = build.cfg_of(function).unwrap();

    assert!(cfg.block(cfg.start_block()).statements.is_empty());
    assert!(cfg.block(cfg.success_end_block()).statements.is_empty());
    assert!(cfg.block(cfg.revert_end_block()).statements.is_empty());
    assert!(cfg
        .edges()
        .iter()
        .all(|edge| edge.condition != TransitionCondition::Never));

    // Every block reachable from the start reaches an end block.
    let reaches = |from, to| {
        from == to
            || cfg.edges().iter().any(|e| e.from == from && e.to == to)
            || {
                // crude transitive closure over the small graph
                let mut seen = vec![from];
                let mut i = 0;
                while i < seen.len() {
                    for edge in cfg.edges() {
                        if edge.from == seen[i] && !seen.contains(&edge.to) {
                            seen.push(edge.to);
                        }
                    }
                    i += 1;
                }
                seen.contains(&to)
            }
    };
    for block in cfg.blocks() {
        if reaches(cfg.start_block(), block) {
            assert!(
                reaches(block, cfg.success_end_block()) || reaches(block, cfg.revert_end_block()),
                "block cannot reach an end block"
            );
        }
    }
}

#[test]
fn statement_reachability_follows_block_order() {
    let build = build_from(vec![("Require.sol", REQUIRE_SOURCE, require_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Require.sol").unwrap());
    let function = find_declaration(&build, root, "FunctionDefinition", "f");
    let cfg = build.cfg_of(function).unwrap();

    let statements: Vec<_> = build
        .descendants(function)
        .into_iter()
        .filter(|&id| build.node(id).kind.name() == "ExpressionStatement")
        .collect();
    let [require_statement, increment] = statements.as_slice() else {
        panic!("expected two expression statements");
    };
    assert!(cfg.is_reachable(*require_statement, *increment));
    assert!(!cfg.is_reachable(*increment, *require_statement));
}

// -- try/catch --------------------------------------------------------------

const TRY_SOURCE: &str = "contract T { function g() public { } function h() public { try this.g() { } catch Error(string memory e) { } catch { } } }";

fn try_fixture() -> Value {
    let s = TRY_SOURCE;

    let external_call = json!({
        "id": 30,
        "src": src_of(s, "this.g()", 0),
        "nodeType": "FunctionCall",
        "lValueRequested": false,
        "typeDescriptions": type_descriptions("t_tuple$__$", "tuple()"),
        "kind": "functionCall",
        "names": [],
        "tryCall": true,
        "arguments": [],
        "expression": {
            "id": 29,
            "src": src_of(s, "this.g", 0),
            "nodeType": "MemberAccess",
            "lValueRequested": false,
            "memberName": "g",
            "referencedDeclaration": 11,
            "typeDescriptions": type_descriptions(
                "t_function_external_nonpayable$__$returns$__$",
                "function () external"
            ),
            "expression": {
                "id": 28,
                "src": src_of(s, "this", 0),
                "nodeType": "Identifier",
                "name": "this",
                "overloadedDeclarations": [],
                "referencedDeclaration": -28,
                "typeDescriptions": type_descriptions("t_contract$_T_$10", "contract T")
            }
        }
    });

    let error_parameter = json!({
        "id": 33,
        "src": src_of(s, "string memory e", 0),
        "nodeType": "VariableDeclaration",
        "name": "e",
        "nameLocation": src_in(s, "e)", "e", 0),
        "constant": false,
        "scope": 35,
        "stateVariable": false,
        "storageLocation": "memory",
        "typeDescriptions": type_descriptions("t_string_memory_ptr", "string"),
        "visibility": "internal",
        "mutability": "mutable",
        "typeName": {
            "id": 32,
            "src": src_of(s, "string", 0),
            "nodeType": "ElementaryTypeName",
            "name": "string",
            "typeDescriptions": type_descriptions("t_string_storage_ptr", "string")
        }
    });

    let clauses = json!([
        {
            "id": 31,
            "src": src_in(s, "{ } catch Error", "{ }", 0),
            "nodeType": "TryCatchClause",
            "errorName": "",
            "block": {
                "id": 36,
                "src": src_in(s, "{ } catch Error", "{ }", 0),
                "nodeType": "Block",
                "statements": []
            }
        },
        {
            "id": 35,
            "src": src_of(s, "Error(string memory e) { }", 0),
            "nodeType": "TryCatchClause",
            "errorName": "Error",
            "parameters": {
                "id": 34,
                "src": src_of(s, "(string memory e)", 0),
                "nodeType": "ParameterList",
                "parameters": [error_parameter]
            },
            "block": {
                "id": 37,
                "src": src_nth(s, "{ }", 2, 0),
                "nodeType": "Block",
                "statements": []
            }
        },
        {
            "id": 38,
            "src": src_nth(s, "catch { }", 0, 0),
            "nodeType": "TryCatchClause",
            "errorName": "",
            "block": {
                "id": 39,
                "src": src_nth(s, "{ }", 3, 0),
                "nodeType": "Block",
                "statements": []
            }
        }
    ]);

    let function = |id: i64, name: &str, full_source: &str, body_statements: Value, body_src: String| {
        json!({
            "id": id,
            "src": src_of(s, full_source, 0),
            "nodeType": "FunctionDefinition",
            "name": name,
            "nameLocation": src_in(s, full_source, name, 0),
            "implemented": true,
            "kind": "function",
            "modifiers": [],
            "parameters": empty_parameter_list(id * 10, src_nth(s, "()", if name == "g" { 0 } else { 1 }, 0)),
            "returnParameters": empty_parameter_list(id * 10 + 1, format!("{}:0:0", s.len() - 1)),
            "scope": 10,
            "stateMutability": "nonpayable",
            "virtual": false,
            "visibility": "public",
            "body": {
                "id": id * 10 + 2,
                "src": body_src,
                "nodeType": "Block",
                "statements": body_statements
            }
        })
    };

    let try_statement = json!({
        "id": 40,
        "src": src_of(s, "try this.g() { } catch Error(string memory e) { } catch { }", 0),
        "nodeType": "TryStatement",
        "clauses": clauses,
        "externalCall": external_call
    });

    json!({
        "id": 90,
        "src": whole(s, 0),
        "nodeType": "SourceUnit",
        "absolutePath": "Try.sol",
        "exportedSymbols": { "T": [10] },
        "nodes": [{
            "id": 10,
            "src": whole(s, 0),
            "nodeType": "ContractDefinition",
            "name": "T",
            "nameLocation": src_in(s, "contract T", "T", 0),
            "abstract": false,
            "baseContracts": [],
            "contractDependencies": [],
            "contractKind": "contract",
            "linearizedBaseContracts": [10],
            "scope": 90,
            "fullyImplemented": true,
            "nodes": [
                function(11, "g", "function g() public { }", json!([]), src_nth(s, "{ }", 0, 0)),
                function(
                    12,
                    "h",
                    "function h() public { try this.g() { } catch Error(string memory e) { } catch { } }",
                    json!([try_statement]),
                    src_of(s, "{ try this.g() { } catch Error(string memory e) { } catch { } }", 0),
                ),
            ]
        }]
    })
}

#[test]
fn try_statement_edges_carry_try_conditions() {
    let build = build_from(vec![("Try.sol", TRY_SOURCE, try_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Try.sol").unwrap());
    let function = find_declaration(&build, root, "FunctionDefinition", "h");

    let cfg = build.cfg_of(function).unwrap();
    let try_statement = find_kind(&build, function, "TryStatement");
    let try_block = cfg.block_of(try_statement).unwrap();
    assert_eq!(
        cfg.block(try_block).control_statement,
        Some(try_statement),
        "the try statement terminates its block"
    );

    let mut conditions: Vec<TransitionCondition> = cfg
        .successors(try_block)
        .map(|edge| edge.condition)
        .collect();
    conditions.sort_by_key(|c| format!("{c}"));
    assert_eq!(
        conditions,
        vec![
            TransitionCondition::TryFailed,
            TransitionCondition::TryReverted,
            TransitionCondition::TrySucceeded,
        ]
    );
    // No panic clause in the source, so no panicked edge anywhere.
    assert!(cfg
        .edges()
        .iter()
        .all(|edge| edge.condition != TransitionCondition::TryPanicked));
    assert!(cfg
        .edges()
        .iter()
        .all(|edge| edge.condition != TransitionCondition::Never));
}

#[test]
fn member_access_on_this_binds_the_called_function() {
    let build = build_from(vec![("Try.sol", TRY_SOURCE, try_fixture())]);
    let root = build.source_unit(build.file_by_source_unit_name("Try.sol").unwrap());
    let g = find_declaration(&build, root, "FunctionDefinition", "g");
    let member = find_kind(&build, root, "MemberAccess");

    assert_eq!(
        build.referenced_declaration(member),
        Some(ir::ReferencedDeclaration::Declaration(g))
    );
    assert!(build
        .references(g)
        .iter()
        .any(|site| matches!(site, ir::RefSite::MemberAccess(node) if *node == member)));

    // `this` lands in the global symbol reference list.
    let this_sites = build.global_symbol_references(ir::GlobalSymbol::This);
    assert_eq!(this_sites.len(), 1);
}
