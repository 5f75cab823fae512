//! Implementations of the CLI subcommands.

use anyhow::{bail, Result};
use ir::{Build, NodeId, NodeKind};

use crate::args::{CfgArgs, CfgFormat, InspectArgs, RefsArgs};
use crate::load::load_build;

pub fn print_inspect(args: InspectArgs) -> Result<()> {
    let build = load_build(&args.common.outputs, &args.common.root)?;

    for file in build.file_ids() {
        let source_file = build.file(file);
        let root = build.source_unit(file);
        println!("{}", source_file.path.display());

        for &child in build.children(root) {
            match &build.node(child).kind {
                NodeKind::ContractDefinition(contract) => {
                    println!("  {:?} {}", contract.kind, contract.decl.name);
                    for &function in &contract.functions {
                        if let NodeKind::FunctionDefinition(f) = &build.node(function).kind {
                            let references = build.references(function).len();
                            println!(
                                "    function {} ({} references)",
                                display_name(&f.decl.name, f.kind),
                                references
                            );
                        }
                    }
                    for &variable in &contract.declared_variables {
                        if let Some(name) = build.declaration_name(variable) {
                            let references = build.references(variable).len();
                            println!("    variable {name} ({references} references)");
                        }
                    }
                }
                NodeKind::FunctionDefinition(function) => {
                    println!("  free function {}", function.decl.name);
                }
                _ => {}
            }
        }

        if args.tree {
            print_tree(&build, root);
        }
    }
    Ok(())
}

fn display_name(name: &str, kind: ast::FunctionKind) -> String {
    if name.is_empty() {
        format!("{kind:?}").to_lowercase()
    } else {
        name.to_string()
    }
}

fn print_tree(build: &Build, root: NodeId) {
    for id in build.descendants(root) {
        let node = build.node(id);
        let indent = "  ".repeat(node.depth as usize + 1);
        println!(
            "{indent}{} [{}, {})",
            node.kind.name(),
            node.location.0,
            node.location.1
        );
    }
}

pub fn print_references(args: RefsArgs) -> Result<()> {
    let build = load_build(&args.common.outputs, &args.common.root)?;

    let mut found = false;
    for file in build.file_ids() {
        for id in build.descendants(build.source_unit(file)) {
            if build.declaration_name(id) != Some(args.name.as_str()) {
                continue;
            }
            found = true;
            let (line, column) = build.position(file, build.node(id).location.0);
            println!(
                "{} declared at {}:{}:{}",
                args.name,
                build.file(file).path.display(),
                line,
                column
            );
            for site in build.references(id) {
                let node = site.node();
                let (line, column) = build.position(node.file, build.node(node).location.0);
                println!(
                    "  referenced from {}:{}:{}",
                    build.file(node.file).path.display(),
                    line,
                    column
                );
            }
        }
    }
    if !found {
        bail!("no declaration named {:?}", args.name);
    }
    Ok(())
}

pub fn print_cfg(args: CfgArgs) -> Result<()> {
    let build = load_build(&args.common.outputs, &args.common.root)?;

    let (contract_name, function_name) = match args.function.split_once('.') {
        Some((contract, function)) => (Some(contract), function),
        None => (None, args.function.as_str()),
    };

    let Some(function) = find_function(&build, contract_name, function_name) else {
        bail!("no function named {:?}", args.function);
    };

    let cfg = build.cfg_of(function)?;
    match args.format {
        CfgFormat::Dot => println!("{}", cfg.to_dot(&build)),
        CfgFormat::Mermaid => println!("{}", cfg.to_mermaid()),
    }
    Ok(())
}

fn find_function(
    build: &Build,
    contract_name: Option<&str>,
    function_name: &str,
) -> Option<NodeId> {
    let matches_contract = |id: NodeId| -> bool {
        let Some(wanted) = contract_name else {
            return true;
        };
        let mut current = build.node(id).parent;
        while let Some(parent) = current {
            if let NodeKind::ContractDefinition(contract) = &build.node(parent).kind {
                return contract.decl.name == wanted;
            }
            current = build.node(parent).parent;
        }
        false
    };

    for file in build.file_ids() {
        for id in build.descendants(build.source_unit(file)) {
            let is_callable = matches!(
                build.node(id).kind,
                NodeKind::FunctionDefinition(_) | NodeKind::ModifierDefinition(_)
            );
            if !is_callable {
                continue;
            }
            if build.declaration_name(id) == Some(function_name) && matches_contract(id) {
                return Some(id);
            }
        }
    }
    None
}
