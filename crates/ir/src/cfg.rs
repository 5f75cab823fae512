//! Per-function control flow graphs over Solidity statements and inline
//! Yul assembly.
//!
//! Construction threads a `prev` block through the statement list,
//! minting fresh blocks at branch points. Statements that terminate flow
//! (`return`, `revert`, `break`, ...) leave a `NEVER`-conditioned edge to
//! an unreachable continuation block as a construction aid; normalization
//! strips those edges, contracts trivial blocks and drops unreachable
//! empty blocks until a fixpoint.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::global::GlobalSymbol;
use crate::node::{NodeId, NodeKind};
use crate::semantic::CalledEntity;
use crate::Build;

/// Condition attached to a control flow edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionCondition {
    Always,
    /// Construction aid, never present after normalization.
    Never,
    IsTrue,
    IsFalse,
    TrySucceeded,
    TryReverted,
    TryPanicked,
    TryFailed,
    SwitchMatched,
    SwitchDefault,
}

impl fmt::Display for TransitionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransitionCondition::Always => "always",
            TransitionCondition::Never => "never",
            TransitionCondition::IsTrue => "is true",
            TransitionCondition::IsFalse => "is false",
            TransitionCondition::TrySucceeded => "try succeeded",
            TransitionCondition::TryReverted => "try reverted",
            TransitionCondition::TryPanicked => "try panicked",
            TransitionCondition::TryFailed => "try failed",
            TransitionCondition::SwitchMatched => "switch matched",
            TransitionCondition::SwitchDefault => "switch default",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CfgBlockId(pub usize);

#[derive(Debug, Default)]
pub struct CfgBlock {
    /// Straight-line statements, in execution order.
    pub statements: Vec<NodeId>,
    /// Branching statement whose successors' edges leave this block.
    /// Always the last statement of the block.
    pub control_statement: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfgEdge {
    pub from: CfgBlockId,
    pub to: CfgBlockId,
    pub condition: TransitionCondition,
    /// The expression the condition tests, when there is one.
    pub expression: Option<NodeId>,
}

/// Control flow graph of one function, modifier or Yul function.
#[derive(Debug)]
pub struct ControlFlowGraph {
    pub declaration: NodeId,
    blocks: Vec<CfgBlock>,
    edges: Vec<CfgEdge>,
    start_block: CfgBlockId,
    success_end_block: CfgBlockId,
    revert_end_block: CfgBlockId,
    statement_blocks: HashMap<NodeId, CfgBlockId>,
}

impl ControlFlowGraph {
    pub fn blocks(&self) -> impl Iterator<Item = CfgBlockId> + '_ {
        (0..self.blocks.len()).map(CfgBlockId)
    }

    pub fn block(&self, id: CfgBlockId) -> &CfgBlock {
        &self.blocks[id.0]
    }

    pub fn edges(&self) -> &[CfgEdge] {
        &self.edges
    }

    /// Start block; guaranteed empty.
    pub fn start_block(&self) -> CfgBlockId {
        self.start_block
    }

    /// Block all non-reverting paths end in; guaranteed empty.
    pub fn success_end_block(&self) -> CfgBlockId {
        self.success_end_block
    }

    /// Block all reverting paths end in; guaranteed empty.
    pub fn revert_end_block(&self) -> CfgBlockId {
        self.revert_end_block
    }

    /// The block holding a statement.
    pub fn block_of(&self, statement: NodeId) -> Option<CfgBlockId> {
        self.statement_blocks.get(&statement).copied()
    }

    pub fn successors(&self, id: CfgBlockId) -> impl Iterator<Item = &CfgEdge> + '_ {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Whether execution can flow from statement `from` to statement
    /// `to`. Within one block the statement order decides, unless the
    /// block lies on a cycle.
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> bool {
        let (Some(from_block), Some(to_block)) = (self.block_of(from), self.block_of(to)) else {
            return false;
        };
        if from_block == to_block {
            let block = self.block(from_block);
            let position = |statement: NodeId| {
                if block.control_statement == Some(statement) {
                    block.statements.len()
                } else {
                    block
                        .statements
                        .iter()
                        .position(|&s| s == statement)
                        .expect("statement not in its own block")
                }
            };
            if position(from) <= position(to) {
                return true;
            }
            return self.on_cycle(from_block);
        }
        self.has_path(from_block, to_block)
    }

    fn has_path(&self, from: CfgBlockId, to: CfgBlockId) -> bool {
        let mut queue = VecDeque::from([from]);
        let mut seen = HashSet::from([from]);
        while let Some(current) = queue.pop_front() {
            if current == to {
                return true;
            }
            for edge in self.successors(current) {
                if seen.insert(edge.to) {
                    queue.push_back(edge.to);
                }
            }
        }
        false
    }

    /// Whether any cycle is reachable from `start`.
    fn on_cycle(&self, start: CfgBlockId) -> bool {
        enum Color {
            Visiting,
            Done,
        }
        let mut colors: HashMap<CfgBlockId, Color> = HashMap::new();
        let mut stack = vec![(start, 0usize)];
        colors.insert(start, Color::Visiting);
        let out_edges: HashMap<CfgBlockId, Vec<CfgBlockId>> = {
            let mut map: HashMap<CfgBlockId, Vec<CfgBlockId>> = HashMap::new();
            for edge in &self.edges {
                map.entry(edge.from).or_default().push(edge.to);
            }
            map
        };
        loop {
            let Some(&(block, next)) = stack.last() else {
                break;
            };
            let successors = out_edges.get(&block).map(Vec::as_slice).unwrap_or(&[]);
            if next >= successors.len() {
                colors.insert(block, Color::Done);
                stack.pop();
                continue;
            }
            stack.last_mut().expect("stack is non-empty").1 += 1;
            let successor = successors[next];
            match colors.get(&successor) {
                Some(Color::Visiting) => return true,
                Some(Color::Done) => {}
                None => {
                    colors.insert(successor, Color::Visiting);
                    stack.push((successor, 0));
                }
            }
        }
        false
    }

    /// Graphviz rendering; blocks show their statements' source.
    pub fn to_dot(&self, build: &Build) -> String {
        let mut out = String::from("digraph cfg {\n    node [shape=box];\n");
        for (index, block) in self.blocks.iter().enumerate() {
            let mut label = block
                .statements
                .iter()
                .chain(block.control_statement.iter())
                .map(|&s| String::from_utf8_lossy(build.source_of(s)).into_owned())
                .collect::<Vec<_>>()
                .join("\\n");
            if index == self.start_block.0 {
                label = "start".into();
            } else if index == self.success_end_block.0 {
                label = "success".into();
            } else if index == self.revert_end_block.0 {
                label = "revert".into();
            }
            out.push_str(&format!(
                "    {} [label=\"{}\"];\n",
                index,
                label.replace('"', "\\\"")
            ));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "    {} -> {} [label=\"{}\"];\n",
                edge.from.0, edge.to.0, edge.condition
            ));
        }
        out.push('}');
        out
    }

    /// Mermaid rendering of the block graph.
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD\n");
        for index in 0..self.blocks.len() {
            let name = if index == self.start_block.0 {
                "start"
            } else if index == self.success_end_block.0 {
                "success"
            } else if index == self.revert_end_block.0 {
                "revert"
            } else {
                "block"
            };
            out.push_str(&format!("    b{index}[\"{name} {index}\"]\n"));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "    b{} -->|{}| b{}\n",
                edge.from.0, edge.condition, edge.to.0
            ));
        }
        out
    }
}

pub(crate) fn build_cfg(build: &Build, declaration: NodeId, body: NodeId) -> ControlFlowGraph {
    let mut builder = CfgBuilder {
        build,
        blocks: Vec::new(),
        edges: Vec::new(),
        removed_blocks: Vec::new(),
    };

    let start = builder.new_block();
    let entry = builder.new_block();
    let success_end = builder.new_block();
    let revert_end = builder.new_block();
    builder.add_edge(start, entry, TransitionCondition::Always, None);

    let context = LoopContext {
        success_end,
        revert_end,
        loop_post: None,
        loop_next: None,
    };
    let tail = builder.from_statement(entry, &context, body);
    builder.add_edge(tail, success_end, TransitionCondition::Always, None);

    builder.normalize(start, success_end, revert_end);
    builder.compact(declaration, start, success_end, revert_end)
}

/// Flow targets threaded through statement construction.
#[derive(Clone, Copy)]
struct LoopContext {
    success_end: CfgBlockId,
    revert_end: CfgBlockId,
    /// `continue` target of the innermost loop.
    loop_post: Option<CfgBlockId>,
    /// `break` target of the innermost loop.
    loop_next: Option<CfgBlockId>,
}

impl LoopContext {
    fn with_loop(self, loop_post: CfgBlockId, loop_next: CfgBlockId) -> Self {
        LoopContext {
            loop_post: Some(loop_post),
            loop_next: Some(loop_next),
            ..self
        }
    }

    fn without_loop(self) -> Self {
        LoopContext {
            loop_post: None,
            loop_next: None,
            ..self
        }
    }
}

struct CfgBuilder<'a> {
    build: &'a Build,
    blocks: Vec<CfgBlock>,
    edges: Vec<CfgEdge>,
    removed_blocks: Vec<bool>,
}

impl<'a> CfgBuilder<'a> {
    fn new_block(&mut self) -> CfgBlockId {
        self.blocks.push(CfgBlock::default());
        self.removed_blocks.push(false);
        CfgBlockId(self.blocks.len() - 1)
    }

    fn add_edge(
        &mut self,
        from: CfgBlockId,
        to: CfgBlockId,
        condition: TransitionCondition,
        expression: Option<NodeId>,
    ) {
        self.edges.push(CfgEdge {
            from,
            to,
            condition,
            expression,
        });
    }

    fn remove_block(&mut self, block: CfgBlockId) {
        self.removed_blocks[block.0] = true;
        self.edges.retain(|e| e.from != block && e.to != block);
    }

    fn set_control(&mut self, block: CfgBlockId, statement: NodeId) {
        let slot = &mut self.blocks[block.0].control_statement;
        assert!(slot.is_none(), "block already has a control statement");
        *slot = Some(statement);
    }

    fn push_statement(&mut self, block: CfgBlockId, statement: NodeId) {
        self.blocks[block.0].statements.push(statement);
    }

    /// Appends `statement` to `prev`, returning the block where control
    /// continues afterwards.
    fn from_statement(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
    ) -> CfgBlockId {
        match &self.build.node(statement).kind {
            NodeKind::Block(block) | NodeKind::UncheckedBlock(block) => {
                let statements = block.statements.clone();
                let mut current = prev;
                for inner in statements {
                    current = self.from_statement(current, context, inner);
                }
                current
            }
            NodeKind::YulBlock(block) => {
                let statements = block.statements.clone();
                let mut current = prev;
                for inner in statements {
                    current = self.from_statement(current, context, inner);
                }
                current
            }
            NodeKind::InlineAssembly(assembly) => {
                let yul_block = assembly.yul_block;
                self.from_statement(prev, context, yul_block)
            }
            NodeKind::YulExpressionStatement(yul) if self.is_yul_revert_call(yul.expression) => {
                self.terminal(prev, statement, context.revert_end)
            }
            NodeKind::Break | NodeKind::YulBreak => {
                let target = context.loop_next.expect("break outside of a loop");
                self.terminal(prev, statement, target)
            }
            NodeKind::Continue | NodeKind::YulContinue => {
                let target = context.loop_post.expect("continue outside of a loop");
                self.terminal(prev, statement, target)
            }
            NodeKind::Return(_) | NodeKind::YulLeave => {
                self.terminal(prev, statement, context.success_end)
            }
            NodeKind::RevertStatement(_) => self.terminal(prev, statement, context.revert_end),
            NodeKind::ExpressionStatement(inner) => {
                let expression = inner.expression;
                self.push_statement(prev, statement);
                let next = self.new_block();
                if self.from_expression(expression, prev, next, context) {
                    next
                } else {
                    self.remove_block(next);
                    prev
                }
            }
            NodeKind::IfStatement(inner) => {
                let (condition, true_body, false_body) =
                    (inner.condition, inner.true_body, inner.false_body);
                self.from_if(prev, context, statement, condition, true_body, false_body)
            }
            NodeKind::YulIf(inner) => {
                let (condition, body) = (inner.condition, inner.body);
                self.from_yul_if(prev, context, statement, condition, body)
            }
            NodeKind::WhileStatement(inner) => {
                let (condition, body) = (inner.condition, inner.body);
                self.from_while(prev, context, statement, condition, body)
            }
            NodeKind::DoWhileStatement(inner) => {
                let (condition, body) = (inner.condition, inner.body);
                self.from_do_while(prev, context, statement, condition, body)
            }
            NodeKind::ForStatement(inner) => {
                let parts = (
                    inner.initialization_expression,
                    inner.condition,
                    inner.loop_expression,
                    inner.body,
                );
                self.from_for(prev, context, statement, parts)
            }
            NodeKind::YulForLoop(inner) => {
                let parts = (inner.pre, inner.condition, inner.post, inner.body);
                self.from_yul_for(prev, context, statement, parts)
            }
            NodeKind::TryStatement(inner) => {
                let (external_call, clauses) = (inner.external_call, inner.clauses.clone());
                self.from_try(prev, context, statement, external_call, clauses)
            }
            NodeKind::YulSwitch(inner) => {
                let (expression, cases) = (inner.expression, inner.cases.clone());
                self.from_yul_switch(prev, context, statement, expression, cases)
            }
            NodeKind::YulCase(_) => unreachable!("cases are handled by their switch"),
            _ => {
                self.push_statement(prev, statement);
                prev
            }
        }
    }

    /// A statement after which control never falls through: record it,
    /// route flow to `target` and hand back an unreachable continuation.
    fn terminal(&mut self, prev: CfgBlockId, statement: NodeId, target: CfgBlockId) -> CfgBlockId {
        self.push_statement(prev, statement);
        let next = self.new_block();
        self.add_edge(prev, target, TransitionCondition::Always, None);
        self.add_edge(prev, next, TransitionCondition::Never, None);
        next
    }

    fn is_yul_revert_call(&self, expression: NodeId) -> bool {
        match &self.build.node(expression).kind {
            NodeKind::YulFunctionCall(call) => matches!(
                &self.build.node(call.function_name).kind,
                NodeKind::YulIdentifier(identifier) if identifier.name == "revert"
            ),
            _ => false,
        }
    }

    /// Expression-level control flow inside an expression statement:
    /// `require`/`assert`/`revert` calls and conditionals whose arms
    /// cause control flow. Returns whether any edge was added.
    fn from_expression(
        &mut self,
        expression: NodeId,
        block: CfgBlockId,
        next: CfgBlockId,
        context: &LoopContext,
    ) -> bool {
        match &self.build.node(expression).kind {
            NodeKind::Conditional(conditional) => {
                let (condition, true_expression, false_expression) = (
                    conditional.condition,
                    conditional.true_expression,
                    conditional.false_expression,
                );
                let true_block = self.new_block();
                let false_block = self.new_block();
                self.add_edge(block, true_block, TransitionCondition::IsTrue, Some(condition));
                self.add_edge(
                    block,
                    false_block,
                    TransitionCondition::IsFalse,
                    Some(condition),
                );

                let true_is_control = self.from_expression(true_expression, true_block, next, context);
                let false_is_control =
                    self.from_expression(false_expression, false_block, next, context);

                if !true_is_control {
                    self.remove_block(true_block);
                    if false_is_control {
                        self.add_edge(block, next, TransitionCondition::IsTrue, Some(condition));
                    }
                }
                if !false_is_control {
                    self.remove_block(false_block);
                    if true_is_control {
                        self.add_edge(block, next, TransitionCondition::IsFalse, Some(condition));
                    }
                }
                true_is_control || false_is_control
            }
            NodeKind::FunctionCall(call) => {
                let first_argument = call.arguments.first().copied();
                match self.build.function_called(expression) {
                    Some(CalledEntity::Global(GlobalSymbol::Revert)) => {
                        self.add_edge(block, context.revert_end, TransitionCondition::Always, None);
                        self.add_edge(block, next, TransitionCondition::Never, None);
                        true
                    }
                    Some(CalledEntity::Global(
                        GlobalSymbol::Require | GlobalSymbol::Assert,
                    )) => {
                        let argument = first_argument.expect("require/assert without arguments");
                        self.add_edge(block, next, TransitionCondition::IsTrue, Some(argument));
                        self.add_edge(
                            block,
                            context.revert_end,
                            TransitionCondition::IsFalse,
                            Some(argument),
                        );
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn from_if(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        condition: NodeId,
        true_body: NodeId,
        false_body: Option<NodeId>,
    ) -> CfgBlockId {
        self.set_control(prev, statement);
        let true_block = self.new_block();
        let true_end = self.from_statement(true_block, context, true_body);

        let false_block = self.new_block();
        let false_end = match false_body {
            Some(false_body) => self.from_statement(false_block, context, false_body),
            None => false_block,
        };

        let next = self.new_block();
        self.add_edge(prev, true_block, TransitionCondition::IsTrue, Some(condition));
        self.add_edge(prev, false_block, TransitionCondition::IsFalse, Some(condition));
        self.add_edge(true_end, next, TransitionCondition::Always, None);
        self.add_edge(false_end, next, TransitionCondition::Always, None);
        next
    }

    fn from_yul_if(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        condition: NodeId,
        body: NodeId,
    ) -> CfgBlockId {
        self.set_control(prev, statement);
        let true_block = self.new_block();
        let true_end = self.from_statement(true_block, context, body);
        let next = self.new_block();
        self.add_edge(prev, true_block, TransitionCondition::IsTrue, Some(condition));
        self.add_edge(prev, next, TransitionCondition::IsFalse, Some(condition));
        self.add_edge(true_end, next, TransitionCondition::Always, None);
        next
    }

    fn from_while(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        condition: NodeId,
        body_statement: NodeId,
    ) -> CfgBlockId {
        self.set_control(prev, statement);
        let body = self.new_block();
        let next = self.new_block();
        let body_end = self.from_statement(body, &context.with_loop(body, next), body_statement);

        self.add_edge(prev, body, TransitionCondition::IsTrue, Some(condition));
        self.add_edge(prev, next, TransitionCondition::IsFalse, Some(condition));
        self.add_edge(body_end, body, TransitionCondition::IsTrue, Some(condition));
        self.add_edge(body_end, next, TransitionCondition::IsFalse, Some(condition));
        next
    }

    fn from_do_while(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        condition: NodeId,
        body_statement: NodeId,
    ) -> CfgBlockId {
        let body = self.new_block();
        let next = self.new_block();
        let body_end = self.from_statement(body, &context.with_loop(body, next), body_statement);
        self.set_control(body_end, statement);

        self.add_edge(prev, body, TransitionCondition::Always, None);
        self.add_edge(body_end, next, TransitionCondition::IsFalse, Some(condition));
        self.add_edge(body_end, body, TransitionCondition::IsTrue, Some(condition));
        next
    }

    fn from_for(
        &mut self,
        mut prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        parts: (Option<NodeId>, Option<NodeId>, Option<NodeId>, NodeId),
    ) -> CfgBlockId {
        let (initialization, condition, loop_expression, body_statement) = parts;
        if let Some(initialization) = initialization {
            prev = self.from_statement(prev, &context.without_loop(), initialization);
        }
        self.set_control(prev, statement);

        let body = self.new_block();
        let next = self.new_block();
        let loop_post = self.new_block();
        let loop_context = context.with_loop(loop_post, next);
        let loop_post_end = match loop_expression {
            Some(loop_expression) => self.from_statement(loop_post, &loop_context, loop_expression),
            None => loop_post,
        };
        let body_end = self.from_statement(body, &loop_context, body_statement);

        self.add_edge(body_end, loop_post, TransitionCondition::Always, None);
        self.add_edge(prev, body, TransitionCondition::IsTrue, condition);
        self.add_edge(prev, next, TransitionCondition::IsFalse, condition);
        self.add_edge(loop_post_end, body, TransitionCondition::IsTrue, condition);
        self.add_edge(loop_post_end, next, TransitionCondition::IsFalse, condition);
        next
    }

    fn from_yul_for(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        parts: (NodeId, NodeId, NodeId, NodeId),
    ) -> CfgBlockId {
        let (pre, condition, post, body_statement) = parts;
        let prev = self.from_statement(prev, &context.without_loop(), pre);
        self.set_control(prev, statement);

        let body = self.new_block();
        let next = self.new_block();
        let loop_post = self.new_block();
        let loop_context = context.with_loop(loop_post, next);
        let body_end = self.from_statement(body, &loop_context, body_statement);
        let loop_post_end = self.from_statement(loop_post, &loop_context, post);

        self.add_edge(body_end, loop_post, TransitionCondition::Always, None);
        self.add_edge(prev, body, TransitionCondition::IsTrue, Some(condition));
        self.add_edge(prev, next, TransitionCondition::IsFalse, Some(condition));
        self.add_edge(loop_post_end, body, TransitionCondition::IsTrue, Some(condition));
        self.add_edge(loop_post_end, next, TransitionCondition::IsFalse, Some(condition));
        next
    }

    fn from_try(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        external_call: NodeId,
        clauses: Vec<NodeId>,
    ) -> CfgBlockId {
        self.set_control(prev, statement);
        let next = self.new_block();

        let clause_block = |builder: &mut Self, clause: NodeId| {
            let block = match &builder.build.node(clause).kind {
                NodeKind::TryCatchClause(clause) => clause.block,
                other => panic!("expected TryCatchClause, got {}", other.name()),
            };
            let entry = builder.new_block();
            let end = builder.from_statement(entry, context, block);
            (entry, end)
        };

        let (success_entry, success_end) = clause_block(self, clauses[0]);
        self.add_edge(
            prev,
            success_entry,
            TransitionCondition::TrySucceeded,
            Some(external_call),
        );
        self.add_edge(success_end, next, TransitionCondition::Always, None);

        let mut has_fail_clause = false;
        for &clause in &clauses[1..] {
            let error_name = match &self.build.node(clause).kind {
                NodeKind::TryCatchClause(clause) => clause.error_name.clone(),
                other => panic!("expected TryCatchClause, got {}", other.name()),
            };
            let condition = match error_name.as_str() {
                "Error" => TransitionCondition::TryReverted,
                "Panic" => TransitionCondition::TryPanicked,
                "" => {
                    has_fail_clause = true;
                    TransitionCondition::TryFailed
                }
                other => panic!("unknown try clause error name {other:?}"),
            };
            let (entry, end) = clause_block(self, clause);
            self.add_edge(prev, entry, condition, Some(external_call));
            self.add_edge(end, next, TransitionCondition::Always, None);
        }

        if !has_fail_clause {
            self.add_edge(
                prev,
                context.revert_end,
                TransitionCondition::TryFailed,
                Some(external_call),
            );
        }
        next
    }

    fn from_yul_switch(
        &mut self,
        prev: CfgBlockId,
        context: &LoopContext,
        statement: NodeId,
        _expression: NodeId,
        cases: Vec<NodeId>,
    ) -> CfgBlockId {
        self.set_control(prev, statement);
        let next = self.new_block();
        let mut has_default = false;

        for case in cases {
            let (value, body) = match &self.build.node(case).kind {
                NodeKind::YulCase(case) => (case.value, case.body),
                other => panic!("expected YulCase, got {}", other.name()),
            };
            let case_block = self.new_block();
            match value {
                Some(literal) => self.add_edge(
                    prev,
                    case_block,
                    TransitionCondition::SwitchMatched,
                    Some(literal),
                ),
                None => {
                    has_default = true;
                    self.add_edge(prev, case_block, TransitionCondition::SwitchDefault, None);
                }
            }
            let case_end = self.from_statement(case_block, &context.with_loop(case_block, next), body);
            self.add_edge(case_end, next, TransitionCondition::Always, None);
        }

        if !has_default {
            self.add_edge(prev, next, TransitionCondition::SwitchDefault, None);
        }
        next
    }

    // -- normalization ----------------------------------------------------

    fn normalize(&mut self, start: CfgBlockId, success_end: CfgBlockId, revert_end: CfgBlockId) {
        loop {
            let mut changed = false;

            let before = self.edges.len();
            self.edges
                .retain(|e| e.condition != TransitionCondition::Never);
            changed |= self.edges.len() != before;

            for index in 0..self.blocks.len() {
                let block = CfgBlockId(index);
                if self.removed_blocks[index] || block == start {
                    continue;
                }
                if !self.blocks[index].statements.is_empty() {
                    continue;
                }

                let out_edges: Vec<usize> = self
                    .edges
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.from == block)
                    .map(|(i, _)| i)
                    .collect();

                // An empty block with a single unconditional exit is a
                // wire; reconnect its inputs to its successor.
                if let [only] = out_edges.as_slice() {
                    let edge = self.edges[*only];
                    if edge.condition == TransitionCondition::Always {
                        let to = edge.to;
                        let incoming: Vec<CfgEdge> = self
                            .edges
                            .iter()
                            .filter(|e| e.to == block)
                            .copied()
                            .collect();
                        for mut edge in incoming {
                            edge.to = to;
                            self.edges.push(edge);
                        }
                        self.edges.retain(|e| e.from != block && e.to != block);
                        self.removed_blocks[index] = true;
                        changed = true;
                        continue;
                    }
                }

                // Empty unreachable blocks disappear along with their
                // out-edges.
                let has_incoming = self.edges.iter().any(|e| e.to == block);
                if !has_incoming && block != success_end && block != revert_end {
                    self.edges.retain(|e| e.from != block);
                    self.removed_blocks[index] = true;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }
    }

    /// Renumbers live blocks into a dense range and builds the statement
    /// lookup.
    fn compact(
        mut self,
        declaration: NodeId,
        start: CfgBlockId,
        success_end: CfgBlockId,
        revert_end: CfgBlockId,
    ) -> ControlFlowGraph {
        let mut mapping: HashMap<CfgBlockId, CfgBlockId> = HashMap::new();
        let mut blocks = Vec::new();
        for (index, block) in std::mem::take(&mut self.blocks).into_iter().enumerate() {
            if self.removed_blocks[index] {
                continue;
            }
            mapping.insert(CfgBlockId(index), CfgBlockId(blocks.len()));
            blocks.push(block);
        }

        let edges: Vec<CfgEdge> = self
            .edges
            .iter()
            .map(|edge| CfgEdge {
                from: mapping[&edge.from],
                to: mapping[&edge.to],
                condition: edge.condition,
                expression: edge.expression,
            })
            .collect();

        let mut statement_blocks = HashMap::new();
        for (index, block) in blocks.iter().enumerate() {
            for &statement in block
                .statements
                .iter()
                .chain(block.control_statement.iter())
            {
                statement_blocks.insert(statement, CfgBlockId(index));
            }
        }

        ControlFlowGraph {
            declaration,
            blocks,
            edges,
            start_block: mapping[&start],
            success_end_block: mapping[&success_end],
            revert_end_block: mapping[&revert_end],
            statement_blocks,
        }
    }
}
