use crate::ast::*;

pub fn print(program: &ProgramNode) -> String {
    program.body.iter().map(print_node).collect::<Vec<_>>().join("\n")
}

fn print_node(node: &Node) -> String {
    match node {
        Node::StringLiteral(s) => format!("\"{}\"", s.value),
        Node::NumberLiteral(n) => n.value.to_string(),
        Node::BooleanLiteral(b) => b.value.to_string(),
        Node::HexLiteral(h) => h.value.clone(),
        Node::Variable(v) => match (&v.operation, &v.right) {
            (VariableOperation::Declare, Some(right)) => format!("{} = {}", v.name, print_node(right)),
            _ => v.name.clone(),
        },
        Node::MacroInvocation(m) => print_invocation(m),
        Node::MacroChain(c) => format!("{} -> {}", print_slot(&c.source), print_slot(&c.destination)),
        Node::MacroBranch(b) => format!(
            "{} ? {} : {}",
            print_slot(&b.condition),
            b.success_branch.as_deref().map(print_node).unwrap_or_default(),
            b.failure_branch.as_deref().map(print_node).unwrap_or_default()
        ),
        Node::MacroGroup(g) => format!("{{ {} }}", g.body.iter().map(print_node).collect::<Vec<_>>().join("; ")),
        Node::Conditional(c) => {
            let mut s = format!("if ({})", print_node(&c.test));
            if let Some(cons) = &c.consequent { s.push_str(&format!(" {}", print_node(cons))) }
            if let Some(alt) = &c.alternate { s.push_str(&format!(" else {}", print_node(alt))) }
            s
        }
        Node::Switch(sw) => format!(
            "switch ({}) {{ {} }}",
            print_node(&sw.discriminant),
            sw.cases.iter().map(print_case).collect::<Vec<_>>().join(" ")
        ),
        Node::TryCatch(t) => {
            let mut s = format!("try {}", t.try_block.as_deref().map(print_node).unwrap_or_default());
            if let Some(c) = &t.catch_block { s.push_str(&format!(" catch {}", print_node(c))) }
            s
        }
        Node::Loop(l) => format!(
            "while ({}) {{ {} }}",
            l.test.as_deref().map(print_node).unwrap_or_default(),
            l.body.iter().map(print_node).collect::<Vec<_>>().join("; ")
        ),
        Node::Binary(b) => format!("{} {} {}", print_node(&b.left), b.operator, print_node(&b.right)),
        Node::Unary(u) => format!("{}{}", u.operator, print_node(&u.operand)),
    }
}

fn print_invocation(m: &MacroInvocationNode) -> String {
    format!("@{}({})", m.name, m.arguments.iter().map(print_node).collect::<Vec<_>>().join(", "))
}

fn print_slot(slot: &Option<MacroInvocationNode>) -> String {
    slot.as_ref().map(print_invocation).unwrap_or_default()
}

fn print_case(case: &CaseClauseNode) -> String {
    let body = case.consequent.iter().map(print_node).collect::<Vec<_>>().join("; ");
    match &case.test {
        Some(test) => format!("case {}: {}", print_node(test), body),
        None => format!("default: {}", body),
    }
}
