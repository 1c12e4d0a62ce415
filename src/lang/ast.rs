/*!
AST node labels and a plain-text dump of the tree.

The statement parser shapes the arena in [`super::tree`] into a `program`
root holding one `assign` node per parsed statement; expression subtrees
hang off the assigns. The dump here is a debugging aid, not an output
format.
*/

use super::token::Operator;
use super::tree::{NodeId, Tree};
use serde::Serialize;

/// What a node in the tree stands for.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Label {
    Program,
    Assign,
    Var(String),
    Number(String),
    Str(String),
    Op(Operator),
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Label::*;
        match self {
            Program => write!(f, "program"),
            Assign => write!(f, "assign"),
            Var(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            Str(s) => write!(f, "{}", s),
            Op(op) => write!(f, "{}", op),
        }
    }
}

/// Indented listing of the subtree at `node`, one label per line, two
/// spaces per level. Assign nodes show their BASIC line number.
pub fn dump(tree: &Tree, node: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, node, 0, &mut out);
    out
}

fn write_node(tree: &Tree, node: NodeId, indent: usize, out: &mut String) {
    for _ in 0..indent {
        out.push(' ');
    }
    match tree.label(node) {
        Some(label) => out.push_str(&label.to_string()),
        None => out.push('?'),
    }
    if let Some(line_number) = tree.line_number(node) {
        out.push_str(&format!(" [{}]", line_number));
    }
    out.push('\n');
    for &child in tree.children(node) {
        write_node(tree, child, indent + 2, out);
    }
}
