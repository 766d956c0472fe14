//! Tree rendering with grammar names.

use pushdown_core::{Colors, Cst};
use pushdown_grammar::Grammar;

/// Indented dump of a tree produced against `grammar`.
pub fn dump_tree(grammar: &Grammar, tree: &Cst, colors: Colors) -> String {
    tree.render(|id| grammar.name_of(id).to_string(), colors)
}
