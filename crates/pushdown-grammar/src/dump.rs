//! Human-readable grammar dump for debugging.

use std::fmt::Write as _;

use pushdown_core::Colors;

use crate::grammar::Grammar;
use crate::label::{LabelId, LabelKind};
use crate::state::Transition;

/// Render the label table and every DFA, with accelerated tables when present.
pub fn dump(grammar: &Grammar, colors: Colors) -> String {
    let mut out = String::new();
    let c = &colors;

    let _ = writeln!(out, "labels");
    for id in 0..grammar.labels().len() {
        let _ = writeln!(out, "  {} {}", c.meta(&id.to_string()), label_name(grammar, id as LabelId, c));
    }

    for dfa in grammar.dfas() {
        let start = if dfa.id() == grammar.start() { " start" } else { "" };
        let _ = write!(
            out,
            "dfa {} {} (initial {}{start}",
            c.meta(&dfa.id().to_string()),
            c.symbol(dfa.name()),
            dfa.initial()
        );
        if grammar.is_accelerated() {
            let first: Vec<_> = dfa.first().iter().map(|l| label_name(grammar, l, c)).collect();
            let _ = write!(out, ", first: {}", first.join(" "));
        }
        let _ = writeln!(out, ")");

        for (index, state) in dfa.states().iter().enumerate() {
            let flag = match (state.accept(), state.is_accept_only()) {
                (_, true) => " accept-only",
                (true, false) => " accept",
                (false, _) => "",
            };
            let _ = writeln!(out, "  state {index}{flag}");
            for arc in state.arcs() {
                let _ = writeln!(out, "    {} -> {}", label_name(grammar, arc.label, c), arc.target);
            }
            if !grammar.is_accelerated() {
                continue;
            }
            if state.lower() == state.upper() {
                let _ = writeln!(out, "    accel none");
                continue;
            }
            let _ = writeln!(out, "    accel [{}, {})", state.lower(), state.upper());
            for (label, transition) in state.transitions() {
                let action = match transition {
                    Transition::Shift(target) => format!("shift {target}"),
                    Transition::Push { dfa, next } => {
                        format!("push {} then {next}", c.symbol(grammar.name_of(dfa)))
                    }
                };
                let _ = writeln!(out, "      {}: {action}", label_name(grammar, label, c));
            }
        }
    }

    out
}

fn label_name(grammar: &Grammar, id: LabelId, c: &Colors) -> String {
    let Some(label) = grammar.label(id) else {
        return "?".to_string();
    };
    match (&label.kind, &label.literal) {
        (LabelKind::Empty, _) => c.meta("EMPTY"),
        (LabelKind::Token(kind), None) => c.meta(kind.name()),
        (LabelKind::Token(kind), Some(lit)) => format!("{} {}", c.meta(kind.name()), c.text(lit)),
        (LabelKind::Nonterminal(nt), _) => format!("<{}>", c.symbol(grammar.name_of(*nt))),
    }
}
