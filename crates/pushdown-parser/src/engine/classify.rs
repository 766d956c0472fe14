//! Token classification: map a token onto a label id.

use pushdown_core::{Token, TokenKind};
use pushdown_grammar::{Grammar, LabelId, LabelKind};

/// Label id for `token`, or `None` if no label of its kind exists.
///
/// A `NAME` token whose text equals a keyword literal maps to that keyword
/// label, wherever the generic `NAME` label sits in the table. Any other
/// `NAME` maps to the literal-free `NAME` label. Every other kind maps to
/// the first label of that kind; literals are not consulted.
pub fn classify(grammar: &Grammar, token: &Token) -> Option<LabelId> {
    let mut labels = grammar.labels().iter().enumerate();

    if token.kind == TokenKind::Name {
        let mut fallback = None;
        for (id, label) in labels {
            if label.is_keyword() {
                if label.literal.as_deref() == Some(token.text.as_str()) {
                    return Some(id as LabelId);
                }
            } else if label.token_kind() == Some(TokenKind::Name) {
                fallback = fallback.or(Some(id as LabelId));
            }
        }
        return fallback;
    }

    labels
        .find(|(_, label)| label.kind == LabelKind::Token(token.kind))
        .map(|(id, _)| id as LabelId)
}
