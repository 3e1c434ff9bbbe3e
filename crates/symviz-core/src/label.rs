//! Multi-line node labels.

use std::sync::LazyLock;

use regex::Regex;

use crate::symbol::NodeRecord;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern compiles"));

// Separators left behind when the trailing attributes are absent.
static TRAILING_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+$").expect("trailing pattern compiles"));

/// Render a tuple-like attribute such as `"(3, 3)"` or `[3,3]` as `3X3`.
pub fn tuple_text(raw: &str) -> String {
    DIGITS
        .find_iter(raw)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("X")
}

/// Build the display label of a node:
///
/// ```text
/// <operator>
/// <name>
/// <num_hidden><act_type><pool_type><kernel> / <stride>, <num_filter>
/// ```
///
/// Absent attributes contribute nothing, and any dangling separators at the
/// end are removed.
pub fn build_label(node: &NodeRecord) -> String {
    let text = |key: &str| node.attr_text(key).unwrap_or_default();
    let tuple = |key: &str| {
        node.attr_text(key)
            .map(|raw| tuple_text(&raw))
            .unwrap_or_default()
    };

    let raw = format!(
        "{}\n{}\n{}{}{}{} / {}, {}",
        node.operator,
        node.name,
        text("num_hidden"),
        text("act_type"),
        text("pool_type"),
        tuple("kernel"),
        tuple("stride"),
        text("num_filter"),
    );

    TRAILING_PUNCT.replace(&raw, "").trim().to_string()
}
