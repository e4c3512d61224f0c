use std::fmt::Display;

use serde::Serialize;

/// Glyph used wherever an unreachable distance is shown to the learner.
pub const INFINITY_GLYPH: &str = "∞";

/// Separator between consecutive values in a narrated path.
pub const CHAIN_ARROW: &str = " → ";

/// An ordered, append-only list of narration lines produced by one engine call.
///
/// A fresh `Trace` is created at the start of every call and handed back
/// whole once the call finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    lines: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { lines: Vec::new() }
    }

    /// Append one narration line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append every line of another trace, in order.
    pub fn extend(&mut self, other: Trace) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Render a sequence of values as a human-readable chain.
///
/// Example: `[50, 30, 40]` -> `"50 → 30 → 40"`
pub fn chain<T: Display>(items: &[T]) -> String {
    join(items, CHAIN_ARROW)
}

/// Join displayable items with `sep`.
pub fn join<T: Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chain_joins_with_arrows() {
        assert_eq!(chain(&[50, 30, 40]), "50 → 30 → 40");
        assert_eq!(chain::<i64>(&[]), "");
        assert_eq!(chain(&["A"]), "A");
    }

    #[test]
    fn trace_preserves_order() {
        let mut first = Trace::new();
        first.push("one");
        first.push(String::from("two"));

        let mut second = Trace::new();
        second.push("three");
        first.extend(second);

        assert_eq!(first.lines(), &["one", "two", "three"]);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn trace_serializes_as_plain_list() {
        let mut trace = Trace::new();
        trace.push("a");
        trace.push("b");
        assert_eq!(serde_json::to_string(&trace).unwrap(), r#"["a","b"]"#);
    }
}
