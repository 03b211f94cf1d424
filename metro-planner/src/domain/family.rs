//! Line family rules.
//!
//! A main line and its named branches share stations where riders change
//! platform without it counting as a real transfer. Which lines belong
//! together is decided here.

use std::collections::HashMap;

/// Decides whether two lines belong to the same family.
#[derive(Debug, Clone, Default)]
pub struct LineFamilies {
    rule: FamilyRule,
}

#[derive(Debug, Clone, Default)]
enum FamilyRule {
    /// Infer from the names: containment or a shared base name before a
    /// parenthesised suffix.
    #[default]
    Heuristic,

    /// Branch name → parent line name.
    Explicit(HashMap<String, String>),
}

impl LineFamilies {
    /// Infer families from line names.
    ///
    /// Two lines are related when one name contains the other
    /// (`"11号线"` / `"11号线支线"`) or when both agree after stripping a
    /// suffix in ASCII parentheses (`"11号线(昆山)"` / `"11号线(嘉定)"`).
    /// Full-width parentheses are not split, so `"11号线（嘉定）"` and
    /// `"11号线（花桥）"` are distinct lines.
    ///
    /// Containment also matches unrelated lines such as `"1号线"` and
    /// `"11号线"`; use [`LineFamilies::explicit`] when that matters.
    pub fn heuristic() -> Self {
        Self {
            rule: FamilyRule::Heuristic,
        }
    }

    /// Declare families with a branch → parent table.
    ///
    /// Lines absent from the table are their own root. Chains are followed,
    /// so a branch of a branch shares the family of the main line.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::domain::LineFamilies;
    ///
    /// let families = LineFamilies::explicit([("11号线支线", "11号线")]);
    /// assert!(families.same_family("11号线", "11号线支线"));
    /// assert!(!families.same_family("1号线", "11号线"));
    /// ```
    pub fn explicit<I, K, V>(parents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = parents
            .into_iter()
            .map(|(branch, parent)| (branch.into(), parent.into()))
            .collect();
        Self {
            rule: FamilyRule::Explicit(table),
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self.rule, FamilyRule::Explicit(_))
    }

    /// Returns true if the two lines are the same line or members of one family.
    pub fn same_family(&self, line_a: &str, line_b: &str) -> bool {
        if line_a == line_b {
            return true;
        }
        match &self.rule {
            FamilyRule::Heuristic => {
                line_a.contains(line_b)
                    || line_b.contains(line_a)
                    || main_line(line_a) == main_line(line_b)
            }
            FamilyRule::Explicit(table) => root(table, line_a) == root(table, line_b),
        }
    }
}

/// The part of a line name before an ASCII `(` suffix.
fn main_line(line_name: &str) -> &str {
    line_name
        .split('(')
        .next()
        .unwrap_or(line_name)
        .trim()
}

/// Follow the parent chain to the main line. Bounded by the table size so a
/// cyclic table cannot loop forever.
fn root<'a>(table: &'a HashMap<String, String>, line_name: &'a str) -> &'a str {
    let mut current = line_name;
    for _ in 0..table.len() {
        match table.get(current) {
            Some(parent) if parent != current => current = parent.as_str(),
            _ => break,
        }
    }
    current
}
