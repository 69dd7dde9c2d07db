//! Label table: symbolic names bound to instruction addresses.

use std::borrow::Cow;

use crate::lex;

/// A name bound to the index of the instruction that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub name: String,
    pub address: usize,
}

/// Labels in definition order.
///
/// Duplicate names are kept; lookup returns the first definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<Label>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition. Never replaces an earlier one.
    pub fn define(&mut self, name: &str, address: usize) {
        self.labels.push(Label {
            name: name.to_string(),
            address,
        });
    }

    /// Address of the first label called `name`.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.labels
            .iter()
            .find(|label| label.name == name)
            .map(|label| label.address)
    }

    /// Labels bound to `address`, in definition order.
    pub fn at(&self, address: usize) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(move |label| label.address == address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Spell a label reference as a listing argument.
///
/// The loader trims whitespace and strips one quote from each end, so a
/// name that starts or ends with either is wrapped in quotes to survive.
pub fn listing_form(name: &str) -> Cow<'_, str> {
    let edge = |b: u8| b == b'\'' || lex::is_space(b);
    let bytes = name.as_bytes();
    let needs_quotes = bytes.first().copied().is_some_and(edge)
        || bytes.last().copied().is_some_and(edge);
    if needs_quotes {
        Cow::Owned(format!("'{name}'"))
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_stay_bare() {
        assert_eq!(listing_form("EX1"), "EX1");
        assert_eq!(listing_form("A'B"), "A'B");
    }

    #[test]
    fn quote_edged_names_are_wrapped() {
        assert_eq!(listing_form("'X"), "''X'");
        assert_eq!(listing_form("X'"), "'X''");
        assert_eq!(listing_form(" X"), "' X'");
    }

    #[test]
    fn define_and_lookup() {
        let mut table = LabelTable::new();
        table.define("PROGRAM", 0);
        table.define("EX1", 12);
        assert_eq!(table.lookup("PROGRAM"), Some(0));
        assert_eq!(table.lookup("EX1"), Some(12));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lookup_unknown() {
        let table = LabelTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup("NOWHERE"), None);
    }

    #[test]
    fn lookup_is_exact() {
        let mut table = LabelTable::new();
        table.define("EX10", 3);
        assert_eq!(table.lookup("EX1"), None);
    }

    #[test]
    fn first_definition_wins() {
        let mut table = LabelTable::new();
        table.define("A", 1);
        table.define("A", 7);
        assert_eq!(table.lookup("A"), Some(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn labels_at_address() {
        let mut table = LabelTable::new();
        table.define("A", 2);
        table.define("B", 2);
        table.define("C", 3);
        let names: Vec<_> = table.at(2).map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
