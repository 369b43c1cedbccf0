//! Consumable working sets for staged reconciliation.
//!
//! Each source set is an immutable, deduplicated, alphabetically sorted list
//! plus a per-entry consumed flag. Stages consume entries by flipping the
//! flag; an entry, once consumed, is invisible to every later stage. This
//! keeps consumption order explicit and replayable instead of mutating a
//! shared list in place.

/// Case-insensitive equality with full Unicode lowercasing.
///
/// Catalog names include Cyrillic, so ASCII-only folding is not enough.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// One source's name set, shrinking monotonically as stages consume entries
#[derive(Debug, Clone)]
pub struct WorkingSet {
    /// Distinct names in ascending sort order; never mutated after creation
    entries: Vec<String>,
    consumed: Vec<bool>,
}

impl WorkingSet {
    /// Build a working set from raw names: deduplicated and sorted for
    /// deterministic stage iteration.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = names.into_iter().map(Into::into).collect();
        entries.sort_unstable();
        entries.dedup();
        let consumed = vec![false; entries.len()];
        Self { entries, consumed }
    }

    /// Is `name` present (exact, case-sensitive) and not yet consumed?
    pub fn contains(&self, name: &str) -> bool {
        self.position_exact(name).is_some()
    }

    /// First unconsumed entry equal to `name` ignoring case, in sort order.
    /// Returns the entry's original casing.
    pub fn find_ignore_case(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .zip(&self.consumed)
            .find(|(entry, consumed)| !**consumed && eq_ignore_case(entry, name))
            .map(|(entry, _)| entry.as_str())
    }

    /// Consume the entry exactly equal to `name`. Returns whether anything
    /// was consumed; consuming an absent or already-consumed entry is a no-op.
    pub fn consume(&mut self, name: &str) -> bool {
        match self.position_exact(name) {
            Some(idx) => {
                self.consumed[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Unconsumed entries in sort order
    pub fn remaining(&self) -> Vec<String> {
        self.entries
            .iter()
            .zip(&self.consumed)
            .filter(|(_, consumed)| !**consumed)
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    fn position_exact(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .zip(&self.consumed)
            .position(|(entry, consumed)| !*consumed && entry == name)
    }
}

/// Names left unresolved in each source after all matching stages
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Residual {
    pub av: Vec<String>,
    pub au: Vec<String>,
    pub dr: Vec<String>,
}

impl Residual {
    /// Positional display rows: `max` of the three lengths rows, each column
    /// populated up to its own count and blank beyond it. Alignment is a
    /// display convenience only; positions are independent and may pair
    /// unrelated names.
    pub fn rows(&self) -> Vec<[String; 3]> {
        let len = self.av.len().max(self.au.len()).max(self.dr.len());
        (0..len)
            .map(|i| {
                [
                    self.av.get(i).cloned().unwrap_or_default(),
                    self.au.get(i).cloned().unwrap_or_default(),
                    self.dr.get(i).cloned().unwrap_or_default(),
                ]
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.av.is_empty() && self.au.is_empty() && self.dr.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_dedups_and_sorts() {
        let set = WorkingSet::from_names(["Toyota", "BMW", "Toyota", "Audi"]);
        assert_eq!(set.remaining(), vec!["Audi", "BMW", "Toyota"]);
    }

    #[test]
    fn test_consume_is_case_sensitive() {
        let mut set = WorkingSet::from_names(["Toyota"]);
        assert!(!set.consume("TOYOTA"));
        assert!(set.consume("Toyota"));
        assert!(!set.consume("Toyota"));
        assert!(set.remaining().is_empty());
    }

    #[test]
    fn test_consumed_entry_invisible_to_lookups() {
        let mut set = WorkingSet::from_names(["Toyota", "TOYOTA"]);
        assert_eq!(set.find_ignore_case("toyota"), Some("TOYOTA"));
        set.consume("TOYOTA");
        assert_eq!(set.find_ignore_case("toyota"), Some("Toyota"));
        set.consume("Toyota");
        assert_eq!(set.find_ignore_case("toyota"), None);
        assert!(!set.contains("Toyota"));
    }

    #[test]
    fn test_find_ignore_case_unicode() {
        let set = WorkingSet::from_names(["Лада"]);
        assert_eq!(set.find_ignore_case("ЛАДА"), Some("Лада"));
    }

    #[test]
    fn test_residual_rows_blank_padded() {
        let residual = Residual {
            av: vec!["Camry".into(), "Corolla".into()],
            au: vec!["HILUX".into()],
            dr: vec![],
        };
        let rows = residual.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["Camry".to_string(), "HILUX".into(), "".into()]);
        assert_eq!(rows[1], ["Corolla".to_string(), "".into(), "".into()]);
    }
}
