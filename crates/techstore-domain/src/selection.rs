//! Facet Selection
//!
//! Multi-select set for a facet. Keeps the order values were selected in
//! and never holds duplicates.

use serde::{Deserialize, Serialize};

/// Selected values of one facet; empty means "no constraint"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<T> {
    values: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change: `checked` selects, otherwise deselects.
    /// Selecting a present value or deselecting an absent one is a no-op.
    pub fn toggle(&mut self, value: T, checked: bool) {
        if checked {
            self.select(value);
        } else {
            self.deselect(&value);
        }
    }

    pub fn select(&mut self, value: T) {
        if !self.contains(&value) {
            self.values.push(value);
        }
    }

    pub fn deselect(&mut self, value: &T) {
        self.values.retain(|v| v != value);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T: PartialEq> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Self::new();
        for value in iter {
            selection.select(value);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut ram = Selection::new();
        ram.toggle(16u32, true);
        ram.toggle(32, true);
        assert!(ram.contains(&16));
        assert_eq!(ram.len(), 2);

        ram.toggle(16, false);
        assert!(!ram.contains(&16));
        assert_eq!(ram.iter().copied().collect::<Vec<_>>(), vec![32]);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut cpu: Selection<String> = Selection::new();
        cpu.toggle("Intel i5".to_string(), true);
        cpu.toggle("Intel i5".to_string(), true);
        assert_eq!(cpu.len(), 1);

        cpu.toggle("AMD Ryzen".to_string(), false);
        assert_eq!(cpu.len(), 1);
        cpu.toggle("Intel i5".to_string(), false);
        cpu.toggle("Intel i5".to_string(), false);
        assert!(cpu.is_empty());
    }

    #[test]
    fn test_keeps_selection_order() {
        let selection: Selection<u32> = [64, 8, 64, 16].into_iter().collect();
        assert_eq!(selection.iter().copied().collect::<Vec<_>>(), vec![64, 8, 16]);
    }
}
