//! Filter Evaluator
//!
//! Price range plus RAM/CPU facets. Every rule is an independent AND
//! condition; products a facet does not apply to are never excluded by it.

use serde::{Deserialize, Serialize};
use super::product::Product;
use super::selection::Selection;

/// Lower bound of the price slider
pub const PRICE_MIN: u32 = 0;
/// Upper bound of the price slider
pub const PRICE_MAX: u32 = 150_000;

/// RAM checkbox values (GB)
pub const RAM_OPTIONS: &[u32] = &[8, 16, 32, 64];

/// CPU family checkbox values, matched as substrings of `Product::cpu`
pub const CPU_OPTIONS: &[&str] = &["Intel i5", "Intel i9", "AMD Ryzen", "Intel Xeon"];

/// Inclusive price bounds, always `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: PRICE_MIN, max: PRICE_MAX }
    }
}

impl PriceRange {
    /// Bounds given in either order are normalized
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Move the lower thumb; it cannot pass the upper one
    pub fn with_min(self, min: u32) -> Self {
        Self { min: min.min(self.max), max: self.max }
    }

    /// Move the upper thumb; it cannot pass the lower one
    pub fn with_max(self, max: u32) -> Self {
        Self { min: self.min, max: max.max(self.min) }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Current filter panel state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub selected_ram: Selection<u32>,
    pub selected_cpu: Selection<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore all three fields to their defaults at once
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no constraint narrows the catalog
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.price_range = range;
    }

    pub fn toggle_ram(&mut self, ram: u32, checked: bool) {
        self.selected_ram.toggle(ram, checked);
    }

    pub fn toggle_cpu(&mut self, cpu: &str, checked: bool) {
        self.selected_cpu.toggle(cpu.to_string(), checked);
    }

    fn accepts_ram(&self, product: &Product) -> bool {
        self.selected_ram.is_empty()
            || !product.has_ram()
            || self.selected_ram.contains(&product.ram)
    }

    fn accepts_cpu(&self, product: &Product) -> bool {
        self.selected_cpu.is_empty()
            || !product.has_cpu()
            || self.selected_cpu.iter().any(|family| product.cpu.contains(family.as_str()))
    }
}

/// Decide whether a product passes the filters
pub fn evaluate(product: &Product, filters: &FilterState) -> bool {
    filters.price_range.contains(product.price)
        && filters.accepts_ram(product)
        && filters.accepts_cpu(product)
}

/// Products passing the filters, in catalog order
pub fn filter_products(catalog: &[Product], filters: &FilterState) -> Vec<Product> {
    let matched: Vec<Product> = catalog
        .iter()
        .filter(|p| evaluate(p, filters))
        .cloned()
        .collect();
    log::trace!("[Filter] {} of {} products match", matched.len(), catalog.len());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    fn product(id: u32, price: u32, ram: u32, cpu: &str) -> Product {
        Product::new(id, &format!("Product {}", id), price, "/placeholder.svg", "Test")
            .with_specs(ram, cpu, "N/A")
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_accepts_whole_catalog() {
        let catalog = seed_catalog();
        let filters = FilterState::new();
        assert!(filters.is_default());
        assert_eq!(filter_products(&catalog, &filters), catalog);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let mut filters = FilterState::new();
        filters.set_price_range(PriceRange::new(10_000, 50_000));

        assert!(evaluate(&product(1, 10_000, 16, "Intel i5"), &filters));
        assert!(evaluate(&product(2, 50_000, 16, "Intel i5"), &filters));
        assert!(!evaluate(&product(3, 9_999, 16, "Intel i5"), &filters));
        assert!(!evaluate(&product(4, 50_001, 16, "Intel i5"), &filters));
    }

    #[test]
    fn test_ram_filter_bypasses_not_applicable() {
        let mut filters = FilterState::new();
        filters.toggle_ram(64, true);

        let monitor = Product::new(4, "Monitor", 35_000, "/placeholder.svg", "Мониторы");
        assert!(evaluate(&monitor, &filters));
        assert!(evaluate(&product(1, 1_000, 64, "Intel Xeon"), &filters));
        assert!(!evaluate(&product(2, 1_000, 16, "Intel Xeon"), &filters));
    }

    #[test]
    fn test_cpu_filter_bypasses_not_applicable() {
        let mut filters = FilterState::new();
        filters.toggle_cpu("Intel Xeon", true);

        let keyboard = Product::new(5, "Keyboard", 8_500, "/placeholder.svg", "Периферия");
        assert!(evaluate(&keyboard, &filters));
        assert!(!evaluate(&product(1, 1_000, 16, "Intel i5"), &filters));
    }

    #[test]
    fn test_cpu_filter_matches_substring() {
        let mut filters = FilterState::new();
        filters.toggle_cpu("AMD Ryzen", true);

        assert!(evaluate(&product(1, 1_000, 16, "AMD Ryzen 7"), &filters));
        assert!(!evaluate(&product(2, 1_000, 16, "Intel i5"), &filters));
        // case-sensitive
        assert!(!evaluate(&product(3, 1_000, 16, "amd ryzen 5"), &filters));
    }

    #[test]
    fn test_multiple_cpu_families_are_alternatives() {
        let catalog = seed_catalog();
        let mut filters = FilterState::new();
        filters.toggle_cpu("Intel i5", true);
        filters.toggle_cpu("Intel i9", true);
        assert_eq!(ids(&filter_products(&catalog, &filters)), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_rules_combine_with_and() {
        let catalog = seed_catalog();
        let mut filters = FilterState::new();
        filters.toggle_ram(16, true);
        filters.toggle_cpu("AMD Ryzen", true);
        filters.set_price_range(PriceRange::new(10_000, 100_000));
        // 3 matches every rule, 4 bypasses both facets, 5 is under the floor
        assert_eq!(ids(&filter_products(&catalog, &filters)), vec![3, 4]);
    }

    #[test]
    fn test_price_scenario() {
        let a = product(1, 45_000, 16, "Intel i5");
        let b = product(2, 120_000, 32, "Intel i9");
        let mut filters = FilterState::new();
        filters.set_price_range(PriceRange::new(0, 50_000));
        assert_eq!(ids(&filter_products(&[a, b], &filters)), vec![1]);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let catalog = seed_catalog();
        let mut filters = FilterState::new();
        filters.set_price_range(PriceRange::new(0, 5_000));
        assert!(filter_products(&catalog, &filters).is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = FilterState::new();
        filters.set_price_range(PriceRange::new(20_000, 30_000));
        filters.toggle_ram(8, true);
        filters.toggle_cpu("Intel i9", true);
        assert!(!filters.is_default());

        filters.reset();
        assert_eq!(filters.price_range, PriceRange::new(0, 150_000));
        assert!(filters.selected_ram.is_empty());
        assert!(filters.selected_cpu.is_empty());
    }

    #[test]
    fn test_price_range_thumbs_cannot_cross() {
        let range = PriceRange::new(50_000, 20_000);
        assert_eq!((range.min(), range.max()), (20_000, 50_000));

        let raised = range.with_min(70_000);
        assert_eq!((raised.min(), raised.max()), (50_000, 50_000));

        let lowered = range.with_max(5_000);
        assert_eq!((lowered.min(), lowered.max()), (20_000, 20_000));
    }
}
