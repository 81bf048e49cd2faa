//! Product
//!
//! A catalog entry. Products are seeded once and never mutated; the cart
//! holds copies of them.

use serde::{Deserialize, Serialize};

/// `ram` value for products where memory size does not apply (monitors, peripherals)
pub const RAM_NOT_APPLICABLE: u32 = 0;

/// `cpu` value for products without a processor
pub const CPU_NOT_APPLICABLE: &str = "N/A";

/// A product in the storefront catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: u32,
    pub name: String,
    /// Price in whole currency units
    pub price: u32,
    /// Image URI
    pub image: String,
    pub category: String,
    /// Memory size in GB, `RAM_NOT_APPLICABLE` when irrelevant
    pub ram: u32,
    /// Processor model, `CPU_NOT_APPLICABLE` when irrelevant
    pub cpu: String,
    pub gpu: String,
}

impl Product {
    /// Create a product without hardware specs (ram/cpu/gpu not applicable)
    pub fn new(id: u32, name: &str, price: u32, image: &str, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: image.to_string(),
            category: category.to_string(),
            ram: RAM_NOT_APPLICABLE,
            cpu: CPU_NOT_APPLICABLE.to_string(),
            gpu: CPU_NOT_APPLICABLE.to_string(),
        }
    }

    /// Attach hardware specs
    pub fn with_specs(mut self, ram: u32, cpu: &str, gpu: &str) -> Self {
        self.ram = ram;
        self.cpu = cpu.to_string();
        self.gpu = gpu.to_string();
        self
    }

    /// Whether the RAM facet applies to this product
    pub fn has_ram(&self) -> bool {
        self.ram != RAM_NOT_APPLICABLE
    }

    /// Whether the CPU facet applies to this product
    pub fn has_cpu(&self) -> bool {
        self.cpu != CPU_NOT_APPLICABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_without_specs() {
        let monitor = Product::new(4, "UltraWide Monitor", 35000, "/placeholder.svg", "Мониторы");
        assert_eq!(monitor.id, 4);
        assert!(!monitor.has_ram());
        assert!(!monitor.has_cpu());
        assert_eq!(monitor.gpu, "N/A");
    }

    #[test]
    fn test_product_with_specs() {
        let pc = Product::new(1, "Gaming PC Ultra", 120000, "/pc.jpg", "Компьютеры")
            .with_specs(32, "Intel i9", "RTX 4090");
        assert!(pc.has_ram());
        assert!(pc.has_cpu());
        assert_eq!(pc.ram, 32);
        assert_eq!(pc.cpu, "Intel i9");
    }
}
