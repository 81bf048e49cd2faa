//! Static Catalog
//!
//! The fixed product list the storefront is seeded with.

use super::error::{DomainError, DomainResult};
use super::product::Product;

const CDN: &str = "https://cdn.poehali.dev/projects/4c5f2828-3ec4-432e-ae03-103453e024f8/files";
const PLACEHOLDER: &str = "/placeholder.svg";

/// Build the catalog in display order
pub fn seed_catalog() -> Vec<Product> {
    let desktop_img = format!("{}/94300936-a14c-49ec-9ed3-2a1d262c0d6c.jpg", CDN);
    let office_img = format!("{}/d2cd44c9-429b-4e21-ae86-afdacb6dd484.jpg", CDN);
    let laptop_img = format!("{}/9900e0ad-6227-4ae1-8ec5-36701e759176.jpg", CDN);

    vec![
        Product::new(1, "Gaming PC Ultra", 120000, &desktop_img, "Компьютеры")
            .with_specs(32, "Intel i9", "RTX 4090"),
        Product::new(2, "Office Pro", 45000, &office_img, "Компьютеры")
            .with_specs(16, "Intel i5", "Integrated"),
        Product::new(3, "Gaming Laptop", 85000, &laptop_img, "Ноутбуки")
            .with_specs(16, "AMD Ryzen 7", "RTX 4060"),
        Product::new(4, "UltraWide Monitor", 35000, PLACEHOLDER, "Мониторы"),
        Product::new(5, "Mechanical Keyboard", 8500, PLACEHOLDER, "Периферия"),
        Product::new(6, "Workstation Pro", 95000, &desktop_img, "Компьютеры")
            .with_specs(64, "Intel Xeon", "RTX A4000"),
    ]
}

/// Look up a product by id
pub fn find_product(catalog: &[Product], id: u32) -> DomainResult<&Product> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DomainError::NotFound(format!("product {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_unique_ids() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 6);
        let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_not_applicable_products() {
        let catalog = seed_catalog();
        let without_specs: Vec<u32> = catalog
            .iter()
            .filter(|p| !p.has_ram() && !p.has_cpu())
            .map(|p| p.id)
            .collect();
        assert_eq!(without_specs, vec![4, 5]);
        assert!(catalog.iter().filter(|p| !p.has_ram()).all(|p| p.image == PLACEHOLDER));
    }

    #[test]
    fn test_find_product() {
        let catalog = seed_catalog();
        assert_eq!(find_product(&catalog, 3).map(|p| p.name.as_str()), Ok("Gaming Laptop"));
        assert_eq!(
            find_product(&catalog, 42),
            Err(DomainError::NotFound("product 42".to_string()))
        );
    }
}
