//! Domain Services
//!
//! Pure functions over listing data.

use std::collections::HashSet;

use crate::domain::entities::Product;

/// Distinct categories in first-seen order
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Keep products of `category`; an empty or absent category keeps all
pub fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => products
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
        None => products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::id::ProductId;

    fn product(title: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(),
            title: title.to_string(),
            description: String::new(),
            image_url: String::new(),
            amazon_url: String::new(),
            category: category.to_string(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Kettlebell", "Weights"),
            product("Yoga Mat", "Mats"),
            product("Dumbbells", "Weights"),
            product("Resistance Band", "Bands"),
        ]
    }

    #[test]
    fn test_distinct_categories_keeps_first_seen_order() {
        assert_eq!(distinct_categories(&catalog()), vec!["Weights", "Mats", "Bands"]);
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let weights = filter_by_category(catalog(), Some("Weights"));
        let titles: Vec<_> = weights.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Kettlebell", "Dumbbells"]);

        assert!(filter_by_category(catalog(), Some("Shoes")).is_empty());
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_by_category(catalog(), None).len(), 4);
        assert_eq!(filter_by_category(catalog(), Some("")).len(), 4);
    }
}
