//! List Products Use Case
//!
//! Categories are collected before filtering so the filter dropdown always
//! offers every category that has an active product.

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repository::CatalogRepository;
use crate::domain::services::{distinct_categories, filter_by_category};
use crate::error::CatalogResult;

pub struct ProductListing {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    /// Empty when no filter is applied
    pub selected_category: String,
}

pub struct ListProductsUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, category: Option<&str>) -> CatalogResult<ProductListing> {
        let products = self.repo.list_active_products().await?;
        let categories = distinct_categories(&products);
        let selected_category = category.map(str::trim).unwrap_or_default().to_string();
        let products = filter_by_category(products, Some(&selected_category));

        Ok(ProductListing {
            products,
            categories,
            selected_category,
        })
    }
}
