use serde::{Deserialize, Serialize};

use crate::auth::AccessPolicy;
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::AddProductForm;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{RemovalOutcome, ServiceError, ServiceResult, removal_outcome};

/// Query parameters accepted by the products API.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Only return products that can still be assigned.
    #[serde(default)]
    pub available: bool,
}

/// Inventory table row with the low-stock flag resolved.
#[derive(Debug, Serialize)]
pub struct InventoryItem {
    #[serde(flatten)]
    pub product: Product,
    pub low_stock: bool,
}

impl From<Product> for InventoryItem {
    fn from(product: Product) -> Self {
        let low_stock = product.is_low_stock();
        Self { product, low_stock }
    }
}

/// Data required to render the inventory template.
pub struct InventoryPageData {
    /// Every product in insertion order.
    pub products: Vec<InventoryItem>,
    /// Number of products at or below their minimum stock level.
    pub low_stock_count: usize,
}

/// Loads the inventory overview page.
pub fn load_inventory_page<R, U>(repo: &R, user: &U) -> ServiceResult<InventoryPageData>
where
    R: ProductReader + ?Sized,
    U: AccessPolicy + ?Sized,
{
    let products: Vec<InventoryItem> = load_products(repo, user, ProductsQuery::default())?
        .into_iter()
        .map(InventoryItem::from)
        .collect();
    let low_stock_count = products.iter().filter(|item| item.low_stock).count();

    Ok(InventoryPageData {
        products,
        low_stock_count,
    })
}

/// Lists products, optionally restricted to the pooled ones.
pub fn load_products<R, U>(repo: &R, user: &U, query: ProductsQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    let mut list_query = ProductListQuery::new();
    if query.available {
        list_query = list_query.available();
    }

    repo.list_products(list_query).map_err(ServiceError::from)
}

/// Adds a pooled product to the inventory.
pub fn create_product<R, U>(repo: &R, user: &U, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Deletes a product and detaches it from every student holding it.
pub fn remove_product<R, U>(repo: &R, user: &U, product_id: i32) -> ServiceResult<RemovalOutcome>
where
    R: ProductWriter + ?Sized,
    U: AccessPolicy + ?Sized,
{
    if !user.is_administrator() {
        return Err(ServiceError::Unauthorized);
    }

    removal_outcome(repo.delete_product(product_id))
}
