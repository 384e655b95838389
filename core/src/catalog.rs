// storefront/src/catalog.rs

//! The static product catalog. Products are defined once at startup and never
//! mutated; the catalog only hands out references to them.

use crate::error::{StorefrontError, StorefrontResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<u32> for ProductId {
  fn from(raw: u32) -> Self {
    ProductId(raw)
  }
}

/// An immutable catalog entry. `price` is in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price: u64,
  pub image: String,
  pub description: String,
}

impl Product {
  pub fn new(
    id: impl Into<ProductId>,
    name: impl Into<String>,
    price: u64,
    image: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      price,
      image: image.into(),
      description: description.into(),
    }
  }
}

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/f657592e-c11b-40d1-8d85-557397943ee3/files";

/// Fixed, ordered set of purchasable products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  /// The storefront's built-in assortment.
  pub fn builtin() -> Self {
    Self {
      products: vec![
        Product::new(
          1,
          "Беспроводные наушники",
          12_990,
          format!("{}/c0727d58-5bbf-438f-91b6-be76ca5a38c8.jpg", IMAGE_BASE),
          "Премиальное звучание с активным шумоподавлением",
        ),
        Product::new(
          2,
          "Умные часы",
          24_990,
          format!("{}/bcd1a690-e665-435d-96ce-0a47b6021b2d.jpg", IMAGE_BASE),
          "Отслеживание активности и здоровья 24/7",
        ),
        Product::new(
          3,
          "Ноутбук Pro",
          89_990,
          format!("{}/ce9c75ae-caee-4ea0-870a-08cea447cc42.jpg", IMAGE_BASE),
          "Мощный процессор для работы и творчества",
        ),
      ],
    }
  }

  /// Builds a catalog from an explicit product list, keeping its order.
  /// Ids must be unique.
  pub fn from_products(products: Vec<Product>) -> StorefrontResult<Self> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
      if !seen.insert(product.id) {
        return Err(StorefrontError::DuplicateProduct { id: product.id });
      }
    }
    Ok(Self { products })
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_catalog_keeps_declared_order() {
    let catalog = Catalog::builtin();
    let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(catalog.get(ProductId(2)).map(|p| p.price), Some(24_990));
    assert!(catalog.get(ProductId(42)).is_none());
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let result = Catalog::from_products(vec![
      Product::new(7, "A", 1, "a.jpg", ""),
      Product::new(7, "B", 2, "b.jpg", ""),
    ]);
    match result {
      Err(StorefrontError::DuplicateProduct { id }) => assert_eq!(id, ProductId(7)),
      other => panic!("expected DuplicateProduct, got {:?}", other),
    }
  }
}
