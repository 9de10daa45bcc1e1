// SPDX-License-Identifier: MPL-2.0
//! Catalog product entity.

use super::entity::{merge_field, merge_text, Entity, EntityId, EntityKind};

/// A product as listed on the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    /// Public URL of the product photo, empty when none was uploaded.
    pub image_url: String,
}

impl Product {
    /// Creates a product with the given name and price.
    pub fn new(id: EntityId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: String::new(),
            price,
            stock: 0,
            image_url: String::new(),
        }
    }
}

/// Independently editable product fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub image_url: Option<String>,
}

/// Payload of the "add product" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
}

impl Entity for Product {
    type Patch = ProductPatch;
    type Draft = NewProduct;

    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn merge(&mut self, patch: &ProductPatch) {
        merge_text(&mut self.name, patch.name.as_ref());
        merge_text(&mut self.description, patch.description.as_ref());
        merge_text(&mut self.category, patch.category.as_ref());
        merge_field(&mut self.price, patch.price.as_ref());
        merge_field(&mut self.stock, patch.stock.as_ref());
        merge_text(&mut self.image_url, patch.image_url.as_ref());
    }

    fn as_patch(&self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            price: Some(self.price),
            stock: Some(self.stock),
            image_url: Some(self.image_url.clone()),
        }
    }
}
