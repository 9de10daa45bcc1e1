// SPDX-License-Identifier: MPL-2.0
//! Wire representation of collection entities.
//!
//! The backend speaks camelCase JSON, identifies records by `id` or `_id`
//! (string or number), and wraps payloads under a per-collection key such as
//! `userData`. [`WireResource`] binds an entity to that representation.

use super::endpoints::Endpoints;
use crate::application::port::FetchError;
use crate::domain::{Entity, EntityId, NewProduct, NewUser, Product, ProductPatch, User, UserPatch};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Record identifier as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Picks `id`, then `_id`, and validates the result.
///
/// # Errors
///
/// Returns a `Decode` error if neither carries a non-blank value.
pub fn resolve_id(id: Option<WireId>, legacy_id: Option<WireId>) -> Result<EntityId, FetchError> {
    id.or(legacy_id)
        .map(WireId::into_string)
        .and_then(|raw| EntityId::parse(&raw).ok())
        .ok_or_else(|| FetchError::decode("record has no `id`"))
}

/// An entity that can travel over the HTTP adapter.
pub trait WireResource: Entity {
    /// Collection path segment, e.g. `users`.
    const COLLECTION: &'static str;
    /// Key wrapping the payload in response bodies.
    const ENVELOPE_KEY: &'static str;

    /// Raw record as decoded from JSON.
    type Dto: DeserializeOwned + Send;

    /// Maps a decoded record to the entity.
    ///
    /// # Errors
    ///
    /// Returns a `Decode` error when the record lacks required data.
    fn from_dto(dto: Self::Dto) -> Result<Self, FetchError>;

    /// Fields present in an edit echo. Absent or unreadable fields stay
    /// `None` so the local values survive the merge.
    fn accepted_fields(dto: Self::Dto) -> Self::Patch;

    /// Body fields of an edit request; unset patch fields are omitted.
    fn patch_body(patch: &Self::Patch) -> Map<String, Value>;

    /// Body fields of a create request.
    fn draft_body(draft: &Self::Draft) -> Map<String, Value>;

    /// Endpoint templates; the conventional REST layout by default.
    fn endpoints() -> Endpoints {
        Endpoints::for_collection(Self::COLLECTION)
    }
}

fn insert_some<T: Into<Value> + Clone>(
    body: &mut Map<String, Value>,
    key: &str,
    value: Option<&T>,
) {
    if let Some(value) = value {
        body.insert(key.to_owned(), value.clone().into());
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDto {
    id: Option<WireId>,
    #[serde(rename = "_id")]
    legacy_id: Option<WireId>,
    #[serde(alias = "name")]
    full_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    role: Option<String>,
}

impl WireResource for User {
    const COLLECTION: &'static str = "users";
    const ENVELOPE_KEY: &'static str = "userData";

    type Dto = UserDto;

    fn from_dto(dto: UserDto) -> Result<Self, FetchError> {
        let mut user = User::new(
            resolve_id(dto.id, dto.legacy_id)?,
            dto.full_name.unwrap_or_default(),
            dto.email.unwrap_or_default(),
        );
        user.phone_number = dto.phone_number.unwrap_or_default();
        user.role = dto.role.unwrap_or_default();
        Ok(user)
    }

    fn accepted_fields(dto: UserDto) -> UserPatch {
        UserPatch {
            full_name: dto.full_name,
            email: dto.email,
            phone_number: dto.phone_number,
            role: dto.role,
        }
    }

    fn patch_body(patch: &UserPatch) -> Map<String, Value> {
        let mut body = Map::new();
        insert_some(&mut body, "fullName", patch.full_name.as_ref());
        insert_some(&mut body, "email", patch.email.as_ref());
        insert_some(&mut body, "phoneNumber", patch.phone_number.as_ref());
        insert_some(&mut body, "role", patch.role.as_ref());
        body
    }

    fn draft_body(draft: &NewUser) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("fullName".into(), draft.full_name.clone().into());
        body.insert("email".into(), draft.email.clone().into());
        body.insert("password".into(), draft.password.clone().into());
        if !draft.phone_number.trim().is_empty() {
            body.insert("phoneNumber".into(), draft.phone_number.clone().into());
        }
        body
    }
}

// =============================================================================
// Products
// =============================================================================

/// A numeric field some backends send as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lenient {
    Number(f64),
    Text(String),
}

impl Lenient {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Non-negative whole count, saturated to `u32::MAX`.
    fn as_count(&self) -> Option<u32> {
        self.as_f64()
            .filter(|count| *count >= 0.0)
            .map(|count| count.min(f64::from(u32::MAX)) as u32)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductDto {
    id: Option<WireId>,
    #[serde(rename = "_id")]
    legacy_id: Option<WireId>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    price: Option<Lenient>,
    stock: Option<Lenient>,
    #[serde(alias = "image", alias = "photo")]
    image_url: Option<String>,
}

impl WireResource for Product {
    const COLLECTION: &'static str = "products";
    const ENVELOPE_KEY: &'static str = "productData";

    type Dto = ProductDto;

    fn from_dto(dto: ProductDto) -> Result<Self, FetchError> {
        let price = dto
            .price
            .as_ref()
            .and_then(Lenient::as_f64)
            .unwrap_or_default();
        let mut product = Product::new(
            resolve_id(dto.id, dto.legacy_id)?,
            dto.name.unwrap_or_default(),
            price,
        );
        product.description = dto.description.unwrap_or_default();
        product.category = dto.category.unwrap_or_default();
        product.stock = dto
            .stock
            .as_ref()
            .and_then(Lenient::as_count)
            .unwrap_or_default();
        product.image_url = dto.image_url.unwrap_or_default();
        Ok(product)
    }

    fn accepted_fields(dto: ProductDto) -> ProductPatch {
        ProductPatch {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            price: dto.price.as_ref().and_then(Lenient::as_f64),
            stock: dto.stock.as_ref().and_then(Lenient::as_count),
            image_url: dto.image_url,
        }
    }

    fn patch_body(patch: &ProductPatch) -> Map<String, Value> {
        let mut body = Map::new();
        insert_some(&mut body, "name", patch.name.as_ref());
        insert_some(&mut body, "description", patch.description.as_ref());
        insert_some(&mut body, "category", patch.category.as_ref());
        insert_some(&mut body, "price", patch.price.as_ref());
        insert_some(&mut body, "stock", patch.stock.as_ref());
        insert_some(&mut body, "imageUrl", patch.image_url.as_ref());
        body
    }

    fn draft_body(draft: &NewProduct) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("name".into(), draft.name.clone().into());
        body.insert("description".into(), draft.description.clone().into());
        body.insert("category".into(), draft.category.clone().into());
        body.insert("price".into(), draft.price.into());
        body.insert("stock".into(), draft.stock.into());
        if !draft.image_url.trim().is_empty() {
            body.insert("imageUrl".into(), draft.image_url.clone().into());
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_from(value: Value) -> Result<User, FetchError> {
        User::from_dto(serde_json::from_value(value).unwrap())
    }

    fn product_from(value: Value) -> Result<Product, FetchError> {
        Product::from_dto(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn user_accepts_numeric_and_legacy_ids() {
        let numeric = user_from(json!({"id": 7, "fullName": "Ann"})).unwrap();
        assert_eq!(numeric.id.as_str(), "7");

        let legacy = user_from(json!({"_id": "abc", "name": "Bob"})).unwrap();
        assert_eq!(legacy.id.as_str(), "abc");
        assert_eq!(legacy.full_name, "Bob");
    }

    #[test]
    fn user_without_id_is_rejected() {
        assert!(user_from(json!({"fullName": "Ann"})).is_err());
        assert!(user_from(json!({"id": "  "})).is_err());
    }

    #[test]
    fn user_patch_body_omits_unset_fields() {
        let body = User::patch_body(&UserPatch {
            full_name: Some("Ann Smith".into()),
            ..UserPatch::default()
        });
        assert_eq!(Value::Object(body), json!({"fullName": "Ann Smith"}));
    }

    #[test]
    fn user_draft_body_skips_blank_phone() {
        let body = User::draft_body(&NewUser {
            full_name: "Ann".into(),
            email: "ann@example.com".into(),
            password: "secret".into(),
            phone_number: " ".into(),
        });
        assert!(!body.contains_key("phoneNumber"));
        assert_eq!(body["password"], "secret");
    }

    #[test]
    fn product_accepts_string_price_and_image_alias() {
        let product = product_from(json!({
            "id": "p1",
            "name": "Lamp",
            "price": "12.5",
            "stock": 3,
            "photo": "https://cdn/x.png"
        }))
        .unwrap();
        assert!((product.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(product.stock, 3);
        assert_eq!(product.image_url, "https://cdn/x.png");
    }

    #[test]
    fn product_negative_stock_is_zero() {
        let product = product_from(json!({"id": "p1", "stock": -4})).unwrap();
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn partial_product_echo_leaves_missing_fields_unset() {
        let dto = serde_json::from_value(json!({"id": "p1", "name": "Lamp 2"})).unwrap();
        let accepted = Product::accepted_fields(dto);
        assert_eq!(accepted.name.as_deref(), Some("Lamp 2"));
        assert_eq!(accepted.price, None);
        assert_eq!(accepted.stock, None);
        assert_eq!(accepted.image_url, None);
    }

    #[test]
    fn unreadable_echo_numbers_are_unset() {
        let dto = serde_json::from_value(json!({"price": "n/a", "stock": -1})).unwrap();
        let accepted = Product::accepted_fields(dto);
        assert_eq!(accepted.price, None);
        assert_eq!(accepted.stock, None);
    }

    #[test]
    fn partial_user_echo_leaves_missing_fields_unset() {
        let dto = serde_json::from_value(json!({"id": 1, "email": "ann@new.io"})).unwrap();
        let accepted = User::accepted_fields(dto);
        assert_eq!(accepted.email.as_deref(), Some("ann@new.io"));
        assert!(accepted.full_name.is_none());
    }

    #[test]
    fn product_patch_body_keeps_zero_price() {
        let body = Product::patch_body(&ProductPatch {
            price: Some(0.0),
            ..ProductPatch::default()
        });
        assert_eq!(Value::Object(body), json!({"price": 0.0}));
    }

    #[test]
    fn endpoints_follow_collection() {
        let endpoints = Product::endpoints();
        assert_eq!(endpoints.list, "products");
        assert_eq!(endpoints.toggle_favorite, "products/favorite");
    }
}
