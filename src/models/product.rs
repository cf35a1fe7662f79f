use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored shape of a product in the `products` collection. The `_id` is left
/// unset on insert so the driver assigns it; `__v` is an internal version
/// counter that single-product lookups strip from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub quantity: i64,
    #[serde(rename = "__v", default)]
    pub version: i32,
}

impl Product {
    pub fn new(
        name: String,
        category: String,
        price: f64,
        image: String,
        description: String,
        quantity: i64,
    ) -> Self {
        Self {
            id: None,
            name,
            category,
            price,
            image,
            description,
            quantity,
            version: 0,
        }
    }
}
