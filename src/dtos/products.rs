use crate::error::AppError;
use crate::models::Product;
use serde::{Deserialize, Serialize};

/// Create payload. Every field is optional at the serde level so that a
/// missing field and an explicit `null` go through the same presence check
/// and produce the same rejection message.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
}

impl CreateProductRequest {
    /// Presence check with truthiness semantics: `null`, `""`, `0` and `NaN`
    /// all count as missing. Rejecting a legitimate zero price/quantity is
    /// documented, intentional behavior.
    pub fn into_product(self) -> Result<Product, AppError> {
        let name = self.name.filter(|s| !s.is_empty());
        let category = self.category.filter(|s| !s.is_empty());
        let price = self.price.filter(|p| *p != 0.0 && !p.is_nan());
        let image = self.image.filter(|s| !s.is_empty());
        let description = self.description.filter(|s| !s.is_empty());
        let quantity = self.quantity.filter(|q| *q != 0);

        match (name, category, price, image, description, quantity) {
            (
                Some(name),
                Some(category),
                Some(price),
                Some(image),
                Some(description),
                Some(quantity),
            ) => Ok(Product::new(
                name,
                category,
                price,
                image,
                description,
                quantity,
            )),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(
                "All fields are required."
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub quantity: i64,
    #[serde(rename = "__v", skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

impl ProductResponse {
    /// Same record with the internal version counter stripped, for
    /// single-product lookups.
    pub fn without_version(mut self) -> Self {
        self.version = None;
        self
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            category: product.category,
            price: product.price,
            image: product.image,
            description: product.description,
            quantity: product.quantity,
            version: Some(product.version),
        }
    }
}
