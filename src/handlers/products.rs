use crate::dtos::{CreateProductRequest, ProductResponse};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

/// Returns every product in storage-native order; no sort is applied, so the
/// order is whatever the collection scan yields.
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .products()
        .find(None, None)
        .await
        .map_err(AppError::from)?;

    let mut products = Vec::new();
    while let Some(product) = cursor.try_next().await.map_err(AppError::from)? {
        products.push(ProductResponse::from(product));
    }

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut product = payload.into_product()?;

    let result = state
        .db
        .products()
        .insert_one(&product, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product: {}", e);
            AppError::from(e)
        })?;
    product.id = result.inserted_id.as_object_id();

    tracing::info!(
        product_id = ?product.id,
        name = %product.name,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Reject malformed ids before any store round-trip.
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid product ID format")))?;

    let product = state
        .db
        .products()
        .find_one(doc! { "_id": object_id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Product not found")))?;

    Ok(Json(ProductResponse::from(product).without_version()))
}
