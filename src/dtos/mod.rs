pub mod products;

pub use products::{CreateProductRequest, ProductResponse};
