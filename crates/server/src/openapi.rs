use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductTypeDoc { Book, Food, Gadget, Other }

#[derive(Serialize, ToSchema)]
pub struct ProductDetailsDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductTypeDoc,
    #[schema(minimum = 1, maximum = 9999)]
    pub inventory: i32,
    #[schema(minimum = 0.0)]
    pub cost: Option<f64>,
}

#[derive(Serialize, ToSchema)]
pub struct ProductIdDoc { pub id: u64 }

#[derive(Serialize, ToSchema)]
pub struct ProductDoc {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductTypeDoc,
    pub inventory: i32,
    pub cost: f64,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponseBodyDoc {
    #[schema(example = "2024-01-01T12:00:00Z")]
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub path: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::create_product,
        crate::routes::products::list_products,
    ),
    components(
        schemas(
            common::types::Health,
            ProductTypeDoc,
            ProductDetailsDoc,
            ProductIdDoc,
            ProductDoc,
            ErrorResponseBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products", description = "In-memory product catalogue"),
    )
)]
pub struct ApiDoc;
