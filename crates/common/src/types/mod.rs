use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload served by `/health`.
#[derive(Serialize, ToSchema, Debug, Clone, Copy)]
pub struct Health {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
