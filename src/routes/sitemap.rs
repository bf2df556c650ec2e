use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Sitemap {
    #[schema(value_type = Vec<Endpoint>)]
    pub items: Vec<Endpoint>,
}

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/docs"),
    ("GET", "/user"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("POST", "/favorites"),
    ("GET", "/users/{user_id}/favorites"),
    ("DELETE", "/favorites/{favorite_id}"),
    ("POST", "/admin/users"),
    ("POST", "/admin/people"),
    ("POST", "/admin/planets"),
];

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every public endpoint", body = ApiResponse<Sitemap>),
    ),
    tag = "Health"
)]
pub async fn sitemap() -> Json<ApiResponse<Sitemap>> {
    let items: Vec<Endpoint> = ENDPOINTS
        .iter()
        .map(|&(method, path)| Endpoint {
            method: method.to_string(),
            path: path.to_string(),
        })
        .collect();
    let meta = Meta::total(items.len());
    Json(ApiResponse::success("Sitemap", Sitemap { items }, Some(meta)))
}
