use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::error;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::error::RequestError;
use crate::model::ImageResult;
use crate::providers::RecipeProvider;
use crate::schema::{ImageRequest, RecipeRequest};

/// Shared state for the HTTP handlers.
///
/// The provider is injected rather than read from ambient globals, so tests
/// can substitute a stub.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RecipeProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }
}

/// Returns the [`Router`] of this application.
///
/// CORS is wide open; the service fronts a browser client on another origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-recipe", post(generate_recipe))
        .route("/api/generate-image", post(generate_image))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<Value>, RequestError> {
    request.validate()?;
    let recipe = state.provider.generate_recipe(&request.topic).await?;
    Ok(Json(recipe))
}

async fn generate_image(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Result<Json<ImageResult>, RequestError> {
    request.validate()?;
    let url = state.provider.generate_image(&request.prompt).await?;
    Ok(Json(ImageResult { url }))
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        let status = match self {
            RequestError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
