use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::category::{suggest_category, suggest_for_photo, CoordinateSource, PhotoSuggestion};
use crate::gazetteer::{Category, RegionInfo};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/resolve ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub file: Option<String>,
}

pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<PhotoSuggestion>, ApiError> {
    let start = Instant::now();

    let suggestion = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => {
            let resolution = state.resolver.resolve_lat_lng(lat, lng).map_err(|e| {
                tracing::warn!(lat, lng, "rejected coordinate");
                api_error(StatusCode::BAD_REQUEST, e.to_string())
            })?;
            PhotoSuggestion {
                category: suggest_category(&resolution),
                resolution: Some(resolution),
                source: CoordinateSource::Gps,
            }
        }
        (None, None) if params.file.is_some() => {
            suggest_for_photo(&state.resolver, None, params.file.as_deref())
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Provide 'lat'+'lng' or 'file' parameters",
            ))
        }
    };

    tracing::info!(
        lat = ?params.lat,
        lng = ?params.lng,
        file = ?params.file,
        category = %suggestion.category,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/resolve"
    );

    Ok(Json(suggestion))
}

// ─── GET /api/regions ────────────────────────────────────────────

pub async fn region_list(State(state): State<Arc<AppState>>) -> Json<Vec<RegionInfo>> {
    Json(state.resolver.gazetteer().summary())
}

// ─── GET /api/categories ─────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub name: &'static str,
}

pub async fn category_list() -> Json<Vec<CategoryInfo>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| CategoryInfo {
                label: c.label(),
                name: c.english_name(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;

    fn state() -> State<Arc<AppState>> {
        State(Arc::new(AppState {
            resolver: Resolver::builtin().unwrap(),
        }))
    }

    fn query(lat: Option<f64>, lng: Option<f64>, file: Option<&str>) -> Query<ResolveQuery> {
        Query(ResolveQuery {
            lat,
            lng,
            file: file.map(String::from),
        })
    }

    #[tokio::test]
    async fn test_resolve_coordinates() {
        let Json(s) = resolve(state(), query(Some(9.9189), Some(-84.1370), None))
            .await
            .ok()
            .unwrap();
        assert_eq!(s.category, Category::Exploration);
        assert!(s.resolution.unwrap().is_found());
    }

    #[tokio::test]
    async fn test_resolve_file_only() {
        let Json(s) = resolve(state(), query(None, None, Some("monteverde_zip.jpg")))
            .await
            .ok()
            .unwrap();
        assert_eq!(s.category, Category::Nature);
    }

    #[tokio::test]
    async fn test_resolve_invalid_coordinate() {
        let err = resolve(state(), query(Some(200.0), Some(0.0), None)).await.err().unwrap();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resolve_missing_params() {
        let err = resolve(state(), query(Some(9.9), None, None)).await.err().unwrap();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert!(err.1.contains("lat"));
    }

    #[tokio::test]
    async fn test_region_list() {
        let Json(regions) = region_list(state()).await;
        assert_eq!(regions.len(), 9);
    }

    #[tokio::test]
    async fn test_category_list() {
        let Json(categories) = category_list().await;
        assert_eq!(categories.len(), Category::ALL.len());
        assert!(categories.iter().any(|c| c.label == "strand" && c.name == "beach"));
    }
}
