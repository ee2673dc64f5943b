//! HTTP handlers for analytics endpoints.
//!
//! These handlers connect Axum routes to the report view query handler.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{GetReportViewHandler, GetReportViewQuery};
use crate::domain::analytics::DEFAULT_LEADERBOARD_LIMIT;
use crate::ports::{AnalyticsError, HackathonReader};

use super::dto::{ErrorResponse, HealthResponse, ReportParams, ReportPayload, ReportView};

const NOT_CONFIGURED_MESSAGE: &str = "Analytics store is not configured. \
     Set HACKATHON_ANALYTICS__DATABASE__URL and restart the service.";

const QUERY_FAILED_MESSAGE: &str = "Failed to compute the report. \
     Check that the database schema is migrated and the configured user can read it.";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analytics API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalyticsApiError {
    BadRequest(String),
    NotConfigured,
    Internal(String),
}

impl IntoResponse for AnalyticsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalyticsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalyticsApiError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::not_configured(NOT_CONFIGURED_MESSAGE),
            ),
            AnalyticsApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnalyticsError> for AnalyticsApiError {
    fn from(error: AnalyticsError) -> Self {
        match error {
            AnalyticsError::NotConfigured => {
                tracing::warn!("Report requested but no database is configured");
                AnalyticsApiError::NotConfigured
            }
            AnalyticsError::Database(msg) | AnalyticsError::InvalidData(msg) => {
                tracing::error!(error = %msg, "Report query failed");
                AnalyticsApiError::Internal(QUERY_FAILED_MESSAGE.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analytics dependencies.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub reader: Arc<dyn HackathonReader>,
    pub default_limit: i64,
    pub max_limit: i64,
}

impl AnalyticsAppState {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self {
            reader,
            default_limit: DEFAULT_LEADERBOARD_LIMIT,
            max_limit: i64::MAX,
        }
    }

    pub fn with_limits(mut self, default_limit: i64, max_limit: i64) -> Self {
        self.default_limit = default_limit;
        self.max_limit = max_limit;
        self
    }

    pub fn report_view_handler(&self) -> GetReportViewHandler {
        GetReportViewHandler::new(self.reader.clone()).with_default_limit(self.default_limit)
    }

    /// Caps a requested leaderboard size at the configured maximum.
    fn cap_limit(&self, limit: Option<i64>) -> Option<i64> {
        limit.map(|l| l.min(self.max_limit))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/analytics
///
/// Returns the default view (project statistics with tag frequencies).
pub async fn get_default_report(
    State(state): State<AnalyticsAppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportPayload>, AnalyticsApiError> {
    run_report(&state, ReportView::default(), params).await
}

/// GET /api/analytics/:view
///
/// Returns a single named view.
pub async fn get_report(
    State(state): State<AnalyticsAppState>,
    Path(view_key): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportPayload>, AnalyticsApiError> {
    let view: ReportView = view_key
        .parse()
        .map_err(|e| AnalyticsApiError::BadRequest(format!("{}", e)))?;
    run_report(&state, view, params).await
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn run_report(
    state: &AnalyticsAppState,
    view: ReportView,
    params: ReportParams,
) -> Result<Json<ReportPayload>, AnalyticsApiError> {
    tracing::debug!(%view, limit = ?params.limit, "Computing report");

    let query = GetReportViewQuery {
        view,
        limit: state.cap_limit(params.limit),
    };
    let payload = state.report_view_handler().handle(query).await?;
    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::UnconfiguredReader;

    #[test]
    fn limit_is_capped_at_max() {
        let state = AnalyticsAppState::new(Arc::new(UnconfiguredReader)).with_limits(20, 100);
        assert_eq!(state.cap_limit(Some(500)), Some(100));
        assert_eq!(state.cap_limit(Some(5)), Some(5));
        assert_eq!(state.cap_limit(Some(-3)), Some(-3));
        assert_eq!(state.cap_limit(None), None);
    }

    #[test]
    fn store_errors_map_to_distinct_statuses() {
        let not_configured = AnalyticsApiError::from(AnalyticsError::NotConfigured).into_response();
        assert_eq!(not_configured.status(), StatusCode::SERVICE_UNAVAILABLE);

        let failed =
            AnalyticsApiError::from(AnalyticsError::Database("relation missing".into())).into_response();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_view_is_bad_request() {
        let state = AnalyticsAppState::new(Arc::new(UnconfiguredReader));
        let result = get_report(
            State(state),
            Path("top-secret".to_string()),
            Query(ReportParams::default()),
        )
        .await;
        assert!(matches!(result, Err(AnalyticsApiError::BadRequest(_))));
    }
}
