use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{truncate_for_tier, Matcher};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, ScoreMatchesRequest,
    ScoreMatchesResponse,
};
use crate::services::{AlertSweeper, CacheManager, CachedCatalog, PostgresClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CachedCatalog>,
    pub cache: Arc<CacheManager>,
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub sweeper: AlertSweeper,
    pub free_tier_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_matches))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: state.cache.stats(),
    })
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn internal_error(error: &str, message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 500,
    })
}

/// Score an explicit candidate set
///
/// POST /api/v1/matches/score
///
/// Ranks exactly the cats in the request body. No eligibility filtering and
/// no tier truncation happen here.
///
/// Takes the `Matcher` rather than `AppState` because it needs neither the
/// catalog nor the database, so it can be mounted and tested on its own.
/// `main` registers the configured matcher as separate app data for it.
pub async fn score_matches(
    matcher: web::Data<Matcher>,
    req: web::Json<ScoreMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score_matches request: {}", errors);
        return validation_error(errors);
    }

    let matches = matcher.match_all_cats(&req.answers, &req.cats);

    HttpResponse::Ok().json(ScoreMatchesResponse {
        total_results: matches.len(),
        matches,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "answers": { "hoursAway": 8, "hasChildren": true, ... },
///   "tier": "free"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", errors);
        return validation_error(errors);
    }

    let candidates = match state.catalog.candidates().await {
        Ok(cats) => cats,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return internal_error("Failed to load catalog", e);
        }
    };

    tracing::debug!("Ranking {} eligible cats", candidates.len());

    let ranked = state.matcher.match_all_cats(&req.answers, &candidates);
    let tiered = truncate_for_tier(ranked, req.tier, state.free_tier_limit);

    tracing::info!(
        "Returning {} of {} matches ({:?} tier)",
        tiered.matches.len(),
        tiered.total_results,
        req.tier
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: tiered.matches,
        total_results: tiered.total_results,
        hidden_count: tiered.hidden_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CacheStats;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            cache: CacheStats {
                l1_size: 0,
                redis_enabled: false,
                ttl_secs: 300,
            },
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_internal_error_status() {
        let response = internal_error("Failed to load catalog", "timeout");
        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
