use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::models::{AlertsQuery, AlertsResponse, ErrorResponse, UpdatedResponse, UserQuery};
use crate::routes::matches::{internal_error, validation_error, AppState};
use crate::services::PostgresError;

/// Configure match alert routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/alerts", web::get().to(list_alerts))
        .route("/alerts/read-all", web::post().to(mark_all_read))
        .route("/alerts/sweep", web::post().to(trigger_sweep))
        .route("/alerts/{id}/read", web::post().to(mark_alert_read));
}

/// GET /api/v1/alerts?userId={userId}&unreadOnly=true
async fn list_alerts(
    state: web::Data<AppState>,
    query: web::Query<AlertsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    match state.postgres.list_alerts(&query.user_id, query.unread_only).await {
        Ok(alerts) => HttpResponse::Ok().json(AlertsResponse {
            count: alerts.len(),
            alerts,
        }),
        Err(e) => {
            tracing::error!("Failed to list alerts for {}: {}", query.user_id, e);
            internal_error("Failed to list alerts", e)
        }
    }
}

/// POST /api/v1/alerts/{id}/read
async fn mark_alert_read(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let alert_id = path.into_inner();

    match state.postgres.mark_alert_read(alert_id).await {
        Ok(()) => HttpResponse::Ok().json(UpdatedResponse {
            success: true,
            updated: 1,
        }),
        Err(PostgresError::NotFound(message)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Alert not found".to_string(),
            message,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to mark alert {} read: {}", alert_id, e);
            internal_error("Failed to mark alert read", e)
        }
    }
}

/// POST /api/v1/alerts/read-all?userId={userId}
async fn mark_all_read(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    match state.postgres.mark_all_read(&query.user_id).await {
        Ok(updated) => HttpResponse::Ok().json(UpdatedResponse {
            success: true,
            updated,
        }),
        Err(e) => {
            tracing::error!("Failed to mark alerts read for {}: {}", query.user_id, e);
            internal_error("Failed to mark alerts read", e)
        }
    }
}

/// Run an alert sweep now
///
/// POST /api/v1/alerts/sweep
///
/// Called by the catalog store when cats are added or change status. Drops
/// the cached catalog snapshot first so the sweep sees the change.
async fn trigger_sweep(state: web::Data<AppState>) -> impl Responder {
    state.catalog.invalidate().await;

    match state.sweeper.run_once().await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            tracing::error!("Alert sweep failed: {}", e);
            internal_error("Alert sweep failed", e)
        }
    }
}
