use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::core::seen_cat_ids;
use crate::models::{ErrorResponse, ProfilesResponse, SaveProfileRequest, UserQuery};
use crate::routes::matches::{internal_error, validation_error, AppState};
use crate::services::PostgresError;

/// Configure saved profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::post().to(save_profile))
        .route("/profiles", web::get().to(list_profiles))
        .route("/profiles/{id}", web::delete().to(delete_profile));
}

/// Save lifestyle answers for "new match" alerts
///
/// POST /api/v1/profiles
///
/// The current ranking is stored as already seen, so alerts only fire for
/// cats that enter the catalog later.
async fn save_profile(
    state: web::Data<AppState>,
    req: web::Json<SaveProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let candidates = match state.catalog.candidates().await {
        Ok(cats) => cats,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return internal_error("Failed to load catalog", e);
        }
    };

    let ranked = state.matcher.match_all_cats(&req.answers, &candidates);

    match state
        .postgres
        .save_profile(&req.user_id, &req.answers, &seen_cat_ids(&ranked))
        .await
    {
        Ok(profile) => {
            tracing::info!("Saved profile {} for user {}", profile.id, req.user_id);
            HttpResponse::Created().json(profile)
        }
        Err(e) => {
            tracing::error!("Failed to save profile for {}: {}", req.user_id, e);
            internal_error("Failed to save profile", e)
        }
    }
}

/// GET /api/v1/profiles?userId={userId}
async fn list_profiles(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    match state.postgres.list_profiles_for_user(&query.user_id).await {
        Ok(profiles) => HttpResponse::Ok().json(ProfilesResponse {
            count: profiles.len(),
            profiles,
        }),
        Err(e) => {
            tracing::error!("Failed to list profiles for {}: {}", query.user_id, e);
            internal_error("Failed to list profiles", e)
        }
    }
}

/// DELETE /api/v1/profiles/{id}
async fn delete_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match state.postgres.delete_profile(profile_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(PostgresError::NotFound(message)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to delete profile {}: {}", profile_id, e);
            internal_error("Failed to delete profile", e)
        }
    }
}
