use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::AgeBand,
    models::dto::request::QuestionsQuery,
    models::dto::response::{HealthResponse, QuestionsResponse},
};

/// Serves a question set. Provider failures never surface here; the worst
/// case is a bank-sourced set, reported via the `source` field.
#[get("/api/questions")]
async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<QuestionsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let count = query.count.unwrap_or(state.config.default_question_count);
    let age_band = query
        .age_band
        .as_deref()
        .map(AgeBand::parse_lenient)
        .unwrap_or_default();

    let set = state.question_service.get_questions(count, age_band).await;
    Ok(HttpResponse::Ok().json(QuestionsResponse {
        questions: set.questions,
        source: set.source.as_str().to_string(),
        model: set.model,
    }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}
