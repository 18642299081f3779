use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;
use uuid::Uuid;

use trivia_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    handlers,
    models::domain::AgeBand,
    services::model_service::{ProviderText, QuestionProvider},
};

/// Offline stand-in for the Gemini provider.
enum StubProvider {
    Model(&'static str),
    Unavailable,
}

#[async_trait]
impl QuestionProvider for StubProvider {
    async fn fetch_raw(&self, _count: usize, _age_band: AgeBand) -> AppResult<ProviderText> {
        match self {
            StubProvider::Model(text) => Ok(ProviderText {
                text: text.to_string(),
                model: "stub-model".to_string(),
            }),
            StubProvider::Unavailable => {
                Err(AppError::UpstreamUnavailable("stub offline".to_string()))
            }
        }
    }
}

/// Model output in the shape Gemini actually produces: fenced, with prose
/// around the array, exercising the repair pipeline end to end.
const MODEL_OUTPUT: &str = r#"הנה השאלות:
```json
[
    {"question": "מהי עיר הבירה של ישראל?", "answer": "ירושלים", "hint": "עיר בהרים"},
    {"question": "כמה צלעות יש למשולש?", "answer": "שלוש", "hint": "פחות מריבוע"},
    {"question": "מה הצבע של הדשא?", "answer": "ירוק", "hint": "כמו עלים"},
    {"question": "איפה גרים הדגים?", "answer": "במים", "hint": "לא ביבשה"},
    {"question": "כמה ימים יש בשבוע?", "answer": "שבעה", "hint": "בין שש לשמונה"}
]
```"#;

fn test_config() -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        gemini_api_base: "http://127.0.0.1:1".to_string(),
        gemini_api_key: SecretString::from("test_api_key".to_string()),
        gemini_models: vec!["gemini-test".to_string()],
        temperature: 0.7,
        max_output_tokens: 512,
        request_timeout_secs: 1,
        retry_backoff_ms: 1,
        data_dir: std::env::temp_dir()
            .join(format!("trivia-integration-{}", Uuid::new_v4()))
            .to_string_lossy()
            .into_owned(),
        history_depth: 10,
        default_question_count: 20,
    }
}

async fn app_state(provider: StubProvider) -> AppState {
    AppState::with_provider(test_config(), Arc::new(provider))
        .await
        .expect("app state should build")
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(handlers::health_check)
                .service(handlers::get_questions)
                .service(handlers::start_session)
                .service(handlers::record_answer)
                .service(handlers::get_progress),
        )
        .await
    };
}

#[actix_web::test]
async fn health_endpoint_responds_ok() {
    let app = test_app!(app_state(StubProvider::Unavailable).await);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn questions_come_from_model_when_available() {
    let app = test_app!(app_state(StubProvider::Model(MODEL_OUTPUT)).await);

    let req = test::TestRequest::get()
        .uri("/api/questions?count=3&age_band=8-10")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "model");
    assert_eq!(body["model"], "stub-model");
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);
    for question in body["questions"].as_array().unwrap() {
        assert!(!question["question"].as_str().unwrap().is_empty());
        assert!(!question["answer"].as_str().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn questions_fall_back_to_bank_when_provider_is_down() {
    let app = test_app!(app_state(StubProvider::Unavailable).await);

    let req = test::TestRequest::get()
        .uri("/api/questions?count=5")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    assert!(body.get("model").is_none());
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn question_count_is_validated() {
    let app = test_app!(app_state(StubProvider::Unavailable).await);

    let req = test::TestRequest::get()
        .uri("/api/questions?count=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::get()
        .uri("/api/questions?count=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn full_session_flow() {
    let app = test_app!(app_state(StubProvider::Unavailable).await);

    // start a two-question game
    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(serde_json::json!({ "player": "דני", "count": 2, "age_band": "8-10" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let session: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(session["questions"].as_array().unwrap().len(), 2);
    assert_eq!(session["score"], 0);

    // saved progress is available for resume
    let req = test::TestRequest::get()
        .uri("/api/sessions/%D7%93%D7%A0%D7%99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // first answer keeps the session going
    let req = test::TestRequest::post()
        .uri("/api/sessions/answers")
        .set_json(serde_json::json!({ "player": "דני", "knew": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["score"], 1);

    // second answer finishes it with a Hebrew score message
    let req = test::TestRequest::post()
        .uri("/api/sessions/answers")
        .set_json(serde_json::json!({ "player": "דני", "knew": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "finished");
    assert_eq!(body["score"], 1);
    assert_eq!(body["total"], 2);
    assert!(!body["message"].as_str().unwrap().is_empty());

    // progress was cleared on completion
    let req = test::TestRequest::get()
        .uri("/api/sessions/%D7%93%D7%A0%D7%99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn consecutive_sessions_avoid_recent_questions() {
    let state = app_state(StubProvider::Unavailable).await;
    let app = test_app!(state);

    let start = serde_json::json!({ "player": "נועה", "count": 5, "age_band": "8-10" });

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(&start)
        .to_request();
    let first: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(&start)
        .to_request();
    let second: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;

    let first_texts: Vec<&str> = first["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["question"].as_str().unwrap())
        .collect();
    for question in second["questions"].as_array().unwrap() {
        assert!(!first_texts.contains(&question["question"].as_str().unwrap()));
    }
}

#[actix_web::test]
async fn answer_without_session_returns_not_found() {
    let app = test_app!(app_state(StubProvider::Unavailable).await);

    let req = test::TestRequest::post()
        .uri("/api/sessions/answers")
        .set_json(serde_json::json!({ "player": "אורח", "knew": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 404);
}

#[actix_web::test]
async fn start_session_rejects_empty_player() {
    let app = test_app!(app_state(StubProvider::Unavailable).await);

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(serde_json::json!({ "player": "", "count": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}
