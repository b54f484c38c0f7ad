use std::time::Duration;

use fitness_planner::fallback::{fallback_workout, fallback_yoga};
use fitness_planner::{Config, PlanGenerator, WorkoutRequest, YogaRequest};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn config_for(server: &MockServer, key: Option<&str>) -> Config {
    Config::new(key.map(|k| SecretString::new(k.into())))
        .with_base_url(server.uri())
        .with_model("gemini-test")
}

fn arms_intermediate() -> WorkoutRequest {
    WorkoutRequest {
        target_muscle: "arms".into(),
        duration_in_minutes: 40,
        fitness_level: "intermediate".into(),
    }
}

fn candidate_text(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    })
}

#[tokio::test]
async fn fenced_reply_from_service_becomes_the_plan() {
    let server = MockServer::start().await;
    let reply = "```json\n{\"exercises\":[{\"name\":\"Chin-ups\",\"sets\":4,\"reps\":\"6-8\",\"description\":\"Bicep focus\"}]}\n```";
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "real-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(reply)))
        .expect(1)
        .mount(&server)
        .await;

    let generator = PlanGenerator::from_config(config_for(&server, Some("real-key"))).expect("generator");
    let plan = generator.generate_workout(&arms_intermediate()).await;

    assert_eq!(plan.exercises.len(), 1);
    assert_eq!(plan.exercises[0].name, "Chin-ups");
    assert_eq!(plan.exercises[0].sets, "4");
}

#[tokio::test]
async fn server_error_yields_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let generator = PlanGenerator::from_config(config_for(&server, Some("real-key"))).expect("generator");
    let request = arms_intermediate();
    assert_eq!(generator.generate_workout(&request).await, fallback_workout(&request));
}

#[tokio::test]
async fn prose_reply_yields_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_text("I'm sorry, I can't help with that.")),
        )
        .mount(&server)
        .await;

    let generator = PlanGenerator::from_config(config_for(&server, Some("real-key"))).expect("generator");
    let request = YogaRequest {
        goal: "Balance".into(),
        duration_in_minutes: 25,
    };
    assert_eq!(generator.generate_yoga_plan(&request).await, fallback_yoga(&request));
}

#[tokio::test]
async fn placeholder_key_never_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for key in [None, Some("CHANGE_ME"), Some("   ")] {
        let generator = PlanGenerator::from_config(config_for(&server, key)).expect("generator");
        let request = arms_intermediate();
        assert_eq!(generator.generate_workout(&request).await, fallback_workout(&request));
    }
}

#[tokio::test]
async fn slow_service_times_out_into_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_text("{\"exercises\":[]}"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, Some("real-key"))
        .with_timeouts(Duration::from_secs(1), Duration::from_millis(200));
    let generator = PlanGenerator::from_config(config).expect("generator");
    let request = arms_intermediate();
    assert_eq!(generator.generate_workout(&request).await, fallback_workout(&request));
}
