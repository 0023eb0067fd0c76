// Gemini client tests against a mock Generative Language API
// Author: kelexine (https://github.com/kelexine)

use fridge_chef::analysis::ImageAnalyzer;
use fridge_chef::config::GeminiConfig;
use fridge_chef::error::ChefError;
use fridge_chef::gemini::GeminiClient;
use fridge_chef::vision::DecodedImage;
use mockito::Matcher;
use serde_json::json;

const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";
const API_KEY: &str = "AIzaTestKey123";

const ANALYSIS_JSON: &str = r#"{"ingredients_detected":["tomatoes","mozzarella"],"recipes":[{"title":"Caprese Salad","description":"Fresh and simple","ingredients_needed":["tomatoes","mozzarella","basil"],"instructions":["Slice","Layer","Drizzle with olive oil"],"cooking_time":"10 mins","difficulty":"Easy"}],"shopping_list_suggestions":["basil","olive oil"]}"#;

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    let config = GeminiConfig {
        api_base_url: format!("{}/v1beta", server.url()),
        timeout_seconds: 5,
        ..Default::default()
    };
    GeminiClient::new(&config, API_KEY).unwrap()
}

fn sample_image() -> DecodedImage {
    DecodedImage::new(b"sampledata".to_vec(), "image/png")
}

fn candidate_with_text(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 300, "candidatesTokenCount": 120, "totalTokenCount": 420 }
    })
    .to_string()
}

#[tokio::test]
async fn test_analyze_sends_image_and_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", API_KEY)
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })),
            Matcher::Regex(r#""inlineData":\{"mimeType":"image/png","data":"c2FtcGxlZGF0YQ=="\}"#.to_string()),
            Matcher::Regex("ingredients_detected".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_with_text(ANALYSIS_JSON))
        .create_async()
        .await;

    let result = client_for(&server).analyze(&sample_image()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.ingredients_detected, vec!["tomatoes", "mozzarella"]);
    assert_eq!(result.recipes.len(), 1);
    assert_eq!(result.recipes[0].title, "Caprese Salad");
    assert_eq!(result.recipes[0].instructions.len(), 3);
    assert_eq!(result.shopping_list_suggestions, vec!["basil", "olive oil"]);
}

#[tokio::test]
async fn test_analyze_accepts_code_fenced_output() {
    let mut server = mockito::Server::new_async().await;
    let fenced = format!("```json\n{}\n```", ANALYSIS_JSON);
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(candidate_with_text(&fenced))
        .create_async()
        .await;

    let result = client_for(&server).analyze(&sample_image()).await.unwrap();

    assert_eq!(result.recipes[0].difficulty, "Easy");
}

#[tokio::test]
async fn test_analyze_no_candidates_is_empty_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let err = client_for(&server).analyze(&sample_image()).await.unwrap_err();

    assert!(matches!(err, ChefError::EmptyResponse));
}

#[tokio::test]
async fn test_analyze_unparseable_text_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(candidate_with_text("I only see a lonely lemon."))
        .create_async()
        .await;

    let err = client_for(&server).analyze(&sample_image()).await.unwrap_err();

    assert!(matches!(err, ChefError::ResponseParse(_)));
}

#[tokio::test]
async fn test_upstream_error_is_reported_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(503)
        .with_body(r#"{"error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server).analyze(&sample_image()).await.unwrap_err();

    mock.assert_async().await;
    match err {
        ChefError::GeminiApi(message) => {
            assert!(message.contains("503"));
            assert!(message.contains("The model is overloaded."));
        }
        other => panic!("expected GeminiApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upstream_error_redacts_api_key() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(400)
        .with_body(format!(
            r#"{{"error": {{"code": 400, "message": "API key {} not valid", "status": "INVALID_ARGUMENT"}}}}"#,
            API_KEY
        ))
        .create_async()
        .await;

    let err = client_for(&server).analyze(&sample_image()).await.unwrap_err();

    let message = err.to_string();
    assert!(!message.contains(API_KEY));
    assert!(message.contains("[REDACTED_API_KEY]"));
}
