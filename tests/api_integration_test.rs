use medi_guide::{app, ServerSettings};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;

const MEDICAL_DB: &str = r#"{
  "symptoms": {
    "Cardiac": {
      "keywords": ["chest pain", "palpitations"],
      "specialist": "Cardiologist",
      "description": "Heart related symptoms",
      "urgency": "high"
    },
    "Skin": {
      "keywords": ["rash"],
      "specialist": "Dermatologist",
      "description": "Skin related symptoms"
    }
  }
}"#;

const FIRST_AID_DB: &str = r#"{
  "Burns": {
    "steps": ["Cool the burn under water", "Cover loosely"],
    "warning": "Seek care if severe"
  },
  "Cuts": {
    "steps": ["Apply pressure", "Apply a bandage"]
  },
  "Sprains": {
    "steps": ["Rest", "Wrap with an elastic Bandage"],
    "warning": ""
  }
}"#;

fn write_data(dir: &Path) {
    std::fs::write(dir.join("medical_db.json"), MEDICAL_DB).unwrap();
    std::fs::write(dir.join("first_aid_db.json"), FIRST_AID_DB).unwrap();
}

fn settings_for(dir: &TempDir, cache_mode: &str) -> ServerSettings {
    ServerSettings {
        data_dir: dir.path().join("data").to_str().unwrap().to_string(),
        static_dir: dir.path().join("static").to_str().unwrap().to_string(),
        cache_mode: cache_mode.to_string(),
        ..ServerSettings::default()
    }
}

fn setup(with_data: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::create_dir_all(dir.path().join("static")).unwrap();
    std::fs::write(
        dir.path().join("static").join("index.html"),
        "<html><body>Health Guide</body></html>",
    )
    .unwrap();
    if with_data {
        write_data(&dir.path().join("data"));
    }
    dir
}

async fn spawn_app(settings: &ServerSettings) -> String {
    let router = app::build_app(settings).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn post_symptoms(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/symptom-check", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

async fn get_first_aid(base: &str, query: Option<&str>) -> (u16, Value) {
    let mut request = reqwest::Client::new().get(format!("{}/api/first-aid", base));
    if let Some(q) = query {
        request = request.query(&[("q", q)]);
    }
    let response = request.send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_symptom_check_matches_and_defaults() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let (status, body) = post_symptoms(&base, json!({"symptoms": ["Chest Pain", "RASH", "sore toe"]})).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "recommendations": [
                {
                    "symptom": "Chest Pain",
                    "specialist": "Cardiologist",
                    "description": "Heart related symptoms",
                    "urgency": "high"
                },
                {
                    "symptom": "RASH",
                    "specialist": "Dermatologist",
                    "description": "Skin related symptoms",
                    "urgency": "normal"
                },
                {
                    "symptom": "sore toe",
                    "specialist": "General Practitioner",
                    "description": "Please consult with a general practitioner for proper evaluation.",
                    "urgency": "normal"
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_symptom_check_missing_field_is_empty() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let (status, body) = post_symptoms(&base, json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"success": true, "recommendations": []}));

    let (_, body) = post_symptoms(&base, json!({"symptoms": []})).await;
    assert_eq!(body["recommendations"], json!([]));
}

#[tokio::test]
async fn test_symptom_check_rejects_wrong_shape() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    for payload in [
        json!({"symptoms": "headache"}),
        json!({"symptoms": [1, 2]}),
        json!({"symptoms": null}),
        json!(["headache"]),
    ] {
        let (status, body) = post_symptoms(&base, payload).await;
        assert_eq!(status, 500);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().starts_with("Malformed request"));
        assert!(body.get("recommendations").is_none());
    }
}

#[tokio::test]
async fn test_symptom_check_rejects_non_json_body() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/symptom-check", base))
        .header("Content-Type", "text/plain")
        .body("headache")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_first_aid_search() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let (status, body) = get_first_aid(&base, Some("cool")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "results": [{
                "topic": "Burns",
                "steps": ["Cool the burn under water", "Cover loosely"],
                "warning": "Seek care if severe"
            }]
        })
    );

    // 沒有 warning 欄位時回傳空字串
    let (_, body) = get_first_aid(&base, Some("pressure")).await;
    assert_eq!(body["results"][0]["topic"], json!("Cuts"));
    assert_eq!(body["results"][0]["warning"], json!(""));
}

#[tokio::test]
async fn test_first_aid_search_is_case_insensitive() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let (_, upper) = get_first_aid(&base, Some("BANDAGE")).await;
    let (_, lower) = get_first_aid(&base, Some("bandage")).await;
    assert_eq!(upper, lower);

    let topics: Vec<&str> = lower["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["topic"].as_str().unwrap())
        .collect();
    assert_eq!(topics, vec!["Cuts", "Sprains"]);
}

#[tokio::test]
async fn test_first_aid_blank_query_returns_nothing() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    for query in [None, Some(""), Some("   ")] {
        let (status, body) = get_first_aid(&base, query).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"success": true, "results": []}));
    }
}

#[tokio::test]
async fn test_first_aid_repeated_query_uses_first() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/first-aid", base))
        .query(&[("q", "burn"), ("q", "zzz")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    let topics: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["topic"].as_str().unwrap())
        .collect();
    assert_eq!(topics, vec!["Burns"]);
}

#[tokio::test]
async fn test_missing_data_fails_request_then_recovers() {
    let dir = setup(false);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let (status, body) = post_symptoms(&base, json!({"symptoms": ["rash"]})).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("medical_db.json"));

    let (status, body) = get_first_aid(&base, Some("burn")).await;
    assert_eq!(status, 500);
    assert!(body["error"].as_str().unwrap().contains("first_aid_db.json"));

    // reload 模式下，資料補上後即可正常服務
    write_data(&dir.path().join("data"));
    let (status, body) = post_symptoms(&base, json!({"symptoms": ["rash"]})).await;
    assert_eq!(status, 200);
    assert_eq!(body["recommendations"][0]["specialist"], json!("Dermatologist"));
}

#[tokio::test]
async fn test_malformed_data_fails_request() {
    let dir = setup(true);
    std::fs::write(dir.path().join("data").join("first_aid_db.json"), "[1, 2, 3]").unwrap();
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let (status, body) = get_first_aid(&base, Some("burn")).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], json!(false));
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_startup_cache_mode() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "startup")).await;

    // 啟動後刪除檔案，快取資料仍可使用
    std::fs::remove_file(dir.path().join("data").join("medical_db.json")).unwrap();
    let (status, body) = post_symptoms(&base, json!({"symptoms": ["palpitations"]})).await;
    assert_eq!(status, 200);
    assert_eq!(body["recommendations"][0]["specialist"], json!("Cardiologist"));
}

#[tokio::test]
async fn test_startup_cache_mode_requires_data() {
    let dir = setup(false);
    let result = app::build_app(&settings_for(&dir, "startup")).await;
    assert!(matches!(
        result,
        Err(medi_guide::GuideError::DataUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_health_and_landing_page() {
    let dir = setup(true);
    let base = spawn_app(&settings_for(&dir, "reload")).await;

    let health: Value = reqwest::get(format!("{}/api/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({"success": true, "status": "ok"}));

    let page = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(page.status().as_u16(), 200);
    assert!(page.text().await.unwrap().contains("Health Guide"));
}
