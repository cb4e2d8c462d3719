use axum::extract::State;
use axum::routing::get;
use axum::{Form, Router};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct GaugeResponse {
    participant_count: usize,
    average: f64,
    fill_percent: f64,
    status: String,
    mission: String,
    recent: Vec<RecentEntry>,
}

#[derive(Debug, Deserialize)]
struct RecentEntry {
    name: String,
    level: f64,
}

/// In-process stand-in for the spreadsheet web app. Rows accumulate in
/// memory; flipping `malformed` makes the GET body unparseable.
#[derive(Clone)]
struct StubSheet {
    rows: Arc<Mutex<Vec<Value>>>,
    malformed: Arc<AtomicBool>,
}

async fn stub_get(State(sheet): State<StubSheet>) -> String {
    if sheet.malformed.load(Ordering::SeqCst) {
        return "<html>service temporarily unavailable</html>".to_string();
    }
    let rows = sheet.rows.lock().await;
    // Served as text/plain, like the real web app.
    serde_json::to_string(&*rows).unwrap()
}

async fn stub_post(
    State(sheet): State<StubSheet>,
    Form(fields): Form<HashMap<String, String>>,
) -> String {
    let mut rows = sheet.rows.lock().await;
    rows.push(json!({
        "name": fields.get("name").cloned().unwrap_or_default(),
        "level": fields
            .get("level")
            .and_then(|level| level.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or_else(|| Value::from(fields.get("level").cloned().unwrap_or_default())),
        "keywords": fields.get("keywords").cloned().unwrap_or_default(),
        "timestamp": Utc::now().to_rfc3339(),
    }));
    "ok".to_string()
}

async fn spawn_stub_sheet(sheet: StubSheet) -> String {
    let app = Router::new()
        .route("/exec", get(stub_get).post(stub_post))
        .with_state(sheet);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub sheet");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/exec")
}

struct TestServer {
    base_url: String,
    sheet: StubSheet,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(unix)]
mod cleanup {
    use std::sync::{Mutex, Once};

    static REGISTER: Once = Once::new();
    static PIDS: Mutex<Vec<i32>> = Mutex::new(Vec::new());

    pub fn register(pid: u32) {
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
        PIDS.lock().unwrap().push(pid as i32);
    }

    extern "C" fn on_exit() {
        if let Ok(pids) = PIDS.lock() {
            for &pid in pids.iter() {
                unsafe {
                    libc::kill(pid, libc::SIGTERM);
                }
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/gauge")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

/// Each test gets its own stub sheet and its own child process so nothing
/// shared outlives the test's runtime; the stub task dies with the test.
async fn spawn_server() -> TestServer {
    let sheet = StubSheet {
        rows: Arc::new(Mutex::new(Vec::new())),
        malformed: Arc::new(AtomicBool::new(false)),
    };
    let sheet_url = spawn_stub_sheet(sheet.clone()).await;

    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_emotion_thermometer"))
        .env("PORT", port.to_string())
        .env("SHEET_URL", sheet_url)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        sheet,
        child,
    }
}

async fn fetch_gauge(client: &Client, base_url: &str) -> GaugeResponse {
    client
        .get(format!("{base_url}/api/gauge"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_empty_history_prompts_for_first_reading() {
    let server = spawn_server().await;
    let client = Client::new();

    let gauge = fetch_gauge(&client, &server.base_url).await;
    assert_eq!(gauge.participant_count, 0);
    assert_eq!(gauge.fill_percent, 0.0);
    assert!(gauge.mission.contains("first reading"));
    assert!(gauge.recent.is_empty());
}

#[tokio::test]
async fn http_submit_then_gauge_reflects_average() {
    let server = spawn_server().await;
    let client = Client::new();

    for (name, level) in [("mina", 1), ("juno", 5)] {
        let response = client
            .post(format!("{}/api/submit", server.base_url))
            .json(&json!({ "name": name, "level": level, "keywords": "recess" }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let gauge = fetch_gauge(&client, &server.base_url).await;
    assert_eq!(gauge.participant_count, 2);
    assert_eq!(gauge.average, 3.0);
    assert_eq!(gauge.fill_percent, 50.0);
    assert!(gauge.status.contains("2 participating"));
    assert!(gauge.status.contains("3.0"));
    assert!(!gauge.mission.is_empty());

    // Most recent submission first.
    assert_eq!(gauge.recent.len(), 2);
    assert_eq!(gauge.recent[0].name, "juno");
    assert_eq!(gauge.recent[0].level, 5.0);
    assert_eq!(gauge.recent[1].name, "mina");
}

#[tokio::test]
async fn http_submit_without_valid_level_is_rejected() {
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&json!({ "name": "mina", "level": 0, "keywords": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // The reading never reached the sheet.
    assert!(server.sheet.rows.lock().await.is_empty());
}

#[tokio::test]
async fn http_blank_name_is_recorded_as_anonymous() {
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&json!({ "name": "", "level": 2, "keywords": "" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["recorded"], "anonymous");

    let gauge = fetch_gauge(&client, &server.base_url).await;
    assert_eq!(gauge.recent[0].name, "anonymous");
}

#[tokio::test]
async fn http_malformed_sheet_body_reads_as_empty() {
    let server = spawn_server().await;
    let client = Client::new();

    server.sheet.malformed.store(true, Ordering::SeqCst);

    let gauge = fetch_gauge(&client, &server.base_url).await;
    assert_eq!(gauge.participant_count, 0);
    assert_eq!(gauge.fill_percent, 0.0);
    assert!(gauge.recent.is_empty());

    // The same server recovers once the sheet serves a parseable body again.
    server.sheet.malformed.store(false, Ordering::SeqCst);
    let response = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&json!({ "name": "mina", "level": 3, "keywords": "" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let gauge = fetch_gauge(&client, &server.base_url).await;
    assert_eq!(gauge.participant_count, 1);
}
