//! In-process stand-in for the HajaBot backend, bound to an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const LEAD_ID: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    /// Every endpoint behaves like a working backend.
    Healthy,
    /// Every request gets a 500.
    Failing,
    /// Form submissions succeed but the body carries no `lead`.
    FormWithoutLead,
    /// Form submissions succeed with `lead.id` set to an empty string.
    FormWithBlankLeadId,
    /// Every request is answered only after [`SLOW_RESPONSE_DELAY`].
    Slow,
}

pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct MockState {
    mode: MockMode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockBackend {
    addr: std::net::SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub async fn start(mode: MockMode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            mode,
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().await.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    });

    if state.mode == MockMode::Slow {
        tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    }

    if state.mode == MockMode::Failing {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to process request"})),
        )
            .into_response();
    }

    let lead_path = format!("/api/leads/{LEAD_ID}");
    let messages_path = format!("{lead_path}/messages");

    match (method.as_str(), uri.path()) {
        ("GET", "/") => Json(json!({"message": "🔥 HajaBot ativo!"})).into_response(),
        ("GET", "/plain") => "HajaBot ativo".into_response(),
        ("GET", "/api/leads") => Json(json!([])).into_response(),
        ("POST", "/api/form") => {
            let created = if state.mode == MockMode::FormWithoutLead {
                json!({"success": true, "message": "Lead cadastrado com sucesso"})
            } else if state.mode == MockMode::FormWithBlankLeadId {
                json!({
                    "success": true,
                    "message": "Lead cadastrado com sucesso",
                    "lead": {"id": "", "status": "novo"}
                })
            } else {
                json!({
                    "success": true,
                    "message": "Lead cadastrado com sucesso",
                    "lead": {"id": LEAD_ID, "status": "novo"}
                })
            };
            (StatusCode::CREATED, Json(created)).into_response()
        }
        ("POST", "/api/webhook") => {
            Json(json!({"success": true, "leadId": LEAD_ID + 1})).into_response()
        }
        ("POST", "/api/send") => Json(json!({"success": true})).into_response(),
        ("PUT", path) if path == lead_path => {
            Json(json!({"id": LEAD_ID, "status": "em_atendimento"})).into_response()
        }
        ("GET", path) if path == messages_path => Json(json!([])).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
    }
}
