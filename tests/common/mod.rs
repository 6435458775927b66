#![allow(dead_code)]

use {
    axum::{
        Json, Router,
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
    },
    pix_sync::adapters::blackcat::BlackCatProvider,
    pix_sync::config::{CheckoutConfig, ProviderConfig},
    std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    },
};

pub const TEST_PUBLIC_KEY: &str = "pk_test";
pub const TEST_SECRET_KEY: &str = "sk_test";

/// `Basic base64("pk_test:sk_test")` — what the client must send.
pub const EXPECTED_AUTH: &str = "Basic cGtfdGVzdDpza190ZXN0";

/// Polling interval used by watcher tests; short enough that a test sees
/// several ticks in well under a second.
pub const TEST_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Scripted stand-in for the payment API, bound to a random local port.
/// Responses are queues: each request consumes one entry, the last entry
/// repeats forever.
#[derive(Clone)]
pub struct MockApi {
    state: Arc<MockState>,
    pub base_url: String,
}

struct MockState {
    create_responses: Mutex<Vec<(StatusCode, serde_json::Value)>>,
    status_responses: Mutex<Vec<(StatusCode, serde_json::Value)>>,
    create_calls: AtomicUsize,
    status_calls: AtomicUsize,
    last_auth: Mutex<Option<String>>,
    last_create_body: Mutex<Option<serde_json::Value>>,
    last_status_path: Mutex<Option<String>>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState {
            create_responses: Mutex::new(vec![(
                StatusCode::OK,
                serde_json::json!({"id": "tx_default", "pix": {"qrcode": "00020126default"}}),
            )]),
            status_responses: Mutex::new(vec![(
                StatusCode::OK,
                serde_json::json!({"status": "pending"}),
            )]),
            create_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            last_auth: Mutex::new(None),
            last_create_body: Mutex::new(None),
            last_status_path: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/transactions", post(create_transaction))
            .route("/v1/transactions/{id}", get(get_transaction))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock api");
        let addr = listener.local_addr().expect("mock api local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api crashed");
        });

        Self {
            state,
            base_url: format!("http://{addr}/v1"),
        }
    }

    /// Replace the charge-creation response queue.
    pub fn respond_to_create(&self, responses: Vec<(StatusCode, serde_json::Value)>) {
        *self.state.create_responses.lock().unwrap() = responses;
    }

    /// Replace the status response queue.
    pub fn respond_to_status(&self, responses: Vec<(StatusCode, serde_json::Value)>) {
        *self.state.status_responses.lock().unwrap() = responses;
    }

    pub fn create_calls(&self) -> usize {
        self.state.create_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.state.status_calls.load(Ordering::SeqCst)
    }

    pub fn last_auth(&self) -> Option<String> {
        self.state.last_auth.lock().unwrap().clone()
    }

    pub fn last_create_body(&self) -> Option<serde_json::Value> {
        self.state.last_create_body.lock().unwrap().clone()
    }

    pub fn last_status_path(&self) -> Option<String> {
        self.state.last_status_path.lock().unwrap().clone()
    }

    /// Provider client pointed at this mock, with test credentials and a
    /// fast poll interval.
    pub fn provider(&self) -> BlackCatProvider {
        BlackCatProvider::new(
            ProviderConfig::new(&self.base_url, TEST_PUBLIC_KEY, TEST_SECRET_KEY),
            test_checkout_config(),
        )
        .expect("failed to build provider")
    }
}

pub fn test_checkout_config() -> CheckoutConfig {
    CheckoutConfig {
        poll_interval: TEST_POLL_INTERVAL,
        ..CheckoutConfig::default()
    }
}

fn pop_response(queue: &Mutex<Vec<(StatusCode, serde_json::Value)>>) -> (StatusCode, serde_json::Value) {
    let mut queue = queue.lock().unwrap();
    if queue.len() > 1 {
        queue.remove(0)
    } else {
        queue
            .first()
            .cloned()
            .unwrap_or((StatusCode::OK, serde_json::json!({})))
    }
}

async fn create_transaction(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.create_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *state.last_create_body.lock().unwrap() = Some(body);

    let (status, body) = pop_response(&state.create_responses);
    (status, Json(body))
}

async fn get_transaction(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<serde_json::Value>) {
    state.status_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *state.last_status_path.lock().unwrap() = Some(id);

    let (status, body) = pop_response(&state.status_responses);
    (status, Json(body))
}
