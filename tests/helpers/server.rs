use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use scorum_api_checks::block_time;

pub const FIRST_BLOCK_TIMESTAMP: &str = "2017-12-05T10:00:00";
pub const PRODUCTION_INTERVAL: Duration = Duration::from_secs(1);

pub struct TestServer {
    handle: JoinHandle<()>,
    pub addr: SocketAddr,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort()
    }
}

/// In-memory chain answering `database_api` calls the way a node does:
/// one block per production interval on top of `base_height` blocks.
struct MockChain {
    started: Instant,
    base_height: u64,
    first_block_timestamp: String,
}

impl MockChain {
    fn head(&self) -> u64 {
        let produced = self.started.elapsed().as_millis() / PRODUCTION_INTERVAL.as_millis();
        self.base_height + produced as u64
    }

    fn block_id(index: u64) -> String {
        format!("{:08x}{:032x}", index, index.wrapping_mul(0x9e37_79b9))
    }

    fn timestamp(&self, index: u64) -> String {
        block_time::advance(
            &self.first_block_timestamp,
            PRODUCTION_INTERVAL,
            (index - 1) as u32,
        )
        .expect("Invalid mock genesis timestamp")
    }

    fn block(&self, index: i64) -> Value {
        if index < 1 || index as u64 > self.head() {
            return Value::Null;
        }
        let index = index as u64;
        let previous = if index == 1 {
            "0".repeat(40)
        } else {
            Self::block_id(index - 1)
        };
        json!({
            "previous": previous,
            "timestamp": self.timestamp(index),
            "witness": "initdelegate",
            "transaction_merkle_root": "0".repeat(40),
            "extensions": [],
            "witness_signature": "1f".repeat(65),
            "transactions": [],
            "block_id": Self::block_id(index),
            "signing_key": "SCR1111111111111111111111111111111114T1Anm",
            "transaction_ids": []
        })
    }

    fn dynamic_global_properties(&self) -> Value {
        let head = self.head();
        json!({
            "id": 0,
            "head_block_number": head,
            "head_block_id": Self::block_id(head),
            "time": self.timestamp(head),
            "current_witness": "initdelegate",
            "total_supply": "210000000.000000000 SCR",
            "circulating_capital": "0.000000000 SCR",
            "total_scorumpower": "0.000000000 SP",
            "median_chain_props": {
                "account_creation_fee": "0.000000750 SCR",
                "maximum_block_size": 131072
            },
            "majority_version": "0.0.1",
            "current_aslot": head,
            "recent_slots_filled": "340282366920938463463374607431768211455",
            "participation_count": 128,
            "last_irreversible_block_num": head - 1,
            "vote_power_reserve_rate": 10,
            "average_block_size": 0,
            "current_reserve_ratio": 20000,
            "max_virtual_bandwidth": "264241152000000000000",
            "registration_pool_balance": "0.000000000 SCR",
            "fund_budget_balance": "0.000000000 SP",
            "reward_pool_balance": "0.000000000 SCR",
            "content_reward_balance": "0.000000000 SCR"
        })
    }

    fn respond(&self, body: &str) -> Result<Value, String> {
        let request: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
        if request["method"] != "call" {
            return Err(format!("unknown method {}", request["method"]));
        }
        let Some([api, method, args]) = request["params"].as_array().map(Vec::as_slice) else {
            return Err("expected [api, method, args] params".to_string());
        };
        if api != "database_api" {
            return Err(format!("unknown api {}", api));
        }
        let args = args.as_array().ok_or("args must be an array")?;

        let result = match method.as_str() {
            Some("get_block") => match args.as_slice() {
                [index] => {
                    let index = index.as_i64().ok_or("block number must be an integer")?;
                    self.block(index)
                }
                _ => return Err("get_block expects one argument".to_string()),
            },
            Some("get_dynamic_global_properties") => self.dynamic_global_properties(),
            _ => return Err(format!("unknown api method {}", method)),
        };
        Ok(json!({"id": request["id"], "result": result}))
    }
}

/// Node RPC endpoints only accept `text/plain` bodies.
async fn handle_rpc(
    State(chain): State<Arc<MockChain>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if content_type != Some("text/plain") {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("unsupported content type {:?}", content_type),
        )
            .into_response();
    }
    match chain.respond(&body) {
        Ok(response) => Json(response).into_response(),
        Err(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    }
}

pub async fn start_node() -> TestServer {
    start_node_raw(20, FIRST_BLOCK_TIMESTAMP).await
}

pub async fn start_node_with_genesis(first_block_timestamp: &str) -> TestServer {
    start_node_raw(20, first_block_timestamp).await
}

async fn start_node_raw(base_height: u64, first_block_timestamp: &str) -> TestServer {
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local address");

    let chain = Arc::new(MockChain {
        started: Instant::now(),
        base_height,
        first_block_timestamp: first_block_timestamp.to_string(),
    });
    let app = Router::new().route("/", post(handle_rpc)).with_state(chain);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock node stopped");
    });
    TestServer { handle, addr }
}
