use serde_json::{Value, json};

pub const JSONRPC_VERSION: &str = "2.0";
pub const CALL_METHOD: &str = "call";
pub const DATABASE_API: &str = "database_api";

/// JSON-RPC envelope. Node APIs are reached through the generic `call`
/// method with `[api, method, args]` as params.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Request {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl Request {
    pub fn new(params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: 0,
            method: CALL_METHOD.to_string(),
            params,
        }
    }

    pub fn call(api: &str, method: &str, args: Vec<Value>) -> Self {
        Self::new(vec![json!(api), json!(method), Value::Array(args)])
    }

    pub fn get_block(block_id: i64) -> Self {
        Self::get_block_raw(vec![json!(block_id)])
    }

    /// `get_block` with arbitrary arguments, for probing malformed requests.
    pub fn get_block_raw(args: Vec<Value>) -> Self {
        Self::call(DATABASE_API, "get_block", args)
    }

    pub fn get_dynamic_global_properties() -> Self {
        Self::call(DATABASE_API, "get_dynamic_global_properties", vec![])
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }
}
