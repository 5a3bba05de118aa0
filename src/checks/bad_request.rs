//! Malformed requests must be rejected with `400 Bad Request`.

use crate::api::request::Request;
use crate::checks::CheckError;
use crate::network::client::{Client, NodeClient};
use reqwest::StatusCode;
use serde_json::json;

pub async fn block_info_no_id<C: Client>(node: &NodeClient<C>) -> Result<(), CheckError> {
    expect_bad_request(node, Request::get_block_raw(vec![])).await
}

pub async fn block_info_invalid_id<C: Client>(node: &NodeClient<C>) -> Result<(), CheckError> {
    expect_bad_request(node, Request::get_block_raw(vec![json!("invalid")])).await
}

pub async fn block_info_invalid_method<C: Client>(node: &NodeClient<C>) -> Result<(), CheckError> {
    expect_bad_request(node, Request::get_block(1).with_method("invalid")).await
}

pub async fn request_no_params<C: Client>(node: &NodeClient<C>) -> Result<(), CheckError> {
    expect_bad_request(node, Request::new(vec![])).await
}

async fn expect_bad_request<C: Client>(
    node: &NodeClient<C>,
    request: Request,
) -> Result<(), CheckError> {
    node.send_expecting(&request, StatusCode::BAD_REQUEST).await?;
    Ok(())
}
