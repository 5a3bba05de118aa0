use crate::api::request::Request;
use crate::api::response::{DynamicGlobalProperties, DynamicGlobalPropertiesResponse};
use crate::block_time;
use crate::checks::{CheckError, ensure_eq};
use crate::config::ChainSettings;
use crate::network::client::{Client, NodeClient};
use tokio::time::Instant;

/// Samples the head block and checks that it changes only once per
/// production interval, advancing by one block and one interval each time.
pub async fn run<C: Client>(
    node: &NodeClient<C>,
    settings: &ChainSettings,
) -> Result<(), CheckError> {
    let request = Request::get_dynamic_global_properties();
    let interval = settings.blocks_production_interval;

    let head = fetch_head(node, &request).await?;
    let head = wait_for_next_block(node, &request, head.head_block_number, settings).await?;
    let mut block_number = head.head_block_number;
    let mut head_time = head.time;
    let mut start = Instant::now();
    tracing::debug!(block_number, %head_time, "Head block changed, sampling");

    for _ in 0..settings.sample_count {
        let head = fetch_head(node, &request).await?;
        if start.elapsed() < interval {
            ensure_eq("head_block_number", block_number, head.head_block_number)?;
            ensure_eq("time", head_time.as_str(), head.time.as_str())?;
        } else {
            block_number += 1;
            head_time = block_time::advance(&head_time, interval, 1)?;
            tracing::debug!(block_number, %head_time, "Expecting next block");
            ensure_eq("head_block_number", block_number, head.head_block_number)?;
            ensure_eq("time", head_time.as_str(), head.time.as_str())?;
            start = Instant::now();
        }
        tokio::time::sleep(settings.sample_period).await;
    }
    Ok(())
}

async fn fetch_head<C: Client>(
    node: &NodeClient<C>,
    request: &Request,
) -> Result<DynamicGlobalProperties, CheckError> {
    let response: DynamicGlobalPropertiesResponse = node.send(request).await?;
    Ok(response.result)
}

/// Polls the head until its block number differs from `block_number`.
async fn wait_for_next_block<C: Client>(
    node: &NodeClient<C>,
    request: &Request,
    block_number: u64,
    settings: &ChainSettings,
) -> Result<DynamicGlobalProperties, CheckError> {
    let started = Instant::now();
    loop {
        let head = fetch_head(node, request).await?;
        if head.head_block_number != block_number {
            return Ok(head);
        }
        let waited = started.elapsed();
        if waited >= settings.head_wait_timeout {
            return Err(CheckError::HeadNotAdvanced {
                block_number,
                waited,
            });
        }
        tokio::time::sleep(settings.head_poll_period).await;
    }
}
