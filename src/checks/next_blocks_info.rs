use crate::api::request::Request;
use crate::api::response::BlockResponse;
use crate::block_time;
use crate::checks::{CheckError, ensure_eq};
use crate::config::ChainSettings;
use crate::network::client::{Client, NodeClient};
use std::ops::RangeInclusive;

const NEXT_BLOCKS: RangeInclusive<i64> = 2..=11;

/// Blocks following the first one are produced exactly one interval apart
/// and each one links to its predecessor.
pub async fn run<C: Client>(
    node: &NodeClient<C>,
    settings: &ChainSettings,
) -> Result<(), CheckError> {
    let mut previous_block_id: Option<String> = None;
    for index in NEXT_BLOCKS {
        let expected_timestamp = block_time::advance(
            &settings.first_block_timestamp,
            settings.blocks_production_interval,
            (index - 1) as u32,
        )?;

        let response: BlockResponse = node.send(&Request::get_block(index)).await?;
        let block = response.result.ok_or(CheckError::MissingBlock(index))?;
        tracing::debug!(index, block_id = %block.block_id, "Received block");

        ensure_eq(
            "timestamp",
            expected_timestamp.as_str(),
            block.timestamp.as_str(),
        )?;
        if let Some(previous_block_id) = &previous_block_id {
            ensure_eq(
                "previous",
                previous_block_id.as_str(),
                block.previous.as_str(),
            )?;
        }
        previous_block_id = Some(block.block_id);
    }
    Ok(())
}
