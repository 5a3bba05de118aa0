use crate::api::request::Request;
use crate::api::response::BlockResponse;
use crate::checks::{CheckError, ensure_eq};
use crate::config::ChainSettings;
use crate::network::client::{Client, NodeClient};

const FIRST_BLOCK: i64 = 1;

pub async fn run<C: Client>(
    node: &NodeClient<C>,
    settings: &ChainSettings,
) -> Result<(), CheckError> {
    let response: BlockResponse = node.send(&Request::get_block(FIRST_BLOCK)).await?;
    let block = response.result.ok_or(CheckError::MissingBlock(FIRST_BLOCK))?;
    tracing::debug!(block_id = %block.block_id, timestamp = %block.timestamp, "Received the first block");

    ensure_eq(
        "timestamp",
        settings.first_block_timestamp.as_str(),
        block.timestamp.as_str(),
    )?;
    if !block.has_no_previous() {
        return Err(CheckError::Mismatch {
            field: "previous",
            expected: "zero block id".to_string(),
            actual: block.previous,
        });
    }
    Ok(())
}
