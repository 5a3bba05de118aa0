use crate::api::request::Request;
use crate::api::response::BlockResponse;
use crate::checks::{CheckError, ensure_eq};
use crate::network::client::{Client, NodeClient};
use rand::Rng;

pub async fn run<C: Client>(node: &NodeClient<C>) -> Result<(), CheckError> {
    let far_ahead = rand::thread_rng().gen_range(1_000_000..=1_000_000_000);
    for block_id in [-1, 0, far_ahead] {
        let response: BlockResponse = node.send(&Request::get_block(block_id)).await?;
        tracing::debug!(block_id, found = response.result.is_some(), "Requested nonexistent block");
        ensure_eq("id", 0, response.id)?;
        if response.result.is_some() {
            return Err(CheckError::UnexpectedBlock(block_id));
        }
    }
    Ok(())
}
