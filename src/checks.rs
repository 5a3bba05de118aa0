pub mod bad_request;
pub mod block_generation;
pub mod first_block_info;
pub mod next_blocks_info;
pub mod nonexistent_block;

use crate::block_time::BlockTimeError;
use crate::network::client::ClientError;
use std::fmt::Display;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("Client error: {0}")]
    ClientError(#[from] ClientError),
    #[error("Unexpected {field}: expected {expected}, got {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    #[error("Block {0} has no result")]
    MissingBlock(i64),
    #[error("Block {0} should not exist but was returned")]
    UnexpectedBlock(i64),
    #[error("Block time error: {0}")]
    BlockTimeError(#[from] BlockTimeError),
    #[error("Head block stayed at {block_number} for {waited:?}")]
    HeadNotAdvanced { block_number: u64, waited: Duration },
}

pub(crate) fn ensure_eq<T>(field: &'static str, expected: T, actual: T) -> Result<(), CheckError>
where
    T: PartialEq + Display,
{
    if expected != actual {
        return Err(CheckError::Mismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}
