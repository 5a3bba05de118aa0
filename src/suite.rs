use crate::checks::{
    CheckError, bad_request, block_generation, first_block_info, next_blocks_info,
    nonexistent_block,
};
use crate::config::{ChainSettings, Config};
use crate::network::client::{Client, NodeClient};
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;

#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[value(rename_all = "snake_case")]
pub enum Check {
    FirstBlockInfo,
    NextBlocksInfo,
    BlocksGenerationWithInterval,
    BlockInfoNonexistentId,
    BlockInfoNoId,
    BlockInfoInvalidId,
    BlockInfoInvalidMethod,
    RequestNoParams,
}

impl Check {
    pub const ALL: [Check; 8] = [
        Check::FirstBlockInfo,
        Check::NextBlocksInfo,
        Check::BlocksGenerationWithInterval,
        Check::BlockInfoNonexistentId,
        Check::BlockInfoNoId,
        Check::BlockInfoInvalidId,
        Check::BlockInfoInvalidMethod,
        Check::RequestNoParams,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Check::FirstBlockInfo => "first_block_info",
            Check::NextBlocksInfo => "next_blocks_info",
            Check::BlocksGenerationWithInterval => "blocks_generation_with_interval",
            Check::BlockInfoNonexistentId => "block_info_nonexistent_id",
            Check::BlockInfoNoId => "block_info_no_id",
            Check::BlockInfoInvalidId => "block_info_invalid_id",
            Check::BlockInfoInvalidMethod => "block_info_invalid_method",
            Check::RequestNoParams => "request_no_params",
        }
    }

    pub async fn run<C: Client>(
        self,
        node: &NodeClient<C>,
        settings: &ChainSettings,
    ) -> Result<(), CheckError> {
        match self {
            Check::FirstBlockInfo => first_block_info::run(node, settings).await,
            Check::NextBlocksInfo => next_blocks_info::run(node, settings).await,
            Check::BlocksGenerationWithInterval => block_generation::run(node, settings).await,
            Check::BlockInfoNonexistentId => nonexistent_block::run(node).await,
            Check::BlockInfoNoId => bad_request::block_info_no_id(node).await,
            Check::BlockInfoInvalidId => bad_request::block_info_invalid_id(node).await,
            Check::BlockInfoInvalidMethod => bad_request::block_info_invalid_method(node).await,
            Check::RequestNoParams => bad_request::request_no_params(node).await,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub node: String,
    pub check: Check,
    pub result: Result<(), CheckError>,
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Runs the selected checks (all of them when `selection` is empty) against
/// every configured node. Nodes are checked concurrently, the checks of a
/// single node one after another.
pub async fn run_suite<C: Client>(config: &Config, client: C, selection: &[Check]) -> Report {
    let client = Arc::new(client);
    let settings = config.chain_settings();
    let checks = if selection.is_empty() {
        Check::ALL.to_vec()
    } else {
        selection.to_vec()
    };

    tracing::info!(nodes = ?config.nodes, checks = checks.len(), "Running checks");
    let node_runs = config.nodes.iter().map(|node| {
        let node_client = NodeClient::new(Arc::clone(&client), config.node_url(node));
        run_node(node.clone(), node_client, &settings, &checks)
    });

    let outcomes = join_all(node_runs).await.into_iter().flatten().collect();
    Report { outcomes }
}

#[tracing::instrument(skip(node_client, settings, checks))]
async fn run_node<C: Client>(
    node: String,
    node_client: NodeClient<C>,
    settings: &ChainSettings,
    checks: &[Check],
) -> Vec<Outcome> {
    tracing::debug!(url = node_client.url(), "Checking node");
    let mut outcomes = Vec::with_capacity(checks.len());
    for &check in checks {
        let result = check.run(&node_client, settings).await;
        match &result {
            Ok(()) => tracing::info!(%check, "Check passed"),
            Err(error) => tracing::error!(%check, %error, "Check failed"),
        }
        outcomes.push(Outcome {
            node: node.clone(),
            check,
            result,
        });
    }
    outcomes
}
