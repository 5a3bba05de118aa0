use serde_json::Value;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BlockResponse {
    pub id: u64,
    /// `null` when the requested block does not exist.
    #[serde(default)]
    pub result: Option<Block>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub previous: String,
    pub timestamp: String,
    pub witness: String,
    pub transaction_merkle_root: String,
    pub extensions: Vec<Value>,
    pub witness_signature: String,
    pub transactions: Vec<Value>,
    pub block_id: String,
    pub signing_key: String,
    pub transaction_ids: Vec<String>,
}

impl Block {
    /// The first block points at an all-zero block id.
    pub fn has_no_previous(&self) -> bool {
        !self.previous.is_empty() && self.previous.chars().all(|c| c == '0')
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct DynamicGlobalPropertiesResponse {
    pub id: u64,
    pub result: DynamicGlobalProperties,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct DynamicGlobalProperties {
    pub id: u64,
    pub head_block_number: u64,
    pub head_block_id: String,
    pub time: String,
    pub current_witness: String,
    pub total_supply: String,
    pub circulating_capital: String,
    pub total_scorumpower: String,
    pub median_chain_props: MedianChainProps,
    pub majority_version: String,
    pub current_aslot: u64,
    pub recent_slots_filled: String,
    pub participation_count: u64,
    pub last_irreversible_block_num: u64,
    pub vote_power_reserve_rate: u64,
    pub average_block_size: u64,
    pub current_reserve_ratio: u64,
    pub max_virtual_bandwidth: String,
    pub registration_pool_balance: String,
    pub fund_budget_balance: String,
    pub reward_pool_balance: String,
    pub content_reward_balance: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct MedianChainProps {
    pub account_creation_fee: String,
    // Reported as a number by some node versions and as a string by others.
    pub maximum_block_size: Value,
}
