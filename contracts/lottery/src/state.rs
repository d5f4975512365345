use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Env, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

pub const CONFIG: Item<Config> = Item::new("config");
pub const LOTTERY: Item<LotteryInfo> = Item::new("lottery");
/// (round, slot) -> player. A new round starts with an empty list.
pub const PLAYERS: Map<(u64, u32), Addr> = Map::new("players");
/// (round, player) -> number of slots held in that round
pub const ENTRIES: Map<(u64, &Addr), u32> = Map::new("entries");
pub const ROUNDS: Map<u64, RoundResult> = Map::new("rounds");

#[cw_serde]
pub struct Config {
    /// The name of the lottery
    pub name: String,
    /// Minimum payment to enter. Its denom is also the denom of the prize pool
    pub entrance_fee: Coin,
    /// Seconds that must pass after a settlement before upkeep becomes possible
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    /// Paid to the proxy for every randomness request
    pub nois_proxy_coin: Coin,
}

#[cw_serde]
pub enum LotteryState {
    Open,
    Calculating,
}

#[cw_serde]
pub struct LotteryInfo {
    pub state: LotteryState,
    /// Number of settled rounds, also the key prefix of the current players
    pub round: u64,
    pub number_of_players: u32,
    pub last_timestamp: Timestamp,
    pub pending_request: Option<u64>,
    /// Last request id handed out, ids start at 1
    pub last_request_id: u64,
    pub recent_winner: Option<Addr>,
}

impl LotteryInfo {
    pub fn new(env: &Env) -> Self {
        Self {
            state: LotteryState::Open,
            round: 0,
            number_of_players: 0,
            last_timestamp: env.block.time,
            pending_request: None,
            last_request_id: 0,
            recent_winner: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == LotteryState::Open
    }
}

#[cw_serde]
pub struct RoundResult {
    pub winner: Addr,
    pub prize: Coin,
    pub request_id: u64,
    pub number_of_players: u32,
    pub settled_at: Timestamp,
}

/// Snapshot of the four conditions gating upkeep
#[cw_serde]
pub struct UpkeepStatus {
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
    pub balance: Uint128,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.time_passed && self.has_players && self.has_balance
    }
}

pub fn load_player(storage: &dyn Storage, round: u64, index: u32) -> Result<Addr, ContractError> {
    PLAYERS
        .may_load(storage, (round, index))?
        .ok_or(ContractError::PlayerNotFound { index })
}
