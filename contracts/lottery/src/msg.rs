use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use nois::NoisCallback;

use crate::state::{LotteryState, RoundResult};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub entrance_fee: Coin,
    /// In seconds
    pub interval: u64,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
}

#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    /// Buys one slot in the current round
    #[cw_orch(payable)]
    Enter {},
    /// Closes the round and requests randomness. Anyone can call it once `CheckUpkeep` says so
    PerformUpkeep {},
    /// Randomness delivered by the nois proxy
    NoisReceive { callback: NoisCallback },
}

#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(LotteryResponse)]
    LotteryState {},
    #[returns(UpkeepResponse)]
    CheckUpkeep {},
    #[returns(Addr)]
    Player { index: u32 },
    #[returns(Vec<Addr>)]
    Players {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(u32)]
    NumberOfPlayers {},
    #[returns(u32)]
    EntriesOf { address: String },
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Option<u64>)]
    PendingRequest {},
    #[returns(Option<RoundResult>)]
    Round { round: u64 },
    #[returns(Coin)]
    EntranceFee {},
    #[returns(u64)]
    Interval {},
    #[returns(Timestamp)]
    LastTimestamp {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub entrance_fee: Coin,
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    pub nois_proxy_coin: Coin,
}

#[cw_serde]
pub struct LotteryResponse {
    pub state: LotteryState,
    pub round: u64,
    pub number_of_players: u32,
    pub last_timestamp: Timestamp,
    pub pending_request: Option<u64>,
    pub recent_winner: Option<Addr>,
    pub balance: Uint128,
}

#[cw_serde]
pub struct UpkeepResponse {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
