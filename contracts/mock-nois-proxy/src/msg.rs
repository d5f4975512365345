use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp};
use nois::NoisCallback;

use crate::state::Request;

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the sender
    pub admin: Option<String>,
    pub fee: Coin,
}

/// The first two variants serialize exactly like `nois::ProxyExecuteMsg`,
/// so consumers talk to this contract as they would to the real proxy
#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    #[cw_orch(payable)]
    GetNextRandomness { job_id: String },
    #[cw_orch(payable)]
    GetRandomnessAfter { after: Timestamp, job_id: String },
    AddConsumer { address: String },
    RemoveConsumer { address: String },
    /// Answers a pending request. Uses a fixed randomness when none is given
    FulfillRandomness {
        request_id: u64,
        randomness: Option<HexBinary>,
    },
}

#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Option<Request>)]
    Request { request_id: u64 },
    #[returns(Vec<RequestResponse>)]
    Requests {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(bool)]
    IsConsumer { address: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub fee: Coin,
    pub last_request_id: u64,
}

#[cw_serde]
pub struct RequestResponse {
    pub request_id: u64,
    pub request: Request,
}

/// What the consumer receives
#[cw_serde]
pub enum ReceiverExecuteMsg {
    NoisReceive { callback: NoisCallback },
}

#[cw_serde]
pub struct MigrateMsg {}
