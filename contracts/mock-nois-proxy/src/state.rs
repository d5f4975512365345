use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const CONSUMERS: Map<&Addr, bool> = Map::new("consumers");
/// Last issued request id, 0 before the first request
pub const REQUEST_COUNT: Item<u64> = Item::new("request_count");
pub const REQUESTS: Map<u64, Request> = Map::new("requests");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Minimum payment for every request
    pub fee: Coin,
}

#[cw_serde]
pub struct Request {
    pub consumer: Addr,
    pub job_id: String,
    /// Set for `GetRandomnessAfter` requests
    pub after: Option<Timestamp>,
    pub requested_at: Timestamp,
}
