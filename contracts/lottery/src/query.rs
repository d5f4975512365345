use cosmwasm_std::{Addr, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;
use utils::state::page_limit;

use crate::{
    msg::{ConfigResponse, LotteryResponse, UpkeepResponse},
    state::{CONFIG, ENTRIES, LOTTERY, PLAYERS},
    utils::{prize_balance, upkeep_status},
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        name: config.name,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        nois_proxy_addr: config.nois_proxy_addr,
        nois_proxy_coin: config.nois_proxy_coin,
    })
}

pub fn query_lottery(deps: Deps, env: Env) -> StdResult<LotteryResponse> {
    let config = CONFIG.load(deps.storage)?;
    let lottery = LOTTERY.load(deps.storage)?;
    Ok(LotteryResponse {
        state: lottery.state,
        round: lottery.round,
        number_of_players: lottery.number_of_players,
        last_timestamp: lottery.last_timestamp,
        pending_request: lottery.pending_request,
        recent_winner: lottery.recent_winner,
        balance: prize_balance(deps, &env, &config)?,
    })
}

pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<UpkeepResponse> {
    let status = upkeep_status(deps, &env)?;
    Ok(UpkeepResponse {
        upkeep_needed: status.upkeep_needed(),
        is_open: status.is_open,
        time_passed: status.time_passed,
        has_players: status.has_players,
        has_balance: status.has_balance,
    })
}

/// Players of the current round, in entry order
pub fn query_players(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let round = LOTTERY.load(deps.storage)?.round;
    let limit = page_limit(limit);
    let start = start_after.map(Bound::exclusive);

    PLAYERS
        .prefix(round)
        .range(deps.storage, start, None, Order::Ascending)
        .map(|r| r.map(|(_slot, player)| player))
        .take(limit)
        .collect()
}

pub fn query_entries_of(deps: Deps, address: String) -> StdResult<u32> {
    let address = deps.api.addr_validate(&address)?;
    let round = LOTTERY.load(deps.storage)?.round;
    Ok(ENTRIES
        .may_load(deps.storage, (round, &address))?
        .unwrap_or_default())
}
