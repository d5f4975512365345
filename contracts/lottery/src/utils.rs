use cosmwasm_std::{Deps, Env, StdResult, Uint128};
use nois::ProxyExecuteMsg;
use randomness::job_id;
use utils::{state::into_cosmos_msg, types::CosmosMsg};

use crate::state::{Config, UpkeepStatus, CONFIG, LOTTERY};

/// The prize pool is whatever the contract holds in the entrance fee denom
pub fn prize_balance(deps: Deps, env: &Env, config: &Config) -> StdResult<Uint128> {
    Ok(deps
        .querier
        .query_balance(&env.contract.address, &config.entrance_fee.denom)?
        .amount)
}

/// Evaluates the upkeep conditions without touching the state.
/// Shared by the `CheckUpkeep` query and `PerformUpkeep`, so both always agree
pub fn upkeep_status(deps: Deps, env: &Env) -> StdResult<UpkeepStatus> {
    let config = CONFIG.load(deps.storage)?;
    let lottery = LOTTERY.load(deps.storage)?;
    let balance = prize_balance(deps, env, &config)?;

    let elapsed = env
        .block
        .time
        .seconds()
        .saturating_sub(lottery.last_timestamp.seconds());

    Ok(UpkeepStatus {
        is_open: lottery.is_open(),
        time_passed: elapsed >= config.interval,
        has_players: lottery.number_of_players > 0,
        has_balance: !balance.is_zero(),
        balance,
    })
}

pub fn get_nois_randomness(config: &Config, request_id: u64) -> StdResult<CosmosMsg> {
    // Paid from the contract balance, which is funded separately from the prize pool
    let funds = if config.nois_proxy_coin.amount.is_zero() {
        None
    } else {
        Some(vec![config.nois_proxy_coin.clone()])
    };

    // The job id is needed to know what randomness we are referring to upon reception in the callback.
    into_cosmos_msg(
        ProxyExecuteMsg::GetNextRandomness {
            job_id: job_id(request_id),
        },
        config.nois_proxy_addr.to_string(),
        funds,
    )
}
