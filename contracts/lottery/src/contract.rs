#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Reply, StdError,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;
use utils::{state::is_valid_name, types::Response};

use crate::{
    error::ContractError,
    execute::{execute_enter, execute_perform_upkeep, execute_receive_nois},
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{query_check_upkeep, query_config, query_entries_of, query_lottery, query_players},
    state::{load_player, Config, LotteryInfo, CONFIG, LOTTERY, ROUNDS},
};

pub const TRANSFER_REPLY_ID: u64 = 1;

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    if !is_valid_name(&msg.name) {
        return Err(ContractError::InvalidName {});
    }
    // the randomness fee is taken from the contract balance, it must not come out of the prize pool
    ensure!(
        msg.nois_proxy_coin.amount.is_zero()
            || msg.nois_proxy_coin.denom != msg.entrance_fee.denom,
        ContractError::ProxyFeeDenomConflict {
            denom: msg.entrance_fee.denom
        }
    );

    let config = Config {
        name: msg.name,
        entrance_fee: msg.entrance_fee,
        interval: msg.interval,
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
    };
    CONFIG.save(deps.storage, &config)?;
    LOTTERY.save(deps.storage, &LotteryInfo::new(&env))?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute_enter(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => execute_perform_upkeep(deps, env),
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        // Failing here aborts the whole settlement
        (TRANSFER_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::TransferFailed { reason })
        }
        (TRANSFER_REPLY_ID, SubMsgResult::Ok(_)) => Ok(Response::new()),
        _ => Err(ContractError::ContractBug {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::LotteryState {} => to_json_binary(&query_lottery(deps, env)?)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?)?,
        QueryMsg::Player { index } => {
            let round = LOTTERY.load(deps.storage)?.round;
            let player = load_player(deps.storage, round, index)
                .map_err(|e| StdError::generic_err(e.to_string()))?;
            to_json_binary(&player)?
        }
        QueryMsg::Players { start_after, limit } => {
            to_json_binary(&query_players(deps, start_after, limit)?)?
        }
        QueryMsg::NumberOfPlayers {} => {
            to_json_binary(&LOTTERY.load(deps.storage)?.number_of_players)?
        }
        QueryMsg::EntriesOf { address } => to_json_binary(&query_entries_of(deps, address)?)?,
        QueryMsg::RecentWinner {} => to_json_binary(&LOTTERY.load(deps.storage)?.recent_winner)?,
        QueryMsg::PendingRequest {} => {
            to_json_binary(&LOTTERY.load(deps.storage)?.pending_request)?
        }
        QueryMsg::Round { round } => to_json_binary(&ROUNDS.may_load(deps.storage, round)?)?,
        QueryMsg::EntranceFee {} => to_json_binary(&CONFIG.load(deps.storage)?.entrance_fee)?,
        QueryMsg::Interval {} => to_json_binary(&CONFIG.load(deps.storage)?.interval)?,
        QueryMsg::LastTimestamp {} => {
            to_json_binary(&LOTTERY.load(deps.storage)?.last_timestamp)?
        }
    };
    Ok(response)
}
