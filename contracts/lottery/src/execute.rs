use cosmwasm_std::{coin, ensure, ensure_eq, BankMsg, DepsMut, Env, MessageInfo};
use nois::NoisCallback;
use randomness::{parse_job_id, random_word, winner_index};
use utils::{
    payment::paid_amount,
    types::{Response, SubMsg},
};

use crate::{
    contract::TRANSFER_REPLY_ID,
    error::ContractError,
    state::{
        load_player, LotteryState, RoundResult, CONFIG, ENTRIES, LOTTERY, PLAYERS, ROUNDS,
    },
    utils::{get_nois_randomness, prize_balance, upkeep_status},
};

/// Buy one slot in the current round.
/// The same address can enter several times, each entry being a separate slot
pub fn execute_enter(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    let sent = paid_amount(&info, &config.entrance_fee.denom)?;
    if sent < config.entrance_fee.amount {
        return Err(ContractError::NotEnoughValue {
            required: config.entrance_fee,
            sent,
        });
    }
    ensure!(lottery.is_open(), ContractError::NotOpen {});

    PLAYERS.save(
        deps.storage,
        (lottery.round, lottery.number_of_players),
        &info.sender,
    )?;
    ENTRIES.update::<_, ContractError>(deps.storage, (lottery.round, &info.sender), |x| {
        Ok(x.unwrap_or_default() + 1)
    })?;
    lottery.number_of_players += 1;
    LOTTERY.save(deps.storage, &lottery)?;

    Ok(Response::new()
        .add_attribute("action", "enter_lottery")
        .add_attribute("player", info.sender)
        .add_attribute("round", lottery.round.to_string())
        .add_attribute("slot", (lottery.number_of_players - 1).to_string())
        .add_attribute("timestamp", env.block.time.to_string()))
}

/// Closes the current round and asks the proxy for randomness.
/// Anyone can trigger it, the contract alone decides whether it is time to do so
pub fn execute_perform_upkeep(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    let status = upkeep_status(deps.as_ref(), &env)?;
    if !status.upkeep_needed() {
        return Err(ContractError::UpkeepNotNeeded {
            balance: status.balance,
            players: lottery.number_of_players,
            state: lottery.state,
            is_open: status.is_open,
        });
    }

    let request_id = lottery.last_request_id + 1;
    lottery.last_request_id = request_id;
    lottery.pending_request = Some(request_id);
    lottery.state = LotteryState::Calculating;
    LOTTERY.save(deps.storage, &lottery)?;

    let msg = get_nois_randomness(&config, request_id)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "request_winner")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("round", lottery.round.to_string()))
}

/// Settles the round with the randomness sent back by the proxy.
/// The prize transfer is a submessage: if it fails, the reply turns it into an error
/// and every change made here is reverted with the transaction
pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness by sending the randomness directly to this contract
    ensure_eq!(
        info.sender,
        config.nois_proxy_addr,
        ContractError::UnauthorizedReceive
    );

    // Stale, forged or unknown jobs are refused
    let request_id = parse_job_id(&callback.job_id)
        .filter(|id| lottery.pending_request == Some(*id))
        .ok_or_else(|| ContractError::UnknownRequest {
            job_id: callback.job_id.clone(),
        })?;

    let word = random_word(&callback.randomness).map_err(|_| ContractError::InvalidRandomness)?;
    let index = winner_index(word, lottery.number_of_players)
        .map_err(|_| ContractError::ContractBug {})?;
    let winner = load_player(deps.storage, lottery.round, index)?;

    let prize = prize_balance(deps.as_ref(), &env, &config)?;
    let denom = config.entrance_fee.denom;

    ROUNDS.save(
        deps.storage,
        lottery.round,
        &RoundResult {
            winner: winner.clone(),
            prize: coin(prize.u128(), denom.clone()),
            request_id,
            number_of_players: lottery.number_of_players,
            settled_at: env.block.time,
        },
    )?;

    let settled_round = lottery.round;
    lottery.recent_winner = Some(winner.clone());
    lottery.round += 1;
    lottery.number_of_players = 0;
    lottery.last_timestamp = env.block.time;
    lottery.pending_request = None;
    lottery.state = LotteryState::Open;
    LOTTERY.save(deps.storage, &lottery)?;

    let mut response = Response::new();
    if !prize.is_zero() {
        response = response.add_submessage(SubMsg::reply_on_error(
            BankMsg::Send {
                to_address: winner.to_string(),
                amount: vec![coin(prize.u128(), denom)],
            },
            TRANSFER_REPLY_ID,
        ));
    }

    Ok(response
        .add_attribute("action", "winner_picked")
        .add_attribute("winner", winner)
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("round", settled_round.to_string())
        .add_attribute("prize", prize.to_string()))
}
