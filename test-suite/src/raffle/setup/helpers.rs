use anyhow::Error;
use cosmwasm_std::{coins, Addr, HexBinary, Uint128};
use cw_multi_test::{App, AppResponse, Executor};
use lottery::{
    msg::{ExecuteMsg, LotteryResponse, QueryMsg, UpkeepResponse},
    state::RoundResult,
};
use mock_nois_proxy::msg::RequestResponse;
use nois::NoisCallback;
use utils::state::NATIVE_DENOM;

use crate::common_setup::{constants::KEEPER_ADDR, setup_lottery::LotteryContracts};

pub fn enter(
    app: &mut App,
    contracts: &LotteryContracts,
    player: &Addr,
    amount: u128,
) -> Result<AppResponse, Error> {
    app.execute_contract(
        player.clone(),
        contracts.lottery.clone(),
        &ExecuteMsg::Enter {},
        &coins(amount, NATIVE_DENOM),
    )
}

pub fn perform_upkeep(app: &mut App, contracts: &LotteryContracts) -> Result<AppResponse, Error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        contracts.lottery.clone(),
        &ExecuteMsg::PerformUpkeep {},
        &[],
    )
}

/// Asks the mock proxy to answer one of its pending requests
pub fn fulfill_randomness(
    app: &mut App,
    contracts: &LotteryContracts,
    request_id: u64,
    randomness: Option<HexBinary>,
) -> Result<AppResponse, Error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        contracts.nois.clone(),
        &mock_nois_proxy::msg::ExecuteMsg::FulfillRandomness {
            request_id,
            randomness,
        },
        &[],
    )
}

/// Delivers a callback straight from the proxy address, bypassing its request book
pub fn nois_receive(
    app: &mut App,
    contracts: &LotteryContracts,
    job_id: &str,
    randomness: HexBinary,
) -> Result<AppResponse, Error> {
    let published = app.block_info().time;
    app.execute_contract(
        contracts.nois.clone(),
        contracts.lottery.clone(),
        &ExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id: job_id.to_string(),
                published,
                randomness,
            },
        },
        &[],
    )
}

/// 32 bytes of randomness ending with `last`, so that the word is `last`
pub fn small_randomness(last: u8) -> HexBinary {
    let mut bytes = [0u8; 32];
    bytes[31] = last;
    HexBinary::from(bytes.to_vec())
}

pub fn lottery_state(app: &App, contracts: &LotteryContracts) -> LotteryResponse {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::LotteryState {})
        .unwrap()
}

pub fn check_upkeep(app: &App, contracts: &LotteryContracts) -> UpkeepResponse {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::CheckUpkeep {})
        .unwrap()
}

pub fn players(app: &App, contracts: &LotteryContracts) -> Vec<Addr> {
    app.wrap()
        .query_wasm_smart(
            contracts.lottery.clone(),
            &QueryMsg::Players {
                start_after: None,
                limit: None,
            },
        )
        .unwrap()
}

pub fn round_result(app: &App, contracts: &LotteryContracts, round: u64) -> Option<RoundResult> {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Round { round })
        .unwrap()
}

pub fn proxy_requests(app: &App, contracts: &LotteryContracts) -> Vec<RequestResponse> {
    app.wrap()
        .query_wasm_smart(
            contracts.nois.clone(),
            &mock_nois_proxy::msg::QueryMsg::Requests {
                start_after: None,
                limit: None,
            },
        )
        .unwrap()
}

pub fn balance(app: &App, address: &Addr) -> Uint128 {
    app.wrap()
        .query_balance(address, NATIVE_DENOM)
        .unwrap()
        .amount
}
