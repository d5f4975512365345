use thiserror::Error;

use cosmwasm_std::{Coin, StdError, Uint128};

use crate::state::LotteryState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("Invalid Name")]
    InvalidName {},

    #[error("The randomness fee can't be paid in the prize denom {denom}")]
    ProxyFeeDenomConflict { denom: String },

    #[error("Not enough funds sent to enter the lottery. Required : {required}, sent : {sent}")]
    NotEnoughValue { required: Coin, sent: Uint128 },

    #[error("The lottery is not open")]
    NotOpen {},

    #[error("Upkeep not needed. Balance : {balance}, players : {players}, state : {state:?}, open : {is_open}")]
    UpkeepNotNeeded {
        balance: Uint128,
        players: u32,
        state: LotteryState,
        is_open: bool,
    },

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness
    #[error("Unauthorized Receive execution")]
    UnauthorizedReceive,

    #[error("No pending randomness request matches job {job_id}")]
    UnknownRequest { job_id: String },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Transfer to the winner failed: {reason}")]
    TransferFailed { reason: String },

    #[error("No player at index {index}")]
    PlayerNotFound { index: u32 },

    #[error("An unplanned bug just happened :/")]
    ContractBug {},
}
