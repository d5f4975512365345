use thiserror::Error;

use cosmwasm_std::{Coin, StdError, Timestamp, Uint128};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("{address} is not a registered consumer")]
    NotConsumer { address: String },

    #[error("Not enough funds sent to proxy, required {required}, sent {sent}")]
    NotEnoughFunds { required: Coin, sent: Uint128 },

    #[error("nonexistent request {request_id}")]
    NonexistentRequest { request_id: u64 },

    #[error("too early, the randomness is only available after {after}")]
    TooEarly { after: Timestamp },
}
