pub const OWNER_ADDR: &str = "owner";
pub const KEEPER_ADDR: &str = "keeper";
pub const LOTTERY_NAME: &str = "lottery contract name";

/// 0.01 of a token
pub const ENTRANCE_FEE: u128 = 10_000;
pub const INTERVAL: u64 = 30;

pub const NOIS_DENOM: &str = "unois";
pub const NOIS_AMOUNT: u128 = 1_000_000;
/// Randomness fee balance given to the lottery, enough for 10 rounds
pub const NOIS_FUNDING: u128 = 10 * NOIS_AMOUNT;
