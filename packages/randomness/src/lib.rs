use cosmwasm_std::{HexBinary, StdError, StdResult, Uint128, Uint256};

/// Prefix of the job ids the lottery sends to the randomness proxy
pub const JOB_ID_PREFIX: &str = "lottery-";

/// Randomness handed out by the mock proxy when none is specified
pub const DEFAULT_RANDOMNESS: &str =
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa115";

pub fn job_id(request_id: u64) -> String {
    format!("{JOB_ID_PREFIX}{request_id}")
}

/// Reads the request id back from a job id.
/// Returns None for anything that was not produced by [`job_id`].
pub fn parse_job_id(job_id: &str) -> Option<u64> {
    let id = job_id.strip_prefix(JOB_ID_PREFIX)?;
    // "lottery-007" would parse, but was never issued
    if id.starts_with('0') && id.len() > 1 {
        return None;
    }
    id.parse().ok()
}

/// The 32 randomness bytes read as a big-endian 256 bit word
pub fn random_word(randomness: &HexBinary) -> StdResult<Uint256> {
    let bytes: [u8; 32] = randomness.to_array()?;
    Ok(Uint256::from_be_bytes(bytes))
}

/// Index of the winning slot among `n` entries: `word mod n`
pub fn winner_index(word: Uint256, n: u32) -> StdResult<u32> {
    if n == 0 {
        return Err(StdError::generic_err("Cannot pick a winner among 0 entries"));
    }
    let index = word % Uint256::from(u128::from(n));
    let index = Uint128::try_from(index)?;
    u32::try_from(index.u128()).map_err(|_| StdError::generic_err("Winner index overflow"))
}
