use cosmwasm_std::{MessageInfo, StdError, StdResult, Uint128};

/// Returns the amount of `denom` sent along with the message.
/// Sending nothing is fine (the amount is zero), but any coin in another denom is refused
/// so that stray funds never get locked in the contract.
pub fn paid_amount(msg_info: &MessageInfo, denom: &str) -> StdResult<Uint128> {
    if let Some(other) = msg_info.funds.iter().find(|c| c.denom != denom) {
        return Err(StdError::generic_err(format!(
            "Invalid payment sent. Expected {}, sent {}",
            denom, other
        )));
    }

    Ok(msg_info
        .funds
        .iter()
        .fold(Uint128::zero(), |acc, c| acc + c.amount))
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, testing::mock_info};

    use super::*;

    #[test]
    fn nothing_sent_is_zero() {
        let info = mock_info("player", &[]);
        assert_eq!(paid_amount(&info, "ustars").unwrap(), Uint128::zero());
    }

    #[test]
    fn sums_matching_coins() {
        let info = mock_info("player", &[coin(4, "ustars"), coin(6, "ustars")]);
        assert_eq!(paid_amount(&info, "ustars").unwrap(), Uint128::new(10));
    }

    #[test]
    fn other_denoms_are_refused() {
        let info = mock_info("player", &coins(10, "uatom"));
        let err = paid_amount(&info, "ustars").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Generic error: Invalid payment sent. Expected ustars, sent 10uatom"
        );
    }
}
