use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};
use utils::state::NATIVE_DENOM;

use super::constants::{KEEPER_ADDR, NOIS_DENOM, OWNER_ADDR};

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

pub fn mint(router: &mut App, to: &Addr, amount: u128, denom: &str) {
    router
        .sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: to.to_string(),
            amount: vec![coin(amount, denom)],
        }))
        .unwrap();
}

pub fn setup_accounts(router: &mut App) -> (Addr, Addr) {
    let owner = Addr::unchecked(OWNER_ADDR);
    let keeper = Addr::unchecked(KEEPER_ADDR);

    mint(router, &owner, INITIAL_BALANCE, NATIVE_DENOM);
    mint(router, &owner, INITIAL_BALANCE, NOIS_DENOM);
    mint(router, &keeper, INITIAL_BALANCE, NATIVE_DENOM);

    (owner, keeper)
}

pub fn setup_lottery_players(router: &mut App) -> (Addr, Addr, Addr, Addr) {
    let players = ["addr-one", "addr-two", "addr-three", "addr-four"].map(Addr::unchecked);
    for player in &players {
        mint(router, player, INITIAL_BALANCE, NATIVE_DENOM);
    }
    let [one, two, three, four] = players;
    (one, two, three, four)
}
