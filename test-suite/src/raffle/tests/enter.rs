#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Addr, Uint128};
    use cw_multi_test::Executor;
    use lottery::{
        error::ContractError,
        msg::{ExecuteMsg, QueryMsg},
    };
    use utils::state::NATIVE_DENOM;

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, NOIS_DENOM},
            helpers::assert_error,
            setup_accounts_and_block::{setup_lottery_players, INITIAL_BALANCE},
            setup_lottery::proper_lottery_instantiate,
        },
        raffle::setup::helpers::{balance, enter, lottery_state, players},
    };

    #[test]
    fn test_not_enough_value() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _) = setup_lottery_players(&mut app);

        assert_error(
            enter(&mut app, &contracts, &one, ENTRANCE_FEE - 1),
            ContractError::NotEnoughValue {
                required: coin(ENTRANCE_FEE, NATIVE_DENOM),
                sent: Uint128::new(ENTRANCE_FEE - 1),
            }
            .to_string(),
        );
        assert!(players(&app, &contracts).is_empty());
        assert_eq!(balance(&app, &one).u128(), INITIAL_BALANCE);
    }

    #[test]
    fn test_wrong_denom() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _) = setup_lottery_players(&mut app);
        app.sudo(cw_multi_test::SudoMsg::Bank(cw_multi_test::BankSudo::Mint {
            to_address: one.to_string(),
            amount: coins(ENTRANCE_FEE, NOIS_DENOM),
        }))
        .unwrap();

        let err = app
            .execute_contract(
                one,
                contracts.lottery.clone(),
                &ExecuteMsg::Enter {},
                &coins(ENTRANCE_FEE, NOIS_DENOM),
            )
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            format!("Generic error: Invalid payment sent. Expected {NATIVE_DENOM}, sent {ENTRANCE_FEE}{NOIS_DENOM}")
        );
        assert!(players(&app, &contracts).is_empty());
    }

    #[test]
    fn test_records_players() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _) = setup_lottery_players(&mut app);

        enter(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();

        let first: Addr = app
            .wrap()
            .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Player { index: 0 })
            .unwrap();
        assert_eq!(first, one);
        app.wrap()
            .query_wasm_smart::<Addr>(contracts.lottery.clone(), &QueryMsg::Player { index: 1 })
            .unwrap_err();

        // overpaying is fine, everything goes to the pot
        enter(&mut app, &contracts, &two, ENTRANCE_FEE * 2).unwrap();
        enter(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();

        assert_eq!(players(&app, &contracts), vec![one.clone(), two, one.clone()]);
        let state = lottery_state(&app, &contracts);
        assert_eq!(state.number_of_players, 3);
        assert_eq!(state.balance.u128(), ENTRANCE_FEE * 4);

        let entries: u32 = app
            .wrap()
            .query_wasm_smart(
                contracts.lottery.clone(),
                &QueryMsg::EntriesOf {
                    address: one.to_string(),
                },
            )
            .unwrap();
        assert_eq!(entries, 2);
        assert_eq!(balance(&app, &one).u128(), INITIAL_BALANCE - 2 * ENTRANCE_FEE);
    }

    #[test]
    fn test_enter_emits_event() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, _, _, _) = setup_lottery_players(&mut app);

        let res = enter(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
        assert!(wasm
            .attributes
            .iter()
            .any(|a| a.key == "action" && a.value == "enter_lottery"));
        assert!(wasm
            .attributes
            .iter()
            .any(|a| a.key == "player" && a.value == one.as_str()));
    }

    #[test]
    fn test_players_pagination() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, three, four) = setup_lottery_players(&mut app);
        for player in [&one, &two, &three, &four] {
            enter(&mut app, &contracts, player, ENTRANCE_FEE).unwrap();
        }

        let page: Vec<Addr> = app
            .wrap()
            .query_wasm_smart(
                contracts.lottery.clone(),
                &QueryMsg::Players {
                    start_after: Some(1),
                    limit: Some(2),
                },
            )
            .unwrap();
        assert_eq!(page, vec![three, four]);
    }
}
