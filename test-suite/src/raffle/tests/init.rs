#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Addr, Coin, Timestamp};
    use cw_multi_test::Executor;
    use lottery::{
        error::ContractError,
        msg::{ConfigResponse, MigrateMsg, QueryMsg},
        state::LotteryState,
    };
    use utils::state::NATIVE_DENOM;

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, INTERVAL, LOTTERY_NAME, NOIS_DENOM, OWNER_ADDR},
            contract_boxes::contract_lottery,
            setup_lottery::{lottery_instantiate_msg, proper_lottery_instantiate},
        },
        raffle::setup::helpers::{lottery_state, players},
    };

    #[test]
    fn test_lottery_starts_open() {
        let (app, contracts) = proper_lottery_instantiate();
        let state = lottery_state(&app, &contracts);

        assert_eq!(state.state, LotteryState::Open);
        assert_eq!(state.round, 0);
        assert_eq!(state.number_of_players, 0);
        assert_eq!(state.last_timestamp, app.block_info().time);
        assert_eq!(state.pending_request, None);
        assert_eq!(state.recent_winner, None);
        assert!(players(&app, &contracts).is_empty());
    }

    #[test]
    fn test_config_queries() {
        let (app, contracts) = proper_lottery_instantiate();

        let config: ConfigResponse = app
            .wrap()
            .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Config {})
            .unwrap();
        assert_eq!(config.name, LOTTERY_NAME);
        assert_eq!(config.nois_proxy_addr, contracts.nois);

        let fee: Coin = app
            .wrap()
            .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::EntranceFee {})
            .unwrap();
        assert_eq!(fee, coin(ENTRANCE_FEE, NATIVE_DENOM));

        let interval: u64 = app
            .wrap()
            .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Interval {})
            .unwrap();
        assert_eq!(interval, INTERVAL);

        let last_timestamp: Timestamp = app
            .wrap()
            .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::LastTimestamp {})
            .unwrap();
        assert_eq!(last_timestamp, app.block_info().time);
    }

    #[test]
    fn test_invalid_instantiations() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let code_id = app.store_code(contract_lottery());
        let owner = Addr::unchecked(OWNER_ADDR);

        let mut msg = lottery_instantiate_msg(&contracts.nois);
        msg.nois_proxy_addr = "".to_string();
        let err = app
            .instantiate_contract(code_id, owner.clone(), &msg, &[], "lottery", None)
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            ContractError::InvalidProxyAddress.to_string()
        );

        let mut msg = lottery_instantiate_msg(&contracts.nois);
        msg.name = "x".repeat(51);
        let err = app
            .instantiate_contract(code_id, owner.clone(), &msg, &[], "lottery", None)
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            ContractError::InvalidName {}.to_string()
        );

        let mut msg = lottery_instantiate_msg(&contracts.nois);
        msg.entrance_fee = coin(ENTRANCE_FEE, NOIS_DENOM);
        let err = app
            .instantiate_contract(code_id, owner, &msg, &[], "lottery", None)
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            ContractError::ProxyFeeDenomConflict {
                denom: NOIS_DENOM.to_string()
            }
            .to_string()
        );
    }

    #[test]
    fn test_migrate() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let code_id = app.store_code(contract_lottery());
        app.migrate_contract(
            Addr::unchecked(OWNER_ADDR),
            contracts.lottery.clone(),
            &MigrateMsg {},
            code_id,
        )
        .unwrap();

        // state survives
        assert_eq!(lottery_state(&app, &contracts).state, LotteryState::Open);
    }
}
