use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, Executor};
use lottery::msg::InstantiateMsg;
use utils::state::NATIVE_DENOM;

use super::{
    constants::{
        ENTRANCE_FEE, INTERVAL, LOTTERY_NAME, NOIS_AMOUNT, NOIS_DENOM, NOIS_FUNDING, OWNER_ADDR,
    },
    contract_boxes::{contract_lottery, contract_mock_nois_proxy, custom_mock_app},
    helpers::setup_block_time,
    setup_accounts_and_block::mint,
};

pub struct LotteryContracts {
    pub lottery: Addr,
    pub nois: Addr,
}

pub fn lottery_instantiate_msg(nois_proxy_addr: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        name: LOTTERY_NAME.to_string(),
        entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
        interval: INTERVAL,
        nois_proxy_addr: nois_proxy_addr.to_string(),
        nois_proxy_coin: coin(NOIS_AMOUNT, NOIS_DENOM),
    }
}

/// Mock proxy and lottery, the lottery being a funded consumer of the proxy
pub fn proper_lottery_instantiate() -> (App, LotteryContracts) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, 1647032400000000000, Some(10000));
    let owner = Addr::unchecked(OWNER_ADDR);

    let nois_code_id = app.store_code(contract_mock_nois_proxy());
    let lottery_code_id = app.store_code(contract_lottery());

    let nois = app
        .instantiate_contract(
            nois_code_id,
            owner.clone(),
            &mock_nois_proxy::msg::InstantiateMsg {
                admin: None,
                fee: coin(NOIS_AMOUNT, NOIS_DENOM),
            },
            &[],
            "nois",
            None,
        )
        .unwrap();

    let lottery = app
        .instantiate_contract(
            lottery_code_id,
            owner.clone(),
            &lottery_instantiate_msg(&nois),
            &[],
            "lottery",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner,
        nois.clone(),
        &mock_nois_proxy::msg::ExecuteMsg::AddConsumer {
            address: lottery.to_string(),
        },
        &[],
    )
    .unwrap();
    mint(&mut app, &lottery, NOIS_FUNDING, NOIS_DENOM);

    (app, LotteryContracts { lottery, nois })
}
