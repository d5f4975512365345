use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

pub fn custom_mock_app() -> App {
    App::default()
}

pub fn contract_lottery() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lottery::contract::execute,
        lottery::contract::instantiate,
        lottery::contract::query,
    )
    .with_reply(lottery::contract::reply)
    .with_migrate(lottery::contract::migrate);
    Box::new(contract)
}

pub fn contract_mock_nois_proxy() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_nois_proxy::contract::execute,
        mock_nois_proxy::contract::instantiate,
        mock_nois_proxy::contract::query,
    )
    .with_migrate(mock_nois_proxy::contract::migrate);
    Box::new(contract)
}
