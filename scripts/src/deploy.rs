use cosmwasm_std::Coin;
use cw_orch::prelude::*;
use lottery::{msg::InstantiateMsg, Lottery};
use mock_nois_proxy::{msg::ExecuteMsgFns as _, MockNoisProxy};

use crate::NetworkConfig;

pub const LOTTERY_NAME: &str = "Lottery";

/// Uploads and instantiates the mock proxy, the sender being its admin
pub fn deploy_mocks<Chain: CwEnv>(
    chain: Chain,
    fee: Coin,
) -> anyhow::Result<MockNoisProxy<Chain>> {
    let proxy = MockNoisProxy::new(chain);
    proxy.upload()?;
    proxy.instantiate(
        &mock_nois_proxy::msg::InstantiateMsg { admin: None, fee },
        None,
        None,
    )?;
    log::info!("Mock nois proxy deployed at {}", proxy.address()?);
    Ok(proxy)
}

/// Uploads and instantiates the lottery.
/// On development chains `proxy` is the mock, and the lottery is registered as one of its consumers
pub fn deploy_lottery<Chain: CwEnv>(
    chain: Chain,
    config: &NetworkConfig,
    proxy: Option<&MockNoisProxy<Chain>>,
) -> anyhow::Result<Lottery<Chain>> {
    let nois_proxy_addr = match (proxy, config.nois_proxy) {
        (Some(proxy), _) => proxy.address()?.to_string(),
        (None, Some(addr)) => addr.to_string(),
        (None, None) => anyhow::bail!(
            "No randomness proxy for chain {}, deploy the mocks first",
            config.chain.chain_id
        ),
    };

    let lottery = Lottery::new(chain);
    lottery.upload()?;
    let funds = (!config.randomness_funding.is_empty())
        .then_some(config.randomness_funding.as_slice());
    lottery.instantiate(
        &InstantiateMsg {
            name: LOTTERY_NAME.to_string(),
            entrance_fee: config.entrance_fee.clone(),
            interval: config.interval,
            nois_proxy_addr,
            nois_proxy_coin: config.nois_proxy_coin.clone(),
        },
        None,
        funds,
    )?;
    let address = lottery.address()?;
    log::info!("Lottery deployed at {address}");

    if let Some(proxy) = proxy {
        proxy.add_consumer(address.to_string())?;
        log::info!("Lottery registered as a consumer of {}", proxy.address()?);
    }

    Ok(lottery)
}
