use anyhow::bail;
use cosmwasm_std::{coin, Coin};
use cw_orch::{
    daemon::networks::LOCAL_JUNO,
    environment::{ChainInfo, ChainKind, NetworkInfo},
};

pub mod deploy;
pub mod frontend;
pub mod verify;

pub const STARGAZE_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "stargaze",
    pub_address_prefix: "stars",
    coin_type: 118u32,
};

/// https://github.com/cosmos/chain-registry/blob/master/testnets/stargazetestnet/chain.json
pub const ELGAFAR_1: ChainInfo = ChainInfo {
    kind: ChainKind::Testnet,
    chain_id: "elgafar-1",
    gas_denom: "ustars",
    gas_price: 0.04,
    grpc_urls: &["http://grpc-1.elgafar-1.stargaze-apis.com:26660"],
    network_info: STARGAZE_NETWORK,
    lcd_url: None,
    fcd_url: None,
};

/// Chain used when `CHAIN_ID` is not set
pub const DEFAULT_CHAIN_ID: &str = "testing";

/// nois proxy on the stargaze testnet
pub const ELGAFAR_NOIS_PROXY: &str =
    "stars1atcndw8yfrulzux6vg6wtw2c0u4y5wvy9423255h472f4x3gn8dq0v8j45";
pub const ELGAFAR_NOIS_DENOM: &str =
    "ibc/ACCAF790E082E772691A20B0208FB972AD3A01C2DE0D7E8C479CCABF6C9F39B1";

/// Everything a deployment needs to know about a network
#[derive(Clone)]
pub struct NetworkConfig {
    pub chain: ChainInfo,
    /// Development chains get the mock proxy instead of the real one
    pub development: bool,
    pub entrance_fee: Coin,
    /// Seconds between a settlement and the next upkeep
    pub interval: u64,
    /// Proxy address on live chains
    pub nois_proxy: Option<&'static str>,
    pub nois_proxy_coin: Coin,
    /// Sent along the instantiation to pay for future randomness requests
    pub randomness_funding: Vec<Coin>,
    pub verify: bool,
}

pub fn network_config(chain_id: &str) -> anyhow::Result<NetworkConfig> {
    let config = match chain_id {
        "testing" => NetworkConfig {
            chain: LOCAL_JUNO,
            development: true,
            entrance_fee: coin(10_000, LOCAL_JUNO.gas_denom),
            interval: 30,
            nois_proxy: None,
            nois_proxy_coin: coin(0, "unois"),
            randomness_funding: vec![],
            verify: false,
        },
        "elgafar-1" => NetworkConfig {
            chain: ELGAFAR_1,
            development: false,
            entrance_fee: coin(10_000, ELGAFAR_1.gas_denom),
            interval: 30,
            nois_proxy: Some(ELGAFAR_NOIS_PROXY),
            nois_proxy_coin: coin(1_000_000, ELGAFAR_NOIS_DENOM),
            // Enough for 5 rounds
            randomness_funding: vec![coin(5_000_000, ELGAFAR_NOIS_DENOM)],
            verify: true,
        },
        other => bail!("No network configuration for chain {other}"),
    };
    Ok(config)
}

/// Network selected by the `CHAIN_ID` env variable
pub fn network_from_env() -> anyhow::Result<NetworkConfig> {
    let chain_id = std::env::var("CHAIN_ID").unwrap_or_else(|_| DEFAULT_CHAIN_ID.to_string());
    network_config(&chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_chain_is_development() {
        let config = network_config("testing").unwrap();
        assert!(config.development);
        assert!(config.nois_proxy.is_none());
        assert_eq!(config.interval, 30);
        assert_eq!(config.entrance_fee.amount.u128(), 10_000);
    }

    #[test]
    fn live_proxy_fee_is_not_taken_from_the_prize() {
        let config = network_config("elgafar-1").unwrap();
        assert!(!config.development);
        assert_ne!(config.nois_proxy_coin.denom, config.entrance_fee.denom);
        assert_eq!(
            config.randomness_funding[0].denom,
            config.nois_proxy_coin.denom
        );
    }

    #[test]
    fn stargaze_testnet_connection() {
        let config = network_config("elgafar-1").unwrap();
        assert_eq!(config.chain.chain_id, "elgafar-1");
        assert_eq!(config.chain.kind, ChainKind::Testnet);
        assert_eq!(config.chain.network_info.pub_address_prefix, "stars");
        assert_eq!(config.entrance_fee.denom, "ustars");
    }

    #[test]
    fn unknown_chain_fails() {
        assert!(network_config("juno-1").is_err());
    }
}
