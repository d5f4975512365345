use cw_orch::daemon::Daemon;
use scripts::{deploy::deploy_mocks, network_from_env};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let network = network_from_env()?;

    if !network.development {
        log::info!(
            "{} is not a development chain, the real nois proxy is used",
            network.chain.chain_id
        );
        return Ok(());
    }

    log::info!("Local network detected! Deploying mocks...");
    let chain = Daemon::builder(network.chain.clone()).build()?;
    deploy_mocks(chain, network.nois_proxy_coin)?;
    log::info!("Mocks deployed!");

    Ok(())
}
