use cw_orch::{daemon::Daemon, prelude::*};
use mock_nois_proxy::MockNoisProxy;
use scripts::{
    deploy::deploy_lottery,
    frontend::{frontend_from_env, update_frontend},
    network_from_env,
    verify::verify,
};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let network = network_from_env()?;
    let chain = Daemon::builder(network.chain.clone()).build()?;

    // The mock address is read back from the deployment state written by deploy_mocks
    let proxy = network
        .development
        .then(|| MockNoisProxy::new(chain.clone()));
    let lottery = deploy_lottery(chain, &network, proxy.as_ref())?;

    if network.verify {
        log::info!("Verifying...");
        verify(&lottery);
    }

    if let Some(frontend_dir) = frontend_from_env() {
        update_frontend(
            &frontend_dir,
            network.chain.chain_id,
            lottery.address()?.as_str(),
        )?;
    }

    Ok(())
}
