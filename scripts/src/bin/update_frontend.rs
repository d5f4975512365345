use cw_orch::{daemon::Daemon, prelude::*};
use lottery::Lottery;
use scripts::{
    frontend::{frontend_from_env, update_frontend},
    network_from_env,
};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();

    let Some(frontend_dir) = frontend_from_env() else {
        log::info!("UPDATE_FRONTEND is not set, nothing to do");
        return Ok(());
    };

    let network = network_from_env()?;
    let chain = Daemon::builder(network.chain.clone()).build()?;
    let lottery = Lottery::new(chain);

    update_frontend(
        &frontend_dir,
        network.chain.chain_id,
        lottery.address()?.as_str(),
    )
}
