use cw_orch::daemon::Daemon;
use lottery::{msg::ExecuteMsgFns as _, Lottery};
use scripts::network_from_env;

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let network = network_from_env()?;
    let chain = Daemon::builder(network.chain.clone()).build()?;

    let lottery = Lottery::new(chain);
    lottery.enter(&[network.entrance_fee.clone()])?;
    log::info!("Entered the lottery with {}", network.entrance_fee);

    Ok(())
}
