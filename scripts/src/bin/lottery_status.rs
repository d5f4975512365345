use cw_orch::daemon::Daemon;
use lottery::{msg::QueryMsgFns as _, Lottery};
use scripts::network_from_env;

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let network = network_from_env()?;
    let chain = Daemon::builder(network.chain.clone()).build()?;

    let lottery = Lottery::new(chain);
    let state = lottery.lottery_state()?;
    let upkeep = lottery.check_upkeep()?;

    log::info!(
        "Round {} is {:?} with {} players and a balance of {}",
        state.round,
        state.state,
        state.number_of_players,
        state.balance
    );
    log::info!("Upkeep needed: {}", upkeep.upkeep_needed);
    if let Some(winner) = state.recent_winner {
        log::info!("Most recent winner: {winner}");
    }

    Ok(())
}
