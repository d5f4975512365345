use std::{thread::sleep, time::Duration};

use cw_orch::{daemon::Daemon, prelude::*};
use lottery::{
    msg::{ExecuteMsgFns as _, QueryMsgFns as _},
    Lottery,
};
use scripts::network_from_env;

const POLL_INTERVAL: Duration = Duration::from_secs(10);
const MAX_POLLS: u32 = 60;

/// Enters the live lottery and waits for the round to be settled by the randomness proxy.
/// Acts as the keeper when nobody else triggers the upkeep
pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let network = network_from_env()?;
    anyhow::ensure!(
        !network.development,
        "Staging runs against a live network only"
    );
    let chain = Daemon::builder(network.chain.clone()).build()?;
    let sender = chain.sender_addr();

    let lottery = Lottery::new(chain);
    let round = lottery.lottery_state()?.round;

    log::info!("Entering lottery round {round}...");
    lottery.enter(&[network.entrance_fee.clone()])?;

    for _ in 0..MAX_POLLS {
        sleep(POLL_INTERVAL);

        let state = lottery.lottery_state()?;
        if state.round > round {
            let result = lottery
                .round(round)?
                .ok_or_else(|| anyhow::anyhow!("Round {round} settled without result"))?;
            log::info!(
                "WinnerPicked event fired! {} won {}",
                result.winner,
                result.prize
            );
            if result.number_of_players == 1 {
                anyhow::ensure!(result.winner == sender, "The only player should have won");
            }
            return Ok(());
        }

        if lottery.check_upkeep()?.upkeep_needed {
            log::info!("Performing upkeep...");
            lottery.perform_upkeep()?;
        } else {
            log::info!("Waiting for round {round} to be settled...");
        }
    }

    anyhow::bail!("Round {round} was not settled in time")
}
