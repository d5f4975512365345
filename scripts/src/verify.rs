use cw_orch::prelude::*;
use lottery::Lottery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The on-chain code matches the local artifact
    Verified,
    Mismatch,
    /// The check itself could not be done
    Failed,
}

/// Compares the code the contract runs on chain with the local wasm artifact.
/// Never fails, a deployment should not be aborted because of it
pub fn verify<Chain: CwEnv>(contract: &Lottery<Chain>) -> Verification {
    match contract.is_running_latest() {
        Ok(true) => {
            log::info!("{} is already verified", contract.id());
            Verification::Verified
        }
        Ok(false) => {
            log::warn!(
                "{} runs a code that differs from the local artifact",
                contract.id()
            );
            Verification::Mismatch
        }
        Err(e) => {
            log::warn!("Could not verify {}: {e}", contract.id());
            Verification::Failed
        }
    }
}
