use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use cosmwasm_schema::generate_api;
use lottery::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

pub const ADDRESSES_FILE: &str = "constants/contractAddresses.json";
pub const ABI_FILE: &str = "constants/abi.json";
pub const DEFAULT_FRONTEND_DIR: &str = "../lottery-frontend";

/// chain id -> every lottery address deployed on it
pub type ContractAddresses = BTreeMap<String, Vec<String>>;

/// Frontend project to update, only when `UPDATE_FRONTEND` is set.
/// The location can be overridden with `FRONTEND_DIR`
pub fn frontend_from_env() -> Option<PathBuf> {
    std::env::var("UPDATE_FRONTEND").ok()?;
    Some(
        std::env::var("FRONTEND_DIR")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_DIR.to_string())
            .into(),
    )
}

/// Returns false when the address was already listed
pub fn merge_address(addresses: &mut ContractAddresses, chain_id: &str, address: &str) -> bool {
    let known = addresses.entry(chain_id.to_string()).or_default();
    if known.iter().any(|a| a == address) {
        return false;
    }
    known.push(address.to_string());
    true
}

pub fn lottery_abi() -> anyhow::Result<String> {
    let api = generate_api! {
        name: "lottery",
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    };
    Ok(api.render().to_string()?)
}

/// Adds the address to the frontend address book and rewrites the contract interface
pub fn update_frontend(frontend_dir: &Path, chain_id: &str, address: &str) -> anyhow::Result<()> {
    let addresses_path = frontend_dir.join(ADDRESSES_FILE);
    let mut addresses: ContractAddresses = match fs::read_to_string(&addresses_path) {
        Ok(content) => serde_json::from_str(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ContractAddresses::new(),
        Err(e) => return Err(e.into()),
    };

    if merge_address(&mut addresses, chain_id, address) {
        log::info!("Added {address} to the frontend addresses of {chain_id}");
    }
    if let Some(parent) = addresses_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&addresses_path, serde_json::to_string_pretty(&addresses)?)?;
    fs::write(frontend_dir.join(ABI_FILE), lottery_abi()?)?;

    log::info!("Frontend at {} updated", frontend_dir.display());
    Ok(())
}
