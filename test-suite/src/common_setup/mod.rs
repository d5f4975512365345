pub mod app;
pub mod constants;
pub mod contract_boxes;
pub mod helpers;
pub mod setup_accounts_and_block;
pub mod setup_lottery;
