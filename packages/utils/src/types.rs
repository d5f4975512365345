// Vanilla Cosmwasm
pub type Response = cosmwasm_std::Response;
pub type SubMsg = cosmwasm_std::SubMsg;
pub type CosmosMsg = cosmwasm_std::CosmosMsg;
