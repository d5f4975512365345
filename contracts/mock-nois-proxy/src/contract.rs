#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Order,
    QueryResponse, StdResult, Timestamp, WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use nois::NoisCallback;
use randomness::DEFAULT_RANDOMNESS;
use utils::{payment::paid_amount, state::page_limit, types::Response};

use crate::{
    error::ContractError,
    msg::{
        ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiverExecuteMsg,
        RequestResponse,
    },
    state::{Config, Request, CONFIG, CONSUMERS, REQUESTS, REQUEST_COUNT},
};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admin = msg
        .admin
        .map(|admin| deps.api.addr_validate(&admin))
        .transpose()?
        .unwrap_or(info.sender);

    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
            fee: msg.fee,
        },
    )?;
    REQUEST_COUNT.save(deps.storage, &0)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => {
            execute_request_randomness(deps, env, info, job_id, None)
        }
        ExecuteMsg::GetRandomnessAfter { after, job_id } => {
            execute_request_randomness(deps, env, info, job_id, Some(after))
        }
        ExecuteMsg::AddConsumer { address } => execute_set_consumer(deps, info, address, true),
        ExecuteMsg::RemoveConsumer { address } => execute_set_consumer(deps, info, address, false),
        ExecuteMsg::FulfillRandomness {
            request_id,
            randomness,
        } => execute_fulfill_randomness(deps, env, request_id, randomness),
    }
}

pub fn execute_request_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    job_id: String,
    after: Option<Timestamp>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(
        CONSUMERS
            .may_load(deps.storage, &info.sender)?
            .unwrap_or_default(),
        ContractError::NotConsumer {
            address: info.sender.to_string()
        }
    );

    let sent = paid_amount(&info, &config.fee.denom)?;
    if sent < config.fee.amount {
        return Err(ContractError::NotEnoughFunds {
            required: config.fee,
            sent,
        });
    }

    let request_id = REQUEST_COUNT.load(deps.storage)? + 1;
    REQUEST_COUNT.save(deps.storage, &request_id)?;
    REQUESTS.save(
        deps.storage,
        request_id,
        &Request {
            consumer: info.sender.clone(),
            job_id: job_id.clone(),
            after,
            requested_at: env.block.time,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "request_randomness")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", info.sender)
        .add_attribute("job_id", job_id))
}

pub fn execute_set_consumer(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    registered: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.admin, ContractError::Unauthorized {});

    let consumer = deps.api.addr_validate(&address)?;
    if registered {
        CONSUMERS.save(deps.storage, &consumer, &true)?;
    } else {
        CONSUMERS.remove(deps.storage, &consumer);
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if registered {
                "add_consumer"
            } else {
                "remove_consumer"
            },
        )
        .add_attribute("consumer", consumer))
}

/// Delivers the callback to the consumer of the request and forgets the request.
/// Anyone can trigger it
pub fn execute_fulfill_randomness(
    deps: DepsMut,
    env: Env,
    request_id: u64,
    randomness: Option<HexBinary>,
) -> Result<Response, ContractError> {
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::NonexistentRequest { request_id })?;

    if let Some(after) = request.after {
        ensure!(
            env.block.time >= after,
            ContractError::TooEarly { after }
        );
    }
    REQUESTS.remove(deps.storage, request_id);

    let randomness = match randomness {
        Some(randomness) => randomness,
        None => HexBinary::from_hex(DEFAULT_RANDOMNESS)?,
    };

    let callback = WasmMsg::Execute {
        contract_addr: request.consumer.to_string(),
        msg: to_json_binary(&ReceiverExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id: request.job_id.clone(),
                published: request.after.unwrap_or(env.block.time),
                randomness,
            },
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "fulfill_randomness")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", request.consumer)
        .add_attribute("job_id", request.job_id))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                admin: config.admin,
                fee: config.fee,
                last_request_id: REQUEST_COUNT.load(deps.storage)?,
            })?
        }
        QueryMsg::Request { request_id } => {
            to_json_binary(&REQUESTS.may_load(deps.storage, request_id)?)?
        }
        QueryMsg::Requests { start_after, limit } => {
            let requests = REQUESTS
                .range(
                    deps.storage,
                    start_after.map(Bound::exclusive),
                    None,
                    Order::Ascending,
                )
                .map(|r| r.map(|(request_id, request)| RequestResponse { request_id, request }))
                .take(page_limit(limit))
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&requests)?
        }
        QueryMsg::IsConsumer { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&CONSUMERS.has(deps.storage, &address))?
        }
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{
        coin, coins, from_json,
        testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage},
        CosmosMsg, OwnedDeps, Uint128,
    };

    use super::*;

    const FEE: u128 = 1_000_000;
    const FEE_DENOM: &str = "unois";

    fn setup() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            InstantiateMsg {
                admin: None,
                fee: coin(FEE, FEE_DENOM),
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::AddConsumer {
                address: "consumer".to_string(),
            },
        )
        .unwrap();
        deps
    }

    #[test]
    fn only_admin_manages_consumers() {
        let mut deps = setup();
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("someone", &[]),
            ExecuteMsg::AddConsumer {
                address: "someone".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});

        let is_consumer: bool = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::IsConsumer {
                    address: "consumer".to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert!(is_consumer);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::RemoveConsumer {
                address: "consumer".to_string(),
            },
        )
        .unwrap();
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("consumer", &coins(FEE, FEE_DENOM)),
            ExecuteMsg::GetNextRandomness {
                job_id: "job".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotConsumer {
                address: "consumer".to_string()
            }
        );
    }

    #[test]
    fn requests_must_pay_the_fee() {
        let mut deps = setup();
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("consumer", &coins(FEE - 1, FEE_DENOM)),
            ExecuteMsg::GetNextRandomness {
                job_id: "job".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotEnoughFunds {
                required: coin(FEE, FEE_DENOM),
                sent: Uint128::new(FEE - 1),
            }
        );
    }

    #[test]
    fn request_ids_start_at_one() {
        let mut deps = setup();
        for job in ["a", "b"] {
            execute(
                deps.as_mut(),
                mock_env(),
                mock_info("consumer", &coins(FEE, FEE_DENOM)),
                ExecuteMsg::GetNextRandomness {
                    job_id: job.to_string(),
                },
            )
            .unwrap();
        }

        let requests: Vec<RequestResponse> = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::Requests {
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(
            requests.iter().map(|r| r.request_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(requests[1].request.job_id, "b");
    }

    #[test]
    fn fulfill_calls_back_the_consumer() {
        let mut deps = setup();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("consumer", &coins(FEE, FEE_DENOM)),
            ExecuteMsg::GetNextRandomness {
                job_id: "lottery-1".to_string(),
            },
        )
        .unwrap();

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::FulfillRandomness {
                request_id: 1,
                randomness: None,
            },
        )
        .unwrap();
        assert_eq!(res.messages.len(), 1);
        let CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr, msg, ..
        }) = &res.messages[0].msg
        else {
            panic!("expected a wasm execute message");
        };
        assert_eq!(contract_addr, "consumer");
        let ReceiverExecuteMsg::NoisReceive { callback } = from_json(msg).unwrap();
        assert_eq!(callback.job_id, "lottery-1");
        assert_eq!(callback.randomness.to_hex(), DEFAULT_RANDOMNESS);

        // the request is gone
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::FulfillRandomness {
                request_id: 1,
                randomness: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NonexistentRequest { request_id: 1 });
        assert!(err.to_string().contains("nonexistent request"));
    }

    #[test]
    fn delayed_requests_wait_for_their_time() {
        let mut deps = setup();
        let env = mock_env();
        let after = env.block.time.plus_seconds(60);
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info("consumer", &coins(FEE, FEE_DENOM)),
            ExecuteMsg::GetRandomnessAfter {
                after,
                job_id: "later".to_string(),
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            env.clone(),
            mock_info("anyone", &[]),
            ExecuteMsg::FulfillRandomness {
                request_id: 1,
                randomness: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::TooEarly { after });

        let mut env = env;
        env.block.time = after;
        execute(
            deps.as_mut(),
            env,
            mock_info("anyone", &[]),
            ExecuteMsg::FulfillRandomness {
                request_id: 1,
                randomness: Some(HexBinary::from(vec![7u8; 32])),
            },
        )
        .unwrap();
    }
}
