// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::queries::{
    query_admin, query_balance, query_config, query_contract_version, query_customer,
    query_customer_at_index, query_customer_wind_farms_paged, query_customers_paged,
    query_farm_output_reports_paged, query_farm_turbines_paged, query_measure_location,
    query_measure_location_at_index, query_measure_locations_paged, query_oracle_job_id,
    query_output_report, query_string_to_bytes32, query_turbine, query_turbine_at_index,
    query_wind_farm, query_wind_farm_at_index, query_wind_record, query_wind_records_paged,
};
use crate::storage::AQUILA_ENGINE_STORAGE;
use crate::transactions::{
    try_add_customer, try_add_customer_with_id, try_add_measure_location,
    try_add_measure_location_with_id, try_add_output_report, try_add_turbine,
    try_add_turbine_with_id, try_add_wind_farm, try_add_wind_farm_with_id, try_add_wind_record,
    try_remove_customer, try_remove_measure_location, try_remove_output_report,
    try_remove_turbine, try_remove_wind_farm, try_remove_wind_record, try_update_contract_admin,
    try_update_oracle_job_id,
};
use aquila_engine_contract_common::constants::DEFAULT_ORACLE_JOB_ID;
use aquila_engine_contract_common::{
    AquilaEngineContractError, Config, ExecuteMsg, InstantiateMsg, MigrateMsg, OutputReport,
    QueryMsg, WindRecordKind,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};

const CONTRACT_NAME: &str = "crate:aquila-engine-contract";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, AquilaEngineContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        oracle_job_id: msg
            .oracle_job_id
            .unwrap_or_else(|| DEFAULT_ORACLE_JOB_ID.to_string()),
        balance_denom: msg.balance_denom,
    };
    AQUILA_ENGINE_STORAGE.initialise(deps.branch(), info.sender, config)?;

    Ok(Response::default())
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, AquilaEngineContractError> {
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => try_update_contract_admin(deps, info, admin),
        ExecuteMsg::UpdateOracleJobId { job_id } => try_update_oracle_job_id(deps, info, job_id),
        ExecuteMsg::AddCustomer {} => try_add_customer(deps, info),
        ExecuteMsg::AddCustomerWithId { customer_id } => {
            try_add_customer_with_id(deps, info, customer_id)
        }
        ExecuteMsg::RemoveCustomer { customer_id } => try_remove_customer(deps, info, customer_id),
        ExecuteMsg::AddMeasureLocation { coordinate } => {
            try_add_measure_location(deps, info, coordinate)
        }
        ExecuteMsg::AddMeasureLocationWithId {
            location_id,
            coordinate,
        } => try_add_measure_location_with_id(deps, info, location_id, coordinate),
        ExecuteMsg::RemoveMeasureLocation { location_id } => {
            try_remove_measure_location(deps, info, location_id)
        }
        ExecuteMsg::AddWindFarm { customer_id, x, y } => {
            try_add_wind_farm(deps, info, customer_id, x, y)
        }
        ExecuteMsg::AddWindFarmWithId {
            customer_id,
            farm_id,
            x,
            y,
        } => try_add_wind_farm_with_id(deps, info, customer_id, farm_id, x, y),
        ExecuteMsg::RemoveWindFarm {
            customer_id,
            farm_id,
        } => try_remove_wind_farm(deps, info, customer_id, farm_id),
        ExecuteMsg::AddTurbine {
            customer_id,
            farm_id,
            position,
            height,
        } => try_add_turbine(deps, info, customer_id, farm_id, position, height),
        ExecuteMsg::AddTurbineWithId {
            customer_id,
            farm_id,
            turbine_id,
            position,
            height,
        } => try_add_turbine_with_id(
            deps,
            info,
            customer_id,
            farm_id,
            turbine_id,
            position,
            height,
        ),
        ExecuteMsg::RemoveTurbine {
            customer_id,
            farm_id,
            turbine_id,
        } => try_remove_turbine(deps, info, customer_id, farm_id, turbine_id),
        ExecuteMsg::AddHistoricalWindAvg {
            location_id,
            timestamp,
            value,
        } => try_add_wind_record(
            deps,
            info,
            WindRecordKind::HistoricalAverage,
            location_id,
            timestamp,
            value,
        ),
        ExecuteMsg::RemoveHistoricalWindAvg {
            location_id,
            timestamp,
        } => try_remove_wind_record(
            deps,
            info,
            WindRecordKind::HistoricalAverage,
            location_id,
            timestamp,
        ),
        ExecuteMsg::AddMeasuredWind {
            location_id,
            timestamp,
            value,
        } => try_add_wind_record(
            deps,
            info,
            WindRecordKind::Measured,
            location_id,
            timestamp,
            value,
        ),
        ExecuteMsg::RemoveMeasuredWind {
            location_id,
            timestamp,
        } => try_remove_wind_record(
            deps,
            info,
            WindRecordKind::Measured,
            location_id,
            timestamp,
        ),
        ExecuteMsg::AddOutputReport {
            customer_id,
            farm_id,
            turbine_id,
            timestamp,
            value,
        } => try_add_output_report(
            deps,
            info,
            OutputReport {
                customer_id,
                farm_id,
                turbine_id,
                timestamp,
                value,
            },
        ),
        ExecuteMsg::RemoveOutputReport {
            customer_id,
            farm_id,
            turbine_id,
        } => try_remove_output_report(deps, info, customer_id, farm_id, turbine_id),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, AquilaEngineContractError> {
    match msg {
        QueryMsg::Admin {} => Ok(to_json_binary(&query_admin(deps)?)?),
        QueryMsg::GetConfig {} => Ok(to_json_binary(&query_config(deps)?)?),
        QueryMsg::GetCw2ContractVersion {} => Ok(to_json_binary(&query_contract_version(deps)?)?),
        QueryMsg::GetBalance {} => Ok(to_json_binary(&query_balance(deps, env)?)?),
        QueryMsg::GetOracleJobId {} => Ok(to_json_binary(&query_oracle_job_id(deps)?)?),
        QueryMsg::StringToBytes32 { value } => {
            Ok(to_json_binary(&query_string_to_bytes32(value))?)
        }
        QueryMsg::GetCustomer { customer_id } => {
            Ok(to_json_binary(&query_customer(deps, customer_id)?)?)
        }
        QueryMsg::GetCustomerAtIndex { index } => {
            Ok(to_json_binary(&query_customer_at_index(deps, index)?)?)
        }
        QueryMsg::GetAllCustomers { start_after, limit } => Ok(to_json_binary(
            &query_customers_paged(deps, start_after, limit)?,
        )?),
        QueryMsg::GetMeasureLocation { location_id } => {
            Ok(to_json_binary(&query_measure_location(deps, location_id)?)?)
        }
        QueryMsg::GetMeasureLocationAtIndex { index } => Ok(to_json_binary(
            &query_measure_location_at_index(deps, index)?,
        )?),
        QueryMsg::GetAllMeasureLocations { start_after, limit } => Ok(to_json_binary(
            &query_measure_locations_paged(deps, start_after, limit)?,
        )?),
        QueryMsg::GetWindFarm {
            customer_id,
            farm_id,
        } => Ok(to_json_binary(&query_wind_farm(deps, customer_id, farm_id)?)?),
        QueryMsg::GetWindFarmAtIndex { customer_id, index } => Ok(to_json_binary(
            &query_wind_farm_at_index(deps, customer_id, index)?,
        )?),
        QueryMsg::GetAllCustomerWindFarms {
            customer_id,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_customer_wind_farms_paged(
            deps,
            customer_id,
            start_after,
            limit,
        )?)?),
        QueryMsg::GetTurbine {
            customer_id,
            farm_id,
            turbine_id,
        } => Ok(to_json_binary(&query_turbine(
            deps,
            customer_id,
            farm_id,
            turbine_id,
        )?)?),
        QueryMsg::GetTurbineAtIndex {
            customer_id,
            farm_id,
            index,
        } => Ok(to_json_binary(&query_turbine_at_index(
            deps,
            customer_id,
            farm_id,
            index,
        )?)?),
        QueryMsg::GetAllFarmTurbines {
            customer_id,
            farm_id,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_farm_turbines_paged(
            deps,
            customer_id,
            farm_id,
            start_after,
            limit,
        )?)?),
        QueryMsg::GetHistoricalWindAvg {
            location_id,
            timestamp,
        } => Ok(to_json_binary(&query_wind_record(
            deps,
            WindRecordKind::HistoricalAverage,
            location_id,
            timestamp,
        )?)?),
        QueryMsg::GetHistoricalWindAvgsPaged {
            location_id,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_wind_records_paged(
            deps,
            WindRecordKind::HistoricalAverage,
            location_id,
            start_after,
            limit,
        )?)?),
        QueryMsg::GetMeasuredWind {
            location_id,
            timestamp,
        } => Ok(to_json_binary(&query_wind_record(
            deps,
            WindRecordKind::Measured,
            location_id,
            timestamp,
        )?)?),
        QueryMsg::GetMeasuredWindPaged {
            location_id,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_wind_records_paged(
            deps,
            WindRecordKind::Measured,
            location_id,
            start_after,
            limit,
        )?)?),
        QueryMsg::GetOutputReport {
            customer_id,
            farm_id,
            turbine_id,
        } => Ok(to_json_binary(&query_output_report(
            deps,
            customer_id,
            farm_id,
            turbine_id,
        )?)?),
        QueryMsg::GetFarmOutputReportsPaged {
            customer_id,
            farm_id,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_farm_output_reports_paged(
            deps,
            customer_id,
            farm_id,
            start_after,
            limit,
        )?)?),
    }
}

#[entry_point]
pub fn migrate(
    deps: DepsMut,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, AquilaEngineContractError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Default::default())
}
