// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::helpers::created_entry_response;
use crate::storage::AQUILA_ENGINE_STORAGE;
use aquila_engine_contract_common::events::{
    new_customer_added_event, new_customer_removed_event, new_measure_location_added_event,
    new_measure_location_removed_event, new_oracle_job_id_update_event,
    new_output_report_added_event, new_output_report_removed_event, new_turbine_added_event,
    new_turbine_removed_event, new_wind_farm_added_event, new_wind_farm_removed_event,
    new_wind_record_added_event, new_wind_record_removed_event,
};
use aquila_engine_contract_common::{
    AquilaEngineContractError, Bytes32, CustomerId, IdAllocation, MeasureLocationId, OutputReport,
    Timestamp, TurbineId, WindFarmId, WindRecord, WindRecordKind,
};
use cosmwasm_std::{DepsMut, MessageInfo, Response};

pub fn try_update_contract_admin(
    deps: DepsMut<'_>,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, AquilaEngineContractError> {
    let new_admin = deps.api.addr_validate(&new_admin)?;

    let res = AQUILA_ENGINE_STORAGE
        .contract_admin
        .execute_update_admin(deps, info, Some(new_admin))?;

    Ok(res)
}

pub fn try_update_oracle_job_id(
    deps: DepsMut<'_>,
    info: MessageInfo,
    job_id: String,
) -> Result<Response, AquilaEngineContractError> {
    let old = AQUILA_ENGINE_STORAGE.update_oracle_job_id(deps, &info.sender, job_id.clone())?;

    Ok(Response::new().add_event(new_oracle_job_id_update_event(&old, &job_id)))
}

pub fn try_add_customer(
    deps: DepsMut<'_>,
    info: MessageInfo,
) -> Result<Response, AquilaEngineContractError> {
    let customer = AQUILA_ENGINE_STORAGE.add_customer(deps, &info.sender)?;

    created_entry_response(
        new_customer_added_event(&customer, IdAllocation::Auto),
        &customer.id,
    )
}

pub fn try_add_customer_with_id(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
) -> Result<Response, AquilaEngineContractError> {
    let customer = AQUILA_ENGINE_STORAGE.add_customer_with_id(deps, &info.sender, customer_id)?;

    Ok(Response::new().add_event(new_customer_added_event(&customer, IdAllocation::Explicit)))
}

pub fn try_remove_customer(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
) -> Result<Response, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE.remove_customer(deps, &info.sender, customer_id)?;

    Ok(Response::new().add_event(new_customer_removed_event(customer_id)))
}

pub fn try_add_measure_location(
    deps: DepsMut<'_>,
    info: MessageInfo,
    coordinate: Bytes32,
) -> Result<Response, AquilaEngineContractError> {
    let location = AQUILA_ENGINE_STORAGE.add_measure_location(deps, &info.sender, coordinate)?;

    created_entry_response(
        new_measure_location_added_event(&location, IdAllocation::Auto),
        &location.id,
    )
}

pub fn try_add_measure_location_with_id(
    deps: DepsMut<'_>,
    info: MessageInfo,
    location_id: MeasureLocationId,
    coordinate: Bytes32,
) -> Result<Response, AquilaEngineContractError> {
    let location = AQUILA_ENGINE_STORAGE.add_measure_location_with_id(
        deps,
        &info.sender,
        location_id,
        coordinate,
    )?;

    Ok(Response::new().add_event(new_measure_location_added_event(
        &location,
        IdAllocation::Explicit,
    )))
}

pub fn try_remove_measure_location(
    deps: DepsMut<'_>,
    info: MessageInfo,
    location_id: MeasureLocationId,
) -> Result<Response, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE.remove_measure_location(deps, &info.sender, location_id)?;

    Ok(Response::new().add_event(new_measure_location_removed_event(location_id)))
}

pub fn try_add_wind_farm(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    x: i64,
    y: i64,
) -> Result<Response, AquilaEngineContractError> {
    let wind_farm = AQUILA_ENGINE_STORAGE.add_wind_farm(deps, &info.sender, customer_id, x, y)?;

    created_entry_response(
        new_wind_farm_added_event(&wind_farm, IdAllocation::Auto),
        &wind_farm.farm_id,
    )
}

pub fn try_add_wind_farm_with_id(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    x: i64,
    y: i64,
) -> Result<Response, AquilaEngineContractError> {
    let wind_farm = AQUILA_ENGINE_STORAGE.add_wind_farm_with_id(
        deps,
        &info.sender,
        customer_id,
        farm_id,
        x,
        y,
    )?;

    Ok(Response::new().add_event(new_wind_farm_added_event(
        &wind_farm,
        IdAllocation::Explicit,
    )))
}

pub fn try_remove_wind_farm(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    farm_id: WindFarmId,
) -> Result<Response, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE.remove_wind_farm(deps, &info.sender, customer_id, farm_id)?;

    Ok(Response::new().add_event(new_wind_farm_removed_event((customer_id, farm_id))))
}

pub fn try_add_turbine(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    position: u64,
    height: u64,
) -> Result<Response, AquilaEngineContractError> {
    let turbine = AQUILA_ENGINE_STORAGE.add_turbine(
        deps,
        &info.sender,
        customer_id,
        farm_id,
        position,
        height,
    )?;

    created_entry_response(
        new_turbine_added_event(&turbine, IdAllocation::Auto),
        &turbine.turbine_id,
    )
}

pub fn try_add_turbine_with_id(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    turbine_id: TurbineId,
    position: u64,
    height: u64,
) -> Result<Response, AquilaEngineContractError> {
    let turbine = AQUILA_ENGINE_STORAGE.add_turbine_with_id(
        deps,
        &info.sender,
        customer_id,
        farm_id,
        turbine_id,
        position,
        height,
    )?;

    Ok(Response::new().add_event(new_turbine_added_event(&turbine, IdAllocation::Explicit)))
}

pub fn try_remove_turbine(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    turbine_id: TurbineId,
) -> Result<Response, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE.remove_turbine(deps, &info.sender, customer_id, farm_id, turbine_id)?;

    Ok(Response::new().add_event(new_turbine_removed_event((
        customer_id,
        farm_id,
        turbine_id,
    ))))
}

pub fn try_add_wind_record(
    deps: DepsMut<'_>,
    info: MessageInfo,
    kind: WindRecordKind,
    location_id: MeasureLocationId,
    timestamp: Timestamp,
    value: u64,
) -> Result<Response, AquilaEngineContractError> {
    let record = WindRecord {
        location_id,
        timestamp,
        value,
    };
    AQUILA_ENGINE_STORAGE.add_wind_record(deps, &info.sender, kind, record)?;

    Ok(Response::new().add_event(new_wind_record_added_event(kind, &record)))
}

pub fn try_remove_wind_record(
    deps: DepsMut<'_>,
    info: MessageInfo,
    kind: WindRecordKind,
    location_id: MeasureLocationId,
    timestamp: Timestamp,
) -> Result<Response, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE.remove_wind_record(deps, &info.sender, kind, location_id, timestamp)?;

    Ok(Response::new().add_event(new_wind_record_removed_event(
        kind,
        location_id,
        timestamp,
    )))
}

pub fn try_add_output_report(
    deps: DepsMut<'_>,
    info: MessageInfo,
    report: OutputReport,
) -> Result<Response, AquilaEngineContractError> {
    let replaced = AQUILA_ENGINE_STORAGE.add_output_report(deps, &info.sender, report)?;

    Ok(Response::new().add_event(new_output_report_added_event(&report, replaced)))
}

pub fn try_remove_output_report(
    deps: DepsMut<'_>,
    info: MessageInfo,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    turbine_id: TurbineId,
) -> Result<Response, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE.remove_output_report(
        deps,
        &info.sender,
        customer_id,
        farm_id,
        turbine_id,
    )?;

    Ok(Response::new().add_event(new_output_report_removed_event((
        customer_id,
        farm_id,
        turbine_id,
    ))))
}
