// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::helpers::retrieval_limit;
use crate::storage::registry::GLOBAL_SCOPE;
use crate::storage::{retrieval_limits, AQUILA_ENGINE_STORAGE};
use aquila_engine_contract_common::{
    AquilaEngineContractError, BalanceResponse, Bytes32, Bytes32Response, Config,
    CustomerAtIndexResponse, CustomerId, CustomerResponse, MeasureLocationAtIndexResponse,
    MeasureLocationId, MeasureLocationResponse, OracleJobIdResponse, OutputReport,
    OutputReportResponse, PagedCustomersResponse, PagedMeasureLocationsResponse,
    PagedOutputReportsResponse, PagedTurbinesResponse, PagedWindFarmsResponse,
    PagedWindRecordsResponse, Timestamp, TurbineAtIndexResponse, TurbineId, TurbineResponse,
    WindFarmAtIndexResponse, WindFarmId, WindFarmResponse, WindRecord, WindRecordKind,
    WindRecordResponse,
};
use cosmwasm_std::{Deps, Env, Order, StdResult};
use cw2::ContractVersion;
use cw_controllers::AdminResponse;
use cw_storage_plus::Bound;

pub fn query_admin(deps: Deps) -> Result<AdminResponse, AquilaEngineContractError> {
    AQUILA_ENGINE_STORAGE
        .contract_admin
        .query_admin(deps)
        .map_err(Into::into)
}

pub fn query_config(deps: Deps) -> Result<Config, AquilaEngineContractError> {
    Ok(AQUILA_ENGINE_STORAGE.config.load(deps.storage)?)
}

pub fn query_contract_version(deps: Deps) -> Result<ContractVersion, AquilaEngineContractError> {
    Ok(cw2::get_contract_version(deps.storage)?)
}

pub fn query_balance(deps: Deps, env: Env) -> Result<BalanceResponse, AquilaEngineContractError> {
    let denom = AQUILA_ENGINE_STORAGE.config.load(deps.storage)?.balance_denom;
    let balance = deps.querier.query_balance(env.contract.address, denom)?;

    Ok(BalanceResponse { balance })
}

pub fn query_oracle_job_id(deps: Deps) -> Result<OracleJobIdResponse, AquilaEngineContractError> {
    let job_id = AQUILA_ENGINE_STORAGE
        .config
        .load(deps.storage)?
        .oracle_job_id;

    Ok(OracleJobIdResponse { job_id })
}

pub fn query_string_to_bytes32(value: String) -> Bytes32Response {
    Bytes32Response {
        value: Bytes32::from_str_truncated(&value),
    }
}

pub fn query_customer(
    deps: Deps,
    customer_id: CustomerId,
) -> Result<CustomerResponse, AquilaEngineContractError> {
    let customer = AQUILA_ENGINE_STORAGE
        .customers
        .may_load(deps.storage, customer_id)?;

    Ok(CustomerResponse {
        customer_id,
        customer,
    })
}

pub fn query_customer_at_index(
    deps: Deps,
    index: u32,
) -> Result<CustomerAtIndexResponse, AquilaEngineContractError> {
    let customer_id = AQUILA_ENGINE_STORAGE
        .customers
        .key_at(deps.storage, GLOBAL_SCOPE, index)?;

    Ok(CustomerAtIndexResponse { index, customer_id })
}

pub fn query_customers_paged(
    deps: Deps,
    start_after: Option<CustomerId>,
    limit: Option<u32>,
) -> Result<PagedCustomersResponse, AquilaEngineContractError> {
    let limit = retrieval_limit(
        limit,
        retrieval_limits::CUSTOMERS_DEFAULT_LIMIT,
        retrieval_limits::CUSTOMERS_MAX_LIMIT,
    );

    let customers = AQUILA_ENGINE_STORAGE.customers.ordered_entries(
        deps.storage,
        GLOBAL_SCOPE,
        start_after,
        limit,
    )?;
    let start_next_after = customers.last().map(|customer| customer.id);

    Ok(PagedCustomersResponse {
        customers,
        start_next_after,
    })
}

pub fn query_measure_location(
    deps: Deps,
    location_id: MeasureLocationId,
) -> Result<MeasureLocationResponse, AquilaEngineContractError> {
    let location = AQUILA_ENGINE_STORAGE
        .measure_locations
        .may_load(deps.storage, location_id)?;

    Ok(MeasureLocationResponse {
        location_id,
        location,
    })
}

pub fn query_measure_location_at_index(
    deps: Deps,
    index: u32,
) -> Result<MeasureLocationAtIndexResponse, AquilaEngineContractError> {
    let location_id = AQUILA_ENGINE_STORAGE
        .measure_locations
        .key_at(deps.storage, GLOBAL_SCOPE, index)?;

    Ok(MeasureLocationAtIndexResponse { index, location_id })
}

pub fn query_measure_locations_paged(
    deps: Deps,
    start_after: Option<MeasureLocationId>,
    limit: Option<u32>,
) -> Result<PagedMeasureLocationsResponse, AquilaEngineContractError> {
    let limit = retrieval_limit(
        limit,
        retrieval_limits::MEASURE_LOCATIONS_DEFAULT_LIMIT,
        retrieval_limits::MEASURE_LOCATIONS_MAX_LIMIT,
    );

    let locations = AQUILA_ENGINE_STORAGE.measure_locations.ordered_entries(
        deps.storage,
        GLOBAL_SCOPE,
        start_after,
        limit,
    )?;
    let start_next_after = locations.last().map(|location| location.id);

    Ok(PagedMeasureLocationsResponse {
        locations,
        start_next_after,
    })
}

pub fn query_wind_farm(
    deps: Deps,
    customer_id: CustomerId,
    farm_id: WindFarmId,
) -> Result<WindFarmResponse, AquilaEngineContractError> {
    let wind_farm = AQUILA_ENGINE_STORAGE
        .wind_farms
        .may_load(deps.storage, (customer_id, farm_id))?;

    Ok(WindFarmResponse {
        customer_id,
        farm_id,
        wind_farm,
    })
}

pub fn query_wind_farm_at_index(
    deps: Deps,
    customer_id: CustomerId,
    index: u32,
) -> Result<WindFarmAtIndexResponse, AquilaEngineContractError> {
    let farm_id = AQUILA_ENGINE_STORAGE
        .wind_farms
        .key_at(deps.storage, customer_id, index)?
        .map(|(_, farm_id)| farm_id);

    Ok(WindFarmAtIndexResponse {
        customer_id,
        index,
        farm_id,
    })
}

pub fn query_customer_wind_farms_paged(
    deps: Deps,
    customer_id: CustomerId,
    start_after: Option<WindFarmId>,
    limit: Option<u32>,
) -> Result<PagedWindFarmsResponse, AquilaEngineContractError> {
    let limit = retrieval_limit(
        limit,
        retrieval_limits::WIND_FARMS_DEFAULT_LIMIT,
        retrieval_limits::WIND_FARMS_MAX_LIMIT,
    );

    let wind_farms = AQUILA_ENGINE_STORAGE.wind_farms.ordered_entries(
        deps.storage,
        customer_id,
        start_after.map(|farm_id| (customer_id, farm_id)),
        limit,
    )?;
    let start_next_after = wind_farms.last().map(|wind_farm| wind_farm.farm_id);

    Ok(PagedWindFarmsResponse {
        customer_id,
        wind_farms,
        start_next_after,
    })
}

pub fn query_turbine(
    deps: Deps,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    turbine_id: TurbineId,
) -> Result<TurbineResponse, AquilaEngineContractError> {
    let turbine = AQUILA_ENGINE_STORAGE
        .turbines
        .may_load(deps.storage, (customer_id, farm_id, turbine_id))?;

    Ok(TurbineResponse {
        customer_id,
        farm_id,
        turbine_id,
        turbine,
    })
}

pub fn query_turbine_at_index(
    deps: Deps,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    index: u32,
) -> Result<TurbineAtIndexResponse, AquilaEngineContractError> {
    let turbine_id = AQUILA_ENGINE_STORAGE
        .turbines
        .key_at(deps.storage, (customer_id, farm_id), index)?
        .map(|(_, _, turbine_id)| turbine_id);

    Ok(TurbineAtIndexResponse {
        customer_id,
        farm_id,
        index,
        turbine_id,
    })
}

pub fn query_farm_turbines_paged(
    deps: Deps,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    start_after: Option<TurbineId>,
    limit: Option<u32>,
) -> Result<PagedTurbinesResponse, AquilaEngineContractError> {
    let limit = retrieval_limit(
        limit,
        retrieval_limits::TURBINES_DEFAULT_LIMIT,
        retrieval_limits::TURBINES_MAX_LIMIT,
    );

    let turbines = AQUILA_ENGINE_STORAGE.turbines.ordered_entries(
        deps.storage,
        (customer_id, farm_id),
        start_after.map(|turbine_id| (customer_id, farm_id, turbine_id)),
        limit,
    )?;
    let start_next_after = turbines.last().map(|turbine| turbine.turbine_id);

    Ok(PagedTurbinesResponse {
        customer_id,
        farm_id,
        turbines,
        start_next_after,
    })
}

pub fn query_wind_record(
    deps: Deps,
    kind: WindRecordKind,
    location_id: MeasureLocationId,
    timestamp: Timestamp,
) -> Result<WindRecordResponse, AquilaEngineContractError> {
    let record = AQUILA_ENGINE_STORAGE
        .wind_records(kind)
        .may_load(deps.storage, (location_id, timestamp))?;

    Ok(WindRecordResponse {
        location_id,
        timestamp,
        record,
    })
}

pub fn query_wind_records_paged(
    deps: Deps,
    kind: WindRecordKind,
    location_id: MeasureLocationId,
    start_after: Option<Timestamp>,
    limit: Option<u32>,
) -> Result<PagedWindRecordsResponse, AquilaEngineContractError> {
    let limit = retrieval_limit(
        limit,
        retrieval_limits::WIND_RECORDS_DEFAULT_LIMIT,
        retrieval_limits::WIND_RECORDS_MAX_LIMIT,
    );

    let start = start_after.map(Bound::exclusive);

    let records = AQUILA_ENGINE_STORAGE
        .wind_records(kind)
        .prefix(location_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|res| res.map(|(_, record)| record))
        .collect::<StdResult<Vec<WindRecord>>>()?;

    let start_next_after = records.last().map(|record| record.timestamp);

    Ok(PagedWindRecordsResponse {
        location_id,
        records,
        start_next_after,
    })
}

pub fn query_output_report(
    deps: Deps,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    turbine_id: TurbineId,
) -> Result<OutputReportResponse, AquilaEngineContractError> {
    let report = AQUILA_ENGINE_STORAGE
        .output_reports
        .may_load(deps.storage, (customer_id, farm_id, turbine_id))?;

    Ok(OutputReportResponse {
        customer_id,
        farm_id,
        turbine_id,
        report,
    })
}

pub fn query_farm_output_reports_paged(
    deps: Deps,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    start_after: Option<TurbineId>,
    limit: Option<u32>,
) -> Result<PagedOutputReportsResponse, AquilaEngineContractError> {
    let limit = retrieval_limit(
        limit,
        retrieval_limits::OUTPUT_REPORTS_DEFAULT_LIMIT,
        retrieval_limits::OUTPUT_REPORTS_MAX_LIMIT,
    );

    let start = start_after.map(Bound::exclusive);

    let reports = AQUILA_ENGINE_STORAGE
        .output_reports
        .prefix((customer_id, farm_id))
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|res| res.map(|(_, report)| report))
        .collect::<StdResult<Vec<OutputReport>>>()?;

    let start_next_after = reports.last().map(|report| report.turbine_id);

    Ok(PagedOutputReportsResponse {
        customer_id,
        farm_id,
        reports,
        start_next_after,
    })
}
