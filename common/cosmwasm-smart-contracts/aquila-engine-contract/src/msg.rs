// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::{Bytes32, CustomerId, MeasureLocationId, Timestamp, TurbineId, WindFarmId};
use cosmwasm_schema::cw_serde;

#[cfg(feature = "schema")]
use crate::types::{
    BalanceResponse, Bytes32Response, Config, CustomerAtIndexResponse, CustomerResponse,
    MeasureLocationAtIndexResponse, MeasureLocationResponse, OracleJobIdResponse,
    OutputReportResponse, PagedCustomersResponse, PagedMeasureLocationsResponse,
    PagedOutputReportsResponse, PagedTurbinesResponse, PagedWindFarmsResponse,
    PagedWindRecordsResponse, TurbineAtIndexResponse, TurbineResponse, WindFarmAtIndexResponse,
    WindFarmResponse, WindRecordResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Job id of the oracle integration. Defaults to [`crate::constants::DEFAULT_ORACLE_JOB_ID`].
    pub oracle_job_id: Option<String>,

    /// Denomination used when reporting the contract balance.
    pub balance_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the admin
    UpdateAdmin { admin: String },

    /// Change the job id used by the oracle integration
    UpdateOracleJobId { job_id: String },

    /// Register a new customer under the next free sequential id
    AddCustomer {},

    /// Register a new customer under the provided id
    AddCustomerWithId { customer_id: CustomerId },

    /// Remove an existing customer. It must not own any wind farms.
    RemoveCustomer { customer_id: CustomerId },

    /// Register a new measure location under the next free sequential id
    AddMeasureLocation { coordinate: Bytes32 },

    /// Register a new measure location under the provided id
    AddMeasureLocationWithId {
        location_id: MeasureLocationId,
        coordinate: Bytes32,
    },

    /// Remove an existing measure location. It must not have any wind records.
    RemoveMeasureLocation { location_id: MeasureLocationId },

    /// Register a new wind farm for the customer under its next free sequential farm id
    AddWindFarm {
        customer_id: CustomerId,
        x: i64,
        y: i64,
    },

    /// Register a new wind farm for the customer under the provided farm id
    AddWindFarmWithId {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        x: i64,
        y: i64,
    },

    /// Remove an existing wind farm. It must not have any turbines.
    RemoveWindFarm {
        customer_id: CustomerId,
        farm_id: WindFarmId,
    },

    /// Register a new turbine in the wind farm under its next free sequential turbine id
    AddTurbine {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        position: u64,
        height: u64,
    },

    /// Register a new turbine in the wind farm under the provided turbine id
    AddTurbineWithId {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
        position: u64,
        height: u64,
    },

    /// Remove an existing turbine. It must not have an output report.
    RemoveTurbine {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },

    /// Store the historical wind average of the location at the given time
    AddHistoricalWindAvg {
        location_id: MeasureLocationId,
        timestamp: Timestamp,
        value: u64,
    },

    RemoveHistoricalWindAvg {
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    },

    /// Store wind measured at the location at the given time
    AddMeasuredWind {
        location_id: MeasureLocationId,
        timestamp: Timestamp,
        value: u64,
    },

    RemoveMeasuredWind {
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    },

    /// Store the output report of the turbine, replacing the previous one if it exists
    AddOutputReport {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
        timestamp: Timestamp,
        value: u64,
    },

    RemoveOutputReport {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },
}

#[cw_serde]
#[cfg_attr(feature = "schema", derive(cosmwasm_schema::QueryResponses))]
pub enum QueryMsg {
    #[cfg_attr(feature = "schema", returns(cw_controllers::AdminResponse))]
    Admin {},

    #[cfg_attr(feature = "schema", returns(Config))]
    GetConfig {},

    /// Gets the stored contract version information that's required by the CW2 spec interface for migrations.
    #[cfg_attr(feature = "schema", returns(cw2::ContractVersion))]
    GetCw2ContractVersion {},

    /// Returns the current balance of the contract in the configured denomination
    #[cfg_attr(feature = "schema", returns(BalanceResponse))]
    GetBalance {},

    #[cfg_attr(feature = "schema", returns(OracleJobIdResponse))]
    GetOracleJobId {},

    /// Encodes the provided string into a 32-byte value, truncating it if required
    #[cfg_attr(feature = "schema", returns(Bytes32Response))]
    StringToBytes32 { value: String },

    #[cfg_attr(feature = "schema", returns(CustomerResponse))]
    GetCustomer { customer_id: CustomerId },

    /// Returns id of the customer at the given position of the insertion order
    #[cfg_attr(feature = "schema", returns(CustomerAtIndexResponse))]
    GetCustomerAtIndex { index: u32 },

    /// Returns (paged) customers in their insertion order
    #[cfg_attr(feature = "schema", returns(PagedCustomersResponse))]
    GetAllCustomers {
        start_after: Option<CustomerId>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(MeasureLocationResponse))]
    GetMeasureLocation { location_id: MeasureLocationId },

    /// Returns id of the measure location at the given position of the insertion order
    #[cfg_attr(feature = "schema", returns(MeasureLocationAtIndexResponse))]
    GetMeasureLocationAtIndex { index: u32 },

    /// Returns (paged) measure locations in their insertion order
    #[cfg_attr(feature = "schema", returns(PagedMeasureLocationsResponse))]
    GetAllMeasureLocations {
        start_after: Option<MeasureLocationId>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(WindFarmResponse))]
    GetWindFarm {
        customer_id: CustomerId,
        farm_id: WindFarmId,
    },

    /// Returns id of the customer's wind farm at the given position of the insertion order
    #[cfg_attr(feature = "schema", returns(WindFarmAtIndexResponse))]
    GetWindFarmAtIndex { customer_id: CustomerId, index: u32 },

    /// Returns (paged) wind farms of the customer in their insertion order
    #[cfg_attr(feature = "schema", returns(PagedWindFarmsResponse))]
    GetAllCustomerWindFarms {
        customer_id: CustomerId,
        start_after: Option<WindFarmId>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(TurbineResponse))]
    GetTurbine {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },

    /// Returns id of the farm's turbine at the given position of the insertion order
    #[cfg_attr(feature = "schema", returns(TurbineAtIndexResponse))]
    GetTurbineAtIndex {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        index: u32,
    },

    /// Returns (paged) turbines of the wind farm in their insertion order
    #[cfg_attr(feature = "schema", returns(PagedTurbinesResponse))]
    GetAllFarmTurbines {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        start_after: Option<TurbineId>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(WindRecordResponse))]
    GetHistoricalWindAvg {
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    },

    /// Returns (paged) historical wind averages of the location ordered by their timestamp
    #[cfg_attr(feature = "schema", returns(PagedWindRecordsResponse))]
    GetHistoricalWindAvgsPaged {
        location_id: MeasureLocationId,
        start_after: Option<Timestamp>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(WindRecordResponse))]
    GetMeasuredWind {
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    },

    /// Returns (paged) wind measurements of the location ordered by their timestamp
    #[cfg_attr(feature = "schema", returns(PagedWindRecordsResponse))]
    GetMeasuredWindPaged {
        location_id: MeasureLocationId,
        start_after: Option<Timestamp>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(OutputReportResponse))]
    GetOutputReport {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },

    /// Returns (paged) output reports of all turbines of the wind farm
    #[cfg_attr(feature = "schema", returns(PagedOutputReportsResponse))]
    GetFarmOutputReportsPaged {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        start_after: Option<TurbineId>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {
    //
}
