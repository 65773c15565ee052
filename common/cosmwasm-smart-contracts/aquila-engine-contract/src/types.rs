// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::Bytes32;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;
use std::fmt::{Display, Formatter};

pub type CustomerId = u64;
pub type MeasureLocationId = u64;
pub type WindFarmId = u64;
pub type TurbineId = u64;

/// Unix timestamp, in seconds.
pub type Timestamp = u64;

pub type WindFarmKey = (CustomerId, WindFarmId);
pub type TurbineKey = (CustomerId, WindFarmId, TurbineId);
pub type WindRecordKey = (MeasureLocationId, Timestamp);

/// Historical averages and live measurements share the same shape.
pub type HistoricalWindAvg = WindRecord;
pub type MeasuredWind = WindRecord;

#[cw_serde]
pub struct Config {
    /// Job id used by the oracle integration when requesting wind forecasts.
    pub oracle_job_id: String,

    /// Denomination reported by the balance query.
    pub balance_denom: String,
}

/// Describes how the id of a newly added entry has been chosen.
#[cw_serde]
#[derive(Copy)]
pub enum IdAllocation {
    /// The contract assigned the next free sequential id.
    Auto,

    /// The sender supplied the id explicitly.
    Explicit,
}

impl Display for IdAllocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IdAllocation::Auto => write!(f, "auto"),
            IdAllocation::Explicit => write!(f, "explicit"),
        }
    }
}

#[cw_serde]
#[derive(Copy)]
pub enum WindRecordKind {
    HistoricalAverage,
    Measured,
}

impl Display for WindRecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WindRecordKind::HistoricalAverage => write!(f, "historical_wind_avg"),
            WindRecordKind::Measured => write!(f, "measured_wind"),
        }
    }
}

#[cw_serde]
#[derive(Copy)]
pub struct Customer {
    pub id: CustomerId,
}

#[cw_serde]
#[derive(Copy)]
pub struct MeasureLocation {
    pub id: MeasureLocationId,

    /// Encoded `"latitude,longitude"` pair of the location.
    pub coordinate: Bytes32,
}

#[cw_serde]
#[derive(Copy)]
pub struct WindFarm {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub x: i64,
    pub y: i64,
}

impl WindFarm {
    pub fn key(&self) -> WindFarmKey {
        (self.customer_id, self.farm_id)
    }
}

#[cw_serde]
#[derive(Copy)]
pub struct Turbine {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub turbine_id: TurbineId,

    /// Position of the turbine within its farm.
    pub position: u64,

    /// Hub height of the turbine.
    pub height: u64,
}

impl Turbine {
    pub fn key(&self) -> TurbineKey {
        (self.customer_id, self.farm_id, self.turbine_id)
    }
}

#[cw_serde]
#[derive(Copy)]
pub struct WindRecord {
    pub location_id: MeasureLocationId,
    pub timestamp: Timestamp,
    pub value: u64,
}

impl WindRecord {
    pub fn key(&self) -> WindRecordKey {
        (self.location_id, self.timestamp)
    }
}

#[cw_serde]
#[derive(Copy)]
pub struct OutputReport {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub turbine_id: TurbineId,
    pub timestamp: Timestamp,
    pub value: u64,
}

impl OutputReport {
    pub fn key(&self) -> TurbineKey {
        (self.customer_id, self.farm_id, self.turbine_id)
    }
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Coin,
}

#[cw_serde]
pub struct OracleJobIdResponse {
    pub job_id: String,
}

#[cw_serde]
pub struct Bytes32Response {
    pub value: Bytes32,
}

#[cw_serde]
pub struct CustomerResponse {
    pub customer_id: CustomerId,
    pub customer: Option<Customer>,
}

#[cw_serde]
pub struct CustomerAtIndexResponse {
    pub index: u32,
    pub customer_id: Option<CustomerId>,
}

#[cw_serde]
pub struct PagedCustomersResponse {
    pub customers: Vec<Customer>,
    pub start_next_after: Option<CustomerId>,
}

#[cw_serde]
pub struct MeasureLocationResponse {
    pub location_id: MeasureLocationId,
    pub location: Option<MeasureLocation>,
}

#[cw_serde]
pub struct MeasureLocationAtIndexResponse {
    pub index: u32,
    pub location_id: Option<MeasureLocationId>,
}

#[cw_serde]
pub struct PagedMeasureLocationsResponse {
    pub locations: Vec<MeasureLocation>,
    pub start_next_after: Option<MeasureLocationId>,
}

#[cw_serde]
pub struct WindFarmResponse {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub wind_farm: Option<WindFarm>,
}

#[cw_serde]
pub struct WindFarmAtIndexResponse {
    pub customer_id: CustomerId,
    pub index: u32,
    pub farm_id: Option<WindFarmId>,
}

#[cw_serde]
pub struct PagedWindFarmsResponse {
    pub customer_id: CustomerId,
    pub wind_farms: Vec<WindFarm>,
    pub start_next_after: Option<WindFarmId>,
}

#[cw_serde]
pub struct TurbineResponse {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub turbine_id: TurbineId,
    pub turbine: Option<Turbine>,
}

#[cw_serde]
pub struct TurbineAtIndexResponse {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub index: u32,
    pub turbine_id: Option<TurbineId>,
}

#[cw_serde]
pub struct PagedTurbinesResponse {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub turbines: Vec<Turbine>,
    pub start_next_after: Option<TurbineId>,
}

#[cw_serde]
pub struct WindRecordResponse {
    pub location_id: MeasureLocationId,
    pub timestamp: Timestamp,
    pub record: Option<WindRecord>,
}

#[cw_serde]
pub struct PagedWindRecordsResponse {
    pub location_id: MeasureLocationId,
    pub records: Vec<WindRecord>,
    pub start_next_after: Option<Timestamp>,
}

#[cw_serde]
pub struct OutputReportResponse {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub turbine_id: TurbineId,
    pub report: Option<OutputReport>,
}

#[cw_serde]
pub struct PagedOutputReportsResponse {
    pub customer_id: CustomerId,
    pub farm_id: WindFarmId,
    pub reports: Vec<OutputReport>,
    pub start_next_after: Option<TurbineId>,
}
