// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::{
    Customer, CustomerId, IdAllocation, MeasureLocation, MeasureLocationId, OutputReport,
    Timestamp, Turbine, TurbineKey, WindFarm, WindFarmKey, WindRecord, WindRecordKind,
};
use cosmwasm_std::Event;

pub enum AquilaEngineEventType {
    CustomerAdded,
    CustomerRemoved,
    MeasureLocationAdded,
    MeasureLocationRemoved,
    WindFarmAdded,
    WindFarmRemoved,
    TurbineAdded,
    TurbineRemoved,
    WindRecordAdded(WindRecordKind),
    WindRecordRemoved(WindRecordKind),
    OutputReportAdded,
    OutputReportRemoved,
    OracleJobIdUpdate,
}

impl From<AquilaEngineEventType> for String {
    fn from(typ: AquilaEngineEventType) -> Self {
        typ.to_string()
    }
}

impl std::fmt::Display for AquilaEngineEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AquilaEngineEventType::CustomerAdded => write!(f, "customer_added"),
            AquilaEngineEventType::CustomerRemoved => write!(f, "customer_removed"),
            AquilaEngineEventType::MeasureLocationAdded => write!(f, "measure_location_added"),
            AquilaEngineEventType::MeasureLocationRemoved => write!(f, "measure_location_removed"),
            AquilaEngineEventType::WindFarmAdded => write!(f, "wind_farm_added"),
            AquilaEngineEventType::WindFarmRemoved => write!(f, "wind_farm_removed"),
            AquilaEngineEventType::TurbineAdded => write!(f, "turbine_added"),
            AquilaEngineEventType::TurbineRemoved => write!(f, "turbine_removed"),
            AquilaEngineEventType::WindRecordAdded(kind) => write!(f, "{kind}_added"),
            AquilaEngineEventType::WindRecordRemoved(kind) => write!(f, "{kind}_removed"),
            AquilaEngineEventType::OutputReportAdded => write!(f, "output_report_added"),
            AquilaEngineEventType::OutputReportRemoved => write!(f, "output_report_removed"),
            AquilaEngineEventType::OracleJobIdUpdate => write!(f, "oracle_job_id_update"),
        }
    }
}

// attributes that are used in multiple places
pub const CUSTOMER_ID_KEY: &str = "customer_id";
pub const LOCATION_ID_KEY: &str = "location_id";
pub const FARM_ID_KEY: &str = "farm_id";
pub const TURBINE_ID_KEY: &str = "turbine_id";
pub const TIMESTAMP_KEY: &str = "timestamp";
pub const VALUE_KEY: &str = "value";
pub const ID_ALLOCATION_KEY: &str = "id_allocation";

// event-specific attributes
pub const COORDINATE_KEY: &str = "coordinate";
pub const X_KEY: &str = "x";
pub const Y_KEY: &str = "y";
pub const POSITION_KEY: &str = "position";
pub const HEIGHT_KEY: &str = "height";
pub const REPLACED_KEY: &str = "replaced";
pub const OLD_JOB_ID_KEY: &str = "old_job_id";
pub const NEW_JOB_ID_KEY: &str = "new_job_id";

pub fn new_customer_added_event(customer: &Customer, allocation: IdAllocation) -> Event {
    Event::new(AquilaEngineEventType::CustomerAdded)
        .add_attribute(CUSTOMER_ID_KEY, customer.id.to_string())
        .add_attribute(ID_ALLOCATION_KEY, allocation.to_string())
}

pub fn new_customer_removed_event(customer_id: CustomerId) -> Event {
    Event::new(AquilaEngineEventType::CustomerRemoved)
        .add_attribute(CUSTOMER_ID_KEY, customer_id.to_string())
}

pub fn new_measure_location_added_event(
    location: &MeasureLocation,
    allocation: IdAllocation,
) -> Event {
    Event::new(AquilaEngineEventType::MeasureLocationAdded)
        .add_attribute(LOCATION_ID_KEY, location.id.to_string())
        .add_attribute(COORDINATE_KEY, location.coordinate.to_string())
        .add_attribute(ID_ALLOCATION_KEY, allocation.to_string())
}

pub fn new_measure_location_removed_event(location_id: MeasureLocationId) -> Event {
    Event::new(AquilaEngineEventType::MeasureLocationRemoved)
        .add_attribute(LOCATION_ID_KEY, location_id.to_string())
}

pub fn new_wind_farm_added_event(wind_farm: &WindFarm, allocation: IdAllocation) -> Event {
    Event::new(AquilaEngineEventType::WindFarmAdded)
        .add_attribute(CUSTOMER_ID_KEY, wind_farm.customer_id.to_string())
        .add_attribute(FARM_ID_KEY, wind_farm.farm_id.to_string())
        .add_attribute(X_KEY, wind_farm.x.to_string())
        .add_attribute(Y_KEY, wind_farm.y.to_string())
        .add_attribute(ID_ALLOCATION_KEY, allocation.to_string())
}

pub fn new_wind_farm_removed_event((customer_id, farm_id): WindFarmKey) -> Event {
    Event::new(AquilaEngineEventType::WindFarmRemoved)
        .add_attribute(CUSTOMER_ID_KEY, customer_id.to_string())
        .add_attribute(FARM_ID_KEY, farm_id.to_string())
}

pub fn new_turbine_added_event(turbine: &Turbine, allocation: IdAllocation) -> Event {
    Event::new(AquilaEngineEventType::TurbineAdded)
        .add_attribute(CUSTOMER_ID_KEY, turbine.customer_id.to_string())
        .add_attribute(FARM_ID_KEY, turbine.farm_id.to_string())
        .add_attribute(TURBINE_ID_KEY, turbine.turbine_id.to_string())
        .add_attribute(POSITION_KEY, turbine.position.to_string())
        .add_attribute(HEIGHT_KEY, turbine.height.to_string())
        .add_attribute(ID_ALLOCATION_KEY, allocation.to_string())
}

pub fn new_turbine_removed_event((customer_id, farm_id, turbine_id): TurbineKey) -> Event {
    Event::new(AquilaEngineEventType::TurbineRemoved)
        .add_attribute(CUSTOMER_ID_KEY, customer_id.to_string())
        .add_attribute(FARM_ID_KEY, farm_id.to_string())
        .add_attribute(TURBINE_ID_KEY, turbine_id.to_string())
}

pub fn new_wind_record_added_event(kind: WindRecordKind, record: &WindRecord) -> Event {
    Event::new(AquilaEngineEventType::WindRecordAdded(kind))
        .add_attribute(LOCATION_ID_KEY, record.location_id.to_string())
        .add_attribute(TIMESTAMP_KEY, record.timestamp.to_string())
        .add_attribute(VALUE_KEY, record.value.to_string())
}

pub fn new_wind_record_removed_event(
    kind: WindRecordKind,
    location_id: MeasureLocationId,
    timestamp: Timestamp,
) -> Event {
    Event::new(AquilaEngineEventType::WindRecordRemoved(kind))
        .add_attribute(LOCATION_ID_KEY, location_id.to_string())
        .add_attribute(TIMESTAMP_KEY, timestamp.to_string())
}

pub fn new_output_report_added_event(report: &OutputReport, replaced: bool) -> Event {
    Event::new(AquilaEngineEventType::OutputReportAdded)
        .add_attribute(CUSTOMER_ID_KEY, report.customer_id.to_string())
        .add_attribute(FARM_ID_KEY, report.farm_id.to_string())
        .add_attribute(TURBINE_ID_KEY, report.turbine_id.to_string())
        .add_attribute(TIMESTAMP_KEY, report.timestamp.to_string())
        .add_attribute(VALUE_KEY, report.value.to_string())
        .add_attribute(REPLACED_KEY, replaced.to_string())
}

pub fn new_output_report_removed_event((customer_id, farm_id, turbine_id): TurbineKey) -> Event {
    Event::new(AquilaEngineEventType::OutputReportRemoved)
        .add_attribute(CUSTOMER_ID_KEY, customer_id.to_string())
        .add_attribute(FARM_ID_KEY, farm_id.to_string())
        .add_attribute(TURBINE_ID_KEY, turbine_id.to_string())
}

pub fn new_oracle_job_id_update_event(old: &str, new: &str) -> Event {
    Event::new(AquilaEngineEventType::OracleJobIdUpdate)
        .add_attribute(OLD_JOB_ID_KEY, old)
        .add_attribute(NEW_JOB_ID_KEY, new)
}
