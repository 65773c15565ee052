// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::{
    Bytes32ParseError, CustomerId, MeasureLocationId, Timestamp, TurbineId, WindFarmId,
    WindRecordKind,
};
use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AquilaEngineContractError {
    #[error("could not perform contract migration: {comment}")]
    FailedMigration { comment: String },

    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error(transparent)]
    StdErr(#[from] StdError),

    #[error("the oracle job id can't be empty")]
    EmptyOracleJobId,

    #[error("the balance denomination can't be empty")]
    EmptyBalanceDenom,

    #[error(transparent)]
    InvalidBytes32(#[from] Bytes32ParseError),

    #[error("customer {customer_id} already exists")]
    CustomerAlreadyExists { customer_id: CustomerId },

    #[error("customer {customer_id} does not exist")]
    CustomerNotFound { customer_id: CustomerId },

    #[error("customer {customer_id} still owns wind farms and can't be removed")]
    CustomerHasWindFarms { customer_id: CustomerId },

    #[error("measure location {location_id} already exists")]
    MeasureLocationAlreadyExists { location_id: MeasureLocationId },

    #[error("measure location {location_id} does not exist")]
    MeasureLocationNotFound { location_id: MeasureLocationId },

    #[error("measure location {location_id} still has wind records and can't be removed")]
    MeasureLocationHasWindRecords { location_id: MeasureLocationId },

    #[error("wind farm {farm_id} of customer {customer_id} already exists")]
    WindFarmAlreadyExists {
        customer_id: CustomerId,
        farm_id: WindFarmId,
    },

    #[error("wind farm {farm_id} of customer {customer_id} does not exist")]
    WindFarmNotFound {
        customer_id: CustomerId,
        farm_id: WindFarmId,
    },

    #[error("wind farm {farm_id} of customer {customer_id} still has turbines and can't be removed")]
    WindFarmHasTurbines {
        customer_id: CustomerId,
        farm_id: WindFarmId,
    },

    #[error("turbine {turbine_id} of wind farm {farm_id} (customer {customer_id}) already exists")]
    TurbineAlreadyExists {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },

    #[error("turbine {turbine_id} of wind farm {farm_id} (customer {customer_id}) does not exist")]
    TurbineNotFound {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },

    #[error("turbine {turbine_id} of wind farm {farm_id} (customer {customer_id}) still has an output report and can't be removed")]
    TurbineHasOutputReport {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },

    #[error("{kind} record for location {location_id} at {timestamp} already exists")]
    WindRecordAlreadyExists {
        kind: WindRecordKind,
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    },

    #[error("{kind} record for location {location_id} at {timestamp} does not exist")]
    WindRecordNotFound {
        kind: WindRecordKind,
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    },

    #[error("there's no output report for turbine {turbine_id} of wind farm {farm_id} (customer {customer_id})")]
    OutputReportNotFound {
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    },
}
