// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

/// Job id reported for the oracle integration unless a different one is set at instantiation.
pub const DEFAULT_ORACLE_JOB_ID: &str = "0000000001";

/// Ids handed out by the auto-increment customer registry start here.
pub const FIRST_CUSTOMER_ID: u64 = 1;

/// Ids handed out by the auto-increment location, wind farm and turbine registries start here.
pub const FIRST_MEASURE_LOCATION_ID: u64 = 0;
pub const FIRST_WIND_FARM_ID: u64 = 0;
pub const FIRST_TURBINE_ID: u64 = 0;

pub mod storage_keys {
    pub const CONTRACT_ADMIN: &str = "contract-admin";
    pub const CONFIG: &str = "config";

    pub const CUSTOMERS: &str = "customers";
    pub const CUSTOMER_POSITIONS: &str = "customers-pos";
    pub const CUSTOMER_ORDER: &str = "customers-ord";
    pub const CUSTOMER_SEQUENCE: &str = "customers-seq";
    pub const CUSTOMER_ID_COUNTER: &str = "customers-idc";

    pub const MEASURE_LOCATIONS: &str = "locations";
    pub const MEASURE_LOCATION_POSITIONS: &str = "locations-pos";
    pub const MEASURE_LOCATION_ORDER: &str = "locations-ord";
    pub const MEASURE_LOCATION_SEQUENCE: &str = "locations-seq";
    pub const MEASURE_LOCATION_ID_COUNTER: &str = "locations-idc";

    pub const WIND_FARMS: &str = "farms";
    pub const WIND_FARM_POSITIONS: &str = "farms-pos";
    pub const WIND_FARM_ORDER: &str = "farms-ord";
    pub const WIND_FARM_SEQUENCE: &str = "farms-seq";
    pub const WIND_FARM_ID_COUNTER: &str = "farms-idc";

    pub const TURBINES: &str = "turbines";
    pub const TURBINE_POSITIONS: &str = "turbines-pos";
    pub const TURBINE_ORDER: &str = "turbines-ord";
    pub const TURBINE_SEQUENCE: &str = "turbines-seq";
    pub const TURBINE_ID_COUNTER: &str = "turbines-idc";

    pub const HISTORICAL_WIND_AVGS: &str = "wind-hist";
    pub const MEASURED_WIND: &str = "wind-meas";
    pub const OUTPUT_REPORTS: &str = "output";
}
