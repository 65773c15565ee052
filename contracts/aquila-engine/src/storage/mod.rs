// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::registry::{OrderedRegistry, GLOBAL_SCOPE};
use aquila_engine_contract_common::constants::{
    storage_keys, FIRST_CUSTOMER_ID, FIRST_MEASURE_LOCATION_ID, FIRST_TURBINE_ID,
    FIRST_WIND_FARM_ID,
};
use aquila_engine_contract_common::{
    AquilaEngineContractError, Bytes32, Config, Customer, CustomerId, MeasureLocation,
    MeasureLocationId, OutputReport, Timestamp, Turbine, TurbineId, TurbineKey, WindFarm,
    WindFarmId, WindFarmKey, WindRecord, WindRecordKey, WindRecordKind,
};
use cosmwasm_std::{Addr, Deps, DepsMut, Order, Storage};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

pub(crate) mod registry;

pub const AQUILA_ENGINE_STORAGE: AquilaEngineStorage = AquilaEngineStorage::new();

pub struct AquilaEngineStorage {
    pub(crate) contract_admin: Admin,
    pub(crate) config: Item<Config>,

    pub(crate) customers: OrderedRegistry<CustomerId, Customer>,
    pub(crate) measure_locations: OrderedRegistry<MeasureLocationId, MeasureLocation>,

    /// Wind farms, scoped by their owning customer.
    pub(crate) wind_farms: OrderedRegistry<WindFarmKey, WindFarm>,

    /// Turbines, scoped by their owning wind farm.
    pub(crate) turbines: OrderedRegistry<TurbineKey, Turbine>,

    pub(crate) historical_wind_avgs: Map<WindRecordKey, WindRecord>,
    pub(crate) measured_wind: Map<WindRecordKey, WindRecord>,

    /// The latest output report of each turbine.
    pub(crate) output_reports: Map<TurbineKey, OutputReport>,
}

impl AquilaEngineStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        AquilaEngineStorage {
            contract_admin: Admin::new(storage_keys::CONTRACT_ADMIN),
            config: Item::new(storage_keys::CONFIG),
            customers: OrderedRegistry::new(
                storage_keys::CUSTOMERS,
                storage_keys::CUSTOMER_POSITIONS,
                storage_keys::CUSTOMER_ORDER,
                storage_keys::CUSTOMER_SEQUENCE,
                storage_keys::CUSTOMER_ID_COUNTER,
                FIRST_CUSTOMER_ID,
            ),
            measure_locations: OrderedRegistry::new(
                storage_keys::MEASURE_LOCATIONS,
                storage_keys::MEASURE_LOCATION_POSITIONS,
                storage_keys::MEASURE_LOCATION_ORDER,
                storage_keys::MEASURE_LOCATION_SEQUENCE,
                storage_keys::MEASURE_LOCATION_ID_COUNTER,
                FIRST_MEASURE_LOCATION_ID,
            ),
            wind_farms: OrderedRegistry::new(
                storage_keys::WIND_FARMS,
                storage_keys::WIND_FARM_POSITIONS,
                storage_keys::WIND_FARM_ORDER,
                storage_keys::WIND_FARM_SEQUENCE,
                storage_keys::WIND_FARM_ID_COUNTER,
                FIRST_WIND_FARM_ID,
            ),
            turbines: OrderedRegistry::new(
                storage_keys::TURBINES,
                storage_keys::TURBINE_POSITIONS,
                storage_keys::TURBINE_ORDER,
                storage_keys::TURBINE_SEQUENCE,
                storage_keys::TURBINE_ID_COUNTER,
                FIRST_TURBINE_ID,
            ),
            historical_wind_avgs: Map::new(storage_keys::HISTORICAL_WIND_AVGS),
            measured_wind: Map::new(storage_keys::MEASURED_WIND),
            output_reports: Map::new(storage_keys::OUTPUT_REPORTS),
        }
    }

    pub fn initialise(
        &self,
        mut deps: DepsMut,
        admin: Addr,
        config: Config,
    ) -> Result<(), AquilaEngineContractError> {
        if config.oracle_job_id.is_empty() {
            return Err(AquilaEngineContractError::EmptyOracleJobId);
        }
        if config.balance_denom.is_empty() {
            return Err(AquilaEngineContractError::EmptyBalanceDenom);
        }

        // set the contract admin
        self.contract_admin.set(deps.branch(), Some(admin))?;

        self.config.save(deps.storage, &config)?;

        Ok(())
    }

    fn ensure_is_admin(&self, deps: Deps, addr: &Addr) -> Result<(), AquilaEngineContractError> {
        self.contract_admin
            .assert_admin(deps, addr)
            .map_err(Into::into)
    }

    pub(crate) fn wind_records(&self, kind: WindRecordKind) -> &Map<WindRecordKey, WindRecord> {
        match kind {
            WindRecordKind::HistoricalAverage => &self.historical_wind_avgs,
            WindRecordKind::Measured => &self.measured_wind,
        }
    }

    fn location_has_wind_records(
        &self,
        store: &dyn Storage,
        location_id: MeasureLocationId,
    ) -> bool {
        [WindRecordKind::HistoricalAverage, WindRecordKind::Measured]
            .into_iter()
            .any(|kind| {
                self.wind_records(kind)
                    .prefix(location_id)
                    .keys_raw(store, None, None, Order::Ascending)
                    .next()
                    .is_some()
            })
    }

    /// Replaces the oracle job id, returning the previous value.
    pub fn update_oracle_job_id(
        &self,
        deps: DepsMut,
        sender: &Addr,
        job_id: String,
    ) -> Result<String, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        if job_id.is_empty() {
            return Err(AquilaEngineContractError::EmptyOracleJobId);
        }

        let mut config = self.config.load(deps.storage)?;
        let old = std::mem::replace(&mut config.oracle_job_id, job_id);
        self.config.save(deps.storage, &config)?;
        Ok(old)
    }

    fn save_new_customer(
        &self,
        store: &mut dyn Storage,
        customer_id: CustomerId,
    ) -> Result<Customer, AquilaEngineContractError> {
        let customer = Customer { id: customer_id };
        self.customers.insert(store, customer_id, &customer)?;
        Ok(customer)
    }

    pub fn add_customer(
        &self,
        deps: DepsMut,
        sender: &Addr,
    ) -> Result<Customer, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        let customer_id = self.customers.allocate_key(deps.storage, GLOBAL_SCOPE)?;
        self.save_new_customer(deps.storage, customer_id)
    }

    pub fn add_customer_with_id(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
    ) -> Result<Customer, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        if self.customers.has(deps.storage, customer_id) {
            return Err(AquilaEngineContractError::CustomerAlreadyExists { customer_id });
        }
        self.save_new_customer(deps.storage, customer_id)
    }

    pub fn remove_customer(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
    ) -> Result<Customer, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_customer_exists(deps.storage, customer_id)?;

        if !self.wind_farms.is_scope_empty(deps.storage, customer_id) {
            return Err(AquilaEngineContractError::CustomerHasWindFarms { customer_id });
        }

        self.customers
            .remove(deps.storage, customer_id)?
            .ok_or(AquilaEngineContractError::CustomerNotFound { customer_id })
    }

    fn ensure_customer_exists(
        &self,
        store: &dyn Storage,
        customer_id: CustomerId,
    ) -> Result<(), AquilaEngineContractError> {
        if !self.customers.has(store, customer_id) {
            return Err(AquilaEngineContractError::CustomerNotFound { customer_id });
        }
        Ok(())
    }

    fn save_new_measure_location(
        &self,
        store: &mut dyn Storage,
        location_id: MeasureLocationId,
        coordinate: Bytes32,
    ) -> Result<MeasureLocation, AquilaEngineContractError> {
        let location = MeasureLocation {
            id: location_id,
            coordinate,
        };
        self.measure_locations.insert(store, location_id, &location)?;
        Ok(location)
    }

    pub fn add_measure_location(
        &self,
        deps: DepsMut,
        sender: &Addr,
        coordinate: Bytes32,
    ) -> Result<MeasureLocation, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        let location_id = self
            .measure_locations
            .allocate_key(deps.storage, GLOBAL_SCOPE)?;
        self.save_new_measure_location(deps.storage, location_id, coordinate)
    }

    pub fn add_measure_location_with_id(
        &self,
        deps: DepsMut,
        sender: &Addr,
        location_id: MeasureLocationId,
        coordinate: Bytes32,
    ) -> Result<MeasureLocation, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        if self.measure_locations.has(deps.storage, location_id) {
            return Err(AquilaEngineContractError::MeasureLocationAlreadyExists { location_id });
        }
        self.save_new_measure_location(deps.storage, location_id, coordinate)
    }

    pub fn remove_measure_location(
        &self,
        deps: DepsMut,
        sender: &Addr,
        location_id: MeasureLocationId,
    ) -> Result<MeasureLocation, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_measure_location_exists(deps.storage, location_id)?;

        if self.location_has_wind_records(deps.storage, location_id) {
            return Err(AquilaEngineContractError::MeasureLocationHasWindRecords { location_id });
        }

        self.measure_locations
            .remove(deps.storage, location_id)?
            .ok_or(AquilaEngineContractError::MeasureLocationNotFound { location_id })
    }

    fn ensure_measure_location_exists(
        &self,
        store: &dyn Storage,
        location_id: MeasureLocationId,
    ) -> Result<(), AquilaEngineContractError> {
        if !self.measure_locations.has(store, location_id) {
            return Err(AquilaEngineContractError::MeasureLocationNotFound { location_id });
        }
        Ok(())
    }

    fn save_new_wind_farm(
        &self,
        store: &mut dyn Storage,
        (customer_id, farm_id): WindFarmKey,
        x: i64,
        y: i64,
    ) -> Result<WindFarm, AquilaEngineContractError> {
        let wind_farm = WindFarm {
            customer_id,
            farm_id,
            x,
            y,
        };
        self.wind_farms.insert(store, wind_farm.key(), &wind_farm)?;
        Ok(wind_farm)
    }

    pub fn add_wind_farm(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        x: i64,
        y: i64,
    ) -> Result<WindFarm, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_customer_exists(deps.storage, customer_id)?;

        let key = self.wind_farms.allocate_key(deps.storage, customer_id)?;
        self.save_new_wind_farm(deps.storage, key, x, y)
    }

    pub fn add_wind_farm_with_id(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        x: i64,
        y: i64,
    ) -> Result<WindFarm, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_customer_exists(deps.storage, customer_id)?;

        if self.wind_farms.has(deps.storage, (customer_id, farm_id)) {
            return Err(AquilaEngineContractError::WindFarmAlreadyExists {
                customer_id,
                farm_id,
            });
        }
        self.save_new_wind_farm(deps.storage, (customer_id, farm_id), x, y)
    }

    pub fn remove_wind_farm(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        farm_id: WindFarmId,
    ) -> Result<WindFarm, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_wind_farm_exists(deps.storage, customer_id, farm_id)?;

        if !self
            .turbines
            .is_scope_empty(deps.storage, (customer_id, farm_id))
        {
            return Err(AquilaEngineContractError::WindFarmHasTurbines {
                customer_id,
                farm_id,
            });
        }

        self.wind_farms
            .remove(deps.storage, (customer_id, farm_id))?
            .ok_or(AquilaEngineContractError::WindFarmNotFound {
                customer_id,
                farm_id,
            })
    }

    fn ensure_wind_farm_exists(
        &self,
        store: &dyn Storage,
        customer_id: CustomerId,
        farm_id: WindFarmId,
    ) -> Result<(), AquilaEngineContractError> {
        if !self.wind_farms.has(store, (customer_id, farm_id)) {
            return Err(AquilaEngineContractError::WindFarmNotFound {
                customer_id,
                farm_id,
            });
        }
        Ok(())
    }

    fn save_new_turbine(
        &self,
        store: &mut dyn Storage,
        (customer_id, farm_id, turbine_id): TurbineKey,
        position: u64,
        height: u64,
    ) -> Result<Turbine, AquilaEngineContractError> {
        let turbine = Turbine {
            customer_id,
            farm_id,
            turbine_id,
            position,
            height,
        };
        self.turbines.insert(store, turbine.key(), &turbine)?;
        Ok(turbine)
    }

    pub fn add_turbine(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        position: u64,
        height: u64,
    ) -> Result<Turbine, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_wind_farm_exists(deps.storage, customer_id, farm_id)?;

        let key = self
            .turbines
            .allocate_key(deps.storage, (customer_id, farm_id))?;
        self.save_new_turbine(deps.storage, key, position, height)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_turbine_with_id(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
        position: u64,
        height: u64,
    ) -> Result<Turbine, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_wind_farm_exists(deps.storage, customer_id, farm_id)?;

        let key = (customer_id, farm_id, turbine_id);
        if self.turbines.has(deps.storage, key) {
            return Err(AquilaEngineContractError::TurbineAlreadyExists {
                customer_id,
                farm_id,
                turbine_id,
            });
        }
        self.save_new_turbine(deps.storage, key, position, height)
    }

    pub fn remove_turbine(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    ) -> Result<Turbine, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        let key = (customer_id, farm_id, turbine_id);
        if !self.turbines.has(deps.storage, key) {
            return Err(AquilaEngineContractError::TurbineNotFound {
                customer_id,
                farm_id,
                turbine_id,
            });
        }

        if self.output_reports.has(deps.storage, key) {
            return Err(AquilaEngineContractError::TurbineHasOutputReport {
                customer_id,
                farm_id,
                turbine_id,
            });
        }

        self.turbines
            .remove(deps.storage, key)?
            .ok_or(AquilaEngineContractError::TurbineNotFound {
                customer_id,
                farm_id,
                turbine_id,
            })
    }

    pub fn add_wind_record(
        &self,
        deps: DepsMut,
        sender: &Addr,
        kind: WindRecordKind,
        record: WindRecord,
    ) -> Result<(), AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;
        self.ensure_measure_location_exists(deps.storage, record.location_id)?;

        let records = self.wind_records(kind);
        if records.has(deps.storage, record.key()) {
            return Err(AquilaEngineContractError::WindRecordAlreadyExists {
                kind,
                location_id: record.location_id,
                timestamp: record.timestamp,
            });
        }

        records.save(deps.storage, record.key(), &record)?;
        Ok(())
    }

    pub fn remove_wind_record(
        &self,
        deps: DepsMut,
        sender: &Addr,
        kind: WindRecordKind,
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    ) -> Result<WindRecord, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        let records = self.wind_records(kind);
        let Some(record) = records.may_load(deps.storage, (location_id, timestamp))? else {
            return Err(AquilaEngineContractError::WindRecordNotFound {
                kind,
                location_id,
                timestamp,
            });
        };

        records.remove(deps.storage, (location_id, timestamp));
        Ok(record)
    }

    /// Stores the output report of the turbine.
    /// Returns whether a previous report of that turbine has been replaced.
    pub fn add_output_report(
        &self,
        deps: DepsMut,
        sender: &Addr,
        report: OutputReport,
    ) -> Result<bool, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        let (customer_id, farm_id, turbine_id) = report.key();
        if !self.turbines.has(deps.storage, report.key()) {
            return Err(AquilaEngineContractError::TurbineNotFound {
                customer_id,
                farm_id,
                turbine_id,
            });
        }

        let replaced = self.output_reports.has(deps.storage, report.key());
        self.output_reports
            .save(deps.storage, report.key(), &report)?;
        Ok(replaced)
    }

    pub fn remove_output_report(
        &self,
        deps: DepsMut,
        sender: &Addr,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    ) -> Result<OutputReport, AquilaEngineContractError> {
        self.ensure_is_admin(deps.as_ref(), sender)?;

        let key = (customer_id, farm_id, turbine_id);
        let Some(report) = self.output_reports.may_load(deps.storage, key)? else {
            return Err(AquilaEngineContractError::OutputReportNotFound {
                customer_id,
                farm_id,
                turbine_id,
            });
        };

        self.output_reports.remove(deps.storage, key);
        Ok(report)
    }
}

pub mod retrieval_limits {
    pub const CUSTOMERS_DEFAULT_LIMIT: u32 = 100;
    pub const CUSTOMERS_MAX_LIMIT: u32 = 200;

    pub const MEASURE_LOCATIONS_DEFAULT_LIMIT: u32 = 100;
    pub const MEASURE_LOCATIONS_MAX_LIMIT: u32 = 200;

    pub const WIND_FARMS_DEFAULT_LIMIT: u32 = 50;
    pub const WIND_FARMS_MAX_LIMIT: u32 = 100;

    pub const TURBINES_DEFAULT_LIMIT: u32 = 100;
    pub const TURBINES_MAX_LIMIT: u32 = 200;

    pub const WIND_RECORDS_DEFAULT_LIMIT: u32 = 100;
    pub const WIND_RECORDS_MAX_LIMIT: u32 = 500;

    pub const OUTPUT_REPORTS_DEFAULT_LIMIT: u32 = 100;
    pub const OUTPUT_REPORTS_MAX_LIMIT: u32 = 200;
}
