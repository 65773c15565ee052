// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::contract::{execute, instantiate, query};
use aquila_engine_contract_common::{
    AquilaEngineContractError, BalanceResponse, Bytes32, CustomerAtIndexResponse, CustomerId,
    CustomerResponse, ExecuteMsg, InstantiateMsg, MeasureLocationAtIndexResponse,
    MeasureLocationId, MeasureLocationResponse, OutputReportResponse, PagedCustomersResponse,
    PagedMeasureLocationsResponse, PagedTurbinesResponse, PagedWindFarmsResponse, QueryMsg,
    Timestamp, TurbineAtIndexResponse, TurbineId, TurbineResponse, WindFarmAtIndexResponse,
    WindFarmId, WindFarmResponse, WindRecordResponse,
};
use cosmwasm_std::{coins, from_json, Addr, Coin};
use cw_multi_test::{App, AppBuilder, AppResponse, ContractWrapper, Executor};
use serde::de::DeserializeOwned;

pub const DENOM: &str = "uaqla";
const ADDRESSES: &[&str] = &["admin", "user", "operator"];

/// Helper for running the contract inside a multi-test chain
pub struct TestSetup {
    app: App,
    addr: Addr,
    admin: Addr,
}

impl Default for TestSetup {
    fn default() -> Self {
        TestSetup::new()
    }
}

impl TestSetup {
    pub fn new() -> Self {
        let mut app = AppBuilder::new().build(|router, api, storage| {
            for account in ADDRESSES {
                router
                    .bank
                    .init_balance(storage, &api.addr_make(account), coins(1000, DENOM))
                    .unwrap();
            }
        });
        let code = ContractWrapper::new(execute, instantiate, query);
        let code_id = app.store_code(Box::new(code));
        let admin = app.api().addr_make("admin");
        let addr = Self::instantiate(&mut app, code_id, &admin);
        TestSetup { app, addr, admin }
    }

    fn instantiate(app: &mut App, code_id: u64, admin: &Addr) -> Addr {
        app.instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                oracle_job_id: None,
                balance_denom: DENOM.to_string(),
            },
            &[],
            "aquila-engine",
            None,
        )
        .unwrap()
    }

    pub fn admin(&self) -> Addr {
        self.admin.clone()
    }

    pub fn user(&self) -> Addr {
        self.app.api().addr_make("user")
    }

    pub fn fund_contract(&mut self, sender: &Addr, amount: u128) {
        self.app
            .send_tokens(sender.clone(), self.addr.clone(), &coins(amount, DENOM))
            .unwrap();
    }

    pub fn query<T: DeserializeOwned>(&self, query_msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(&self.addr, query_msg)
            .unwrap()
    }

    pub fn try_execute_as(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.addr.clone(), msg, &[])
    }

    pub fn execute(&mut self, msg: &ExecuteMsg) -> AppResponse {
        let admin = self.admin();
        self.try_execute_as(&admin, msg).unwrap()
    }

    /// Executes the message as the admin and returns the contract error it failed with.
    pub fn execute_err(&mut self, msg: &ExecuteMsg) -> AquilaEngineContractError {
        let admin = self.admin();
        self.try_execute_as(&admin, msg)
            .unwrap_err()
            .downcast::<AquilaEngineContractError>()
            .unwrap()
    }

    fn execute_returning_id(&mut self, msg: &ExecuteMsg) -> u64 {
        let res = self.execute(msg);
        from_json(res.data.unwrap()).unwrap()
    }

    pub fn contract_balance(&self) -> Coin {
        self.query::<BalanceResponse>(&QueryMsg::GetBalance {})
            .balance
    }

    pub fn add_customer(&mut self) -> CustomerId {
        self.execute_returning_id(&ExecuteMsg::AddCustomer {})
    }

    pub fn add_customer_with_id(&mut self, customer_id: CustomerId) {
        self.execute(&ExecuteMsg::AddCustomerWithId { customer_id });
    }

    pub fn remove_customer(&mut self, customer_id: CustomerId) {
        self.execute(&ExecuteMsg::RemoveCustomer { customer_id });
    }

    pub fn query_customer(&self, customer_id: CustomerId) -> CustomerResponse {
        self.query(&QueryMsg::GetCustomer { customer_id })
    }

    pub fn query_customer_at_index(&self, index: u32) -> Option<CustomerId> {
        self.query::<CustomerAtIndexResponse>(&QueryMsg::GetCustomerAtIndex { index })
            .customer_id
    }

    pub fn query_all_customers(&self) -> PagedCustomersResponse {
        self.query(&QueryMsg::GetAllCustomers {
            start_after: None,
            limit: None,
        })
    }

    pub fn add_measure_location(&mut self, coordinate: Bytes32) -> MeasureLocationId {
        self.execute_returning_id(&ExecuteMsg::AddMeasureLocation { coordinate })
    }

    pub fn add_measure_location_with_id(
        &mut self,
        location_id: MeasureLocationId,
        coordinate: Bytes32,
    ) {
        self.execute(&ExecuteMsg::AddMeasureLocationWithId {
            location_id,
            coordinate,
        });
    }

    pub fn query_measure_location(
        &self,
        location_id: MeasureLocationId,
    ) -> MeasureLocationResponse {
        self.query(&QueryMsg::GetMeasureLocation { location_id })
    }

    pub fn query_measure_location_at_index(&self, index: u32) -> Option<MeasureLocationId> {
        self.query::<MeasureLocationAtIndexResponse>(&QueryMsg::GetMeasureLocationAtIndex {
            index,
        })
        .location_id
    }

    pub fn query_all_measure_locations(&self) -> PagedMeasureLocationsResponse {
        self.query(&QueryMsg::GetAllMeasureLocations {
            start_after: None,
            limit: None,
        })
    }

    pub fn add_wind_farm(&mut self, customer_id: CustomerId, x: i64, y: i64) -> WindFarmId {
        self.execute_returning_id(&ExecuteMsg::AddWindFarm { customer_id, x, y })
    }

    pub fn query_wind_farm(
        &self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
    ) -> WindFarmResponse {
        self.query(&QueryMsg::GetWindFarm {
            customer_id,
            farm_id,
        })
    }

    pub fn query_wind_farm_at_index(
        &self,
        customer_id: CustomerId,
        index: u32,
    ) -> Option<WindFarmId> {
        self.query::<WindFarmAtIndexResponse>(&QueryMsg::GetWindFarmAtIndex { customer_id, index })
            .farm_id
    }

    pub fn query_customer_wind_farms(&self, customer_id: CustomerId) -> PagedWindFarmsResponse {
        self.query(&QueryMsg::GetAllCustomerWindFarms {
            customer_id,
            start_after: None,
            limit: None,
        })
    }

    pub fn add_turbine(
        &mut self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        position: u64,
        height: u64,
    ) -> TurbineId {
        self.execute_returning_id(&ExecuteMsg::AddTurbine {
            customer_id,
            farm_id,
            position,
            height,
        })
    }

    pub fn query_turbine(
        &self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    ) -> TurbineResponse {
        self.query(&QueryMsg::GetTurbine {
            customer_id,
            farm_id,
            turbine_id,
        })
    }

    pub fn query_turbine_at_index(
        &self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        index: u32,
    ) -> Option<TurbineId> {
        self.query::<TurbineAtIndexResponse>(&QueryMsg::GetTurbineAtIndex {
            customer_id,
            farm_id,
            index,
        })
        .turbine_id
    }

    pub fn query_farm_turbines(
        &self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
    ) -> PagedTurbinesResponse {
        self.query(&QueryMsg::GetAllFarmTurbines {
            customer_id,
            farm_id,
            start_after: None,
            limit: None,
        })
    }

    pub fn query_historical_wind_avg(
        &self,
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    ) -> WindRecordResponse {
        self.query(&QueryMsg::GetHistoricalWindAvg {
            location_id,
            timestamp,
        })
    }

    pub fn query_measured_wind(
        &self,
        location_id: MeasureLocationId,
        timestamp: Timestamp,
    ) -> WindRecordResponse {
        self.query(&QueryMsg::GetMeasuredWind {
            location_id,
            timestamp,
        })
    }

    pub fn query_output_report(
        &self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
        turbine_id: TurbineId,
    ) -> OutputReportResponse {
        self.query(&QueryMsg::GetOutputReport {
            customer_id,
            farm_id,
            turbine_id,
        })
    }
}

/// Returns whether the response contains the given contract event.
pub fn has_contract_event(response: &AppResponse, event_type: &str) -> bool {
    let wasm_type = format!("wasm-{event_type}");
    response.events.iter().any(|event| event.ty == wasm_type)
}
