// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::contract::{execute, instantiate, query};
use crate::storage::AQUILA_ENGINE_STORAGE;
use aquila_engine_contract_common::{
    AquilaEngineContractError, Bytes32, CustomerId, ExecuteMsg, InstantiateMsg, MeasureLocationId,
    QueryMsg, TurbineId, WindFarmId,
};
use cosmwasm_std::testing::{
    message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{from_json, Addr, Deps, DepsMut, Env, OwnedDeps, Response, Storage};
use serde::de::DeserializeOwned;

pub(crate) const TEST_DENOM: &str = "uaqla";

pub(crate) fn init_contract_tester() -> ContractTester {
    ContractTester::new()
}

/// Contract instantiated on top of mock dependencies, for exercising
/// the storage, transaction and query layers directly.
pub(crate) struct ContractTester {
    deps: OwnedDeps<MockStorage, MockApi, MockQuerier>,
    env: Env,
    admin: Addr,
    generated_accounts: usize,
}

impl ContractTester {
    pub(crate) fn new() -> Self {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let admin = deps.api.addr_make("admin");

        let init_msg = InstantiateMsg {
            oracle_job_id: None,
            balance_denom: TEST_DENOM.to_string(),
        };

        instantiate(
            deps.as_mut(),
            env.clone(),
            message_info(&admin, &[]),
            init_msg,
        )
        .unwrap();

        ContractTester {
            deps,
            env,
            admin,
            generated_accounts: 0,
        }
    }

    pub(crate) fn deps(&self) -> Deps<'_> {
        self.deps.as_ref()
    }

    pub(crate) fn deps_mut(&mut self) -> DepsMut<'_> {
        self.deps.as_mut()
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        &self.deps.storage
    }

    pub(crate) fn env(&self) -> Env {
        self.env.clone()
    }

    pub(crate) fn admin_unchecked(&self) -> Addr {
        self.admin.clone()
    }

    pub(crate) fn generate_account(&mut self) -> Addr {
        self.generated_accounts += 1;
        self.deps
            .api
            .addr_make(&format!("generated-account-{}", self.generated_accounts))
    }

    pub(crate) fn execute_msg(
        &mut self,
        sender: Addr,
        msg: &ExecuteMsg,
    ) -> Result<Response, AquilaEngineContractError> {
        let env = self.env();
        execute(
            self.deps.as_mut(),
            env,
            message_info(&sender, &[]),
            msg.clone(),
        )
    }

    pub(crate) fn execute_admin_msg(
        &mut self,
        msg: &ExecuteMsg,
    ) -> Result<Response, AquilaEngineContractError> {
        self.execute_msg(self.admin_unchecked(), msg)
    }

    pub(crate) fn query<T: DeserializeOwned>(&self, msg: QueryMsg) -> anyhow::Result<T> {
        let res = query(self.deps(), self.env(), msg)?;
        Ok(from_json(&res)?)
    }

    pub(crate) fn add_customer(&mut self) -> CustomerId {
        let admin = self.admin_unchecked();
        AQUILA_ENGINE_STORAGE
            .add_customer(self.deps_mut(), &admin)
            .unwrap()
            .id
    }

    pub(crate) fn add_measure_location(&mut self, coordinate: &str) -> MeasureLocationId {
        let admin = self.admin_unchecked();
        AQUILA_ENGINE_STORAGE
            .add_measure_location(
                self.deps_mut(),
                &admin,
                Bytes32::from_str_truncated(coordinate),
            )
            .unwrap()
            .id
    }

    pub(crate) fn add_wind_farm(&mut self, customer_id: CustomerId) -> WindFarmId {
        let admin = self.admin_unchecked();
        AQUILA_ENGINE_STORAGE
            .add_wind_farm(self.deps_mut(), &admin, customer_id, 0, 0)
            .unwrap()
            .farm_id
    }

    pub(crate) fn add_turbine(
        &mut self,
        customer_id: CustomerId,
        farm_id: WindFarmId,
    ) -> TurbineId {
        let admin = self.admin_unchecked();
        AQUILA_ENGINE_STORAGE
            .add_turbine(self.deps_mut(), &admin, customer_id, farm_id, 0, 0)
            .unwrap()
            .turbine_id
    }
}
