// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use aquila_engine_contract_common::{
    AquilaEngineContractError, Bytes32Response, Config, ExecuteMsg, OracleJobIdResponse, QueryMsg,
};
use cosmwasm_std::{coin, Uint128};
use cw_controllers::{AdminError, AdminResponse};
use rstest::rstest;

use super::test_setup::{has_contract_event, TestSetup, DENOM};

#[rstest::fixture]
fn setup() -> TestSetup {
    TestSetup::new()
}

#[rstest]
fn fresh_deployment(setup: TestSetup) {
    assert_eq!(setup.contract_balance(), coin(0, DENOM));

    let job: OracleJobIdResponse = setup.query(&QueryMsg::GetOracleJobId {});
    assert_eq!(job.job_id, "0000000001");

    let admin: AdminResponse = setup.query(&QueryMsg::Admin {});
    assert_eq!(admin.admin, Some(setup.admin().to_string()));

    let config: Config = setup.query(&QueryMsg::GetConfig {});
    assert_eq!(config.balance_denom, DENOM);

    assert!(setup.query_all_customers().customers.is_empty());
    assert!(setup.query_all_measure_locations().locations.is_empty());
}

#[rstest]
fn balance_follows_bank_transfers(mut setup: TestSetup) {
    let user = setup.user();
    setup.fund_contract(&user, 250);

    let balance = setup.contract_balance();
    assert_eq!(balance.amount, Uint128::new(250));
    assert_eq!(balance.denom, DENOM);
}

#[rstest]
fn string_to_bytes32(setup: TestSetup) {
    let res: Bytes32Response = setup.query(&QueryMsg::StringToBytes32 {
        value: "47.3769,8.5417".to_string(),
    });
    assert_eq!(res.value.to_string_lossy(), "47.3769,8.5417");

    let res: Bytes32Response = setup.query(&QueryMsg::StringToBytes32 {
        value: String::new(),
    });
    assert!(res.value.is_zero());
}

#[rstest]
fn oracle_job_id_can_be_updated_by_admin(mut setup: TestSetup) {
    let user = setup.user();
    let err = setup
        .try_execute_as(
            &user,
            &ExecuteMsg::UpdateOracleJobId {
                job_id: "0000000002".to_string(),
            },
        )
        .unwrap_err()
        .downcast::<AquilaEngineContractError>()
        .unwrap();
    assert_eq!(
        err,
        AquilaEngineContractError::Admin(AdminError::NotAdmin {})
    );

    let res = setup.execute(&ExecuteMsg::UpdateOracleJobId {
        job_id: "0000000002".to_string(),
    });
    assert!(has_contract_event(&res, "oracle_job_id_update"));

    let job: OracleJobIdResponse = setup.query(&QueryMsg::GetOracleJobId {});
    assert_eq!(job.job_id, "0000000002");
}

#[rstest]
fn admin_can_be_transferred(mut setup: TestSetup) {
    let user = setup.user();
    setup.execute(&ExecuteMsg::UpdateAdmin {
        admin: user.to_string(),
    });

    let err = setup.execute_err(&ExecuteMsg::AddCustomer {});
    assert_eq!(
        err,
        AquilaEngineContractError::Admin(AdminError::NotAdmin {})
    );

    setup
        .try_execute_as(&user, &ExecuteMsg::AddCustomer {})
        .unwrap();
    assert_eq!(setup.query_customer_at_index(0), Some(1));
}
