// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use aquila_engine_contract_common::{
    AquilaEngineContractError, CustomerId, ExecuteMsg, OutputReport, PagedOutputReportsResponse,
    QueryMsg, TurbineId, WindFarmId,
};
use rstest::rstest;

use super::test_setup::{has_contract_event, TestSetup};

struct ReportingSetup {
    setup: TestSetup,
    customer_id: CustomerId,
    farm_id: WindFarmId,
    turbine_id: TurbineId,
}

#[rstest::fixture]
fn reporting() -> ReportingSetup {
    let mut setup = TestSetup::new();
    let customer_id = setup.add_customer();
    let farm_id = setup.add_wind_farm(customer_id, 0, 100);
    let turbine_id = setup.add_turbine(customer_id, farm_id, 0, 40);
    ReportingSetup {
        setup,
        customer_id,
        farm_id,
        turbine_id,
    }
}

fn add_report_msg(reporting: &ReportingSetup, timestamp: u64, value: u64) -> ExecuteMsg {
    ExecuteMsg::AddOutputReport {
        customer_id: reporting.customer_id,
        farm_id: reporting.farm_id,
        turbine_id: reporting.turbine_id,
        timestamp,
        value,
    }
}

#[rstest]
fn adding_and_removing_output_report(mut reporting: ReportingSetup) {
    let msg = add_report_msg(&reporting, 1_700_000_000, 1500);
    let res = reporting.setup.execute(&msg);
    assert!(has_contract_event(&res, "output_report_added"));

    let ReportingSetup {
        mut setup,
        customer_id,
        farm_id,
        turbine_id,
    } = reporting;

    assert_eq!(
        setup
            .query_output_report(customer_id, farm_id, turbine_id)
            .report,
        Some(OutputReport {
            customer_id,
            farm_id,
            turbine_id,
            timestamp: 1_700_000_000,
            value: 1500
        })
    );

    setup.execute(&ExecuteMsg::RemoveOutputReport {
        customer_id,
        farm_id,
        turbine_id,
    });
    assert_eq!(
        setup
            .query_output_report(customer_id, farm_id, turbine_id)
            .report,
        None
    );

    let err = setup.execute_err(&ExecuteMsg::RemoveOutputReport {
        customer_id,
        farm_id,
        turbine_id,
    });
    assert_eq!(
        err,
        AquilaEngineContractError::OutputReportNotFound {
            customer_id,
            farm_id,
            turbine_id
        }
    );
}

#[rstest]
fn newer_report_replaces_older_one(mut reporting: ReportingSetup) {
    let first = add_report_msg(&reporting, 1_700_000_000, 1500);
    let second = add_report_msg(&reporting, 1_700_003_600, 1700);
    reporting.setup.execute(&first);
    reporting.setup.execute(&second);

    let res: PagedOutputReportsResponse =
        reporting.setup.query(&QueryMsg::GetFarmOutputReportsPaged {
            customer_id: reporting.customer_id,
            farm_id: reporting.farm_id,
            start_after: None,
            limit: None,
        });
    assert_eq!(res.reports.len(), 1);
    assert_eq!(res.reports[0].value, 1700);
    assert_eq!(res.reports[0].timestamp, 1_700_003_600);
}

#[rstest]
fn turbine_with_report_cannot_be_removed(mut reporting: ReportingSetup) {
    let msg = add_report_msg(&reporting, 1_700_000_000, 1500);
    reporting.setup.execute(&msg);

    let err = reporting.setup.execute_err(&ExecuteMsg::RemoveTurbine {
        customer_id: reporting.customer_id,
        farm_id: reporting.farm_id,
        turbine_id: reporting.turbine_id,
    });
    assert_eq!(
        err,
        AquilaEngineContractError::TurbineHasOutputReport {
            customer_id: reporting.customer_id,
            farm_id: reporting.farm_id,
            turbine_id: reporting.turbine_id,
        }
    );
}

#[rstest]
fn report_requires_existing_turbine(mut reporting: ReportingSetup) {
    let mut msg = add_report_msg(&reporting, 1, 1);
    if let ExecuteMsg::AddOutputReport { turbine_id, .. } = &mut msg {
        *turbine_id = 42;
    }

    let err = reporting.setup.execute_err(&msg);
    assert_eq!(
        err,
        AquilaEngineContractError::TurbineNotFound {
            customer_id: reporting.customer_id,
            farm_id: reporting.farm_id,
            turbine_id: 42,
        }
    );
}
