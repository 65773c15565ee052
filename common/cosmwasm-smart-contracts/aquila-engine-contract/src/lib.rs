// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod bytes32;
pub mod constants;
pub mod error;
pub mod events;
pub mod msg;
pub mod types;

pub use bytes32::{Bytes32, Bytes32ParseError};
pub use error::AquilaEngineContractError;
pub use msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
pub use types::*;
