// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use aquila_engine_contract_common::AquilaEngineContractError;
use cosmwasm_std::{to_json_binary, Event, Response};
use serde::Serialize;

/// Clamps the requested page size to the allowed maximum, falling back to the default.
pub(crate) fn retrieval_limit(limit: Option<u32>, default: u32, max: u32) -> usize {
    limit.unwrap_or(default).min(max) as usize
}

/// Response emitting the provided event and carrying the newly created entry as its data.
pub(crate) fn created_entry_response<T: Serialize>(
    event: Event,
    entry: &T,
) -> Result<Response, AquilaEngineContractError> {
    Ok(Response::new()
        .add_event(event)
        .set_data(to_json_binary(entry)?))
}
