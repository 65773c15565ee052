// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod contract;
pub mod storage;

mod helpers;
mod queries;
mod transactions;

#[cfg(test)]
pub mod testing;
