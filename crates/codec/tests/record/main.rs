// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod binding;
mod nulls;
mod roundtrip;
mod scenarios;
mod width;
mod writer;
