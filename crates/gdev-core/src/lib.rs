// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

pub mod domain;
pub mod factory;
pub mod gdev;
pub mod infra;
