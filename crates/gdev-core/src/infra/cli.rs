// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

pub mod troubleshooting;
