// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

/// Contract of the command-loading collaborator. The launcher only guarantees
/// a single invocation per run, with the process arguments unmodified.
pub trait CommandLoading {
    fn load(&self, arguments: &[String]) -> anyhow::Result<()>;
}
