// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

use gdev_core::factory;
use gdev_core::infra::cli;
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> anyhow::Result<()> {
    cli::troubleshooting::setup_troubleshooting();
    let arguments = std::env::args().skip(1).collect::<Vec<_>>();

    let gdev = factory::create_gdev();
    gdev.launch(&arguments)?;

    Ok(())
}
