// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

use crate::domain::loaders::{CommandLoader, ConsoleCommandLoader};
use crate::gdev::Gdev;

pub fn create_gdev() -> Gdev {
    let command_loader = CommandLoader::Console(ConsoleCommandLoader);
    Gdev::new(command_loader)
}
