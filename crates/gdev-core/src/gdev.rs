// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

use crate::domain::interfaces::CommandLoading;
use crate::domain::loaders::CommandLoader;

pub static WELCOME_BANNER: &str = "Welcome to GDEV 2.0!";

pub struct Gdev {
    command_loader: CommandLoader,
}

impl Gdev {
    pub(crate) fn new(command_loader: CommandLoader) -> Self {
        Self { command_loader }
    }

    /// Prints the welcome banner, then hands the unparsed process arguments
    /// over to the command loader. Loader failures propagate unmodified.
    pub fn launch(self, arguments: &[String]) -> anyhow::Result<()> {
        println!("{WELCOME_BANNER}");
        log::info!("[gdev.launcher] handing over {} arguments", arguments.len());
        self.command_loader.load(arguments)
    }
}
