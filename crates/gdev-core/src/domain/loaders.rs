// Copyright 2025 GDEV Authors
// SPDX-License-Identifier: MIT

use crate::domain::interfaces::CommandLoading;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub enum CommandLoader {
    Console(ConsoleCommandLoader),
    #[cfg(test)]
    Fake(FakeCommandLoader),
}

impl CommandLoading for CommandLoader {
    fn load(&self, arguments: &[String]) -> anyhow::Result<()> {
        match self {
            CommandLoader::Console(delegate) => delegate.load(arguments),
            #[cfg(test)]
            CommandLoader::Fake(delegate) => delegate.load(arguments),
        }
    }
}

/// Command dispatch lives outside this crate; this delegate only
/// acknowledges the handoff.
pub struct ConsoleCommandLoader;

impl CommandLoading for ConsoleCommandLoader {
    fn load(&self, arguments: &[String]) -> anyhow::Result<()> {
        log::info!("[gdev.loader] received {} command tokens", arguments.len());
        log::debug!("[gdev.loader] tokens : {:?}", arguments);
        Ok(())
    }
}

#[cfg(test)]
pub struct FakeCommandLoader {
    received: Rc<RefCell<Vec<Vec<String>>>>,
    failure: Option<&'static str>,
}

#[cfg(test)]
impl FakeCommandLoader {
    pub fn recording(received: Rc<RefCell<Vec<Vec<String>>>>) -> Self {
        Self { received, failure: None }
    }

    pub fn failing(received: Rc<RefCell<Vec<Vec<String>>>>, failure: &'static str) -> Self {
        Self {
            received,
            failure: Some(failure),
        }
    }
}

#[cfg(test)]
impl CommandLoading for FakeCommandLoader {
    fn load(&self, arguments: &[String]) -> anyhow::Result<()> {
        self.received.borrow_mut().push(arguments.to_vec());

        match self.failure {
            Some(message) => anyhow::bail!(message),
            None => Ok(()),
        }
    }
}
