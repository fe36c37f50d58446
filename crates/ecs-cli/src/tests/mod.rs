
use crate::{Cli, CommandRunner, Commands};

use ecs_config::SessionConfig;
use ecs_session::{FixedClock, MemoryStorage};

use std::sync::Arc;

use clap::Parser;

pub(crate) const NOW: i64 = 1_700_000_000;

pub(crate) fn create_runner() -> (Arc<MemoryStorage>, CommandRunner) {
    let storage = Arc::new(MemoryStorage::new());
    let runner = CommandRunner::new(
        SessionConfig::default(),
        storage.clone(),
        Arc::new(FixedClock(NOW)),
    );
    (storage, runner)
}

pub(crate) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("ecs").chain(args.iter().copied())).unwrap()
}

pub(crate) fn command(args: &[&str]) -> Commands {
    parse(args).command
}
