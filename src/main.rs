use anyhow::Result;
use clap::Parser;
use std::io;

use keyleak::cli::{Cli, Command};
use keyleak::commands;
use keyleak::defaults::Defaults;

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(Defaults::LOG_FILTER);
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let args = match cli.cmd {
        Some(Command::Demo(args)) => args,
        None => cli.demo,

        Some(Command::Check { key, json }) => {
            let report = commands::check::report(&key);
            commands::check::emit(&mut out, &report, json)?;
            return Ok(());
        }
    };

    commands::demo::run(&mut out, &args.into_key_pair())?;
    Ok(())
}
