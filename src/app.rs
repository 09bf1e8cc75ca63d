use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::{EquipmentProfile, SettingsProfile};

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config_dir,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(config_dir, json, verbose)?;

    match command {
        Command::Equipment(args) => commands::profile::run::<EquipmentProfile>(&ctx, args.command),
        Command::Observatory(args) => commands::observatory::run(&ctx, args.command),
        Command::Settings(args) => commands::profile::run::<SettingsProfile>(&ctx, args.command),
        Command::Astro(args) => commands::astro::run(&ctx, args.command),
        Command::Horizon(args) => commands::horizon::run(&ctx, args),
    }
}
