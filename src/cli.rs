use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "astroprofile",
    version,
    about = "Manage equipment, observatory and settings profiles for astro imaging"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Base config directory (overrides ASTROPROFILE_CONFIG_DIR)"
    )]
    pub config_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Equipment profiles
    Equipment(EquipmentArgs),
    /// Observatory location profiles
    Observatory(ObservatoryArgs),
    /// Program settings profiles
    Settings(SettingsArgs),
    /// Astroprofiles bundling one profile of each kind
    Astro(AstroArgs),
    /// Inspect a local horizon file
    Horizon(HorizonArgs),
}

#[derive(Debug, Args)]
pub struct EquipmentArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Args)]
pub struct ObservatoryArgs {
    #[command(subcommand)]
    pub command: ObservatoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum ObservatoryCommand {
    #[command(flatten)]
    Profile(ProfileCommand),
    /// Show the observer derived from the location
    Observer(NameArgs),
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// List stored profiles
    List,
    /// Print a profile (the default when no name is given)
    Show(NameArgs),
    /// Store a new profile filled with template values
    Init(InitArgs),
    /// Write a template profile to an arbitrary file
    Template(TemplateArgs),
    /// Read one `section.field` value
    Get(GetArgs),
    /// Change one `section.field` value
    Set(SetArgs),
    /// Delete a stored profile
    Remove(RequiredNameArgs),
    /// Mark a profile as the default
    SetDefault(RequiredNameArgs),
    /// Print the default profile name
    GetDefault,
    /// Clear the default profile
    ResetDefault,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(help = "Profile name (default profile when omitted)")]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct RequiredNameArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(long, help = "Replace an existing profile")]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[arg(help = "Destination file")]
    pub path: PathBuf,
    #[arg(long, help = "Replace an existing file")]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(help = "Profile name or `default`")]
    pub name: String,
    #[arg(help = "Key in section.field form")]
    pub key: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(help = "Profile name or `default`")]
    pub name: String,
    #[arg(help = "Key in section.field form")]
    pub key: String,
    #[arg(allow_hyphen_values = true, help = "New value, parsed as YAML")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct AstroArgs {
    #[command(subcommand)]
    pub command: AstroCommand,
}

#[derive(Debug, Subcommand)]
pub enum AstroCommand {
    /// List astroprofiles
    List,
    /// Print an astroprofile with every profile it names
    Show(RequiredNameArgs),
    /// Write an astroprofile reference
    Create(AstroCreateArgs),
    /// Delete an astroprofile reference (its profiles stay)
    Remove(RequiredNameArgs),
}

#[derive(Debug, Args)]
pub struct AstroCreateArgs {
    #[arg(help = "Astroprofile name")]
    pub name: String,
    #[arg(long, help = "Equipment profile name")]
    pub equipment: String,
    #[arg(long, help = "Observatory profile name")]
    pub observatory: String,
    #[arg(long, help = "Settings profile name")]
    pub settings: String,
    #[arg(long, help = "Replace an existing reference")]
    pub overwrite: bool,
}

#[derive(Debug, Args)]
pub struct HorizonArgs {
    #[arg(help = "File of `azimuth altitude` pairs")]
    pub file: PathBuf,
    #[arg(long, allow_hyphen_values = true, help = "Report the horizon altitude at this azimuth")]
    pub azimuth: Option<f64>,
}
