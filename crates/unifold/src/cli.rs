//! Clap derive structures for the `unifold` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use unifold_core::DeviceKind;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unifold -- read devices, stations, alarms and sites from a UniFi controller
#[derive(Debug, Parser)]
#[command(
    name = "unifold",
    version,
    about = "Read UniFi controller inventory from the command line",
    long_about = "Lists sites, devices, connected stations and alarms from a UniFi\n\
        Network controller (classic or UniFi OS) over its session-login API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "UNIFOLD_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Controller URL (overrides profile)
    #[arg(long, short = 'c', env = "UNIFOLD_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Site name used in API paths
    #[arg(long, short = 's', env = "UNIFOLD_SITE", global = true)]
    pub site: Option<String>,

    /// Admin username (overrides profile)
    #[arg(long, short = 'u', env = "UNIFOLD_USERNAME", global = true)]
    pub username: Option<String>,

    /// Controller platform: classic or unifi-os
    #[arg(long, env = "UNIFOLD_PLATFORM", global = true)]
    pub platform: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', env = "UNIFOLD_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "UNIFOLD_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "UNIFOLD_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List sites visible to the admin
    Sites,

    /// List devices at the site
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// List stations (connected clients) at the site
    #[command(alias = "sta", alias = "clients")]
    Stations,

    /// List alarms raised at the site
    Alarms(AlarmsArgs),

    /// Manage configuration and profiles
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct DevicesArgs {
    /// Only show devices of this kind
    #[arg(long, short = 't')]
    pub kind: Option<KindFilter>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindFilter {
    #[value(alias = "ap", alias = "uap")]
    AccessPoint,
    #[value(alias = "usw")]
    Switch,
    #[value(alias = "gw", alias = "ugw")]
    Gateway,
}

impl From<KindFilter> for DeviceKind {
    fn from(kind: KindFilter) -> Self {
        match kind {
            KindFilter::AccessPoint => Self::AccessPoint,
            KindFilter::Switch => Self::Switch,
            KindFilter::Gateway => Self::Gateway,
        }
    }
}

#[derive(Debug, Args)]
pub struct AlarmsArgs {
    /// Include archived alarms
    #[arg(long, short = 'a')]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the loaded configuration (secrets masked)
    Show,

    /// Create or replace a profile from --controller, --username, --site, --platform
    Init {
        /// Profile name [default: the --profile value, else "default"]
        name: Option<String>,

        /// Make this the default profile
        #[arg(long)]
        set_default: bool,
    },

    /// Prompt for a password and store it in the system keyring
    SetPassword,
}
