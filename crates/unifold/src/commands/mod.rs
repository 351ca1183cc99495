//! Command dispatch: connect, fetch, render.

pub mod alarms;
pub mod config_cmd;
pub mod devices;
pub mod sites;
pub mod stations;

use unifold_config::Config;
use unifold_core::{Controller, ControllerConfig, CoreError};

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;

/// Everything a listing command needs once connected.
pub struct Session {
    pub controller: Controller,
    pub site: String,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Log in, run one listing command, log out.
pub fn dispatch(cmd: &Command, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let (profile_name, controller_config) = config::controller_config(global, cfg)?;
    let session = Session {
        controller: connect(&controller_config, &profile_name)?,
        site: controller_config.site.clone(),
        format: config::output_format(global, cfg),
        quiet: global.quiet,
    };

    let result = match cmd {
        Command::Sites => sites::handle(&session),
        Command::Devices(args) => devices::handle(&session, args),
        Command::Stations => stations::handle(&session),
        Command::Alarms(args) => alarms::handle(&session, args),
        // handled before a connection is made
        Command::Config(_) => Ok(()),
    };

    if let Err(e) = session.controller.logout() {
        tracing::debug!(error = %e, "logout failed");
    }
    result
}

fn connect(config: &ControllerConfig, profile_name: &str) -> Result<Controller, CliError> {
    Controller::connect(config).map_err(|err| match err {
        e if e.is_auth_rejected() => CliError::AuthFailed {
            profile: profile_name.into(),
        },
        e if e.is_connect() => CliError::ConnectionFailed {
            url: config.url.to_string(),
            source: e,
        },
        e @ CoreError::Api(_) => CliError::Api(e),
        e @ CoreError::Decode { .. } => CliError::Decode(e),
    })
}
