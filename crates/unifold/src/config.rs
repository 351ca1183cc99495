//! CLI configuration: the shared `unifold_config` profile layer plus
//! `GlobalOpts` flag overrides.

use clap::ValueEnum;

use unifold_config::{Config, Profile};
use unifold_core::ControllerConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Resolve the active profile name from flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format: flag, then `[defaults] output`, then table.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// The profile to connect with, flags applied on top.
///
/// When the named profile doesn't exist, `--controller` alone is enough to
/// build one; otherwise there is nothing to connect to.
pub fn effective_profile(
    global: &GlobalOpts,
    config: &Config,
    profile_name: &str,
) -> Result<Profile, CliError> {
    let mut profile = match config.profiles.get(profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            let mut available: Vec<_> = config.profiles.keys().cloned().collect();
            available.sort();
            return Err(CliError::ProfileNotFound {
                name: profile_name.into(),
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => {
            let controller = global.controller.clone().ok_or_else(|| CliError::NoConfig {
                path: unifold_config::config_path().display().to_string(),
            })?;
            blank_profile(controller)
        }
    };

    if let Some(ref controller) = global.controller {
        profile.controller.clone_from(controller);
    }
    if let Some(ref site) = global.site {
        profile.site.clone_from(site);
    }
    if let Some(ref platform) = global.platform {
        profile.platform.clone_from(platform);
    }
    if global.username.is_some() {
        profile.username.clone_from(&global.username);
    }
    if global.insecure || (profile.insecure.is_none() && config.defaults.insecure) {
        profile.insecure = Some(true);
    }
    profile.timeout = global
        .timeout
        .or(profile.timeout)
        .or(Some(config.defaults.timeout));

    Ok(profile)
}

/// Build a `ControllerConfig` from config file, profile and flags.
pub fn controller_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<(String, ControllerConfig), CliError> {
    let name = active_profile_name(global, config);
    let profile = effective_profile(global, config, &name)?;
    let controller = unifold_config::profile_to_controller_config(&profile, &name)?;
    Ok((name, controller))
}

pub(crate) fn blank_profile(controller: String) -> Profile {
    Profile {
        controller,
        site: "default".into(),
        platform: "classic".into(),
        username: None,
        password: None,
        ca_cert: None,
        insecure: None,
        timeout: None,
    }
}
