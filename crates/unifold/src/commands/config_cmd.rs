//! Config subcommand handlers. None of these talk to a controller.

use std::str::FromStr;

use unifold_config::{Config, Profile};
use unifold_core::ControllerPlatform;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts, cfg: Config) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            print_path();
            Ok(())
        }

        ConfigCommand::Show => {
            let out = redacted_toml(cfg)?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init {
            ref name,
            set_default,
        } => {
            let name = name
                .clone()
                .or_else(|| global.profile.clone())
                .unwrap_or_else(|| "default".into());
            init_profile(cfg, &name, global, set_default)
        }

        ConfigCommand::SetPassword => {
            let name = config::active_profile_name(global, &cfg);
            if !cfg.profiles.contains_key(&name) {
                return Err(unifold_config::ConfigError::ProfileNotFound { name }.into());
            }

            let password = rpassword::prompt_password(format!("Password for '{name}': "))?;
            if password.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "value cannot be empty".into(),
                });
            }
            unifold_config::store_password(&name, &password)?;

            if !global.quiet {
                eprintln!("Password stored in system keyring for profile '{name}'");
            }
            Ok(())
        }
    }
}

pub fn print_path() {
    println!("{}", unifold_config::config_path().display());
}

/// The loaded config as TOML with plaintext passwords masked.
fn redacted_toml(mut cfg: Config) -> Result<String, CliError> {
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("****".into());
        }
    }
    toml::to_string_pretty(&cfg).map_err(|e| CliError::Render(e.to_string()))
}

fn init_profile(
    mut cfg: Config,
    name: &str,
    global: &GlobalOpts,
    set_default: bool,
) -> Result<(), CliError> {
    let controller = global
        .controller
        .clone()
        .ok_or_else(|| CliError::Validation {
            field: "controller".into(),
            reason: "pass --controller <URL> to create a profile".into(),
        })?;
    let profile = new_profile(controller, global)?;

    if set_default
        || cfg
            .default_profile
            .as_ref()
            .is_none_or(|d| !cfg.profiles.contains_key(d))
    {
        cfg.default_profile = Some(name.to_owned());
    }
    cfg.profiles.insert(name.to_owned(), profile);

    unifold_config::save_config(&cfg)?;
    let path = unifold_config::config_path();
    tracing::info!(profile = name, path = %path.display(), "profile written");

    if !global.quiet {
        eprintln!("Profile '{name}' written to {}", path.display());
    }
    Ok(())
}

fn new_profile(controller: String, global: &GlobalOpts) -> Result<Profile, CliError> {
    url::Url::parse(&controller).map_err(|e| CliError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL '{controller}': {e}"),
    })?;

    let mut profile = config::blank_profile(controller);
    if let Some(ref platform) = global.platform {
        ControllerPlatform::from_str(platform).map_err(|reason| CliError::Validation {
            field: "platform".into(),
            reason,
        })?;
        profile.platform.clone_from(platform);
    }
    if let Some(ref site) = global.site {
        profile.site.clone_from(site);
    }
    profile.username.clone_from(&global.username);
    if global.insecure {
        profile.insecure = Some(true);
    }
    profile.timeout = global.timeout;
    Ok(profile)
}
