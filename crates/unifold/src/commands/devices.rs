//! Device listing.

use tabled::Tabled;
use unifold_core::{Device, DeviceKind};

use crate::cli::DevicesArgs;
use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: DeviceKind,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Firmware")]
    version: String,
    #[tabled(rename = "Uptime")]
    uptime: String,
    #[tabled(rename = "Stations")]
    stations: String,
    #[tabled(rename = "CPU")]
    cpu: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        let stations: u32 = d
            .radios
            .iter()
            .filter_map(|r| r.stats)
            .map(|s| s.stations)
            .sum();
        Self {
            name: output::or_dash(&d.name),
            kind: d.kind,
            model: output::or_dash(&d.model),
            ip: d.inform_ip.to_string(),
            version: output::or_dash(&d.version),
            uptime: output::fmt_uptime(d.uptime.as_secs()),
            stations: if d.radios.is_empty() {
                "-".into()
            } else {
                stations.to_string()
            },
            cpu: format!("{:.1}%", d.stats.system.cpu_percent),
        }
    }
}

pub fn handle(session: &Session, args: &DevicesArgs) -> Result<(), CliError> {
    let mut devices = session.controller.devices(&session.site)?;
    if let Some(kind) = args.kind {
        let kind = DeviceKind::from(kind);
        devices.retain(|d| d.kind == kind);
    }
    let out = output::render_list(
        session.format,
        &devices,
        |d| DeviceRow::from(d),
        |d| d.id.clone(),
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}
