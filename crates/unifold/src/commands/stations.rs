//! Station listing.

use tabled::Tabled;
use unifold_core::Station;

use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct StationRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "TX/RX")]
    traffic: String,
    #[tabled(rename = "Uptime")]
    uptime: String,
}

impl From<&Station> for StationRow {
    fn from(s: &Station) -> Self {
        let name = if s.name.is_empty() { &s.hostname } else { &s.name };
        Self {
            mac: s.mac.to_string(),
            ip: s.ip.to_string(),
            name: output::or_dash(name),
            ap: s.ap_mac.map_or_else(|| "wired".into(), |mac| mac.to_string()),
            signal: if s.ap_mac.is_some() {
                format!("{} dBm", s.rssi)
            } else {
                "-".into()
            },
            traffic: format!(
                "{}/{}",
                output::fmt_bytes(s.stats.tx_bytes),
                output::fmt_bytes(s.stats.rx_bytes)
            ),
            uptime: output::fmt_uptime(s.uptime.as_secs()),
        }
    }
}

pub fn handle(session: &Session) -> Result<(), CliError> {
    let stations = session.controller.stations(&session.site)?;
    let out = output::render_list(
        session.format,
        &stations,
        |s| StationRow::from(s),
        |s| s.mac.to_string(),
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}
