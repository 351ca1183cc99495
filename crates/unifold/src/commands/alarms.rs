//! Alarm listing.

use tabled::Tabled;
use unifold_core::Alarm;

use crate::cli::AlarmsArgs;
use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct AlarmRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Archived")]
    archived: bool,
}

impl From<&Alarm> for AlarmRow {
    fn from(a: &Alarm) -> Self {
        Self {
            time: a.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            key: a.key.clone(),
            ap: if a.ap_name.is_empty() {
                a.ap_mac.to_string()
            } else {
                a.ap_name.clone()
            },
            message: a.message.clone(),
            archived: a.archived,
        }
    }
}

pub fn handle(session: &Session, args: &AlarmsArgs) -> Result<(), CliError> {
    let mut alarms = session.controller.alarms(&session.site)?;
    if !args.all {
        alarms.retain(|a| !a.archived);
    }
    let out = output::render_list(
        session.format,
        &alarms,
        |a| AlarmRow::from(a),
        |a| a.id.clone(),
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}
