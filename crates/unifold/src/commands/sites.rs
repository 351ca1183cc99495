//! Site listing.

use tabled::Tabled;
use unifold_core::Site;

use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            name: s.name.clone(),
            description: output::or_dash(&s.description),
            role: s.role.clone().unwrap_or_else(|| "-".into()),
            id: s.id.clone(),
        }
    }
}

pub fn handle(session: &Session) -> Result<(), CliError> {
    let sites = session.controller.sites()?;
    let out = output::render_list(
        session.format,
        &sites,
        |s| SiteRow::from(s),
        |s| s.name.clone(),
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}
