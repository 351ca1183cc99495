// Legacy API alarm endpoints

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::RawEntity;
use crate::transport::Transport;

impl<T: Transport> LegacyClient<T> {
    /// List alarms raised at a site.
    ///
    /// `GET /api/s/{site}/list/alarm`
    pub fn list_alarms(&self, site: &str) -> Result<Vec<RawEntity>, Error> {
        debug!(site, "listing alarms");
        self.get(&self.site_path(site, "list/alarm"))
    }
}
