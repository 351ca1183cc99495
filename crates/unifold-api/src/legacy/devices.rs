// Legacy API device endpoints

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::RawEntity;
use crate::transport::Transport;

impl<T: Transport> LegacyClient<T> {
    /// List all devices (APs, switches, gateways) adopted at a site.
    ///
    /// `GET /api/s/{site}/stat/device`
    pub fn list_devices(&self, site: &str) -> Result<Vec<RawEntity>, Error> {
        debug!(site, "listing devices");
        self.get(&self.site_path(site, "stat/device"))
    }
}
