// Legacy API station endpoints

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::RawEntity;
use crate::transport::Transport;

impl<T: Transport> LegacyClient<T> {
    /// List all currently connected clients (stations).
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub fn list_stations(&self, site: &str) -> Result<Vec<RawEntity>, Error> {
        debug!(site, "listing stations");
        self.get(&self.site_path(site, "stat/sta"))
    }
}
