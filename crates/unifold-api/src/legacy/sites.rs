// Legacy API site endpoints
//
// Site listing is controller-scoped (not site-scoped), using
// `/api/self/sites` rather than the usual `/api/s/{site}/...` pattern.

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::RawEntity;
use crate::transport::Transport;

impl<T: Transport> LegacyClient<T> {
    /// List all sites visible to the authenticated user.
    ///
    /// `GET /api/self/sites` (controller-level, not site-scoped)
    pub fn list_sites(&self) -> Result<Vec<RawEntity>, Error> {
        debug!("listing sites");
        self.get(&self.api_path("self/sites"))
    }
}
