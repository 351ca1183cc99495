// ── Controller ──
//
// Entity fetchers. Each call is one blocking request through the legacy
// client, followed by per-element decoding in wire order. The first
// element that fails to decode fails the whole call.

use secrecy::SecretString;
use tracing::{debug, info, warn};

use unifold_api::legacy::models::RawEntity;
use unifold_api::{ControllerPlatform, HttpTransport, LegacyClient, Transport};

use crate::config::ControllerConfig;
use crate::decode::Decode;
use crate::error::{CoreError, DecodeError};
use crate::model::{Alarm, Device, Site, Station};

/// Typed access to one controller.
///
/// Holds the session (cookie jar) of the underlying transport, so calls
/// through one instance share a login. Not for concurrent use from several
/// threads; create one `Controller` per thread instead.
pub struct Controller<T = HttpTransport> {
    client: LegacyClient<T>,
}

impl Controller<HttpTransport> {
    /// Build an HTTP-backed controller from config. Does not log in.
    pub fn new(config: &ControllerConfig) -> Result<Self, CoreError> {
        let client = LegacyClient::new(
            config.url.clone(),
            config.platform,
            &config.transport_config(),
        )?;
        Ok(Self { client })
    }

    /// Build from config and log in with its credentials.
    pub fn connect(config: &ControllerConfig) -> Result<Self, CoreError> {
        let controller = Self::new(config)?;
        controller.login(&config.credentials.username, &config.credentials.password)?;
        info!(url = %config.url, platform = %config.platform, "connected to controller");
        Ok(controller)
    }
}

impl<T: Transport> Controller<T> {
    /// Wrap an existing transport.
    pub fn with_transport(transport: T, platform: ControllerPlatform) -> Self {
        Self {
            client: LegacyClient::with_transport(transport, platform),
        }
    }

    pub fn platform(&self) -> ControllerPlatform {
        self.client.platform()
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Submit credentials. The session cookie is kept by the transport.
    pub fn login(&self, username: &str, password: &SecretString) -> Result<(), CoreError> {
        Ok(self.client.login(username, password)?)
    }

    pub fn logout(&self) -> Result<(), CoreError> {
        Ok(self.client.logout()?)
    }

    // ── Fetchers ─────────────────────────────────────────────────────

    /// All sites visible to the logged-in admin.
    pub fn sites(&self) -> Result<Vec<Site>, CoreError> {
        decode_all(&self.client.list_sites()?)
    }

    /// Devices at `site`. Hardware of an unknown kind is skipped.
    pub fn devices(&self, site: &str) -> Result<Vec<Device>, CoreError> {
        let raw = self.client.list_devices(site)?;
        let mut devices = Vec::with_capacity(raw.len());

        for (index, entity) in raw.iter().enumerate() {
            match Device::decode(entity.get().as_bytes()) {
                Ok(device) => devices.push(device),
                Err(DecodeError::UnsupportedKind { kind }) => {
                    warn!(index, %kind, "skipping device of unsupported type");
                }
                Err(source) => {
                    return Err(CoreError::Decode {
                        entity: Device::ENTITY,
                        index,
                        source,
                    });
                }
            }
        }

        debug!(site, count = devices.len(), "devices decoded");
        Ok(devices)
    }

    /// Stations connected at `site`.
    pub fn stations(&self, site: &str) -> Result<Vec<Station>, CoreError> {
        decode_all(&self.client.list_stations(site)?)
    }

    /// Alarms raised at `site`.
    pub fn alarms(&self, site: &str) -> Result<Vec<Alarm>, CoreError> {
        decode_all(&self.client.list_alarms(site)?)
    }
}

/// Decode every element in order, stopping at the first failure.
fn decode_all<E: Decode>(raw: &[RawEntity]) -> Result<Vec<E>, CoreError> {
    let decoded = raw
        .iter()
        .enumerate()
        .map(|(index, entity)| {
            E::decode(entity.get().as_bytes()).map_err(|source| CoreError::Decode {
                entity: E::ENTITY,
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(entity = E::ENTITY, count = decoded.len(), "decoded");
    Ok(decoded)
}
