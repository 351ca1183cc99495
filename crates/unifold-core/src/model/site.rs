// ── Site domain type ──

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub id: String,
    /// The internal reference name (e.g., "default"). Used as the site
    /// segment in API paths (`/api/s/{name}/...`).
    pub name: String,
    /// Human-friendly description.
    pub description: String,
    /// The logged-in admin's role on this site, when reported.
    pub role: Option<String>,
}
