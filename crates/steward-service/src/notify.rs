//! Admin Notifier - direct-message delivery to the configured administrator
//!
//! The admin identity is fixed at construction and immutable for the process
//! lifetime; every notification targets it.

use std::sync::Arc;

use tracing::debug;

use steward_core::{Platform, Snowflake};

use crate::error::ServiceResult;
use crate::format::with_timestamp;

/// Delivers formatted notification strings to the administrator
#[derive(Clone)]
pub struct AdminNotifier {
    platform: Arc<dyn Platform>,
    admin_id: Snowflake,
}

impl AdminNotifier {
    /// Create a notifier targeting `admin_id`
    pub fn new(platform: Arc<dyn Platform>, admin_id: Snowflake) -> Self {
        Self { platform, admin_id }
    }

    /// The administrator identity this notifier targets
    pub fn admin_id(&self) -> Snowflake {
        self.admin_id
    }

    /// Send a timestamped notification body as a direct message
    pub async fn notify(&self, body: &str) -> ServiceResult<()> {
        self.platform
            .send_direct_message(self.admin_id, &with_timestamp(body), false)
            .await?;
        debug!(admin_id = %self.admin_id, "admin notified");
        Ok(())
    }

    /// Send pre-formatted text verbatim (no timestamp prefix), optionally
    /// with the speech-synthesis flag. Used for the startup banner.
    pub async fn send_raw(&self, text: &str, tts: bool) -> ServiceResult<()> {
        self.platform
            .send_direct_message(self.admin_id, text, tts)
            .await?;
        Ok(())
    }
}
