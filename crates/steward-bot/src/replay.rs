//! NDJSON event replay loop
//!
//! Consumes one JSON-encoded [`PlatformEvent`] per line, mirrors the state
//! into the in-memory platform, and dispatches to the relay. A malformed
//! line is skipped; a failed handler is logged and the loop continues, which
//! is the replay analog of the platform runtime's default error surface.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, warn};

use steward_core::PlatformEvent;
use steward_service::{MemoryPlatform, Relay};

/// Drive the relay from a line-delimited JSON event stream.
pub async fn run<R>(
    relay: &Relay,
    platform: &MemoryPlatform,
    reader: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut handled: u64 = 0;
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: PlatformEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "skipping malformed event line");
                continue;
            }
        };

        platform.observe(&event);
        match relay.handle_event(&event).await {
            Ok(()) => handled += 1,
            Err(e) => error!(event = event.kind(), error = %e, "event handler failed"),
        }
    }

    info!(handled, "event stream ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use steward_common::AppConfig;
    use steward_core::{Platform, Snowflake};
    use steward_service::MemoryPlatform;

    fn relay_with_platform(log_dir: &std::path::Path) -> (Relay, Arc<MemoryPlatform>) {
        let platform = Arc::new(MemoryPlatform::new());
        let mut config = AppConfig::default();
        config.storage.log_dir = log_dir.to_path_buf();
        let relay = Relay::new(
            Arc::clone(&platform) as Arc<dyn Platform>,
            &config,
            Snowflake::new(175_928_847_299_117_063),
        );
        (relay, platform)
    }

    #[tokio::test]
    async fn test_replay_feeds_relay_and_skips_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let (relay, platform) = relay_with_platform(dir.path());

        let feed = concat!(
            r#"{"type":"MEMBER_JOIN","member":{"user_id":"1","name":"Ann","guild":{"id":"100","name":"UTGOP"}}}"#,
            "\n",
            "this is not json\n",
            "\n",
            r#"{"type":"CHANNEL_CREATE","channel":{"id":"8","guild":{"id":"100","name":"UTGOP"},"name":"plans"}}"#,
            "\n",
        );

        run(&relay, &platform, feed.as_bytes()).await.unwrap();

        // Join handled: welcome channel provisioned, role created.
        assert_eq!(platform.channel_count(Snowflake::new(100), "welcome"), 1);
        assert_eq!(platform.role_count(Snowflake::new(100), "Plebs"), 1);
        // Channel creation handled after the garbage line was skipped.
        assert_eq!(platform.channel_count(Snowflake::new(100), "admin"), 1);
    }
}
