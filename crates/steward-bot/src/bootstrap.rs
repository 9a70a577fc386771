//! Credential/config-file bootstrapping
//!
//! Reads the authentication token and the admin identity from local files,
//! prompting interactively and persisting the answer when a file is absent
//! or empty. A malformed admin identity is fatal: the process refuses to
//! start rather than running with a recipient every notification would miss.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use steward_common::config::{parse_admin_id, ConfigError};
use steward_core::Snowflake;

/// Bootstrap errors
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BootstrapError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Read the bot token from `path`, prompting and persisting when the file is
/// missing or empty.
pub fn init_token(path: &Path) -> Result<String, BootstrapError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| BootstrapError::io(path, e))?;
        let token = content.lines().next().unwrap_or("").trim().to_string();
        if !token.is_empty() {
            return Ok(token);
        }
        warn!(path = %path.display(), "token file is empty");
    }

    let token = prompt("The token file does not exist or is empty. Please enter the bot's token: ")
        .map_err(|e| BootstrapError::io(path, e))?;
    fs::write(path, &token).map_err(|e| BootstrapError::io(path, e))?;
    Ok(token)
}

/// Read the admin identity from `path`, prompting and persisting when the
/// file is absent.
///
/// # Errors
/// Returns [`ConfigError::InvalidAdminId`] (fatal) when the file or the
/// entered value is not an 18-digit number.
pub fn init_admin_id(path: &Path) -> Result<Snowflake, BootstrapError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| BootstrapError::io(path, e))?;
        let line = content.lines().next().unwrap_or("");
        return Ok(parse_admin_id(line)?);
    }

    let entered = prompt("Please enter the ID number for the admin this bot reports to: ")
        .map_err(|e| BootstrapError::io(path, e))?;
    let admin_id = parse_admin_id(&entered)?;
    fs::write(path, admin_id.to_string()).map_err(|e| BootstrapError::io(path, e))?;
    Ok(admin_id)
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.txt");
        fs::write(&path, "abc123\n").unwrap();

        assert_eq!(init_token(&path).unwrap(), "abc123");
    }

    #[test]
    fn test_token_reads_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.txt");
        fs::write(&path, "abc123\ntrailing garbage\n").unwrap();

        assert_eq!(init_token(&path).unwrap(), "abc123");
    }

    #[test]
    fn test_admin_id_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin_id.txt");
        fs::write(&path, "175928847299117063\n").unwrap();

        assert_eq!(
            init_admin_id(&path).unwrap(),
            Snowflake::new(175_928_847_299_117_063)
        );
    }

    #[test]
    fn test_malformed_admin_id_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin_id.txt");
        fs::write(&path, "not-an-id\n").unwrap();

        assert!(matches!(
            init_admin_id(&path),
            Err(BootstrapError::Config(ConfigError::InvalidAdminId { .. }))
        ));
    }

    #[test]
    fn test_short_admin_id_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin_id.txt");
        fs::write(&path, "12345\n").unwrap();

        assert!(init_admin_id(&path).is_err());
    }
}
