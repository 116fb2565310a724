//! Connection parameters value object

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// How to reach and authenticate against the SFTP server.
///
/// `Debug` redacts secrets; use [`ConnectionParams::endpoint`] for anything
/// shown to the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
    pub private_key: Option<PathBuf>,
    pub passphrase: Option<String>,
    pub timeout: Option<Duration>,
}

impl ConnectionParams {
    pub fn new(host: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_SSH_PORT,
            username: username.into(),
            password: None,
            private_key: None,
            passphrase: None,
            timeout: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_private_key(mut self, path: impl Into<PathBuf>) -> Self {
        self.private_key = Some(path.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `username@host:port`, safe to log.
    pub fn endpoint(&self) -> String {
        if self.username.is_empty() {
            self.address()
        } else {
            format!("{}@{}", self.username, self.address())
        }
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_secrets() {
        let mut params = ConnectionParams::new("example.com", "deploy").with_password("hunter2");
        params.passphrase = Some("open sesame".to_string());
        let shown = format!("{:?}", params);
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("open sesame"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn endpoint_formats_user_host_port() {
        let params = ConnectionParams::new("10.0.0.5", "www").with_port(2222);
        assert_eq!(params.endpoint(), "www@10.0.0.5:2222");
        assert_eq!(ConnectionParams::new("h", "").endpoint(), "h:22");
    }
}
