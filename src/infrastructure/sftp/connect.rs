//! Session establishment

use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use ssh2::Session;

use crate::domain::ports::{RemoteConnector, RemoteResult, RemoteStoreError};
use crate::domain::value_objects::ConnectionParams;

use super::store::SftpStore;

/// TCP attempts before giving up on a transient network error.
const CONNECT_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);
const DEFAULT_KEYS: [&str; 3] = ["id_ed25519", "id_rsa", "id_ecdsa"];

/// Opens `SftpStore` sessions.
#[derive(Debug, Clone, Default)]
pub struct SftpConnector;

impl SftpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteConnector for SftpConnector {
    type Store = SftpStore;

    fn connect(&self, params: &ConnectionParams) -> RemoteResult<SftpStore> {
        let endpoint = params.endpoint();
        let tcp = connect_tcp(params)?;

        let mut session = Session::new().map_err(|e| RemoteStoreError::Connection(e.to_string()))?;
        if let Some(timeout) = params.timeout {
            session.set_timeout(u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX));
        }
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|e| RemoteStoreError::Connection(format!("SSH handshake failed: {}", e)))?;

        authenticate(&session, params)?;
        tracing::info!(endpoint = %endpoint, "authenticated");

        let sftp = session
            .sftp()
            .map_err(|e| RemoteStoreError::Connection(format!("SFTP subsystem unavailable: {}", e)))?;

        Ok(SftpStore::new(session, sftp, endpoint))
    }
}

fn connect_tcp(params: &ConnectionParams) -> RemoteResult<TcpStream> {
    let addrs: Vec<SocketAddr> = (params.host.as_str(), params.port)
        .to_socket_addrs()
        .map_err(|e| RemoteStoreError::Connection(format!("cannot resolve {}: {}", params.host, e)))?
        .collect();
    if addrs.is_empty() {
        return Err(RemoteStoreError::Connection(format!(
            "no address found for {}",
            params.host
        )));
    }

    let mut attempt = 1;
    loop {
        match connect_any(&addrs, params.timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) if is_transient(&e) && attempt < CONNECT_ATTEMPTS => {
                tracing::debug!(attempt, error = %e, address = %params.address(), "connect failed, retrying");
                thread::sleep(RETRY_BACKOFF * attempt);
                attempt += 1;
            }
            Err(e) => return Err(RemoteStoreError::Connection(e.to_string())),
        }
    }
}

fn connect_any(addrs: &[SocketAddr], timeout: Option<Duration>) -> io::Result<TcpStream> {
    let mut last_err = None;
    for addr in addrs {
        let result = match timeout {
            Some(t) => TcpStream::connect_timeout(addr, t),
            None => TcpStream::connect(addr),
        };
        match result {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no address")))
}

fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::TimedOut
            | io::ErrorKind::Interrupted
    )
}

/// Password, then the configured key, then ssh-agent, then default keys.
fn authenticate(session: &Session, params: &ConnectionParams) -> RemoteResult<()> {
    let user = params.username.as_str();
    let mut failures: Vec<String> = Vec::new();

    if let Some(password) = params.password.as_deref() {
        if let Err(e) = session.userauth_password(user, password) {
            failures.push(format!("password: {}", e.message()));
        }
    }

    if !session.authenticated() {
        if let Some(key) = params.private_key.as_deref() {
            try_key(session, user, key, params.passphrase.as_deref(), &mut failures);
        }
    }

    if !session.authenticated() {
        if let Err(e) = session.userauth_agent(user) {
            failures.push(format!("agent: {}", e.message()));
        }
    }

    if !session.authenticated() {
        for key in default_keys() {
            if key.exists() {
                try_key(session, user, &key, params.passphrase.as_deref(), &mut failures);
                if session.authenticated() {
                    break;
                }
            }
        }
    }

    if session.authenticated() {
        Ok(())
    } else {
        tracing::debug!(attempts = %failures.join("; "), "authentication failed");
        Err(RemoteStoreError::Authentication(if failures.is_empty() {
            "no usable credentials".to_string()
        } else {
            failures.join("; ")
        }))
    }
}

fn try_key(
    session: &Session,
    user: &str,
    key: &Path,
    passphrase: Option<&str>,
    failures: &mut Vec<String>,
) {
    if let Err(e) = session.userauth_pubkey_file(user, None, key, passphrase) {
        failures.push(format!("{}: {}", key.display(), e.message()));
    }
}

fn default_keys() -> Vec<PathBuf> {
    match dirs::home_dir() {
        Some(home) => DEFAULT_KEYS
            .iter()
            .map(|name| home.join(".ssh").join(name))
            .collect(),
        None => Vec::new(),
    }
}
