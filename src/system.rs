//! Identity of the machine and user a run was made on

use std::env;
use std::fs;

/// Identity fields shown in the outline's system-info block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub domain: String,
    pub user: String,
    pub version: String,
}

impl SystemInfo {
    pub fn new(
        domain: impl Into<String>,
        user: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            user: user.into(),
            version: version.into(),
        }
    }

    /// Read the identity from the environment.
    ///
    /// The domain is `USERDOMAIN` on Windows and the host name elsewhere.
    pub fn detect() -> Self {
        let domain = env_value(&["USERDOMAIN", "HOSTNAME", "COMPUTERNAME"])
            .or_else(|| {
                fs::read_to_string("/etc/hostname")
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| "localhost".to_string());
        let user = env_value(&["USER", "USERNAME", "LOGNAME"]).unwrap_or_else(|| "unknown".to_string());

        Self {
            domain,
            user,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

fn env_value(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
