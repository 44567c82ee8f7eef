use std::fmt;

use serde::{Deserialize, Serialize};

/// The identity half of a credential record. The only identity kind the
/// island stores is a username.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "credential_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Identity {
    Username { username: String },
}

/// The secret half of a credential record, tagged by `credential_type`.
///
/// `SSH_KEY` is accepted as a read-side spelling of the keypair tag; records
/// written back always carry `SSH_KEYPAIR`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "credential_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Secret {
    Password { password: String },
    NtHash { nt_hash: String },
    LmHash { lm_hash: String },
    #[serde(alias = "SSH_KEY")]
    SshKeypair {
        public_key: String,
        private_key: String,
    },
    /// Tags this build does not know. Grouping skips these records instead of
    /// failing, so newer island records still load.
    #[serde(other)]
    Unknown,
}

impl Secret {
    pub fn credential_type(&self) -> &'static str {
        match self {
            Secret::Password { .. } => "PASSWORD",
            Secret::NtHash { .. } => "NT_HASH",
            Secret::LmHash { .. } => "LM_HASH",
            Secret::SshKeypair { .. } => "SSH_KEYPAIR",
            Secret::Unknown => "UNKNOWN",
        }
    }
}

/// Never exposes the secret value itself, only its kind. Safe to log.
impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Unknown => f.write_str("UNKNOWN"),
            _ => write!(f, "{} [REDACTED]", self.credential_type()),
        }
    }
}

/// A single stored credential record. Identity and secret are independent:
/// either may be absent, and both being present does not promise they were
/// captured together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    pub identity: Option<Identity>,
    pub secret: Option<Secret>,
}

/// A public/private keypair as it appears in the form's SSH key list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct SshKeypair {
    pub public_key: String,
    pub private_key: String,
}

/// Form-shape credentials, bucketed by kind. `Default` is the empty template
/// the form seeds from before grouping populates it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct GroupedCredentials {
    pub exploit_user_list: Vec<String>,
    pub exploit_password_list: Vec<String>,
    pub exploit_ntlm_hash_list: Vec<String>,
    pub exploit_lm_hash_list: Vec<String>,
    pub exploit_ssh_keys: Vec<SshKeypair>,
}
