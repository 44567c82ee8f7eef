use tracing::debug;

use super::types::{Credentials, GroupedCredentials, Identity, Secret, SshKeypair};

/// Group a list of stored credential records into the form's per-kind lists.
///
/// The pairing between a record's identity and its secret is not
/// representable in the grouped shape; the lists are positionally unrelated
/// afterwards.
pub fn credentials_to_form(credentials: &[Credentials]) -> GroupedCredentials {
    let mut grouped = GroupedCredentials::default();

    for record in credentials {
        if let Some(Identity::Username { username }) = &record.identity {
            grouped.exploit_user_list.push(username.clone());
        }

        match &record.secret {
            Some(Secret::Password { password }) => {
                grouped.exploit_password_list.push(password.clone());
            }
            Some(Secret::NtHash { nt_hash }) => {
                grouped.exploit_ntlm_hash_list.push(nt_hash.clone());
            }
            Some(Secret::LmHash { lm_hash }) => {
                grouped.exploit_lm_hash_list.push(lm_hash.clone());
            }
            Some(Secret::SshKeypair {
                public_key,
                private_key,
            }) => {
                grouped.exploit_ssh_keys.push(SshKeypair {
                    public_key: public_key.clone(),
                    private_key: private_key.clone(),
                });
            }
            Some(secret @ Secret::Unknown) => {
                debug!(secret = %secret, "Skipping credential with unrecognized type");
            }
            None => {}
        }
    }

    grouped
}

/// Flatten grouped form credentials back into stored records: all usernames
/// first, then passwords, NT hashes, LM hashes, and SSH keypairs.
pub fn credentials_to_list(grouped: &GroupedCredentials) -> Vec<Credentials> {
    let mut records = Vec::new();

    for username in &grouped.exploit_user_list {
        records.push(Credentials {
            identity: Some(Identity::Username {
                username: username.clone(),
            }),
            secret: None,
        });
    }

    for password in &grouped.exploit_password_list {
        records.push(Credentials {
            identity: None,
            secret: Some(Secret::Password {
                password: password.clone(),
            }),
        });
    }

    for nt_hash in &grouped.exploit_ntlm_hash_list {
        records.push(Credentials {
            identity: None,
            secret: Some(Secret::NtHash {
                nt_hash: nt_hash.clone(),
            }),
        });
    }

    for lm_hash in &grouped.exploit_lm_hash_list {
        records.push(Credentials {
            identity: None,
            secret: Some(Secret::LmHash {
                lm_hash: lm_hash.clone(),
            }),
        });
    }

    for keypair in &grouped.exploit_ssh_keys {
        records.push(Credentials {
            identity: None,
            secret: Some(Secret::SshKeypair {
                public_key: keypair.public_key.clone(),
                private_key: keypair.private_key.clone(),
            }),
        });
    }

    records
}
