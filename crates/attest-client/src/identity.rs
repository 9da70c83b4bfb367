//! Signing identity bootstrap.
//!
//! The decision logic ("load if persisted, otherwise generate and persist")
//! is written against the `IdentityStore` capability so it can be exercised
//! without real file I/O. The filesystem store persists the 64-byte secret
//! as a JSON numeric array, the same shape wallet tooling expects.

use std::fs;
use std::path::{Path, PathBuf};

use solana_sdk::signature::Keypair;
use tracing::info;

use crate::constants::KEYPAIR_BYTES;
use crate::error::{ClientError, ClientResult};

/// Key-store collaborator holding one secret-key entry.
pub trait IdentityStore {
    /// Read the persisted secret bytes, if any.
    fn load(&self) -> ClientResult<Option<Vec<u8>>>;

    /// Persist the secret bytes. Called once, on first-run generation.
    fn save(&self, secret: &[u8]) -> ClientResult<()>;
}

/// Load the signing identity from `store`, generating and persisting a fresh
/// keypair if the store is empty.
///
/// Persisted material must be exactly 64 bytes and a valid ed25519 keypair;
/// anything else is `MalformedIdentity`.
pub fn obtain_identity(store: &dyn IdentityStore) -> ClientResult<Keypair> {
    match store.load()? {
        Some(bytes) => {
            if bytes.len() != KEYPAIR_BYTES {
                return Err(ClientError::MalformedIdentity(format!(
                    "expected {} secret bytes, found {}",
                    KEYPAIR_BYTES,
                    bytes.len()
                )));
            }
            Keypair::from_bytes(&bytes)
                .map_err(|err| ClientError::MalformedIdentity(err.to_string()))
        }
        None => {
            let keypair = Keypair::new();
            store.save(&keypair.to_bytes())?;
            info!("generated and persisted a new signing identity");
            Ok(keypair)
        }
    }
}

/// File-backed identity store.
///
/// Writes the secret as a JSON numeric array (`[12,34,...]`). On read it also
/// accepts a base58-encoded secret string, the other format keys commonly
/// circulate in.
#[derive(Debug, Clone)]
pub struct FsIdentityStore {
    path: PathBuf,
}

impl FsIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl IdentityStore for FsIdentityStore {
    fn load(&self) -> ClientResult<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|err| ClientError::KeyStore(format!("read {}: {err}", self.path.display())))?;
        let raw = raw.trim();

        let bytes = if raw.starts_with('[') {
            serde_json::from_str::<Vec<u8>>(raw)
                .map_err(|err| ClientError::MalformedIdentity(format!("secret array: {err}")))?
        } else {
            bs58::decode(raw)
                .into_vec()
                .map_err(|err| ClientError::MalformedIdentity(format!("base58 secret: {err}")))?
        };
        Ok(Some(bytes))
    }

    fn save(&self, secret: &[u8]) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    ClientError::KeyStore(format!("create {}: {err}", parent.display()))
                })?;
            }
        }
        let json = serde_json::to_string(&secret.to_vec())
            .map_err(|err| ClientError::KeyStore(err.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|err| ClientError::KeyStore(format!("write {}: {err}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use solana_sdk::signature::Signer;

    fn temp_store() -> (tempfile::TempDir, FsIdentityStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsIdentityStore::new(dir.path().join("identity.json"));
        (dir, store)
    }

    #[test]
    fn generates_and_persists_on_empty_store() {
        let (_dir, store) = temp_store();
        assert!(!store.exists());
        let keypair = obtain_identity(&store).unwrap();
        assert!(store.exists());

        let reloaded = obtain_identity(&store).unwrap();
        assert_eq!(reloaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn loads_json_numeric_array() {
        let (_dir, store) = temp_store();
        let keypair = Keypair::new();
        store.save(&keypair.to_bytes()).unwrap();

        let loaded = obtain_identity(&store).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn loads_base58_secret() {
        let (_dir, store) = temp_store();
        let keypair = Keypair::new();
        fs::write(store.path(), bs58::encode(keypair.to_bytes()).into_string()).unwrap();

        let loaded = obtain_identity(&store).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn wrong_length_is_malformed() {
        let (_dir, store) = temp_store();
        store.save(&[7u8; 63]).unwrap();
        let err = obtain_identity(&store).unwrap_err();
        assert_matches!(err, ClientError::MalformedIdentity(_));
    }

    #[test]
    fn garbage_file_is_malformed() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "[1, 2, oops]").unwrap();
        let err = obtain_identity(&store).unwrap_err();
        assert_matches!(err, ClientError::MalformedIdentity(_));
    }
}
