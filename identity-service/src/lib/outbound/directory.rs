use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::identity::errors::AuthError;
use crate::identity::models::Handle;
use crate::identity::models::Identity;
use crate::identity::models::IdentityId;
use crate::identity::ports::UserDirectory;

/// In-memory user directory keyed by handle.
///
/// Backs local runs and the integration tests. Production deployments swap in
/// a directory adapter over their user store; this crate treats that store as
/// an external collaborator and only depends on the `UserDirectory` port.
#[derive(Default)]
pub struct InMemoryDirectory {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_handle(&self, handle: &Handle) -> Result<Option<Identity>, AuthError> {
        let identities = self
            .identities
            .read()
            .map_err(|_| AuthError::Directory("directory lock poisoned".to_string()))?;

        Ok(identities.get(handle.as_str()).cloned())
    }

    async fn create(
        &self,
        handle: Handle,
        display_name: String,
        password_hash: String,
    ) -> Result<Identity, AuthError> {
        let mut identities = self
            .identities
            .write()
            .map_err(|_| AuthError::Directory("directory lock poisoned".to_string()))?;

        if identities.contains_key(handle.as_str()) {
            return Err(AuthError::HandleTaken(handle.to_string()));
        }

        let identity = Identity {
            id: IdentityId::new(),
            handle: handle.clone(),
            display_name,
            password_hash,
            created_at: Utc::now(),
        };
        identities.insert(handle.as_str().to_string(), identity.clone());

        Ok(identity)
    }

    async fn delete_by_handle(&self, handle: &Handle) -> Result<bool, AuthError> {
        let mut identities = self
            .identities
            .write()
            .map_err(|_| AuthError::Directory("directory lock poisoned".to_string()))?;

        Ok(identities.remove(handle.as_str()).is_some())
    }
}
