//! # Role Store
//!
//! CRUD over role definitions and their permission grants. This is the
//! admin surface behind the roles/permissions pages; the presets in
//! `atlas_core::permissions` are what these records start from at seed
//! time.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::debug;

use atlas_core::{NewRole, Role, RoleUpdate, ValidationError};

use crate::error::{StoreError, StoreResult};
use crate::latency::LatencyProfile;
use crate::store::{lock, Shared};

/// Store for role definitions.
#[derive(Debug, Clone)]
pub struct RoleStore {
    latency: Arc<LatencyProfile>,
    roles: Shared<Role>,
    /// Monotonic id source; seeded past the highest seeded role id.
    next_id: Arc<AtomicU32>,
}

impl RoleStore {
    pub(crate) fn new(latency: Arc<LatencyProfile>, roles: Shared<Role>) -> Self {
        let highest = {
            let roles = lock(&roles);
            roles.iter().map(|r| r.id).max().unwrap_or(0)
        };
        RoleStore {
            latency,
            roles,
            next_id: Arc::new(AtomicU32::new(highest + 1)),
        }
    }

    /// Lists all roles (snapshot copy).
    pub async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        self.latency.simulate(self.latency.list).await;

        let roles = lock(&self.roles);
        debug!(count = roles.len(), "Listing roles");
        Ok(roles.clone())
    }

    /// Gets a role by id.
    pub async fn get_role(&self, id: u32) -> StoreResult<Role> {
        self.latency.simulate(self.latency.lookup).await;

        let roles = lock(&self.roles);
        roles
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Role", id))
    }

    /// Creates a role with a fresh monotonic id.
    ///
    /// ## Errors
    /// - `Validation` if the name is empty
    pub async fn create_role(&self, data: NewRole) -> StoreResult<Role> {
        self.latency.simulate(self.latency.history).await;

        if data.name.trim().is_empty() {
            return Err(ValidationError::required("name").into());
        }

        let role = Role {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: data.name,
            description: data.description,
            permissions: data.permissions,
        };

        debug!(id = role.id, name = %role.name, "Creating role");

        let mut roles = lock(&self.roles);
        roles.push(role.clone());
        Ok(role)
    }

    /// Applies a partial update to a role. `None` fields are unchanged.
    pub async fn update_role(&self, id: u32, update: RoleUpdate) -> StoreResult<Role> {
        self.latency.simulate(self.latency.history).await;

        let mut roles = lock(&self.roles);
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found("Role", id))?;

        if let Some(name) = update.name {
            role.name = name;
        }
        if let Some(description) = update.description {
            role.description = Some(description);
        }

        debug!(id = role.id, "Updating role");
        Ok(role.clone())
    }

    /// Deletes a role.
    ///
    /// An unknown id is a `NotFound` error, never a silent no-op.
    pub async fn delete_role(&self, id: u32) -> StoreResult<()> {
        self.latency.simulate(self.latency.history).await;

        let mut roles = lock(&self.roles);
        let before = roles.len();
        roles.retain(|r| r.id != id);

        if roles.len() == before {
            return Err(StoreError::not_found("Role", id));
        }

        debug!(id, "Deleted role");
        Ok(())
    }

    /// Returns the permission grants of a role.
    pub async fn role_permissions(&self, id: u32) -> StoreResult<Vec<String>> {
        self.latency.simulate(self.latency.lookup).await;

        let roles = lock(&self.roles);
        roles
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.permissions.clone())
            .ok_or_else(|| StoreError::not_found("Role", id))
    }

    /// Replaces the permission grants of a role.
    pub async fn set_role_permissions(
        &self,
        id: u32,
        permissions: Vec<String>,
    ) -> StoreResult<Role> {
        self.latency.simulate(self.latency.history).await;

        let mut roles = lock(&self.roles);
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found("Role", id))?;

        role.permissions = permissions;
        debug!(id = role.id, count = role.permissions.len(), "Set role permissions");
        Ok(role.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::shared_from;

    fn seeded_store() -> RoleStore {
        let roles = vec![Role {
            id: 1,
            name: "cashier".to_string(),
            description: Some("Front desk".to_string()),
            permissions: vec!["pos.view".to_string()],
        }];
        RoleStore::new(Arc::new(LatencyProfile::zero()), shared_from(roles))
    }

    #[tokio::test]
    async fn test_create_assigns_monotonic_ids() {
        let store = seeded_store();

        let a = store
            .create_role(NewRole {
                name: "auditor".to_string(),
                ..NewRole::default()
            })
            .await
            .unwrap();
        let b = store
            .create_role(NewRole {
                name: "trainee".to_string(),
                ..NewRole::default()
            })
            .await
            .unwrap();

        // Ids continue past the seeded maximum.
        assert_eq!(a.id, 2);
        assert_eq!(b.id, 3);
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let store = seeded_store();
        assert_eq!(store.list_roles().await.unwrap().len(), 1);

        let role = store.get_role(1).await.unwrap();
        assert_eq!(role.name, "cashier");

        let err = store.get_role(99).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_merges_partial_fields() {
        let store = seeded_store();

        let updated = store
            .update_role(
                1,
                RoleUpdate {
                    name: Some("till operator".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "till operator");
        // Unspecified fields are untouched.
        assert_eq!(updated.description.as_deref(), Some("Front desk"));
        assert_eq!(updated.permissions, vec!["pos.view".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_miss_is_not_found() {
        let store = seeded_store();

        assert!(store.delete_role(1).await.is_ok());
        let err = store.delete_role(1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_permission_roundtrip() {
        let store = seeded_store();

        store
            .set_role_permissions(1, vec!["pos.view".to_string(), "billing.view".to_string()])
            .await
            .unwrap();

        let perms = store.role_permissions(1).await.unwrap();
        assert_eq!(perms.len(), 2);
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let store = seeded_store();
        let err = store.create_role(NewRole::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
