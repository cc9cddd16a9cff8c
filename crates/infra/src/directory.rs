//! User/tenant directory abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use staffhub_core::{TenantId, UserId};
use staffhub_auth::{Tenant, TenantStatus, User};

/// Read/write access to the user and tenant store.
///
/// Reads are single lookups synchronized by the store itself; no in-process
/// locking is required by callers. Mutators exist for administrative
/// collaborators and tests (activation toggles, tenant suspension).
pub trait Directory: Send + Sync {
    fn find_user(&self, id: UserId) -> Option<User>;
    /// Exact, case-sensitive match against the stored email.
    fn find_user_by_email(&self, email: &str) -> Option<User>;
    fn find_tenant(&self, id: TenantId) -> Option<Tenant>;
    /// Users belonging to a tenant (collaborator listing support).
    fn list_users(&self, tenant_id: TenantId) -> Vec<User>;

    fn upsert_user(&self, user: User);
    fn upsert_tenant(&self, tenant: Tenant);
    fn set_user_active(&self, id: UserId, active: bool);
    fn set_tenant_status(&self, id: TenantId, status: TenantStatus);
}

impl<S> Directory for Arc<S>
where
    S: Directory + ?Sized,
{
    fn find_user(&self, id: UserId) -> Option<User> {
        (**self).find_user(id)
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        (**self).find_user_by_email(email)
    }

    fn find_tenant(&self, id: TenantId) -> Option<Tenant> {
        (**self).find_tenant(id)
    }

    fn list_users(&self, tenant_id: TenantId) -> Vec<User> {
        (**self).list_users(tenant_id)
    }

    fn upsert_user(&self, user: User) {
        (**self).upsert_user(user)
    }

    fn upsert_tenant(&self, tenant: Tenant) {
        (**self).upsert_tenant(tenant)
    }

    fn set_user_active(&self, id: UserId, active: bool) {
        (**self).set_user_active(id, active)
    }

    fn set_tenant_status(&self, id: TenantId, status: TenantStatus) {
        (**self).set_tenant_status(id, status)
    }
}

/// In-memory directory for dev/test.
///
/// Keeps a secondary email index so email lookups stay O(1); the index is
/// updated under the same write lock as the user map.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<UserId, User>>,
    emails: RwLock<HashMap<String, UserId>>,
    tenants: RwLock<HashMap<TenantId, Tenant>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Directory for InMemoryDirectory {
    fn find_user(&self, id: UserId) -> Option<User> {
        let map = self.users.read().ok()?;
        map.get(&id).cloned()
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        let id = {
            let emails = self.emails.read().ok()?;
            *emails.get(email)?
        };
        self.find_user(id)
    }

    fn find_tenant(&self, id: TenantId) -> Option<Tenant> {
        let map = self.tenants.read().ok()?;
        map.get(&id).cloned()
    }

    fn list_users(&self, tenant_id: TenantId) -> Vec<User> {
        let map = match self.users.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values()
            .filter(|u| u.tenant_id == Some(tenant_id))
            .cloned()
            .collect()
    }

    fn upsert_user(&self, user: User) {
        if let (Ok(mut users), Ok(mut emails)) = (self.users.write(), self.emails.write()) {
            if let Some(previous) = users.get(&user.id) {
                emails.remove(&previous.email);
            }
            emails.insert(user.email.clone(), user.id);
            tracing::debug!(user_id = %user.id, "user record upserted");
            users.insert(user.id, user);
        }
    }

    fn upsert_tenant(&self, tenant: Tenant) {
        if let Ok(mut map) = self.tenants.write() {
            tracing::debug!(tenant_id = %tenant.id, "tenant record upserted");
            map.insert(tenant.id, tenant);
        }
    }

    fn set_user_active(&self, id: UserId, active: bool) {
        if let Ok(mut map) = self.users.write() {
            if let Some(user) = map.get_mut(&id) {
                user.active = active;
                tracing::debug!(user_id = %id, active, "user activity toggled");
            }
        }
    }

    fn set_tenant_status(&self, id: TenantId, status: TenantStatus) {
        if let Ok(mut map) = self.tenants.write() {
            if let Some(tenant) = map.get_mut(&id) {
                tenant.status = status;
                tracing::debug!(tenant_id = %id, %status, "tenant status changed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use staffhub_auth::Role;

    fn user(email: &str, tenant_id: Option<TenantId>) -> User {
        User {
            id: UserId::new(),
            tenant_id,
            email: email.to_string(),
            display_name: email.to_string(),
            password_hash: String::new(),
            role: Role::Employee,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let dir = InMemoryDirectory::new();
        dir.upsert_user(user("Case@x.com", None));

        assert!(dir.find_user_by_email("Case@x.com").is_some());
        assert!(dir.find_user_by_email("case@x.com").is_none());
    }

    #[test]
    fn upsert_replaces_stale_email_index() {
        let dir = InMemoryDirectory::new();
        let mut u = user("old@x.com", None);
        dir.upsert_user(u.clone());

        u.email = "new@x.com".to_string();
        dir.upsert_user(u);

        assert!(dir.find_user_by_email("old@x.com").is_none());
        assert!(dir.find_user_by_email("new@x.com").is_some());
    }

    #[test]
    fn list_users_is_tenant_isolated() {
        let dir = InMemoryDirectory::new();
        let t1 = TenantId::new();
        let t2 = TenantId::new();
        dir.upsert_user(user("a@x.com", Some(t1)));
        dir.upsert_user(user("b@x.com", Some(t1)));
        dir.upsert_user(user("c@x.com", Some(t2)));

        assert_eq!(dir.list_users(t1).len(), 2);
        assert_eq!(dir.list_users(t2).len(), 1);
    }

    #[test]
    fn tenant_status_toggle() {
        let dir = InMemoryDirectory::new();
        let mut tenant = Tenant::new(TenantId::new(), "Acme");
        tenant.status = TenantStatus::Active;
        let id = tenant.id;
        dir.upsert_tenant(tenant);

        dir.set_tenant_status(id, TenantStatus::Suspended);
        assert_eq!(dir.find_tenant(id).unwrap().status, TenantStatus::Suspended);
    }
}
