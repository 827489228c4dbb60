use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;

use crate::SERVICE_ACCESS_ROLE;

/// Capability consulted by every service before touching the inventory.
///
/// Services receive the caller explicitly instead of reading session state,
/// so any identity source can be plugged in.
pub trait AccessPolicy {
    /// Whether the caller may view and modify inventory and student records.
    fn is_administrator(&self) -> bool;
}

impl AccessPolicy for AuthenticatedUser {
    fn is_administrator(&self) -> bool {
        check_role(SERVICE_ACCESS_ROLE, &self.roles)
    }
}
