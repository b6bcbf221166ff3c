//! Ownership authorization

use crate::auth::AuthUser;
use uuid::Uuid;

/// Whether `actor` may update or delete a resource owned by `owner`
///
/// Admins may modify anything. Everyone else only what they own, so a
/// resource without an owner is admin-only.
pub fn can_modify(actor: &AuthUser, owner: Option<Uuid>) -> bool {
    actor.role.is_admin() || owner == Some(actor.user_id)
}
