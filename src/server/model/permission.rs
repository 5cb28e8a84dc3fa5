//! Authorization predicates.
//!
//! Pure functions of the acting principal and the target resource, kept apart from
//! HTTP and storage so they can be tested on their own. Services call these and turn
//! a `false` into `AppError::Permission`.

use crate::server::model::{
    addon::{Addon, ReviewStatus},
    user::{Role, User},
};

/// Roles allowed to act on content they do not own and to review submissions.
pub const STAFF_ROLES: [Role; 2] = [Role::Administrator, Role::Moderator];

/// The authenticated caller of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(user_id: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.roles.iter().any(|role| roles.contains(role))
    }

    pub fn is_staff(&self) -> bool {
        self.has_any_role(&STAFF_ROLES)
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(user.id.clone(), user.roles.clone())
    }
}

/// Whether `principal` is listed among the add-on's authors.
pub fn is_addon_author(principal: &Principal, addon: &Addon) -> bool {
    addon.authors.iter().any(|author| *author == principal.user_id)
}

/// Whether `principal` may edit, delete or reopen `addon`.
///
/// Authors may; so may staff regardless of authorship.
pub fn can_modify_addon(principal: &Principal, addon: &Addon) -> bool {
    is_addon_author(principal, addon) || principal.is_staff()
}

/// Whether `viewer` may read `addon`.
///
/// Approved add-ons are public. Pending and denied ones are visible to their
/// authors and to staff only.
pub fn can_view_addon(viewer: Option<&Principal>, addon: &Addon) -> bool {
    addon.approval.status == ReviewStatus::Approved
        || viewer.is_some_and(|principal| can_modify_addon(principal, addon))
}

/// Whether `principal` may review add-ons. Authorship plays no part.
pub fn can_review_addon(principal: &Principal) -> bool {
    principal.is_staff()
}

/// Only administrators grant or revoke roles.
pub fn can_manage_roles(principal: &Principal) -> bool {
    principal.has_any_role(&[Role::Administrator])
}

/// Users may delete their own account; administrators may delete any.
pub fn can_delete_user(principal: &Principal, user_id: &str) -> bool {
    principal.user_id == user_id || can_manage_roles(principal)
}

pub fn can_administer_cdn(principal: &Principal) -> bool {
    principal.has_any_role(&[Role::Administrator, Role::Developer])
}

/// Whether `principal` may write textures, uses, paths, contributions and
/// submission settings.
pub fn can_edit_catalog(principal: &Principal) -> bool {
    principal.has_any_role(&[Role::Administrator, Role::Developer])
}
