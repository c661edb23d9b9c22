//! Session context passed explicitly into every domain call.

use crate::error::DomainError;
use shared::Role;

/// The authenticated identity as resolved by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Who is acting, with what role, and whether resolution has finished.
///
/// Threaded through service calls as a plain value instead of being read
/// from ambient session state; the role comes from the `users` collection
/// keyed by the authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
    pub role: Option<Role>,
    /// True while the identity and role are still being looked up.
    pub loading: bool,
}

impl AuthContext {
    pub fn signed_in(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user: Some(AuthUser {
                id: id.into(),
                email: email.into(),
            }),
            role: Some(role),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            role: None,
            loading: false,
        }
    }

    /// Initial state while the auth collaborator is still resolving.
    pub fn resolving() -> Self {
        Self {
            user: None,
            role: None,
            loading: true,
        }
    }

    /// The acting user, or a refusal naming the attempted action.
    pub(crate) fn require_user(&self, action: &str) -> Result<&AuthUser, DomainError> {
        self.user.as_ref().ok_or_else(|| {
            DomainError::Forbidden(format!("You must be logged in to {}", action))
        })
    }
}
