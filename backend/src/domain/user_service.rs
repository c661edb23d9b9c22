//! User management service.

use crate::auth::AuthContext;
use crate::domain::check_policy;
use crate::domain::commands::{UpdateUserRoleCommand, UpdateUserRoleResult};
use crate::error::DomainError;
use crate::policy::Action;
use crate::storage::{RecordStore, Subscription};
use log::info;
use shared::{User, UserRolePatch};
use std::sync::Arc;

/// Browse accounts and reassign roles.
#[derive(Clone)]
pub struct UserService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> UserService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Live snapshot of all accounts, newest first.
    pub fn subscribe(&self) -> Subscription<User> {
        self.store.subscribe()
    }

    /// Reassign another user's role. Admin only, and never one's own
    /// role, whatever the target role is.
    pub async fn update_role(
        &self,
        ctx: &AuthContext,
        command: UpdateUserRoleCommand,
    ) -> Result<UpdateUserRoleResult, DomainError> {
        let user = ctx.require_user("update user roles")?;
        check_policy(
            ctx,
            Action::UpdateUserRole,
            false,
            "Only admins can update user roles",
        )?;
        if user.id == command.user_id {
            return Err(DomainError::Forbidden(
                "You cannot change your own role".to_string(),
            ));
        }

        self.store
            .update::<User, _>(&command.user_id, UserRolePatch { role: command.role })
            .await?;

        info!("User {} role set to {}", command.user_id, command.role);
        Ok(UpdateUserRoleResult {
            success_message: "User role updated successfully".to_string(),
        })
    }
}
