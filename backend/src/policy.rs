//! Table-driven access policy.
//!
//! Presentation uses this to decide which controls to show, and every
//! mutating service call re-checks it before touching the store. It is
//! advisory guidance only; hard enforcement lives in the record store's
//! own access rules.

use shared::Role;

/// Mutations a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create or delete an animal.
    ManageAnimals,
    UpdateAnimalStatus,
    ManageHealthRecords,
    ManageMilkRecords,
    /// Covers feed records and nutrition schedules alike.
    ManageFeedRecords,
    ManageFinancialRecords,
    UpdateUserRole,
}

/// Which roles hold each grant.
const GRANTS: &[(Action, &[Role])] = &[
    (Action::ManageAnimals, &[Role::Admin, Role::Veterinarian]),
    (Action::UpdateAnimalStatus, &[Role::Admin, Role::Veterinarian]),
    (Action::ManageHealthRecords, &[Role::Admin, Role::Veterinarian]),
    (Action::ManageMilkRecords, &[Role::Admin, Role::Worker]),
    (Action::ManageFeedRecords, &[Role::Admin, Role::Worker]),
    (Action::ManageFinancialRecords, &[Role::Admin]),
    (Action::UpdateUserRole, &[Role::Admin]),
];

/// Whether `role` may perform `action`.
///
/// `subject_is_self` only matters for role updates: nobody may change
/// their own role, admins included.
pub fn can_perform(role: Role, action: Action, subject_is_self: bool) -> bool {
    if action == Action::UpdateUserRole && subject_is_self {
        return false;
    }

    GRANTS
        .iter()
        .find(|(granted, _)| *granted == action)
        .map(|(_, roles)| roles.contains(&role))
        .unwrap_or(false)
}
