//! User census by role.

use shared::{Role, RoleCensus, User};

/// Number of accounts holding exactly this role.
pub fn count_by_role(users: &[User], role: Role) -> usize {
    users.iter().filter(|user| user.role == role).count()
}

/// The three role counts rendered on the user management page.
pub fn role_census(users: &[User]) -> RoleCensus {
    RoleCensus {
        admins: count_by_role(users, Role::Admin),
        veterinarians: count_by_role(users, Role::Veterinarian),
        workers: count_by_role(users, Role::Worker),
    }
}
