//! Project management domain used by the demo.
//!
//! Users belong to authorization groups; each group grants a fixed set of
//! permissions.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationGroup {
    Employee,
    Manager,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    View,
    Edit,
    DeleteProject,
}

impl AuthorizationGroup {
    /// Permissions granted to members of the group.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            AuthorizationGroup::Employee => &[Permission::View],
            AuthorizationGroup::Manager => &[Permission::View, Permission::Edit],
            AuthorizationGroup::Admin => &[Permission::Edit, Permission::DeleteProject],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub authorization_groups: HashSet<AuthorizationGroup>,
}

impl User {
    pub fn new(username: impl Into<String>, groups: &[AuthorizationGroup]) -> Self {
        User {
            username: username.into(),
            authorization_groups: groups.iter().copied().collect(),
        }
    }

    /// Union of the permissions of every group the user belongs to.
    pub fn permissions(&self) -> HashSet<Permission> {
        self.authorization_groups
            .iter()
            .flat_map(|group| group.permissions().iter().copied())
            .collect()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

pub fn load_employee() -> User {
    User::new("Joe Test Employee", &[AuthorizationGroup::Employee])
}

pub fn load_manager() -> User {
    User::new("Alice Test Manager", &[AuthorizationGroup::Manager])
}

pub fn load_admin() -> User {
    User::new("John Test Admin", &[AuthorizationGroup::Admin])
}

// Requirements

pub fn user_can_view(user: &User) -> bool {
    user.has_permission(Permission::View)
}

pub fn user_can_edit(user: &User) -> bool {
    user.has_permission(Permission::Edit)
}

pub fn user_can_delete_project(user: &User) -> bool {
    user.has_permission(Permission::DeleteProject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_permissions() {
        assert_eq!(
            load_employee().permissions(),
            HashSet::from([Permission::View])
        );
        assert_eq!(
            load_manager().permissions(),
            HashSet::from([Permission::View, Permission::Edit])
        );
        assert_eq!(
            load_admin().permissions(),
            HashSet::from([Permission::Edit, Permission::DeleteProject])
        );
    }

    #[test]
    fn test_permissions_union() {
        let user = User::new(
            "Multi",
            &[AuthorizationGroup::Employee, AuthorizationGroup::Admin],
        );
        assert!(user_can_view(&user));
        assert!(user_can_edit(&user));
        assert!(user_can_delete_project(&user));
    }
}
