//! Acting user and the role-to-permission mapping used by the navigation
//! shell. The session is an explicit value threaded into each screen.

use serde::Deserialize;

use crate::model::permissions::PermissionDescriptor;

pub const ADMIN_ROLE_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Operator(i64),
}

impl Role {
    pub fn from_id(id: i64) -> Self {
        if id == ADMIN_ROLE_ID {
            Self::Administrator
        } else {
            Self::Operator(id)
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrator)
    }
}

/// Response of the current-user endpoint. The role id arrives either as
/// `rol.id` or as a flat `user_rol`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre_usuario: Option<String>,
    #[serde(default)]
    rol: Option<RoleRef>,
    #[serde(default)]
    user_rol: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RoleRef {
    #[serde(default)]
    id: Option<i64>,
}

impl CurrentUser {
    pub fn role(&self) -> Option<Role> {
        self.rol
            .as_ref()
            .and_then(|r| r.id)
            .or(self.user_rol)
            .map(Role::from_id)
    }
}

/// Everything a screen needs to know about who is using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn new(token: Option<String>, role: Role) -> Self {
        Self { token, role }
    }

    pub fn permissions_for(&self, resource: &str) -> PermissionDescriptor {
        permissions_for(self.role, resource)
    }
}

/// Screen permissions for `role` on `resource`.
pub fn permissions_for(role: Role, resource: &str) -> PermissionDescriptor {
    if role.is_admin() {
        return PermissionDescriptor::default();
    }
    match resource {
        "usuarios" | "roles" => PermissionDescriptor::no_access(),
        "tickets_pesaje" => PermissionDescriptor::read_only(),
        _ => PermissionDescriptor {
            can_delete: false,
            requires_admin_for_edit: true,
            ..PermissionDescriptor::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_is_read_from_either_shape() {
        let nested: CurrentUser = serde_json::from_value(json!({"rol": {"id": 1}})).expect("user");
        assert_eq!(nested.role(), Some(Role::Administrator));

        let flat: CurrentUser = serde_json::from_value(json!({"user_rol": 2})).expect("user");
        assert_eq!(flat.role(), Some(Role::Operator(2)));

        let none: CurrentUser = serde_json::from_value(json!({})).expect("user");
        assert_eq!(none.role(), None);
    }

    #[test]
    fn operators_cannot_reach_user_management() {
        let operator = Role::Operator(2);
        assert!(permissions_for(operator, "usuarios").no_access);
        assert!(permissions_for(operator, "tickets_pesaje").read_only);

        let vehicles = permissions_for(operator, "vehiculos");
        assert!(vehicles.can_create && vehicles.requires_admin_for_edit && !vehicles.can_delete);

        assert_eq!(
            permissions_for(Role::Administrator, "usuarios"),
            PermissionDescriptor::default()
        );
    }
}
