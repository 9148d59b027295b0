/// Screen-level permission flags handed to `setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDescriptor {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    /// Updates need a secondary administrator confirmation.
    pub requires_admin_for_edit: bool,
    /// Forces create, edit and delete off.
    pub read_only: bool,
    /// Renders the denial message and skips every request.
    pub no_access: bool,
}

impl Default for PermissionDescriptor {
    fn default() -> Self {
        Self {
            can_create: true,
            can_edit: true,
            can_delete: true,
            requires_admin_for_edit: false,
            read_only: false,
            no_access: false,
        }
    }
}

impl PermissionDescriptor {
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn no_access() -> Self {
        Self {
            no_access: true,
            ..Self::default()
        }
    }

    pub fn effective(&self) -> EffectivePermissions {
        let allowed = !self.read_only && !self.no_access;
        EffectivePermissions {
            can_create: allowed && self.can_create,
            can_edit: allowed && self.can_edit,
            can_delete: allowed && self.can_delete,
            requires_admin_for_edit: self.requires_admin_for_edit,
        }
    }
}

/// Flags after the read-only override has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectivePermissions {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub requires_admin_for_edit: bool,
}

impl EffectivePermissions {
    pub fn row(&self) -> RowPermissions {
        RowPermissions {
            can_edit: self.can_edit,
            can_delete: self.can_delete,
        }
    }
}

/// Controls shown on a single table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowPermissions {
    pub can_edit: bool,
    pub can_delete: bool,
}
