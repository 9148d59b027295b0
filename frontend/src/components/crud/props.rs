use std::rc::Rc;

use yew::prelude::*;

use common::model::permissions::PermissionDescriptor;
use common::registry::ResourceRegistry;

use crate::api::ApiClient;

/// Properties of [`CrudComponent`](super::CrudComponent).
///
/// The shell keys the component by `resource`, so changing screens always
/// mounts a fresh controller.
#[derive(Properties, PartialEq, Clone)]
pub struct CrudProps {
    /// REST collection shown by this screen; must be registered in `registry`.
    pub resource: AttrValue,
    pub api: ApiClient,
    /// Descriptors of every resource, for nested "create related" forms.
    pub registry: Rc<ResourceRegistry>,
    /// Flags computed by the shell from the current user's role.
    pub permissions: PermissionDescriptor,
}
