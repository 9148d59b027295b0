//! Runtime data of the screen component: the controller built from the
//! resource descriptor, the HTTP client that performs its effects, and the
//! resource's render overrides.

use std::rc::Rc;

use common::error::DescriptorError;
use common::screen::CrudScreen;

use crate::api::ApiClient;
use crate::seams::ScreenSeams;

pub struct CrudComponent {
    /// `Err` when the resource has no descriptor; the view then only shows
    /// the configuration error.
    pub screen: Result<CrudScreen, DescriptorError>,
    pub api: ApiClient,
    pub seams: Rc<dyn ScreenSeams>,
    /// The administrator credential challenge is on screen.
    pub challenge_open: bool,
}
