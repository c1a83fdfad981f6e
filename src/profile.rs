use std::rc::Rc;

use tracing::warn;

use crate::api::ApiClient;
use crate::config::*;
use crate::core::dom::{NodeId, SharedDocument};
use crate::core::transport::Transport;
use crate::models::models::ProfileDetails;

/// Renders the signed-in user's name, linked to their profile, into
/// `container`. Returns the details on success; failures are logged only.
pub async fn load_profile_details<T: Transport>(
    api: &ApiClient<T>,
    document: &SharedDocument,
    container: NodeId,
) -> Option<ProfileDetails> {
    let details = match api.profile_details().await {
        Ok(details) => details,
        Err(e) => {
            warn!(error = %e, "failed to load profile details");
            return None;
        }
    };

    let mut doc = document.borrow_mut();
    let wrapper = doc.create_element("div");
    doc.element_mut(wrapper).add_class("profile_details");

    let name = doc.create_element("div");
    doc.element_mut(name).add_class("profile_details_name");

    let link = doc.create_element("a");
    {
        let el = doc.element_mut(link);
        el.set_attribute("href", &profile_href(&details.id));
        el.set_attribute("style", AUTHOR_LINK_STYLE);
        el.set_text(&details.name);
    }

    doc.append_child(name, link);
    doc.append_child(wrapper, name);
    doc.append_child(container, wrapper);
    Some(details)
}

/// The "edit profile" link. Unlike every other request, a failure here is
/// shown to the user, as an alert carrying the status text.
pub struct EditProfileLink<T> {
    api: Rc<ApiClient<T>>,
    document: SharedDocument,
}

impl<T: Transport> EditProfileLink<T> {
    pub fn new(api: Rc<ApiClient<T>>, document: SharedDocument) -> Self {
        EditProfileLink { api, document }
    }

    /// Returns whether the page navigated.
    pub async fn click(&self) -> bool {
        match self.api.edit_profile_page().await {
            Ok(target) => {
                self.document.borrow_mut().navigate(&target);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to open edit profile page");
                self.document.borrow_mut().alert(&e.status_text());
                false
            }
        }
    }
}
