//! Minimal page skeletons carrying the element ids the pages bind to.
//!
//! The real server renders richer HTML; these are what the CLI starts from
//! and stand in for server markup in tests.

use crate::config::*;
use crate::core::dom::{Document, NodeId};
use crate::follow::FollowState;

fn append(doc: &mut Document, parent: NodeId, tag: &str, id: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.element_mut(node).set_id(id);
    doc.append_child(parent, node);
    node
}

/// `/media`: profile header, composer, global feed.
pub fn media_page(location: &str) -> Document {
    let mut doc = Document::new(location);
    let body = doc.body();
    append(&mut doc, body, "div", PROFILE_DETAILS_ID);
    append(&mut doc, body, "input", POST_INPUT_ID);
    let submit = append(&mut doc, body, "button", ADD_POST_ID);
    {
        let el = doc.element_mut(submit);
        el.set_text("Post");
        el.set_disabled(true);
    }
    let edit = append(&mut doc, body, "a", EDIT_PROFILE_LINK_ID);
    doc.element_mut(edit).set_text("Edit profile");
    append(&mut doc, body, "div", POSTS_ID);
    doc
}

/// `/profiles/{id}`. `follow` is the server-known relationship, or `None` on
/// the viewer's own profile, which has no follow button.
pub fn profile_page(location: &str, follow: Option<FollowState>) -> Document {
    let mut doc = Document::new(location);
    let body = doc.body();
    if let Some(state) = follow {
        let button = append(&mut doc, body, "button", state.element_id());
        let el = doc.element_mut(button);
        el.add_class("btn");
        el.add_class(state.class());
        el.set_text(state.label());
    }
    append(&mut doc, body, "div", USER_POSTS_ID);
    doc
}

pub fn edit_profile_page(location: &str, email: &str, first_name: &str, last_name: &str) -> Document {
    let mut doc = Document::new(location);
    let body = doc.body();
    for (id, value) in [
        (EMAIL_ID, email),
        (FIRST_NAME_ID, first_name),
        (LAST_NAME_ID, last_name),
    ] {
        let input = append(&mut doc, body, "input", id);
        doc.element_mut(input).set_value(value);
    }
    let confirm = append(&mut doc, body, "button", CONFIRM_BUTTON_ID);
    doc.element_mut(confirm).set_text("Confirm");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_profile_has_no_follow_button() {
        let doc = profile_page("/profiles/me", None);
        assert!(doc.get_element_by_id(FOLLOW_BUTTON_ID).is_none());
        assert!(doc.get_element_by_id(UNFOLLOW_BUTTON_ID).is_none());
        assert!(doc.get_element_by_id(USER_POSTS_ID).is_some());
    }

    #[test]
    fn media_page_submit_starts_disabled() {
        let doc = media_page("/media");
        let submit = doc.get_element_by_id(ADD_POST_ID).unwrap();
        assert!(doc.element(submit).is_disabled());
    }
}
