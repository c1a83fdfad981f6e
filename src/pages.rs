//! Page initialisation: element ids are looked up once here and the widgets
//! receive node handles.

use std::rc::Rc;

use crate::api::ApiClient;
use crate::composer::PostComposer;
use crate::config::*;
use crate::core::dom::{NodeId, SharedDocument};
use crate::core::errors::{ClientError, Result};
use crate::core::transport::Transport;
use crate::edit_profile::EditProfileGate;
use crate::feed::{CardOptions, FeedRenderer};
use crate::follow::FollowControl;
use crate::models::models::{DraftShape, FeedScope};
use crate::profile::{load_profile_details, EditProfileLink};

fn require(document: &SharedDocument, id: &str) -> Result<NodeId> {
    document
        .borrow()
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::MissingElement(id.to_string()))
}

fn find(document: &SharedDocument, id: &str) -> Option<NodeId> {
    document.borrow().get_element_by_id(id)
}

/// The posting page. With a profile header container present it is the media
/// page (header, linked authors, `authorId` drafts); without one it is the
/// bare add-post page (plain authors, `likes` drafts).
pub struct MediaPage<T> {
    api: Rc<ApiClient<T>>,
    document: SharedDocument,
    profile_details: Option<NodeId>,
    pub feed: FeedRenderer<T>,
    pub composer: PostComposer<T>,
    pub edit_profile: Option<EditProfileLink<T>>,
}

impl<T: Transport> MediaPage<T> {
    pub fn mount(api: Rc<ApiClient<T>>, document: SharedDocument) -> Result<Self> {
        let posts = require(&document, POSTS_ID)?;
        let input = require(&document, POST_INPUT_ID)?;
        let submit = require(&document, ADD_POST_ID)?;
        let profile_details = find(&document, PROFILE_DETAILS_ID);

        let (card, shape) = match profile_details {
            Some(_) => (CardOptions::media(), DraftShape::WithAuthorId),
            None => (CardOptions::add_post(), DraftShape::WithLikes),
        };

        let feed = FeedRenderer::new(api.clone(), document.clone(), posts, card.clone());
        let composer = PostComposer::new(api.clone(), document.clone(), input, submit, posts, card, shape);
        let edit_profile = find(&document, EDIT_PROFILE_LINK_ID)
            .map(|_| EditProfileLink::new(api.clone(), document.clone()));

        Ok(MediaPage {
            api,
            document,
            profile_details,
            feed,
            composer,
            edit_profile,
        })
    }

    /// Page load: the profile header first, then the global feed. A failed
    /// header request abandons the load. Returns the number of cards added.
    pub async fn load(&self) -> usize {
        if let Some(container) = self.profile_details {
            if load_profile_details(self.api.as_ref(), &self.document, container).await.is_none() {
                return 0;
            }
        }
        self.feed.load(&FeedScope::All).await
    }
}

/// `/profiles/{id}`: that user's posts and, on someone else's profile, the
/// follow toggle.
pub struct ProfilePage<T> {
    scope: FeedScope,
    pub feed: FeedRenderer<T>,
    pub follow: Option<FollowControl<T>>,
}

impl<T: Transport> ProfilePage<T> {
    pub fn mount(api: Rc<ApiClient<T>>, document: SharedDocument) -> Result<Self> {
        let posts = require(&document, USER_POSTS_ID)?;
        let scope = FeedScope::for_profile(document.borrow().location());

        let button = find(&document, FOLLOW_BUTTON_ID).or_else(|| find(&document, UNFOLLOW_BUTTON_ID));
        let follow = match button {
            Some(button) => Some(FollowControl::mount(api.clone(), document.clone(), button)?),
            None => None,
        };

        let feed = FeedRenderer::new(api, document, posts, CardOptions::profile());
        Ok(ProfilePage { scope, feed, follow })
    }

    pub fn scope(&self) -> &FeedScope {
        &self.scope
    }

    pub async fn load(&self) -> usize {
        self.feed.load(&self.scope).await
    }
}

pub struct EditProfilePage {
    pub gate: EditProfileGate,
}

impl EditProfilePage {
    pub fn mount(document: SharedDocument) -> Result<Self> {
        let email = require(&document, EMAIL_ID)?;
        let first_name = require(&document, FIRST_NAME_ID)?;
        let last_name = require(&document, LAST_NAME_ID)?;
        let confirm = require(&document, CONFIRM_BUTTON_ID)?;
        Ok(EditProfilePage {
            gate: EditProfileGate::mount(document, email, first_name, last_name, confirm),
        })
    }
}
