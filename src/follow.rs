use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::config::*;
use crate::core::dom::{NodeId, SharedDocument};
use crate::core::errors::{ClientError, Result};
use crate::core::helpers::trailing_segment;
use crate::core::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    NotFollowing,
    Following,
}

impl FollowState {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Follow" => Some(FollowState::NotFollowing),
            "Unfollow" => Some(FollowState::Following),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FollowState::NotFollowing => FollowState::Following,
            FollowState::Following => FollowState::NotFollowing,
        }
    }

    /// The label offers the action the next click performs.
    pub fn label(self) -> &'static str {
        match self {
            FollowState::NotFollowing => "Follow",
            FollowState::Following => "Unfollow",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            FollowState::NotFollowing => FOLLOW_BUTTON_ID,
            FollowState::Following => UNFOLLOW_BUTTON_ID,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FollowState::NotFollowing => "btn-primary",
            FollowState::Following => "btn-secondary",
        }
    }
}

/// Follow/Unfollow toggle bound to one button on a profile page.
///
/// The widget owns its state; label, id and class are written from it
/// together and never read back.
pub struct FollowControl<T> {
    api: Rc<ApiClient<T>>,
    document: SharedDocument,
    button: NodeId,
    user_id: String,
    state: Cell<FollowState>,
    rollback: bool,
}

impl<T: Transport> FollowControl<T> {
    /// Takes the initial state from the server-rendered label, once, and the
    /// profile's user id from the page location. A location without a
    /// trailing id is rejected.
    pub fn mount(api: Rc<ApiClient<T>>, document: SharedDocument, button: NodeId) -> Result<Self> {
        let (state, user_id) = {
            let doc = document.borrow();
            let label = doc.text_content(button);
            let state = FollowState::from_label(&label)
                .ok_or_else(|| ClientError::UnknownFollowLabel(label.clone()))?;
            let user_id = trailing_segment(doc.location());
            if user_id.is_empty() {
                return Err(ClientError::MissingUserId(doc.location().to_string()));
            }
            (state, user_id)
        };

        let control = FollowControl {
            api,
            document,
            button,
            user_id,
            state: Cell::new(state),
            rollback: follow_rollback(),
        };
        control.apply(state);
        Ok(control)
    }

    /// Revert the toggle when the request fails instead of leaving the
    /// optimistic state in place.
    pub fn with_rollback(mut self, rollback: bool) -> Self {
        self.rollback = rollback;
        self
    }

    pub fn state(&self) -> FollowState {
        self.state.get()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    fn apply(&self, state: FollowState) {
        let mut doc = self.document.borrow_mut();
        let el = doc.element_mut(self.button);
        el.set_text(state.label());
        el.set_id(state.element_id());
        el.remove_class(state.toggled().class());
        el.add_class(state.class());
    }

    fn set_disabled(&self, disabled: bool) {
        self.document
            .borrow_mut()
            .element_mut(self.button)
            .set_disabled(disabled);
    }

    /// A click on the button. Ignored while a previous request is in flight.
    /// The new state is shown and the button disabled before the request is
    /// sent; the button is re-enabled whatever the outcome.
    pub async fn click(&self) -> FollowState {
        if self.document.borrow().element(self.button).is_disabled() {
            return self.state();
        }

        let previous = self.state();
        let next = previous.toggled();
        self.state.set(next);
        self.apply(next);
        self.set_disabled(true);

        let result = match next {
            FollowState::Following => self.api.follow(&self.user_id).await,
            FollowState::NotFollowing => self.api.unfollow(&self.user_id).await,
        };

        match result {
            Ok(()) => debug!(user_id = %self.user_id, state = ?next, "follow state changed"),
            Err(e) => {
                warn!(user_id = %self.user_id, error = %e, "follow request failed");
                if self.rollback {
                    self.state.set(previous);
                    self.apply(previous);
                }
            }
        }

        self.set_disabled(false);
        self.state()
    }
}
