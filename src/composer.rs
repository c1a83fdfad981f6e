use std::rc::Rc;

use tracing::warn;

use crate::api::ApiClient;
use crate::core::dom::{NodeId, SharedDocument};
use crate::core::transport::Transport;
use crate::feed::{render_post, CardOptions};
use crate::models::models::{DraftShape, NewPost, Post};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerState {
    Empty,
    HasContent,
}

impl ComposerState {
    /// Raw length, so whitespace-only input still enables submit.
    pub fn of(value: &str) -> Self {
        if value.is_empty() {
            ComposerState::Empty
        } else {
            ComposerState::HasContent
        }
    }
}

/// The "new post" input and its submit button.
pub struct PostComposer<T> {
    api: Rc<ApiClient<T>>,
    document: SharedDocument,
    input: NodeId,
    submit: NodeId,
    feed: NodeId,
    card: CardOptions,
    shape: DraftShape,
}

impl<T: Transport> PostComposer<T> {
    /// Binds to the input, the submit button, and the feed container new
    /// posts are appended to. Submit starts in the state the input implies.
    pub fn new(
        api: Rc<ApiClient<T>>,
        document: SharedDocument,
        input: NodeId,
        submit: NodeId,
        feed: NodeId,
        card: CardOptions,
        shape: DraftShape,
    ) -> Self {
        let composer = PostComposer {
            api,
            document,
            input,
            submit,
            feed,
            card,
            shape,
        };
        composer.sync_submit();
        composer
    }

    pub fn state(&self) -> ComposerState {
        ComposerState::of(self.document.borrow().element(self.input).value())
    }

    fn sync_submit(&self) {
        let state = self.state();
        self.document
            .borrow_mut()
            .element_mut(self.submit)
            .set_disabled(state == ComposerState::Empty);
    }

    /// An input event: the field now holds `value`.
    pub fn on_input(&self, value: &str) -> ComposerState {
        self.document.borrow_mut().element_mut(self.input).set_value(value);
        self.sync_submit();
        self.state()
    }

    /// A click on submit. The input is cleared and submit disabled before the
    /// response arrives, whatever the outcome; a failed request leaves the
    /// input empty. Returns the created post when one was appended.
    pub async fn submit(&self) -> Option<Post> {
        let content = {
            let mut doc = self.document.borrow_mut();
            if doc.element(self.submit).is_disabled() {
                return None;
            }
            let content = doc.element(self.input).value().to_string();
            doc.element_mut(self.input).set_value("");
            doc.element_mut(self.submit).set_disabled(true);
            content
        };

        let draft = NewPost::new(&content, self.shape);
        match self.api.add_post(&draft).await {
            Ok(post) => {
                render_post(&mut self.document.borrow_mut(), self.feed, &post, &self.card);
                Some(post)
            }
            Err(e) => {
                warn!(error = %e, "failed to add post");
                None
            }
        }
    }
}
