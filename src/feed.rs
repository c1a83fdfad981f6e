use std::rc::Rc;

use tracing::warn;

use crate::api::ApiClient;
use crate::config::*;
use crate::core::dom::{Document, NodeId, SharedDocument};
use crate::core::transport::Transport;
use crate::models::models::{FeedScope, Post};

/// How a post card is dressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardOptions {
    pub body_class: &'static str,
    /// Render the author as a link to `/profiles/{authorId}`.
    pub link_author: bool,
}

impl CardOptions {
    /// Cards on the media page: authors link to their profiles.
    pub fn media() -> Self {
        CardOptions {
            body_class: POST_BODY_CLASS,
            link_author: true,
        }
    }

    /// Cards on the bare add-post page: plain authors.
    pub fn add_post() -> Self {
        CardOptions {
            body_class: POST_BODY_CLASS,
            link_author: false,
        }
    }

    /// Cards on a profile page, where every post has the same author.
    pub fn profile() -> Self {
        CardOptions {
            body_class: USER_POST_BODY_CLASS,
            link_author: false,
        }
    }
}

/// Appends one post card to `container` and returns the card's root:
///
/// ```text
/// div.<body_class>
///   div.card-body
///     h5.card-text.text-right   author (optionally a link)
///     p.card-text.text-justify  content
///   hr
/// ```
pub fn render_post(doc: &mut Document, container: NodeId, post: &Post, options: &CardOptions) -> NodeId {
    let body = doc.create_element("div");
    doc.element_mut(body).add_class(options.body_class);

    let card = doc.create_element("div");
    doc.element_mut(card).add_class("card-body");

    let content = doc.create_element("p");
    {
        let el = doc.element_mut(content);
        el.add_class("card-text");
        el.add_class("text-justify");
        el.set_text(&post.content);
    }

    let author = doc.create_element("h5");
    {
        let el = doc.element_mut(author);
        el.add_class("card-text");
        el.add_class("text-right");
    }
    if options.link_author {
        let link = doc.create_element("a");
        let el = doc.element_mut(link);
        el.set_attribute("href", &profile_href(&post.author_id));
        el.set_attribute("style", AUTHOR_LINK_STYLE);
        el.set_text(&post.author);
        doc.append_child(author, link);
    } else {
        doc.element_mut(author).set_text(&post.author);
    }

    let hr = doc.create_element("hr");

    doc.append_child(card, author);
    doc.append_child(card, content);
    doc.append_child(body, card);
    doc.append_child(body, hr);
    doc.append_child(container, body);
    body
}

pub struct FeedRenderer<T> {
    api: Rc<ApiClient<T>>,
    document: SharedDocument,
    container: NodeId,
    options: CardOptions,
}

impl<T: Transport> FeedRenderer<T> {
    pub fn new(api: Rc<ApiClient<T>>, document: SharedDocument, container: NodeId, options: CardOptions) -> Self {
        FeedRenderer {
            api,
            document,
            container,
            options,
        }
    }

    /// Fetches the scope's posts and appends a card per post, in response
    /// order. Never clears the container. Failures are logged and render
    /// nothing; the returned count is the number of cards appended.
    pub async fn load(&self, scope: &FeedScope) -> usize {
        let posts = match self.api.list_posts(scope).await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(?scope, error = %e, "failed to load feed");
                return 0;
            }
        };

        let mut doc = self.document.borrow_mut();
        for post in &posts {
            render_post(&mut doc, self.container, post, &self.options);
        }
        posts.len()
    }
}
