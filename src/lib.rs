//! Client-side widgets for the posts web app: the post feed, the new-post
//! composer, the follow toggle, the profile header and the edit-profile gate.
//!
//! Widgets render into an in-memory [`crate::core::dom::Document`] and talk to the
//! backend through a [`crate::core::transport::Transport`].

pub mod api;
pub mod composer;
pub mod config;
pub mod core;
pub mod edit_profile;
pub mod feed;
pub mod follow;
pub mod models;
pub mod pages;
pub mod profile;
pub mod templates;

pub use api::ApiClient;
pub use crate::core::dom::{Document, NodeId, SharedDocument};
pub use crate::core::errors::ClientError;
pub use crate::core::transport::{ReqwestTransport, Transport};
