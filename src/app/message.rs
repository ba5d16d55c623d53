// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Section;
use crate::carousel;
use crate::error::FeedError;
use crate::feeds::instagram::Post;
use crate::feeds::reviews::Place;
use crate::feeds::youtube::Video;
use crate::ui::navbar;
use crate::ui::sections::{contact, testimonials};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Reviews(carousel::Message),
    Gallery(carousel::Message),
    Testimonials(testimonials::Message),
    Contact(contact::Message),
    ReviewsLoaded(Result<Place, FeedError>),
    PostsLoaded(Result<Vec<Post>, FeedError>),
    VideosLoaded(Result<Vec<Video>, FeedError>),
    /// New window width in logical pixels.
    WindowResized(f32),
    /// Arrow key pressed while no widget captured it.
    Arrow(Direction),
    EscapePressed,
    /// Copies an outbound link and confirms it in the modal.
    CopyLink(String),
    OpenBlogPost(usize),
    CloseModal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
}
