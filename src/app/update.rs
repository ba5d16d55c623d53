// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `handle_message` is the single entrypoint; each branch delegates to a
//! small handler so every state transition stays readable on its own.

use super::{App, Direction, Message};
use crate::carousel::{self, Fallback, Slot};
use crate::error::FeedError;
use crate::feeds::instagram::Post;
use crate::feeds::reviews::Place;
use crate::feeds::youtube::Video;
use crate::feeds::FeedOutcome;
use crate::site::{feedback, BlogPost, ContactRequest, Testimonial};
use crate::ui::modal::Modal;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections::contact::{self, Event as ContactEvent};
use crate::ui::sections::reviews::ReviewCard;
use crate::ui::sections::testimonials::{self, Event as TestimonialsEvent};
use crate::ui::sections::videos::VideoGrid;
use chrono::Utc;
use iced::Task;
use std::time::Instant;

pub fn handle_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => {
            handle_navbar_message(app, message);
            Task::none()
        }
        Message::Reviews(carousel::Message::FallbackLinkPressed) => {
            let link = app.reviews.fallback().and_then(|f| f.link.clone());
            copy_fallback_link(app, link)
        }
        Message::Reviews(message) => {
            app.reviews.update(message, Instant::now());
            Task::none()
        }
        Message::Gallery(carousel::Message::FallbackLinkPressed) => {
            let link = app.gallery.fallback().and_then(|f| f.link.clone());
            copy_fallback_link(app, link)
        }
        Message::Gallery(message) => {
            app.gallery.update(message, Instant::now());
            Task::none()
        }
        Message::Testimonials(message) => handle_testimonials_message(app, message),
        Message::Contact(message) => handle_contact_message(app, message),
        Message::ReviewsLoaded(result) => {
            handle_reviews_loaded(app, result, Instant::now());
            Task::none()
        }
        Message::PostsLoaded(result) => {
            handle_posts_loaded(app, result, Instant::now());
            Task::none()
        }
        Message::VideosLoaded(result) => {
            handle_videos_loaded(app, result);
            Task::none()
        }
        Message::WindowResized(width) => {
            handle_window_resized(app, width, Instant::now());
            Task::none()
        }
        Message::Arrow(direction) => {
            handle_arrow(app, direction, Instant::now());
            Task::none()
        }
        Message::EscapePressed | Message::CloseModal => {
            app.modal = None;
            Task::none()
        }
        Message::CopyLink(url) => copy_link(app, url),
        Message::OpenBlogPost(index) => {
            if let Some(post) = app.blogs.get(index) {
                app.modal = Some(blog_modal(post));
            }
            Task::none()
        }
    }
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) {
    match navbar::update(message, &mut app.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::Selected(section) => app.section = section,
    }
}

fn handle_testimonials_message(app: &mut App, message: testimonials::Message) -> Task<Message> {
    match testimonials::update(&mut app.feedback, &mut app.feedback_error, message) {
        TestimonialsEvent::None => {}
        TestimonialsEvent::Submitted(testimonial) => store_testimonial(app, testimonial),
    }
    Task::none()
}

fn store_testimonial(app: &mut App, testimonial: Testimonial) {
    match app.records.add_testimonial(testimonial) {
        Ok(()) => {
            app.testimonials = feedback::public(&app.records.testimonials());
            app.modal = Some(Modal::new(
                app.i18n.tr("feedback-thanks-title"),
                app.i18n.tr("feedback-thanks-body"),
            ));
        }
        Err(error) => {
            tracing::warn!(%error, "testimonial not saved");
            app.modal = Some(store_error_modal(app));
        }
    }
}

fn handle_contact_message(app: &mut App, message: contact::Message) -> Task<Message> {
    match contact::update(&mut app.contact, &mut app.contact_error, message) {
        ContactEvent::None => Task::none(),
        ContactEvent::Submitted(request) => send_contact_request(app, request),
    }
}

/// Saves the request, then hands it off to the chat link when a number is set.
fn send_contact_request(app: &mut App, request: ContactRequest) -> Task<Message> {
    let handoff = request.handoff_url(&app.config.contact.whatsapp_number);

    if let Err(error) = app.records.add_contact(request) {
        tracing::warn!(%error, "contact request not saved");
        app.modal = Some(store_error_modal(app));
        return Task::none();
    }

    match handoff {
        Some(url) => {
            let url = url.to_string();
            tracing::info!("contact request handed off to chat");
            app.modal = Some(Modal::new(
                app.i18n.tr("contact-sent-title"),
                app.i18n
                    .tr_with_args("contact-sent-body", &[("url", url.as_str())]),
            ));
            iced::clipboard::write(url)
        }
        None => {
            app.modal = Some(Modal::new(
                app.i18n.tr("contact-sent-title"),
                app.i18n.tr("contact-saved"),
            ));
            Task::none()
        }
    }
}

fn store_error_modal(app: &App) -> Modal {
    Modal::new(
        app.i18n.tr("startup-warning-title"),
        app.i18n.tr("store-write-error"),
    )
}

fn handle_reviews_loaded(app: &mut App, result: Result<Place, FeedError>, now: Instant) {
    let result = result.map(|place| {
        app.rating_summary = place.summary;
        if let Some(uri) = place.maps_uri {
            app.reviews_link = uri;
        }
        place.reviews
    });

    let options = app.review_options();
    match FeedOutcome::from_result(result, "reviews") {
        FeedOutcome::Loaded(reviews) => app.reviews.mount_prepared(
            &reviews,
            ReviewCard::prepare,
            options,
            app.viewport_width,
            now,
            Fallback::message("reviews-empty"),
            Fallback::with_link("reviews-unavailable", app.reviews_link.clone()),
        ),
        FeedOutcome::Empty => app.reviews.show_fallback(Fallback::message("reviews-empty")),
        FeedOutcome::NotConfigured => app
            .reviews
            .show_fallback(Fallback::message("reviews-not-configured")),
        FeedOutcome::Unavailable => app.reviews.show_fallback(Fallback::with_link(
            "reviews-unavailable",
            app.reviews_link.clone(),
        )),
    }
}

fn handle_posts_loaded(app: &mut App, result: Result<Vec<Post>, FeedError>, now: Instant) {
    let options = app.slideshow_options();
    match FeedOutcome::from_result(result, "instagram") {
        FeedOutcome::Loaded(posts) => app.gallery.mount(
            posts,
            options,
            app.viewport_width,
            now,
            Fallback::message("gallery-empty"),
        ),
        FeedOutcome::Empty => app.gallery.show_fallback(Fallback::message("gallery-empty")),
        FeedOutcome::NotConfigured => app
            .gallery
            .show_fallback(Fallback::message("gallery-not-configured")),
        FeedOutcome::Unavailable => app.gallery.show_fallback(Fallback::with_link(
            "gallery-unavailable",
            app.config.feeds.instagram_profile_url(),
        )),
    }
}

fn handle_videos_loaded(app: &mut App, result: Result<Vec<Video>, FeedError>) {
    app.videos = match FeedOutcome::from_result(result, "youtube") {
        FeedOutcome::Loaded(videos) => VideoGrid::Loaded(videos),
        FeedOutcome::Empty => VideoGrid::Fallback(Fallback::message("videos-empty")),
        FeedOutcome::NotConfigured => {
            VideoGrid::Fallback(Fallback::message("videos-not-configured"))
        }
        FeedOutcome::Unavailable => VideoGrid::Fallback(Fallback::with_link(
            "videos-unavailable",
            app.config.feeds.youtube().channel_url(),
        )),
    };
}

fn handle_window_resized(app: &mut App, width: f32, now: Instant) {
    app.viewport_width = width;
    if !navbar::is_collapsed(width) {
        app.menu_open = false;
    }
    app.reviews
        .update(carousel::Message::ViewportResized(width), now);
    app.gallery
        .update(carousel::Message::ViewportResized(width), now);
}

/// Arrow keys drive the carousel under the pointer, if any.
fn handle_arrow(app: &mut App, direction: Direction, now: Instant) {
    if app.modal.is_some() {
        return;
    }
    let message = match direction {
        Direction::Previous => carousel::Message::Previous,
        Direction::Next => carousel::Message::Next,
    };
    if let Some(slot) = hovered(&mut app.reviews) {
        slot.update(message, now);
    } else if let Some(slot) = hovered(&mut app.gallery) {
        slot.update(message, now);
    }
}

fn hovered<T>(slot: &mut Slot<T>) -> Option<&mut Slot<T>> {
    slot.is_hovered().then_some(slot)
}

fn copy_fallback_link(app: &mut App, link: Option<String>) -> Task<Message> {
    match link {
        Some(url) => copy_link(app, url),
        None => Task::none(),
    }
}

fn copy_link(app: &mut App, url: String) -> Task<Message> {
    app.modal = Some(Modal::new(
        app.i18n.tr("link-copied-title"),
        app.i18n
            .tr_with_args("link-copied-body", &[("url", url.as_str())]),
    ));
    iced::clipboard::write(url)
}

fn blog_modal(post: &BlogPost) -> Modal {
    Modal::new(post.title.clone(), post.paragraphs().join("\n\n"))
}
