// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::error::FeedError;
use crate::feeds::instagram::MediaKind;
use crate::feeds::reviews::{Place, Review};
use crate::site::BlogPost;
use crate::ui::sections::{contact, testimonials};
use crate::carousel::{self, Fallback};
use crate::ui::navbar;
use chrono::{TimeZone, Utc};

fn app_with(config: Config) -> App {
    App::with_parts(config, I18n::default(), Box::new(MemoryStore::new()))
}

fn app() -> App {
    app_with(Config::default())
}

fn post(id: usize) -> Post {
    Post {
        id: id.to_string(),
        kind: MediaKind::Image,
        image_url: None,
        permalink: format!("https://www.instagram.com/p/{id}/"),
        caption: Some(format!("Post {id}")),
        timestamp: None,
    }
}

fn review(author: &str, rating: u32) -> Review {
    Review {
        author: author.to_string(),
        photo_uri: None,
        relative_time: "a week ago".to_string(),
        rating,
        text: "Great care".to_string(),
    }
}

#[test]
fn starts_on_reviews_with_loading_slots() {
    let app = app();
    assert_eq!(app.section, Section::Reviews);
    assert!(matches!(app.reviews, Slot::Loading));
    assert!(matches!(app.gallery, Slot::Loading));
    assert_eq!(app.videos, VideoGrid::Loading);
    assert!(app.modal.is_none());
}

#[test]
fn loaded_reviews_mount_one_per_page() {
    let mut app = app();
    let place = Place {
        reviews: vec![review("Ana", 5), review("Ben", 4), review("Chloe", 5)],
        summary: Some(RatingSummary {
            rating: 4.7,
            count: 31,
        }),
        maps_uri: Some("https://maps.google.com/?cid=1".to_string()),
    };
    let _ = app.update(Message::ReviewsLoaded(Ok(place)));

    let carousel = app.reviews.carousel().expect("reviews mounted");
    assert_eq!(carousel.page_count(), 3);
    assert_eq!(carousel.live_timers(), 1);
    assert_eq!(app.rating_summary.map(|s| s.count), Some(31));
    assert_eq!(app.reviews_link, "https://maps.google.com/?cid=1");
}

#[test]
fn unrenderable_review_shows_failure_fallback() {
    let mut app = app();
    let place = Place {
        reviews: vec![review("Ana", 5), review("Ben", 9)],
        ..Place::default()
    };
    let _ = app.update(Message::ReviewsLoaded(Ok(place)));

    let fallback = app.reviews.fallback().expect("fallback shown");
    assert_eq!(fallback.message_key, "reviews-unavailable");
    assert!(fallback.link.is_some());
    assert_eq!(app.reviews.live_timers(), 0);
}

#[test]
fn unconfigured_feed_shows_fallback_without_link() {
    let mut app = app();
    let _ = app.update(Message::PostsLoaded(Err(FeedError::NotConfigured)));

    let fallback = app.gallery.fallback().expect("fallback shown");
    assert_eq!(fallback.message_key, "gallery-not-configured");
    assert_eq!(fallback.link, None);
}

#[test]
fn failed_feed_links_to_the_profile() {
    let mut app = app();
    let _ = app.update(Message::PostsLoaded(Err(FeedError::Status(500))));

    let fallback = app.gallery.fallback().expect("fallback shown");
    assert_eq!(fallback.message_key, "gallery-unavailable");
    assert_eq!(
        fallback.link.as_deref(),
        Some(config::DEFAULT_INSTAGRAM_PROFILE_URL)
    );

    let _ = app.update(Message::Gallery(carousel::Message::FallbackLinkPressed));
    assert!(app.modal.is_some());
}

#[test]
fn empty_video_feed_shows_empty_message() {
    let mut app = app();
    let _ = app.update(Message::VideosLoaded(Ok(Vec::new())));
    assert_eq!(
        app.videos,
        VideoGrid::Fallback(Fallback::message("videos-empty"))
    );
}

#[test]
fn resize_marks_gallery_repagination_pending() {
    let mut app = app();
    let posts = (0..7).map(post).collect();
    let _ = app.update(Message::PostsLoaded(Ok(posts)));
    assert_eq!(app.gallery.carousel().map(|c| c.items_per_page()), Some(4));

    let _ = app.update(Message::WindowResized(500.0));

    assert!((app.viewport_width - 500.0).abs() < f32::EPSILON);
    let carousel = app.gallery.carousel().expect("gallery mounted");
    assert!(carousel.is_resize_pending());
    // Re-pagination waits for the resize to settle.
    assert_eq!(carousel.items_per_page(), 4);
}

#[test]
fn arrows_only_drive_the_hovered_carousel() {
    let mut app = app();
    let _ = app.update(Message::PostsLoaded(Ok((0..9).map(post).collect())));

    let _ = app.update(Message::Arrow(Direction::Next));
    assert_eq!(app.gallery.carousel().map(|c| c.current_page()), Some(0));

    let _ = app.update(Message::Gallery(carousel::Message::PointerEntered));
    let _ = app.update(Message::Arrow(Direction::Previous));
    assert_eq!(app.gallery.carousel().map(|c| c.current_page()), Some(2));
}

#[test]
fn escape_closes_the_modal() {
    let mut app = app();
    app.modal = Some(Modal::new("Title", "Body"));
    let _ = app.update(Message::EscapePressed);
    assert!(app.modal.is_none());
}

#[test]
fn arrows_are_ignored_while_a_modal_is_open() {
    let mut app = app();
    let _ = app.update(Message::PostsLoaded(Ok((0..9).map(post).collect())));
    let _ = app.update(Message::Gallery(carousel::Message::PointerEntered));
    app.modal = Some(Modal::new("Title", "Body"));

    let _ = app.update(Message::Arrow(Direction::Next));
    assert_eq!(app.gallery.carousel().map(|c| c.current_page()), Some(0));
}

#[test]
fn navbar_selection_switches_section() {
    let mut app = app();
    let _ = app.update(Message::Navbar(navbar::Message::Select(Section::Contact)));
    assert_eq!(app.section, Section::Contact);
}

#[test]
fn submitted_testimonial_is_stored_and_listed() {
    let mut app = app();
    for message in [
        testimonials::Message::StarSelected(4),
        testimonials::Message::NameChanged("Jane Doe".to_string()),
        testimonials::Message::MessageChanged("Very kind staff".to_string()),
        testimonials::Message::ConsentToggled,
        testimonials::Message::Submit,
    ] {
        let _ = app.update(Message::Testimonials(message));
    }

    assert_eq!(app.records.testimonials().len(), 1);
    assert_eq!(app.testimonials.len(), 1);
    assert_eq!(app.testimonials[0].rating, 4);
    assert!(app.feedback.name.is_empty());
    assert!(app.modal.is_some());
}

#[test]
fn testimonial_without_consent_is_stored_but_hidden() {
    let mut app = app();
    for message in [
        testimonials::Message::StarSelected(5),
        testimonials::Message::NameChanged("Sam".to_string()),
        testimonials::Message::MessageChanged("Thanks".to_string()),
        testimonials::Message::Submit,
    ] {
        let _ = app.update(Message::Testimonials(message));
    }

    assert_eq!(app.records.testimonials().len(), 1);
    assert!(app.testimonials.is_empty());
}

#[test]
fn rejected_testimonial_keeps_the_form() {
    let mut app = app();
    let _ = app.update(Message::Testimonials(testimonials::Message::NameChanged(
        "Sam".to_string(),
    )));
    let _ = app.update(Message::Testimonials(testimonials::Message::Submit));

    assert_eq!(app.feedback_error, Some(FormError::MissingRating));
    assert_eq!(app.feedback.name, "Sam");
    assert!(app.records.testimonials().is_empty());
}

#[test]
fn contact_request_is_handed_off() {
    let mut config = Config::default();
    config.contact.whatsapp_number = "+33 6 12 34 56 78".to_string();
    let mut app = app_with(config);

    let _ = app.update(Message::Contact(contact::Message::NameChanged(
        "Jane".to_string(),
    )));
    let _ = app.update(Message::Contact(contact::Message::Submit));

    assert_eq!(app.records.contacts().len(), 1);
    let modal = app.modal.as_ref().expect("handoff confirmed");
    assert!(modal.body.contains("https://wa.me/33612345678"));
}

#[test]
fn contact_request_without_number_is_only_saved() {
    let mut app = app();
    let _ = app.update(Message::Contact(contact::Message::NameChanged(
        "Jane".to_string(),
    )));
    let _ = app.update(Message::Contact(contact::Message::Submit));

    assert_eq!(app.records.contacts().len(), 1);
    let modal = app.modal.as_ref().expect("confirmation shown");
    assert!(!modal.body.contains("wa.me"));
}

#[test]
fn blog_post_opens_in_modal() {
    let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let posts = vec![BlogPost {
        id: 1,
        title: "Aftercare".to_string(),
        category: "aftercare".to_string(),
        excerpt: "Rest well".to_string(),
        content: "Rest well.\n\nDrink water.".to_string(),
        date,
    }];
    let mut bytes = Vec::new();
    ciborium::into_writer(&posts, &mut bytes).unwrap();
    let mut store = MemoryStore::new();
    store.put(crate::store::BLOGS_KEY, bytes).unwrap();
    let mut app = App::with_parts(Config::default(), I18n::default(), Box::new(store));

    let _ = app.update(Message::OpenBlogPost(0));
    let modal = app.modal.as_ref().expect("post opened");
    assert_eq!(modal.title, "Aftercare");
    assert_eq!(modal.paragraphs(), vec!["Rest well.", "Drink water."]);

    let _ = app.update(Message::CloseModal);
    let _ = app.update(Message::OpenBlogPost(app.blogs.len()));
    assert!(app.modal.is_none());
}

#[test]
fn empty_store_still_lists_bundled_posts() {
    let mut app = app();
    assert!(!app.blogs.is_empty());
    let bundled: Vec<_> = crate::site::blog::bundled_posts()
        .into_iter()
        .map(|post| post.title)
        .collect();
    let listed: Vec<_> = app.blogs.iter().map(|post| post.title.clone()).collect();
    assert_eq!(listed, bundled);

    let _ = app.update(Message::OpenBlogPost(0));
    let modal = app.modal.as_ref().expect("bundled post opened");
    assert_eq!(modal.title, app.blogs[0].title);
}

#[test]
fn title_names_the_active_section() {
    let app = app();
    assert!(app.title().starts_with(&app.i18n.tr("section-reviews")));
}
