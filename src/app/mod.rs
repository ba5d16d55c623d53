// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns one carousel slot per carousel use site, the
//! visitor forms, the record store and the open dialog, and translates
//! messages into side effects such as feed fetches, store writes or
//! clipboard copies.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Direction, Flags, Message};
pub use screen::Section;

use crate::carousel::{CarouselOptions, ItemsPerPage, Slot};
use crate::feeds::{self, instagram::Post, reviews::RatingSummary};
use crate::i18n::fluent::I18n;
use crate::site::feedback::{self, FeedbackForm, Testimonial};
use crate::site::{blog, BlogPost, ContactForm, FormError};
use crate::store::{Collections, FileStore, KeyValueStore, MemoryStore};
use crate::ui::modal::Modal;
use crate::ui::sections::reviews::ReviewCard;
use crate::ui::sections::videos::VideoGrid;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    section: Section,
    /// Whether the collapsed navbar menu is open.
    menu_open: bool,
    viewport_width: f32,
    records: Collections<Box<dyn KeyValueStore>>,
    reviews: Slot<ReviewCard>,
    rating_summary: Option<RatingSummary>,
    /// Outbound link for the reviews fallback; the place's maps page once known.
    reviews_link: String,
    gallery: Slot<Post>,
    videos: VideoGrid,
    /// Consented testimonials, newest first.
    testimonials: Vec<Testimonial>,
    feedback: FeedbackForm,
    feedback_error: Option<FormError>,
    contact: ContactForm,
    contact_error: Option<FormError>,
    blogs: Vec<BlogPost>,
    modal: Option<Modal>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("viewport_width", &self.viewport_width)
            .field("modal", &self.modal)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Opens the record store in the data directory.
///
/// Falls back to an in-memory store, with a warning key, when no data
/// directory can be determined.
pub fn open_store() -> (Box<dyn KeyValueStore>, Option<String>) {
    match paths::get_app_data_dir() {
        Some(dir) => {
            let (store, warning) = FileStore::open_in(&dir);
            tracing::debug!(path = %store.path().display(), "record store opened");
            (Box::new(store), warning)
        }
        None => {
            tracing::warn!("no data directory; records will not persist");
            (
                Box::new(MemoryStore::new()),
                Some("store-unavailable".to_string()),
            )
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and records, then starts the feed fetches.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (store, store_warning) = open_store();

        let mut app = Self::with_parts(config, i18n, store);
        let warnings: Vec<String> = [config_warning, store_warning]
            .into_iter()
            .flatten()
            .map(|key| app.i18n.tr(&key))
            .collect();
        if !warnings.is_empty() {
            app.modal = Some(Modal::new(
                app.i18n.tr("startup-warning-title"),
                warnings.join("\n"),
            ));
        }

        let task = app.load_feeds();
        (app, task)
    }

    /// Assembles the state without touching the network.
    fn with_parts(config: Config, i18n: I18n, store: Box<dyn KeyValueStore>) -> Self {
        let records = Collections::new(store);
        let testimonials = feedback::public(&records.testimonials());
        let blogs = blog::listing(records.blogs());
        let reviews_link = config.feeds.reviews_fallback_url().to_string();

        Self {
            i18n,
            config,
            section: Section::default(),
            menu_open: false,
            viewport_width: config::DEFAULT_WINDOW_WIDTH,
            records,
            reviews: Slot::default(),
            rating_summary: None,
            reviews_link,
            gallery: Slot::default(),
            videos: VideoGrid::default(),
            testimonials,
            feedback: FeedbackForm::default(),
            feedback_error: None,
            contact: ContactForm::default(),
            contact_error: None,
            blogs,
            modal: None,
        }
    }

    fn load_feeds(&self) -> Task<Message> {
        let client = match feeds::client() {
            Ok(client) => client,
            Err(error) => {
                tracing::warn!(%error, "HTTP client unavailable; feeds disabled");
                return Task::batch([
                    Task::done(Message::ReviewsLoaded(Err(error.clone()))),
                    Task::done(Message::PostsLoaded(Err(error.clone()))),
                    Task::done(Message::VideosLoaded(Err(error))),
                ]);
            }
        };

        let settings = &self.config.feeds;
        Task::batch([
            Task::perform(
                feeds::reviews::fetch(client.clone(), settings.place()),
                Message::ReviewsLoaded,
            ),
            Task::perform(
                feeds::instagram::fetch(client.clone(), settings.instagram()),
                Message::PostsLoaded,
            ),
            Task::perform(
                feeds::youtube::fetch(client, settings.youtube()),
                Message::VideosLoaded,
            ),
        ])
    }

    fn review_options(&self) -> CarouselOptions {
        CarouselOptions::new(
            ItemsPerPage::Fixed(1),
            self.config.carousel.review_interval(),
        )
        .with_resize_settle(self.config.carousel.resize_settle())
    }

    fn slideshow_options(&self) -> CarouselOptions {
        CarouselOptions::new(
            ItemsPerPage::slideshow(),
            self.config.carousel.slideshow_interval(),
        )
        .with_resize_settle(self.config.carousel.resize_settle())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let section = self.i18n.tr(self.section.label_key());
        format!("{section} - {app_name}")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.reviews.subscription().map(Message::Reviews),
            self.gallery.subscription().map(Message::Gallery),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests;
