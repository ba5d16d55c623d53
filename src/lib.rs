// SPDX-License-Identifier: MPL-2.0
//! `clinic_showcase` is a desktop showcase for a clinical practice built
//! with the Iced GUI framework.
//!
//! It shows patient reviews and recent photos in auto-advancing carousels,
//! lists the latest channel videos, collects testimonials and appointment
//! requests in a local record store and hands requests off to a chat link.

#![doc(html_root_url = "https://docs.rs/clinic_showcase/0.1.0")]

pub mod app;
pub mod carousel;
pub mod error;
pub mod feeds;
pub mod i18n;
pub mod logger;
pub mod site;
pub mod store;
pub mod ui;
