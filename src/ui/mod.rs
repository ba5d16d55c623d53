// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! view takes borrowed state and returns an element producing its own
//! messages, which the app lifts into its top-level message.
//!
//! - [`navbar`] - Section navigation, collapsing into a menu on narrow windows
//! - [`modal`] - Dialog layered over the page
//! - [`sections`] - One view per page section
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod modal;
pub mod navbar;
pub mod sections;
pub mod styles;
