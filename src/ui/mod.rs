// SPDX-License-Identifier: MPL-2.0
//! User interface components for the gallery.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`grid`] - Filterable thumbnail grid
//! - [`modal`] - Full-screen lightbox with wrap-around navigation
//! - [`empty_state`] - Landing view shown before a gallery is opened
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Gallery title and category filter pills
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod empty_state;
pub mod grid;
pub mod modal;
pub mod navbar;
pub mod styles;
