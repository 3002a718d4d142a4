// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a desktop portfolio built with the Iced GUI framework.
//!
//! One tall scrollable page of sections with the interactive layer a
//! portfolio site would have: light/dark theming with a persisted choice,
//! scroll-aware navigation, a typed-tagline animation, eased statistic
//! counters, scroll-triggered reveals, and a demo contact form. It also
//! demonstrates internationalization with Fluent and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
