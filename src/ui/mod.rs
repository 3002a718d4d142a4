// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod back_to_top;
pub mod contact_form;
pub mod counters;
pub mod design_tokens;
pub mod easing;
pub mod floating_icons;
pub mod loading;
pub mod navbar;
pub mod reveal;
pub mod styles;
pub mod theming;
pub mod typing;
pub mod viewport;
pub mod widgets;
