// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` is a transient slide-in banner notification overlay for
//! the Iced GUI framework.
//!
//! The crate provides the banner lifecycle (an animated show, a dismiss
//! countdown, drag suppression, an animated hide) as a deterministic state
//! machine, a widget rendering it, and a demo application wiring both
//! together.

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod banner;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
