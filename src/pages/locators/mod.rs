//! CSS selectors for every screen, grouped the way the screens are laid out.
//! Selectors are plain `&'static str` so page objects can combine them.

pub mod admin;
pub mod community;
pub mod create_post;
pub mod login;
pub mod navigation;
pub mod newsfeed;
pub mod post_card;
pub mod post_details;
pub mod profile;
pub mod register;
pub mod search;
