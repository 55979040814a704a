//! Build `mailto:` and Gmail web-compose links from recipient and message
//! fields, with clipboard copy and Hebrew/English status text.
//!
//! The core is a handful of pure functions: [`compose::is_valid_email_list`]
//! gates actions, [`link::build_mailto`] and [`link::build_gmail_compose`]
//! serialize a [`compose::FieldValues`] snapshot into a link, and
//! [`clipboard::write`] delivers it with a command-line fallback.

pub mod clipboard;
pub mod compose;
pub mod config;
pub mod link;
pub mod locale;
