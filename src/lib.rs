#![deny(missing_docs)]

//! An in-memory multi-value dictionary with an interactive command shell.
//!
//! The dictionary maps string keys to insertion-ordered sets of
//! distinct string members. The [`DictionaryService`] trait is the
//! programmatic contract; [`Session`] drives it from line-oriented
//! input such as a terminal.

mod command;
mod config;
mod dispatch;
mod error;
mod render;
mod service;
mod session;

pub use command::Command;
pub use config::{Config, Format, DEFAULT_CONFIG_FILE};
pub use dispatch::{execute, Reply};
pub use error::{MvdError, Result};
pub use render::Renderer;
pub use service::{DictionaryService, Item, Membership, MultiValueDictionary, Removal};
pub use session::Session;
