pub mod config;
pub mod core;
pub mod logging;

pub use config::Config;
pub use crate::core::{
    Anchor, BlockId, Category, ContactForm, ContentCatalog, ContentItem, RevealPresenter,
    ViewController, ViewState,
};

#[cfg(feature = "gui")]
pub mod gui;
