mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::core::{
    Acknowledgment, Anchor, AnchorMap, BlockId, Category, ContactForm, ContentCatalog,
    ContentItem, Field, Gallery, RevealPresenter, Section, Transition, ViewController, ViewState,
};
