pub mod anchor;
pub mod catalog;
pub mod contact;
pub mod media;
pub mod motion;
pub mod reveal;
pub mod view;

pub use anchor::{Anchor, AnchorMap, Section};
pub use catalog::{Accent, Category, ContentCatalog, ContentItem, IconId, MediaRef, Profile};
pub use contact::{Acknowledgment, ContactForm, Field};
pub use reveal::{BlockId, RevealPresenter};
pub use view::{Gallery, Transition, ViewController, ViewState};
