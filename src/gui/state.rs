use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use iced::widget::text_editor;

use crate::config::Config;
use crate::core::{AnchorMap, ContactForm, ContentCatalog, RevealPresenter, ViewController};
use crate::gui::media::MediaStore;

/// Spacing between home sections; the anchor map needs to know it.
pub const SECTION_SPACING: f32 = 96.0;
pub const PAGE_PADDING: f32 = 32.0;

/// Everything the screens read, and the presenters they mutate.
pub struct AppState {
    pub controller: ViewController,
    pub reveal: RevealPresenter,
    pub catalog: ContentCatalog,
    pub contact: ContactForm,
    /// Editing buffer of the multi-line message field; its text is
    /// mirrored into `contact` on every edit.
    pub message_editor: text_editor::Content,
    pub anchors: AnchorMap,
    pub media: MediaStore,
    pub assets_dir: PathBuf,
    pub anticipate_px: f32,
    pub year: i32,
    /// When the current screen was mounted; looping animations count from here.
    pub mounted_at: Instant,
    /// Time of the last frame tick.
    pub now: Instant,
}

impl AppState {
    pub fn new(config: &Config, catalog: ContentCatalog) -> Self {
        let now = Instant::now();
        Self {
            controller: ViewController::new(),
            reveal: RevealPresenter::new(config.reveal.transition()),
            catalog,
            contact: ContactForm::new(config.contact.acknowledgment.clone()),
            message_editor: text_editor::Content::new(),
            anchors: AnchorMap::new(SECTION_SPACING, PAGE_PADDING),
            media: MediaStore::default(),
            assets_dir: config.content.assets_dir.clone(),
            anticipate_px: config.reveal.anticipate_px,
            year: current_year(),
            mounted_at: now,
            now,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("view", &self.controller.current_view())
            .field("revealed", &self.reveal.revealed_count())
            .field("contact", &self.contact)
            .field("anchors", &self.anchors)
            .field("media", &self.media)
            .field("assets_dir", &self.assets_dir)
            .finish_non_exhaustive()
    }
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .year()
}
