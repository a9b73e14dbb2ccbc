use std::time::Instant;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{column, row, text},
};

use crate::core::{BlockId, Category, ContentCatalog, Gallery, IconId};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage, gallery_scope},
    widgets,
};

/// Full list of one kind of project, reached through "See More".
#[derive(Debug, Clone)]
pub struct GalleryScreen {
    gallery: Gallery,
}

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    Reveal(BlockId, bool),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Back,
}

type Msg = ScreenMessage<GalleryScreen>;

impl GalleryScreen {
    pub fn new(gallery: Gallery) -> Self {
        Self { gallery }
    }

    fn category(&self) -> Category {
        match self.gallery {
            Gallery::UiUx => Category::UiUxProjects,
            Gallery::Dev => Category::DevProjects,
        }
    }

    fn heading_block(&self) -> BlockId {
        BlockId::scoped(gallery_scope(self.gallery), ["heading"])
    }

    fn card_block(&self, index: usize) -> BlockId {
        BlockId::scoped(gallery_scope(self.gallery), ["card".to_string(), index.to_string()])
    }

    pub fn blocks(&self, catalog: &ContentCatalog) -> Vec<BlockId> {
        std::iter::once(self.heading_block())
            .chain((0..catalog.items(self.category()).len()).map(|i| self.card_block(i)))
            .collect()
    }

    fn revealed<'a>(
        &self,
        state: &'a AppState,
        id: BlockId,
        content: impl FnOnce(f32) -> Element<'a, Msg>,
    ) -> Element<'a, Msg> {
        let progress = state.reveal.progress(&id, state.now);
        widgets::reveal(content(progress), progress, state.anticipate_px, move |visible| {
            ScreenMessage::ScreenMessage(GalleryMessage::Reveal(id.clone(), visible))
        })
    }
}

impl Screen for GalleryScreen {
    type Message = GalleryMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Msg> {
        let back = widgets::link_button(
            row![text(IconId::ArrowLeft.glyph()), text("Back to Home")]
                .spacing(8)
                .align_y(Center),
            ScreenMessage::ParentMessage(ParentMessage::Back),
            widgets::MUTED,
        );
        let heading = self.revealed(state, self.heading_block(), |alpha| {
            widgets::section_heading(self.gallery.title(), alpha)
        });
        let cards = state
            .catalog
            .items(self.category())
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.revealed(state, self.card_block(i), |alpha| {
                    widgets::project_card(item, &state.media, alpha)
                })
            })
            .collect();

        column![back, heading, widgets::grid(cards, 3, 32.0)]
            .spacing(32)
            .padding(iced::Padding {
                top: 32.0,
                ..iced::Padding::ZERO
            })
            .into()
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<Msg> {
        match message {
            GalleryMessage::Reveal(block, visible) => {
                state.reveal.observe(block, visible, Instant::now());
                Task::none()
            }
        }
    }
}
