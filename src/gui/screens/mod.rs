pub mod gallery;
pub mod home;

use iced::{Element, Task};

use crate::{
    core::{BlockId, Gallery, ViewState},
    gui::{AppState, Message, message::Navigation},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The mounted screen. Exactly one exists, matching the controller's view.
#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home::HomeScreen),
    Gallery(gallery::GalleryScreen),
}

impl ScreenData {
    pub fn for_view(view: ViewState) -> Self {
        match view.gallery() {
            None => ScreenData::Home(home::HomeScreen),
            Some(gallery) => ScreenData::Gallery(gallery::GalleryScreen::new(gallery)),
        }
    }

    /// Blocks the reveal presenter should track while this screen is mounted.
    pub fn blocks(&self, state: &AppState) -> Vec<BlockId> {
        match self {
            ScreenData::Home(screen) => screen.blocks(&state.catalog),
            ScreenData::Gallery(screen) => screen.blocks(&state.catalog),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, ScreenData::Home(_))
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Navigation;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Home(screen) => screen.view(state).map(Message::HomeMessage),
            ScreenData::Gallery(screen) => screen.view(state).map(Message::GalleryMessage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (ScreenData::Home(page), Message::HomeMessage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::HomeMessage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    home::ParentMessage::SeeMore(gallery) => Task::done(
                        ScreenMessage::ParentMessage(Navigation::SeeMore(gallery)),
                    ),
                    home::ParentMessage::JumpTo(anchor) => {
                        Task::done(ScreenMessage::ParentMessage(Navigation::Link(anchor)))
                    }
                },
            },
            (ScreenData::Gallery(page), Message::GalleryMessage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::GalleryMessage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(gallery::ParentMessage::Back) => {
                    Task::done(ScreenMessage::ParentMessage(Navigation::Back))
                }
            },
            // late messages from a screen that has since been replaced
            _ => Task::none(),
        }
    }
}

pub(crate) fn gallery_scope(gallery: Gallery) -> &'static str {
    match gallery {
        Gallery::UiUx => "uiux",
        Gallery::Dev => "dev",
    }
}
