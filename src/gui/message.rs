use std::time::Instant;

use iced::widget::image;

use crate::core::{Anchor, Gallery};
use crate::gui::screens::{ScreenMessage, gallery::GalleryScreen, home::HomeScreen};

/// Navigation requests coming from outside the screens (the nav bar) or
/// bubbled up from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Link(Anchor),
    SeeMore(Gallery),
    Back,
}

#[derive(Debug, Clone)]
pub enum Message {
    HomeMessage(ScreenMessage<HomeScreen>),
    GalleryMessage(ScreenMessage<GalleryScreen>),
    Navigate(Navigation),
    MediaLoaded {
        reference: String,
        result: Result<image::Handle, String>,
    },
    Tick(Instant),
}
