//! Which top-level screen is on display, and how navigation moves between them.

use tracing::debug;

use crate::core::anchor::Anchor;

/// The single discriminator for the screen being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Home,
    UiUxGallery,
    DevGallery,
}

/// The two project lists reachable through "See More".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gallery {
    UiUx,
    Dev,
}

impl Gallery {
    pub fn view(self) -> ViewState {
        match self {
            Gallery::UiUx => ViewState::UiUxGallery,
            Gallery::Dev => ViewState::DevGallery,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Gallery::UiUx => "All UI/UX Projects",
            Gallery::Dev => "All Engineering Projects",
        }
    }

    /// Heading of the matching "Featured Work" row on the home screen.
    pub fn featured_title(self) -> &'static str {
        match self {
            Gallery::UiUx => "UI/UX Design",
            Gallery::Dev => "Web Development",
        }
    }
}

impl ViewState {
    pub fn gallery(self) -> Option<Gallery> {
        match self {
            ViewState::Home => None,
            ViewState::UiUxGallery => Some(Gallery::UiUx),
            ViewState::DevGallery => Some(Gallery::Dev),
        }
    }

    pub fn is_home(self) -> bool {
        self == ViewState::Home
    }
}

/// Side effects the renderer has to apply after a navigation action.
///
/// When both are set, the scroll reset happens first and the anchor jump
/// is applied to the freshly mounted home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewState,
    pub to: ViewState,
    pub reset_scroll: bool,
    pub anchor: Option<Anchor>,
}

impl Transition {
    /// Whether a different screen has to be mounted.
    pub fn changed_view(&self) -> bool {
        self.from != self.to
    }
}

/// Owns the current [`ViewState`]. Nothing else mutates it.
#[derive(Debug, Default)]
pub struct ViewController {
    current: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> ViewState {
        self.current
    }

    /// Unconditionally switches to `target`. Each screen is a fresh
    /// document, so the scroll offset always goes back to the origin.
    pub fn navigate_to(&mut self, target: ViewState) -> Transition {
        let from = std::mem::replace(&mut self.current, target);
        debug!(?from, to = ?target, "navigate");
        Transition {
            from,
            to: target,
            reset_scroll: true,
            anchor: None,
        }
    }

    pub fn go_back(&mut self) -> Transition {
        self.navigate_to(ViewState::Home)
    }

    /// "See More" on one of the featured project rows.
    pub fn see_more(&mut self, gallery: Gallery) -> Transition {
        self.navigate_to(gallery.view())
    }

    /// A nav-bar link: back to home first, then jump to the section.
    pub fn follow_link(&mut self, anchor: Anchor) -> Transition {
        if self.current.is_home() {
            debug!(?anchor, "follow link on home");
            return Transition {
                from: ViewState::Home,
                to: ViewState::Home,
                reset_scroll: false,
                anchor: Some(anchor),
            };
        }
        Transition {
            anchor: Some(anchor),
            ..self.go_back()
        }
    }
}
