use std::time::{Duration, Instant};

use iced::{
    Alignment::Center,
    Background, Border, Color, Element, Length, Subscription, Task, Theme,
    widget::{
        Id, Row, column, container, operation,
        scrollable::{self, AbsoluteOffset, RelativeOffset},
        text,
    },
    window,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::core::{Accent, Anchor, Category, ContentCatalog, Transition};
use crate::gui::{
    AppState, Message,
    message::Navigation,
    screens::{Screen, ScreenData, ScreenMessage},
    state::PAGE_PADDING,
    widgets,
};

/// Identifier of the page scrollable; navigation resets and anchor jumps
/// target it.
pub const PAGE_SCROLLABLE: &str = "folio-page";

const FRAME: Duration = Duration::from_millis(16);

pub struct PortfolioApp {
    state: AppState,
    screen: ScreenData,
}

impl std::fmt::Debug for PortfolioApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("view", &self.state.controller.current_view())
            .field("screen", &self.screen)
            .finish()
    }
}

/// Launches the iced event loop with an already loaded configuration and
/// catalog.
pub fn run(config: Config, catalog: ContentCatalog) -> iced::Result {
    let window = window::Settings {
        size: iced::Size::new(config.window.width, config.window.height),
        min_size: Some(iced::Size::new(640.0, 480.0)),
        ..window::Settings::default()
    };
    let boot = move || PortfolioApp::new(&config, catalog.clone());

    iced::application(boot, PortfolioApp::update, PortfolioApp::view)
        .title(PortfolioApp::title)
        .theme(PortfolioApp::theme)
        .window(window)
        .subscription(PortfolioApp::subscription)
        .run()
}

impl PortfolioApp {
    pub fn new(config: &Config, catalog: ContentCatalog) -> (Self, Task<Message>) {
        let mut state = AppState::new(config, catalog);
        let screen = ScreenData::for_view(state.controller.current_view());
        state.reveal.mount(screen.blocks(&state));

        let references: Vec<String> = state
            .catalog
            .image_refs()
            .into_iter()
            .map(str::to_string)
            .collect();
        let load = state
            .media
            .request(references.iter().map(String::as_str), &state.assets_dir);
        info!(images = references.len(), "portfolio ready");

        (Self { state, screen }, load)
    }

    fn title(&self) -> String {
        format!("{} | Portfolio", self.state.catalog.profile().display_name())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(navigation) => self.navigate(navigation),
            Message::MediaLoaded { reference, result } => {
                self.state.media.finish(reference, result);
                Task::none()
            }
            Message::Tick(now) => {
                self.state.now = now;
                Task::none()
            }
            message => self
                .screen
                .update(message, &mut self.state)
                .map(Self::lift),
        }
    }

    fn lift(message: ScreenMessage<ScreenData>) -> Message {
        match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(navigation) => Message::Navigate(navigation),
        }
    }

    fn navigate(&mut self, navigation: Navigation) -> Task<Message> {
        let controller = &mut self.state.controller;
        let transition = match navigation {
            Navigation::Link(anchor) => controller.follow_link(anchor),
            Navigation::SeeMore(gallery) => controller.see_more(gallery),
            Navigation::Back => controller.go_back(),
        };
        self.apply(transition)
    }

    /// Mounts the target screen if it changed, then resets the scroll
    /// offset and finally jumps to the requested anchor.
    fn apply(&mut self, transition: Transition) -> Task<Message> {
        if transition.changed_view() {
            self.screen = ScreenData::for_view(transition.to);
            let now = Instant::now();
            self.state.mounted_at = now;
            self.state.now = now;
            let blocks = self.screen.blocks(&self.state);
            self.state.reveal.mount(blocks);
            debug!(view = ?transition.to, "mounted screen");
        }

        let reset = if transition.reset_scroll {
            operation::snap_to(Id::new(PAGE_SCROLLABLE), RelativeOffset { x: 0.0, y: 0.0 })
        } else {
            Task::none()
        };
        match transition.anchor {
            Some(anchor) => reset.chain(self.jump_to(anchor)),
            None => reset,
        }
    }

    fn jump_to(&self, anchor: Anchor) -> Task<Message> {
        let y = self.state.anchors.offset(anchor);
        debug!(?anchor, y, "jump to anchor");
        operation::scroll_to(Id::new(PAGE_SCROLLABLE), AbsoluteOffset { x: 0.0, y })
    }

    fn subscription(&self) -> Subscription<Message> {
        // home runs looping animations; elsewhere only in-flight reveals need frames
        if self.screen.is_home() || self.state.reveal.is_animating(Instant::now()) {
            iced::time::every(FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page = column![
            self.screen.view(&self.state).map(Self::lift),
            self.footer(),
        ]
        .spacing(48)
        .padding(PAGE_PADDING)
        .max_width(1280);

        let content = scrollable::Scrollable::new(container(page).center_x(Length::Fill))
            .id(Id::new(PAGE_SCROLLABLE))
            .width(Length::Fill)
            .height(Length::Fill);

        container(column![self.nav_bar(), content])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(widgets::BACKGROUND)),
                text_color: Some(widgets::TEXT),
                ..Default::default()
            })
            .into()
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let mut links = Row::new().spacing(12).align_y(Center);
        for item in self.state.catalog.items(Category::NavLinks) {
            // hrefs are validated when the catalog is loaded
            if let Some(anchor) = item.anchor() {
                links = links.push(widgets::link_button(
                    text(&item.title).size(14),
                    Message::Navigate(Navigation::Link(anchor)),
                    widgets::MUTED,
                ));
            }
        }
        links = links.push(widgets::link_button(
            text("Let's Talk").size(14),
            Message::Navigate(Navigation::Link(Anchor::Contact)),
            widgets::accent(Accent::Blue),
        ));

        container(
            container(links)
                .padding([6, 18])
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))),
                    border: Border {
                        color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                        width: 1.0,
                        radius: 999.0.into(),
                    },
                    ..Default::default()
                }),
        )
        .center_x(Length::Fill)
        .padding([16, 16])
        .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        container(
            text(format!(
                "© {} {}",
                self.state.year,
                self.state.catalog.profile().credit
            ))
            .size(14)
            .color(widgets::DIM),
        )
        .center_x(Length::Fill)
        .padding([48, 0])
        .into()
    }
}
