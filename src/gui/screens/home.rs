use std::time::{Duration, Instant};

use iced::{
    Alignment::Center,
    Color, Element, Length, Task,
    widget::{
        Column, Row, button, canvas, column, container, image, row, stack, text, text_editor,
        text_input,
    },
};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use tracing::{debug, warn};

use crate::core::{
    Accent, Anchor, BlockId, Category, ContentCatalog, Field, Gallery, Section,
    catalog::IconId,
    motion::{self, FoldIndicator, Orbit},
};
use crate::gui::{
    AppState,
    media::MediaSlot,
    screens::{Screen, ScreenMessage},
    state::SECTION_SPACING,
    widgets::{self, FoldIndicatorArt, OrbitArt, faded},
};

const ENTRANCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct HomeScreen;

#[derive(Debug, Clone)]
pub enum HomeMessage {
    Reveal(BlockId, bool),
    Measured(Section, f32),
    Input(Field, String),
    Edit(text_editor::Action),
    Submit,
    Open(String),
    AcknowledgmentDismissed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SeeMore(Gallery),
    JumpTo(Anchor),
}

type Msg = ScreenMessage<HomeScreen>;

fn own(message: HomeMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

fn heading_block(section: &str) -> BlockId {
    BlockId::scoped("home", ["heading", section])
}

fn about_block(card: &str) -> BlockId {
    BlockId::scoped("home", ["about", card])
}

fn item_block(list: &str, index: usize) -> BlockId {
    BlockId::scoped("home", [list.to_string(), index.to_string()])
}

/// Sections rendering a revealed heading. Contact has none of its own.
const HEADINGS: [&str; 5] = ["about", "skills", "experience", "projects", "certifications"];
const ABOUT_CARDS: [&str; 4] = ["journey", "education", "role", "competencies"];

impl HomeScreen {
    pub fn blocks(&self, catalog: &ContentCatalog) -> Vec<BlockId> {
        let profile = catalog.profile();
        let mut blocks: Vec<BlockId> = HEADINGS.iter().map(|name| heading_block(name)).collect();
        blocks.extend(ABOUT_CARDS.iter().map(|card| about_block(card)));
        blocks.push(BlockId::scoped("home", ["skills", "badges"]));
        blocks.extend((0..profile.experience.len()).map(|i| item_block("experience", i)));
        blocks.extend(
            (0..catalog.items(Category::FeaturedUiUx).len()).map(|i| item_block("featured-uiux", i)),
        );
        blocks.extend(
            (0..catalog.items(Category::FeaturedDev).len()).map(|i| item_block("featured-dev", i)),
        );
        blocks.extend(
            (0..catalog.items(Category::Certifications).len())
                .map(|i| item_block("certifications", i)),
        );
        blocks.push(BlockId::scoped("home", ["contact", "card"]));
        blocks
    }

    fn revealed<'a>(
        &self,
        state: &'a AppState,
        id: BlockId,
        content: impl FnOnce(f32) -> Element<'a, Msg>,
    ) -> Element<'a, Msg> {
        let progress = state.reveal.progress(&id, state.now);
        widgets::reveal(content(progress), progress, state.anticipate_px, move |visible| {
            own(HomeMessage::Reveal(id.clone(), visible))
        })
    }

    fn heading<'a>(&self, state: &'a AppState, key: &str, title: &'a str) -> Element<'a, Msg> {
        self.revealed(state, heading_block(key), |alpha| {
            widgets::section_heading(title, alpha)
        })
    }

    fn hero<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        let profile = state.catalog.profile();
        let elapsed = state.now.saturating_duration_since(state.mounted_at);
        let step = |delay_ms: u64| {
            motion::entrance(elapsed, Duration::from_millis(delay_ms), ENTRANCE)
        };

        let greeting = step(200);
        let name = step(300);
        let roles_alpha = step(400);
        let tagline_alpha = step(500);
        let actions = step(600);

        let mut roles = Row::new().spacing(12).align_y(Center);
        for (i, role) in profile.roles.iter().enumerate() {
            if i > 0 {
                roles = roles.push(text("•").color(faded(widgets::DIM, roles_alpha)));
            }
            roles = roles.push(widgets::labelled_icon(role, roles_alpha));
        }

        let intro = column![
            text(&profile.greeting)
                .size(18)
                .color(faded(widgets::accent(Accent::Blue), greeting)),
            column![
                text(&profile.first_name)
                    .size(72)
                    .color(faded(Color::WHITE, name)),
                text(&profile.last_name)
                    .size(72)
                    .color(faded(Color::from_rgb8(167, 139, 250), name)),
            ],
            roles,
            text(&profile.tagline)
                .size(18)
                .color(faded(widgets::MUTED, tagline_alpha)),
            row![
                widgets::pill_button(
                    "View Work ⌄",
                    ScreenMessage::ParentMessage(ParentMessage::JumpTo(Anchor::Projects)),
                    true,
                ),
                widgets::pill_button(
                    "Contact Me",
                    ScreenMessage::ParentMessage(ParentMessage::JumpTo(Anchor::Contact)),
                    false,
                ),
            ]
            .spacing(16),
        ]
        .spacing(24)
        .padding(iced::Padding {
            top: 20.0 * (1.0 - actions),
            ..iced::Padding::ZERO
        })
        .width(Length::FillPortion(1));

        let fold = FoldIndicator::default();
        let indicator = canvas(FoldIndicatorArt {
            offset: fold.offset(elapsed),
            opacity: fold.opacity(elapsed),
        })
        .width(Length::Fill)
        .height(Length::Fixed(56.0));

        column![
            row![intro, self.portrait(state, elapsed)]
                .spacing(48)
                .align_y(Center),
            indicator,
        ]
        .spacing(48)
        .padding(iced::Padding {
            top: 64.0,
            ..iced::Padding::ZERO
        })
        .into()
    }

    fn portrait<'a>(&self, state: &'a AppState, elapsed: Duration) -> Element<'a, Msg> {
        let profile = state.catalog.profile();
        let appear = motion::entrance(elapsed, Duration::ZERO, Duration::from_secs(1));
        let photo: Element<'a, Msg> = match profile.photo.as_deref().map(|r| state.media.get(r)) {
            Some(MediaSlot::Ready(handle)) => image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(iced::ContentFit::Cover)
                .into(),
            _ => text(initials(&profile.first_name, &profile.last_name))
                .size(64)
                .color(faded(widgets::MUTED, appear))
                .into(),
        };
        let disc = container(photo)
            .width(Length::Fixed(260.0))
            .height(Length::Fixed(260.0))
            .center_x(Length::Fixed(260.0))
            .center_y(Length::Fixed(260.0))
            .clip(true)
            .style(move |_theme: &iced::Theme| container::Style {
                background: Some(iced::Background::Color(widgets::BACKGROUND)),
                border: iced::Border {
                    color: faded(Color::from_rgba(1.0, 1.0, 1.0, 0.1), appear),
                    width: 1.0,
                    radius: 130.0.into(),
                },
                ..Default::default()
            });
        let orbit = canvas(OrbitArt {
            angle: Orbit::default().angle(elapsed),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        container(stack![
            container(disc).center_x(Length::Fill).center_y(Length::Fill),
            orbit,
        ])
        .width(Length::Fixed(320.0))
        .height(Length::Fixed(320.0))
        .into()
    }

    fn about<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        let profile = state.catalog.profile();
        let label = |caption: &'a str, accent: Accent, alpha: f32| -> iced::widget::Text<'a> {
            text(caption)
                .size(13)
                .color(faded(widgets::accent(accent), alpha))
        };

        let journey = self.revealed(state, about_block("journey"), |alpha| {
            widgets::glass_card(
                row![
                    text(IconId::Globe.glyph())
                        .size(24)
                        .color(faded(widgets::HIGHLIGHT, alpha)),
                    column![
                        text("My Journey").size(24).color(faded(Color::WHITE, alpha)),
                        text(&profile.journey).color(faded(widgets::MUTED, alpha)),
                    ]
                    .spacing(8),
                ]
                .spacing(16),
                alpha,
            )
            .into()
        });
        let education = self.revealed(state, about_block("education"), |alpha| {
            widgets::glass_card(
                column![
                    label("EDUCATION", Accent::Blue, alpha),
                    text(&profile.education.title)
                        .size(20)
                        .color(faded(Color::WHITE, alpha)),
                    text(&profile.education.field)
                        .size(14)
                        .color(faded(widgets::MUTED, alpha)),
                ]
                .spacing(8),
                alpha,
            )
            .into()
        });
        let role = self.revealed(state, about_block("role"), |alpha| {
            widgets::glass_card(
                column![
                    label("CURRENT ROLE", Accent::Orange, alpha),
                    text(&profile.current_role.title)
                        .size(18)
                        .color(faded(Color::WHITE, alpha)),
                    text(&profile.current_role.company)
                        .size(14)
                        .color(faded(widgets::MUTED, alpha)),
                ]
                .spacing(8),
                alpha,
            )
            .into()
        });
        let competencies = self.revealed(state, about_block("competencies"), |alpha| {
            let checks = profile.competencies.iter().map(|skill| {
                row![
                    text(IconId::CheckCircle.glyph())
                        .color(faded(widgets::accent(Accent::Violet), alpha)),
                    text(skill).size(14).color(faded(widgets::TEXT, alpha)),
                ]
                .spacing(8)
                .into()
            });
            widgets::glass_card(
                column![
                    label("CORE COMPETENCIES", Accent::Violet, alpha),
                    widgets::grid(checks.collect(), 4, 16.0),
                ]
                .spacing(20),
                alpha,
            )
            .into()
        });

        column![
            self.heading(state, "about", "About Me"),
            row![
                container(journey).width(Length::FillPortion(2)),
                container(education).width(Length::FillPortion(1)),
            ]
            .spacing(24),
            row![
                container(role).width(Length::FillPortion(1)),
                container(competencies).width(Length::FillPortion(2)),
            ]
            .spacing(24),
        ]
        .spacing(24)
        .into()
    }

    fn skills<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        let skills = state.catalog.items(Category::Skills);
        let badges = self.revealed(state, BlockId::scoped("home", ["skills", "badges"]), |alpha| {
            Row::with_children(skills.iter().map(|item| widgets::skill_badge(item, alpha)))
                .spacing(16)
                .wrap()
                .into()
        });
        column![self.heading(state, "skills", "Tech Stack"), badges].into()
    }

    fn experience<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        let entries = state
            .catalog
            .profile()
            .experience
            .iter()
            .enumerate()
            .map(|(i, position)| {
                self.revealed(state, item_block("experience", i), |alpha| {
                    let mut entry = column![
                        text(&position.title).size(20).color(faded(Color::WHITE, alpha)),
                        text(match &position.period {
                            Some(period) => format!("{} • {}", position.company, period),
                            None => position.company.clone(),
                        })
                        .size(14)
                        .color(faded(widgets::HIGHLIGHT, alpha)),
                    ]
                    .spacing(6);
                    if let Some(summary) = &position.summary {
                        entry = entry.push(widgets::glass_card(
                            text(summary).size(14).color(faded(widgets::MUTED, alpha)),
                            alpha,
                        ));
                    }
                    row![
                        container(text("●").color(faded(widgets::HIGHLIGHT, alpha)))
                            .padding([4, 0]),
                        entry,
                    ]
                    .spacing(16)
                    .into()
                })
            });
        column![
            self.heading(state, "experience", "Experience"),
            Column::with_children(entries).spacing(48).max_width(760),
        ]
        .into()
    }

    fn featured<'a>(
        &self,
        state: &'a AppState,
        gallery: Gallery,
        glyph: IconId,
    ) -> Element<'a, Msg> {
        let (category, list) = match gallery {
            Gallery::UiUx => (Category::FeaturedUiUx, "featured-uiux"),
            Gallery::Dev => (Category::FeaturedDev, "featured-dev"),
        };
        let cards = state
            .catalog
            .items(category)
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.revealed(state, item_block(list, i), |alpha| {
                    widgets::project_card(item, &state.media, alpha)
                })
            })
            .collect();
        let header = row![
            text(glyph.glyph()).size(22).color(widgets::accent(match gallery {
                Gallery::UiUx => Accent::Pink,
                Gallery::Dev => Accent::Blue,
            })),
            text(gallery.featured_title())
                .size(24)
                .color(Color::WHITE)
                .width(Length::Fill),
            widgets::link_button(
                text("See More →").size(14),
                ScreenMessage::ParentMessage(ParentMessage::SeeMore(gallery)),
                widgets::MUTED,
            ),
        ]
        .spacing(12)
        .align_y(Center);
        column![header, widgets::grid(cards, 2, 32.0)]
            .spacing(32)
            .into()
    }

    fn projects<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        column![
            self.heading(state, "projects", "Featured Work"),
            self.featured(state, Gallery::UiUx, IconId::Palette),
            self.featured(state, Gallery::Dev, IconId::Terminal),
        ]
        .spacing(64)
        .into()
    }

    fn certifications<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        let cards = state
            .catalog
            .items(Category::Certifications)
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.revealed(state, item_block("certifications", i), |alpha| {
                    let mut details =
                        column![text(&item.title).size(20).color(faded(Color::WHITE, alpha))];
                    if let Some(description) = &item.description {
                        details = details
                            .push(text(description).size(14).color(faded(widgets::MUTED, alpha)));
                    }
                    widgets::glass_card(
                        row![widgets::icon(item, 32.0, alpha), details]
                            .spacing(16)
                            .align_y(Center),
                        alpha,
                    )
                    .into()
                })
            })
            .collect();
        column![
            self.heading(state, "certifications", "Certifications & Awards"),
            widgets::grid(cards, 2, 24.0),
        ]
        .into()
    }

    fn contact<'a>(&self, state: &'a AppState) -> Element<'a, Msg> {
        let details = &state.catalog.profile().contact;
        let form = &state.contact;
        let card = self.revealed(state, BlockId::scoped("home", ["contact", "card"]), |alpha| {
            let channel = |glyph: IconId, label: &'a str, link: String| -> Element<'a, Msg> {
                button(
                    row![
                        text(glyph.glyph()).color(faded(widgets::HIGHLIGHT, alpha)),
                        text(label).color(faded(Color::WHITE, alpha)),
                    ]
                    .spacing(16)
                    .align_y(Center),
                )
                .on_press(own(HomeMessage::Open(link)))
                .padding(16)
                .width(Length::Fill)
                .style(move |_theme: &iced::Theme, status| {
                    let tint = match status {
                        button::Status::Hovered | button::Status::Pressed => 0.1,
                        _ => 0.05,
                    };
                    button::Style {
                        background: Some(iced::Background::Color(faded(
                            Color::from_rgba(1.0, 1.0, 1.0, tint),
                            alpha,
                        ))),
                        text_color: faded(Color::WHITE, alpha),
                        border: iced::border::rounded(12.0),
                        ..Default::default()
                    }
                })
                .into()
            };
            let input = |placeholder: &'a str, field: Field| -> iced::widget::TextInput<'a, Msg> {
                text_input(placeholder, form.get(field))
                    .on_input(move |value| own(HomeMessage::Input(field, value)))
                    .on_submit(own(HomeMessage::Submit))
                    .padding(12)
            };
            let message = text_editor(&state.message_editor)
                .placeholder("Message...")
                .on_action(|action| own(HomeMessage::Edit(action)))
                .padding(12)
                .height(Length::Fixed(120.0));
            let fields = column![
                input("Your name", Field::Name),
                input("your@email.com", Field::Email),
                message,
                button(
                    row![text("Send Message"), text(IconId::Send.glyph())]
                        .spacing(8)
                        .align_y(Center),
                )
                .on_press(own(HomeMessage::Submit))
                .padding(16)
                .width(Length::Fill),
            ]
            .spacing(16)
            .width(Length::FillPortion(1));

            widgets::glass_card(
                row![
                    column![
                        text(&details.heading).size(30).color(faded(Color::WHITE, alpha)),
                        channel(IconId::Mail, &details.email, details.mailto()),
                        channel(
                            IconId::Linkedin,
                            &details.linkedin_name,
                            details.linkedin_url.clone(),
                        ),
                    ]
                    .spacing(16)
                    .width(Length::FillPortion(1)),
                    fields,
                ]
                .spacing(48),
                alpha,
            )
            .into()
        });
        container(card).max_width(900).center_x(Length::Fill).into()
    }

    fn section<'a>(&self, section: Section, content: Element<'a, Msg>) -> Element<'a, Msg> {
        widgets::measured(content, move |height| {
            own(HomeMessage::Measured(section, height))
        })
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Msg> {
        Column::with_children([
            self.section(Section::Hero, self.hero(state)),
            self.section(Section::About, self.about(state)),
            self.section(Section::Skills, self.skills(state)),
            self.section(Section::Experience, self.experience(state)),
            self.section(Section::Projects, self.projects(state)),
            self.section(Section::Certifications, self.certifications(state)),
            self.section(Section::Contact, self.contact(state)),
        ])
        .spacing(SECTION_SPACING)
        .into()
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<Msg> {
        match message {
            HomeMessage::Reveal(block, visible) => {
                state.reveal.observe(block, visible, Instant::now());
                Task::none()
            }
            HomeMessage::Measured(section, height) => {
                state.anchors.measure(section, height);
                Task::none()
            }
            HomeMessage::Input(field, value) => {
                state.contact.set(field, value);
                Task::none()
            }
            HomeMessage::Edit(action) => {
                state.message_editor.perform(action);
                state.contact.set(Field::Message, state.message_editor.text());
                Task::none()
            }
            HomeMessage::Submit => {
                let ack = state.contact.submit();
                Task::perform(
                    AsyncMessageDialog::new()
                        .set_level(MessageLevel::Info)
                        .set_title("Contact")
                        .set_description(ack.text)
                        .set_buttons(MessageButtons::Ok)
                        .show(),
                    |_| own(HomeMessage::AcknowledgmentDismissed),
                )
            }
            HomeMessage::AcknowledgmentDismissed => {
                debug!("acknowledgment dismissed");
                Task::none()
            }
            HomeMessage::Open(link) => {
                if let Err(error) = open::that(&link) {
                    warn!(%link, %error, "failed to open link");
                }
                Task::none()
            }
        }
    }
}

fn initials(first: &str, last: &str) -> String {
    first
        .chars()
        .take(1)
        .chain(last.chars().take(1))
        .collect::<String>()
        .to_uppercase()
}
