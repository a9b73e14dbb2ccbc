mod art;

pub use art::{FoldIndicatorArt, OrbitArt};

use std::rc::Rc;

use iced::{
    Alignment::Center,
    Background, Border, Color, Element, Length, Padding, Shadow, Theme, Vector, border,
    widget::{Column, Row, button, column, container, image, row, sensor, text},
};
use iced_widget::container::bordered_box;

use crate::core::{Accent, ContentItem, MediaRef};
use crate::gui::media::{MediaSlot, MediaStore};

pub const BACKGROUND: Color = Color::from_rgb8(3, 7, 18);
pub const TEXT: Color = Color::from_rgb8(226, 232, 240);
pub const MUTED: Color = Color::from_rgb8(148, 163, 184);
pub const DIM: Color = Color::from_rgb8(71, 85, 105);
pub const HIGHLIGHT: Color = Color::from_rgb8(59, 130, 246);

/// Distance a pre-reveal block sits below its resting position.
const REVEAL_SHIFT: f32 = 20.0;

pub fn accent(accent: Accent) -> Color {
    let (r, g, b) = accent.rgb();
    Color::from_rgb8(r, g, b)
}

/// `color` with its alpha scaled by `alpha`.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Wraps `content` so that it reports viewport intersection through
/// `on_change`, and renders it shifted and faded until `progress` reaches 1.
pub fn reveal<'a, Message>(
    content: impl Into<Element<'a, Message>>,
    progress: f32,
    anticipate: f32,
    on_change: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let shift = REVEAL_SHIFT * (1.0 - progress.clamp(0.0, 1.0));
    let on_hide = on_change(false);
    sensor(
        container(content).padding(Padding {
            top: shift,
            bottom: REVEAL_SHIFT - shift,
            left: 0.0,
            right: 0.0,
        }),
    )
    .anticipate(anticipate)
    .on_show(move |_| on_change(true))
    .on_hide(on_hide)
    .into()
}

/// Reports a section's laid-out height as soon as it is anywhere near the
/// viewport, and again whenever a relayout changes it. The anticipation is
/// large enough to cover the whole page.
pub fn measured<'a, Message>(
    content: impl Into<Element<'a, Message>>,
    on_measure: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let on_measure = Rc::new(on_measure);
    let on_resize = Rc::clone(&on_measure);
    sensor(content)
        .anticipate(100_000.0)
        .on_show(move |size| on_measure(size.height))
        .on_resize(move |size| on_resize(size.height))
        .into()
}

pub fn section_heading<'a, Message: 'a>(title: &'a str, alpha: f32) -> Element<'a, Message> {
    column![
        text(title).size(40).color(faded(Color::WHITE, alpha)),
        container(text(""))
            .width(Length::Fixed(80.0))
            .height(Length::Fixed(4.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(faded(HIGHLIGHT, alpha))),
                border: border::rounded(2.0),
                ..Default::default()
            }),
    ]
    .spacing(16)
    .padding(Padding {
        bottom: 32.0,
        ..Padding::ZERO
    })
    .into()
}

/// The translucent rounded panel most content sits on.
pub fn glass_card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    alpha: f32,
) -> container::Container<'a, Message> {
    container(content)
        .padding(28)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(faded(
                Color::from_rgba(1.0, 1.0, 1.0, 0.05),
                alpha,
            ))),
            border: Border {
                color: faded(Color::from_rgba(1.0, 1.0, 1.0, 0.1), alpha),
                width: 1.0,
                radius: 24.0.into(),
            },
            shadow: Shadow {
                color: faded(Color::from_rgba(0.23, 0.51, 0.96, 0.15), alpha),
                offset: Vector::new(0.0, 12.0),
                blur_radius: 32.0,
            },
            text_color: Some(faded(TEXT, alpha)),
            ..Default::default()
        })
}

pub fn icon<'a, Message: 'a>(item: &ContentItem, size: f32, alpha: f32) -> Element<'a, Message> {
    let glyph = item.icon().map(|icon| icon.glyph()).unwrap_or("•");
    text(glyph)
        .size(size)
        .color(faded(accent(item.accent), alpha))
        .into()
}

pub fn skill_badge<'a, Message: 'a>(item: &'a ContentItem, alpha: f32) -> Element<'a, Message> {
    container(
        column![
            icon(item, 30.0, alpha),
            text(&item.title).size(14).color(faded(TEXT, alpha)),
        ]
        .spacing(12)
        .align_x(Center),
    )
    .padding(16)
    .width(Length::Fixed(120.0))
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color::from_rgba(1.0, 1.0, 1.0, 0.05),
            alpha,
        ))),
        border: Border {
            color: faded(Color::from_rgba(1.0, 1.0, 1.0, 0.05), alpha),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    })
    .into()
}

pub fn tag<'a, Message: 'a>(label: &'a str, tint: Accent, alpha: f32) -> Element<'a, Message> {
    let color = accent(tint);
    container(text(label).size(12).color(faded(color, alpha)))
        .padding([4, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(faded(Color { a: 0.1, ..color }, alpha))),
            border: Border {
                color: faded(Color { a: 0.2, ..color }, alpha),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Picture area of a project card: the decoded image, the item's icon, or
/// a broken-image placeholder.
pub fn media_box<'a, Message: 'a>(
    item: &'a ContentItem,
    media: &MediaStore,
    height: f32,
    alpha: f32,
) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match &item.media {
        Some(MediaRef::Image(reference)) => match media.get(reference) {
            MediaSlot::Ready(handle) if alpha > 0.0 => image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(iced::ContentFit::Cover)
                .into(),
            MediaSlot::Ready(_) => text("").into(),
            MediaSlot::Loading => text("Loading…").size(14).color(faded(DIM, alpha)).into(),
            MediaSlot::Broken => broken_image(&item.title, alpha),
        },
        Some(MediaRef::Icon(_)) => icon(item, 48.0, alpha),
        None => text("").into(),
    };
    container(inner)
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .center_y(height)
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(faded(
                Color::from_rgba8(30, 41, 59, 0.5),
                alpha,
            ))),
            border: border::rounded(12.0),
            ..Default::default()
        })
        .into()
}

fn broken_image<'a, Message: 'a>(alt: &'a str, alpha: f32) -> Element<'a, Message> {
    container(
        column![
            text("⚠").size(24).color(faded(DIM, alpha)),
            text(alt).size(12).color(faded(DIM, alpha)),
        ]
        .spacing(6)
        .align_x(Center),
    )
    .padding(12)
    .style(bordered_box)
    .into()
}

/// Title, description and tags of a project card.
pub fn project_card<'a, Message: 'a>(
    item: &'a ContentItem,
    media: &MediaStore,
    alpha: f32,
) -> Element<'a, Message> {
    let tags = Row::with_children(
        item.tags
            .iter()
            .map(|label| tag(label, item.accent, alpha)),
    )
    .spacing(8);
    let mut body = column![
        media_box(item, media, 180.0, alpha),
        text(&item.title).size(24).color(faded(Color::WHITE, alpha)),
    ]
    .spacing(12);
    if let Some(description) = &item.description {
        body = body.push(text(description).size(14).color(faded(MUTED, alpha)));
    }
    glass_card(body.push(tags), alpha).into()
}

/// Lays `cells` out `columns` per row, padding the last row so every cell
/// keeps the same width.
pub fn grid<'a, Message: 'a>(
    cells: Vec<Element<'a, Message>>,
    columns: usize,
    spacing: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing);
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        let mut line = Row::new().spacing(spacing);
        for _ in 0..columns {
            let cell = cells
                .next()
                .unwrap_or_else(|| container(text("")).width(Length::Fill).into());
            line = line.push(container(cell).width(Length::FillPortion(1)));
        }
        rows = rows.push(line);
    }
    rows.into()
}

/// Borderless text button, brightening on hover.
pub fn link_button<'a, Message: Clone + 'a>(
    label: impl Into<Element<'a, Message>>,
    on_press: Message,
    color: Color,
) -> Element<'a, Message> {
    button(label)
        .on_press(on_press)
        .padding([6, 10])
        .style(move |_theme: &Theme, status| {
            let text_color = match status {
                button::Status::Hovered | button::Status::Pressed => Color::WHITE,
                _ => color,
            };
            button::Style {
                background: None,
                text_color,
                ..Default::default()
            }
        })
        .into()
}

/// Solid pill button.
pub fn pill_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Message,
    filled: bool,
) -> Element<'a, Message> {
    button(text(label).size(16))
        .on_press(on_press)
        .padding([14, 28])
        .style(move |_theme: &Theme, status| {
            let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
            let (background, text_color) = match (filled, hovered) {
                (true, false) => (Color::WHITE, Color::BLACK),
                (true, true) => (Color::from_rgb8(239, 246, 255), Color::BLACK),
                (false, false) => (Color::from_rgba(1.0, 1.0, 1.0, 0.05), Color::WHITE),
                (false, true) => (Color::from_rgba(1.0, 1.0, 1.0, 0.1), Color::WHITE),
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                    width: if filled { 0.0 } else { 1.0 },
                    radius: 999.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// An icon glyph followed by a label, tinted with the item's accent.
pub fn labelled_icon<'a, Message: 'a>(item: &'a ContentItem, alpha: f32) -> Element<'a, Message> {
    row![
        icon(item, 18.0, alpha),
        text(&item.title).size(18).color(faded(MUTED, alpha)),
    ]
    .spacing(8)
    .align_y(Center)
    .into()
}
