//! Canvas drawings for the hero section's looping animations.

use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};

use super::{HIGHLIGHT, faded};

/// A dot circling the profile photo at `angle` radians from the top.
#[derive(Debug, Clone, Copy)]
pub struct OrbitArt {
    pub angle: f32,
}

impl<Message> canvas::Program<Message> for OrbitArt {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - 10.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgba8(59, 130, 246, 0.2)),
        );

        let dot = Point::new(
            center.x + radius * self.angle.sin(),
            center.y - radius * self.angle.cos(),
        );
        frame.fill(&Path::circle(dot, 14.0), faded(HIGHLIGHT, 0.25));
        frame.fill(&Path::circle(dot, 8.0), HIGHLIGHT);

        vec![frame.into_geometry()]
    }
}

/// The mouse-shaped "scroll down" hint, translated by `offset` pixels.
#[derive(Debug, Clone, Copy)]
pub struct FoldIndicatorArt {
    pub offset: f32,
    pub opacity: f32,
}

impl<Message> canvas::Program<Message> for FoldIndicatorArt {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = 24.0;
        let height = 40.0;
        let origin = Point::new((bounds.width - width) / 2.0, self.offset);
        let outline = Color::from_rgba8(71, 85, 105, self.opacity);

        frame.stroke(
            &Path::rounded_rectangle(
                origin,
                iced::Size::new(width, height),
                (width / 2.0).into(),
            ),
            Stroke::default().with_width(2.0).with_color(outline),
        );
        frame.fill(
            &Path::rounded_rectangle(
                Point::new(origin.x + width / 2.0 - 2.0, origin.y + 6.0),
                iced::Size::new(4.0, 8.0),
                2.0.into(),
            ),
            Color::from_rgba8(148, 163, 184, self.opacity),
        );

        vec![frame.into_geometry()]
    }
}
