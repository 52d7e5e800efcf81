//! Drawing primitives used by widget signal handlers.
//!
//! Handlers receive a `&mut dyn Painter` inside the draw signal, which keeps
//! the handler trait object-safe while the tree can still be rendered to any
//! `embedded-graphics` target through [`DisplayPainter`].
//!
//! Draw errors are ignored (`.ok()`): a failed primitive on one frame is
//! repainted on the next invalidation and never affects widget state.
//!
//! A refresh pass clips the painter to the dirty area first, so redrawing a
//! parent's body never wipes siblings that are not redrawn.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::styles::{CENTERED, label_style};

/// Primitive drawing operations a widget needs.
pub trait Painter {
    /// Stroke a straight line.
    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Rgb565,
        width: u32,
    );

    /// Fill a rectangle, optionally with rounded corners.
    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
        radius: u32,
    );

    /// Fill a circle of `diameter` pixels centered on `center`.
    fn fill_circle(
        &mut self,
        center: Point,
        diameter: u32,
        color: Rgb565,
    );

    /// Draw `text` centered on `center`.
    fn text(
        &mut self,
        text: &str,
        center: Point,
        color: Rgb565,
    );

    /// Restrict every following primitive to `area`.
    fn set_clip(
        &mut self,
        _area: Rectangle,
    ) {
    }
}

/// [`Painter`] over any `DrawTarget<Color = Rgb565>`.
pub struct DisplayPainter<'a, D> {
    display: &'a mut D,
    clip: Option<Rectangle>,
}

impl<'a, D> DisplayPainter<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a display for one refresh pass.
    pub fn new(display: &'a mut D) -> Self { Self { display, clip: None } }

    fn draw<T>(
        &mut self,
        item: &T,
    ) where
        T: Drawable<Color = Rgb565>,
    {
        match self.clip {
            Some(area) => {
                item.draw(&mut self.display.clipped(&area)).ok();
            }
            None => {
                item.draw(self.display).ok();
            }
        }
    }
}

impl<D> Painter for DisplayPainter<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Rgb565,
        width: u32,
    ) {
        self.draw(&Line::new(from, to).into_styled(PrimitiveStyle::with_stroke(color, width.max(1))));
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
        radius: u32,
    ) {
        self.draw(
            &RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
                .into_styled(PrimitiveStyle::with_fill(color)),
        );
    }

    fn fill_circle(
        &mut self,
        center: Point,
        diameter: u32,
        color: Rgb565,
    ) {
        self.draw(&Circle::with_center(center, diameter).into_styled(PrimitiveStyle::with_fill(color)));
    }

    fn text(
        &mut self,
        text: &str,
        center: Point,
        color: Rgb565,
    ) {
        self.draw(&Text::with_text_style(text, center, label_style(color), CENTERED));
    }

    fn set_clip(
        &mut self,
        area: Rectangle,
    ) {
        self.clip = Some(area);
    }
}

// =============================================================================
// Recording Painter (tests)
// =============================================================================

/// One captured primitive.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Line { from: Point, to: Point, color: Rgb565, width: u32 },
    Rect { area: Rectangle, color: Rgb565 },
    Circle { center: Point, diameter: u32, color: Rgb565 },
    Text { text: std::string::String, center: Point, color: Rgb565 },
}

/// Painter that records calls instead of drawing.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Recorder {
    pub ops: std::vec::Vec<Op>,
}

#[cfg(test)]
impl Recorder {
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Rgb565, u32)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            Op::Line { from, to, color, width } => Some((from, to, color, width)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
impl Painter for Recorder {
    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Rgb565,
        width: u32,
    ) {
        self.ops.push(Op::Line { from, to, color, width });
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
        _radius: u32,
    ) {
        self.ops.push(Op::Rect { area, color });
    }

    fn fill_circle(
        &mut self,
        center: Point,
        diameter: u32,
        color: Rgb565,
    ) {
        self.ops.push(Op::Circle { center, diameter, color });
    }

    fn text(
        &mut self,
        text: &str,
        center: Point,
        color: Rgb565,
    ) {
        self.ops.push(Op::Text { text: text.into(), center, color });
    }
}

// =============================================================================
// Tests
// =============================================================================
