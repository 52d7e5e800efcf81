//! Event log terminal below the gauges.
//!
//! The tree's log is a small ring that also receives one trace entry per
//! refresh, so the terminal copies the interesting entries into its own
//! history as they appear.

use core::fmt::Write;

use dialkit::colors::{GRAY, WHITE};
use dialkit::styles::LABEL_FONT;
use dialkit::{LogBuffer, LogEntry, LogLevel};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::{Deque, String};
use profont::PROFONT_7_POINT;

const TERMINAL_TOP: i32 = 118;
const LOG_Y: i32 = 132;
const LOG_LINE_HEIGHT: i32 = 12;
const LOG_X: i32 = 4;
const MESSAGE_X: i32 = LOG_X + 18;
const HELP_Y: i32 = 234;
const TERMINAL_LINES: usize = 8;

const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);
const TEXT_COLOR: Rgb565 = WHITE;
const DIVIDER_COLOR: Rgb565 = GRAY;

const HELP: &str = "UP/DN nudge  SPACE sweep  N needles  ESC quit";

/// Last few non-trace log entries.
pub struct Terminal {
    lines: Deque<LogEntry, TERMINAL_LINES>,
    last_seq: Option<u32>,
    dirty: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            lines: Deque::new(),
            last_seq: None,
            dirty: true,
        }
    }

    /// Copy entries pushed since the previous call. Trace entries are skipped.
    pub fn collect(
        &mut self,
        log: &LogBuffer,
    ) {
        for entry in log.iter() {
            if self.last_seq.is_some_and(|seq| entry.seq <= seq) {
                continue;
            }
            self.last_seq = Some(entry.seq);
            if entry.level == LogLevel::Trace {
                continue;
            }
            if self.lines.is_full() {
                self.lines.pop_front();
            }
            self.lines.push_back(entry.clone()).ok();
            self.dirty = true;
        }
    }

    /// Repaint the terminal area if new lines arrived.
    pub fn draw(
        &mut self,
        display: &mut SimulatorDisplay<Rgb565>,
    ) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let size = display.size();
        Rectangle::new(
            Point::new(0, TERMINAL_TOP),
            Size::new(size.width, size.height - TERMINAL_TOP as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(TERMINAL_BG))
        .draw(display)
        .ok();

        Line::new(Point::new(2, TERMINAL_TOP), Point::new(size.width as i32 - 2, TERMINAL_TOP))
            .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
            .draw(display)
            .ok();

        let text_style = MonoTextStyle::new(LABEL_FONT, TEXT_COLOR);
        let mut y = LOG_Y;
        for entry in self.lines.iter() {
            let mut prefix: String<4> = String::new();
            let _ = write!(prefix, "{}>", entry.level.prefix());
            let prefix_style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
            Text::new(&prefix, Point::new(LOG_X, y), prefix_style)
                .draw(display)
                .ok();
            Text::new(&entry.message, Point::new(MESSAGE_X, y), text_style)
                .draw(display)
                .ok();
            y += LOG_LINE_HEIGHT;
        }

        let help_style = MonoTextStyle::new(&PROFONT_7_POINT, DIVIDER_COLOR);
        Text::new(HELP, Point::new(LOG_X, HELP_Y), help_style)
            .draw(display)
            .ok();
    }
}
