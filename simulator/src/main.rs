//! Desktop preview of the gauge widgets.
//!
//! Three gauges on a 320x240 window, with the tree's event log underneath:
//!
//! - lead: one needle sweeping 0..100 (or nudged by hand)
//! - multi: three needles on a -40..140 scale, each on its own wave
//! - mirror: a copy of the lead gauge with a narrower scale, showing
//!   `100 - lead`
//!
//! Keys: `Up`/`Down` nudge the lead gauge, `Space` resumes the sweep, `N`
//! cycles the lead gauge through 1..=3 needles, `Escape` quits.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod terminal;
mod timing;

use std::thread;
use std::time::Instant;

use dialkit::colors::{BLACK, BLUE, CYAN, GREEN, RED, YELLOW};
use dialkit::{DisplayPainter, ObjHandle, ObjTree, Result};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::terminal::Terminal;
use crate::timing::{FRAME_TIME, NUDGE_STEP, T_STEP};

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 240;
const GAUGE_SIZE: u32 = 104;
const GAUGE_Y: i32 = 8;
const LEAD_X: i32 = 2;
const MULTI_X: i32 = 108;
const MIRROR_X: i32 = 214;

const LEAD_COLORS: [Rgb565; 3] = [RED, CYAN, YELLOW];

/// Handles of the three demo gauges.
struct Dials {
    lead: ObjHandle,
    multi: ObjHandle,
    mirror: ObjHandle,
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("dialkit gauges", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut tree = ObjTree::new(display.bounding_box());
    let dials = match build(&mut tree) {
        Ok(dials) => dials,
        Err(err) => {
            eprintln!("failed to build gauges: {err}");
            return;
        }
    };

    let mut terminal = Terminal::new();
    let mut t = 0.0f32;
    let mut manual = false;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            let res = match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Escape => return,
                    Keycode::Up => {
                        manual = true;
                        nudge(&mut tree, dials.lead, NUDGE_STEP)
                    }
                    Keycode::Down => {
                        manual = true;
                        nudge(&mut tree, dials.lead, -NUDGE_STEP)
                    }
                    Keycode::Space => {
                        manual = false;
                        Ok(())
                    }
                    Keycode::N => cycle_needles(&mut tree, dials.lead),
                    _ => Ok(()),
                },
                _ => Ok(()),
            };
            if let Err(err) = res {
                eprintln!("input rejected: {err}");
            }
        }

        if let Err(err) = update(&mut tree, &dials, t, manual) {
            eprintln!("update failed: {err}");
            return;
        }

        if let Err(err) = tree.refresh(&mut DisplayPainter::new(&mut display)) {
            eprintln!("refresh failed: {err}");
            return;
        }
        terminal.collect(tree.log());
        terminal.draw(&mut display);

        window.update(&display);
        t += T_STEP;

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Create and configure the three gauges.
fn build(tree: &mut ObjTree) -> Result<Dials> {
    let screen = tree.screen();
    let size = Size::new(GAUGE_SIZE, GAUGE_SIZE);

    let lead = tree.create_gauge(screen, None)?;
    tree.set_size(lead, size)?;
    tree.set_pos(lead, Point::new(LEAD_X, GAUGE_Y))?;

    let multi = tree.create_gauge(screen, None)?;
    tree.set_size(multi, size)?;
    tree.set_pos(multi, Point::new(MULTI_X, GAUGE_Y))?;
    {
        let mut gauge = tree.gauge_mut(multi)?;
        gauge.set_range(-40, 140);
        gauge.set_scale(270, 28, 7);
        gauge.set_needle_count(3, &[RED, GREEN, BLUE])?;
    }

    // Copy takes the lead's size and range; only position and scale differ
    let mirror = tree.create_gauge(screen, Some(lead))?;
    tree.set_pos(mirror, Point::new(MIRROR_X, GAUGE_Y))?;
    tree.gauge_mut(mirror)?.set_scale(180, 13, 5);

    Ok(Dials { lead, multi, mirror })
}

/// Drive every needle for time `t`.
fn update(
    tree: &mut ObjTree,
    dials: &Dials,
    t: f32,
    manual: bool,
) -> Result<()> {
    if !manual {
        set_if_changed(tree, dials.lead, 0, wave(t, 0.0, 100.0, 0.6) as i16)?;
    }

    let lead = tree.gauge(dials.lead)?;
    let lead_value = lead.value(0).unwrap_or_else(|| lead.min_value());
    for i in 1..lead.needle_count() {
        set_if_changed(tree, dials.lead, i, lead_value / (i16::from(i) + 1))?;
    }

    set_if_changed(tree, dials.mirror, 0, 100 - lead_value)?;

    for (i, freq) in [(0, 0.3), (1, 0.45), (2, 0.7)] {
        set_if_changed(tree, dials.multi, i, wave(t, -40.0, 140.0, freq) as i16)?;
    }
    Ok(())
}

/// Write a needle only when its value differs, so still gauges stay clean.
fn set_if_changed(
    tree: &mut ObjTree,
    handle: ObjHandle,
    needle_id: u8,
    value: i16,
) -> Result<()> {
    let mut gauge = tree.gauge_mut(handle)?;
    if gauge.value(needle_id) != Some(value) {
        gauge.set_value(needle_id, value)?;
    }
    Ok(())
}

/// Move needle 0 by `step`; writes past the range are clamped (and logged).
fn nudge(
    tree: &mut ObjTree,
    handle: ObjHandle,
    step: i16,
) -> Result<()> {
    let mut gauge = tree.gauge_mut(handle)?;
    let current = gauge.value(0).unwrap_or_else(|| gauge.min_value());
    gauge.set_value(0, current.saturating_add(step))
}

/// Step through 1, 2 and 3 needles.
fn cycle_needles(
    tree: &mut ObjTree,
    handle: ObjHandle,
) -> Result<()> {
    let mut gauge = tree.gauge_mut(handle)?;
    let count = gauge.needle_count() % LEAD_COLORS.len() as u8 + 1;
    gauge.set_needle_count(count, &LEAD_COLORS[..usize::from(count)])
}

fn wave(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
