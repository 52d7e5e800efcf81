//! Handler of plain objects, the root of every type chain.

use crate::draw::Painter;
use crate::obj::{Obj, Signal, SignalHandler, Validity};

/// Signal handler for plain objects. Every other handler ends up here.
pub struct BaseSignal;

impl SignalHandler for BaseSignal {
    fn signal(
        &self,
        obj: &mut Obj,
        signal: Signal<'_>,
    ) -> Validity {
        match signal {
            Signal::DrawMain(painter) => {
                draw_body(obj, painter);
                Validity::Valid
            }
            Signal::GetType(chain) => {
                chain.push("obj");
                Validity::Valid
            }
            Signal::Cleanup => Validity::Invalid,
            Signal::StyleChanged | Signal::CoordsChanged(_) | Signal::ChildChanged => Validity::Valid,
        }
    }
}

fn draw_body(
    obj: &Obj,
    painter: &mut dyn Painter,
) {
    let style = obj.style();
    if style.body_visible {
        painter.fill_rect(obj.coords(), style.body_main, style.radius);
    }
}
