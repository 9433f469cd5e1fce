use crate::controller::SketchController;

use super::InputEvent;

/// Route a canvas event to the matching stroke operation.
pub fn route_event(event: &InputEvent, controller: &mut SketchController) {
    match *event {
        InputEvent::PointerDown(pos) => controller.begin_stroke(pos),
        InputEvent::PointerMove(pos) => controller.continue_stroke(pos),
        InputEvent::PointerUp => controller.end_stroke(),
    }
}
