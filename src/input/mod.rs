use egui::{Context, LayerId, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer events in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved over the canvas
    PointerMove(Pos2),
    /// Primary button released anywhere
    PointerUp,
}

/// Converts raw egui pointer input into [`InputEvent`]s for the canvas.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
    canvas_layer: LayerId,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect: None,
            canvas_layer: LayerId::background(),
        }
    }

    /// Update where the canvas is displayed on screen and the layer it is painted on
    pub fn set_canvas_area(&mut self, rect: Rect, layer: LayerId) {
        self.canvas_rect = Some(rect);
        self.canvas_layer = layer;
    }

    /// Map a screen position to canvas-local coordinates, if it lies on the canvas.
    pub fn to_canvas(&self, pos: Pos2) -> Option<Pos2> {
        let rect = self.canvas_rect?;
        rect.contains(pos).then(|| (pos - rect.min).to_pos2())
    }

    /// Process raw egui input and generate canvas events
    ///
    /// Presses and moves only count where the canvas is the topmost layer,
    /// so popups and windows above it swallow them. Releases always count.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });

        let on_canvas = hover.and_then(|pos| self.uncovered_canvas_pos(ctx, pos));
        let mut events = Vec::new();

        if pressed {
            if let Some(local) = on_canvas {
                events.push(InputEvent::PointerDown(local));
            }
        }

        if hover != self.last_pointer_pos {
            if let Some(local) = on_canvas {
                events.push(InputEvent::PointerMove(local));
            }
        }
        self.last_pointer_pos = hover;

        if released {
            events.push(InputEvent::PointerUp);
        }

        events
    }

    fn uncovered_canvas_pos(&self, ctx: &Context, pos: Pos2) -> Option<Pos2> {
        let local = self.to_canvas(pos)?;
        // Panels are not areas, so a bare canvas has no layer reported at all
        let covered = ctx
            .layer_id_at(pos)
            .is_some_and(|layer| layer != self.canvas_layer);
        (!covered).then_some(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, RawInput, pos2, vec2};

    fn canvas_handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_canvas_area(
            Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 100.0)),
            LayerId::background(),
        );
        handler
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn run_frame(ctx: &Context, handler: &mut InputHandler, events: Vec<Event>) -> Vec<InputEvent> {
        let raw = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0))),
            events,
            ..Default::default()
        };
        let mut produced = Vec::new();
        let _ = ctx.run(raw, |ctx| produced = handler.process_input(ctx));
        produced
    }

    #[test]
    fn test_to_canvas_is_local() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.to_canvas(pos2(10.0, 10.0)), None);

        handler.set_canvas_area(
            Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 100.0)),
            LayerId::background(),
        );
        assert_eq!(handler.to_canvas(pos2(150.0, 70.0)), Some(pos2(50.0, 20.0)));
        assert_eq!(handler.to_canvas(pos2(10.0, 70.0)), None);
    }

    #[test]
    fn test_press_on_canvas_is_local() {
        let ctx = Context::default();
        let mut handler = canvas_handler();
        let events = run_frame(&ctx, &mut handler, vec![button(pos2(150.0, 70.0), true)]);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown(pos2(50.0, 20.0)),
                InputEvent::PointerMove(pos2(50.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let ctx = Context::default();
        let mut handler = canvas_handler();
        let events = run_frame(&ctx, &mut handler, vec![button(pos2(20.0, 20.0), true)]);
        assert!(events.is_empty(), "got {events:?}");

        let events = run_frame(&ctx, &mut handler, vec![Event::PointerMoved(pos2(30.0, 250.0))]);
        assert!(events.is_empty(), "got {events:?}");
    }

    #[test]
    fn test_release_outside_canvas_still_ends_stroke() {
        let ctx = Context::default();
        let mut handler = canvas_handler();
        run_frame(&ctx, &mut handler, vec![button(pos2(150.0, 70.0), true)]);
        run_frame(&ctx, &mut handler, vec![Event::PointerMoved(pos2(350.0, 250.0))]);

        let events = run_frame(&ctx, &mut handler, vec![button(pos2(350.0, 250.0), false)]);
        assert_eq!(events, vec![InputEvent::PointerUp]);
    }

    #[test]
    fn test_still_pointer_produces_no_move() {
        let ctx = Context::default();
        let mut handler = canvas_handler();
        let events = run_frame(&ctx, &mut handler, vec![Event::PointerMoved(pos2(120.0, 60.0))]);
        assert_eq!(events, vec![InputEvent::PointerMove(pos2(20.0, 10.0))]);

        let events = run_frame(&ctx, &mut handler, Vec::new());
        assert!(events.is_empty(), "got {events:?}");
    }
}
