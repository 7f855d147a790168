use egui::{Context, LayerId, Pos2, Rect};

use crate::stroke::{Point, Segment};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Primary-button pointer events relevant to drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button is held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer left the application window
    PointerLeave,
}

/// Converts raw egui pointer input into [`InputEvent`]s relative to the canvas
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Layer the canvas is painted on; any other layer under the pointer covers it
    canvas_layer: LayerId,
}

/// Pointer state copied out of one frame's input
struct PointerSnapshot {
    pos: Option<Pos2>,
    pressed: bool,
    down: bool,
    released: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            canvas_layer: LayerId::background(),
        }
    }

    /// Update the canvas rectangle and layer (e.g. after layout)
    pub fn set_canvas(&mut self, rect: Rect, layer: LayerId) {
        self.canvas_rect = rect;
        self.canvas_layer = layer;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// `top_layer` is the topmost egui layer at `pos`, if any. Popups and
    /// windows over the canvas keep the position out of it.
    fn make_location(&self, pos: Pos2, top_layer: Option<LayerId>) -> InputLocation {
        let uncovered = top_layer.is_none_or(|layer| layer == self.canvas_layer);
        InputLocation {
            position: pos,
            is_in_canvas: uncovered && self.canvas_rect.contains(pos),
        }
    }

    /// Screen position to canvas pixel coordinates
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::new(
            (pos.x - self.canvas_rect.min.x) as f64,
            (pos.y - self.canvas_rect.min.y) as f64,
        )
    }

    /// Process this frame's pointer state into events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let pointer = ctx.input(|input| PointerSnapshot {
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        });
        // Queried outside `ctx.input`, which holds the context lock
        let top_layer = pointer.pos.and_then(|pos| ctx.layer_id_at(pos));

        let mut events = Vec::new();

        if pointer.pressed {
            if let Some(pos) = pointer.pos {
                events.push(InputEvent::PointerDown {
                    location: self.make_location(pos, top_layer),
                });
                self.last_pointer_pos = Some(pos);
            }
        }

        match pointer.pos {
            Some(pos) if Some(pos) != self.last_pointer_pos => {
                if pointer.down {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos, top_layer),
                    });
                }
                self.last_pointer_pos = Some(pos);
            }
            None if self.last_pointer_pos.is_some() => {
                events.push(InputEvent::PointerLeave);
                self.last_pointer_pos = None;
            }
            _ => {}
        }

        if pointer.released {
            let position = pointer
                .pos
                .or(self.last_pointer_pos)
                .unwrap_or(self.canvas_rect.min);
            events.push(InputEvent::PointerUp {
                location: self.make_location(position, top_layer),
            });
        }

        events
    }
}

/// Tracks the previous point of the stroke in progress and turns pointer
/// positions into drag segments.
#[derive(Debug, Default)]
pub struct StrokeTracker {
    last_point: Option<Point>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    /// Start a stroke; the press itself draws a dot
    pub fn press(&mut self, point: Point) -> Segment {
        self.last_point = Some(point);
        Segment::dot(point)
    }

    /// Continue the stroke to `point`, if one is in progress
    pub fn drag(&mut self, point: Point) -> Option<Segment> {
        let last = self.last_point.replace(point)?;
        Some(Segment::new(last, point))
    }

    pub fn release(&mut self) {
        self.last_point = None;
    }

    /// Feed one input event, returning the segment it produces.
    ///
    /// Strokes only start inside the canvas but may continue outside it.
    pub fn handle_event(&mut self, event: &InputEvent, handler: &InputHandler) -> Option<Segment> {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                Some(self.press(handler.to_canvas(location.position)))
            }
            InputEvent::PointerDown { .. } => None,
            InputEvent::PointerMove { location } => {
                if !self.is_drawing() {
                    return None;
                }
                self.drag(handler.to_canvas(location.position))
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                self.release();
                None
            }
        }
    }
}
