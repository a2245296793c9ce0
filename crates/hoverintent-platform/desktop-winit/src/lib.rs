use hoverintent_core::{Point, PointerEvent, PointerEventKind, Region};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Translates winit window events into region pointer events.
///
/// winit reports `CursorEntered` without a position, so the first
/// `CursorMoved` after entry is delivered as the Enter notification and
/// later ones as Move.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    cursor: Option<Point>,
    enter_pending: bool,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: None,
            enter_pending: false,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    /// Feeds one window event into `region`. Returns `true` when the
    /// event was a pointer notification this adapter handles.
    pub fn handle_window_event(&mut self, event: &WindowEvent, region: &Region) -> bool {
        match event {
            WindowEvent::CursorEntered { .. } => {
                self.enter_pending = true;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = self.pointer_position(*position);
                self.cursor = Some(logical);
                let kind = if self.enter_pending {
                    self.enter_pending = false;
                    PointerEventKind::Enter
                } else {
                    PointerEventKind::Move
                };
                region.dispatch(&PointerEvent::new(kind, logical));
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.enter_pending = false;
                let last = self.cursor.take().unwrap_or(Point::ZERO);
                region.dispatch(&PointerEvent::new(PointerEventKind::Leave, last));
                true
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(cursor) = self.cursor {
                    region.dispatch(&PointerEvent::new(PointerEventKind::Press, cursor));
                }
                true
            }
            _ => false,
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
