/// Hover tooltip state and placement
///
/// The tooltip is a two-state machine: hidden, or visible and anchored
/// to one table row. Entering a row with a description shows it, moving
/// the pointer only repositions it (never a hide/show cycle, so no
/// flicker), and leaving the row hides it. Placement is a pure function
/// of the pointer position, the tooltip extent, and the viewport, so it
/// is testable without a window.

use iced::{Point, Size};

/// Gap between the pointer and the tooltip's near edge, in logical px
pub const POINTER_OFFSET: f32 = 15.0;

/// Fixed tooltip extent used for placement. iced lays the panel out at
/// this size, so the placement math and the rendered box agree.
pub const TOOLTIP_SIZE: Size = Size::new(320.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Hidden,
    Visible { row_id: i64 },
}

#[derive(Debug, Clone)]
pub struct TooltipController {
    state: State,
    /// Last known pointer position, in window coordinates
    pointer: Point,
}

impl TooltipController {
    pub fn new() -> Self {
        TooltipController {
            state: State::Hidden,
            pointer: Point::ORIGIN,
        }
    }

    /// Pointer entered a row. Shows the tooltip only when the row has
    /// something to say; a missing or whitespace-only description keeps
    /// (or puts) it hidden.
    pub fn pointer_enter(&mut self, row_id: i64, description: Option<&str>) {
        self.state = match description {
            Some(text) if !text.trim().is_empty() => State::Visible { row_id },
            _ => State::Hidden,
        };
    }

    /// Pointer moved. Repositions only; visibility never changes here.
    pub fn pointer_move(&mut self, position: Point) {
        self.pointer = position;
    }

    /// Pointer left the hovered row
    pub fn pointer_leave(&mut self) {
        self.state = State::Hidden;
    }

    /// The anchored row's ID while visible
    pub fn visible_row(&self) -> Option<i64> {
        match self.state {
            State::Visible { row_id } => Some(row_id),
            State::Hidden => None,
        }
    }

    /// Where to draw the tooltip's top-left corner.
    ///
    /// The panel sits offset below-right of the pointer; if that would
    /// run past the right or bottom viewport edge, the overflowing axis
    /// flips to the other side of the pointer. The two axes are decided
    /// independently.
    pub fn placement(&self, tooltip: Size, viewport: Size) -> Point {
        let mut x = self.pointer.x + POINTER_OFFSET;
        let mut y = self.pointer.y + POINTER_OFFSET;

        if x + tooltip.width > viewport.width {
            x = self.pointer.x - tooltip.width - POINTER_OFFSET;
        }
        if y + tooltip.height > viewport.height {
            y = self.pointer.y - tooltip.height - POINTER_OFFSET;
        }

        Point::new(x, y)
    }
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}
