use serde::{Deserialize, Serialize};

/// The single hover annotation currently on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipLabel {
    pub text: String,
    pub year: i32,
    pub value: f64,
    /// Surface-space anchor; `x` follows the pointer.
    pub x: f64,
    pub y: f64,
}

/// Public pointer/tooltip state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pointer_inside: bool,
    cursor_x: f64,
    cursor_y: f64,
    label: Option<TooltipLabel>,
}

impl TooltipState {
    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    #[must_use]
    pub fn label(&self) -> Option<&TooltipLabel> {
        self.label.as_ref()
    }

    /// Records a move and swaps in `label`, dropping whatever was shown
    /// before. A miss (`None`) leaves no tooltip behind.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, label: Option<TooltipLabel>) {
        self.pointer_inside = true;
        self.cursor_x = x;
        self.cursor_y = y;
        self.label = label;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.label = None;
    }

    pub fn clear(&mut self) {
        self.label = None;
    }
}
