pub mod breakpoint;
pub mod drag;
pub mod gesture;

pub use breakpoint::detect_is_mobile;
pub use drag::DragState;
pub use gesture::{GesturePhase, TouchGesture, TouchPoint};
