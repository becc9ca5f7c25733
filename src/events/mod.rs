mod pointer;
mod resize;

pub use pointer::wire_click_spawn;
pub use resize::wire_canvas_resize;
