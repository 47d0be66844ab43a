pub mod lifecycle;
pub mod pointer;

pub use lifecycle::{wire_resize, wire_unload};
pub use pointer::wire_pointer_handlers;
