pub mod constants;
pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod schedule;
pub mod scramble;
pub mod surface;
pub mod viewport;

pub use email::is_valid_email;
pub use error::ParamsError;
pub use field::*;
pub use form::*;
pub use params::FieldParams;
pub use particle::*;
pub use pointer::PointerState;
pub use schedule::*;
pub use scramble::*;
pub use surface::*;
pub use viewport::*;
