pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod orientation;
pub mod perspective;
pub mod stack;
pub mod ticker;

pub use config::*;
pub use controller::*;
pub use error::HoloboxError;
pub use orientation::*;
pub use perspective::*;
pub use stack::*;
pub use ticker::*;
