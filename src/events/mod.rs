pub mod motion;
pub mod pointer;

pub use motion::*;
pub use pointer::*;
