//! Application state module

mod focus;
mod form_data;
mod notice;
mod progress;
mod wizard;

pub use focus::*;
pub use form_data::*;
pub use notice::*;
pub use progress::*;
pub use wizard::*;
