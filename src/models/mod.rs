pub mod event;
pub mod group;
pub mod slack;

pub use event::*;
pub use group::*;
pub use slack::*;
