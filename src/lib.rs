pub mod config;
pub mod engine;
pub mod resolver;
pub mod traits;
pub mod types;

pub use crate::config::{Config, ConfigError, ToggleGroup};
pub use crate::engine::{Outcome, Toggler};
pub use crate::resolver::resolve;
pub use crate::traits::TextOps;
pub use crate::types::{
    Command, Context, Direction, Position, Range, Selection, Span, Toggle,
};
