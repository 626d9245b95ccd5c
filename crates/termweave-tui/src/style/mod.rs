//! Styling system for terminal text

mod color;
mod modifier;
mod style;
mod styled;
mod text_utils;

pub use color::{ansi256_to_rgb, rgb_to_ansi256, Color, ColorDepth, ANSI256_TO_ANSI16};
pub use modifier::Modifier;
pub use style::Style;
pub use styled::{Line, Lines, Span};
pub use text_utils::{char_width, str_width};
