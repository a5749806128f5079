//! Hex color handling for SVG text.
//!
//! The SVG is never parsed. Colors are found purely syntactically: a `#`
//! followed by exactly six hexadecimal digits, in any case, anywhere in the
//! document (attributes, `style` blocks, comments).
#![warn(missing_docs)]

mod token;
pub use token::*;

mod rewrite;
pub use rewrite::*;
