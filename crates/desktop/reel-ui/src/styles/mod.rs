pub mod color;

pub use color::{parse_hex_color, rgba_from_hex, rgba_from_hex_alpha};
