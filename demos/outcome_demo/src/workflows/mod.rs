//! Small workflows that each exercise one corner of the outcome API.

pub mod guess;
pub mod product;
pub mod render;
pub mod uint;

pub use guess::{Hint, guess_lines, guess_who_am_i};
pub use product::{ProductError, product_identifier};
pub use render::{double, render};
pub use uint::{UintError, describe_uint, is_uint};
