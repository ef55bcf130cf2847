//! Safe markup rendering
//!
//! Free text only reaches markup through text nodes, which are escaped when
//! rendered. Tag names, classes and attribute names are `&'static str`, so
//! nothing supplied at runtime can become markup.

mod escape;
mod markup;
pub mod view;
#[cfg(test)]
mod tests;

pub use escape::escape_html;
pub use markup::{Element, Node};
