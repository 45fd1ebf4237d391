pub mod pos_tag;
pub mod token;

pub use pos_tag::PosTag;
pub use token::{Sentence, Token};
