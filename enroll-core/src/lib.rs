mod submission;
mod validate;

pub use submission::*;
pub use validate::*;
