mod client;
mod directory_url;
mod supervisor;

pub(crate) use directory_url::*;

pub use client::*;
pub use supervisor::*;
