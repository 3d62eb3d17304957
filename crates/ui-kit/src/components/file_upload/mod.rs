mod component;
mod ingest;
mod preview;

pub use component::*;
pub use ingest::*;
pub use preview::*;
