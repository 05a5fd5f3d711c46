//! Block Kit document model and report assembly.

pub mod assembler;
pub mod blocks;
pub mod builder;

pub use assembler::{assemble, SectionSet};
pub use blocks::{Block, Button, Report, Text};
