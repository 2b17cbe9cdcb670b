//! Native methods of the bootstrap classes.

pub(crate) mod class;
mod common;
pub(crate) mod method;
pub(crate) mod object;
pub(crate) mod string;
