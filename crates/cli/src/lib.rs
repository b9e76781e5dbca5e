//! make-faces CLI library.

pub mod cli;
pub mod io;
