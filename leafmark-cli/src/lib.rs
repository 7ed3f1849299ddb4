//! Library side of the `leafmark` binary: turns source text plus a loaded
//! configuration into the bytes the CLI prints.

pub mod render;
