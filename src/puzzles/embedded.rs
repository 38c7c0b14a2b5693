//! Embedded puzzle table
//!
//! Compiled into the binary at build time from `data/puzzles.txt`.

// Include generated puzzle table from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
