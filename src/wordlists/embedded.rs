//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/demo_words.rs"));
