//! Embedded dictionary
//!
//! The bundled sample word file compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
