//! Unit Tests
//!
//! Decoder schema rules, oracle field mapping and sampler query handling.
