//! Integration Tests Module
//!
//! End-to-end tests across the decoder, the HTTP oracle and the corpus
//! sampler.

pub mod corpus_sampler;
pub mod oracle_server;
pub mod round_trip;
