//! Algorithm implementations
//!
//! Currently holds the symptom-to-disease matching pipeline.

pub mod matching;
