//! Greedtrace Core Library
//!
//! Instrumented greedy graph algorithms. Each engine run emits an ordered
//! stream of trace records describing every decision it makes, so a
//! renderer can replay the computation step by step.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod request;
pub mod trace;
