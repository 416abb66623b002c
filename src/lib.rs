//! A small benchmarking toolkit for in-memory comparison sorts.
//!
//! The [`algorithms`] module holds the sorting implementations, [`data`] the
//! input distributions they are measured on, [`cli`] the argument surface of
//! the driver binary and [`report`] the CSV sample output.

pub mod algorithms;
pub mod cli;
pub mod data;
pub mod report;
