//! TfL journey planner client.
//!
//! Resolves typed station names to TfL stop ids, asks the Journey Planner
//! API for a route on a single mode (the Underground by default), filters
//! out what the API lets through that it shouldn't, and prints the result.

pub mod app;
pub mod cli;
pub mod domain;
pub mod gateway;
pub mod planner;
pub mod present;
pub mod tfl;
