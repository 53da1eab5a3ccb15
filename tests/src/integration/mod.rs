//! # Integration Flows

pub mod concurrency;
pub mod flows;
pub mod telemetry;
