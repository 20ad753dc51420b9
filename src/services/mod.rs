pub mod metrics;
pub mod remote;
