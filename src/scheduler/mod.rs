//! Background jobs.

pub mod pod_expiry;
