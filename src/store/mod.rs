//! Persistence and aggregation layer. All reads and writes go straight
//! to the relational store; every operation runs in a single
//! transaction and there is no cache in front of it.

pub mod attendance;
pub mod dashboard;
pub mod employees;
