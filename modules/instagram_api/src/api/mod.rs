//! API layer - client implementations of the contract

pub mod native;
