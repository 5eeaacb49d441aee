//! Infrastructure layer - storage backends

pub mod storage;
