//! Platform-neutral site logic plus the thin browser layer in `platform`.

pub mod behavior;
pub mod config;
pub mod counter;
pub mod form;
pub mod language;
pub mod platform;
pub mod storage;
pub mod timing;
