//! Core types shared by the kernel and the frontends.

pub mod event;

pub use event::{describe_keys, Key, KeyCode, KeyModifiers};
