//! Service ports: plain data shared between adapters and the kernel.

pub mod settings;

pub use settings::{KeybindingRule, Settings};
