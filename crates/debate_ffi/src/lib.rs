//! Flutter bridge over `debate_core`.

pub mod api;
