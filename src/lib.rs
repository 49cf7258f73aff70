//! Frog pond (workspace facade crate).
//!
//! This package keeps a single `tui_frogpond::{core,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_frogpond_core as core;
pub use tui_frogpond_input as input;
pub use tui_frogpond_term as term;
pub use tui_frogpond_types as types;
