//! Type-keyed UI state registry.
//!
//! The UI layer owns a single [`StateCtx`] holding one value per state type.
//! Widgets read states by type, mutate them through [`StateCtx::update`], and
//! async work (network fetches) commits its result back onto the UI thread
//! through an [`Updater`] channel that [`StateCtx::sync_updates`] drains once
//! per frame.
//!
//! Every async dispatch is stamped with a [`TaskId`] (state type + generation
//! counter). A completion whose generation is no longer current is discarded,
//! so a late response can never overwrite the state of a newer dispatch.

mod ctx;
mod error;
mod state;
mod task;

pub use ctx::{StateCtx, Updater};
pub use error::Error;
pub use state::{State, state_assign_impl};
pub use task::TaskId;
