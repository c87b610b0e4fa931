//! # Core Session Logic
//!
//! The chat session's business logic. It knows nothing about any specific
//! UI technology; the `tui` module adapts terminal events onto it and the
//! `gateway` module talks to the completion API.
//!
//! ```text
//!                 ┌───────────────────────────┐
//!                 │          CORE             │
//!                 │  (this module)            │
//!                 │                           │
//!                 │  • Session (state)        │
//!                 │  • SessionEvent (events)  │
//!                 │  • update() (reducer)     │
//!                 │                           │
//!                 │  No I/O. No UI. Pure.     │
//!                 └────────────┬──────────────┘
//!                              │
//!                 ┌────────────┴──────────────┐
//!                 ▼                           ▼
//!          ┌────────────┐             ┌─────────────┐
//!          │    TUI     │             │   Gateway   │
//!          │  Adapter   │             │ (completion │
//!          │ (ratatui)  │             │    API)     │
//!          └────────────┘             └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `Session` struct owning transcript, input, and scrollback
//! - [`action`]: the `SessionEvent` union and the `update()` reducer
//! - [`transcript`], [`input`], [`scrollback`]: the three state holders
//! - [`art`]: fenced-block capture from assistant replies
//! - [`config`]: settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod art;
pub mod config;
pub mod input;
pub mod scrollback;
pub mod state;
pub mod transcript;
