//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screens)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter / sections    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │ (reqwest)  │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App`, the two screens and their fetch state machine
//! - [`action`]: The `Action` enum and `update()`
//! - [`filter`]: Search over the loaded list
//! - [`section`]: Detail record → label/value rows
//! - [`route`]: Screen paths
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod country;
pub mod filter;
pub mod route;
pub mod section;
pub mod state;
pub mod theme;
