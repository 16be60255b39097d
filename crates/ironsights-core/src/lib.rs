//! Core types and definitions for the IRONSIGHTS simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, the input-action snapshot, frame snapshots, events, and
//! tuning constants. It has no dependency on any ECS or runtime framework.

pub mod components;
pub mod constants;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
