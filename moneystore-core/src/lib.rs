//! Board-agnostic core logic for the Moneystore watch face
//!
//! This crate contains the watch face logic that does not depend on the
//! platform UI toolkit:
//!
//! - Cyclic layer collection (cursor-addressable, wraps in both directions)
//! - Layer carousel driven by tap and timer events
//! - Watch settings and their binary form
//! - Weather updates received from the phone
//!
//! Layers themselves are owned by the toolkit. Everything here stores plain
//! `Copy` handles and never touches the layer behind them.

#![no_std]
#![deny(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod layers;
pub mod weather;
