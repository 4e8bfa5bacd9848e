//! Tinct Core
//!
//! Foundation primitives shared by the Tinct crates:
//!
//! - **Color**: RGBA value type that round-trips through hex strings
//! - **Listener registries**: ordered, synchronous change notification
//! - **Scopes**: explicit provider chains for dependency injection
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tinct_core::{Color, ListenerRegistry};
//!
//! let seen = Rc::new(Cell::new(Color::BLACK));
//! let mut listeners = ListenerRegistry::<Color>::new();
//!
//! let sink = seen.clone();
//! listeners.register(move |c: &Color| sink.set(*c));
//!
//! listeners.notify(&Color::from_hex(0x6750A4));
//! assert_eq!(seen.get().to_hex_string(), "#6750a4");
//! ```

pub mod color;
pub mod listeners;
pub mod scope;

pub use color::{Color, ColorParseError};
pub use listeners::{Listener, ListenerId, ListenerRegistry};
pub use scope::Scope;
