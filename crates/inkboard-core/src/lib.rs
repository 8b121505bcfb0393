//! # Inkboard Core
//!
//! Core types, traits, and utilities for Inkboard.
//! Provides points, page and shape identifiers, id generation,
//! shape styles and the error types shared by every crate.

pub mod error;
pub mod ids;
pub mod style;
pub mod types;

pub use error::{DocumentError, Error, Result, SessionError};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use style::{ColorStyle, DashStyle, ShapeStyle, SizeStyle};
pub use types::{PageId, Point, ShapeId};
