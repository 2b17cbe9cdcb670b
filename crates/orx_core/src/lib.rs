//! Core types shared by the number engine and the object runtime.
//!
//! This crate contains the fundamental types that are independent of the runtime:
//! - `ObjectId` / `ClassId` - Handles into the object heap and the class arena
//! - `MethodName` - Case-insensitive (uppercased) message name
//! - `FastHashMap` / `OrderedMap` - Hash maps used for registries and method dictionaries

pub mod gc;
pub mod value;

pub use gc::{ClassId, ObjectId};
pub use value::{FastHashMap, MethodName, OrderedMap};
