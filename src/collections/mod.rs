//! Collection types.
//!
//! At the moment this only holds [`set`], a hash-backed mathematical set, but the layout leaves
//! room for siblings.

pub mod set;
