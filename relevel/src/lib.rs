//! Core library for managing ReForm level files.
//!
//! A level library is two fixed category directories (playable and created)
//! holding flat-text `.rfldf` documents with an embedded `<<KEY>>:VALUE`
//! metadata block. This crate provides the catalog operations over those
//! directories and the textual metadata codec; it performs no interactive
//! I/O and leaves presentation to the front end.

pub mod catalog;
pub mod common;
pub mod level;
