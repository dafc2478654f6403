//! # frankenglib-core
//!
//! Safe Rust implementations of the GLib API subset behind the frankenglib
//! adapter.
//!
//! This crate holds the operations that cannot be expressed as a direct
//! alias to a platform primitive: the bounded substring search and the
//! sentinel-terminated pointer-array counter, plus the pure helper logic
//! behind the trivial wrappers. No `unsafe` code is permitted at the crate
//! level; the raw-pointer boundary lives in `frankenglib-abi`.

#![deny(unsafe_code)]

pub mod rand;
pub mod string;
pub mod strv;
