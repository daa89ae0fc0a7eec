//! A runtime-sized bit vector library written in pure Rust.
//! No `unsafe`, no dependencies beyond an error derive — just `std`.
//!
//! The bit count is chosen at construction time instead of at compile time,
//! making [`BitVec`] the runtime-parameterized analogue of a fixed-size
//! bitset type.
//!
//! [`BitVec`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use dyn_bitvec::BitVec;
//!
//! let mut bits = BitVec::new(10).unwrap();
//! assert_eq!(bits.popcount(), 0);
//! assert!(!bits.get(3).unwrap());
//! bits.set(3).unwrap();
//! assert!(bits.get(3).unwrap());
//! assert_eq!(bits.popcount(), 1);
//!
//! // the bit-string codec is MSB-first and round-trips
//! let parsed: BitVec = "10011".parse().unwrap();
//! assert_eq!(parsed.to_string(), "10011");
//! ```
//!
//! # Use Cases
//!
//! - Bit masks whose width is only known at runtime (parsed input, protocol
//!   fields, per-dataset flag sets)
//! - Applications that want checked, `Result`-based bit access instead of
//!   panicking indexing
//! - Not ideal when the bit count is a compile-time constant — a fixed-size
//!   bitmap avoids the heap allocation entirely
//!
//! # Features
//!
//! - Bit-level operations on a runtime-chosen number of bits
//! - One owned word buffer; unused bits of the last word are kept zero, so
//!   counts and comparisons never re-mask
//! - Checked API: every position and size argument is validated before any
//!   mutation, signaled via [`BitVecError`]
//! - Write-through single-bit handle ([`BitRef`]) for index-assignment
//!   ergonomics
//! - Efficient iteration over all, set or unset bits:
//!   - `iter()` (all bits as bools)
//!   - `iter_ones()` (indices of set bits)
//!   - `iter_zeros()` (indices of unset bits)
//! - Support for bitwise ops:
//!   - `&`, `|`, `^`, `!`
//!   - `<<`, `>>`
//!   - `&=`, `|=`, `^=`, `<<=`, `>>=`
//! - Logical operations: `popcount`, `all`, `any`, `none`, `first_set_bit`
//! - MSB-first bit-string conversion: [`core::str::FromStr`] and
//!   [`core::fmt::Display`]

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod bit_vec;

pub use bit_vec::{BitRef, BitVec, BitVecError, BitVecIter, IterOnes, IterZeros, WORD_BITS};
