// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Strategy transform functions.
//!
//! Each transform is a pure function `&str -> String`, total over any
//! non-empty input. Dispatch happens through the catalog's function pointers
//! rather than a trait object hierarchy; the functions here hold no state.

pub mod advanced;
pub mod basic;
