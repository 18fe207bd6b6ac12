//! Constant values for the ecctool library
//!
//! This crate carries the named curve domain parameters and the fixed
//! constants used by the protocol layer. It has no dependencies so every
//! other crate in the workspace can pull it in.

#![forbid(unsafe_code)]

pub mod curves;
pub mod ecies;

pub use curves::{
    curve_by_name, supported_curves, DomainParameters, SECP112R1, SECP256K1, SUPPORTED_CURVES,
};
