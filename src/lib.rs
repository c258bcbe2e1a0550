//! # Zerostr: Zero-Allocation String Primitives
//!
//! This crate provides zero-copy string operations built around a non-owning
//! view type: lazy delimiter splitting, ASCII classification, strict numeric
//! and boolean parsing, and RFC-grade network address validation.
//!
//! ## Key Features
//!
//! - **Zero-Copy Views**: [`StrView`] references caller-owned bytes; hot
//!   paths never allocate
//! - **Lazy Splitting**: [`Splitter`] yields segments on demand, preserves
//!   empty segments, and supports any number of independent restartable
//!   cursors
//! - **Network Validation**: single-pass IPv4, IPv6 (compression, zone IDs,
//!   IPv4-mapped tails), hostname, domain, port, and `host:port` endpoint
//!   checks
//! - **Strict Parsing**: whole-input integer/float/boolean parsing with no
//!   partial results
//! - **Total Functions**: malformed input yields `false` or `None`, never a
//!   panic
//!
//! ## Quick Start
//!
//! ```rust
//! use zerostr::{split_view, is_ipv4_address, try_parse_endpoint, StrView};
//!
//! // Lazy zero-copy splitting
//! let fields: Vec<_> = split_view("a,,b", b',').into_iter().collect();
//! assert_eq!(fields.len(), 3);
//! assert_eq!(fields[1], "");
//!
//! // Address validation
//! assert!(is_ipv4_address("192.168.1.1"));
//! assert!(!is_ipv4_address("192.168.01.1"));
//!
//! // Endpoint parsing: the host is a view into the input
//! let ep = try_parse_endpoint("[::1]:443").unwrap();
//! assert_eq!(ep.host, "::1");
//! assert_eq!(ep.port, 443);
//!
//! // View operations
//! let s = StrView::from_string("  padded  ");
//! assert_eq!(s.trim(), "padded");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod string;

// Re-export core types
pub use error::{Result, ZeroStrError};
pub use string::{split_view, Endpoint, SplitIter, Splitter, StrView};

// Re-export the validator and parser surface
pub use string::{
    has_exact_length, is_all_digits, is_alpha, is_alphanumeric, is_digit, is_domain_name,
    is_ipv4_address, is_ipv6_address, is_null_or_whitespace, is_uri_reserved, is_uri_reserved_str,
    is_uri_unreserved, is_uri_unreserved_str, is_valid_hostname, is_valid_port,
    is_valid_port_value, is_whitespace, join, replace, to_lower, to_upper, try_parse_bool,
    try_parse_double, try_parse_endpoint, try_parse_float, try_parse_int, try_parse_long,
    try_parse_uint,
};
