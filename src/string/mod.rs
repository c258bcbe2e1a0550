//! Zero-copy string primitives
//!
//! This module groups the crate's building blocks: the [`StrView`] view type,
//! the lazy [`Splitter`], ASCII classification, strict parsing, and the
//! network address validators.

pub mod ascii;
pub mod net;
pub mod ops;
pub mod parse;
pub mod splitter;
pub mod view;

pub use ascii::{
    has_exact_length, is_all_digits, is_alpha, is_alphanumeric, is_digit, is_null_or_whitespace,
    is_whitespace, to_lower, to_upper,
};
pub use net::{
    is_domain_name, is_ipv4_address, is_ipv6_address, is_uri_reserved, is_uri_reserved_str,
    is_uri_unreserved, is_uri_unreserved_str, is_valid_hostname, is_valid_port,
    is_valid_port_value, try_parse_endpoint, Endpoint,
};
pub use ops::{join, replace};
pub use parse::{
    try_parse_bool, try_parse_double, try_parse_float, try_parse_int, try_parse_long,
    try_parse_uint,
};
pub use splitter::{split_view, SplitIter, Splitter};
pub use view::StrView;
