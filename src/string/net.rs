//! Network address and URI character validation
//!
//! Single-pass, allocation-free scanners for IPv4 (RFC 791), IPv6 (RFC 4291 /
//! RFC 5952), hostnames (RFC 1123), domain names (RFC 1035), ports
//! (RFC 6335), and composite `host:port` endpoints. Every validator is a
//! total function: malformed input yields `false` or `None`, never a panic
//! or a partial result.

use crate::string::ascii::{is_alphanumeric, is_digit};
use crate::string::parse::try_parse_uint;
use crate::string::StrView;

/// Check if a byte is a URI reserved character (RFC 3986 section 2.2)
///
/// gen-delims `:/?#[]@` plus sub-delims `!$&'()*+,;=`.
#[inline]
pub const fn is_uri_reserved(c: u8) -> bool {
    matches!(
        c,
        b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@' // gen-delims
        | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' // sub-delims
    )
}

/// Check if a byte is a URI unreserved character (RFC 3986 section 2.3)
///
/// ALPHA / DIGIT / `-` / `.` / `_` / `~`.
#[inline]
pub const fn is_uri_unreserved(c: u8) -> bool {
    is_alphanumeric(c) || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Check if a view is non-empty and contains only URI reserved characters
pub fn is_uri_reserved_str<'a>(input: impl Into<StrView<'a>>) -> bool {
    let v = input.into();
    !v.is_empty() && v.as_bytes().iter().all(|&c| is_uri_reserved(c))
}

/// Check if a view is non-empty and contains only URI unreserved characters
pub fn is_uri_unreserved_str<'a>(input: impl Into<StrView<'a>>) -> bool {
    let v = input.into();
    !v.is_empty() && v.as_bytes().iter().all(|&c| is_uri_unreserved(c))
}

/// Validate IPv4 dotted-decimal notation (RFC 791)
///
/// Exactly four octet groups in `[0, 255]` separated by three dots, each
/// group written without leading zeros (`"0"` is fine, `"01"` is not).
///
/// # Examples
///
/// ```rust
/// use zerostr::is_ipv4_address;
///
/// assert!(is_ipv4_address("192.168.1.1"));
/// assert!(!is_ipv4_address("192.168.01.1")); // leading zero
/// assert!(!is_ipv4_address("256.1.1.1"));
/// ```
pub fn is_ipv4_address<'a>(input: impl Into<StrView<'a>>) -> bool {
    ipv4_scan(input.into())
}

fn ipv4_scan(v: StrView) -> bool {
    let s = v.as_bytes();
    // Max: "255.255.255.255"
    if s.is_empty() || s.len() > 15 {
        return false;
    }

    let mut dot_count = 0u32;
    let mut octet = 0u32;
    let mut digit_count = 0u32;

    for &c in s {
        if c == b'.' {
            // the group before this dot must be complete and in range
            if digit_count == 0 || octet > 255 {
                return false;
            }
            dot_count += 1;
            octet = 0;
            digit_count = 0;
        } else if is_digit(c) {
            // a group that starts with '0' must be exactly "0"
            if digit_count == 1 && octet == 0 {
                return false;
            }
            octet = octet * 10 + u32::from(c - b'0');
            digit_count += 1;
            if digit_count > 3 || octet > 255 {
                return false;
            }
        } else {
            return false;
        }
    }

    dot_count == 3 && digit_count > 0 && octet <= 255
}

/// Validate IPv6 notation (RFC 4291 / RFC 5952)
///
/// Accepts full and `::`-compressed forms, an embedded IPv4-mapped tail
/// (counting as two groups), and a trailing `%zone` suffix. The zone suffix
/// is accepted verbatim and terminates the scan; its contents are not
/// validated against RFC zone-ID syntax.
///
/// # Examples
///
/// ```rust
/// use zerostr::is_ipv6_address;
///
/// assert!(is_ipv6_address("2001:db8::1"));
/// assert!(is_ipv6_address("::ffff:192.0.2.1"));
/// assert!(is_ipv6_address("fe80::1%eth0"));
/// assert!(!is_ipv6_address("2001:db8:::1"));
/// ```
pub fn is_ipv6_address<'a>(input: impl Into<StrView<'a>>) -> bool {
    ipv6_scan(input.into())
}

fn ipv6_scan(v: StrView) -> bool {
    let s = v.as_bytes();
    // Max with zone: "ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255%interface"
    if s.is_empty() || s.len() > 45 {
        return false;
    }

    let mut group_count = 0u32;
    let mut digit_count = 0u32;
    let mut has_double_colon = false;
    let mut prev_was_colon = false;
    let mut group_start = 0usize;

    for (i, &c) in s.iter().enumerate() {
        if c == b':' {
            if prev_was_colon {
                if has_double_colon {
                    return false; // only one :: allowed
                }
                has_double_colon = true;
            } else if digit_count > 0 {
                group_count += 1;
            }
            digit_count = 0;
            prev_was_colon = true;
            group_start = i + 1;
        } else if c.is_ascii_hexdigit() {
            digit_count += 1;
            if digit_count > 4 {
                return false;
            }
            prev_was_colon = false;
        } else if c == b'.' {
            // IPv4-mapped tail (e.g. ::ffff:192.0.2.1); the dotted part runs
            // from the current group start to the optional zone marker
            let tail = &s[group_start..];
            let mapped = match memchr::memchr(b'%', tail) {
                Some(pos) => &tail[..pos],
                None => tail,
            };
            if !ipv4_scan(StrView::new(mapped)) {
                return false;
            }
            // 32 mapped bits count as two 16-bit groups
            group_count += 2;
            break;
        } else if c == b'%' {
            // zone ID: the remainder names an interface, accept it verbatim
            if digit_count > 0 {
                group_count += 1;
            }
            break;
        } else {
            return false;
        }
    }

    // close the trailing hex group unless an IPv4 tail already covered it
    if digit_count > 0 && memchr::memchr(b'.', s).is_none() {
        group_count += 1;
    }

    (group_count == 8 && !has_double_colon) || (group_count < 8 && has_double_colon)
}

/// Validate hostname format (RFC 1123)
///
/// Dot-separated labels of 1-63 alphanumeric-or-hyphen characters, no label
/// starting or ending with a hyphen, total length at most 253. Trailing dots
/// are rejected.
///
/// # Examples
///
/// ```rust
/// use zerostr::is_valid_hostname;
///
/// assert!(is_valid_hostname("my-server-01.local"));
/// assert!(!is_valid_hostname("-server"));
/// assert!(!is_valid_hostname("a..b"));
/// ```
pub fn is_valid_hostname<'a>(input: impl Into<StrView<'a>>) -> bool {
    let v = input.into();
    let s = v.as_bytes();
    if s.is_empty() || s.len() > 253 {
        return false;
    }

    let mut label_len = 0u32;
    let mut prev_was_dot = true;

    for (i, &c) in s.iter().enumerate() {
        if c == b'.' {
            if prev_was_dot || label_len == 0 {
                return false; // empty label
            }
            if s[i - 1] == b'-' {
                return false; // label can't end with hyphen
            }
            label_len = 0;
            prev_was_dot = true;
        } else if is_alphanumeric(c) || c == b'-' {
            if prev_was_dot && c == b'-' {
                return false; // label can't start with hyphen
            }
            label_len += 1;
            if label_len > 63 {
                return false;
            }
            prev_was_dot = false;
        } else {
            return false;
        }
    }

    // can't end with a dot or a hyphen
    !prev_was_dot && label_len > 0 && s[s.len() - 1] != b'-'
}

/// Validate domain name format (RFC 1035)
///
/// A valid hostname that contains at least one dot; single-label names such
/// as `"localhost"` are rejected.
pub fn is_domain_name<'a>(input: impl Into<StrView<'a>>) -> bool {
    let v = input.into();
    is_valid_hostname(v) && v.find_byte(b'.').is_some()
}

/// Validate a port number string (RFC 6335)
///
/// Non-empty, at most five digits, numeric value at most 65535. The value is
/// accumulated incrementally so oversized inputs reject before overflow.
///
/// # Examples
///
/// ```rust
/// use zerostr::is_valid_port;
///
/// assert!(is_valid_port("65535"));
/// assert!(!is_valid_port("65536"));
/// assert!(!is_valid_port("8o8o"));
/// ```
pub fn is_valid_port<'a>(input: impl Into<StrView<'a>>) -> bool {
    let v = input.into();
    let s = v.as_bytes();
    // Max: "65535"
    if s.is_empty() || s.len() > 5 {
        return false;
    }

    let mut value = 0u32;
    for &c in s {
        if !is_digit(c) {
            return false;
        }
        value = value * 10 + u32::from(c - b'0');
        if value > 65535 {
            return false;
        }
    }
    true
}

/// Validate a port number value
///
/// True iff the value fits the valid port range `[0, 65535]`; accepts any
/// integer type, so negative values and wide out-of-range values reject
/// without narrowing surprises.
///
/// # Examples
///
/// ```rust
/// use zerostr::is_valid_port_value;
///
/// assert!(is_valid_port_value(80));
/// assert!(!is_valid_port_value(70000));
/// assert!(!is_valid_port_value(-1));
/// ```
#[inline]
pub fn is_valid_port_value<T: TryInto<u16>>(port: T) -> bool {
    port.try_into().is_ok()
}

/// A parsed network endpoint: a host view plus a port number
///
/// The host is a zero-copy view into the original endpoint string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// Host portion: IPv4 address, IPv6 address (with any zone), or hostname
    pub host: StrView<'a>,
    /// Port number
    pub port: u16,
}

/// Parse a network endpoint into host and port
///
/// Two grammars are accepted:
/// - bracketed IPv6: `[host]:port`, where the bracket contents must pass
///   [`is_ipv6_address`] (zone suffixes included) and a port is mandatory
/// - plain: `host:port`, split at the last colon; the host validates as IPv4
///   when it consists only of digits and dots, as a hostname otherwise
///
/// Any sub-validation failure fails the whole parse.
///
/// # Examples
///
/// ```rust
/// use zerostr::try_parse_endpoint;
///
/// let ep = try_parse_endpoint("example.com:8080").unwrap();
/// assert_eq!(ep.host, "example.com");
/// assert_eq!(ep.port, 8080);
///
/// let ep = try_parse_endpoint("[::1]:443").unwrap();
/// assert_eq!(ep.host, "::1");
/// assert_eq!(ep.port, 443);
///
/// assert!(try_parse_endpoint("[::1]").is_none()); // missing port
/// ```
pub fn try_parse_endpoint<'a>(input: impl Into<StrView<'a>>) -> Option<Endpoint<'a>> {
    let v = input.into();
    let s = v.as_bytes();
    if s.is_empty() {
        return None;
    }

    // bracketed IPv6 form: [host]:port
    if s[0] == b'[' {
        let closing = v.find_byte(b']')?;
        let host = v.substring(1, closing - 1);

        if closing + 1 >= s.len() {
            return None; // no port specified
        }
        if s[closing + 1] != b':' {
            return None;
        }
        let port_str = v.substring_from(closing + 2);
        if !is_valid_port(port_str) {
            return None;
        }
        let port = match try_parse_uint(port_str) {
            Some(p) if p <= 65535 => p as u16,
            _ => return None,
        };

        if !is_ipv6_address(host) {
            return None;
        }
        return Some(Endpoint { host, port });
    }

    // IPv4 or hostname form: host:port, split at the last colon
    let colon = v.rfind_byte(b':')?;
    let host = v.prefix(colon);
    let port_str = v.substring_from(colon + 1);

    if host.is_empty() || port_str.is_empty() {
        return None;
    }
    if !is_valid_port(port_str) {
        return None;
    }
    let port = match try_parse_uint(port_str) {
        Some(p) if p <= 65535 => p as u16,
        _ => return None,
    };

    // digits-and-dots hosts must be real IPv4; everything else is a hostname
    let looks_like_ipv4 = host.as_bytes().iter().all(|&c| is_digit(c) || c == b'.');
    if looks_like_ipv4 {
        if !is_ipv4_address(host) {
            return None;
        }
    } else if !is_valid_hostname(host) {
        return None;
    }

    Some(Endpoint { host, port })
}
