use zerostr::{
    is_domain_name, is_ipv4_address, is_ipv6_address, is_uri_reserved_str, is_uri_unreserved_str,
    is_valid_hostname, is_valid_port, is_valid_port_value, try_parse_endpoint,
};

fn verdict(ok: bool) -> &'static str {
    if ok {
        "valid"
    } else {
        "invalid"
    }
}

fn main() {
    println!("=== Network Validation Demo ===\n");

    println!("1. IPv4 Addresses:");
    for addr in [
        "192.168.1.1",
        "255.255.255.255",
        "192.168.01.1",
        "256.1.1.1",
        "192.168.1",
    ] {
        println!("   {:20} {}", addr, verdict(is_ipv4_address(addr)));
    }

    println!("\n2. IPv6 Addresses:");
    for addr in [
        "2001:db8::1",
        "::1",
        "::ffff:192.0.2.1",
        "fe80::1%eth0",
        "2001:db8:::1",
        "gggg::1",
    ] {
        println!("   {:25} {}", addr, verdict(is_ipv6_address(addr)));
    }

    println!("\n3. Hostnames and Domains:");
    for name in ["localhost", "example.com", "my-server-01", "-bad", "a..b"] {
        println!(
            "   {:20} hostname: {:7}  domain: {}",
            name,
            verdict(is_valid_hostname(name)),
            verdict(is_domain_name(name))
        );
    }

    println!("\n4. Ports:");
    for port in ["0", "80", "65535", "65536", "8o8o"] {
        println!("   {:8} {}", port, verdict(is_valid_port(port)));
    }
    println!("   numeric 443    {}", verdict(is_valid_port_value(443)));
    println!("   numeric 70000  {}", verdict(is_valid_port_value(70000)));

    println!("\n5. Endpoints:");
    for endpoint in [
        "localhost:8080",
        "192.168.1.1:80",
        "[::1]:443",
        "[fe80::1%eth0]:22",
        "[::1]",
        "example.com:abc",
    ] {
        match try_parse_endpoint(endpoint) {
            Some(ep) => println!("   {:22} host='{}' port={}", endpoint, ep.host, ep.port),
            None => println!("   {:22} rejected", endpoint),
        }
    }

    println!("\n6. URI Character Classes:");
    for s in ["://", "abc-123_~", "mixed:chars"] {
        println!(
            "   {:14} reserved-only: {:7}  unreserved-only: {}",
            s,
            verdict(is_uri_reserved_str(s)),
            verdict(is_uri_unreserved_str(s))
        );
    }

    println!("\nDone.");
}
