//! Registrable-domain reduction for SAN matching
//!
//! Keeps at most the last two dot-separated labels of a hostname. This is a
//! plain heuristic with no public suffix list, so `a.example.co.uk` reduces
//! to `co.uk`.

/// Reduce a hostname to the domain used for SAN matching
pub fn matching_domain(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomains_reduced_to_last_two_labels() {
        assert_eq!(matching_domain("a.b.example.com"), "example.com");
        assert_eq!(matching_domain("www.example.com"), "example.com");
    }

    #[test]
    fn test_short_hosts_unchanged() {
        assert_eq!(matching_domain("example.com"), "example.com");
        assert_eq!(matching_domain("localhost"), "localhost");
    }

    #[test]
    fn test_multi_part_suffix_is_not_special() {
        assert_eq!(matching_domain("shop.example.co.uk"), "co.uk");
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        assert_eq!(matching_domain(""), "");
        assert_eq!(matching_domain("..."), ".");
        assert_eq!(matching_domain("a..b"), ".b");
    }
}
