//! Object and group name derivation.

use std::net::IpAddr;

/// Split a prefix line on the first `/`.
///
/// A line without `/` yields the whole line for both parts, so the derived
/// name is still deterministic.
pub fn split_cidr(cidr: &str) -> (&str, &str) {
    match cidr.split_once('/') {
        Some((ip, mask)) => (ip, mask),
        None => (cidr, cidr),
    }
}

/// `192.0.2.0/24` => `192_0_2_0-24`
pub fn cidr_name(cidr: &str) -> String {
    let (ip, mask) = split_cidr(cidr);
    format!("{}-{mask}", ip.replace('.', "_"))
}

/// `<prefix>ASN<asn>`
pub fn group_name(object_prefix: &str, asn: u32) -> String {
    format!("{object_prefix}ASN{asn}")
}

/// `<prefix>ASN<asn>-<cidr_name>`
pub fn object_name(object_prefix: &str, asn: u32, cidr: &str) -> String {
    format!("{}-{}", group_name(object_prefix, asn), cidr_name(cidr))
}

/// True when `cidr` is `ip/mask` with a valid address and an in-range mask.
pub fn is_valid_cidr(cidr: &str) -> bool {
    let Some((ip, mask)) = cidr.split_once('/') else {
        return false;
    };
    let Ok(mask) = mask.parse::<u8>() else {
        return false;
    };
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => mask <= 32,
        Ok(IpAddr::V6(_)) => mask <= 128,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name() {
        assert_eq!(
            object_name("2025_", 64500, "192.0.2.0/24"),
            "2025_ASN64500-192_0_2_0-24"
        );
        assert_eq!(
            object_name("2025_", 64500, "198.51.100.0/22"),
            "2025_ASN64500-198_51_100_0-22"
        );
        assert_eq!(object_name("", 1, "10.0.0.0/8"), "ASN1-10_0_0_0-8");
    }

    #[test]
    fn test_group_name() {
        assert_eq!(group_name("2025_", 64500), "2025_ASN64500");
    }

    #[test]
    fn test_cidr_name_without_slash() {
        assert_eq!(split_cidr("garbage"), ("garbage", "garbage"));
        assert_eq!(cidr_name("1.2.3.4"), "1_2_3_4-1.2.3.4");
    }

    #[test]
    fn test_cidr_name_ipv6_keeps_colons() {
        assert_eq!(cidr_name("2001:db8::/32"), "2001:db8::-32");
    }

    #[test]
    fn test_is_valid_cidr() {
        assert!(is_valid_cidr("192.0.2.0/24"));
        assert!(is_valid_cidr("0.0.0.0/0"));
        assert!(is_valid_cidr("2001:db8::/128"));
        assert!(!is_valid_cidr("192.0.2.0/33"));
        assert!(!is_valid_cidr("192.0.2.0"));
        assert!(!is_valid_cidr("300.0.2.0/24"));
        assert!(!is_valid_cidr("2001:db8::/129"));
        assert!(!is_valid_cidr("192.0.2.0/x"));
    }
}
