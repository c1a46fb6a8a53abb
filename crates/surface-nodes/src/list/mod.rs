//! List nodes
//!
//! Pure operators over string lists: merging, set difference, domain
//! selection and trimming, and host extraction from URLs.

use std::collections::HashSet;

use url::{Host, Url};

pub mod join;
pub mod select_subdomains;
pub mod subtract;
pub mod trim_subdomains;
pub mod url_extract_domains;
pub mod url_extract_ips;

pub use join::JoinNode;
pub use select_subdomains::SelectSubdomainsNode;
pub use subtract::SubtractNode;
pub use trim_subdomains::{TrimSubdomainsError, TrimSubdomainsNode};
pub use url_extract_domains::UrlExtractDomainsNode;
pub use url_extract_ips::UrlExtractIpsNode;

/// Parse the host of every entry that has one
///
/// Entries without an `http://` or `https://` scheme (any case) are read as
/// `https://` URLs. Entries that do not parse, or parse to an empty host,
/// are skipped.
pub(crate) fn url_hosts(urls: &[String]) -> impl Iterator<Item = Host<String>> + '_ {
    urls.iter().filter_map(|raw| {
        let lower = raw.to_ascii_lowercase();
        let parsed = if lower.starts_with("http://") || lower.starts_with("https://") {
            Url::parse(raw)
        } else {
            Url::parse(&format!("https://{}", raw))
        };
        let url = match parsed {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Skipping unparsable URL '{}': {}", raw, e);
                return None;
            }
        };
        match url.host()? {
            Host::Domain("") => None,
            host => Some(host.to_owned()),
        }
    })
}

/// Render a host the way a user typed it: Unicode domains, bare IPs
pub(crate) fn host_string(host: &Host<String>) -> String {
    match host {
        Host::Domain(domain) => match idna::domain_to_unicode(domain) {
            (unicode, Ok(())) => unicode,
            (_, Err(_)) => domain.clone(),
        },
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    }
}

/// Drop repeated entries, keeping the first occurrence
pub(crate) fn unique(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_url_hosts_adds_missing_scheme() {
        let hosts: Vec<String> = url_hosts(&strings(&["example.com/path", "HTTP://Test.org"]))
            .map(|h| host_string(&h))
            .collect();
        assert_eq!(hosts, vec!["example.com", "test.org"]);
    }

    #[test]
    fn test_url_hosts_skips_empty_host() {
        assert_eq!(url_hosts(&strings(&["@", "", "https://"])).count(), 0);
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(strings(&["b", "a", "b", "c", "a"])), strings(&["b", "a", "c"]));
    }
}
