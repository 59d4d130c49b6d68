//! Ordered host collection with filter, sort and render operations.
//!
//! [`Hosts`] is built once from parsed config records and then passed by
//! value through the listing pipeline: [`Hosts::filter`], then
//! [`Hosts::sort_by_primary_alias`], then one of the renderers.

use crate::host::{Host, by_primary_alias};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primary aliases excluded from listings unless overridden.
pub const DEFAULT_EXCLUDES: &[&str] = &["*"];

/// The per-host value of the JSON rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSummary {
    pub hostname: String,
    pub user: String,
}

impl From<&Host> for HostSummary {
    fn from(host: &Host) -> Self {
        Self {
            hostname: host.hostname().to_string(),
            user: host.user().to_string(),
        }
    }
}

/// An ordered sequence of host records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hosts {
    hosts: Vec<Host>,
}

impl Hosts {
    /// Returns a new collection without the records whose primary alias is
    /// in `exclude`. Input order is preserved.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, exclude: &[S]) -> Self {
        self.hosts
            .iter()
            .filter(|host| {
                !exclude
                    .iter()
                    .any(|pattern| pattern.as_ref() == host.primary_alias())
            })
            .cloned()
            .collect()
    }

    /// Stable sort by primary alias, byte-wise ascending.
    pub fn sort_by_primary_alias(&mut self) {
        self.hosts.sort_by(by_primary_alias);
    }

    /// Renders one `"<alias> - <hostname> (<user>)"` line per host.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.hosts
            .iter()
            .map(|host| {
                format!(
                    "{} - {} ({})\n",
                    host.primary_alias(),
                    host.hostname(),
                    host.user()
                )
            })
            .collect()
    }

    /// Renders a JSON object keyed by primary alias.
    ///
    /// When two hosts share a primary alias the later one wins.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        let map = self.summaries();
        if pretty {
            serde_json::to_string_pretty(&map)
        } else {
            serde_json::to_string(&map)
        }
    }

    fn summaries(&self) -> BTreeMap<&str, HostSummary> {
        let mut map = BTreeMap::new();
        for host in &self.hosts {
            map.insert(host.primary_alias(), HostSummary::from(host));
        }
        map
    }

    /// Iterate hosts in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Host> + '_ {
        self.hosts.iter()
    }

    /// Returns the number of hosts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Returns `true` if there are no hosts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl From<Vec<Host>> for Hosts {
    fn from(hosts: Vec<Host>) -> Self {
        Self { hosts }
    }
}

impl FromIterator<Host> for Hosts {
    fn from_iter<I: IntoIterator<Item = Host>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn host(alias: &str, hostname: &str, user: &str) -> Host {
        Host::new(vec![alias.to_string()], hostname, user).unwrap()
    }

    fn aliases(hosts: &Hosts) -> Vec<&str> {
        hosts.iter().map(Host::primary_alias).collect()
    }

    #[test]
    fn test_filter_removes_wildcard() {
        let hosts = Hosts::from(vec![
            host("*", "", ""),
            host("web1", "10.0.0.5", "deploy"),
            host("db1", "10.0.0.9", "root"),
        ]);

        let filtered = hosts.filter(DEFAULT_EXCLUDES);
        assert_eq!(aliases(&filtered), ["web1", "db1"]);
    }

    #[test]
    fn test_filter_matches_primary_alias_only() {
        let hosts = Hosts::from(vec![
            Host::new(vec!["web1".into(), "*".into()], "10.0.0.5", "deploy").unwrap(),
        ]);

        let filtered = hosts.filter(DEFAULT_EXCLUDES);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let hosts = Hosts::from(vec![
            host("*", "", ""),
            host("web1", "10.0.0.5", "deploy"),
            host("*", "", ""),
            host("db1", "10.0.0.9", "root"),
        ]);

        let once = hosts.filter(DEFAULT_EXCLUDES);
        let twice = once.filter(DEFAULT_EXCLUDES);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_custom_excludes() {
        let hosts = Hosts::from(vec![
            host("*", "", ""),
            host("web1", "10.0.0.5", "deploy"),
            host("db1", "10.0.0.9", "root"),
        ]);

        let filtered = hosts.filter(&["db1".to_string()]);
        assert_eq!(aliases(&filtered), ["*", "web1"]);
    }

    #[test]
    fn test_filter_empty_excludes_keeps_everything() {
        let hosts = Hosts::from(vec![host("*", "", ""), host("web1", "", "")]);
        let none: &[&str] = &[];
        assert_eq!(hosts.filter(none), hosts);
    }

    #[test]
    fn test_sort_by_primary_alias() {
        let mut hosts = Hosts::from(vec![
            host("zeta", "1.2.3.4", "a"),
            host("alpha", "5.6.7.8", "b"),
            host("mid", "9.9.9.9", "c"),
        ]);

        hosts.sort_by_primary_alias();
        assert_eq!(aliases(&hosts), ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut hosts = Hosts::from(vec![
            host("web", "first", ""),
            host("app", "x", ""),
            host("web", "second", ""),
            host("web", "third", ""),
        ]);

        hosts.sort_by_primary_alias();
        let order: Vec<_> = hosts.iter().map(Host::hostname).collect();
        assert_eq!(order, ["x", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_is_deterministic_across_input_orders() {
        let records = [
            host("c", "", ""),
            host("a", "", ""),
            host("b", "", ""),
        ];

        let mut forward: Hosts = records.iter().cloned().collect();
        let mut reverse: Hosts = records.iter().rev().cloned().collect();
        forward.sort_by_primary_alias();
        reverse.sort_by_primary_alias();

        assert_eq!(forward, reverse);
        assert_eq!(aliases(&forward), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_collection() {
        let mut hosts = Hosts::default();
        assert!(hosts.filter(DEFAULT_EXCLUDES).is_empty());
        hosts.sort_by_primary_alias();
        assert!(hosts.is_empty());
        assert_eq!(hosts.render_text(), "");
        assert_eq!(hosts.render_json(false).unwrap(), "{}");
    }

    #[test]
    fn test_render_text_format() {
        let hosts = Hosts::from(vec![host("web1", "10.0.0.5", "deploy")]);
        assert_eq!(hosts.render_text(), "web1 - 10.0.0.5 (deploy)\n");
    }

    #[test]
    fn test_render_text_empty_fields_verbatim() {
        let hosts = Hosts::from(vec![host("bastion", "", "")]);
        assert_eq!(hosts.render_text(), "bastion -  ()\n");
    }

    #[test]
    fn test_render_json_single_line() {
        let hosts = Hosts::from(vec![host("web1", "10.0.0.5", "deploy")]);
        assert_eq!(
            hosts.render_json(false).unwrap(),
            r#"{"web1":{"hostname":"10.0.0.5","user":"deploy"}}"#
        );
    }

    #[test]
    fn test_render_json_empty_fields() {
        let hosts = Hosts::from(vec![host("bastion", "", "")]);
        assert_eq!(
            hosts.render_json(false).unwrap(),
            r#"{"bastion":{"hostname":"","user":""}}"#
        );
    }

    #[test]
    fn test_render_json_preserves_content() {
        let hosts = Hosts::from(vec![
            host("web1", "10.0.0.5", "deploy"),
            host("db1", "10.0.0.9", "root"),
        ]);

        let json = hosts.render_json(false).unwrap();
        let parsed: HashMap<String, HostSummary> = serde_json::from_str(&json).unwrap();

        let expected = HashMap::from([
            (
                "web1".to_string(),
                HostSummary {
                    hostname: "10.0.0.5".into(),
                    user: "deploy".into(),
                },
            ),
            (
                "db1".to_string(),
                HostSummary {
                    hostname: "10.0.0.9".into(),
                    user: "root".into(),
                },
            ),
        ]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_render_json_last_write_wins() {
        let hosts = Hosts::from(vec![
            host("web1", "10.0.0.5", "deploy"),
            host("web1", "10.0.0.6", "admin"),
        ]);

        let json = hosts.render_json(false).unwrap();
        assert_eq!(json, r#"{"web1":{"hostname":"10.0.0.6","user":"admin"}}"#);
    }

    #[test]
    fn test_render_json_pretty_is_equivalent() {
        let hosts = Hosts::from(vec![
            host("web1", "10.0.0.5", "deploy"),
            host("db1", "10.0.0.9", "root"),
        ]);

        let compact: serde_json::Value =
            serde_json::from_str(&hosts.render_json(false).unwrap()).unwrap();
        let pretty_str = hosts.render_json(true).unwrap();
        let pretty: serde_json::Value = serde_json::from_str(&pretty_str).unwrap();

        assert!(pretty_str.contains('\n'));
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let hosts = Hosts::from(vec![
            host("*", "", ""),
            host("zeta", "1.2.3.4", "a"),
            host("alpha", "5.6.7.8", "b"),
        ]);

        let mut listed = hosts.filter(DEFAULT_EXCLUDES);
        listed.sort_by_primary_alias();

        assert_eq!(
            listed.render_text(),
            "alpha - 5.6.7.8 (b)\nzeta - 1.2.3.4 (a)\n"
        );
    }
}
