//! Settings editing on top of the config file.

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::config::{Config, ConfigService};
use crate::domain::params::is_default_param;
use crate::domain::DomainRule;

/// Trim entries and drop blanks, keeping order.
pub fn normalize_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.lines())
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append entries not already present; returns what was added.
fn add_unique(list: &mut Vec<String>, entries: Vec<String>) -> Vec<String> {
    let mut added = Vec::new();
    for entry in entries {
        if !list.contains(&entry) {
            list.push(entry.clone());
            added.push(entry);
        }
    }
    added
}

/// Remove entries; returns what was actually removed.
fn remove_all(list: &mut Vec<String>, entries: &[String]) -> Vec<String> {
    let removed: Vec<String> = entries
        .iter()
        .filter(|e| list.contains(e))
        .cloned()
        .collect();
    list.retain(|e| !entries.contains(e));
    removed
}

/// Service that edits one settings key at a time.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Create a service for the config file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current configuration.
    pub fn current(&self) -> Result<Config> {
        ConfigService::load(Some(&self.path))
    }

    fn edit<T>(&self, modify: impl FnOnce(&mut Config) -> T) -> Result<T> {
        let mut out = None;
        ConfigService::update(&self.path, |config| out = Some(modify(config)))?;
        match out {
            Some(value) => Ok(value),
            None => bail!("Configuration update did not run"),
        }
    }

    /// Add custom parameter names.
    pub fn add_custom_params(&self, names: &[String]) -> Result<Vec<String>> {
        let names = normalize_entries(names);
        self.edit(|config| add_unique(&mut config.custom_params, names))
    }

    /// Remove custom parameter names.
    pub fn remove_custom_params(&self, names: &[String]) -> Result<Vec<String>> {
        let names = normalize_entries(names);
        self.edit(|config| remove_all(&mut config.custom_params, &names))
    }

    /// Stop removing built-in parameters.
    pub fn disable_defaults(&self, names: &[String]) -> Result<Vec<String>> {
        let names = normalize_entries(names);
        if let Some(unknown) = names.iter().find(|n| !is_default_param(n)) {
            bail!("'{}' is not a default tracking parameter", unknown);
        }
        self.edit(|config| add_unique(&mut config.disabled_default_params, names))
    }

    /// Resume removing built-in parameters.
    pub fn enable_defaults(&self, names: &[String]) -> Result<Vec<String>> {
        let names = normalize_entries(names);
        self.edit(|config| remove_all(&mut config.disabled_default_params, &names))
    }

    /// Add hostnames to the whitelist.
    pub fn add_whitelist(&self, domains: &[String]) -> Result<Vec<String>> {
        let domains = lowercase(normalize_entries(domains));
        self.edit(|config| add_unique(&mut config.whitelist, domains))
    }

    /// Remove hostnames from the whitelist.
    pub fn remove_whitelist(&self, domains: &[String]) -> Result<Vec<String>> {
        let domains = lowercase(normalize_entries(domains));
        self.edit(|config| {
            let mut removed = Vec::new();
            config.whitelist.retain(|entry| {
                let matched = domains.contains(&entry.to_lowercase());
                if matched {
                    removed.push(entry.clone());
                }
                !matched
            });
            removed
        })
    }

    /// Append a domain rule.
    pub fn add_domain_rule(&self, domains: &[String], params: &[String]) -> Result<DomainRule> {
        let rule = DomainRule {
            domains: lowercase(normalize_entries(domains)),
            params: normalize_entries(params),
        };
        self.edit(|config| {
            config.domain_params.push(rule.clone());
            rule
        })
    }

    /// Remove the domain rule at `index`.
    pub fn remove_domain_rule(&self, index: usize) -> Result<DomainRule> {
        let count = self.current()?.domain_params.len();
        if index >= count {
            bail!("No domain rule at index {} ({} defined)", index, count);
        }
        self.edit(|config| config.domain_params.remove(index))
    }

    /// Set or clear the Amazon associate tag.
    pub fn set_associate_tag(&self, tag: Option<String>) -> Result<()> {
        let tag = tag.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        self.edit(|config| config.amazon_associate_id = tag)
    }
}

fn lowercase(entries: Vec<String>) -> Vec<String> {
    entries.into_iter().map(|e| e.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn service() -> (tempfile::TempDir, SettingsService) {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("config.toml"));
        (dir, service)
    }

    #[test]
    fn test_normalize_entries() {
        let entries = strings(&[" a ", "", "b\nc\n\n", "  "]);
        assert_eq!(normalize_entries(&entries), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_custom_params_add_and_remove() {
        let (_dir, service) = service();

        let added = service.add_custom_params(&strings(&["trk", "ref_src"])).unwrap();
        assert_eq!(added, vec!["trk", "ref_src"]);

        let added = service.add_custom_params(&strings(&["trk"])).unwrap();
        assert!(added.is_empty());

        let removed = service.remove_custom_params(&strings(&["trk", "missing"])).unwrap();
        assert_eq!(removed, vec!["trk"]);
        assert_eq!(service.current().unwrap().custom_params, vec!["ref_src"]);
    }

    #[test]
    fn test_disable_requires_catalog_name() {
        let (_dir, service) = service();

        assert!(service.disable_defaults(&strings(&["page"])).is_err());

        service.disable_defaults(&strings(&["ref"])).unwrap();
        assert_eq!(service.current().unwrap().disabled_default_params, vec!["ref"]);

        service.enable_defaults(&strings(&["ref"])).unwrap();
        assert!(service.current().unwrap().disabled_default_params.is_empty());
    }

    #[test]
    fn test_whitelist_is_lowercased() {
        let (_dir, service) = service();

        service.add_whitelist(&strings(&["Example.COM"])).unwrap();
        assert_eq!(service.current().unwrap().whitelist, vec!["example.com"]);

        let removed = service.remove_whitelist(&strings(&["EXAMPLE.com"])).unwrap();
        assert_eq!(removed, vec!["example.com"]);
    }

    #[test]
    fn test_remove_hand_edited_whitelist_entry() {
        let (_dir, service) = service();
        ConfigService::update(&service.path, |config| {
            config.whitelist = vec!["Example.com".to_string(), "other.org".to_string()];
        })
        .unwrap();

        let removed = service.remove_whitelist(&strings(&["example.com"])).unwrap();
        assert_eq!(removed, vec!["Example.com"]);
        assert_eq!(service.current().unwrap().whitelist, vec!["other.org"]);
    }

    #[test]
    fn test_domain_rules() {
        let (_dir, service) = service();

        service
            .add_domain_rule(&strings(&["*.YouTube.com"]), &strings(&["si", "feature"]))
            .unwrap();
        let rules = service.current().unwrap().domain_params;
        assert_eq!(rules[0].domains, vec!["*.youtube.com"]);

        assert!(service.remove_domain_rule(3).is_err());
        let removed = service.remove_domain_rule(0).unwrap();
        assert_eq!(removed.params, vec!["si", "feature"]);
        assert!(service.current().unwrap().domain_params.is_empty());
    }

    #[test]
    fn test_domain_rule_without_params_is_rejected() {
        let (_dir, service) = service();
        assert!(service.add_domain_rule(&strings(&["example.com"]), &[]).is_err());
    }

    #[test]
    fn test_associate_tag() {
        let (_dir, service) = service();

        service
            .set_associate_tag(Some(" myassociate-22 ".to_string()))
            .unwrap();
        assert_eq!(
            service.current().unwrap().amazon_associate_id.as_deref(),
            Some("myassociate-22")
        );

        service.set_associate_tag(None).unwrap();
        assert_eq!(service.current().unwrap().amazon_associate_id, None);
    }
}
