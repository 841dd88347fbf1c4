//! Tracking parameter catalog and removal-set construction.

use super::host::host_matches;
use super::CleanOptions;

/// Built-in tracking parameter names.
pub const DEFAULT_TRACKING_PARAMS: &[&str] = &[
    // Urchin / Google Analytics
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "utm_cid",
    "utm_reader",
    "utm_referrer",
    "utm_name",
    "utm_social",
    "utm_social-type",
    // Ad click identifiers
    "fbclid",
    "gclid",
    "dclid",
    "twclid",
    "msclkid",
    // Mailchimp
    "mc_cid",
    "mc_eid",
    // Matomo / Piwik
    "pk_campaign",
    "pk_kwd",
    "pk_source",
    "pk_medium",
    "piwik_campaign",
    "piwik_kwd",
    // Generic
    "affiliate",
    "ref",
    "referrer",
    "source",
    "spm",
    "partner",
    "promo",
    "campaign",
    "ad",
    "agid",
    "kwid",
    "adid",
    "cid",
    "sid",
    "pid",
    "aid",
    "bid",
    "vid",
];

/// Check whether a name is part of the built-in catalog.
pub fn is_default_param(name: &str) -> bool {
    DEFAULT_TRACKING_PARAMS.contains(&name)
}

/// Active defaults followed by custom parameters.
pub fn tracking_params(options: &CleanOptions) -> Vec<String> {
    DEFAULT_TRACKING_PARAMS
        .iter()
        .filter(|p| !options.disabled_default_params.iter().any(|d| d == *p))
        .map(|p| p.to_string())
        .chain(options.custom_params.iter().cloned())
        .collect()
}

/// Parameters contributed by domain rules matching `host`.
pub fn domain_params(options: &CleanOptions, host: &str) -> Vec<String> {
    options
        .domain_params
        .iter()
        .filter(|rule| rule.domains.iter().any(|d| host_matches(host, d)))
        .flat_map(|rule| rule.params.iter().cloned())
        .collect()
}

/// Full ordered removal set for `host`.
pub fn removal_set(options: &CleanOptions, host: &str) -> Vec<String> {
    let mut params = tracking_params(options);
    params.extend(domain_params(options, host));
    params
}
