//! Cleaning rules applied to a parsed URL.

mod amazon_rule;
mod chain;
mod param_rule;
mod rule_trait;
mod whitelist_rule;

pub use amazon_rule::AmazonRule;
pub use chain::RuleChain;
pub use param_rule::ParamRule;
pub use rule_trait::{CleanTarget, Rule};
pub use whitelist_rule::WhitelistRule;
