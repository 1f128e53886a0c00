//! Fixed registry of known governors.
//!
//! Governors are registered at compile time; adding one means adding a row
//! here and dropping its two policy documents into the policy directory.

use banyan_core::GovernorId;

/// A registered governor and the policy documents that govern it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub governor: &'static str,
    pub domain_policy_file: &'static str,
    pub copilot_policy_file: &'static str,
}

/// Every governor the sweep system knows about, in sweep order.
pub const REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        governor: "activ8",
        domain_policy_file: "activ8_domain_policy.json",
        copilot_policy_file: "activ8_copilot_policy.json",
    },
    RegistryEntry {
        governor: "lma",
        domain_policy_file: "lma_domain_policy.json",
        copilot_policy_file: "lma_copilot_policy.json",
    },
    RegistryEntry {
        governor: "personal",
        domain_policy_file: "personal_domain_policy.json",
        copilot_policy_file: "personal_copilot_policy.json",
    },
];

/// Look up a governor's registry entry. Identifiers are already normalized
/// by [`GovernorId`], which makes the match case-insensitive.
pub fn lookup(governor: &GovernorId) -> Option<&'static RegistryEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.governor == governor.as_str())
}

/// All registered governors, in registry order.
pub fn known_governors() -> Vec<GovernorId> {
    REGISTRY
        .iter()
        .map(|entry| GovernorId::new(entry.governor))
        .collect()
}
