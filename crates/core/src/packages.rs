//! Subscription package catalog.
//!
//! Packages are static platform configuration, not user data. Payment
//! capture is handled outside this system; subscribing only records intent
//! and advances onboarding.

use serde::Serialize;

/// One subscription package offered to dealers.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in SAR. Zero means free.
    pub price_sar: u32,
    pub features: &'static [&'static str],
}

/// All packages, cheapest first.
pub const PACKAGES: &[Package] = &[
    Package {
        id: "starter",
        name: "Starter",
        price_sar: 0,
        features: &[
            "Branded storefront",
            "Unlimited listings",
            "Email support",
        ],
    },
    Package {
        id: "pro",
        name: "Pro",
        price_sar: 199,
        features: &[
            "Custom domain",
            "Advanced analytics",
            "Priority support",
            "No platform badge",
        ],
    },
];

/// Look up a package by id.
pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = PACKAGES.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PACKAGES.len());
    }

    #[test]
    fn find_package_by_id() {
        assert_eq!(find_package("starter").unwrap().price_sar, 0);
        assert_eq!(find_package("pro").unwrap().price_sar, 199);
        assert!(find_package("enterprise").is_none());
    }
}
