//! The dataset compiled into the plugin.

use super::source::CompanySource;
use crate::domain::error::Result;
use crate::domain::Company;

/// Compact compile-time form of a company record.
struct Seed {
    name: &'static str,
    total_score: u8,
    price_range: &'static str,
    clarity_total: u8,
    coverage_total: u8,
    process_total: u8,
    year_founded: i32,
    categories: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Patagonia",
        total_score: 14,
        price_range: "$$ - $$$",
        clarity_total: 1,
        coverage_total: 8,
        process_total: 5,
        year_founded: 1973,
        categories: &["Clothing", "Outdoors", "Luggage"],
    },
    Seed {
        name: "Osprey",
        total_score: 18,
        price_range: "$$ - $$$",
        clarity_total: 2,
        coverage_total: 10,
        process_total: 6,
        year_founded: 1974,
        categories: &["Outdoors", "Luggage"],
    },
    Seed {
        name: "Hydroflask",
        total_score: 8,
        price_range: "$ - $$",
        clarity_total: 1,
        coverage_total: 4,
        process_total: 3,
        year_founded: 2009,
        categories: &["Outdoors", "Other"],
    },
];

impl Seed {
    fn to_company(&self) -> Company {
        Company {
            name: self.name.to_string(),
            total_score: self.total_score,
            price_range: self.price_range.to_string(),
            clarity_total: self.clarity_total,
            coverage_total: self.coverage_total,
            process_total: self.process_total,
            year_founded: self.year_founded,
            categories: self.categories.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Returns the bundled records in their canonical order.
#[must_use]
pub fn bundled_companies() -> Vec<Company> {
    SEEDS.iter().map(Seed::to_company).collect()
}

/// Source yielding the bundled records. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl CompanySource for BundledSource {
    fn load(&self) -> Result<Vec<Company>> {
        Ok(bundled_companies())
    }

    fn describe(&self) -> String {
        "bundled dataset".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_order_is_canonical() {
        let names: Vec<String> = bundled_companies().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Patagonia", "Osprey", "Hydroflask"]);
    }

    #[test]
    fn bundled_records_keep_category_order() {
        let companies = bundled_companies();
        assert_eq!(companies[0].categories, vec!["Clothing", "Outdoors", "Luggage"]);
    }
}
