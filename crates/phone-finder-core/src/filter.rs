//! Conjunctive catalog filtering.
//!
//! A record is kept only if it satisfies every dimension the intent sets.
//! Unset dimensions impose no constraint. Catalog order is preserved.

use crate::intent::QueryIntent;
use crate::models::ProductRecord;

/// Records consistent with `intent`, in catalog order.
pub fn filter_records<'a>(
    records: &'a [ProductRecord],
    intent: &QueryIntent,
) -> Vec<&'a ProductRecord> {
    records.iter().filter(|r| matches(r, intent)).collect()
}

/// Evaluates every active predicate of `intent` against one record.
pub fn matches(record: &ProductRecord, intent: &QueryIntent) -> bool {
    if let Some(brand) = intent.brand {
        if record.brand.to_lowercase() != brand {
            return false;
        }
    }

    if let Some(ceiling) = intent.budget_ceiling {
        if record.price > ceiling {
            return false;
        }
    }

    if !intent.wanted_features.is_empty() {
        let features = record.features.join(" ").to_lowercase();
        let specs = record
            .specs
            .as_ref()
            .map(|s| s.values().collect::<Vec<_>>().join(" ").to_lowercase())
            .unwrap_or_default();
        let all_found = intent
            .wanted_features
            .iter()
            .all(|word| features.contains(word) || specs.contains(word));
        if !all_found {
            return false;
        }
    }

    if let Some(digits) = intent.ram_gb.as_deref() {
        let ram = record.specs.as_ref().and_then(|s| s.ram.as_deref());
        if !contains_digits(ram, digits) {
            return false;
        }
    }

    if let Some(digits) = intent.storage_gb.as_deref() {
        let storage = record.specs.as_ref().and_then(|s| s.storage.as_deref());
        if !contains_digits(storage, digits) {
            return false;
        }
    }

    true
}

/// Loose substring test: `"8GB"` and `"18GB"` both contain `"8"`.
fn contains_digits(field: Option<&str>, digits: &str) -> bool {
    field.is_some_and(|v| v.contains(digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specs;

    fn phone(brand: &str, model: &str, price: u64) -> ProductRecord {
        ProductRecord {
            id: None,
            brand: brand.to_string(),
            model: model.to_string(),
            price,
            specs: None,
            features: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            reviews: Vec::new(),
        }
    }

    fn with_specs(mut p: ProductRecord, ram: &str, storage: &str, battery: &str) -> ProductRecord {
        p.specs = Some(Specs {
            ram: Some(ram.to_string()),
            storage: Some(storage.to_string()),
            battery: Some(battery.to_string()),
            ..Default::default()
        });
        p
    }

    fn with_features(mut p: ProductRecord, features: &[&str]) -> ProductRecord {
        p.features = features.iter().map(|f| f.to_string()).collect();
        p
    }

    fn names(records: Vec<&ProductRecord>) -> Vec<String> {
        records.iter().map(|r| r.model.clone()).collect()
    }

    #[test]
    fn test_unset_intent_keeps_everything() {
        let catalog = vec![phone("Samsung", "A", 10), phone("Apple", "B", 99999)];
        let out = filter_records(&catalog, &QueryIntent::default());
        assert_eq!(names(out), vec!["A", "B"]);
    }

    #[test]
    fn test_brand_exact_case_insensitive() {
        let catalog = vec![
            phone("SAMSUNG", "A", 10),
            phone("Samsung Pro", "B", 10),
            phone("Apple", "C", 10),
        ];
        let intent = QueryIntent {
            brand: Some("samsung"),
            ..Default::default()
        };
        assert_eq!(names(filter_records(&catalog, &intent)), vec!["A"]);
    }

    #[test]
    fn test_budget_is_inclusive() {
        let catalog = vec![
            phone("Vivo", "At", 20000),
            phone("Vivo", "Over", 20001),
            phone("Vivo", "Under", 19999),
        ];
        let intent = QueryIntent {
            budget_ceiling: Some(20000),
            ..Default::default()
        };
        assert_eq!(names(filter_records(&catalog, &intent)), vec!["At", "Under"]);
    }

    #[test]
    fn test_features_are_conjunctive() {
        let catalog = vec![
            with_features(phone("iQOO", "Two", 1), &["Gaming", "5G"]),
            with_features(phone("iQOO", "Three", 1), &["Gaming", "5G", "AMOLED"]),
        ];
        let intent = QueryIntent {
            wanted_features: vec!["gaming", "5g", "amoled"],
            ..Default::default()
        };
        assert_eq!(names(filter_records(&catalog, &intent)), vec!["Three"]);
    }

    #[test]
    fn test_features_match_spec_values() {
        let catalog = vec![with_specs(phone("Redmi", "Note", 1), "8GB", "128GB", "5000mAh battery")];
        let intent = QueryIntent {
            wanted_features: vec!["battery"],
            ..Default::default()
        };
        assert_eq!(filter_records(&catalog, &intent).len(), 1);
    }

    #[test]
    fn test_missing_data_fails_active_predicates() {
        let bare = phone("Nothing", "Phone", 1);
        let features = QueryIntent {
            wanted_features: vec!["camera"],
            ..Default::default()
        };
        let ram = QueryIntent {
            ram_gb: Some("8".to_string()),
            ..Default::default()
        };
        let storage = QueryIntent {
            storage_gb: Some("128".to_string()),
            ..Default::default()
        };
        assert!(!matches(&bare, &features));
        assert!(!matches(&bare, &ram));
        assert!(!matches(&bare, &storage));
        assert!(matches(&bare, &QueryIntent::default()));
    }

    #[test]
    fn test_ram_and_storage_substring() {
        let p = with_specs(phone("OnePlus", "12R", 1), "16GB", "256GB", "5500mAh");
        let intent = |ram: Option<&str>, storage: Option<&str>| QueryIntent {
            ram_gb: ram.map(str::to_string),
            storage_gb: storage.map(str::to_string),
            ..Default::default()
        };
        assert!(matches(&p, &intent(Some("16"), None)));
        // Loose: "16GB" contains "6".
        assert!(matches(&p, &intent(Some("6"), None)));
        assert!(!matches(&p, &intent(Some("12"), None)));
        assert!(matches(&p, &intent(None, Some("256"))));
        assert!(!matches(&p, &intent(None, Some("512"))));
    }

    #[test]
    fn test_ram_digits_compared_verbatim() {
        let p = with_specs(phone("Vivo", "A", 1), "8GB RAM", "128GB", "5000mAh");
        let intent = |ram: &str| QueryIntent {
            ram_gb: Some(ram.to_string()),
            ..Default::default()
        };
        assert!(!matches(&p, &intent("08")));
        assert!(!matches(&p, &intent("99999999999999999999999")));
        assert!(matches(&p, &intent("8")));
    }
}
