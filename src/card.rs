//! Terminal rendering of product cards.
//!
//! Mirrors what a browser UI shows for each attached phone: name, price in
//! Indian digit grouping, a four-field specs grid with `N/A` for gaps,
//! feature tags, the first two pros and cons, and reviews when present.

use phone_finder_core::ProductRecord;

/// Pros and cons shown per card.
const MAX_LISTED: usize = 2;

/// Formats a rupee amount with Indian digit grouping: `129999` → `₹1,29,999`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), last3)
}

pub fn render_card(phone: &ProductRecord) -> String {
    let specs = phone.specs.clone().unwrap_or_default();
    let field = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());

    let mut out = String::new();
    out.push_str(&format!("┌ {}\n", phone.display_name()));
    out.push_str(&format!("│ {}\n", format_inr(phone.price)));
    out.push_str(&format!(
        "│ Display:   {:<28} Processor: {}\n",
        field(specs.display),
        field(specs.processor)
    ));
    out.push_str(&format!(
        "│ Camera:    {:<28} Battery:   {}\n",
        field(specs.camera),
        field(specs.battery)
    ));

    if !phone.features.is_empty() {
        let tags: Vec<String> = phone.features.iter().map(|f| format!("[{}]", f)).collect();
        out.push_str(&format!("│ {}\n", tags.join(" ")));
    }

    for pro in phone.pros.iter().take(MAX_LISTED) {
        out.push_str(&format!("│ ✓ {}\n", pro));
    }
    for con in phone.cons.iter().take(MAX_LISTED) {
        out.push_str(&format!("│ ✗ {}\n", con));
    }

    if !phone.reviews.is_empty() {
        out.push_str("│ User Reviews:\n");
        for review in &phone.reviews {
            out.push_str(&format!("│   {}: {}\n", review.user, review.comment));
        }
    }

    out.push('└');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use phone_finder_core::{Review, Specs};

    fn phone() -> ProductRecord {
        ProductRecord {
            id: Some("p1".to_string()),
            brand: "OnePlus".to_string(),
            model: "12R".to_string(),
            price: 39999,
            specs: Some(Specs {
                display: Some("6.78\" AMOLED".to_string()),
                battery: Some("5500mAh".to_string()),
                ..Default::default()
            }),
            features: vec!["5G".to_string(), "Fast charging".to_string()],
            pros: vec!["Smooth".to_string(), "Battery".to_string(), "Charging".to_string()],
            cons: vec!["No wireless".to_string()],
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1000), "₹1,000");
        assert_eq!(format_inr(18000), "₹18,000");
        assert_eq!(format_inr(129999), "₹1,29,999");
        assert_eq!(format_inr(12345678), "₹1,23,45,678");
    }

    #[test]
    fn test_card_specs_fallback_and_caps() {
        let card = render_card(&phone());
        assert!(card.contains("OnePlus 12R"));
        assert!(card.contains("₹39,999"));
        assert!(card.contains("Processor: N/A"));
        assert!(card.contains("Battery:   5500mAh"));
        assert!(card.contains("[5G] [Fast charging]"));
        assert!(card.contains("✓ Smooth"));
        assert!(card.contains("✓ Battery"));
        assert!(!card.contains("✓ Charging"));
        assert!(card.contains("✗ No wireless"));
        assert!(!card.contains("User Reviews"));
    }

    #[test]
    fn test_card_reviews_block() {
        let mut p = phone();
        p.specs = None;
        p.reviews = vec![Review {
            user: "Asha".to_string(),
            comment: "Great battery".to_string(),
        }];
        let card = render_card(&p);
        assert!(card.contains("Display:   N/A"));
        assert!(card.contains("User Reviews:"));
        assert!(card.contains("Asha: Great battery"));
    }
}
