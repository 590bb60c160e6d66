/// Keywords that suggest a collection offers holder utility.
const UTILITY_KEYWORDS: &[&str] = &[
    "access",
    "reward",
    "staking",
    "dao",
    "airdrop",
    "utility",
    "whitelist",
    "wl",
    "benefit",
    "exclusive",
];

/// Keyword → human-readable perk label, in display order.
const PERK_KEYWORDS: &[(&str, &str)] = &[
    ("airdrop", "Exclusive Airdrops"),
    ("access", "Special Access"),
    ("event", "Exclusive Events"),
    ("merchandise", "Merchandise"),
    ("whitelist", "Whitelist Priority"),
    ("discount", "Discounts"),
    ("reward", "Holder Rewards"),
    ("staking", "Staking Benefits"),
    ("dao", "DAO Membership"),
    ("utility", "Utility Access"),
    ("membership", "Exclusive Membership"),
    ("benefit", "Holder Benefits"),
    ("perk", "Special Perks"),
];

/// Max keywords named in the utility summary.
const MAX_SUMMARY_KEYWORDS: usize = 3;

/// Scan a collection description for utility keywords.
///
/// Returns `Detected: a, b, c` with at most three keywords in vocabulary
/// order, or `None` when nothing matches. Matching is a case-insensitive
/// substring test, so "rewards" matches "reward".
pub fn detect_utility(description: Option<&str>) -> Option<String> {
    let desc = description?.to_lowercase();

    let found: Vec<&str> = UTILITY_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| desc.contains(kw))
        .take(MAX_SUMMARY_KEYWORDS)
        .collect();

    if found.is_empty() {
        return None;
    }

    Some(format!("Detected: {}", found.join(", ")))
}

/// Map perk keywords found in a description to their display labels.
pub fn parse_holder_perks(description: Option<&str>) -> Vec<String> {
    let Some(desc) = description.map(str::to_lowercase) else {
        return Vec::new();
    };

    let mut perks: Vec<String> = Vec::new();
    for (keyword, label) in PERK_KEYWORDS {
        if desc.contains(keyword) && !perks.iter().any(|p| p == label) {
            perks.push((*label).to_string());
        }
    }
    perks
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAO_DESC: &str = "Exclusive DAO access and staking rewards for holders";

    #[test]
    fn test_detect_utility_caps_at_three() {
        let text = detect_utility(Some(DAO_DESC)).unwrap();
        assert_eq!(text, "Detected: access, reward, staking");
    }

    #[test]
    fn test_detect_utility_case_insensitive() {
        let text = detect_utility(Some("AIRDROP for WHITELIST members")).unwrap();
        assert_eq!(text, "Detected: airdrop, whitelist");
    }

    #[test]
    fn test_detect_utility_absent() {
        assert_eq!(detect_utility(None), None);
        assert_eq!(detect_utility(Some("")), None);
        assert_eq!(detect_utility(Some("A generative art project")), None);
    }

    #[test]
    fn test_holder_perks() {
        let perks = parse_holder_perks(Some(DAO_DESC));
        assert_eq!(
            perks,
            vec![
                "Special Access",
                "Holder Rewards",
                "Staking Benefits",
                "DAO Membership",
            ]
        );
    }

    #[test]
    fn test_holder_perks_ordered_by_vocabulary() {
        let perks = parse_holder_perks(Some("Merch discounts, events and an airdrop"));
        assert_eq!(
            perks,
            vec!["Exclusive Airdrops", "Exclusive Events", "Discounts"]
        );
    }

    #[test]
    fn test_holder_perks_empty() {
        assert!(parse_holder_perks(None).is_empty());
        assert!(parse_holder_perks(Some("pixel art")).is_empty());
    }
}
