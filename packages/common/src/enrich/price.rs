/// Ordered price-category rules: the first group with any tag present wins.
const PREMIUM_TEXTILE: [&str; 4] = ["saree", "handloom", "silk", "shawl"];
const POTTERY: [&str; 3] = ["pottery", "mug", "clay"];
const HANDICRAFT: [&str; 3] = ["jewelry", "bangle", "wood"];

/// Map a tag set to a suggested price-range string.
///
/// Case-insensitive membership test against fixed category groups; tags that
/// match no group fall to the lowest band. Pure function of the tag set.
pub fn suggest_price(tags: &[String]) -> &'static str {
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    let any_in = |group: &[&str]| group.iter().any(|g| tags.iter().any(|t| t == g));

    if any_in(&PREMIUM_TEXTILE) {
        "₹1500–₹3500"
    } else if any_in(&POTTERY) {
        "₹300–₹1200"
    } else if any_in(&HANDICRAFT) {
        "₹500–₹2500"
    } else {
        "₹200–₹800"
    }
}
