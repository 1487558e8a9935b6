use std::sync::LazyLock;

use regex::Regex;

/// Unit patterns in priority order, with their gram multiplier.
/// Millilitres and litres assume the density of water. Long spellings
/// ("гр", "грамм", "литр") are listed explicitly since `\b` is Unicode-aware.
static UNIT_PATTERNS: LazyLock<Vec<(Regex, f64)>> = LazyLock::new(|| {
    [
        (r"(?i)(\d+(?:[.,]\d+)?)\s*(?:г(?:р(?:амм\w*)?)?|g)\b", 1.0),
        (r"(?i)(\d+(?:[.,]\d+)?)\s*(?:мл|ml)\b", 1.0),
        (r"(?i)(\d+(?:[.,]\d+)?)\s*(?:л(?:итр\w*)?|l)\b", 1000.0),
        (r"(?i)(\d+(?:[.,]\d+)?)\s*(?:кг|kg)\b", 1000.0),
    ]
    .into_iter()
    .filter_map(|(pattern, mult)| Regex::new(pattern).ok().map(|re| (re, mult)))
    .collect()
});

fn parse_decimal(text: &str) -> Option<f64> {
    text.replace(',', ".").parse().ok()
}

/// Grams in a pack description such as "500 г" or "1,5 л".
pub fn mass_from_clarification(clarification: &str) -> Option<f64> {
    UNIT_PATTERNS.iter().find_map(|(re, mult)| {
        re.captures(clarification)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_decimal(m.as_str()))
            .map(|value| value * mult)
    })
}

/// Weight of one sale unit in grams.
///
/// Weighed goods (`кг`) use `step` kilograms; piece goods (`шт`) read the
/// pack size from the clarification text and multiply by `step`.
pub fn portion_weight_grams(uom: &str, step: Option<f64>, clarification: &str) -> Option<f64> {
    let step = step.unwrap_or(1.0);
    match uom.trim().to_lowercase().as_str() {
        "кг" | "kg" => Some(step * 1000.0),
        "шт" | "pcs" | "pc" => mass_from_clarification(clarification).map(|grams| grams * step),
        _ => None,
    }
}
