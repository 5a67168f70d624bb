//! Normalization of loosely-typed contact form input. The web form submits
//! deal values as strings and tags as one comma-delimited field; the API
//! accepts either those shapes or proper JSON numbers/arrays.

use serde_json::Value;

/// Coerce a deal value to a non-negative number. Anything that does not
/// parse as a finite number — missing, empty, garbage, null — becomes 0,
/// as does a negative amount.
pub fn parse_deal_value(input: Option<&Value>) -> f64 {
    let parsed = match input {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parse tags from a comma-delimited string or a JSON array. Members are
/// trimmed, empty entries dropped, input order preserved.
pub fn parse_tags(input: Option<&Value>) -> Vec<String> {
    match input {
        Some(Value::String(s)) => split_tags(s),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn split_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deal_value_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_deal_value(Some(&json!(25000))), 25000.0);
        assert_eq!(parse_deal_value(Some(&json!(1250.5))), 1250.5);
        assert_eq!(parse_deal_value(Some(&json!("25000"))), 25000.0);
        assert_eq!(parse_deal_value(Some(&json!(" 300 "))), 300.0);
    }

    #[test]
    fn deal_value_coerces_invalid_input_to_zero() {
        assert_eq!(parse_deal_value(None), 0.0);
        assert_eq!(parse_deal_value(Some(&json!(""))), 0.0);
        assert_eq!(parse_deal_value(Some(&json!("lots"))), 0.0);
        assert_eq!(parse_deal_value(Some(&json!(null))), 0.0);
        assert_eq!(parse_deal_value(Some(&json!(-500))), 0.0);
        assert_eq!(parse_deal_value(Some(&json!("NaN"))), 0.0);
    }

    #[test]
    fn tags_from_delimited_string() {
        assert_eq!(
            parse_tags(Some(&json!("hot, enterprise ,  q3"))),
            vec!["hot", "enterprise", "q3"]
        );
        assert_eq!(parse_tags(Some(&json!("a,,b, ,c"))), vec!["a", "b", "c"]);
        assert!(parse_tags(Some(&json!(""))).is_empty());
        assert!(parse_tags(None).is_empty());
    }

    #[test]
    fn tags_from_array_preserve_order() {
        assert_eq!(
            parse_tags(Some(&json!([" hot ", "", "enterprise"]))),
            vec!["hot", "enterprise"]
        );
    }
}
