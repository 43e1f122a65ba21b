//! Parsing helpers for command-line values that clap cannot derive.

/// Parses a `FIELD=VALUE` filter. Only the first `=` splits, so values may
/// contain `=` themselves.
pub fn parse_filter_pair(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {raw:?}"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in {raw:?}"));
    }
    Ok((field.to_string(), value.to_string()))
}

/// `id` and `name`, then each extra field once, in order.
pub fn display_columns(extra: &[&str]) -> Vec<String> {
    let mut columns = vec!["id".to_string(), "name".to_string()];
    for &field in extra {
        if !columns.iter().any(|existing| existing == field) {
            columns.push(field.to_string());
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_pairs() {
        assert_eq!(
            parse_filter_pair("socket=LGA 2011"),
            Ok(("socket".to_string(), "LGA 2011".to_string()))
        );
        assert_eq!(
            parse_filter_pair("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert!(parse_filter_pair("socket").is_err());
        assert!(parse_filter_pair("=AM4").is_err());
    }

    #[test]
    fn display_columns_dedupe() {
        assert_eq!(
            display_columns(&["price", "name", "price", "socket"]),
            vec!["id", "name", "price", "socket"]
        );
    }
}
