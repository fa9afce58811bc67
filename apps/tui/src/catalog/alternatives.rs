use serde::Deserialize;

/// Label substituted for structured entries that carry no usable name.
pub const UNNAMED_ALTERNATIVE: &str = "Unnamed alternative";

/// One suggested alternative, derived per-selection and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeItem {
    pub name: String,
}

/// Outcome of parsing a record's `alternatives` field. The variant is
/// decided explicitly up front so rendering never has to re-guess the
/// format or touch a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAlternatives {
    /// Semicolon-separated list of names.
    Delimited(Vec<AlternativeItem>),
    /// JSON array of objects with at least a `name` field.
    Structured(Vec<AlternativeItem>),
    /// Field absent or blank.
    Empty,
    /// Field present but unparseable in either format.
    Invalid,
}

impl ParsedAlternatives {
    /// Items to render, when the parse produced any.
    pub fn items(&self) -> Option<&[AlternativeItem]> {
        match self {
            Self::Delimited(items) | Self::Structured(items) => Some(items),
            Self::Empty | Self::Invalid => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAlternative {
    #[serde(default)]
    name: Option<String>,
}

/// Parse the `alternatives` field. A blank field is `Empty`; a field
/// containing a semicolon is the delimited format; anything else must be a
/// JSON array or the result is `Invalid`.
pub fn parse_alternatives(raw: &str) -> ParsedAlternatives {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedAlternatives::Empty;
    }

    if trimmed.contains(';') {
        let items = trimmed
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| AlternativeItem {
                name: name.to_string(),
            })
            .collect();
        return ParsedAlternatives::Delimited(items);
    }

    match serde_json::from_str::<Vec<RawAlternative>>(trimmed) {
        Ok(entries) => ParsedAlternatives::Structured(
            entries
                .into_iter()
                .map(|entry| AlternativeItem {
                    name: entry
                        .name
                        .filter(|name| !name.trim().is_empty())
                        .unwrap_or_else(|| UNNAMED_ALTERNATIVE.to_string()),
                })
                .collect(),
        ),
        Err(_) => ParsedAlternatives::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(parsed: &ParsedAlternatives) -> Vec<&str> {
        parsed
            .items()
            .map(|items| items.iter().map(|item| item.name.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn semicolon_list_is_delimited_in_order() {
        let parsed = parse_alternatives("A;B;C");
        assert!(matches!(parsed, ParsedAlternatives::Delimited(_)));
        assert_eq!(names(&parsed), vec!["A", "B", "C"]);
    }

    #[test]
    fn delimited_entries_are_trimmed_and_blanks_dropped() {
        let parsed = parse_alternatives(" Eco Mug ; ;Steel Bottle;");
        assert_eq!(names(&parsed), vec!["Eco Mug", "Steel Bottle"]);
    }

    #[test]
    fn json_array_is_structured() {
        let parsed = parse_alternatives(r#"[{"name":"X"}]"#);
        assert!(matches!(parsed, ParsedAlternatives::Structured(_)));
        assert_eq!(names(&parsed), vec!["X"]);
    }

    #[test]
    fn structured_entry_without_name_gets_placeholder() {
        let parsed = parse_alternatives(r#"[{"name":"X"},{"score":2},{"name":"  "}]"#);
        assert_eq!(
            names(&parsed),
            vec!["X", UNNAMED_ALTERNATIVE, UNNAMED_ALTERNATIVE]
        );
    }

    #[test]
    fn unparseable_field_is_invalid() {
        assert_eq!(
            parse_alternatives("just one name"),
            ParsedAlternatives::Invalid
        );
        assert_eq!(parse_alternatives("{broken"), ParsedAlternatives::Invalid);
    }

    #[test]
    fn blank_field_is_empty() {
        assert_eq!(parse_alternatives(""), ParsedAlternatives::Empty);
        assert_eq!(parse_alternatives("   "), ParsedAlternatives::Empty);
    }
}
