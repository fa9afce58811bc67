use serde::Deserialize;

use super::metrics::Metric;

/// One product row from the source data. All fields arrive as text; the
/// metric fields are coerced lazily so one bad field cannot poison the row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub carbon: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub waste: String,
    #[serde(default)]
    pub alternatives: String,
}

impl ProductRecord {
    /// Trimmed display name, or `None` for records that must not appear in
    /// the selection list.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn metric_field(&self, metric: Metric) -> &str {
        match metric {
            Metric::Carbon => &self.carbon,
            Metric::Water => &self.water,
            Metric::Waste => &self.waste,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_trims_and_rejects_blank() {
        let mut record = ProductRecord {
            name: "  Bamboo Toothbrush  ".to_string(),
            carbon: String::new(),
            water: String::new(),
            waste: String::new(),
            alternatives: String::new(),
        };
        assert_eq!(record.display_name(), Some("Bamboo Toothbrush"));

        record.name = "   ".to_string();
        assert_eq!(record.display_name(), None);
    }
}
