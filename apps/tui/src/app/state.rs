use std::time::Instant;

use echocart::assistant::{ChatWidget, WidgetStatus};
use echocart::catalog::{
    self, AlternativeItem, Metric, MetricReading, ParsedAlternatives, ProductRecord,
};
use echocart::config::AppConfig;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Neutral first row of the product list.
pub const PLACEHOLDER_LABEL: &str = "-- Select a product --";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Browse,
    Chat,
}

/// Which pane receives navigation keys on the browse screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BrowseFocus {
    Products,
    Alternatives,
}

/// Detail state derived from the selected record. Rebuilt from scratch on
/// every selection; never cached across selections.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub name: String,
    pub readings: [(Metric, MetricReading); 3],
    pub alternatives: ParsedAlternatives,
}

impl ProductDetail {
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            name: record.name.trim().to_string(),
            readings: [
                (Metric::Carbon, Metric::Carbon.read(&record.carbon)),
                (Metric::Water, Metric::Water.read(&record.water)),
                (Metric::Waste, Metric::Waste.read(&record.waste)),
            ],
            alternatives: catalog::parse_alternatives(&record.alternatives),
        }
    }
}

/// Single view-controller for the whole application. The product
/// collection and derived detail state are written only by the load and
/// selection paths and read everywhere else.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub config: AppConfig,
    pub products: Vec<ProductRecord>,
    /// Catalog indices with a usable name, in input order.
    visible: Vec<usize>,
    /// Subset of `visible` while a search filter applies.
    filtered: Vec<usize>,
    pub search_active: bool,
    pub search_input: String,
    /// Row under the highlight; row 0 is the placeholder.
    pub cursor: usize,
    /// Catalog index of the active product.
    selected: Option<usize>,
    pub detail: Option<ProductDetail>,
    pub focus: BrowseFocus,
    pub alternative_cursor: usize,
    pub chosen_alternative: Option<AlternativeItem>,
    /// Non-blocking data-source error banner.
    pub data_banner: Option<String>,
    pub status_message: String,
    pub chat_input: String,
    pub chat_transcript: Vec<String>,
    pub widget_status: WidgetStatus,
    pub widget: Option<ChatWidget>,
    pub animation_counter: f64,
    pub last_frame: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            screen: AppScreen::Browse,
            show_help: false,
            config,
            products: Vec::new(),
            visible: Vec::new(),
            filtered: Vec::new(),
            search_active: false,
            search_input: String::new(),
            cursor: 0,
            selected: None,
            detail: None,
            focus: BrowseFocus::Products,
            alternative_cursor: 0,
            chosen_alternative: None,
            data_banner: None,
            status_message: String::new(),
            chat_input: String::new(),
            chat_transcript: Vec::new(),
            widget_status: WidgetStatus::Waiting,
            widget: None,
            animation_counter: 0.0,
            last_frame: Instant::now(),
        }
    }

    /// Load the catalog from the configured data file, substituting the
    /// demo catalog behind a banner on any failure. The collection is
    /// replaced wholesale either way.
    pub fn load_catalog(&mut self) {
        match catalog::load_products(&self.config.data_path) {
            Ok(rows) => {
                self.data_banner = None;
                self.status_message = format!("Loaded {} products", rows.len());
                self.replace_products(rows);
            }
            Err(e) => {
                if self.config.debug {
                    eprintln!("[DEBUG] catalog load error: {e}");
                }
                self.data_banner =
                    Some("Failed to load product data - using demo data".to_string());
                let demo = catalog::demo_products();
                self.status_message = format!("Using {} demo products", demo.len());
                self.replace_products(demo);
            }
        }
    }

    fn replace_products(&mut self, rows: Vec<ProductRecord>) {
        self.products = rows;
        self.rebuild_visible();
        self.clear_search();
        self.cursor = 0;
        self.clear_selection();
    }

    /// Rebuild the selectable rows from scratch: records with a non-empty
    /// trimmed name only, input order preserved.
    fn rebuild_visible(&mut self) {
        self.visible = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, record)| record.display_name().is_some())
            .map(|(index, _)| index)
            .collect();
    }

    /// Rows currently shown in the product list (placeholder excluded).
    pub fn listed(&self) -> &[usize] {
        if self.search_input.trim().is_empty() {
            &self.visible
        } else {
            &self.filtered
        }
    }

    /// Total list rows including the placeholder.
    pub fn row_count(&self) -> usize {
        self.listed().len() + 1
    }

    pub fn apply_search(&mut self) {
        let matcher = SkimMatcherV2::default();
        let pattern = self.search_input.trim().to_string();
        self.filtered = self
            .visible
            .iter()
            .copied()
            .filter(|&index| {
                self.products[index]
                    .display_name()
                    .and_then(|name| matcher.fuzzy_match(name, &pattern))
                    .is_some()
            })
            .collect();
        if self.cursor >= self.row_count() {
            self.cursor = 0;
        }
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
        self.filtered.clear();
        if self.cursor >= self.row_count() {
            self.cursor = 0;
        }
    }

    /// Confirm the row under the highlight. Row 0 is the placeholder and
    /// clears the selection, hiding the detail pane.
    pub fn select_at_cursor(&mut self) {
        if self.cursor == 0 {
            self.clear_selection();
            return;
        }
        if let Some(index) = self.listed().get(self.cursor - 1).copied() {
            self.select_product(index);
        }
    }

    /// Activate one product by catalog index. Out-of-range indices are
    /// ignored; the selection is always validated before dereference.
    pub fn select_product(&mut self, index: usize) {
        let Some(record) = self.products.get(index) else {
            return;
        };
        self.detail = Some(ProductDetail::from_record(record));
        self.selected = Some(index);
        self.alternative_cursor = 0;
        self.chosen_alternative = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.detail = None;
        self.focus = BrowseFocus::Products;
        self.alternative_cursor = 0;
        self.chosen_alternative = None;
    }

    pub fn selected_product(&self) -> Option<&ProductRecord> {
        self.selected.and_then(|index| self.products.get(index))
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Alternatives of the active product, when the parse produced any.
    pub fn alternative_items(&self) -> Option<&[AlternativeItem]> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.alternatives.items())
            .filter(|items| !items.is_empty())
    }

    /// Record the highlighted alternative. Deliberately inert beyond the
    /// status line: the downstream action is an extension point.
    pub fn choose_alternative(&mut self) {
        let Some(item) = self
            .alternative_items()
            .and_then(|items| items.get(self.alternative_cursor))
            .cloned()
        else {
            return;
        };
        if self.config.debug {
            eprintln!("[DEBUG] selected alternative: {}", item.name);
        }
        self.status_message = format!("Selected alternative: {}", item.name);
        self.chosen_alternative = Some(item);
    }

    /// Deliver the chat input to the assistant, if it finished
    /// initializing.
    pub fn send_chat_message(&mut self) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        if let Some(widget) = self.widget.as_mut() {
            widget.deliver(&text);
            self.chat_transcript.push(text);
            self.chat_input.clear();
        } else {
            self.status_message = match self.widget_status {
                WidgetStatus::Unavailable => "Assistant is unavailable".to_string(),
                _ => "Assistant is still connecting".to_string(),
            };
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echocart::catalog::Band;
    use std::path::PathBuf;

    fn record(name: &str, carbon: &str, water: &str, waste: &str, alts: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            carbon: carbon.to_string(),
            water: water.to_string(),
            waste: waste.to_string(),
            alternatives: alts.to_string(),
        }
    }

    fn app_with(products: Vec<ProductRecord>) -> App {
        let mut app = App::new(AppConfig::default());
        app.products = products;
        app.rebuild_visible();
        app
    }

    #[test]
    fn visible_rows_skip_blank_names_and_keep_input_order() {
        let app = app_with(vec![
            record("Zeta", "1", "1", "1", ""),
            record("   ", "1", "1", "1", ""),
            record("Alpha", "1", "1", "1", ""),
            record("", "1", "1", "1", ""),
        ]);
        assert_eq!(app.listed(), &[0, 2]);
        assert_eq!(app.row_count(), 3);
    }

    #[test]
    fn placeholder_selection_hides_the_detail_pane() {
        let mut app = app_with(vec![record("Mug", "5", "50", "10", "A;B")]);
        app.cursor = 1;
        app.select_at_cursor();
        assert!(app.detail.is_some());

        app.cursor = 0;
        app.select_at_cursor();
        assert!(app.detail.is_none());
        assert!(app.selected_product().is_none());
    }

    #[test]
    fn selecting_the_same_product_twice_is_idempotent() {
        let mut app = app_with(vec![record("Mug", "75", "abc", "45", "A;B;C")]);
        app.select_product(0);
        let first = app.detail.clone();
        app.select_product(0);
        assert_eq!(app.detail, first);
    }

    #[test]
    fn detail_survives_partial_metric_failure() {
        let mut app = app_with(vec![record("Mug", "oops", "120", "", "A;B")]);
        app.select_product(0);
        let detail = app.detail.as_ref().expect("detail should be shown");
        assert_eq!(detail.readings[0].1, MetricReading::Unavailable);
        assert!(matches!(
            detail.readings[1].1,
            MetricReading::Value {
                band: Band::MediumLow,
                ..
            }
        ));
        assert_eq!(detail.readings[2].1, MetricReading::Unavailable);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut app = app_with(vec![record("Mug", "1", "1", "1", "")]);
        app.select_product(7);
        assert!(app.detail.is_none());
    }

    #[test]
    fn load_failure_falls_back_to_the_two_demo_products() {
        let mut app = App::new(AppConfig {
            data_path: PathBuf::from("/no/such/products.csv"),
            ..AppConfig::default()
        });
        app.load_catalog();

        assert!(app.data_banner.is_some());
        assert_eq!(app.products.len(), 2);
        assert_eq!(app.listed().len(), 2);

        for index in 0..2 {
            app.select_product(index);
            let detail = app.detail.as_ref().expect("demo detail should render");
            for (metric, reading) in &detail.readings {
                assert!(
                    matches!(reading, MetricReading::Value { .. }),
                    "{} should be available in demo data",
                    metric.label()
                );
            }
            assert_eq!(app.alternative_items().map(<[_]>::len), Some(2));
        }
    }

    #[test]
    fn choosing_an_alternative_records_it_and_nothing_else() {
        let mut app = app_with(vec![record("Mug", "5", "50", "10", "Eco Mug;Steel Mug")]);
        app.select_product(0);
        app.alternative_cursor = 1;
        app.choose_alternative();

        let chosen = app.chosen_alternative.as_ref().expect("choice recorded");
        assert_eq!(chosen.name, "Steel Mug");
        assert_eq!(app.status_message, "Selected alternative: Steel Mug");
        // The product collection and selection are untouched.
        assert_eq!(app.selected_product().map(|p| p.name.as_str()), Some("Mug"));
    }

    #[test]
    fn search_filters_but_preserves_input_order() {
        let mut app = app_with(vec![
            record("Alpha", "1", "1", "1", ""),
            record("Beta", "1", "1", "1", ""),
            record("Alga", "1", "1", "1", ""),
        ]);
        app.search_input = "al".to_string();
        app.apply_search();
        assert_eq!(app.listed(), &[0, 2]);

        app.clear_search();
        assert_eq!(app.listed(), &[0, 1, 2]);
    }

    #[test]
    fn reload_replaces_the_collection_wholesale() {
        let mut app = app_with(vec![record("Old", "1", "1", "1", "")]);
        app.select_product(0);
        app.config.data_path = PathBuf::from("/no/such/products.csv");
        app.load_catalog();

        assert_eq!(app.products.len(), 2);
        assert!(app.detail.is_none(), "selection resets on reload");
        assert!(app.products.iter().all(|p| p.name != "Old"));
    }
}
