use std::io::Stdout;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use echocart::assistant::{ChatWidget, WidgetStatus};
use echocart::catalog::{parse_alternatives, Metric, ALL_METRICS};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use tokio::sync::{oneshot, watch};

use crate::app::{handle_input, App};
use crate::ui;

/// Interactive draw/input loop. The assistant bootstrap runs on its own
/// task; its status and the widget handle arrive over the two channels and
/// are folded into the app state between frames.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    status_rx: watch::Receiver<WidgetStatus>,
    widget_rx: oneshot::Receiver<ChatWidget>,
) -> Result<()> {
    let mut widget_rx = Some(widget_rx);

    loop {
        app.update();
        app.widget_status = *status_rx.borrow();

        if let Some(rx) = widget_rx.as_mut() {
            match rx.try_recv() {
                Ok(widget) => {
                    app.widget = Some(widget);
                    app.status_message = "Assistant connected".to_string();
                    widget_rx = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    widget_rx = None;
                }
            }
        }

        terminal.draw(|f| ui::ui(app, f))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Event::Resize(_, _) => {
                    terminal.draw(|f| ui::ui(app, f))?;
                }
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct HeadlessProduct {
    name: String,
    carbon: String,
    water: String,
    waste: String,
    alternatives: usize,
}

#[derive(Debug, Serialize)]
struct HeadlessReport {
    total_products: usize,
    source: &'static str,
    products: Vec<HeadlessProduct>,
}

fn reading_summary(metric: Metric, raw: &str) -> String {
    match metric.read(raw) {
        echocart::catalog::MetricReading::Unavailable => "unavailable".to_string(),
        reading @ echocart::catalog::MetricReading::Value { band, .. } => {
            format!("{} ({})", reading.display(metric), band.as_str())
        }
    }
}

/// One-shot catalog report for non-interactive runs, as plain text or JSON.
pub fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.load_catalog();

    let source = if app.data_banner.is_some() {
        "fallback"
    } else {
        "file"
    };

    let products = app
        .products
        .iter()
        .filter_map(|record| {
            let name = record.display_name()?;
            let [carbon, water, waste] =
                ALL_METRICS.map(|metric| reading_summary(metric, record.metric_field(metric)));
            let alternatives = parse_alternatives(&record.alternatives)
                .items()
                .map_or(0, <[_]>::len);
            Some(HeadlessProduct {
                name: name.to_string(),
                carbon,
                water,
                waste,
                alternatives,
            })
        })
        .collect::<Vec<_>>();

    let report = HeadlessReport {
        total_products: products.len(),
        source,
        products,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Products: {} (source: {})", report.total_products, report.source);
        for product in &report.products {
            println!("- {}", product.name);
            println!("    carbon: {}", product.carbon);
            println!("    water:  {}", product.water);
            println!("    waste:  {}", product.waste);
            println!("    alternatives: {}", product.alternatives);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use echocart::config::AppConfig;
    use std::path::PathBuf;

    #[test]
    fn headless_report_uses_the_fallback_catalog() {
        let mut app = App::new(AppConfig {
            data_path: PathBuf::from("/no/such/products.csv"),
            ..AppConfig::default()
        });
        run_headless(&mut app, false).expect("report should print");
        assert!(app.data_banner.is_some());
        assert_eq!(app.products.len(), 2);
    }

    #[test]
    fn reading_summary_includes_band_and_unit() {
        assert_eq!(reading_summary(Metric::Carbon, "15.2"), "15.2 kg CO₂ (medium-low)");
        assert_eq!(reading_summary(Metric::Water, "oops"), "unavailable");
    }
}
