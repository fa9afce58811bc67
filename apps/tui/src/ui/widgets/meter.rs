use echocart::catalog::{Band, Metric, MetricReading};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge};

/// Fixed display colors for the four severity bands.
pub const fn band_color(band: Band) -> Color {
    match band {
        Band::Low => Color::Rgb(76, 175, 80),
        Band::MediumLow => Color::Rgb(139, 195, 74),
        Band::MediumHigh => Color::Rgb(255, 193, 7),
        Band::High => Color::Rgb(244, 67, 54),
    }
}

/// Colored, percentage-width indicator for one metric reading. An
/// unavailable reading renders zero-width with a placeholder label.
pub fn metric_gauge(metric: Metric, reading: &MetricReading) -> Gauge<'static> {
    let block = Block::default()
        .title(metric.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match reading {
        MetricReading::Unavailable => Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::DarkGray))
            .ratio(0.0)
            .label(reading.display(metric)),
        MetricReading::Value { percent, band, .. } => Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(band_color(*band)))
            .ratio(percent / 100.0)
            .label(reading.display(metric)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_band_maps_to_its_fixed_color() {
        assert_eq!(band_color(Band::Low), Color::Rgb(76, 175, 80));
        assert_eq!(band_color(Band::MediumLow), Color::Rgb(139, 195, 74));
        assert_eq!(band_color(Band::MediumHigh), Color::Rgb(255, 193, 7));
        assert_eq!(band_color(Band::High), Color::Rgb(244, 67, 54));
    }

    #[test]
    fn high_band_for_clamped_and_unclamped_values() {
        // 75 and 150 share the High color even though 150 clamps to 100%.
        let at_75 = Metric::Carbon.read("75");
        let at_150 = Metric::Carbon.read("150");
        for reading in [at_75, at_150] {
            match reading {
                MetricReading::Value { band, .. } => {
                    assert_eq!(band_color(band), Color::Rgb(244, 67, 54));
                }
                MetricReading::Unavailable => panic!("expected a value"),
            }
        }
    }
}
