/// The three sustainability metrics tracked per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Carbon,
    Water,
    Waste,
}

/// Render order for the detail pane.
pub const ALL_METRICS: [Metric; 3] = [Metric::Carbon, Metric::Water, Metric::Waste];

impl Metric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Carbon => "Carbon Footprint",
            Self::Water => "Water Usage",
            Self::Waste => "Waste Generated",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Carbon => "kg CO₂",
            Self::Water => "L",
            Self::Waste => "g",
        }
    }

    /// Raw value that corresponds to a full-width indicator.
    const fn full_scale(self) -> f64 {
        match self {
            Self::Carbon => 100.0,
            Self::Water => 1000.0,
            Self::Waste => 500.0,
        }
    }

    /// Band boundaries, strict upper bounds for Low / MediumLow / MediumHigh.
    const fn thresholds(self) -> [f64; 3] {
        match self {
            Self::Carbon => [10.0, 30.0, 70.0],
            Self::Water => [100.0, 300.0, 700.0],
            Self::Waste => [50.0, 150.0, 350.0],
        }
    }

    /// Indicator width as a percentage, clamped to 0..=100.
    pub fn percent(self, value: f64) -> f64 {
        (value / self.full_scale() * 100.0).clamp(0.0, 100.0)
    }

    /// Severity band for the *unclamped* raw value.
    pub fn band(self, value: f64) -> Band {
        let [low, medium_low, medium_high] = self.thresholds();
        if value < low {
            Band::Low
        } else if value < medium_low {
            Band::MediumLow
        } else if value < medium_high {
            Band::MediumHigh
        } else {
            Band::High
        }
    }

    /// Coerce a raw textual field into a reading. Absent or non-numeric
    /// input yields `Unavailable`; it never fails the other metrics.
    pub fn read(self, raw: &str) -> MetricReading {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => MetricReading::Value {
                raw: value,
                percent: self.percent(value),
                band: self.band(value),
            },
            _ => MetricReading::Unavailable,
        }
    }
}

/// Severity level derived from fixed thresholds, used only to choose a
/// display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    MediumLow,
    MediumHigh,
    High,
}

impl Band {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::MediumLow => "medium-low",
            Self::MediumHigh => "medium-high",
            Self::High => "high",
        }
    }
}

/// One coerced metric field, ready to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricReading {
    Unavailable,
    Value { raw: f64, percent: f64, band: Band },
}

impl MetricReading {
    /// Indicator width; an unavailable reading renders zero-width.
    pub const fn percent(&self) -> f64 {
        match self {
            Self::Unavailable => 0.0,
            Self::Value { percent, .. } => *percent,
        }
    }

    /// Value text with unit suffix, one decimal place.
    pub fn display(&self, metric: Metric) -> String {
        match self {
            Self::Unavailable => "Data unavailable".to_string(),
            Self::Value { raw, .. } => format!("{raw:.1} {}", metric.unit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_percent_is_raw_value_capped() {
        assert!((Metric::Carbon.percent(75.0) - 75.0).abs() < f64::EPSILON);
        assert!((Metric::Carbon.percent(150.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn water_and_waste_use_their_divisors() {
        assert!((Metric::Water.percent(500.0) - 50.0).abs() < f64::EPSILON);
        assert!((Metric::Water.percent(2000.0) - 100.0).abs() < f64::EPSILON);
        assert!((Metric::Waste.percent(250.0) - 50.0).abs() < f64::EPSILON);
        assert!((Metric::Waste.percent(600.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn band_boundaries_are_strict_upper_bounds() {
        assert_eq!(Metric::Carbon.band(9.9), Band::Low);
        assert_eq!(Metric::Carbon.band(10.0), Band::MediumLow);
        assert_eq!(Metric::Carbon.band(29.9), Band::MediumLow);
        assert_eq!(Metric::Carbon.band(30.0), Band::MediumHigh);
        assert_eq!(Metric::Carbon.band(70.0), Band::High);

        assert_eq!(Metric::Water.band(99.0), Band::Low);
        assert_eq!(Metric::Water.band(300.0), Band::MediumHigh);
        assert_eq!(Metric::Water.band(700.0), Band::High);

        assert_eq!(Metric::Waste.band(49.9), Band::Low);
        assert_eq!(Metric::Waste.band(150.0), Band::MediumHigh);
        assert_eq!(Metric::Waste.band(350.0), Band::High);
    }

    #[test]
    fn band_uses_the_unclamped_value() {
        // 150 clamps to 100% width but is still banded as High.
        let reading = Metric::Carbon.read("150");
        assert_eq!(
            reading,
            MetricReading::Value {
                raw: 150.0,
                percent: 100.0,
                band: Band::High,
            }
        );
    }

    #[test]
    fn high_band_at_seventy_five_percent_width() {
        let reading = Metric::Carbon.read("75");
        match reading {
            MetricReading::Value { percent, band, .. } => {
                assert!((percent - 75.0).abs() < f64::EPSILON);
                assert_eq!(band, Band::High);
            }
            MetricReading::Unavailable => panic!("expected a value"),
        }
    }

    #[test]
    fn non_numeric_input_is_unavailable() {
        assert_eq!(Metric::Carbon.read(""), MetricReading::Unavailable);
        assert_eq!(Metric::Water.read("   "), MetricReading::Unavailable);
        assert_eq!(Metric::Waste.read("n/a"), MetricReading::Unavailable);
        assert_eq!(Metric::Carbon.read("NaN"), MetricReading::Unavailable);
    }

    #[test]
    fn unavailable_reading_renders_zero_width() {
        let reading = Metric::Water.read("not a number");
        assert!((reading.percent() - 0.0).abs() < f64::EPSILON);
        assert_eq!(reading.display(Metric::Water), "Data unavailable");
    }

    #[test]
    fn display_formats_one_decimal_with_unit() {
        assert_eq!(Metric::Carbon.read("15.25").display(Metric::Carbon), "15.2 kg CO₂");
        assert_eq!(Metric::Water.read("120").display(Metric::Water), "120.0 L");
        assert_eq!(Metric::Waste.read("45").display(Metric::Waste), "45.0 g");
    }
}
