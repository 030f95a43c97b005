use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{format_change_percent, format_price};

/// One row of the instrument directory. Built once when the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub series_code: String,
    pub isin: String,
    pub baseline_price: f64,
    pub quote: Quote,
}

impl Instrument {
    pub fn price_label(&self) -> String {
        format_price(self.quote.price)
    }

    pub fn change_label(&self) -> String {
        format_change_percent(self.quote.change_percent)
    }

    pub fn tone(&self) -> QuoteTone {
        self.quote.tone()
    }
}

// Presentation-only quote. Not derived from any synthesized series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub change_percent: f64,
}

impl Quote {
    pub fn tone(&self) -> QuoteTone {
        if self.change_percent >= 0.0 {
            QuoteTone::NonNegative
        } else {
            QuoteTone::Negative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteTone {
    NonNegative,
    Negative,
}

impl QuoteTone {
    pub fn css_class(self) -> &'static str {
        match self {
            QuoteTone::NonNegative => "quote-up",
            QuoteTone::Negative => "quote-down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// High/low contain the body and every price is strictly positive.
    pub fn is_well_formed(&self) -> bool {
        let body_high = self.open.max(self.close);
        let body_low = self.open.min(self.close);
        self.high >= body_high
            && self.low <= body_low
            && [self.open, self.high, self.low, self.close]
                .iter()
                .all(|v| v.is_finite() && *v > 0.0)
    }

    pub fn to_chart_point(&self) -> ChartPoint {
        ChartPoint {
            time: self.date.format("%Y-%m-%d").to_string(),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }
}

/// Daily candles in strictly ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    candles: Vec<Candle>,
}

impl Series {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn is_strictly_ascending(&self) -> bool {
        self.candles.windows(2).all(|w| w[0].date < w[1].date)
    }

    pub fn to_chart_points(&self) -> Vec<ChartPoint> {
        self.candles.iter().map(Candle::to_chart_point).collect()
    }
}

// Row shape accepted by the charting library's candlestick series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

// Timeframe buttons on the chart header. They carry no behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Hour1,
    Hour4,
    Day1,
    Week1,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 4] = [TimeFrame::Hour1, TimeFrame::Hour4, TimeFrame::Day1, TimeFrame::Week1];

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::Hour1 => "1H",
            TimeFrame::Hour4 => "4H",
            TimeFrame::Day1 => "1D",
            TimeFrame::Week1 => "1W",
        }
    }
}

impl Default for TimeFrame {
    fn default() -> Self {
        TimeFrame::Day1
    }
}
