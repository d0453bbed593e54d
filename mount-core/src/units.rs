use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

/// Unit lengths are shown in. Storage and geometry stay in millimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    #[serde(alias = "millimeters")]
    Mm,
    #[serde(alias = "inches")]
    In,
}

impl DisplayUnit {
    pub fn to_display(self, mm: f64) -> f64 {
        match self {
            DisplayUnit::Mm => mm,
            DisplayUnit::In => mm / MM_PER_INCH,
        }
    }

    pub fn from_display(self, value: f64) -> f64 {
        match self {
            DisplayUnit::Mm => value,
            DisplayUnit::In => value * MM_PER_INCH,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DisplayUnit::Mm => " mm",
            DisplayUnit::In => "\"",
        }
    }

    /// `102.1 mm` or `4.02"`.
    pub fn format(self, mm: f64) -> String {
        let v = self.to_display(mm);
        match self {
            DisplayUnit::Mm => format!("{v:.1}{}", self.suffix()),
            DisplayUnit::In => format!("{v:.2}{}", self.suffix()),
        }
    }

    /// `420.0 × 594.0 mm` / `16.54 × 23.39"`.
    pub fn format_pair(self, w_mm: f64, h_mm: f64) -> String {
        let (w, h) = (self.to_display(w_mm), self.to_display(h_mm));
        match self {
            DisplayUnit::Mm => format!("{w:.1} × {h:.1}{}", self.suffix()),
            DisplayUnit::In => format!("{w:.2} × {h:.2}{}", self.suffix()),
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayUnit::Mm => write!(f, "mm"),
            DisplayUnit::In => write!(f, "in"),
        }
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(DisplayUnit::Mm)
            }
            "in" | "inch" | "inches" | "\"" => Ok(DisplayUnit::In),
            other => Err(format!("unknown unit `{other}` (expected mm or in)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayUnit;

    #[test]
    fn inch_conversion_is_exact() {
        assert_eq!(DisplayUnit::In.to_display(25.4), 1.0);
        assert_eq!(DisplayUnit::In.from_display(8.0), 203.2);
        assert_eq!(DisplayUnit::Mm.to_display(12.5), 12.5);
    }

    #[test]
    fn formats() {
        assert_eq!(DisplayUnit::Mm.format(102.06), "102.1 mm");
        assert_eq!(DisplayUnit::In.format(101.6), "4.00\"");
        assert_eq!(DisplayUnit::Mm.format_pair(420.0, 594.0), "420.0 × 594.0 mm");
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("mm".parse::<DisplayUnit>(), Ok(DisplayUnit::Mm));
        assert_eq!(" Inches ".parse::<DisplayUnit>(), Ok(DisplayUnit::In));
        assert!("cm".parse::<DisplayUnit>().is_err());
    }
}
