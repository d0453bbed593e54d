use serde::{Deserialize, Serialize};

/// Width and height in millimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Dimensions { width, height }
    }

    /// Same rectangle turned through 90 degrees.
    pub fn swapped(self) -> Self {
        Dimensions {
            width: self.height,
            height: self.width,
        }
    }

    /// Grow both axes by `margin` on each side.
    pub fn inflate(self, margin: f64) -> Self {
        Dimensions {
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Re-orient so the long side runs along the requested axis.
    /// Square sizes are returned as-is.
    pub fn oriented(self, orientation: Orientation) -> Self {
        let (short, long) = if self.width <= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        };
        match orientation {
            Orientation::Portrait => Dimensions::new(short, long),
            Orientation::Landscape => Dimensions::new(long, short),
        }
    }
}

impl From<(f64, f64)> for Dimensions {
    fn from(v: (f64, f64)) -> Self {
        Dimensions::new(v.0, v.1)
    }
}

/// Top-left offset measured from the board's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Margin widths on the four sides of the aperture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl BorderConfig {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        BorderConfig {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn min(&self) -> f64 {
        self.top.min(self.bottom).min(self.left).min(self.right)
    }
}

/// Which input decides the board size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountMode {
    /// Board comes from a preset or the custom size; the aperture is centred on it.
    #[default]
    FixedBoard,
    /// Border widths are authoritative; the board grows to fit.
    CustomBorders,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderConfig, Dimensions, Orientation};

    #[test]
    fn oriented_puts_long_side_on_requested_axis() {
        let a4 = Dimensions::new(297.0, 210.0);
        assert_eq!(
            a4.oriented(Orientation::Portrait),
            Dimensions::new(210.0, 297.0)
        );
        assert_eq!(
            a4.oriented(Orientation::Landscape),
            Dimensions::new(297.0, 210.0)
        );

        let sq = Dimensions::new(300.0, 300.0);
        assert_eq!(sq.oriented(Orientation::Landscape), sq);
        assert_eq!(sq.oriented(Orientation::Portrait), sq);
    }

    #[test]
    fn inflate_allows_negative_margin() {
        let d = Dimensions::new(100.0, 50.0).inflate(-5.0);
        assert_eq!(d, Dimensions::new(90.0, 40.0));
    }

    #[test]
    fn border_sums() {
        let b = BorderConfig::new(50.0, 60.0, 45.0, 40.0);
        assert_eq!(b.horizontal(), 85.0);
        assert_eq!(b.vertical(), 110.0);
        assert_eq!(b.min(), 40.0);
    }

    #[test]
    fn orientation_serializes_lowercase() {
        let s = serde_json::to_string(&Orientation::Landscape).unwrap();
        assert_eq!(s, "\"landscape\"");
        assert_eq!(Orientation::Landscape.toggled(), Orientation::Portrait);
    }
}
