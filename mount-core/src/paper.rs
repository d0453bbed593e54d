use serde::Serialize;

use crate::types::Dimensions;

/// Named board/paper size, stored portrait (width <= height).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PaperSize {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Preset name that selects `customBoardSize` instead of a table entry.
pub const CUSTOM_PRESET: &str = "Custom";

/// Board used when a preset name matches nothing in the table (A2).
pub const FALLBACK_BOARD: Dimensions = Dimensions::new(420.0, 594.0);

const fn paper(name: &'static str, width: f64, height: f64) -> PaperSize {
    PaperSize {
        name,
        width,
        height,
    }
}

const MM_PER_IN: f64 = 25.4;

const fn inches(name: &'static str, w_in: f64, h_in: f64) -> PaperSize {
    paper(name, w_in * MM_PER_IN, h_in * MM_PER_IN)
}

pub const PAPER_SIZES: &[PaperSize] = &[
    // ISO 216
    paper("A0", 841.0, 1189.0),
    paper("A1", 594.0, 841.0),
    paper("A2", 420.0, 594.0),
    paper("A3", 297.0, 420.0),
    paper("A4", 210.0, 297.0),
    paper("A5", 148.0, 210.0),
    paper("A6", 105.0, 148.0),
    // North American
    inches("Letter", 8.5, 11.0),
    inches("Legal", 8.5, 14.0),
    inches("Tabloid", 11.0, 17.0),
    // photo prints
    inches("4x6", 4.0, 6.0),
    inches("5x7", 5.0, 7.0),
    inches("8x10", 8.0, 10.0),
    inches("8x12", 8.0, 12.0),
    inches("11x14", 11.0, 14.0),
    inches("12x16", 12.0, 16.0),
    inches("16x20", 16.0, 20.0),
    inches("20x24", 20.0, 24.0),
    inches("24x36", 24.0, 36.0),
];

/// Exact, case-sensitive lookup.
pub fn find_paper_size<'a>(table: &'a [PaperSize], name: &str) -> Option<&'a PaperSize> {
    table.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        let a2 = find_paper_size(PAPER_SIZES, "A2").unwrap();
        assert_eq!(a2.dimensions(), FALLBACK_BOARD);
        assert!(find_paper_size(PAPER_SIZES, "a2").is_none());
        assert!(find_paper_size(PAPER_SIZES, " A2").is_none());
        assert!(find_paper_size(PAPER_SIZES, CUSTOM_PRESET).is_none());
    }

    #[test]
    fn table_is_stored_portrait_and_unique() {
        for (i, p) in PAPER_SIZES.iter().enumerate() {
            assert!(p.width <= p.height, "{} is not portrait", p.name);
            assert!(
                PAPER_SIZES[i + 1..].iter().all(|q| q.name != p.name),
                "duplicate {}",
                p.name
            );
        }
    }

    #[test]
    fn inch_sizes_convert_exactly() {
        let letter = find_paper_size(PAPER_SIZES, "Letter").unwrap();
        assert!((letter.width - 215.9).abs() < 1e-9);
        assert!((letter.height - 279.4).abs() < 1e-9);
    }
}
