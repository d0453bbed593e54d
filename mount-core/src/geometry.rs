use serde::Serialize;

use crate::config::MountConfig;
use crate::paper::{CUSTOM_PRESET, FALLBACK_BOARD, PAPER_SIZES, PaperSize, find_paper_size};
use crate::types::{BorderConfig, Dimensions, MountMode, Position};

/// Which input decided the board size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name")]
pub enum BoardSource {
    Preset(String),
    /// The preset name matched nothing; carries the requested name.
    Fallback(String),
    Custom,
    ManualBorders,
}

/// Result of one computation. Nothing here is clamped: margins and
/// coordinates may be negative when the aperture does not fit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountGeometry {
    pub board_size: Dimensions,
    pub aperture_position: Position,
    pub aperture_size: Dimensions,
    pub board_source: BoardSource,
}

impl MountGeometry {
    /// Border widths left around the aperture.
    pub fn borders(&self) -> BorderConfig {
        let p = self.aperture_position;
        BorderConfig {
            top: p.y,
            bottom: self.board_size.height - p.y - self.aperture_size.height,
            left: p.x,
            right: self.board_size.width - p.x - self.aperture_size.width,
        }
    }

    /// Print size needed so `underlap` of it sits behind the mount on every side.
    pub fn photo_paper_size(&self, underlap: f64) -> Dimensions {
        self.aperture_size.inflate(underlap)
    }

    /// True when any border is negative, i.e. the aperture spills off the board.
    pub fn is_degenerate(&self) -> bool {
        self.borders().min() < 0.0
    }
}

/// Compute against the built-in paper-size table.
pub fn compute(config: &MountConfig) -> MountGeometry {
    compute_with_table(config, PAPER_SIZES)
}

pub fn compute_with_table(config: &MountConfig, table: &[PaperSize]) -> MountGeometry {
    let aperture = config.photo_size().inflate(config.photo_border);

    let geom = match config.mode {
        MountMode::FixedBoard => {
            let (board, source) = resolve_board(config, table);
            let x = (board.width - aperture.width) / 2.0;
            let y = (board.height - aperture.height) / 2.0 - config.mount_offset;
            MountGeometry {
                board_size: board,
                aperture_position: Position { x, y },
                aperture_size: aperture,
                board_source: source,
            }
        }
        MountMode::CustomBorders => {
            let b = config.manual_borders;
            MountGeometry {
                board_size: Dimensions::new(
                    aperture.width + b.left + b.right,
                    aperture.height + b.top + b.bottom,
                ),
                aperture_position: Position {
                    x: b.left,
                    y: b.top,
                },
                aperture_size: aperture,
                board_source: BoardSource::ManualBorders,
            }
        }
    };

    log::debug!(
        "mount geometry: board {:.2}x{:.2}, aperture {:.2}x{:.2} at ({:.2}, {:.2})",
        geom.board_size.width,
        geom.board_size.height,
        geom.aperture_size.width,
        geom.aperture_size.height,
        geom.aperture_position.x,
        geom.aperture_position.y
    );
    if geom.is_degenerate() {
        log::warn!("aperture does not fit on the board; borders are negative");
    }
    geom
}

// "Custom" takes the stored custom size as-is. Any other name goes through the
// table (or the fallback) and then has the orientation enforced.
fn resolve_board(config: &MountConfig, table: &[PaperSize]) -> (Dimensions, BoardSource) {
    if config.board_preset == CUSTOM_PRESET {
        return (config.custom_board_size, BoardSource::Custom);
    }
    let (raw, source) = match find_paper_size(table, &config.board_preset) {
        Some(p) => (p.dimensions(), BoardSource::Preset(p.name.to_string())),
        None => {
            log::warn!(
                "unknown board preset {:?}, using {}x{} mm",
                config.board_preset,
                FALLBACK_BOARD.width,
                FALLBACK_BOARD.height
            );
            (
                FALLBACK_BOARD,
                BoardSource::Fallback(config.board_preset.clone()),
            )
        }
    };
    (raw.oriented(config.orientation), source)
}
