//! Diagram of a mount: board, aperture, visible photo and the hidden print
//! outline, labelled in the chosen display unit.

use mount_core::{DisplayUnit, MountConfig, MountGeometry};

mod raster;

pub use raster::{MAX_PIXELS, PreviewError, encode_rgba_to_png_bytes, render_png};

/// Pixels per millimetre used when the caller has no preference.
pub const DEFAULT_PX_PER_MM: f64 = 2.0;

const PAD_MM: f64 = 12.0;
const TITLE_MM: f64 = 10.0;
const CAPTION_MM: f64 = 10.0;

const BOARD_FILL: &str = "#f4efe6";
const PHOTO_FILL: &str = "#9fb4c4";
const DIM_COLOR: &str = "#555";
const WARN_COLOR: &str = "#c0392b";

#[derive(Clone, Copy, Debug, Default)]
struct Point {
    x: f64,
    y: f64,
}

/// Axis-aligned rectangle as a closed outline. Negative sizes are flipped so
/// degenerate layouts still draw.
fn rect_points(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    let (x0, x1) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
    let (y0, y1) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
    vec![
        Point { x: x0, y: y0 },
        Point { x: x1, y: y0 },
        Point { x: x1, y: y1 },
        Point { x: x0, y: y1 },
    ]
}

fn translate_geom(pts: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    pts.iter()
        .map(|p| Point {
            x: p.x + dx,
            y: p.y + dy,
        })
        .collect()
}

fn bounds_of(pts: &[Point]) -> (f64, f64, f64, f64) {
    let (mut minx, mut miny, mut maxx, mut maxy) = (
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for p in pts {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    (minx, miny, maxx, maxy)
}

fn bounds_of_all(polys: &[&[Point]]) -> (f64, f64, f64, f64) {
    let mut first = true;
    let mut out = (0.0, 0.0, 0.0, 0.0);
    for p in polys {
        let b = bounds_of(p);
        if first {
            out = b;
            first = false;
        } else {
            out.0 = out.0.min(b.0);
            out.1 = out.1.min(b.1);
            out.2 = out.2.max(b.2);
            out.3 = out.3.max(b.3);
        }
    }
    out
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn path_from_points<F>(pts: &[Point], to_px: &F, attrs: &str) -> String
where
    F: Fn(Point) -> (f64, f64),
{
    if pts.is_empty() {
        return String::new();
    }
    let (x0, y0) = to_px(pts[0]);
    let mut out = format!("<path d=\"M {:.2} {:.2}", x0, y0);
    for p in &pts[1..] {
        let (x, y) = to_px(*p);
        out.push_str(&format!(" L {:.2} {:.2}", x, y));
    }
    out.push_str(&format!(" Z\" {attrs}/>\n"));
    out
}

/// Build the preview SVG. Returns the document and its pixel size.
///
/// Coordinates follow the board: origin at its top-left corner, y growing
/// downwards. The canvas covers the board, the photo and the print outline,
/// so anything that spills off the board stays visible.
pub fn build_preview_svg(
    config: &MountConfig,
    geom: &MountGeometry,
    unit: DisplayUnit,
    px_per_mm: f64,
) -> (String, u32, u32) {
    let px_per_mm = if px_per_mm.is_finite() && px_per_mm > 0.0 {
        px_per_mm
    } else {
        log::warn!("invalid px_per_mm {px_per_mm}, using {DEFAULT_PX_PER_MM}");
        DEFAULT_PX_PER_MM
    };
    let board = geom.board_size;
    let ap = geom.aperture_size;
    let pos = geom.aperture_position;
    let paper = geom.photo_paper_size(config.underlap);
    let borders = geom.borders();

    let board_geom = rect_points(0.0, 0.0, board.width, board.height);
    let aperture_geom = rect_points(pos.x, pos.y, ap.width, ap.height);
    let photo_geom = rect_points(
        pos.x + config.photo_border,
        pos.y + config.photo_border,
        config.photo_width,
        config.photo_height,
    );
    let paper_geom = rect_points(
        pos.x - config.underlap,
        pos.y - config.underlap,
        paper.width,
        paper.height,
    );

    let (minx, miny, maxx, maxy) = bounds_of_all(&[
        board_geom.as_slice(),
        aperture_geom.as_slice(),
        photo_geom.as_slice(),
        paper_geom.as_slice(),
    ]);
    let dx = PAD_MM - minx;
    let dy = PAD_MM + TITLE_MM - miny;
    let total_w_mm = (maxx - minx) + PAD_MM * 2.0;
    let total_h_mm = (maxy - miny) + PAD_MM * 2.0 + TITLE_MM + CAPTION_MM;
    let w_px = (total_w_mm * px_per_mm).ceil().max(1.0) as u32;
    let h_px = (total_h_mm * px_per_mm).ceil().max(1.0) as u32;

    let font_px = (4.0 * px_per_mm).clamp(10.0, 48.0);
    let mm2px = |v: f64| v * px_per_mm;
    let to_px = |p: Point| (mm2px(p.x), mm2px(p.y));
    let label = |s: &mut String, x_mm: f64, y_mm: f64, color: &str, txt: &str| {
        s.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" stroke=\"none\" fill=\"{}\">{}</text>\n",
            mm2px(x_mm + dx),
            mm2px(y_mm + dy),
            color,
            svg_escape(txt)
        ));
    };

    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" stroke=\"#333\" fill=\"none\" stroke-width=\"1.5\" stroke-linejoin=\"round\" font-family=\"sans-serif\" font-size=\"{:.0}\">\n", w_px, h_px, w_px, h_px, font_px));
    s.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    s.push_str(&path_from_points(
        &translate_geom(&board_geom, dx, dy),
        &to_px,
        &format!("id=\"board\" fill=\"{BOARD_FILL}\""),
    ));
    s.push_str(&path_from_points(
        &translate_geom(&aperture_geom, dx, dy),
        &to_px,
        "id=\"aperture\" fill=\"#ffffff\"",
    ));
    s.push_str(&path_from_points(
        &translate_geom(&photo_geom, dx, dy),
        &to_px,
        &format!("id=\"photo\" fill=\"{PHOTO_FILL}\" stroke=\"none\""),
    ));
    s.push_str(&path_from_points(
        &translate_geom(&paper_geom, dx, dy),
        &to_px,
        "id=\"print\" stroke=\"#999\" stroke-width=\"1\" stroke-dasharray=\"6 4\"",
    ));

    // title: overall board size
    label(
        &mut s,
        board.width / 2.0,
        miny - TITLE_MM / 2.0,
        "#333",
        &format!("Board {}", unit.format_pair(board.width, board.height)),
    );
    label(
        &mut s,
        pos.x + ap.width / 2.0,
        pos.y + ap.height / 2.0,
        "#222",
        &format!("Aperture {}", unit.format_pair(ap.width, ap.height)),
    );

    // border widths, each centred in its margin
    let top = borders.top;
    let left = borders.left;
    let mid_x = pos.x + ap.width / 2.0;
    let mid_y = pos.y + ap.height / 2.0;
    label(&mut s, mid_x, top / 2.0, DIM_COLOR, &unit.format(borders.top));
    label(
        &mut s,
        mid_x,
        board.height - borders.bottom / 2.0,
        DIM_COLOR,
        &unit.format(borders.bottom),
    );
    label(&mut s, left / 2.0, mid_y, DIM_COLOR, &unit.format(borders.left));
    label(
        &mut s,
        board.width - borders.right / 2.0,
        mid_y,
        DIM_COLOR,
        &unit.format(borders.right),
    );

    let caption_y = maxy + PAD_MM / 2.0 + CAPTION_MM / 2.0;
    label(
        &mut s,
        board.width / 2.0,
        caption_y,
        DIM_COLOR,
        &format!("Print {}", unit.format_pair(paper.width, paper.height)),
    );
    if geom.is_degenerate() {
        label(
            &mut s,
            board.width / 2.0,
            caption_y + CAPTION_MM / 2.0,
            WARN_COLOR,
            "Aperture does not fit on the board",
        );
    }

    s.push_str("</svg>\n");
    log::debug!("preview svg {}x{} px ({} bytes)", w_px, h_px, s.len());
    (s, w_px, h_px)
}
