use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use mount_core::{
    Advisor, AdvisoryError, AdvisoryRequest, AdvisoryResponse, BoardSource, DisplayUnit,
    MountConfig, MountGeometry, PAPER_SIZES, parse_advisory_response, request_suggestion,
};
use mount_preview::{build_preview_svg, render_png};

fn load_config(path: &Path) -> Result<MountConfig> {
    MountConfig::load(path).with_context(|| format!("cannot load config {}", path.display()))
}

fn write_config(cfg: &MountConfig, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            cfg.save(path)
                .with_context(|| format!("cannot write config {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", cfg.to_json_pretty()?),
    }
    Ok(())
}

pub fn init(output: Option<&Path>) -> Result<()> {
    write_config(&MountConfig::default(), output)
}

pub fn compute(config: &Path, unit: DisplayUnit, json: bool) -> Result<()> {
    let cfg = load_config(config)?;
    let geom = mount_core::compute(&cfg);
    if json {
        println!("{}", serde_json::to_string_pretty(&geom)?);
    } else {
        print!("{}", report(&cfg, &geom, unit));
    }
    Ok(())
}

pub fn preview(config: &Path, output: &Path, px_per_mm: f64, unit: DisplayUnit) -> Result<()> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if ext != "svg" && ext != "png" {
        bail!(
            "unsupported output format `{}`: use .svg or .png",
            output.display()
        );
    }

    let cfg = load_config(config)?;
    let geom = mount_core::compute(&cfg);
    let (svg, w_px, h_px) = build_preview_svg(&cfg, &geom, unit, px_per_mm);
    let bytes = if ext == "svg" {
        svg.into_bytes()
    } else {
        render_png(&svg, w_px, h_px).context("cannot render preview")?
    };
    fs::write(output, bytes).with_context(|| format!("cannot write {}", output.display()))?;
    log::info!("wrote {} ({}x{} px)", output.display(), w_px, h_px);
    Ok(())
}

pub fn toggle(config: &Path, output: Option<&Path>) -> Result<()> {
    let cfg = load_config(config)?;
    write_config(&cfg.toggle_orientation(), output)
}

/// Advisor that answers with a reply already saved to disk.
struct SavedReply(String);

impl Advisor for SavedReply {
    fn advise(&self, _: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError> {
        parse_advisory_response(&self.0)
    }
}

pub fn suggest(config: &Path, response: &Path, output: Option<&Path>) -> Result<()> {
    let cfg = load_config(config)?;
    let txt = fs::read_to_string(response)
        .with_context(|| format!("cannot read advisory response {}", response.display()))?;
    let request = AdvisoryRequest::new(String::new(), cfg, DisplayUnit::Mm);
    let (resp, out) = match request_suggestion(&SavedReply(txt), &request) {
        Ok(r) => r,
        Err(e) => {
            log::debug!("{e}");
            bail!("{}", e.user_notice());
        }
    };
    eprintln!("{}", resp.suggestion);
    if !resp.reasoning.is_empty() {
        eprintln!("{}", resp.reasoning);
    }
    write_config(&out, output)
}

pub fn papers(unit: DisplayUnit) -> Result<()> {
    for p in PAPER_SIZES {
        println!("{:<8} {}", p.name, unit.format_pair(p.width, p.height));
    }
    Ok(())
}

fn board_source_line(source: &BoardSource) -> String {
    match source {
        BoardSource::Preset(name) => format!("preset {name}"),
        BoardSource::Fallback(name) => format!("unknown preset {name:?}, using default board"),
        BoardSource::Custom => "custom size".to_string(),
        BoardSource::ManualBorders => "sized from borders".to_string(),
    }
}

fn report(cfg: &MountConfig, geom: &MountGeometry, unit: DisplayUnit) -> String {
    let b = geom.borders();
    let paper = geom.photo_paper_size(cfg.underlap);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Board:        {} ({})",
        unit.format_pair(geom.board_size.width, geom.board_size.height),
        board_source_line(&geom.board_source)
    );
    let _ = writeln!(
        out,
        "Aperture:     {}",
        unit.format_pair(geom.aperture_size.width, geom.aperture_size.height)
    );
    let _ = writeln!(
        out,
        "Position:     x {}, y {}",
        unit.format(geom.aperture_position.x),
        unit.format(geom.aperture_position.y)
    );
    let _ = writeln!(
        out,
        "Borders:      top {}, bottom {}, left {}, right {}",
        unit.format(b.top),
        unit.format(b.bottom),
        unit.format(b.left),
        unit.format(b.right)
    );
    let _ = writeln!(
        out,
        "Photo paper:  {}",
        unit.format_pair(paper.width, paper.height)
    );
    if geom.is_degenerate() {
        let _ = writeln!(out, "Warning:      aperture does not fit on the board");
    }
    out
}
