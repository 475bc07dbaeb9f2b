use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    animation::{
        config::AnimationConfig,
        walk::{WalkReport, animate_tree},
    },
    document::{node::Document, parse::parse_document, write::write_document},
    foundation::error::SvgLineResult,
    geometry::path_length::{KurboPathLength, PathLengthOracle},
};

/// Animate an already parsed document in place.
#[tracing::instrument(skip(doc, cfg, oracle), fields(root = %doc.root.name))]
pub fn animate_document(
    doc: &mut Document,
    cfg: &AnimationConfig,
    oracle: &dyn PathLengthOracle,
) -> SvgLineResult<WalkReport> {
    cfg.validate()?;
    let report = animate_tree(&mut doc.root, cfg, oracle)?;
    tracing::debug!(
        shapes = report.shapes,
        style_nodes = report.style_nodes,
        "document animated"
    );
    Ok(report)
}

/// Parse markup, animate it with the default path-length oracle, and render it back.
pub fn animate_str(src: &str, cfg: &AnimationConfig) -> SvgLineResult<String> {
    let mut doc = parse_document(src)?;
    animate_document(&mut doc, cfg, &KurboPathLength::default())?;
    write_document(&doc)
}

/// Read `src`, animate it, and write the result to `dst`.
///
/// The output is fully rendered before `dst` is touched, so any failure leaves no file behind.
/// Missing parent directories of `dst` are created.
#[tracing::instrument(skip(src, dst, cfg), fields(input = %src.display(), output = %dst.display()))]
pub fn animate_file(src: &Path, dst: &Path, cfg: &AnimationConfig) -> SvgLineResult<WalkReport> {
    let text = std::fs::read_to_string(src)
        .with_context(|| format!("read svg '{}'", src.display()))?;

    let mut doc = parse_document(&text)?;
    let report = animate_document(&mut doc, cfg, &KurboPathLength::default())?;
    let out = write_document(&doc)?;

    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(dst, out).with_context(|| format!("write svg '{}'", dst.display()))?;

    tracing::info!(shapes = report.shapes, "wrote animated svg");
    Ok(report)
}

/// `<dir>/<stem>-animated.svg` next to the source file.
pub fn default_destination(src: &Path) -> PathBuf {
    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    src.with_file_name(format!("{stem}-animated.svg"))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/animate.rs"]
mod tests;
