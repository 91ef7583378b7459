//! Test helpers: generated bitmaps and one-call analysis

use crate::analyzer::Analyzer;
use crate::config::LintOptions;
use crate::diagnostic::Diagnostic;
use crate::ignore::IgnorePolicy;
use crate::issue::{IssueId, IssueRegistry};
use crate::report::Report;
use crate::signals::UsageSignals;
use iconlint_resource::{MemoryProvider, ResourceSnapshot};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Solid-color PNG
pub fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    encode(RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// Colorful PNG whose bytes differ for every `seed`
pub fn pattern_png(width: u32, height: u32, seed: u8) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x as u8).wrapping_mul(7).wrapping_add(seed),
            (y as u8).wrapping_mul(11),
            seed.wrapping_mul(31),
            255,
        ])
    });
    encode(img)
}

pub fn gif(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 0, 0, 255]));
    let mut bytes = Vec::new();
    {
        let mut encoder = image::codecs::gif::GifEncoder::new(&mut bytes);
        encoder.encode_frame(image::Frame::new(img)).unwrap();
    }
    bytes
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([10, 200, 30]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    bytes
}

fn encode(img: RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn registry(issues: &[IssueId]) -> IssueRegistry {
    let mut registry = IssueRegistry::builtin();
    registry.enable_only(issues);
    registry
}

/// Analyze with only `issues` enabled
pub fn run(provider: &MemoryProvider, options: &LintOptions, issues: &[IssueId]) -> Vec<Diagnostic> {
    let snapshot = ResourceSnapshot::load(provider).unwrap();
    let registry = registry(issues);
    Analyzer::new(&registry, options).analyze(&snapshot)
}

/// Analyze with collaborators
pub fn run_with(
    provider: &MemoryProvider,
    options: &LintOptions,
    issues: &[IssueId],
    ignore: &dyn IgnorePolicy,
    signals: &dyn UsageSignals,
) -> Vec<Diagnostic> {
    let snapshot = ResourceSnapshot::load(provider).unwrap();
    let registry = registry(issues);
    Analyzer::new(&registry, options)
        .with_ignore(ignore)
        .with_signals(signals)
        .analyze(&snapshot)
}

/// Console text of an analysis
pub fn text(provider: &MemoryProvider, options: &LintOptions, issues: &[IssueId]) -> String {
    Report::new(run(provider, options, issues)).to_text()
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
