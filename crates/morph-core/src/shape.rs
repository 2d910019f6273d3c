//! Shape descriptors extracted from circle-only SVG documents.

use crate::error::ShapeError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
}

impl Circle {
    pub const fn new(cx: f32, cy: f32, r: f32) -> Self {
        Self { cx, cy, r }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.cx, self.cy)
    }
}

/// One logo state: circles centered so that `(0, 0)` is the visual center,
/// plus the document size they were authored in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeDescriptor {
    pub circles: Vec<Circle>,
    pub width: f32,
    pub height: f32,
}

impl ShapeDescriptor {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a descriptor from circles in document coordinates, recentering
    /// them on the middle of a `width` x `height` canvas.
    pub fn from_document_circles(circles: &[Circle], width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        let circles = circles
            .iter()
            .map(|c| Circle::new(c.cx - half.x, c.cy - half.y, c.r))
            .collect();
        Self {
            circles,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Largest uniform scale that fits the shape inside `fit_margin` of the canvas.
    ///
    /// A shape without a usable document size is drawn at scale 1.
    pub fn fit_scale(&self, canvas: Vec2, fit_margin: f32) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return 1.0;
        }
        let sx = canvas.x * fit_margin / self.width;
        let sy = canvas.y * fit_margin / self.height;
        sx.min(sy)
    }

    /// Parse an SVG document, collecting every `<circle>` in document order.
    pub fn parse_svg(text: &str) -> Result<Self, ShapeError> {
        let mut opts = roxmltree::ParsingOptions::default();
        opts.allow_dtd = true;
        let doc = roxmltree::Document::parse_with_options(text, opts)?;
        let svg = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "svg")
            .ok_or(ShapeError::MissingSvgRoot)?;

        let mut width = svg.attribute("width").and_then(parse_length).unwrap_or(0.0);
        let mut height = svg.attribute("height").and_then(parse_length).unwrap_or(0.0);
        if width <= 0.0 || height <= 0.0 {
            if let Some([_, _, vw, vh]) = svg.attribute("viewBox").and_then(parse_view_box) {
                if width <= 0.0 {
                    width = vw;
                }
                if height <= 0.0 {
                    height = vh;
                }
            }
        }

        let circles: Vec<Circle> = svg
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "circle")
            .map(|n| Circle::new(numeric_attr(n, "cx"), numeric_attr(n, "cy"), numeric_attr(n, "r")))
            .collect();

        Ok(Self::from_document_circles(&circles, width, height))
    }

    /// Like [`ShapeDescriptor::parse_svg`] but degrades to an empty shape.
    pub fn from_svg_lossy(label: &str, text: &str) -> Self {
        match Self::parse_svg(text) {
            Ok(shape) => {
                if shape.is_empty() {
                    log::warn!("[shapes] {} has no circles", label);
                }
                shape
            }
            Err(e) => {
                log::warn!("[shapes] {} unparseable: {}", label, e);
                Self::empty()
            }
        }
    }
}

/// Lenient numeric attribute parsing: the longest leading numeric prefix wins,
/// so `"300px"` reads as 300.
pub fn parse_length(raw: &str) -> Option<f32> {
    let s = raw.trim_start();
    let end = s
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    (1..=end)
        .rev()
        .filter(|i| s.is_char_boundary(*i))
        .find_map(|i| s[..i].parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

fn numeric_attr(node: roxmltree::Node<'_, '_>, name: &str) -> f32 {
    node.attribute(name).and_then(parse_length).unwrap_or(0.0)
}

fn parse_view_box(raw: &str) -> Option<[f32; 4]> {
    let mut out = [0.0_f32; 4];
    let mut parts = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    for slot in out.iter_mut() {
        *slot = parts.next()?.parse().ok()?;
    }
    Some(out)
}
