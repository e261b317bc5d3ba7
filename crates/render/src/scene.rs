//! A small typed drawing program that serializes to SVG markup.
//!
//! Card artwork is built as a tree of [`Element`]s in logical units and only
//! turned into markup at the rasterization boundary, so layout can be
//! inspected in tests without parsing SVG.

use bingo_types::Color;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub size: f32,
    pub weight: u16,
    pub fill: Color,
    pub anchor: Option<Anchor>,
    pub letter_spacing: Option<f32>,
}

impl TextRun {
    pub fn new(
        x: f32,
        y: f32,
        content: impl Into<String>,
        size: f32,
        weight: u16,
        fill: Color,
    ) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            size,
            weight,
            fill,
            anchor: None,
            letter_spacing: None,
        }
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn spaced(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub translate: (f32, f32),
    pub scale: Option<f32>,
}

impl Transform {
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: (x, y),
            scale: None,
        }
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Full-canvas diagonal gradient from `from` (top-left) to `to`.
    Background { from: Color, to: Color },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
    Path { d: &'static str, fill: Color },
    Text(TextRun),
    Group {
        transform: Transform,
        anchor: Option<Anchor>,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn group(transform: Transform, children: Vec<Element>) -> Self {
        Element::Group {
            transform,
            anchor: None,
            children,
        }
    }

    /// Text runs beneath this element, depth-first.
    pub fn texts(&self) -> Vec<&TextRun> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a TextRun>) {
        match self {
            Element::Text(run) => out.push(run),
            Element::Group { children, .. } => {
                children.iter().for_each(|c| c.collect_texts(out))
            }
            _ => {}
        }
    }
}

/// A resolution-independent drawing in a fixed logical canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CardScene {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

const FONT_FAMILY: &str = "Inter, system-ui, -apple-system, sans-serif";
const GRADIENT_ID: &str = "bgGrad";

impl CardScene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Pixel dimensions at `scale`, rounded to whole pixels.
    pub fn pixel_size(&self, scale: f32) -> (u32, u32) {
        (
            (self.width * scale).round() as u32,
            (self.height * scale).round() as u32,
        )
    }

    /// Every text run in document order.
    pub fn texts(&self) -> Vec<&TextRun> {
        self.elements.iter().flat_map(|e| e.texts()).collect()
    }

    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
            w = self.width,
            h = self.height,
        )?;
        for element in &self.elements {
            write_element(f, element, 1)?;
        }
        f.write_str("</svg>\n")
    }
}

/// Escapes text content for embedding in markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn write_element(out: &mut impl Write, element: &Element, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    match element {
        Element::Background { from, to } => {
            writeln!(
                out,
                r#"<defs><linearGradient id="{GRADIENT_ID}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="{from}"/><stop offset="100%" stop-color="{to}"/></linearGradient></defs>"#
            )?;
            indent(out, depth)?;
            writeln!(out, r#"<rect width="100%" height="100%" fill="url(#{GRADIENT_ID})"/>"#)
        }
        Element::Rect {
            x,
            y,
            width,
            height,
            radius,
            fill,
            stroke,
        } => {
            write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{radius}" ry="{radius}" fill="{fill}""#
            )?;
            if let Some(s) = stroke {
                write!(out, r#" stroke="{}" stroke-width="{}""#, s.color, s.width)?;
            }
            out.write_str("/>\n")
        }
        Element::Circle { cx, cy, r, fill } => {
            writeln!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#)
        }
        Element::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => writeln!(
            out,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{}"/>"#,
            stroke.color, stroke.width
        ),
        Element::Path { d, fill } => writeln!(out, r#"<path d="{d}" fill="{fill}"/>"#),
        Element::Text(run) => {
            write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" fill="{}""#,
                run.x, run.y, run.size, run.weight, run.fill
            )?;
            if let Some(anchor) = run.anchor {
                write!(out, r#" text-anchor="{}""#, anchor.as_str())?;
            }
            if let Some(spacing) = run.letter_spacing {
                write!(out, r#" letter-spacing="{}""#, spacing)?;
            }
            writeln!(out, ">{}</text>", escape(&run.content))
        }
        Element::Group {
            transform,
            anchor,
            children,
        } => {
            let (tx, ty) = transform.translate;
            write!(out, r#"<g transform="translate({tx}, {ty})"#)?;
            if let Some(scale) = transform.scale {
                write!(out, " scale({scale})")?;
            }
            out.write_char('"')?;
            if let Some(anchor) = anchor {
                write!(out, r#" text-anchor="{}""#, anchor.as_str())?;
            }
            out.write_str(">\n")?;
            for child in children {
                write_element(out, child, depth + 1)?;
            }
            indent(out, depth)?;
            out.write_str("</g>\n")
        }
    }
}
