//! Social preview ("Open Graph") image: a fixed 1200×630 card composed from
//! the title, tag summary and category of a page.
//!
//! Pure and deterministic: identical parameters give byte-identical PNGs.
//! Rendering is CPU-bound and runs inside `tokio::task::spawn_blocking`.

pub mod canvas;
pub mod glyphs;
pub mod handlers;

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, RgbImage};
use thiserror::Error;

use canvas::{hex, Canvas, Color, Rect};
use glyphs::{ellipsize, fold_text, wrap, TextStyle};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

const DEFAULT_TITLE: &str = "Project";
const DEFAULT_CATEGORY: &str = "Project";
/// Longer parameters are cut before layout so work stays bounded.
const MAX_PARAM_CHARS: usize = 200;

// Layout, in pixels.
const CARD_MAX_WIDTH: u32 = 1000;
const CARD_MARGIN: u32 = 40;
const CARD_PADDING: u32 = 60;
const CARD_RADIUS: f32 = 24.0;
const CARD_OPACITY: f32 = 0.95;
const TITLE_MAX_LINES: usize = 3;
const GAP_AFTER_CATEGORY: u32 = 16;
const GAP_AFTER_TITLE: u32 = 24;
const GAP_AFTER_TAGS: u32 = 16;

// Text styles: scale × 8px cell ≈ the CSS font sizes of the design.
const CATEGORY_STYLE: TextStyle = TextStyle::new(3, false);
const TITLE_STYLE: TextStyle = TextStyle::new(6, true);
const TAGS_STYLE: TextStyle = TextStyle::new(2, false);
const FOOTER_STYLE: TextStyle = TextStyle::new(2, true);

const GRADIENT_ANGLE: f32 = 135.0;
const GRADIENT_FROM: Color = hex(0x0891b2);
const GRADIENT_TO: Color = hex(0x10b981);
const CARD_COLOR: Color = hex(0xffffff);
const SHADOW_COLOR: Color = hex(0x000000);
const ACCENT_COLOR: Color = hex(0x0891b2);
const TITLE_COLOR: Color = hex(0x1e293b);
const TAGS_COLOR: Color = hex(0x64748b);

#[derive(Debug, Error)]
pub enum OgError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Raw query string parameters of `GET /api/og`.
#[derive(Debug, Default)]
pub struct OgQuery {
    pub title: Option<String>,
    pub tags: Option<String>,
    pub category: Option<String>,
}

impl OgQuery {
    /// Collects the known keys from decoded query pairs. The first value of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut query.title,
                "tags" => &mut query.tags,
                "category" => &mut query.category,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Card text with defaults applied. An empty `tags` omits the tag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgParams {
    pub title: String,
    pub tags: String,
    pub category: String,
}

impl OgParams {
    /// Absent and empty parameters both take their defaults.
    pub fn from_query(query: OgQuery) -> Self {
        let pick = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| v.chars().take(MAX_PARAM_CHARS).collect())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            title: pick(query.title, DEFAULT_TITLE),
            tags: pick(query.tags, ""),
            category: pick(query.category, DEFAULT_CATEGORY),
        }
    }
}

/// One laid-out line of card text.
struct Line {
    text: String,
    style: TextStyle,
    color: Color,
    /// Extra space below this line, on top of the style's line height.
    gap_after: u32,
}

/// Composes the card: gradient background, shadowed card, centred text stack.
pub fn render_card(params: &OgParams, footer: &str) -> RgbImage {
    let content_width = CARD_MAX_WIDTH - 2 * CARD_PADDING;
    let lines = layout_lines(params, footer, content_width);

    let text_width = lines
        .iter()
        .map(|l| l.style.measure(&l.text))
        .max()
        .unwrap_or(0);
    let text_height: u32 = lines
        .iter()
        .map(|l| l.style.line_height() + l.gap_after)
        .sum();

    let card_w = (text_width + 2 * CARD_PADDING).min(CARD_MAX_WIDTH).min(WIDTH - 2 * CARD_MARGIN);
    let card_h = (text_height + 2 * CARD_PADDING).min(HEIGHT - 2 * CARD_MARGIN);
    let card = Rect {
        x: ((WIDTH - card_w) / 2) as f32,
        y: ((HEIGHT - card_h) / 2) as f32,
        w: card_w as f32,
        h: card_h as f32,
    };

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    canvas.fill_linear_gradient(GRADIENT_ANGLE, GRADIENT_FROM, GRADIENT_TO);
    draw_shadow(&mut canvas, card);
    canvas.fill_rounded_rect(card, CARD_RADIUS, CARD_COLOR, CARD_OPACITY);

    let mut y = card.y as u32 + CARD_PADDING;
    for line in &lines {
        let width = line.style.measure(&line.text);
        let x = card.x as u32 + (card_w - width.min(card_w)) / 2;
        // Centre the glyphs vertically within the line box.
        let leading = (line.style.line_height() - line.style.glyph_height()) / 2;
        canvas.draw_text(x, y + leading, &line.text, line.style, line.color);
        y += line.style.line_height() + line.gap_after;
    }

    canvas.into_image()
}

/// Renders and PNG-encodes the card.
pub fn render_png(params: &OgParams, footer: &str) -> Result<Vec<u8>, OgError> {
    let img = render_card(params, footer);
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(png)
}

fn layout_lines(params: &OgParams, footer: &str, content_width: u32) -> Vec<Line> {
    let mut lines = Vec::new();

    lines.push(Line {
        text: ellipsize(
            &fold_text(&params.category),
            CATEGORY_STYLE.max_chars(content_width),
        ),
        style: CATEGORY_STYLE,
        color: ACCENT_COLOR,
        gap_after: GAP_AFTER_CATEGORY,
    });

    let title_lines = wrap(
        &fold_text(&params.title),
        TITLE_STYLE.max_chars(content_width),
        TITLE_MAX_LINES,
    );
    let title_count = title_lines.len();
    for (i, text) in title_lines.into_iter().enumerate() {
        lines.push(Line {
            text,
            style: TITLE_STYLE,
            color: TITLE_COLOR,
            gap_after: if i + 1 == title_count { GAP_AFTER_TITLE } else { 0 },
        });
    }

    let tags = fold_text(params.tags.trim());
    if !tags.is_empty() {
        lines.push(Line {
            text: ellipsize(&tags, TAGS_STYLE.max_chars(content_width)),
            style: TAGS_STYLE,
            color: TAGS_COLOR,
            gap_after: GAP_AFTER_TAGS,
        });
    }

    lines.push(Line {
        text: ellipsize(&fold_text(footer), FOOTER_STYLE.max_chars(content_width)),
        style: FOOTER_STYLE,
        color: ACCENT_COLOR,
        gap_after: 0,
    });

    lines
}

/// Approximates `box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25)` with a few
/// stacked translucent layers.
fn draw_shadow(canvas: &mut Canvas, card: Rect) {
    const LAYERS: u32 = 5;
    const OFFSET_Y: f32 = 25.0;
    const SPREAD: f32 = -12.0;
    const BLUR: f32 = 50.0;
    const TOTAL_ALPHA: f32 = 0.25;

    let base = card.offset(0.0, OFFSET_Y).inflate(SPREAD);
    for i in 0..LAYERS {
        let grow = BLUR / 2.0 * (i as f32 + 1.0) / LAYERS as f32;
        canvas.fill_rounded_rect(
            base.inflate(grow),
            CARD_RADIUS + grow,
            SHADOW_COLOR,
            TOTAL_ALPHA / LAYERS as f32,
        );
    }
}
