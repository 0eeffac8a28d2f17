//! QR code rendering on top of the `qrcode` crate.
//!
//! Symbols are encoded by `qrcode`; this module only lays the modules out as
//! SVG (or dense unicode for terminals) and applies styling options.

use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::LazyLock;

use askama::filters::{Escaper, Html};
use base64::Engine as _;
use qrcode::render::unicode::Dense1x2;
use qrcode::{Color, EcLevel, QrCode};
use regex::Regex;

use crate::error::QrError;

/// Quiet zone width, in modules, when a margin is requested.
const MARGIN_SIZE: usize = 4;

/// Fraction of the rendered size used for images without explicit dimensions.
const DEFAULT_IMAGE_SCALE: f64 = 0.1;

pub const DEFAULT_SIZE: u32 = 128;
pub const DEFAULT_FG_COLOR: &str = "#000000";
pub const DEFAULT_BG_COLOR: &str = "#FFFFFF";

static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    #[default]
    L,
    M,
    Q,
    H,
}

impl FromStr for ErrorCorrection {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QrError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Image drawn over the centre (or a given position) of the symbol.
///
/// Dimensions and position are in output pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSettings {
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Clears the modules lying under the image.
    pub excavate: bool,
}

impl ImageSettings {
    /// A centred image of the given size.
    pub fn centered(src: impl Into<String>, width: u32, height: u32, excavate: bool) -> Self {
        Self {
            src: src.into(),
            width: Some(width),
            height: Some(height),
            x: None,
            y: None,
            excavate,
        }
    }
}

/// Styling options recognised by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct QrOptions {
    pub size: u32,
    pub fg_color: String,
    pub bg_color: String,
    pub level: ErrorCorrection,
    pub include_margin: bool,
    pub image: Option<ImageSettings>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fg_color: DEFAULT_FG_COLOR.to_string(),
            bg_color: DEFAULT_BG_COLOR.to_string(),
            level: ErrorCorrection::L,
            include_margin: false,
            image: None,
        }
    }
}

impl QrOptions {
    /// Plain black on white symbol.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Indigo on slate with high error correction and a quiet zone.
    pub fn styled() -> Self {
        Self {
            fg_color: "#4F46E5".to_string(),
            bg_color: "#F8FAFC".to_string(),
            level: ErrorCorrection::H,
            include_margin: true,
            ..Self::default()
        }
    }

    /// High error correction with a centred, excavated 24x24 image.
    pub fn high_error_correction(image_src: impl Into<String>) -> Self {
        Self {
            level: ErrorCorrection::H,
            image: Some(ImageSettings::centered(image_src, 24, 24, true)),
            ..Self::default()
        }
    }

    /// Checks colors and size.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidColor`] or [`QrError::InvalidSize`].
    pub fn validate(&self) -> Result<(), QrError> {
        if self.size == 0 {
            return Err(QrError::InvalidSize);
        }
        for color in [&self.fg_color, &self.bg_color] {
            if !COLOR_REGEX.is_match(color) {
                return Err(QrError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }
}

/// Image placement in module units, plus the area to excavate.
#[derive(Debug, Clone, PartialEq)]
struct ImagePlacement {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    excavation: Option<Excavation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Excavation {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

fn place_image(modules: usize, options: &QrOptions, image: &ImageSettings) -> ImagePlacement {
    let margin = if options.include_margin { MARGIN_SIZE } else { 0 };
    let num_cells = (modules + margin * 2) as f64;
    let default_size = (options.size as f64 * DEFAULT_IMAGE_SCALE).floor();
    let scale = num_cells / options.size as f64;

    let width = image.width.map_or(default_size, f64::from) * scale;
    let height = image.height.map_or(default_size, f64::from) * scale;
    let x = image
        .x
        .map_or(modules as f64 / 2.0 - width / 2.0, |x| x * scale);
    let y = image
        .y
        .map_or(modules as f64 / 2.0 - height / 2.0, |y| y * scale);

    let excavation = image.excavate.then(|| {
        let floor_x = x.floor().max(0.0);
        let floor_y = y.floor().max(0.0);
        Excavation {
            x: floor_x as usize,
            y: floor_y as usize,
            width: (width + x - floor_x).ceil().max(0.0) as usize,
            height: (height + y - floor_y).ceil().max(0.0) as usize,
        }
    });

    ImagePlacement {
        x,
        y,
        width,
        height,
        excavation,
    }
}

/// Returns the dark/light grid of the symbol, row-major.
fn module_grid(code: &QrCode) -> Vec<Vec<bool>> {
    let width = code.width();
    (0..width)
        .map(|y| (0..width).map(|x| code[(x, y)] == Color::Dark).collect())
        .collect()
}

fn excavate(grid: &mut [Vec<bool>], area: Excavation) {
    for row in grid.iter_mut().skip(area.y).take(area.height) {
        for cell in row.iter_mut().skip(area.x).take(area.width) {
            *cell = false;
        }
    }
}

/// Builds one path of horizontal dark-module runs.
fn module_path(grid: &[Vec<bool>], margin: usize) -> String {
    let mut path = String::new();
    for (y, row) in grid.iter().enumerate() {
        let mut start: Option<usize> = None;
        for (x, &dark) in row.iter().enumerate() {
            match (dark, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    push_run(&mut path, s, x, y, margin);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            push_run(&mut path, s, row.len(), y, margin);
        }
    }
    path
}

fn push_run(path: &mut String, start: usize, end: usize, y: usize, margin: usize) {
    let _ = write!(
        path,
        "M{} {}h{}v1H{}z",
        start + margin,
        y + margin,
        end - start,
        start + margin
    );
}

/// Renders `value` as an SVG document.
///
/// # Errors
///
/// Returns [`QrError`] if the options are invalid or the payload does not
/// fit in a QR symbol at the requested error correction level.
pub fn render_svg(value: &str, options: &QrOptions) -> Result<String, QrError> {
    options.validate()?;

    let code = QrCode::with_error_correction_level(value, options.level.into())?;
    let modules = code.width();
    let margin = if options.include_margin { MARGIN_SIZE } else { 0 };
    let num_cells = modules + margin * 2;

    let mut grid = module_grid(&code);
    let placement = options
        .image
        .as_ref()
        .map(|image| (image, place_image(modules, options, image)));

    if let Some((_, ImagePlacement {
        excavation: Some(area),
        ..
    })) = &placement
    {
        excavate(&mut grid, *area);
    }

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" height="{size}" width="{size}" viewBox="0 0 {n} {n}">"#,
        size = options.size,
        n = num_cells
    );
    let _ = write!(
        svg,
        r#"<path fill="{}" d="M0,0 h{n}v{n}H0z" shape-rendering="crispEdges"/>"#,
        options.bg_color,
        n = num_cells
    );
    let _ = write!(
        svg,
        r#"<path fill="{}" d="{}" shape-rendering="crispEdges"/>"#,
        options.fg_color,
        module_path(&grid, margin)
    );
    if let Some((image, placement)) = placement {
        svg.push_str(r#"<image href=""#);
        let _ = Html.write_escaped_str(&mut svg, &image.src);
        let _ = write!(
            svg,
            r#"" height="{}" width="{}" x="{}" y="{}" preserveAspectRatio="none"/>"#,
            placement.height,
            placement.width,
            placement.x + margin as f64,
            placement.y + margin as f64
        );
    }
    svg.push_str("</svg>");

    Ok(svg)
}

/// Renders `value` with dense unicode blocks for terminal output.
///
/// # Errors
///
/// Returns [`QrError::Encode`] if the payload does not fit in a QR symbol.
pub fn render_terminal(value: &str) -> Result<String, QrError> {
    let code = QrCode::new(value)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .build())
}

/// Encodes an SVG document as a `data:` URI.
pub fn svg_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}

/// A card of QR variants for a single value.
#[derive(Debug, Clone)]
pub struct QrCard {
    pub title: String,
    pub value: String,
    pub show_styled: bool,
    pub show_advanced: bool,
}

impl QrCard {
    /// A full card titled "QR Code Generator" with every variant.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            title: "QR Code Generator".to_string(),
            value: value.into(),
            show_styled: true,
            show_advanced: true,
        }
    }

    /// An untitled card showing only the basic variant.
    pub fn compact(value: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            value: value.into(),
            show_styled: false,
            show_advanced: false,
        }
    }

    /// The "QR Code Samples" card for `https://example.com`.
    pub fn samples() -> Self {
        Self {
            title: "QR Code Samples".to_string(),
            ..Self::new("https://example.com")
        }
    }
}

/// One rendered variant of a card.
///
/// A payload that cannot be encoded yields `svg: None` and the reason in
/// `error`, so a page can still show the remaining content.
#[derive(Debug, Clone)]
pub struct RenderedQr {
    pub label: &'static str,
    pub svg: Option<String>,
    pub error: Option<String>,
}

impl RenderedQr {
    fn render(label: &'static str, value: &str, options: &QrOptions) -> Self {
        match render_svg(value, options) {
            Ok(svg) => Self {
                label,
                svg: Some(svg),
                error: None,
            },
            Err(e) => {
                tracing::warn!(label, "QR rendering failed: {}", e);
                Self {
                    label,
                    svg: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// The SVG as a downloadable `data:` URI.
    pub fn data_uri(&self) -> Option<String> {
        self.svg.as_deref().map(svg_data_uri)
    }
}

/// Renders QR cards with the configured overlay image.
#[derive(Debug, Clone)]
pub struct QrService {
    image_src: String,
}

impl QrService {
    pub fn new(image_src: impl Into<String>) -> Self {
        Self {
            image_src: image_src.into(),
        }
    }

    /// Renders `value` with explicit options.
    ///
    /// # Errors
    ///
    /// See [`render_svg`].
    pub fn render(&self, value: &str, options: &QrOptions) -> Result<String, QrError> {
        render_svg(value, options)
    }

    /// Renders the variants enabled on `card`, in display order.
    pub fn render_card(&self, card: &QrCard) -> Vec<RenderedQr> {
        let mut variants = vec![RenderedQr::render(
            "Basic QR Code",
            &card.value,
            &QrOptions::basic(),
        )];

        if card.show_styled {
            variants.push(RenderedQr::render(
                "Styled QR Code",
                &card.value,
                &QrOptions::styled(),
            ));
        }

        if card.show_advanced {
            variants.push(RenderedQr::render(
                "High Error Correction QR Code",
                &card.value,
                &QrOptions::high_error_correction(self.image_src.clone()),
            ));
        }

        variants
    }
}
