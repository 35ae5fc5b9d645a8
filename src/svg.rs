use crate::LayoutError;
use crate::consts::{GRID_ROWS, MAX_MONTH};
use crate::layout::GridConfig;
use std::fmt::{self, Write};

// Presentation constants (SVG user units / CSS color keywords)

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const GRID_STROKE: &str = "lightgrey";
const HEADER_STROKE_WIDTH: f64 = 1.0;
const DAY_STROKE_WIDTH: f64 = 2.0;

const HEADER_FILL: &str = "black";
const HEADER_TEXT_FILL: &str = "white";
const ROW_FILL: &str = "white";
const WEEKEND_CELL_FILL: &str = "black";
const WEEKEND_TEXT_FILL: &str = "white";
const WEEKDAY_TEXT_FILL: &str = "black";

const TEXT_INSET_X: f64 = 6.0;
const TEXT_BASELINE_Y: f64 = 23.0;
/// The weekday label cell takes one fifth of the row width
const LABEL_CELL_DIVISOR: f64 = 5.0;

/// Error type for render operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The drawing surface refused output; nothing useful was drawn.
    #[error("Drawing surface unavailable: {0}")]
    Surface(#[from] fmt::Error),

    /// Error constructing the layout input.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A shape was emitted outside an open document.
    #[error("No open document on the drawing surface")]
    NoDocument,
}

/// Minimal drawing capability the renderer needs: a document, nested
/// groups, rectangles, and text. The layout core has no dependency on
/// any drawing technology beyond this trait; every method is fallible so
/// an absent or failing surface aborts the render immediately.
pub trait ShapeEmitter {
    /// Opens the drawing surface with the given extent in user units.
    ///
    /// # Errors
    /// Returns `RenderError` if the surface rejects output.
    fn begin_document(&mut self, width: f64, height: f64) -> Result<(), RenderError>;

    /// Closes the drawing surface.
    ///
    /// # Errors
    /// Returns `RenderError` if no document is open or the surface
    /// rejects output.
    fn end_document(&mut self) -> Result<(), RenderError>;

    /// Opens a group, optionally identified, classed, and translated.
    ///
    /// # Errors
    /// Returns `RenderError` if no document is open or the surface
    /// rejects output.
    fn begin_group(
        &mut self,
        id: Option<&str>,
        class: Option<&str>,
        translate: Option<(f64, f64)>,
    ) -> Result<(), RenderError>;

    /// Closes the innermost open group.
    ///
    /// # Errors
    /// Returns `RenderError` if no document is open or the surface
    /// rejects output.
    fn end_group(&mut self) -> Result<(), RenderError>;

    /// Draws a rectangle at the current group origin.
    ///
    /// # Errors
    /// Returns `RenderError` if no document is open or the surface
    /// rejects output.
    fn rect(
        &mut self,
        width: f64,
        height: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) -> Result<(), RenderError>;

    /// Draws a line of text offset from the current group origin.
    ///
    /// # Errors
    /// Returns `RenderError` if no document is open or the surface
    /// rejects output.
    fn text(&mut self, dx: f64, dy: f64, fill: &str, content: &str) -> Result<(), RenderError>;
}

/// `ShapeEmitter` that writes a standalone SVG document to any
/// `fmt::Write` sink.
#[derive(Debug)]
pub struct SvgEmitter<W> {
    out: W,
    depth: usize,
    opened: bool,
}

impl<W: Write> SvgEmitter<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            opened: false,
        }
    }

    /// Returns the underlying sink.
    ///
    /// # Errors
    /// Returns `RenderError::NoDocument` if no document was ever opened
    /// or tags are still open.
    pub fn finish(self) -> Result<W, RenderError> {
        if !self.opened || self.depth != 0 {
            return Err(RenderError::NoDocument);
        }
        Ok(self.out)
    }

    fn indent(&mut self) -> Result<(), RenderError> {
        for _ in 0..self.depth {
            self.out.write_str("  ")?;
        }
        Ok(())
    }

    fn check_open(&self) -> Result<(), RenderError> {
        if self.opened && self.depth > 0 {
            Ok(())
        } else {
            Err(RenderError::NoDocument)
        }
    }
}

/// Escapes the XML text content characters.
fn escape_text(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl<W: Write> ShapeEmitter for SvgEmitter<W> {
    fn begin_document(&mut self, width: f64, height: f64) -> Result<(), RenderError> {
        writeln!(
            self.out,
            r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {width} {height}">"#
        )?;
        self.opened = true;
        self.depth = 1;
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), RenderError> {
        if !self.opened || self.depth != 1 {
            return Err(RenderError::NoDocument);
        }
        self.depth = 0;
        writeln!(self.out, "</svg>")?;
        Ok(())
    }

    fn begin_group(
        &mut self,
        id: Option<&str>,
        class: Option<&str>,
        translate: Option<(f64, f64)>,
    ) -> Result<(), RenderError> {
        self.check_open()?;
        self.indent()?;
        self.out.write_str("<g")?;
        if let Some(id) = id {
            write!(self.out, r#" id="{id}""#)?;
        }
        if let Some(class) = class {
            write!(self.out, r#" class="{class}""#)?;
        }
        if let Some((x, y)) = translate {
            write!(self.out, r#" transform="translate({x} {y})""#)?;
        }
        self.out.write_str(">\n")?;
        self.depth += 1;
        Ok(())
    }

    fn end_group(&mut self) -> Result<(), RenderError> {
        if !self.opened || self.depth < 2 {
            return Err(RenderError::NoDocument);
        }
        self.depth -= 1;
        self.indent()?;
        self.out.write_str("</g>\n")?;
        Ok(())
    }

    fn rect(
        &mut self,
        width: f64,
        height: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) -> Result<(), RenderError> {
        self.check_open()?;
        self.indent()?;
        writeln!(
            self.out,
            r#"<rect width="{width}" height="{height}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#
        )?;
        Ok(())
    }

    fn text(&mut self, dx: f64, dy: f64, fill: &str, content: &str) -> Result<(), RenderError> {
        self.check_open()?;
        self.indent()?;
        writeln!(
            self.out,
            r#"<text class="text" dx="{dx}" dy="{dy}" text-anchor="start" fill="{fill}">{}</text>"#,
            escape_text(content)
        )?;
        Ok(())
    }
}

/// Draws the yearly grid through an emitter: one translated block per
/// month with a header row, then one row per day with the weekday label
/// cell inverted on weekends.
///
/// # Errors
/// Returns `RenderError` if the emitter's surface rejects output; the
/// render aborts at the first failure.
pub fn render<E: ShapeEmitter>(config: &GridConfig, emitter: &mut E) -> Result<(), RenderError> {
    let layout = config.layout();
    let w = config.cell_width();
    let h = config.cell_height();

    emitter.begin_document(w * f64::from(MAX_MONTH), h * GRID_ROWS)?;

    let year_id = format!("year-{}", layout.year());
    emitter.begin_group(Some(&year_id), None, None)?;

    for month in layout.months() {
        let lower_name = month.name().to_lowercase();
        emitter.begin_group(None, None, Some(month.offset(config)))?;

        let header_id = format!("{lower_name}-header");
        emitter.begin_group(Some(&header_id), None, None)?;
        emitter.rect(w, h, HEADER_FILL, GRID_STROKE, HEADER_STROKE_WIDTH)?;
        emitter.text(TEXT_INSET_X, TEXT_BASELINE_Y, HEADER_TEXT_FILL, month.name())?;
        emitter.end_group()?;

        for day in month.days() {
            let day_id = format!("{lower_name}-{}", day.day_number());
            emitter.begin_group(Some(&day_id), Some("day-group"), Some((0.0, day.y_offset(h))))?;

            emitter.rect(w, h, ROW_FILL, GRID_STROKE, DAY_STROKE_WIDTH)?;

            let (cell_fill, text_fill) = if day.is_weekend() {
                (WEEKEND_CELL_FILL, WEEKEND_TEXT_FILL)
            } else {
                (ROW_FILL, WEEKDAY_TEXT_FILL)
            };
            emitter.rect(w / LABEL_CELL_DIVISOR, h, cell_fill, GRID_STROKE, DAY_STROKE_WIDTH)?;
            emitter.text(TEXT_INSET_X, TEXT_BASELINE_Y, text_fill, &day.label())?;

            emitter.end_group()?;
        }

        emitter.end_group()?;
    }

    emitter.end_group()?;
    emitter.end_document()
}

/// Renders the configured year to a standalone SVG document string.
///
/// # Errors
/// Returns `RenderError` if the render aborts; no partial document is
/// returned.
pub fn render_to_string(config: &GridConfig) -> Result<String, RenderError> {
    let mut emitter = SvgEmitter::new(String::new());
    render(config, &mut emitter)?;
    emitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Year;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn config_2014() -> GridConfig {
        GridConfig::with_year(Year::new(2014).unwrap())
    }

    #[test]
    fn test_document_extent() {
        let svg = render_to_string(&config_2014()).unwrap();
        // 240 * 12 columns by 36 * 38 rows
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2880 1368">"#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_year_group_and_headers() {
        let svg = render_to_string(&config_2014()).unwrap();
        assert!(svg.contains(r#"<g id="year-2014">"#));
        assert_eq!(svg.matches("-header\"").count(), 12);
        assert!(svg.contains(r#"id="january-header""#));
        assert!(svg.contains(r#"id="december-header""#));
        assert!(svg.contains(
            r#"<text class="text" dx="6" dy="23" text-anchor="start" fill="white">January</text>"#
        ));
    }

    #[test]
    fn test_staircase_month_transforms() {
        let svg = render_to_string(&config_2014()).unwrap();
        // January: column 0, first weekday Wednesday -> 3 rows down
        assert!(svg.contains(r#"<g transform="translate(0 108)">"#));
        // February: column 1, first weekday Saturday -> 6 rows down
        assert!(svg.contains(r#"<g transform="translate(240 216)">"#));
    }

    #[test]
    fn test_day_groups() {
        let svg = render_to_string(&config_2014()).unwrap();
        // 2014 is not a leap year
        assert_eq!(svg.matches(r#"class="day-group""#).count(), 365);
        // Day rows sit below the header row
        assert!(svg.contains(
            r#"<g id="january-1" class="day-group" transform="translate(0 36)">"#
        ));
        assert!(svg.contains(
            r#"<g id="january-31" class="day-group" transform="translate(0 1116)">"#
        ));
    }

    #[test]
    fn test_weekend_rows_invert() {
        let svg = render_to_string(&config_2014()).unwrap();
        // Label cell is a fifth of the row width; black fill marks weekends
        assert!(svg.contains(
            r#"<rect width="48" height="36" fill="black" stroke="lightgrey" stroke-width="2"/>"#
        ));
        assert!(svg.contains(
            r#"<rect width="48" height="36" fill="white" stroke="lightgrey" stroke-width="2"/>"#
        ));
        // 2014-01-04 is a Saturday, 2014-01-01 a Wednesday
        assert!(svg.contains(
            r#"<text class="text" dx="6" dy="23" text-anchor="start" fill="white">S 4</text>"#
        ));
        assert!(svg.contains(
            r#"<text class="text" dx="6" dy="23" text-anchor="start" fill="black">W 1</text>"#
        ));
    }

    #[test]
    fn test_groups_are_balanced() {
        let svg = render_to_string(&config_2014()).unwrap();
        assert_eq!(svg.matches("<g").count(), svg.matches("</g>").count());
    }

    #[test]
    fn test_failing_surface_aborts() {
        let mut emitter = SvgEmitter::new(FailingWriter);
        let result = render(&config_2014(), &mut emitter);
        assert!(matches!(result, Err(RenderError::Surface(_))));
    }

    #[test]
    fn test_shapes_need_an_open_document() {
        let mut emitter = SvgEmitter::new(String::new());
        assert!(matches!(
            emitter.rect(1.0, 1.0, "black", "black", 1.0),
            Err(RenderError::NoDocument)
        ));
        assert!(matches!(
            emitter.end_document(),
            Err(RenderError::NoDocument)
        ));
        assert!(matches!(emitter.finish(), Err(RenderError::NoDocument)));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut emitter = SvgEmitter::new(String::new());
        emitter.begin_document(10.0, 10.0).unwrap();
        emitter.begin_group(None, None, None).unwrap();
        emitter.text(0.0, 0.0, "black", "a < b & c").unwrap();
        emitter.end_group().unwrap();
        emitter.end_document().unwrap();
        let svg = emitter.finish().unwrap();
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_leap_year_renders_extra_day() {
        let config = GridConfig::with_year(Year::new(2024).unwrap());
        let svg = render_to_string(&config).unwrap();
        assert_eq!(svg.matches(r#"class="day-group""#).count(), 366);
        assert!(svg.contains(r#"id="february-29""#));
    }
}
