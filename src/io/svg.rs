//! SVG visualization for centerline audits.
//!
//! Renders a planner run to SVG:
//! - Left and right boundary markers
//! - Matched pairs joined by a thin connector
//! - The computed centerline

use crate::core::Point2D;
use std::fmt::Write;
use std::path::Path;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Left boundary marker color
    pub left: &'static str,
    /// Right boundary marker color
    pub right: &'static str,
    /// Connector between a matched pair
    pub pair: &'static str,
    /// Centerline color
    pub centerline: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            left: "#2222AA",
            right: "#D4A017",
            pair: "#AAAAAA",
            centerline: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per meter
    pub scale: f32,
    /// Centerline width
    pub line_width: f32,
    /// Marker radius in pixels
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the drawing in pixels
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            line_width: 2.0,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG visualization builder
pub struct CenterlineSvg {
    config: SvgConfig,
    title: Option<String>,
    left: Vec<Point2D>,
    right: Vec<Point2D>,
    pairs: Vec<(Point2D, Point2D)>,
    centerline: Vec<Point2D>,
}

impl CenterlineSvg {
    /// Create a new SVG visualizer
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            title: None,
            left: Vec::new(),
            right: Vec::new(),
            pairs: Vec::new(),
            centerline: Vec::new(),
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add both boundary sets
    pub fn with_boundaries(mut self, left: &[Point2D], right: &[Point2D]) -> Self {
        self.left = left.to_vec();
        self.right = right.to_vec();
        self
    }

    /// Add matched pairs, drawn as connectors
    pub fn with_pairs(mut self, pairs: Vec<(Point2D, Point2D)>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Add the computed centerline
    pub fn with_centerline(mut self, centerline: &[Point2D]) -> Self {
        self.centerline = centerline.to_vec();
        self
    }

    /// World bounds of everything drawn, with a minimum 1m extent
    fn bounds(&self) -> (Point2D, Point2D) {
        let all = self
            .left
            .iter()
            .chain(&self.right)
            .chain(&self.centerline)
            .chain(self.pairs.iter().flat_map(|(l, r)| [l, r]));

        let mut min = Point2D::new(f32::MAX, f32::MAX);
        let mut max = Point2D::new(f32::MIN, f32::MIN);
        let mut any = false;
        for p in all {
            any = true;
            min = Point2D::new(min.x.min(p.x), min.y.min(p.y));
            max = Point2D::new(max.x.max(p.x), max.y.max(p.y));
        }

        if !any {
            return (Point2D::ZERO, Point2D::new(1.0, 1.0));
        }

        let pad_x = ((1.0 - (max.x - min.x)) / 2.0).max(0.0);
        let pad_y = ((1.0 - (max.y - min.y)) / 2.0).max(0.0);
        (
            Point2D::new(min.x - pad_x, min.y - pad_y),
            Point2D::new(max.x + pad_x, max.y + pad_y),
        )
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let (min_world, max_world) = self.bounds();
        let width_px = (max_world.x - min_world.x) * self.config.scale;
        let height_px = (max_world.y - min_world.y) * self.config.scale;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 90.0;

        let width = width_px + 2.0 * padding;
        let height = height_px + 2.0 * padding + title_height + legend_height;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        ).unwrap();

        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )
        .unwrap();

        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0, title
            ).unwrap();
        }

        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        let to_px = |p: &Point2D| {
            (
                (p.x - min_world.x) * self.config.scale,
                height_px - (p.y - min_world.y) * self.config.scale,
            )
        };

        self.render_pairs(&mut svg, &to_px);
        self.render_boundary(&mut svg, "left", &self.left, self.config.colors.left, &to_px);
        self.render_boundary(&mut svg, "right", &self.right, self.config.colors.right, &to_px);
        self.render_centerline(&mut svg, &to_px);

        writeln!(&mut svg, "  </g>").unwrap();

        let legend_y = padding + title_height + height_px + 10.0;
        self.render_legend(&mut svg, width, legend_y);

        writeln!(&mut svg, "</svg>").unwrap();

        svg
    }

    fn render_pairs(&self, svg: &mut String, to_px: &impl Fn(&Point2D) -> (f32, f32)) {
        if self.pairs.is_empty() {
            return;
        }

        writeln!(svg, r#"    <g id="pairs">"#).unwrap();
        for (l, r) in &self.pairs {
            let (x1, y1) = to_px(l);
            let (x2, y2) = to_px(r);
            writeln!(
                svg,
                r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1" stroke-dasharray="4 2"/>"#,
                x1, y1, x2, y2, self.config.colors.pair
            ).unwrap();
        }
        writeln!(svg, "    </g>").unwrap();
    }

    fn render_boundary(
        &self,
        svg: &mut String,
        id: &str,
        points: &[Point2D],
        color: &str,
        to_px: &impl Fn(&Point2D) -> (f32, f32),
    ) {
        if points.is_empty() {
            return;
        }

        writeln!(svg, r#"    <g id="boundary-{}">"#, id).unwrap();
        for p in points {
            let (px, py) = to_px(p);
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
                px, py, self.config.marker_radius, color
            ).unwrap();
        }
        writeln!(svg, "    </g>").unwrap();
    }

    fn render_centerline(&self, svg: &mut String, to_px: &impl Fn(&Point2D) -> (f32, f32)) {
        if self.centerline.is_empty() {
            return;
        }

        writeln!(svg, r#"    <g id="centerline">"#).unwrap();

        let mut path_d = String::new();
        for (i, p) in self.centerline.iter().enumerate() {
            let (px, py) = to_px(p);
            if i == 0 {
                write!(&mut path_d, "M {:.1} {:.1}", px, py).unwrap();
            } else {
                write!(&mut path_d, " L {:.1} {:.1}", px, py).unwrap();
            }
        }

        writeln!(
            svg,
            r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
            path_d, self.config.colors.centerline, self.config.line_width
        ).unwrap();

        for (i, p) in self.centerline.iter().enumerate() {
            let (px, py) = to_px(p);
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                px,
                py,
                self.config.marker_radius / 2.0,
                self.config.colors.centerline
            )
            .unwrap();
            writeln!(
                svg,
                r#"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="9" fill="{}" dy="-6">{}</text>"#,
                px, py, self.config.colors.centerline, i
            ).unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    fn render_legend(&self, svg: &mut String, svg_width: f32, y_offset: f32) {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        ).unwrap();

        writeln!(
            svg,
            r##"    <rect x="10" y="0" width="{:.0}" height="80" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
            svg_width - 20.0
        ).unwrap();

        let entries = [
            ("Left markers", self.config.colors.left),
            ("Right markers", self.config.colors.right),
            ("Centerline", self.config.colors.centerline),
        ];

        let mut entry_y = 20.0;
        for (label, color) in entries {
            writeln!(
                svg,
                r#"    <circle cx="35" cy="{:.0}" r="5" fill="{}"/>"#,
                entry_y, color
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="60" y="{:.0}" fill="#333" dominant-baseline="middle">{}</text>"##,
                entry_y, label
            )
            .unwrap();
            entry_y += 20.0;
        }

        writeln!(svg, "  </g>").unwrap();
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render())
    }
}
