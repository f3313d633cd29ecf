//! Renderers for countries and tours.
//!
//! [`TracingRenderer`] writes a text summary through `tracing`;
//! [`SvgRenderer`] draws a scale diagram.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;

use crate::country::{Country, LocationId};
use crate::error::Result;
use crate::polar;
use crate::traits::Renderer;

/// Display options shared by all renderers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Give each region its own marker colour.
    pub distinguish_regions: bool,
    /// Draw depots as crosses with CAPITALISED labels below the marker.
    pub distinguish_depots: bool,
    /// Annotate every location with its name.
    pub location_names: bool,
    /// Polar grid (rings and spokes) instead of Cartesian axes.
    pub polar_projection: bool,
    /// Write the output here instead of stdout.
    pub save_to: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            distinguish_regions: true,
            distinguish_depots: true,
            location_names: true,
            polar_projection: true,
            save_to: None,
        }
    }
}

/// Logs locations and journeys at `info` level.
#[derive(Debug, Clone, Default)]
pub struct TracingRenderer;

impl TracingRenderer {
    fn label(country: &Country, id: LocationId, options: &RenderOptions) -> String {
        match country.get(id) {
            Some(location) if options.location_names => location.to_string(),
            _ => format!("#{}", id.index()),
        }
    }
}

impl Renderer for TracingRenderer {
    fn render_country(&self, country: &Country, options: &RenderOptions) -> Result<()> {
        tracing::info!(
            locations = country.len(),
            regions = country.regions().len(),
            "country"
        );
        for id in country.ids() {
            tracing::info!("  {}", Self::label(country, id, options));
        }
        Ok(())
    }

    fn render_path(
        &self,
        country: &Country,
        path: &[LocationId],
        options: &RenderOptions,
    ) -> Result<()> {
        let mut total_time = 0.0;
        for pair in path.windows(2) {
            let time = country.travel_time(pair[0], pair[1])?;
            total_time += time;
            tracing::info!(
                hours = time,
                "  {} -> {}",
                Self::label(country, pair[0], options),
                Self::label(country, pair[1], options)
            );
        }
        tracing::info!(stops = path.len(), total_time, "path");
        Ok(())
    }
}

const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#17becf",
];

const MARGIN_PX: f64 = 40.0;
const MARKER_PX: f64 = 5.0;

/// Draws a country as an SVG scale diagram.
///
/// Output goes to `RenderOptions::save_to` when set, stdout otherwise.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Width and height of the square canvas in pixels.
    pub size: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { size: 640 }
    }
}

impl SvgRenderer {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Build the SVG document for `country`, with `path` drawn on top.
    pub fn to_svg(
        &self,
        country: &Country,
        path: Option<&[LocationId]>,
        options: &RenderOptions,
    ) -> String {
        let canvas = Canvas::new(self.size, country);
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\">\n",
            self.size
        );
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        if options.polar_projection {
            canvas.polar_grid(&mut svg);
        } else {
            canvas.cartesian_axes(&mut svg);
        }

        if let Some(path) = path {
            let points: Vec<String> = path
                .iter()
                .filter_map(|&id| country.get(id))
                .map(|location| {
                    let (x, y) = canvas.project(location.r(), location.theta());
                    format!("{:.2},{:.2}", x, y)
                })
                .collect();
            svg.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\" stroke=\"#333333\" stroke-width=\"1.5\"/>\n",
                points.join(" ")
            ));
        }

        let colours: HashMap<&str, &str> = country
            .regions()
            .into_iter()
            .enumerate()
            .map(|(i, region)| (region, PALETTE[i % PALETTE.len()]))
            .collect();

        for location in country.locations() {
            let (x, y) = canvas.project(location.r(), location.theta());
            let colour = if options.distinguish_regions {
                colours.get(location.region()).copied().unwrap_or(PALETTE[0])
            } else {
                PALETTE[0]
            };
            let as_depot = options.distinguish_depots && location.is_depot();

            if as_depot {
                svg.push_str(&format!(
                    "<path d=\"M{:.2} {:.2} L{:.2} {:.2} M{:.2} {:.2} L{:.2} {:.2}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                    x - MARKER_PX,
                    y - MARKER_PX,
                    x + MARKER_PX,
                    y + MARKER_PX,
                    x - MARKER_PX,
                    y + MARKER_PX,
                    x + MARKER_PX,
                    y - MARKER_PX,
                    colour
                ));
            } else {
                svg.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
                    x,
                    y,
                    MARKER_PX,
                    colour
                ));
            }

            if options.location_names {
                let (label, dy) = if as_depot {
                    (location.name().to_uppercase(), 3.0 * MARKER_PX)
                } else {
                    (location.name().to_string(), -1.5 * MARKER_PX)
                };
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"11\" text-anchor=\"middle\">{}</text>\n",
                    x,
                    y + dy,
                    escape_xml(&label)
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn emit(&self, svg: &str, options: &RenderOptions) -> Result<()> {
        match &options.save_to {
            Some(destination) => {
                std::fs::write(destination, svg)?;
                tracing::info!(path = %destination.display(), "saved diagram");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(svg.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render_country(&self, country: &Country, options: &RenderOptions) -> Result<()> {
        let svg = self.to_svg(country, None, options);
        self.emit(&svg, options)
    }

    fn render_path(
        &self,
        country: &Country,
        path: &[LocationId],
        options: &RenderOptions,
    ) -> Result<()> {
        let svg = self.to_svg(country, Some(path), options);
        self.emit(&svg, options)
    }
}

/// Maps polar meters onto the canvas, origin in the centre.
struct Canvas {
    centre: f64,
    max_r: f64,
    scale: f64,
}

impl Canvas {
    fn new(size: u32, country: &Country) -> Self {
        let centre = size as f64 / 2.0;
        let max_r = country
            .locations()
            .iter()
            .map(|location| location.r())
            .fold(0.0, f64::max);
        let max_r = if max_r > 0.0 { max_r } else { 1.0 };
        let scale = (centre - MARGIN_PX).max(1.0) / max_r;

        Self {
            centre,
            max_r,
            scale,
        }
    }

    fn project(&self, r: f64, theta: f64) -> (f64, f64) {
        let (x, y) = polar::to_cartesian(r, theta);
        // SVG y grows downwards
        (self.centre + x * self.scale, self.centre - y * self.scale)
    }

    fn polar_grid(&self, svg: &mut String) {
        for ring in 1..=4 {
            svg.push_str(&format!(
                "<circle cx=\"{0:.2}\" cy=\"{0:.2}\" r=\"{1:.2}\" fill=\"none\" stroke=\"#dddddd\"/>\n",
                self.centre,
                self.max_r * self.scale * ring as f64 / 4.0
            ));
        }
        for spoke in 0..8 {
            let (x, y) = self.project(self.max_r, spoke as f64 * PI / 4.0);
            svg.push_str(&format!(
                "<line x1=\"{0:.2}\" y1=\"{0:.2}\" x2=\"{1:.2}\" y2=\"{2:.2}\" stroke=\"#dddddd\"/>\n",
                self.centre, x, y
            ));
        }
    }

    fn cartesian_axes(&self, svg: &mut String) {
        let low = self.centre - self.max_r * self.scale;
        let high = self.centre + self.max_r * self.scale;
        svg.push_str(&format!(
            "<line x1=\"{0:.2}\" y1=\"{1:.2}\" x2=\"{2:.2}\" y2=\"{1:.2}\" stroke=\"#999999\"/>\n",
            low, self.centre, high
        ));
        svg.push_str(&format!(
            "<line x1=\"{1:.2}\" y1=\"{0:.2}\" x2=\"{1:.2}\" y2=\"{2:.2}\" stroke=\"#999999\"/>\n",
            low, self.centre, high
        ));
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
