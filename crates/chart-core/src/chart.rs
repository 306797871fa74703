// File: crates/chart-core/src/chart.rs
// Summary: Chart (one panel) and Figure (side-by-side panels) with a headless PNG pipeline on Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::{split_columns, RectI32};
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DEFAULT_DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};
use crate::view::ViewState;
use crate::Axis;

/// Roughly how many ticks a numeric axis aims for.
const TICK_TARGET: usize = 5;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Pixels per logical figure unit.
    pub dpi: f32,
    /// Base panel insets at 100 DPI; text space is added on top when labels are drawn.
    pub insets: Insets,
    pub theme: Theme,
    /// Titles, axis labels and tick labels. Disable for font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    fn scale(&self) -> f32 { self.dpi / DEFAULT_DPI }
    fn title_size(&self) -> f32 { 14.0 * self.scale() }
    fn label_size(&self) -> f32 { 12.0 * self.scale() }
    fn tick_size(&self) -> f32 { 10.0 * self.scale() }
}

/// A single panel: title, two axes and the series drawn against them.
#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the series; `margin` is the fractional headroom (see [`ViewState::from_chart`]).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Category labels of the first bar series, in drawing order.
    pub fn category_labels(&self) -> Vec<&str> {
        self.series
            .iter()
            .find(|s| s.series_type == SeriesType::Bar)
            .map(|s| s.labels().collect())
            .unwrap_or_default()
    }

    fn draw(&self, canvas: &skia::Canvas, area: RectI32, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, TICK_TARGET);
        let y_step = nice_step(self.y_axis.span(), TICK_TARGET);

        let insets = self.layout_insets(area, opts, text, &y_ticks, y_step);
        let plot = area.inset(&insets);
        let xs = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, plot, &ys, &y_ticks, theme);

        for s in &self.series {
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, &xs, &ys, s, theme),
                SeriesType::Histogram => draw_histogram_series(canvas, &xs, &ys, s, theme),
            }
        }

        draw_axes(canvas, plot, theme);
        let x_ticks = self.x_ticks();
        draw_tick_marks(canvas, plot, &xs, &ys, &x_ticks, &y_ticks, opts);

        let Some(tx) = text else { return };
        let s = opts.scale();
        let tick = opts.tick_size();

        for &v in &y_ticks {
            let label = format_tick(v, y_step);
            tx.draw_right(canvas, &label, plot.left as f32 - 6.0 * s, ys.to_px(v) + tick * 0.35, tick, theme.tick, true);
        }

        let label_top = plot.bottom as f32 + 6.0 * s;
        let rotation = self.x_axis.tick_rotation;
        for (v, label) in &x_ticks {
            let x = xs.to_px(*v);
            if rotation.abs() > f32::EPSILON {
                tx.draw_rotated_end(canvas, label, x, label_top, rotation, tick, theme.tick);
            } else {
                tx.draw_centered(canvas, label, x, label_top + tick, tick, theme.tick, false);
            }
        }

        let cx = (plot.left + plot.right) as f32 * 0.5;
        if !self.title.is_empty() {
            let size = opts.title_size();
            tx.draw_centered(canvas, &self.title, cx, area.top as f32 + size * 1.3, size, theme.title, false);
        }
        if !self.x_axis.label.is_empty() {
            let size = opts.label_size();
            tx.draw_centered(canvas, &self.x_axis.label, cx, area.bottom as f32 - size * 0.5, size, theme.axis_label, false);
        }
    }

    /// Tight layout: grow the base insets until titles and tick labels fit inside `area`.
    fn layout_insets(&self, area: RectI32, opts: &RenderOptions, text: Option<&TextShaper>, y_ticks: &[f64], y_step: f64) -> Insets {
        let s = opts.scale();
        let mut insets = opts.insets.scaled(s);
        let Some(tx) = text else { return insets };

        if !self.title.is_empty() {
            insets.top += (opts.title_size() * 1.6) as u32;
        }
        if !self.x_axis.label.is_empty() {
            insets.bottom += (opts.label_size() * 1.6) as u32;
        }

        let tick = opts.tick_size();
        let rot = self.x_axis.tick_rotation.to_radians();
        let widest_x = self
            .x_ticks()
            .iter()
            .map(|(_, l)| tx.measure_width(l, tick, false))
            .fold(0.0f32, f32::max);
        let x_extent = widest_x * rot.sin().abs() + tick * rot.cos().abs() + 6.0 * s;
        let max_bottom = (area.height() as f32 * 0.45).max(0.0);
        insets.bottom = (insets.bottom as f32 + x_extent).min(max_bottom) as u32;

        let widest_y = y_ticks
            .iter()
            .map(|v| tx.measure_width(&format_tick(*v, y_step), tick, true))
            .fold(0.0f32, f32::max);
        insets.left = insets.left.max((widest_y + 10.0 * s).ceil() as u32);
        insets
    }

    /// X tick positions with their labels: category slots for bars, nice steps otherwise.
    fn x_ticks(&self) -> Vec<(f64, String)> {
        if let Some(bar) = self.series.iter().find(|s| s.series_type == SeriesType::Bar) {
            return bar.labels().enumerate().map(|(i, l)| (i as f64, l.to_string())).collect();
        }
        let step = nice_step(self.x_axis.span(), TICK_TARGET);
        nice_ticks(self.x_axis.min, self.x_axis.max, TICK_TARGET)
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}

/// A canvas of `width_in × height_in` logical units holding panels side by side.
#[derive(Clone, Debug)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub panels: Vec<Chart>,
}

impl Default for Figure {
    fn default() -> Self { Self::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN) }
}

impl Figure {
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in, panels: Vec::new() }
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    /// Surface size in pixels at `dpi`.
    pub fn pixel_size(&self, dpi: f32) -> (i32, i32) {
        let px = |v: f32| {
            let p = (v * dpi).round();
            if p.is_finite() && p > 0.0 { p as i32 } else { 0 }
        };
        (px(self.width_in), px(self.height_in))
    }

    /// Pixel rectangle of each panel, left to right, in insertion order.
    pub fn panel_rects(&self, dpi: f32) -> Vec<RectI32> {
        let (w, h) = self.pixel_size(dpi);
        split_columns(RectI32::from_ltwh(0, 0, w, h), self.panels.len())
    }

    fn render_image(&self, opts: &RenderOptions) -> Result<skia::Image, RenderError> {
        if self.panels.is_empty() {
            return Err(RenderError::EmptyFigure);
        }
        let (width, height) = self.pixel_size(opts.dpi);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        for (chart, rect) in self.panels.iter().zip(self.panel_rects(opts.dpi)) {
            chart.draw(canvas, rect, opts, shaper.as_ref());
        }

        log::debug!("rendered {} panel(s) at {}x{} px", self.panels.len(), width, height);
        Ok(surface.image_snapshot())
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let image = self.render_image(opts)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let io_err = |source| RenderError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, ys: &LinearScale, y_ticks: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals only; category slots carry no meaning between bars
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[f64],
    opts: &RenderOptions,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let len = 4.0 * opts.scale();

    let b = plot.bottom as f32;
    for (v, _) in x_ticks {
        let x = xs.to_px(*v);
        canvas.draw_line((x, b), (x, b + len), &paint);
    }
    let l = plot.left as f32;
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((l - len, y), (l, y), &paint);
    }
}

fn bar_paints(theme: &Theme, fill: skia::Color) -> (skia::Paint, skia::Paint) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(fill);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(theme.bar_edge);
    (body, edge)
}

fn draw_bar_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, theme: &Theme) {
    if series.categories.is_empty() { return; }
    let (body, edge) = bar_paints(theme, theme.bar_fill);

    let half = xs.extent_px(series.bar_width as f64) * 0.5;
    let base = ys.to_px(0.0);
    for (i, (_, v)) in series.categories.iter().enumerate() {
        let cx = xs.to_px(i as f64);
        let top = ys.to_px(*v);
        let rect = skia::Rect::from_ltrb(cx - half, top.min(base), cx + half, top.max(base));
        canvas.draw_rect(rect, &body);
        if series.outline {
            canvas.draw_rect(rect, &edge);
        }
    }
}

fn draw_histogram_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, theme: &Theme) {
    if series.bins.is_empty() { return; }
    let (body, edge) = bar_paints(theme, theme.histogram);

    let base = ys.to_px(0.0);
    for bin in series.bins.iter().filter(|b| b.count > 0) {
        let top = ys.to_px(bin.count as f64);
        let rect = skia::Rect::from_ltrb(xs.to_px(bin.lo), top, xs.to_px(bin.hi), base);
        canvas.draw_rect(rect, &body);
        if series.outline {
            canvas.draw_rect(rect, &edge);
        }
    }
}
