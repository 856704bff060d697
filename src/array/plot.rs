/*
    Plotting membership functions
*/

use std::fmt::{self, Write as FmtWrite};
use std::path::Path;

use log::debug;

use super::FuzzyNumberArray;
use crate::{FuzzyError, FuzzyKind, FuzzyNumber, Result};

// Series colors, cycled.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const MARGIN: f64 = 48.0;

/// Sample count used for general numbers unless told otherwise.
pub const DEFAULT_PLOT_POINTS: usize = 200;

/// Title of a single-number plot unless told otherwise.
pub const DEFAULT_PLOT_TITLE: &str = "Fuzzy Number Membership Function";

/// Options for `FuzzyNumberArray::plot`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Number of samples per general element.
    /// Triangular and trapezoidal elements only use their breakpoints.
    pub n_points: usize,
    pub title: String,
    /// One label per element. Defaults to the element indices.
    pub labels: Option<Vec<String>>,
    pub show_legend: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            n_points: DEFAULT_PLOT_POINTS,
            title: "Fuzzy Number Array Membership Functions".to_string(),
            labels: None,
            show_legend: false,
        }
    }
}

/// One membership function sampled as `(x, membership)` points.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// The membership functions of an array, ready to be rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct MembershipPlot {
    pub title: String,
    pub series: Vec<Series>,
    pub show_legend: bool,
}

impl<T: FuzzyNumber> FuzzyNumberArray<T> {
    /// Samples the membership function of every element.
    ///
    /// Triangular and trapezoidal elements are drawn exactly from their
    /// breakpoints. General elements are sampled at `n_points` evenly
    /// spaced positions across their support.
    pub fn plot(&self, options: &PlotOptions) -> Result<MembershipPlot> {
        let labels = match &options.labels {
            Some(labels) if labels.len() != self.len() => {
                return Err(FuzzyError::invalid(format!(
                    "labels must be the same length as the array, got {} labels for {} elements",
                    labels.len(),
                    self.len()
                )));
            }
            Some(labels) => labels.clone(),
            None => (0..self.len()).map(|i| i.to_string()).collect(),
        };
        check_n_points::<T>(options.n_points)?;

        let series = self
            .iter()
            .zip(labels)
            .map(|(x, label)| Series {
                label,
                points: sample(x, options.n_points),
            })
            .collect();

        debug!("plotting {} {} membership functions", self.len(), T::KIND);
        Ok(MembershipPlot {
            title: options.title.clone(),
            series,
            show_legend: options.show_legend,
        })
    }
}

/// Samples the membership function of a single number.
///
/// The series is labelled with the number itself.
/// Backs `FuzzyNumber::plot`.
pub(crate) fn plot_number<T: FuzzyNumber>(
    x: &T,
    n_points: usize,
    title: &str,
) -> Result<MembershipPlot> {
    check_n_points::<T>(n_points)?;
    debug!("plotting the membership function of {x}");
    Ok(MembershipPlot {
        title: title.to_string(),
        series: vec![Series {
            label: x.to_string(),
            points: sample(x, n_points),
        }],
        show_legend: false,
    })
}

// Only general numbers are sampled, so only they need two points.
fn check_n_points<T: FuzzyNumber>(n_points: usize) -> Result<()> {
    if T::KIND == FuzzyKind::General && n_points < 2 {
        return Err(FuzzyError::invalid(format!(
            "at least 2 sample points are required, got {n_points}"
        )));
    }
    Ok(())
}

// Sample points for a single membership function.
fn sample<T: FuzzyNumber>(x: &T, n_points: usize) -> Vec<(f64, f64)> {
    let [a1, a2, a3, a4] = x.breakpoints();
    match T::KIND {
        FuzzyKind::Triangular => vec![(a1, 0.0), (a2, 1.0), (a4, 0.0)],
        FuzzyKind::Trapezoidal => vec![(a1, 0.0), (a2, 1.0), (a3, 1.0), (a4, 0.0)],
        FuzzyKind::General => {
            let step = (a4 - a1) / (n_points - 1) as f64;
            (0..n_points)
                .map(|i| {
                    let v = a1 + step * i as f64;
                    (v, x.membership(v))
                })
                .collect()
        }
    }
}

impl MembershipPlot {
    /// Renders the plot as a standalone SVG document.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut out = String::new();
        // writing to a `String` cannot fail
        let _ = self.write_svg(&mut out, width, height);
        out
    }

    /// Renders the plot and writes it to `path`.
    pub fn save_svg(&self, path: impl AsRef<Path>, width: u32, height: u32) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_svg(width, height))?;
        debug!("wrote membership plot to {}", path.as_ref().display());
        Ok(())
    }

    /// Returns the horizontal extent `(min, max)` covered by every series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.0))
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((f64::min(lo, x), f64::max(hi, x))),
            })
    }

    /// Renders the plot as SVG into `out`.
    pub fn write_svg<W: FmtWrite>(&self, out: &mut W, width: u32, height: u32) -> fmt::Result {
        let (w, h) = (width as f64, height as f64);
        let (mut x_lo, mut x_hi) = self.x_range().unwrap_or((0.0, 1.0));
        if x_hi <= x_lo {
            // a single point: widen so it is drawn in the middle
            x_lo -= 0.5;
            x_hi += 0.5;
        }
        let plot_w = (w - 2.0 * MARGIN).max(1.0);
        let plot_h = (h - 2.0 * MARGIN).max(1.0);
        let px = |x: f64| MARGIN + (x - x_lo) / (x_hi - x_lo) * plot_w;
        let py = |y: f64| MARGIN + (1.0 - y) * plot_h;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="16">{}</text>"#,
            w / 2.0,
            MARGIN / 2.0,
            escape(&self.title)
        )?;

        // axes
        writeln!(
            out,
            r##"<g stroke="#444" stroke-width="1"><line x1="{0:.1}" y1="{1:.1}" x2="{2:.1}" y2="{1:.1}"/><line x1="{0:.1}" y1="{1:.1}" x2="{0:.1}" y2="{3:.1}"/></g>"##,
            MARGIN,
            py(0.0),
            MARGIN + plot_w,
            py(1.0)
        )?;
        for (v, y) in [(x_lo, h - MARGIN / 2.0), (x_hi, h - MARGIN / 2.0)] {
            writeln!(
                out,
                r#"<text x="{:.1}" y="{y:.1}" text-anchor="middle" font-family="sans-serif" font-size="11">{v:.3}</text>"#,
                px(v)
            )?;
        }
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-family="sans-serif" font-size="11">1</text>"#,
            MARGIN - 4.0,
            py(1.0) + 4.0
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-family="sans-serif" font-size="11">0</text>"#,
            MARGIN - 4.0,
            py(0.0) + 4.0
        )?;

        for (i, s) in self.series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            write!(out, r#"<polyline fill="none" stroke="{color}" stroke-width="1.5" points=""#)?;
            for (j, (x, y)) in s.points.iter().enumerate() {
                if j > 0 {
                    write!(out, " ")?;
                }
                write!(out, "{:.2},{:.2}", px(*x), py(*y))?;
            }
            writeln!(out, r#""><title>{}</title></polyline>"#, escape(&s.label))?;
        }

        if self.show_legend {
            for (i, s) in self.series.iter().enumerate() {
                let color = PALETTE[i % PALETTE.len()];
                let y = MARGIN + 14.0 * i as f64;
                writeln!(
                    out,
                    r#"<text x="{:.1}" y="{y:.1}" font-family="sans-serif" font-size="11" fill="{color}">{}</text>"#,
                    w - MARGIN,
                    escape(&s.label)
                )?;
            }
        }

        writeln!(out, "</svg>")
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
