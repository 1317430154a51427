//! Writing, plotting and printing result tables.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use plotters::prelude::*;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, SimulationError};
use crate::simulations::ResultTable;

pub const DEFAULT_OUTPUT: &str = "results/results.json";

const SERIES_COLORS: [RGBColor; 5] = [RED, BLUE, GREEN, MAGENTA, CYAN];

/// Write the JSON table, plus the plot when `plot` is set, and return the text summary.
pub fn publish(table: &ResultTable, output: &Path, plot: Option<&Path>) -> Result<String> {
    write_json(table, output)?;
    if let Some(plot) = plot {
        write_plot(table, plot)?;
    }
    Ok(render_table(table))
}

/// Write `table` as JSON indented by four spaces, creating parent directories.
pub fn write_json(table: &ResultTable, path: &Path) -> Result<()> {
    let io_error = |source| SimulationError::Io {
        path: path.to_path_buf(),
        source,
    };
    create_parent(path)?;
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    table.serialize(&mut serializer)?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)
}

/// Draw average time against request count on log-log axes, one line per algorithm, as SVG.
///
/// Cells with a zero size or zero time have no place on a log axis and are left out.
pub fn write_plot(table: &ResultTable, path: &Path) -> Result<()> {
    let series: Vec<_> = table
        .algorithms()
        .map(|algorithm| {
            let points: Vec<(f64, f64)> = table
                .sizes()
                .into_iter()
                .filter_map(|size| Some((size as f64, table.get(algorithm, size)?)))
                .filter(|&(size, time)| size > 0.0 && time > 0.0)
                .collect();
            (algorithm, points)
        })
        .filter(|(_, points)| !points.is_empty())
        .collect();

    let points = series.iter().flat_map(|(_, points)| points.iter().copied());
    let Some((x_range, y_range)) = points.fold(None, |bounds, (x, y)| match bounds {
        None => Some(((x, x), (y, y))),
        Some(((x0, x1), (y0, y1))) => Some(((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y)))),
    }) else {
        return Err(SimulationError::EmptyPlot);
    };

    create_parent(path)?;
    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Elevator Scheduling Algorithms Performance", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (x_range.0 * 0.8..x_range.1 * 1.25).log_scale(),
            (y_range.0 * 0.8..y_range.1 * 1.25).log_scale(),
        )
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Number of Requests")
        .y_desc("Average Time")
        .draw()
        .map_err(plot_error)?;

    for (index, (algorithm, points)) in series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let line = color.stroke_width(2);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), line))
            .map_err(plot_error)?
            .label(algorithm.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));
        chart
            .draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))
            .map_err(plot_error)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;
    root.present().map_err(plot_error)
}

/// One row per algorithm, one column per workload size.
pub fn render_table(table: &ResultTable) -> String {
    let sizes = table.sizes();
    let header: String = sizes.iter().map(|size| format!("{size:>14}")).collect();
    let mut out = format!("{:<18}{header}\n", "algorithm");
    for algorithm in table.algorithms() {
        let cells: String = sizes
            .iter()
            .map(|&size| match table.get(algorithm, size) {
                Some(value) => format!("{value:>14.1}"),
                None => format!("{:>14}", "-"),
            })
            .collect();
        out.push_str(&format!("{:<18}{cells}\n", algorithm.name()));
    }
    out
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::create_dir_all(parent).map_err(|source| SimulationError::Io {
            path: parent.to_path_buf(),
            source,
        }),
        None => Ok(()),
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> SimulationError {
    SimulationError::Plot(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::Algorithm;

    fn sample() -> ResultTable {
        let mut table = ResultTable::new();
        table.accumulate(Algorithm::Fifo, 10, 12.5);
        table.accumulate(Algorithm::Fifo, 100, 99.0);
        table.accumulate(Algorithm::Sstf, 10, 7.25);
        table
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("elevator_dispatch_{name}_{}", std::process::id()))
    }

    #[test]
    fn renders_missing_cells_as_dash() {
        let text = render_table(&sample());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("algorithm"));
        assert!(lines[1].starts_with("FIFO"));
        assert!(lines[1].contains("12.5") && lines[1].contains("99.0"));
        assert!(lines[2].starts_with("SSTF") && lines[2].trim_end().ends_with('-'));
    }

    #[test]
    fn writes_four_space_json() {
        let dir = scratch_dir("json");
        let path = dir.join("nested").join("results.json");
        write_json(&sample(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n    \"FIFO\": {\n        \"10\": 12.5,"));
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["SSTF"]["10"], 7.25);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn plot_has_a_series_per_algorithm() {
        let dir = scratch_dir("plot");
        let path = dir.join("results_plot.svg");
        write_plot(&sample(), &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("FIFO") && svg.contains("SSTF"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn plot_needs_positive_points() {
        let mut table = ResultTable::new();
        table.accumulate(Algorithm::Look, 0, 0.0);
        let path = scratch_dir("empty_plot").join("plot.svg");
        assert!(matches!(write_plot(&table, &path), Err(SimulationError::EmptyPlot)));
        assert!(matches!(
            write_plot(&ResultTable::new(), &path),
            Err(SimulationError::EmptyPlot)
        ));
    }

    #[test]
    fn publish_writes_json_and_plot() {
        let dir = scratch_dir("publish");
        let output = dir.join("results.json");
        let plot = dir.join("results_plot.svg");

        let summary = publish(&sample(), &output, Some(&plot)).unwrap();
        assert!(summary.starts_with("algorithm"));
        assert!(output.exists() && plot.exists());

        fs::remove_dir_all(dir).unwrap();
    }
}
