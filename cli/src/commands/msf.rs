use std::path::Path;
use std::time::{Duration, Instant};

use colored::*;
use prim_common::config::Config;
use prim_core::graph::Edge;
use prim_core::loader;
use prim_core::prim::{self, SpanningForest};
use tracing::{info, warn};

use crate::terminal::{colors, print, spinner};

pub fn msf(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let spinner = spinner::start("Loading distance file...", cfg.quiet);
    let graph = loader::load_graph(path, cfg.delimiter)?;

    spinner.set_message("Growing the minimum spanning forest...");
    let start_time: Instant = Instant::now();
    let forest = prim::minimum_spanning_forest(&graph)?;
    let elapsed: Duration = start_time.elapsed();
    drop(spinner);

    info!("Forest computed in {:.2}s", elapsed.as_secs_f64());
    if forest.trees > 1 {
        warn!("The graph is not connected, the forest spans {} components", forest.trees);
    }

    print::header("minimum spanning forest", cfg.quiet);
    for line in report_lines(&forest, cfg) {
        print::print(&line);
    }

    if cfg.quiet == 0 {
        let trees: &str = if forest.trees == 1 { "tree" } else { "trees" };
        print::fat_separator();
        print::centerln(&format!("Forest complete: {} edges in {} {trees}", forest.len(), forest.trees));
    }
    Ok(())
}

fn format_edge(edge: &Edge<String, f64>) -> String {
    let weight: String = edge.label().map(|w| format!("{w:?}")).unwrap_or_default();
    format!(
        "[{}]--({})--[{}]",
        edge.start.color(colors::NODE),
        weight.color(colors::WEIGHT),
        edge.end.color(colors::NODE)
    )
}

/// Edge lines (unless only the summary is wanted), a blank line, then the totals.
fn report_lines(forest: &SpanningForest<String, f64>, cfg: &Config) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    if !cfg.summary_only {
        lines.extend(forest.iter().map(format_edge));
        lines.push(String::new());
    }

    lines.extend(summary_lines(forest, cfg));
    lines
}

fn summary_lines(forest: &SpanningForest<String, f64>, cfg: &Config) -> Vec<String> {
    vec![
        format!("Number of edges: {}", forest.len().to_string().bold()),
        format!("Number of trees: {}", forest.trees.to_string().bold()),
        format!(
            "Total weight: {} {}",
            format!("{:.0}", forest.total_weight()).color(colors::ACCENT).bold(),
            cfg.unit
        ),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_edge() {
        colored::control::set_override(false);
        let edge = Edge::new("torino".to_string(), "asti".to_string(), Some(55.5));
        assert_eq!(format_edge(&edge), "[torino]--(55.5)--[asti]");

        let whole = Edge::new("a".to_string(), "b".to_string(), Some(742.0));
        assert_eq!(format_edge(&whole), "[a]--(742.0)--[b]");
    }

    fn forest() -> SpanningForest<String, f64> {
        SpanningForest {
            edges: vec![
                Edge::new("torino".to_string(), "asti".to_string(), Some(55.6)),
                Edge::new("asti".to_string(), "alba".to_string(), Some(30.0)),
            ],
            trees: 1,
        }
    }

    #[test]
    fn test_report_lists_edges_then_totals() {
        colored::control::set_override(false);
        let lines = report_lines(&forest(), &Config::default());
        assert_eq!(
            lines,
            vec![
                "[torino]--(55.6)--[asti]",
                "[asti]--(30.0)--[alba]",
                "",
                "Number of edges: 2",
                "Number of trees: 1",
                "Total weight: 86 km",
            ]
        );
    }

    #[test]
    fn test_summary_only_and_custom_unit() {
        colored::control::set_override(false);
        let cfg = Config {
            unit: "mi".to_string(),
            summary_only: true,
            ..Config::default()
        };
        let lines = report_lines(&forest(), &cfg);
        assert_eq!(
            lines,
            vec!["Number of edges: 2", "Number of trees: 1", "Total weight: 86 mi"]
        );
    }

    #[test]
    fn test_total_weight_is_rounded() {
        colored::control::set_override(false);
        let forest = SpanningForest {
            edges: vec![Edge::new("a".to_string(), "b".to_string(), Some(0.4))],
            trees: 2,
        };
        let lines = summary_lines(&forest, &Config::default());
        assert_eq!(lines[1], "Number of trees: 2");
        assert_eq!(lines[2], "Total weight: 0 km");
    }
}
