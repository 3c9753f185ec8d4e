use std::path::Path;

use prim_common::config::Config;
use prim_core::graph::Graph;
use prim_core::{loader, prim};

use crate::terminal::{print, spinner};

pub fn info(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let spinner = spinner::start("Loading distance file...", cfg.quiet);
    let graph = loader::load_graph(path, cfg.delimiter)?;
    spinner.set_message("Counting connected components...");
    let components: usize = prim::minimum_spanning_forest(&graph)?.trees;
    drop(spinner);

    print::header("graph information", cfg.quiet);
    print::aligned_lines(&[
        ("File", path.display().to_string()),
        ("Nodes", graph.num_nodes().to_string()),
        ("Stored edges", graph.num_edges().to_string()),
        ("Links", graph.num_links().to_string()),
        ("Components", components.to_string()),
    ]);
    Ok(())
}
