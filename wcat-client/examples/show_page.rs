// ABOUTME: Demo sending an interactive plotly page to a running wcat server
// ABOUTME: The plot ships as a standalone HTML document

use anyhow::Result;
use plotly::common::Mode;
use plotly::{Plot, Scatter};
use wcat_client::page;

fn main() -> Result<()> {
    env_logger::init();

    let x = vec![1, 2, 3, 4, 5];
    let y = vec![6, 7, 2, 4, 5];

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(x, y).mode(Mode::Lines).name("Temp."));

    page::show(&plot, "Example interactive plot");

    Ok(())
}
