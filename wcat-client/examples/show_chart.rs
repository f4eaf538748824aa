// ABOUTME: Demo sending a plotters chart to a running wcat server
// ABOUTME: Charts are always delivered as SVG for best rendering quality

use anyhow::Result;
use plotters::prelude::*;
use wcat_client::chart::{self, ChartOptions};

fn main() -> Result<()> {
    env_logger::init();

    chart::show("Example chart", ChartOptions::default(), |root| {
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Plotters with wcat", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(0f32..3f32, 0f32..4.5f32)?;
        chart
            .configure_mesh()
            .y_desc("some more number stuff")
            .draw()?;
        chart.draw_series(LineSeries::new(
            [(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 4.0)],
            &BLUE,
        ))?;
        Ok(())
    })?;

    Ok(())
}
