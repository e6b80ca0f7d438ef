//! Annotate a series with a three-week baseline and print the first rows.

use std::sync::Arc;

use rrdcast::{Rrdcast, SeriesQuery, TimeFormat};
use rrdcast_mock::MockRrdTool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tool = Arc::new(MockRrdTool::new().with_file("sensor.rrd", 300, &["VOLTAGE"]));
    let caster = Rrdcast::builder().with_tool(tool).build()?;

    let end = rrdcast_mock::MOCK_NOW;
    let query = SeriesQuery::new(
        Some(end - 3_600),
        Some(end),
        TimeFormat::Epoch,
        None,
        Some("3w".into()),
    )?;
    let result = caster.compile("sensor.rrd", &query).await?;

    println!("series: {:?}", result.meta.data_sources);
    for row in result.data.iter().take(5) {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}
