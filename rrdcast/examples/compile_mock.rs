//! Compile a synthetic two-source file over the default window and print
//! the resulting JSON.

use std::sync::Arc;

use rrdcast::{Rrdcast, SeriesQuery, TimeFormat};
use rrdcast_mock::MockRrdTool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let tool = Arc::new(MockRrdTool::new().with_file("port-2.rrd", 300, &["INOCTETS", "OUTOCTETS"]));
    let caster = Rrdcast::builder().with_tool(tool).build()?;

    let query = SeriesQuery::new(None, None, TimeFormat::Utc, None, None)?;
    let result = caster.compile("port-2.rrd", &query).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
