use std::sync::Arc;

use rrdcast::{Rrdcast, RrdcastBuilder, RrdcastError, SeriesQuery, TimeFormat};
use rrdcast_mock::MockRrdTool;

fn plain_query() -> SeriesQuery {
    SeriesQuery::new(None, None, TimeFormat::Utc, None, None).unwrap()
}

#[test]
fn builder_requires_a_tool() {
    let err = RrdcastBuilder::new().build().unwrap_err();
    assert!(matches!(err, RrdcastError::Validation(_)));
}

#[tokio::test]
async fn unknown_files_surface_as_not_found_before_any_invocation() {
    let caster = Rrdcast::builder()
        .with_tool(Arc::new(MockRrdTool::new()))
        .build()
        .unwrap();
    let err = caster.compile("missing.rrd", &plain_query()).await.unwrap_err();
    assert!(matches!(err, RrdcastError::NotFound { .. }));
}

#[tokio::test]
async fn tool_failures_abort_the_request() {
    let caster = Rrdcast::builder()
        .with_tool(Arc::new(MockRrdTool::new().with_broken_file("broken.rrd")))
        .build()
        .unwrap();
    let err = caster.compile("broken.rrd", &plain_query()).await.unwrap_err();
    assert!(matches!(err, RrdcastError::Tool { .. }));
}
