// Integration tests for the preview binary's building blocks:
// argument parsing, scenario files on disk, and rendering a loaded scenario.

mod common;

use common::ScenarioFile;
use sku_selector::cli::{parse_args, CliCommand, Scenario};
use sku_selector::ui::{render_selector, HitAreaRegistry};

use ratatui::text::Line;

const TILE_SCENARIO: &str = r#"{
    "variations": [
        {
            "originalName": "Color",
            "name": "Colour",
            "options": [
                { "label": "01-Red" },
                { "label": "02-Blue", "available": false },
                { "label": "03-Green", "impossible": true },
                { "label": "04-Black" },
                { "label": "05-White" }
            ]
        },
        {
            "originalName": "Size",
            "name": "Size",
            "options": [{ "label": "S" }, { "label": "M" }, { "label": "L" }]
        }
    ],
    "selection": { "Colour": "01-Red" },
    "config": { "isSummaryContext": true, "maxItemsWhenSummarized": 4 },
    "product": {
        "product": {
            "productId": "42",
            "items": [{ "itemId": "sku123", "images": [{ "imageUrl": "https://img.test/a.png" }], "sellers": [] }]
        }
    }
}"#;

fn text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("sku-selector".to_string())
        .chain(list.iter().map(|s| s.to_string()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn parse_and_load_scenario_from_disk() {
    let file = ScenarioFile::new(TILE_SCENARIO);
    let path = file.path().to_string_lossy().to_string();

    let CliCommand::Preview(preview) = parse_args(args(&["--width", "100", path.as_str()])) else {
        panic!("expected a preview command");
    };
    assert_eq!(preview.width, 100);

    let scenario = Scenario::load(&preview.scenario).unwrap();
    assert_eq!(scenario.variations.len(), 2);
    assert!(scenario.config.is_summary_context);
    assert_eq!(
        scenario.product.as_ref().and_then(|p| p.product.product_id.as_deref()),
        Some("42")
    );
}

#[test]
fn loaded_scenario_renders_summary_tile() {
    let file = ScenarioFile::new(TILE_SCENARIO);
    let mut session = Scenario::load(file.path()).unwrap().into_session().unwrap();
    let mut registry = HitAreaRegistry::new();

    let lines = render_selector(&mut session, &sku_selector::ui::LayoutContext::new(100, 30), &mut registry);
    let rendered: Vec<String> = lines.iter().map(text).collect();

    // Color value is the segment after the separator
    assert_eq!(rendered[0], "Colour: Red");
    assert_eq!(rendered[1], "▶ ■ 01-Red   ■ 02-Blue   ■ 03-Green → product");
    assert_eq!(rendered[2], "");
    assert_eq!(rendered[3], "Size");
    assert_eq!(rendered[4], "  S   M   L");
}

#[test]
fn external_sku_from_scenario_product() {
    let file = ScenarioFile::new(TILE_SCENARIO);
    let mut session = Scenario::load(file.path()).unwrap().into_session().unwrap();
    let mut sink = common::RecordingDispatch::new();

    session.sync_external_sku(Some("sku123"), &mut sink).unwrap();
    let sku = session.product().unwrap().product.sku.clone().unwrap();
    assert_eq!(sku.image.map(|i| i.image_url), Some("https://img.test/a.png".to_string()));
    assert!(sku.seller.is_none());
}

#[test]
fn malformed_scenario_reports_parse_error() {
    let file = ScenarioFile::new("{ \"variations\": 3 }");
    let err = Scenario::load(file.path()).unwrap_err();

    assert_eq!(err.error_code(), "PARSE_FAILED");
    assert!(err.user_message().contains("could not be read"));
}

#[test]
fn missing_scenario_reports_io_error() {
    let file = ScenarioFile::new("{}");
    let missing = file.path().with_file_name("absent.json");
    let err = Scenario::load(&missing).unwrap_err();

    assert_eq!(err.error_code(), "IO_FAILED");
    assert!(err.user_message().contains("absent.json"));
}

#[test]
fn version_and_help_flags() {
    assert_eq!(parse_args(args(&["-V"])), CliCommand::Version);
    assert_eq!(parse_args(args(&["--help", "x.json"])), CliCommand::Help);
}
