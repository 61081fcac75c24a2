use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const BUTTON: &str = r#"
import React, { Component } from 'react';
import PropTypes from 'prop-types';

class Button extends Component {
  static propTypes = {
    label: PropTypes.string.isRequired,
    onClick: PropTypes.func,
  };
  render() { return <button onClick={this.props.onClick}>{this.props.label}</button>; }
}
"#;

const CARD: &str = r#"
import T from 'prop-types';

const Card = ({ title }) => <section>{title}</section>;
Card.propTypes = { title: T.node };

function Footer() { return null; }
"#;

#[test]
fn test_inspect_reports_components() -> Result<()> {
    let test = CliTest::with_file("src/Button.jsx", BUTTON)?;
    test.write_file("src/Card.jsx", CARD)?;

    let output = test.inspect_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Button.jsx (library _fakePropTypes, alias PropTypes)"));
    assert!(stdout.contains("✓ Button (class): label, onClick"));
    assert!(stdout.contains("Card.jsx (library _fakePropTypes, alias T)"));
    assert!(stdout.contains("✓ Card (function value): title"));
    assert!(stdout.contains("- Footer (function): no propTypes"));
    assert!(stdout.contains(
        "✓ Inspected 2 files: 3 components, 2 with metadata, 3 properties"
    ));

    Ok(())
}

#[test]
fn test_inspect_json_output() -> Result<()> {
    let test = CliTest::with_file("src/Card.jsx", CARD)?;

    let (output, value) = test.inspect_json(&[])?;

    assert!(output.status.success());
    let file = &value["files"][0];
    assert!(file["path"].as_str().unwrap().ends_with("Card.jsx"));
    assert_eq!(file["library"], "_fakePropTypes");
    assert_eq!(file["alias"], "T");
    assert_eq!(
        file["components"],
        json!([
            { "name": "Card", "kind": "functionValue", "properties": ["title"], "emitted": true },
            { "name": "Footer", "kind": "function", "properties": [], "emitted": false },
        ])
    );
    assert_eq!(value["summary"]["parseErrors"], 0);

    Ok(())
}

#[test]
fn test_inspect_parse_error_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file("src/Card.jsx", CARD)?;
    test.write_file("src/Broken.jsx", "class { render(")?;

    let (output, value) = test.inspect_json(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(value["summary"]["files"], 2);
    assert_eq!(value["summary"]["parseErrors"], 1);
    assert_eq!(value["summary"]["emitted"], 1);
    let broken = &value["files"][0];
    assert!(broken["path"].as_str().unwrap().ends_with("Broken.jsx"));
    assert!(broken["error"].as_str().unwrap().contains("Failed to parse"));

    Ok(())
}

#[test]
fn test_inspect_explicit_paths() -> Result<()> {
    let test = CliTest::with_file("src/Card.jsx", CARD)?;
    test.write_file("src/Button.jsx", BUTTON)?;
    test.write_file("lib/Other.jsx", "function Other() {}")?;

    let (output, value) = test.inspect_json(&["src/Card.jsx", "lib"])?;

    assert!(output.status.success());
    let paths: Vec<&str> = value["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().any(|p| p.ends_with("Card.jsx")));
    assert!(paths.iter().any(|p| p.ends_with("Other.jsx")));

    Ok(())
}

#[test]
fn test_inspect_missing_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.inspect_command().arg("nope.jsx").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path does not exist: nope.jsx"));

    Ok(())
}

#[test]
fn test_inspect_respects_config() -> Result<()> {
    let test = CliTest::with_file(
        ".ptmetarc.json",
        r#"{
  "sourceRoot": "./app",
  "ignores": ["**/legacy/**"],
  "transform": { "libraryBaseName": "stub", "librarySource": "my-prop-types" }
}"#,
    )?;
    test.write_file(
        "app/Card.jsx",
        &CARD.replace("'prop-types'", "'my-prop-types'"),
    )?;
    test.write_file("app/legacy/Old.jsx", BUTTON)?;
    test.write_file("app/Card.test.jsx", BUTTON)?;
    test.write_file("outside/Ignored.jsx", BUTTON)?;

    let (output, value) = test.inspect_json(&[])?;

    assert!(output.status.success());
    assert_eq!(value["summary"]["files"], 1);
    assert_eq!(value["files"][0]["library"], "_stub");
    assert_eq!(value["files"][0]["alias"], "T");

    Ok(())
}

#[test]
fn test_inspect_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".ptmetarc.json", r#"{ "transform": { "metadataField": "" } }"#)?;

    let output = test.inspect_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("'transform.metadataField' must not be empty")
    );

    Ok(())
}
