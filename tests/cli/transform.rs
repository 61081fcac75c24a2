use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const CLIENT_COMPONENT: &str = r#"'use client';
import PropTypes from 'prop-types';

// Greets the user.
function Greeting({ name }) {
  return <p>Hello {name}</p>;
}

Greeting.propTypes = {
  name: PropTypes.string.isRequired,
  tone: PropTypes.oneOf(['warm', 'dry']),
};
"#;

const PLAIN: &str = "export const answer = 42;\n";

/// Assert that `fragments` appear in `code` in the given order.
fn assert_in_order(code: &str, fragments: &[&str]) {
    let mut from = 0;
    for fragment in fragments {
        let Some(offset) = code[from..].find(fragment) else {
            panic!("`{}` missing or out of order in:\n{}", fragment, code);
        };
        from += offset + fragment.len();
    }
}

#[test]
fn test_transform_prints_module() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", CLIENT_COMPONENT)?;

    let output = test.transform_command().arg("src/Greeting.jsx").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        stdout.lines().next().is_some_and(|line| line.contains("use client")),
        "directive should stay first:\n{}",
        stdout
    );
    assert_in_order(
        &stdout,
        &[
            "use client",
            "const _fakePropTypes = new Proxy(",
            "import PropTypes from",
            "// Greets the user.",
            "function Greeting(",
            "Greeting.__metadata = {",
            "_fakePropTypes.isRequired(_fakePropTypes.string)",
            "_fakePropTypes.oneOf([",
            "Greeting.propTypes = {",
        ],
    );
    assert!(!stdout.contains("// src/Greeting.jsx"));
    // The source file is left untouched.
    assert_eq!(test.read_file("src/Greeting.jsx")?, CLIENT_COMPONENT);

    Ok(())
}

#[test]
fn test_transform_headers_each_file_when_printing_several() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", CLIENT_COMPONENT)?;
    test.write_file("src/answer.js", PLAIN)?;

    let output = test.transform_command().arg("src").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &[
            "// src/Greeting.jsx",
            "Greeting.__metadata = {",
            "// src/answer.js",
            "answer = 42",
        ],
    );

    Ok(())
}

#[test]
fn test_transform_write_in_place() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", CLIENT_COMPONENT)?;
    test.write_file("src/answer.js", PLAIN)?;

    let output = test.transform_command().arg("--write").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("src/Greeting.jsx (1 of 1 components with metadata)"));
    assert!(stdout.contains("Transformed 2 of 2 files, 1 with metadata"));

    let written = test.read_file("src/Greeting.jsx")?;
    assert_in_order(
        &written,
        &["use client", "const _fakePropTypes", "Greeting.__metadata = {"],
    );
    // Modules without components still get the library, and nothing else changes.
    assert_in_order(
        &test.read_file("src/answer.js")?,
        &["const _fakePropTypes", "export const answer = 42;"],
    );
    assert!(!test.read_file("src/answer.js")?.contains("__metadata"));

    Ok(())
}

#[test]
fn test_transform_out_dir_mirrors_paths() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", CLIENT_COMPONENT)?;
    test.write_file("src/nested/answer.js", PLAIN)?;

    let output = test
        .transform_command()
        .args(["--out-dir", "build"])
        .output()?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(test.read_file("src/Greeting.jsx")?, CLIENT_COMPONENT);
    assert_in_order(
        &test.read_file("build/src/Greeting.jsx")?,
        &["use client", "const _fakePropTypes", "Greeting.__metadata = {"],
    );
    assert!(test.read_file("build/src/nested/answer.js")?.contains("answer = 42"));

    Ok(())
}

#[test]
fn test_transform_parse_error_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", CLIENT_COMPONENT)?;
    test.write_file("src/Broken.jsx", "class { render(")?;

    let output = test.transform_command().args(["--out-dir", "build"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("src/Broken.jsx: Failed to parse"));
    assert!(test.root().join("build/src/Greeting.jsx").exists());
    assert!(!test.root().join("build/src/Broken.jsx").exists());

    Ok(())
}

#[test]
fn test_transform_write_conflicts_with_out_dir() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", CLIENT_COMPONENT)?;

    let output = test
        .transform_command()
        .args(["--write", "--out-dir", "build"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("src/Greeting.jsx")?, CLIENT_COMPONENT);

    Ok(())
}
