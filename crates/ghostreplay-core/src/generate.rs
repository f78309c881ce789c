use ghostreplay_types::{GenerationOptions, IncidentRecord};
use serde_json::Value;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Framework names the generator has a template for.
pub const SUPPORTED_FRAMEWORKS: &[&str] = &["pytest"];

/// Identifier used when the endpoint yields nothing usable.
pub const FALLBACK_IDENTIFIER: &str = "api_endpoint";

/// pytest discovery conventions. Generated files and functions follow these
/// prefixes so the test runner picks them up without configuration.
pub const PYTEST_FILE_PREFIX: &str = "test_";
pub const PYTEST_FUNCTION_PREFIX: &str = "test_";

/// Status code assumed in the assertion scaffold when the log had none.
const DEFAULT_SCAFFOLD_STATUS: u16 = 500;

/// Derive a test identifier fragment from an endpoint path.
///
/// Each `/` and `-` becomes `_`, then leading/trailing underscores are
/// trimmed. `/api/users/create` -> `api_users_create`. An endpoint that
/// leaves nothing (`/`, empty string) falls back to
/// [`FALLBACK_IDENTIFIER`].
pub fn test_identifier(endpoint: &str) -> String {
    let replaced: String = endpoint
        .chars()
        .map(|c| if c == '/' || c == '-' { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Title-case the identifier segments and strip underscores, for use as a
/// test class name suffix: `api_users_create` -> `ApiUsersCreate`.
fn class_suffix(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Render the test file source for an incident.
///
/// Dispatches on `options.framework`; an unknown name is a hard
/// [`Error::UnsupportedFramework`] rather than a silent fallback, since the
/// framework choice affects downstream tooling compatibility. The
/// `include_mocks`/`include_fixtures` toggles are advisory and do not
/// change the rendered output. Rendering is pure and deterministic: the
/// same record and options always produce byte-identical text.
pub fn render(incident: &IncidentRecord, options: &GenerationOptions) -> Result<String> {
    match options.framework.as_str() {
        "pytest" => Ok(render_pytest(incident)),
        other => Err(Error::UnsupportedFramework(other.to_string())),
    }
}

/// Render and write the test file, creating missing parent directories and
/// overwriting any existing file at the output path. Rendering happens
/// first, so a failed render leaves no partial file behind.
pub fn write_test_file(
    incident: &IncidentRecord,
    options: &GenerationOptions,
) -> Result<PathBuf> {
    let content = render(incident, options)?;

    if let Some(parent) = options.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&options.output_path, content)?;

    Ok(options.output_path.clone())
}

fn render_pytest(incident: &IncidentRecord) -> String {
    let identifier = test_identifier(&incident.endpoint);
    let class_name = format!("Test{}Error", class_suffix(&identifier));
    let iso_timestamp = incident.timestamp.to_rfc3339();
    let status = incident.status_code.unwrap_or(DEFAULT_SCAFFOLD_STATUS);
    let body_literal = incident
        .body
        .as_ref()
        .map(|body| python_literal(&Value::Object(body.clone()), 2))
        .unwrap_or_else(|| "{}".to_string());

    let mut out = String::new();

    // Module docstring: timestamp and method+endpoint are the two facts a
    // developer needs to locate the incident.
    let _ = writeln!(out, "\"\"\"");
    let _ = writeln!(out, "Generated test from a production error log.");
    let _ = writeln!(out, "Incident timestamp: {}", iso_timestamp);
    let _ = writeln!(out, "Endpoint: {} {}", incident.method, incident.endpoint);
    let _ = writeln!(out, "\"\"\"");
    let _ = writeln!(out, "import pytest");
    let _ = writeln!(out, "from freezegun import freeze_time");
    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "class {}:", class_name);
    let _ = writeln!(
        out,
        "    \"\"\"Reproduces the production error on {}.\"\"\"",
        incident.endpoint
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "    @freeze_time(\"{}\")", iso_timestamp);
    let _ = writeln!(
        out,
        "    def {}{}_reproduces_error(self):",
        PYTEST_FUNCTION_PREFIX, identifier
    );

    // Incident context goes into comments, not string literals, so
    // arbitrary stack traces and error messages cannot break the syntax.
    let _ = writeln!(
        out,
        "        # Original error: {}",
        comment_text(incident.error_message.as_deref().unwrap_or("Unknown error"))
    );
    let _ = writeln!(out, "        # Stack trace (truncated):");
    for line in truncate_stack(&incident.stack).lines() {
        let _ = writeln!(out, "        #   {}", line);
    }
    let _ = writeln!(out, "        request_body = {}", body_literal);
    let _ = writeln!(out);
    let _ = writeln!(out, "        # TODO: Set up your application client here");
    let _ = writeln!(out, "        # client = YourAppClient()");
    let _ = writeln!(out);
    let _ = writeln!(out, "        # TODO: Make the request that caused the error");
    let _ = writeln!(
        out,
        "        # response = client.{}(\"{}\", json=request_body)",
        incident.method.to_lowercase(),
        incident.endpoint
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "        # TODO: Assert the error condition");
    let _ = writeln!(out, "        # assert response.status_code == {}", status);
    let _ = writeln!(
        out,
        "        # assert \"expected error message\" in response.json()[\"error\"]"
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "        # Placeholder assertion. Replace with the actual failing call."
    );
    let _ = writeln!(out, "        with pytest.raises(Exception) as exc_info:");
    let _ = writeln!(
        out,
        "            raise Exception(\"Replace this with actual failing code\")"
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "        assert \"Replace this with actual error validation\" in str(exc_info.value)"
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "    # Enable once the external dependencies to mock are known:");
    let _ = writeln!(out, "    # @pytest.fixture");
    let _ = writeln!(out, "    # def mock_dependencies(self):");
    let _ = writeln!(
        out,
        "    #     \"\"\"Mock external dependencies that might affect the test.\"\"\""
    );
    let _ = writeln!(
        out,
        "    #     with patch(\"your_module.external_service\") as mock_service:"
    );
    let _ = writeln!(out, "    #         mock_service.return_value = Mock()");
    let _ = writeln!(out, "    #         yield mock_service");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "    def {}{}_with_valid_input_should_pass(self):",
        PYTEST_FUNCTION_PREFIX, identifier
    );
    let _ = writeln!(
        out,
        "        # TODO: Verify the endpoint with valid input once the fix lands."
    );
    let _ = writeln!(out, "        pass");

    out
}

fn truncate_stack(stack: &str) -> String {
    if stack.chars().count() <= 100 {
        stack.to_string()
    } else {
        stack.chars().take(100).collect::<String>() + "..."
    }
}

/// Collapse newlines so a free-text value stays on one comment line.
fn comment_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Render a JSON value as a Python literal expression.
///
/// `null`/`true`/`false` map to `None`/`True`/`False`; strings keep their
/// JSON escaping, which Python double-quoted strings accept unchanged.
/// Nested containers are pretty-printed with 4-space steps starting at
/// `indent` levels, so the result stays aligned when embedded in generated
/// source.
fn python_literal(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_python_value(&mut out, value, indent);
    out
}

fn write_python_value(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(_) => {
            // JSON string escaping is a subset of Python's
            let _ = write!(out, "{}", value);
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for item in items {
                push_indent(out, indent + 1);
                write_python_value(out, item, indent + 1);
                out.push_str(",\n");
            }
            push_indent(out, indent);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (key, item) in map {
                push_indent(out, indent + 1);
                let _ = write!(out, "{}: ", Value::String(key.clone()));
                write_python_value(out, item, indent + 1);
                out.push_str(",\n");
            }
            push_indent(out, indent);
            out.push('}');
        }
    }
}

fn push_indent(out: &mut String, levels: usize) {
    for _ in 0..levels {
        out.push_str("    ");
    }
}
