//! blockcheck: validate block definition files
//!
//! Reads each definition file given on the command line, runs the full
//! pipeline (parse, block construction, interface-index assignment), and
//! prints every accumulated diagnostic in compiler style:
//!
//! ```text
//! blocks/nav.block:3:3: error: block-interface-index must be a number
//! ```
//!
//! Exits 0 when every file is clean, 1 when any diagnostic is error
//! severity, and 2 on usage errors.

use std::{env, fs, process::ExitCode};

use anyhow::{Context, Result};
use styleblocks_core::{analysis::process_definition, CompilerConfig};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: blockcheck <definition-file>...");
        return ExitCode::from(2);
    }

    let config = env::current_dir()
        .map_or_else(|_| CompilerConfig::new(), |dir| CompilerConfig::new().with_root(dir));

    let mut clean = true;
    for path in &args {
        match check_file(&config, path) {
            Ok(report) => {
                print!("{}", report.rendered);
                clean &= report.ok;
            }
            Err(e) => {
                eprintln!("blockcheck: {e:#}");
                clean = false;
            }
        }
    }

    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Outcome of checking one definition file
#[derive(Debug)]
struct Report {
    /// No error-severity diagnostics were found
    ok: bool,
    /// Rendered diagnostics, one per line
    rendered: String,
}

/// Check one definition file and render its diagnostics.
fn check_file(config: &CompilerConfig, path: &str) -> Result<Report> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))?;
    let (document, block) = process_definition(config, &source, path)
        .with_context(|| format!("failed to process `{path}`"))?;

    let display = config.display_path(path);
    let mut rendered = String::new();

    for issue in document.issues() {
        let location = issue.column.map_or_else(
            || format!("{display}:{}", issue.line),
            |column| format!("{display}:{}:{column}", issue.line),
        );
        rendered.push_str(&format!(
            "{location}: {}: {}\n",
            issue.severity, issue.message
        ));
    }
    for error in block.errors() {
        rendered.push_str(&format!("{error}\n"));
    }

    let ok = !document.has_errors() && !block.has_errors();
    if ok {
        rendered.push_str(&format!(
            "{display}: ok ({} style nodes, block `{}`)\n",
            block.style_nodes(true).count(),
            block.name()
        ));
    }

    Ok(Report { ok, rendered })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_definition(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".block")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn clean_file_reports_ok() {
        let file = write_definition(
            ":scope { block-interface-index: 0; }\n\
             .button { block-interface-index: 1; }\n",
        );

        let config = CompilerConfig::new();
        let report = check_file(&config, file.path().to_str().unwrap()).unwrap();

        assert!(report.ok);
        assert!(report.rendered.contains("ok (2 style nodes"));
    }

    #[test]
    fn broken_file_renders_diagnostics() {
        let file = write_definition(".button { block-interface-index: nope; }\n");

        let config = CompilerConfig::new();
        let report = check_file(&config, file.path().to_str().unwrap()).unwrap();

        assert!(!report.ok);
        assert!(report
            .rendered
            .contains("error: block-interface-index must be a number"));
        assert!(report.rendered.contains("Style node `:scope`"));
        assert!(!report.rendered.contains(": ok ("));
    }

    #[test]
    fn parse_issues_render_with_positions() {
        let file = write_definition("div { }\n:scope { block-interface-index: 0; }\n");

        let config = CompilerConfig::new();
        let report = check_file(&config, file.path().to_str().unwrap()).unwrap();

        assert!(!report.ok);
        assert!(report.rendered.contains(":1:1: error: Invalid selector `div`"));
    }

    #[test]
    fn missing_file_is_a_context_error() {
        let config = CompilerConfig::new();
        let err = check_file(&config, "/no/such/definition.block").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
