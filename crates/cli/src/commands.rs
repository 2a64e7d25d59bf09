//! Subcommand handlers. Output goes to the supplied writer so tests can
//! capture it.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use featuregrid_editors::{EditorRegistry, GridEditorsConfig, MatchRule};
use serde_json::{Value, json};

use crate::cli::{CellArgs, Command};

pub fn run(command: Command, registry: &EditorRegistry, out: &mut impl Write) -> Result<ExitCode> {
	match command {
		Command::List => list(registry, out),
		Command::Check { rules } => check(registry, &rules, out),
		Command::Resolve { rules, cell } => resolve(registry, &rules, &cell, out),
		Command::Validate { rules, cell, value } => validate(registry, &rules, &cell, &value, out),
	}
}

fn load_rules(path: &Path) -> Result<Vec<MatchRule>> {
	let config = GridEditorsConfig::load_from_path(path)
		.with_context(|| format!("loading rules from {}", path.display()))?;
	Ok(config.custom_editors_rules)
}

fn list(registry: &EditorRegistry, out: &mut impl Write) -> Result<ExitCode> {
	for name in registry.names() {
		let Some(entry) = registry.entry(&name) else {
			continue;
		};
		let slots: Vec<&str> = entry.slots().map(|slot| slot.key()).collect();
		writeln!(out, "{name}: {}", slots.join(", "))?;
	}
	Ok(ExitCode::SUCCESS)
}

fn check(registry: &EditorRegistry, path: &Path, out: &mut impl Write) -> Result<ExitCode> {
	let rules = load_rules(path)?;
	let mut problems = 0;

	for (index, rule) in rules.iter().enumerate() {
		let problem = if !rule.is_usable() {
			Some("has no patterns and never matches".to_string())
		} else {
			match rule.editor() {
				None => Some("names no editor".to_string()),
				Some(name) if !registry.contains(name) => Some(format!("names unknown editor {name:?}")),
				Some(_) => None,
			}
		};

		if let Some(problem) = problem {
			problems += 1;
			tracing::warn!(rule = index, %problem, "unusable editor rule");
			writeln!(out, "rule {index}: {problem}")?;
		}
	}

	writeln!(out, "{} rules, {problems} problems", rules.len())?;
	Ok(if problems == 0 {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

fn resolve(registry: &EditorRegistry, path: &Path, cell: &CellArgs, out: &mut impl Write) -> Result<ExitCode> {
	let rules = load_rules(path)?;
	let Some(editor) = registry.get_custom_editor(&cell.field(), &rules, &cell.type_info()) else {
		writeln!(out, "no custom editor for {}; default cell renderer applies", cell.attribute)?;
		return Ok(ExitCode::SUCCESS);
	};

	let report = json!({
		"name": editor.editor(),
		"slot": editor.slot().key(),
		"spec": editor.render_default(),
	});
	writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
	Ok(ExitCode::SUCCESS)
}

fn validate(
	registry: &EditorRegistry,
	path: &Path,
	cell: &CellArgs,
	value: &Value,
	out: &mut impl Write,
) -> Result<ExitCode> {
	let rules = load_rules(path)?;
	let Some(editor) = registry.get_custom_editor(&cell.field(), &rules, &cell.type_info()) else {
		writeln!(out, "valid: no custom editor for {}", cell.attribute)?;
		return Ok(ExitCode::SUCCESS);
	};

	let spec = editor.render_default();
	if spec.validate(value) {
		writeln!(out, "valid: {value} accepted by {}", spec.kind.name())?;
		Ok(ExitCode::SUCCESS)
	} else {
		writeln!(out, "invalid: {value} rejected by {}", spec.kind.name())?;
		Ok(ExitCode::FAILURE)
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use clap::Parser;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::cli::Cli;

	const RULES: &str = r#"
[[customEditorsRules]]
editor = "DropDownEditor"
regex = { attribute = "STATE_NAME" }
editorProps = { values = ["Opt1", "Opt2"], forceSelection = true }

[[customEditorsRules]]
editor = "NumberEditor"
regex = { attribute = "PERSONS" }
editorProps = { minValue = 0 }
"#;

	fn rules_file(content: &str) -> (tempfile::TempDir, PathBuf) {
		let dir = tempfile::tempdir().expect("temp dir should be creatable");
		let path = dir.path().join("rules.toml");
		std::fs::write(&path, content).expect("rules should be writable");
		(dir, path)
	}

	fn run_args(args: &[&str]) -> (ExitCode, String) {
		let cli = Cli::try_parse_from(std::iter::once("featuregrid").chain(args.iter().copied())).unwrap();
		let mut out = Vec::new();
		let code = run(cli.command, &EditorRegistry::with_builtins(), &mut out).unwrap();
		(code, String::from_utf8(out).unwrap())
	}

	#[test]
	fn list_prints_builtins() {
		let (code, out) = run_args(&["list"]);
		assert_eq!(code, ExitCode::SUCCESS);
		assert_eq!(
			out,
			"CustomAutocompleteEditor: string\n\
			 DropDownEditor: string\n\
			 FormatEditor: string\n\
			 NumberEditor: int, number\n"
		);
	}

	#[test]
	fn resolve_prints_spec() {
		let (_dir, path) = rules_file(RULES);
		let path = path.to_str().unwrap();
		let (code, out) = run_args(&["resolve", path, "-a", "STATE_NAME", "-t", "string"]);
		assert_eq!(code, ExitCode::SUCCESS);

		let report: Value = serde_json::from_str(&out).unwrap();
		assert_eq!(report["name"], json!("DropDownEditor"));
		assert_eq!(report["slot"], json!("string"));
		assert_eq!(report["spec"]["kind"]["options"]["values"], json!(["Opt1", "Opt2"]));
	}

	#[test]
	fn resolve_without_match_reports_default() {
		let (_dir, path) = rules_file(RULES);
		let (_, out) = run_args(&["resolve", path.to_str().unwrap(), "-a", "STAsTE_NAME", "-t", "string"]);
		assert!(out.starts_with("no custom editor for STAsTE_NAME"), "{out}");
	}

	#[test]
	fn validate_rejects_values_outside_dropdown() {
		let (_dir, path) = rules_file(RULES);
		let path = path.to_str().unwrap();

		let (code, _) = run_args(&["validate", path, "-a", "STATE_NAME", "-t", "string", "--value", "Opt1"]);
		assert_eq!(code, ExitCode::SUCCESS);

		let (code, out) = run_args(&["validate", path, "-a", "STATE_NAME", "-t", "string", "--value", "Opt9"]);
		assert_eq!(code, ExitCode::FAILURE);
		assert!(out.starts_with("invalid"), "{out}");

		let (code, _) = run_args(&["validate", path, "-a", "PERSONS", "-t", "int", "--value=-4"]);
		assert_eq!(code, ExitCode::FAILURE);
	}

	#[test]
	fn check_reports_unusable_rules() {
		let (_dir, path) = rules_file(
			r#"
[[rules]]
editor = "DropDownEditor"

[[rules]]
editor = "SliderEditor"
regex = { attribute = "AREA" }
"#,
		);
		let (code, out) = run_args(&["check", path.to_str().unwrap()]);
		assert_eq!(code, ExitCode::FAILURE);
		assert_eq!(
			out,
			"rule 0: has no patterns and never matches\n\
			 rule 1: names unknown editor \"SliderEditor\"\n\
			 2 rules, 2 problems\n"
		);
	}

	#[test]
	fn check_passes_valid_rules() {
		let (_dir, path) = rules_file(RULES);
		let (code, out) = run_args(&["check", path.to_str().unwrap()]);
		assert_eq!(code, ExitCode::SUCCESS);
		assert_eq!(out, "2 rules, 0 problems\n");
	}

	#[test]
	fn missing_rules_file_is_an_error() {
		let cli = Cli::try_parse_from(["featuregrid", "check", "/nonexistent/rules.toml"]).unwrap();
		let err = run(cli.command, &EditorRegistry::with_builtins(), &mut Vec::new()).unwrap_err();
		assert!(format!("{err:#}").contains("loading rules from /nonexistent/rules.toml"));
	}
}
