use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use featuregrid_editors::{EditorProps, FieldDescriptor, FieldTypeInfo};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "featuregrid")]
#[command(about = "Check custom editor configuration for attribute grids")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// List built-in editors and the types they handle
	List,
	/// Load a rules file and report rules that can never apply
	Check {
		/// Rules file (.toml or .json)
		rules: PathBuf,
	},
	/// Show the editor a grid cell resolves to
	Resolve {
		/// Rules file (.toml or .json)
		rules: PathBuf,
		#[command(flatten)]
		cell: CellArgs,
	},
	/// Resolve the editor for a cell and check a value against it
	Validate {
		/// Rules file (.toml or .json)
		rules: PathBuf,
		#[command(flatten)]
		cell: CellArgs,
		/// Value to check, as JSON (bare words are read as strings)
		#[arg(long, value_parser = parse_value)]
		value: Value,
	},
}

/// Identity and type of the grid cell being resolved.
#[derive(Args, Debug)]
pub struct CellArgs {
	/// Attribute name, e.g. STATE_NAME
	#[arg(long, short = 'a')]
	pub attribute: String,

	/// Attribute type tag (string, int, number, ...)
	#[arg(long = "type", short = 't', value_name = "TYPE")]
	pub type_tag: String,

	/// Layer service URL
	#[arg(long)]
	pub url: Option<String>,

	/// Qualified layer name, e.g. topp:states
	#[arg(long)]
	pub type_name: Option<String>,

	/// Extra column prop (repeatable)
	#[arg(long = "prop", value_name = "KEY=VALUE", value_parser = parse_prop)]
	pub props: Vec<(String, Value)>,
}

impl CellArgs {
	pub fn field(&self) -> FieldDescriptor {
		FieldDescriptor {
			attribute: self.attribute.clone(),
			url: self.url.clone(),
			type_name: self.type_name.clone(),
		}
	}

	pub fn type_info(&self) -> FieldTypeInfo {
		let props: EditorProps = self.props.iter().cloned().collect();
		FieldTypeInfo::new(&self.type_tag).with_props(props)
	}
}

/// JSON when it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Result<Value, String> {
	Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

fn parse_prop(raw: &str) -> Result<(String, Value), String> {
	let (key, value) = raw
		.split_once('=')
		.ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
	if key.is_empty() {
		return Err(format!("empty key in {raw:?}"));
	}
	Ok((key.to_string(), parse_value(value)?))
}
