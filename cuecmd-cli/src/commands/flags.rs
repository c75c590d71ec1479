// ============================================================================
// cuecmd-cli/src/commands/flags.rs
// ============================================================================
//
// FLAGS COMMAND: `cuecmd flags <subcommand>`
//
// Lists the options a subcommand accepts, straight from its schema, either
// as an aligned table or as JSON.
//
// AI-ASSISTANT-INFO: Schema listing command

use crate::cli::FlagsArgs;
use crate::error::CliResult;
use crate::terminal;
use cuecmd_core::{CoreError, OptionSet, OptionSpec};
use serde_json::{Value, json};

/// Schemas listed for `args`, subcommand first.
fn selected_schemas(args: &FlagsArgs) -> Vec<OptionSet> {
    let mut sets = vec![OptionSet::for_subcommand(args.subcommand)];
    if args.global {
        sets.push(OptionSet::global());
    }
    sets
}

fn spec_json(spec: &OptionSpec) -> Value {
    json!({
        "name": spec.name,
        "flag": spec.flag(),
        "kind": spec.kind.as_str(),
        "description": spec.description(),
    })
}

/// Renders the listing as a JSON object keyed by schema label.
pub fn render_json(args: &FlagsArgs) -> Value {
    let mut listing = serde_json::Map::new();
    for set in selected_schemas(args) {
        let specs: Vec<Value> = set.schema().iter().map(spec_json).collect();
        listing.insert(set.label().to_string(), Value::Array(specs));
    }
    Value::Object(listing)
}

/// Renders one schema as table rows: flag, kind, description.
pub fn render_rows(set: &OptionSet) -> Vec<String> {
    let flag_width = set
        .schema()
        .iter()
        .map(|spec| spec.flag().len())
        .max()
        .unwrap_or(0);

    set.schema()
        .iter()
        .map(|spec| {
            format!(
                "  {:<flag_width$}  {:<11}  {}",
                spec.flag(),
                spec.kind.as_str(),
                spec.description()
            )
        })
        .collect()
}

/// Entry point for `cuecmd flags`.
pub fn run_flags(args: &FlagsArgs) -> CliResult<()> {
    if args.json {
        let rendered = serde_json::to_string_pretty(&render_json(args))
            .map_err(|e| CoreError::Config(format!("failed to render schema: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    for (index, set) in selected_schemas(args).iter().enumerate() {
        if index > 0 {
            println!();
        }
        terminal::print_heading(&format!("{} options:", set.label()));
        for row in render_rows(set) {
            println!("{row}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuecmd_core::Subcommand;

    fn args(subcommand: Subcommand, global: bool) -> FlagsArgs {
        FlagsArgs {
            subcommand,
            global,
            json: true,
        }
    }

    #[test]
    fn test_render_json_lists_schema() {
        let listing = render_json(&args(Subcommand::Eval, false));
        let eval = listing["eval"].as_array().unwrap();
        assert_eq!(eval.len(), Subcommand::Eval.schema().len());
        assert!(listing.get("global").is_none());

        let expression = eval
            .iter()
            .find(|spec| spec["name"] == "expression")
            .unwrap();
        assert_eq!(expression["flag"], "--expression");
        assert_eq!(expression["kind"], "string-list");
    }

    #[test]
    fn test_render_json_with_global() {
        let listing = render_json(&args(Subcommand::Vet, true));
        assert!(listing["vet"].is_array());
        assert!(
            listing["global"]
                .as_array()
                .unwrap()
                .iter()
                .any(|spec| spec["flag"] == "--all-errors")
        );
    }

    #[test]
    fn test_render_rows_one_per_option() {
        let set = OptionSet::for_subcommand(Subcommand::Def);
        let rows = render_rows(&set);
        assert_eq!(rows.len(), set.schema().len());
        assert!(rows.iter().any(|row| row.contains("--show-attributes")));
    }
}
