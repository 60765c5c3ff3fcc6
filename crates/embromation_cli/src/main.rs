//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `embromation_core` linkage.
//! - Print the sample catalog tree and one generated content block.
//!
//! Pass `--seed <n>` for reproducible content.

use embromation_core::{Catalog, CoreConfig, Entry, ALL_GROUPS_SCOPE};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("embromation_core ping={}", embromation_core::ping());
    println!("embromation_core version={}", embromation_core::core_version());

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let config = CoreConfig {
        seed: parse_seed(&args)?,
        ..CoreConfig::default()
    };
    let catalog = Catalog::with_sample_data(config).map_err(|err| err.to_string())?;

    let groups = catalog
        .get_groups(ALL_GROUPS_SCOPE)
        .map_err(|err| err.to_string())?;
    for group in groups {
        println!(
            "{} [{}] items={} top_items={}",
            group,
            group.unique_id(),
            group.items().len(),
            group.top_items().len()
        );
        for item in group.top_items() {
            println!("  - {} [{}] {}", item, item.unique_id(), item.subtitle());
        }
    }

    if let Some(item) = groups
        .get(0)
        .and_then(|group| group.top_items().get(0).cloned())
    {
        println!();
        println!("{}:", item.title());
        print!("{}", item.content());
    }
    Ok(())
}

fn parse_seed(args: &[String]) -> Result<Option<u64>, String> {
    match args {
        [] => Ok(None),
        [flag, value] if flag == "--seed" => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| format!("invalid seed `{value}`: {err}")),
        _ => Err("usage: embromation_cli [--seed <n>]".to_string()),
    }
}
