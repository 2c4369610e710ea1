use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use uecg_core::CodeGenerator;
use uecg_core::output::{self, WriteMode};
use uecg_core::parse::{self, SwaggerSpec};
use uecg_unreal_client::{UnrealClientConfig, UnrealClientGenerator};

/// Generate an Unreal Engine C++ HTTP client from a Swagger 2.0 spec.
#[derive(Parser)]
#[command(name = "uecg", version, about = "Swagger 2.0 to Unreal Engine C++ client generator")]
struct Cli {
    /// Unreal project name, used for the <PROJECT>_API export macro
    #[arg(short, long)]
    project: String,

    /// Path to the Swagger 2.0 spec file (YAML or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Name of the generated client class
    #[arg(short, long)]
    class: String,

    /// Output directory for the generated artifacts
    #[arg(short, long, default_value = "./export")]
    output: PathBuf,

    /// Keep writing remaining artifacts after a write failure and report
    /// every failure at the end, instead of stopping at the first one
    #[arg(long)]
    best_effort: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let spec = load_spec(&cli.input)?;
    log::info!(
        "parsed {} ({} paths, {} definitions)",
        cli.input.display(),
        spec.paths.len(),
        spec.definitions.len()
    );

    let config = UnrealClientConfig {
        project_name: cli.project.clone(),
        class_name: cli.class.clone(),
    };
    let files = UnrealClientGenerator::default().generate(&spec, &config)?;

    let mode = if cli.best_effort {
        WriteMode::BestEffort
    } else {
        WriteMode::Strict
    };
    let written = output::write_files(&cli.output, &files, mode)?;
    for path in &written {
        println!("wrote {}", path.display());
    }

    println!();
    println!(
        "Move {}.h to your {}/Source/{}/Public/",
        cli.class, cli.project, cli.project
    );
    println!(
        "Move {}.cpp to your {}/Source/{}/Private/",
        cli.class, cli.project, cli.project
    );
    println!();
    println!(
        "Add \"Http\", \"Json\", \"JsonUtilities\" to PublicDependencyModuleNames in your {}/Source/{}/{}.Build.cs",
        cli.project, cli.project, cli.project
    );

    Ok(())
}

fn load_spec(path: &PathBuf) -> Result<SwaggerSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let spec = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    Ok(spec)
}
