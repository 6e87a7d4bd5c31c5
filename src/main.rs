use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use solidity_abi::{parse_abi, Abi};

#[derive(Parser)]
#[command(name = "solidity-abi")]
#[command(about = "Inspect Ethereum contract ABI documents")]
#[command(version)]
struct Cli {
    /// Path to an ABI JSON file or a directory of them
    #[arg(short, long)]
    input: String,

    /// Re-emit the decoded entries as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    // Process input (file or directory)
    let input_path = Path::new(&cli.input);
    if input_path.is_file() {
        process_single_file(&cli, input_path)?;
    } else if input_path.is_dir() {
        process_directory(&cli, input_path)?;
    } else {
        anyhow::bail!("input path does not exist: {}", cli.input);
    }

    Ok(())
}

fn process_single_file(cli: &Cli, file_path: &Path) -> Result<()> {
    let abi = load_abi(file_path)?;
    report(cli, file_path, &abi)
}

fn process_directory(cli: &Cli, dir_path: &Path) -> Result<()> {
    let mut decoded = 0;
    let mut failed = 0;

    let abi_files = find_abi_files(dir_path)?;
    let file_count = abi_files.len();
    for file_path in abi_files {
        match load_abi(&file_path) {
            Ok(abi) => {
                decoded += 1;
                report(cli, &file_path, &abi)?;
            }
            Err(e) => {
                failed += 1;
                warn!("Failed to process {}: {}", file_path.display(), e);
            }
        }
    }

    // Print combined summary
    println!();
    println!("{} {} of {} files decoded", "✔".green(), decoded, file_count);
    if failed > 0 {
        println!("{} {} file(s) failed", "⚠".yellow(), failed);
    }

    Ok(())
}

fn load_abi(file_path: &Path) -> Result<Abi> {
    debug!("Decoding {}", file_path.display());

    let text = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file_path.display()))?;
    let abi = parse_abi(&doc)
        .with_context(|| format!("invalid ABI document {}", file_path.display()))?;

    Ok(abi)
}

fn report(cli: &Cli, path: &Path, abi: &Abi) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(abi)?);
        return Ok(());
    }

    println!(
        "{} ({} entries)",
        path.display().to_string().bold(),
        abi.len()
    );

    if let Some(constructor) = abi.constructor() {
        let params: Vec<String> = constructor.inputs.iter().map(|t| t.to_string()).collect();
        println!("  constructor({})", params.join(","));
    }
    for function in abi.functions() {
        let selector = format!("0x{}", hex::encode(function.selector()));
        let marker = if function.constant { " view" } else { "" };
        println!(
            "  {} {}{}",
            selector.dimmed(),
            function.signature(),
            marker.dimmed()
        );
    }
    for event in abi.events() {
        let topic = format!("0x{}..", hex::encode(&event.topic()[..4]));
        let marker = if event.anonymous { " anonymous" } else { "" };
        println!(
            "  {} event {}{}",
            topic.dimmed(),
            event.signature(),
            marker.dimmed()
        );
    }

    Ok(())
}

fn find_abi_files(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut abi_files = Vec::new();

    for entry in fs::read_dir(dir_path)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(extension) = path.extension() {
                if extension == "json" {
                    abi_files.push(path);
                }
            }
        } else if path.is_dir() {
            // Recursively search subdirectories
            let sub_files = find_abi_files(&path)?;
            abi_files.extend(sub_files);
        }
    }

    abi_files.sort();
    Ok(abi_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_json_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b.json"), "[]").unwrap();

        let files = find_abi_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"a.json"));
        assert!(names.contains(&"b.json"));
    }

    #[test]
    fn loads_an_abi_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        fs::write(
            &path,
            r#"[{"type": "constructor", "inputs": [{"type": "uint256"}]}]"#,
        )
        .unwrap();

        let abi = load_abi(&path).unwrap();
        assert_eq!(abi.constructor().unwrap().inputs.len(), 1);
    }

    #[test]
    fn load_abi_rejects_malformed_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"type": "mystery"}]"#).unwrap();

        assert!(load_abi(&path).is_err());
    }
}
