use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use docrec_recognizers::{load_collection, result_from_native, NativeResult, RecognitionResult};
use tracing_subscriber::EnvFilter;

mod display;

#[derive(Parser)]
#[command(name = "docrec", version, about = "Inspect recognizer settings and captured engine output")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the settings document a TOML collection produces.
    Settings { config: PathBuf },
    /// Convert captured engine output (a JSON array of native results).
    Convert {
        native: PathBuf,
        /// Print typed results as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Settings { config } => {
            let collection = load_collection(&config)?;
            let settings = collection.to_native()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Convert { native, json } => {
            let results = convert_file(&native)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for (index, result) in results.iter().enumerate() {
                    println!("#{index} {}", display::summary(result));
                }
            }
        }
    }

    Ok(())
}

fn convert_file(path: &Path) -> anyhow::Result<Vec<RecognitionResult>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let natives: Vec<NativeResult> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!("Converting {} native result(s)", natives.len());

    natives
        .iter()
        .enumerate()
        .map(|(index, native)| {
            result_from_native(native).with_context(|| format!("result #{index}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docrec_recognizers::RecognizerResult;

    #[test]
    fn convert_file_reads_native_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("native.json");
        std::fs::write(
            &path,
            r#"[{"recognizerType":"IkadRecognizer","fields":{"resultState":3,"name":"ALI BIN ABU"}}]"#,
        )
        .unwrap();

        let results = convert_file(&path).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_valid());
    }

    #[test]
    fn convert_file_names_the_failing_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("native.json");
        std::fs::write(
            &path,
            r#"[{"recognizerType":"IkadRecognizer","fields":{"resultState":3}},
                {"recognizerType":"Nope","fields":{}}]"#,
        )
        .unwrap();

        let err = convert_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("result #1"));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["docrec", "-v", "convert", "out.json", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Convert { json: true, .. }));
    }
}
