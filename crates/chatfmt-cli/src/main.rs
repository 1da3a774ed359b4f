use anyhow::{Context, Result};
use chatfmt_config::Config;
use chatfmt_engine::{Chunk, ChunkSplitter, Platform, format_for};
use clap::Parser;
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

/// Convert assistant-style Markdown for WhatsApp, LinkedIn or Instagram.
#[derive(Debug, Parser)]
#[command(name = "chatfmt", version)]
struct Cli {
    /// Markdown file to convert. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Target platform: whatsapp, linkedin or instagram.
    #[arg(short, long)]
    platform: Option<Platform>,

    /// Maximum characters per chunk (at least 200).
    #[arg(short, long)]
    max_len: Option<usize>,

    /// Print the whole result as a single chunk.
    #[arg(long)]
    no_split: bool,

    /// Remember the resolved platform and chunk settings.
    #[arg(long)]
    save: bool,
}

impl Cli {
    /// Command-line flags take precedence over the stored config.
    fn resolve(&self, stored: Config) -> Config {
        let platform = self.platform.unwrap_or(stored.platform);
        // A remembered budget belongs to the remembered platform.
        let max_len = match (self.max_len, self.platform) {
            (Some(max_len), _) => Some(max_len),
            (None, Some(p)) if p != stored.platform => None,
            (None, _) => stored.max_len,
        };

        Config {
            platform,
            max_len,
            split: stored.split && !self.no_split,
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display())),
            _ => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    let stored = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?
        .unwrap_or_default();

    let config = cli.resolve(stored);
    log::info!(
        "Formatting for {} (chunk budget: {:?})",
        config.platform,
        config.effective_max_len()
    );

    if cli.save {
        config.save_to_path(&config_path)?;
        log::info!("Saved preferences to {}", config_path.display());
    }

    let input = cli.read_input()?;
    let formatted = format_for(config.platform, &input);
    let chunks = ChunkSplitter::new(config.effective_max_len().unwrap_or(0)).split(&formatted);

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_chunks(&chunks).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// A single chunk is printed as is; several get a numbered header each.
fn render_chunks(chunks: &[Chunk]) -> String {
    if let [only] = chunks {
        return format!("{}\n", only.text);
    }

    let total = chunks.len();
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            format!(
                "--- chunk {}/{} ({} chars) ---\n{}\n",
                i + 1,
                total,
                chunk.len(),
                chunk.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chatfmt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_flags() {
        let cli = parse(&["--platform", "whatsapp", "-m", "500", "--no-split", "notes.md"]);

        assert_eq!(cli.platform, Some(Platform::WhatsApp));
        assert_eq!(cli.max_len, Some(500));
        assert!(cli.no_split);
        assert_eq!(cli.file, Some(PathBuf::from("notes.md")));
    }

    #[test]
    fn rejects_unknown_platform() {
        let result = Cli::try_parse_from(["chatfmt", "--platform", "myspace"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_stored_config() {
        let stored = Config {
            platform: Platform::LinkedIn,
            max_len: Some(1000),
            split: true,
        };

        let resolved = parse(&["-p", "linkedin"]).resolve(stored.clone());
        assert_eq!(resolved, stored);

        let resolved = parse(&["-m", "300", "--no-split"]).resolve(stored.clone());
        assert_eq!(resolved.max_len, Some(300));
        assert!(!resolved.split);
    }

    #[test]
    fn switching_platform_drops_stored_budget() {
        let stored = Config {
            platform: Platform::LinkedIn,
            max_len: Some(1000),
            split: true,
        };

        let resolved = parse(&["-p", "instagram"]).resolve(stored);
        assert_eq!(resolved.platform, Platform::Instagram);
        assert_eq!(resolved.effective_max_len(), Some(2200));
    }

    #[test]
    fn single_chunk_has_no_header() {
        let chunks = vec![Chunk::new("hello")];
        assert_eq!(render_chunks(&chunks), "hello\n");
    }

    #[test]
    fn multiple_chunks_are_numbered() {
        let chunks = vec![Chunk::new("one"), Chunk::new("two")];
        assert_eq!(
            render_chunks(&chunks),
            "--- chunk 1/2 (3 chars) ---\none\n\n--- chunk 2/2 (3 chars) ---\ntwo\n"
        );
    }
}
