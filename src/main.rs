use anyhow::{Context, Result, bail};
use chunkedit::{
    Chunk, ChunkConfig, EditRequest, Editor, TracingObserver, chunk_with,
    find_chunk_for_edit_with, position_of, reassemble_with,
};
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Chunk documents and apply positional edits.
///
/// Offsets are character offsets into the whole document.
#[derive(Parser)]
#[command(name = "chunkedit", version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a document into overlapping chunks (JSON on stdout)
    Chunk {
        file: PathBuf,
        #[command(flatten)]
        chunking: ChunkingArgs,
    },
    /// Apply one edit to a document
    Edit(EditArgs),
    /// Show the line/column of an offset, or the chunk holding a span
    Locate(LocateArgs),
    /// Rebuild a document from a JSON chunk list
    Reassemble { file: PathBuf },
}

#[derive(Args)]
struct ChunkingArgs {
    /// Maximum chunk length in characters
    #[arg(long)]
    max_length: Option<usize>,

    /// Characters shared by adjacent chunks
    #[arg(long)]
    overlap: Option<usize>,

    /// JSON file with `max_length` / `overlap`
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["start", "start_line", "search"])
))]
struct EditArgs {
    file: PathBuf,

    /// Global start offset of the span to replace
    #[arg(long, requires = "end")]
    start: Option<usize>,

    /// Global end offset (exclusive)
    #[arg(long, requires = "start")]
    end: Option<usize>,

    /// First line to replace (1-based)
    #[arg(long, requires = "end_line")]
    start_line: Option<usize>,

    /// Last line to replace, terminator included
    #[arg(long, requires = "start_line")]
    end_line: Option<usize>,

    /// Text to search for
    #[arg(long)]
    search: Option<String>,

    /// Replacement text
    #[arg(long)]
    new_text: String,

    /// Replace every occurrence instead of only the first
    #[arg(long, requires = "search")]
    replace_all: bool,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["offset", "start"])
))]
struct LocateArgs {
    file: PathBuf,

    /// Offset to convert to line:col
    #[arg(long)]
    offset: Option<usize>,

    /// Span start to look up among chunks
    #[arg(long, requires = "end")]
    start: Option<usize>,

    /// Span end (exclusive)
    #[arg(long, requires = "start")]
    end: Option<usize>,

    #[command(flatten)]
    chunking: ChunkingArgs,
}

impl EditArgs {
    fn request(&self) -> Result<EditRequest> {
        let new_text = self.new_text.clone();
        match (self.start, self.end, self.start_line, self.end_line, &self.search) {
            (Some(start), Some(end), None, None, None) => Ok(EditRequest::Span {
                start,
                end,
                new_text,
            }),
            (None, None, Some(start_line), Some(end_line), None) => Ok(EditRequest::Lines {
                start_line,
                end_line,
                new_text,
            }),
            (None, None, None, None, Some(search)) => Ok(EditRequest::Search {
                search: search.clone(),
                replacement: new_text,
                replace_all: self.replace_all,
            }),
            _ => bail!("Use exactly one of --start/--end, --start-line/--end-line or --search"),
        }
    }
}

impl ChunkingArgs {
    /// Defaults, then config file, then environment, then flags
    fn resolve(&self) -> Result<ChunkConfig> {
        let mut config = match &self.config {
            Some(path) => ChunkConfig::from_json_str(&read_text(path)?)
                .context(format!("Invalid config file: {}", path.display()))?,
            None => ChunkConfig::default(),
        };
        config = config.with_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(max_length) = self.max_length {
            config = config.max_length(max_length);
        }
        if let Some(overlap) = self.overlap {
            config = config.overlap(overlap);
        }
        config.validate()?;
        Ok(config)
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read file: {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let observer = TracingObserver;

    match cli.command {
        Command::Chunk { file, chunking } => {
            let config = chunking.resolve()?;
            let document = read_text(&file)?;
            let chunks = chunk_with(&document, &config, &observer)?;
            println!("{}", serde_json::to_string_pretty(&chunks)?);
        }
        Command::Edit(args) => {
            let request = args.request()?;
            let document = read_text(&args.file)?;
            let outcome = Editor::new(observer).apply(&document, &request)?;

            match &args.output {
                Some(path) => {
                    fs::write(path, &outcome.document)
                        .context(format!("Failed to write file: {}", path.display()))?;
                    eprintln!(
                        "✓ Replaced {} span(s), wrote {}",
                        outcome.replaced.len(),
                        path.display()
                    );
                }
                None => print!("{}", outcome.document),
            }
        }
        Command::Locate(args) => {
            let document = read_text(&args.file)?;
            match (args.offset, args.start, args.end) {
                (Some(offset), _, _) => println!("{}", position_of(&document, offset)),
                (None, Some(start), Some(end)) => {
                    let config = args.chunking.resolve()?;
                    let chunks = chunk_with(&document, &config, &observer)?;
                    let location = find_chunk_for_edit_with(&chunks, start, end, &observer)?;
                    println!("{}", serde_json::to_string_pretty(&location)?);
                }
                _ => bail!("Use --offset or --start/--end"),
            }
        }
        Command::Reassemble { file } => {
            let chunks: Vec<Chunk> = serde_json::from_str(&read_text(&file)?)
                .context(format!("Malformed chunk list: {}", file.display()))?;
            print!("{}", reassemble_with(&chunks, &observer));
        }
    }

    Ok(())
}
