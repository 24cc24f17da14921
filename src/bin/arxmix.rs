use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arxmix", version)]
struct Cli {
    /// JSON config file (defaults apply when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a packed definition.
    Decode(DecodeArgs),
    /// Print the sharded asset path of one or more image references.
    Path(PathArgs),
    /// Describe API records read from a JSON file (one record or a list).
    Entry(EntryArgs),
    /// List registered mix types.
    Types,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Mix type, e.g. `32x3`.
    #[arg(long = "type")]
    mix_type: String,

    /// Packed definition: decimal (signed or unsigned) or `0x`-prefixed hex.
    #[arg(long, allow_hyphen_values = true, value_parser = parse_definition)]
    definition: u64,

    /// Also print pseudocode.
    #[arg(long)]
    code: bool,

    /// Print the decoded descriptor as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Hex image references.
    #[arg(required = true)]
    image_refs: Vec<String>,

    /// Override the configured image prefix.
    #[arg(long)]
    image_prefix: Option<String>,
}

#[derive(Parser, Debug)]
struct EntryArgs {
    /// Input JSON file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the configured image prefix.
    #[arg(long)]
    image_prefix: Option<String>,

    /// Print summaries as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => arxmix::ArxConfig::from_path(path)?,
        None => arxmix::ArxConfig::default(),
    };

    match cli.cmd {
        Command::Decode(args) => cmd_decode(args),
        Command::Path(args) => cmd_path(args, cfg),
        Command::Entry(args) => cmd_entry(args, cfg),
        Command::Types => cmd_types(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_definition(s: &str) -> Result<u64, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map_err(|e| format!("invalid hex definition: {e}"));
    }
    if s.starts_with('-') {
        // wire values are signed 64-bit; keep the bit pattern
        return s
            .parse::<i64>()
            .map(|v| v as u64)
            .map_err(|e| format!("invalid definition: {e}"));
    }
    s.parse::<u64>().map_err(|e| format!("invalid definition: {e}"))
}

fn apply_prefix(
    cfg: arxmix::ArxConfig,
    prefix: Option<String>,
) -> anyhow::Result<arxmix::ArxConfig> {
    Ok(match prefix {
        Some(p) => cfg.with_image_prefix(p)?,
        None => cfg,
    })
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let desc = arxmix::MixDescriptor::decode(&args.mix_type, args.definition)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&desc)?);
        return Ok(());
    }

    println!("{desc}");
    if args.code {
        print!("{}", desc.code());
    }
    Ok(())
}

fn cmd_path(args: PathArgs, cfg: arxmix::ArxConfig) -> anyhow::Result<()> {
    let cfg = apply_prefix(cfg, args.image_prefix)?;
    for image_ref in &args.image_refs {
        let path = cfg
            .image_path(image_ref)
            .with_context(|| format!("shard image reference '{image_ref}'"))?;
        println!("{path}");
    }
    Ok(())
}

fn read_entries(path: &Path) -> anyhow::Result<Vec<arxmix::MixEntry>> {
    let f = File::open(path).with_context(|| format!("open entries '{}'", path.display()))?;
    let entries = arxmix::parse_entries(BufReader::new(f))
        .with_context(|| format!("parse entries '{}'", path.display()))?;
    Ok(entries)
}

fn cmd_entry(args: EntryArgs, cfg: arxmix::ArxConfig) -> anyhow::Result<()> {
    let cfg = apply_prefix(cfg, args.image_prefix)?;
    let entries = read_entries(&args.in_path)?;

    let summaries = entries
        .iter()
        .map(|e| {
            e.summary(&cfg)
                .with_context(|| format!("describe entry {} {}", e.mix_type, e.definition))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for s in &summaries {
        println!("{} {}", s.mix_type, s.definition);
        println!("  ops:    {}", s.terse);
        for (round, (score, path)) in s.avalanche_scores.iter().zip(&s.image_paths).enumerate() {
            println!("  round {}: score {score:.6} graph {path}", round + 1);
        }
        for line in s.code.lines() {
            println!("    {line}");
        }
    }
    eprintln!("described {} entries", summaries.len());
    Ok(())
}

fn cmd_types() -> anyhow::Result<()> {
    println!("type  word  rot_bits  operators  terms  def_bits");
    for t in arxmix::MixType::ALL {
        let info = t.info();
        println!(
            "{:<5} {:>4} {:>9} {:>10} {:>6} {:>9}",
            info.id,
            info.word_bits,
            info.rotation_bits,
            info.operator_count,
            info.term_count,
            info.definition_bits()
        );
    }
    Ok(())
}
