use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;

/// Generate a pre-composited background by tiling card images into jittered columns.
#[derive(Parser, Debug)]
#[command(name = "card-mosaic", version)]
struct Cli {
    /// Directory containing the individual card images.
    #[arg(long, default_value = "public/tarot")]
    cards_dir: PathBuf,

    /// Where to write the generated background image.
    #[arg(long, default_value = "public/tarot_background.png")]
    output: PathBuf,

    /// Base directory that relative `--cards-dir` and `--output` are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output canvas width in pixels.
    #[arg(long, default_value_t = 2400)]
    width: u32,

    /// Output canvas height in pixels.
    #[arg(long, default_value_t = 3600)]
    height: u32,

    /// Target height for each card in pixels (keeps aspect ratio).
    #[arg(long, default_value_t = 540)]
    card_height: u32,

    /// Horizontal gap between card columns in pixels.
    #[arg(long, default_value_t = 24, allow_negative_numbers = true)]
    column_gap: i32,

    /// Base vertical gap between cards in pixels; also bounds the random jitter.
    #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
    row_gap: i32,

    /// Random seed for reproducible layouts.
    #[arg(long)]
    seed: Option<u64>,

    /// Card file extension to pick up.
    #[arg(long, default_value = card_mosaic::DEFAULT_CARD_EXTENSION)]
    extension: String,

    /// Print the SHA-256 of the RGBA8 pixels written to the output image.
    #[arg(long)]
    digest: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = card_mosaic::MosaicOpts {
        cards_dir: resolve(&cli.root, &cli.cards_dir),
        output: resolve(&cli.root, &cli.output),
        width: cli.width,
        height: cli.height,
        card_height: cli.card_height,
        column_gap: cli.column_gap,
        row_gap: cli.row_gap,
        seed: cli.seed,
        extension: cli.extension,
    };

    let session = card_mosaic::MosaicSession::new(opts).context("invalid options")?;
    let opts = session.opts();
    let rendered = session
        .render()
        .with_context(|| format!("compose cards from '{}'", opts.cards_dir.display()))?;
    card_mosaic::write_canvas(&rendered.canvas, &opts.output)
        .with_context(|| format!("write background '{}'", opts.output.display()))?;

    let stats = &rendered.stats;
    eprintln!(
        "seed {} ({} cards, {} columns, {} placed)",
        stats.seed, stats.cards, stats.columns, stats.placements
    );
    if cli.digest {
        eprintln!("sha256 {}", sha256_hex(rendered.canvas.pixels()));
    }
    println!("Generated card background → {}", opts.output.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
