use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use vig2p::{
    G2pConfig, G2pResult, G2pVi,
    features::align_features,
    utils::{
        debug::format_g2p_debug,
        fileio::{load_text_lines, load_word_features, save_phone_features},
    },
};

#[derive(Parser, Debug)]
#[command(name = "vg2p")]
#[command(version = "0.1")]
#[command(about = "Vietnamese grapheme-to-phoneme front end")]
struct Cli {
    /// Text to convert, or a path to a file converted line by line
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    text: Option<String>,

    #[arg(long = "stream", help = "Read lines from stdin and print one JSON result per line")]
    stream: bool,

    #[arg(
        long = "features",
        value_name = "NPY",
        help = "Word-level feature matrix (.npy, words x dim) to align to the phonemes"
    )]
    features: Option<PathBuf>,

    #[arg(long = "features-out", value_name = "NPY", default_value = "tmp/phone_features.npy")]
    features_out: PathBuf,

    #[arg(long = "expand-digits", default_value_t = false)]
    expand_digits: bool,

    #[arg(long = "inline-tones", help = "Also print a flat phoneme string with tone digits")]
    inline_tones: bool,

    #[arg(long = "debug", help = "Print a colored per-word breakdown on stderr")]
    debug: bool,
}

fn emit(
    g2p: &G2pVi,
    text: &str,
    args: &Cli,
    out: &mut impl Write,
) -> Result<G2pResult, Box<dyn std::error::Error>> {
    let result = g2p.g2p(text)?;
    serde_json::to_writer(&mut *out, &result)?;
    writeln!(out)?;
    if args.inline_tones {
        writeln!(out, "{}", result.to_phoneme_string(true))?;
    }
    if args.debug {
        eprintln!("{}", format_g2p_debug(&result));
    }
    Ok(result)
}

async fn handle_streaming_mode(g2p: &G2pVi, args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    let mut stdout = std::io::stdout();

    eprintln!("Entering streaming mode. Type text and press Enter. Use Ctrl+D to exit.");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        if let Err(e) = emit(g2p, &line, args, &mut stdout) {
            eprintln!("Error processing line: {}", e);
        }
        stdout.flush()?;
    }

    Ok(())
}

fn handle_file(g2p: &G2pVi, path: &Path, args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let lines = load_text_lines(path)?;
    tracing::info!("converting {} lines from {}", lines.len(), path.display());
    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")?
            .progress_chars("#>-"),
    );

    let mut stdout = std::io::stdout();
    for (line_no, line) in &lines {
        if let Err(e) = emit(g2p, line, args, &mut stdout) {
            pb.println(format!("line {}: {}", line_no + 1, e));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");
    Ok(())
}

fn handle_text(g2p: &G2pVi, text: &str, args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout();
    let result = emit(g2p, text, args, &mut stdout)?;

    if let Some(features_path) = &args.features {
        let word_features = load_word_features(features_path)?;
        let aligned = align_features(word_features.view(), &result.word2ph);
        save_phone_features(&args.features_out, &aligned)?;
        eprintln!(
            "Phone features {:?} saved to {}",
            aligned.dim(),
            args.features_out.display()
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let args = Cli::parse();

        let g2p = G2pVi::from_config(G2pConfig {
            expand_digits: args.expand_digits,
            ..G2pConfig::default()
        })?;

        if args.stream {
            handle_streaming_mode(&g2p, &args).await
        } else {
            let txt = args
                .text
                .clone()
                .unwrap_or_else(|| "Xin chào thế giới!".to_string());

            let path = Path::new(&txt);
            if path.exists() && path.is_file() {
                handle_file(&g2p, path, &args)
            } else {
                handle_text(&g2p, &txt, &args)
            }
        }
    })
}
