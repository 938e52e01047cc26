use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridish", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or write the compiled stylesheet.
    Css(CssArgs),
    /// Write a standalone HTML page containing the overlay.
    Html(HtmlArgs),
    /// Validate a configuration and summarize each breakpoint.
    Check(GridArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Grid configuration JSON; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page height the row markers must fill, in pixels.
    #[arg(long, default_value_t = 2000.0)]
    height: f64,
}

#[derive(Args, Debug)]
struct CssArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct HtmlArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Leave the layers detached (toggle them with the configured keys).
    #[arg(long)]
    hidden: bool,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Css(args) => cmd_css(args),
        Command::Html(args) => cmd_html(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_options(path: Option<&Path>) -> anyhow::Result<gridish::GridOptions> {
    let Some(path) = path else {
        return Ok(gridish::GridOptions::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let options: gridish::GridOptions =
        serde_json::from_reader(r).with_context(|| "parse grid config JSON")?;
    Ok(options)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_css(args: CssArgs) -> anyhow::Result<()> {
    let options = read_options(args.grid.config.as_deref())?;
    let grid = gridish::compile_grid(&options, args.grid.height)?;
    let css = grid.stylesheet().to_string();

    match args.out {
        Some(out) => write_output(&out, &css),
        None => {
            print!("{css}");
            Ok(())
        }
    }
}

fn cmd_html(args: HtmlArgs) -> anyhow::Result<()> {
    let options = read_options(args.grid.config.as_deref())?;

    let mut doc = gridish::Document::new(args.grid.height);
    let mut overlay = gridish::GridOverlay::new(options)?;
    overlay.init(&mut doc)?;
    if !args.hidden {
        overlay.show(&mut doc)?;
    }

    let body = gridish::Dom::body(&doc);
    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>gridish overlay</title></head>\n{}\n</html>\n",
        doc.to_html(body)?
    );
    write_output(&args.out, &page)
}

fn cmd_check(args: GridArgs) -> anyhow::Result<()> {
    let options = read_options(args.config.as_deref())?;
    let grid = gridish::compile_grid(&options, args.height)?;
    let metrics = gridish::RowMetrics {
        overlay_height_px: args.height,
        rem_px: options.rem,
        rows_per_cycle: options.rows,
        label_font_size: options.settings.label_font_size().to_string(),
    };

    println!("breakpoints (ascending):");
    for bp in &grid.breakpoints {
        println!(
            "  {:<10} from {:>7} columns {:>3} (+{:<3}) gutter {:<7} margin {:<7} row {:>6} rows {:>4}",
            bp.name,
            gridish::ParsedDimension::rem(bp.threshold).to_string(),
            bp.columns,
            grid.columns.count_for(&bp.name),
            bp.gutter.to_string(),
            bp.margin.to_string(),
            gridish::ParsedDimension::rem(bp.row_height).to_string(),
            metrics.rows_that_fit(bp.row_height),
        );
    }
    println!(
        "column strips: {}, row markers: {}, media rules: {}",
        grid.columns.elements.len(),
        grid.rows.elements.len(),
        grid.stylesheet().media_rules().count()
    );
    Ok(())
}
