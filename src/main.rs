use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use wordfreq::fetch::{self, Source};
use wordfreq::formats::{ChartRenderer, SvgChart, TextChart};
use wordfreq::parameters::DEFAULT_SOURCE;
use wordfreq::{sort, MRController, MRParameters, MrError, WordCount};

/// Count word frequencies of a document and chart the most frequent words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URL or local path of the document
    #[arg(default_value = DEFAULT_SOURCE)]
    source: String,

    /// Number of mapper threads
    #[arg(short, long, default_value_t = 4)]
    threads: usize,

    /// Number of words to chart
    #[arg(short = 'n', long, default_value_t = 10)]
    top: usize,

    /// Write the chart as SVG to this file instead of printing it
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Length of the longest bar in the terminal chart
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

fn run(args: Args) -> Result<(), MrError> {
    let params = MRParameters::new()
        .set_concurrency(args.threads)
        .set_top_n(args.top)
        .set_chart_width(args.width)
        .set_color(!args.no_color)
        .set_fetch_timeout(args.timeout);
    params.validate()?;

    let text = fetch::fetch_text(&Source::parse(&args.source),
                                 Duration::from_secs(params.fetch_timeout_secs))?;
    let counts = MRController::run(&WordCount, &params, &text)?;
    let top = sort::top_n(&counts, params.top_n);

    match args.svg {
        Some(path) => {
            let f = File::create(&path).map_err(|e| MrError::Io { path: path.clone(), source: e })?;
            SvgChart::default().render(&mut BufWriter::new(f), &params.chart_title, &top)?;
            log::info!("wrote chart to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            TextChart::new(params.chart_width, params.color).render(&mut stdout.lock(),
                                                                    &params.chart_title,
                                                                    &top)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        process::exit(1);
    }
}
