use clap::Parser;
use status_spider::console::ConsoleReporter;
use status_spider::crawler::CrawlerConfig;
use status_spider::launcher::CrawlLauncher;
use status_spider::monitor::{
    ChannelMonitorReporter, CrawlOutcome, MonitorExit, MonitorReporter, MonitorState,
    ProgressMonitor, ResultFinalizer,
};
use status_spider::report::CrawlReport;
use status_spider::worker;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Seed URL to start crawling from
    #[arg(long, value_name = "URL")]
    seed: String,

    /// Run the crawl synchronously instead of in a worker process
    #[arg(long)]
    sync: bool,

    /// Seconds between polls of the worker's output
    #[arg(long, default_value_t = 3)]
    poll_interval_secs: u64,

    /// Do not honor robots.txt
    #[arg(long)]
    no_robots: bool,

    /// Follow links to other hostnames as well
    #[arg(long)]
    all_hosts: bool,

    /// Rate limit for crawling (requests per second)
    #[arg(long)]
    rate: Option<f64>,

    /// Maximum number of pages to crawl
    #[arg(long)]
    max_pages: Option<usize>,

    /// User agent for requests and robots.txt matching
    #[arg(long, default_value = "status-spider")]
    user_agent: String,

    /// Directory the CSV report is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    report_dir: PathBuf,

    #[arg(long, value_name = "PATH", hide = true)]
    worker_output: Option<PathBuf>,
}

impl CommandLineArgs {
    fn crawler_config(&self) -> CrawlerConfig {
        CrawlerConfig::new(
            self.user_agent.clone(),
            !self.no_robots,
            !self.all_hosts,
            self.rate,
            self.max_pages,
        )
    }
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    // Set up a shutdown signal handler
    let shutdown_notify = Arc::new(tokio::sync::Notify::new());
    {
        let shutdown_notify = Arc::clone(&shutdown_notify);
        ctrlc::set_handler(move || {
            shutdown_notify.notify_waiters();
        })?;
    }

    if let Some(worker_output) = &args.worker_output {
        worker::run_worker(
            &args.seed,
            worker_output,
            args.crawler_config(),
            shutdown_notify,
        )
        .await;
        return Ok(());
    }

    let seed = CrawlLauncher::validate_seed(&args.seed)?;
    let launcher = CrawlLauncher::new(args.crawler_config(), std::env::temp_dir());

    let outcome = if args.sync {
        println!("Crawling {} ...", seed);
        let output = launcher.run_blocking(&seed, shutdown_notify).await?;
        ResultFinalizer::new(output).finalize()?
    } else {
        run_monitored(
            &launcher,
            &seed,
            Duration::from_secs(args.poll_interval_secs),
            shutdown_notify,
        )
        .await?
    };

    match outcome {
        CrawlOutcome::NoInternalUrls => {
            println!("Crawl completed, but no internal URLs were found on the starting page.");
        }
        CrawlOutcome::Completed(result) => {
            println!("Crawl completed successfully. Found {} URLs.", result.len());
            let report = CrawlReport::build(&result);
            print_report(&report);

            let filename = CrawlReport::csv_filename(chrono::Local::now());
            let csv_path = args.report_dir.join(filename);
            std::fs::write(&csv_path, report.to_csv())?;
            println!();
            println!("Full CSV report written to {}", csv_path.display());
        }
    }

    Ok(())
}

async fn run_monitored(
    launcher: &CrawlLauncher,
    seed: &Url,
    poll_interval: Duration,
    shutdown_notify: Arc<tokio::sync::Notify>,
) -> anyhow::Result<CrawlOutcome> {
    let console_reporter = ConsoleReporter::new();
    let console_stop = Arc::new(tokio::sync::Notify::new());
    let console_task = {
        let console_reporter = console_reporter.clone();
        let console_stop = Arc::clone(&console_stop);
        tokio::task::spawn(async move { console_reporter.run(console_stop).await })
    };

    let mut launched = launcher.launch(seed)?;
    let reporter = ChannelMonitorReporter::new(console_reporter.event_tx());
    reporter.begin(seed);

    let monitor = ProgressMonitor::new(launched.output.clone(), poll_interval, reporter.clone());
    let exit = monitor.watch(&mut launched.worker, shutdown_notify).await;

    reporter.state_changed(MonitorState::Done);
    reporter.end();
    console_stop.notify_waiters();
    let _ = console_task.await;

    if exit == MonitorExit::Canceled {
        println!("Crawl canceled.");
    }

    Ok(ResultFinalizer::new(launched.output).finalize()?)
}

fn print_report(report: &CrawlReport) {
    println!();
    println!("HTTP Status Code Breakdown");
    println!("{:<18} {:>7}  {}", "HTTP Status Code", "Count", "Description");
    for row in report.summary().rows() {
        println!("{:<18} {:>7}  {}", row.status, row.count, row.description);
    }

    println!();
    println!("Detailed URL Report");
    println!("{:<8} {}", "Status", "URL");
    for row in report.detail_rows() {
        println!("{:<8} {}", row.status, row.url);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args = CommandLineArgs::parse();
    if let Err(e) = main_impl(&args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
