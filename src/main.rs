use clap::Parser;
use colored::*;

use pw_scaffold::collector::Answers;
use pw_scaffold::logging;
use pw_scaffold::prompt::{DefaultsPrompter, Prompter, TerminalPrompter};
use pw_scaffold::scaffold::ScaffoldCommand;

#[derive(Parser)]
#[command(name = "pw-scaffold")]
#[command(author = "pw-scaffold contributors")]
#[command(version)]
#[command(
    about = "Scaffold a ready-to-run Playwright test framework",
    long_about = None
)]
struct Cli {
    #[arg(long, value_name = "PATH", help = "Where to create the test directory")]
    path: Option<String>,

    #[arg(long, value_name = "URL", help = "Base URL the tests run against")]
    base_url: Option<String>,

    #[arg(
        long,
        value_name = "N",
        allow_hyphen_values = true,
        help = "Max parallel workers (0 or 'unbounded' for the OS default)"
    )]
    workers: Option<String>,

    #[arg(
        long,
        value_name = "N",
        allow_hyphen_values = true,
        help = "Retries for failing tests"
    )]
    retries: Option<String>,

    #[arg(
        long,
        value_name = "LIST",
        help = "Comma-separated browsers (chromium, firefox, webkit, mobile-chrome)"
    )]
    browsers: Option<String>,

    #[arg(short, long, help = "Accept the default for every unanswered question")]
    yes: bool,

    #[arg(long, help = "Do not install dependencies")]
    skip_install: bool,

    #[arg(long, help = "Do not run the example tests")]
    skip_verify: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), err);
    }
    logging::log_system_info();

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    let presets = Answers {
        path: cli.path,
        base_url: cli.base_url,
        workers: cli.workers,
        retries: cli.retries,
        browsers: cli.browsers,
    };

    let prompter: Box<dyn Prompter> = if cli.yes {
        Box::new(DefaultsPrompter::new())
    } else {
        Box::new(TerminalPrompter::new())
    };

    let command = ScaffoldCommand::new(cli.verbose)
        .with_presets(presets)
        .skip_install(cli.skip_install)
        .skip_verify(cli.skip_verify);

    if let Err(err) = command.execute(prompter.as_ref()) {
        tracing::debug!(error = ?err, "Scaffold failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
