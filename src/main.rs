use checkout_ref_patch::config::Config;
use checkout_ref_patch::{constants, output, patcher, workflows};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "patch-checkout-ref",
    version,
    about = "Point the checkout steps of the monitoring workflows at a branch"
)]
struct Cli {
    /// Branch the checkout steps should fetch (default: $CHECKOUT_REF_BRANCH or status-monitoring)
    #[arg(value_name = "BRANCH")]
    branch: Option<String>,

    /// Print per-file details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config {
        verbosity: cli.verbose.into(),
    };

    let branch = constants::resolve_branch(cli.branch);
    patcher::validate_branch_name(&branch)?;

    let cwd = std::env::current_dir()?;
    output::print_working_dir(&cwd, &config);

    let reports = workflows::patch_workflows(&cwd, &branch, config.patch_logger())?;
    for report in &reports {
        output::print_file_report(&config, report, &cwd);
    }
    output::print_summary(&reports, &branch);

    Ok(())
}
