use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelsig::cli::Cli;
use modelsig::pipeline::stage1_samples::run_stage1;
use modelsig::pipeline::stage2_compare::run_stage2;
use modelsig::pipeline::stage3_report::run_stage3;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let mut filter = EnvFilter::from_default_env();
    if verbose {
        filter = filter.add_directive(tracing::Level::TRACE.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let selection = cli.selection();
    let stage1 = run_stage1(&selection).map_err(|e| e.to_string())?;
    let stage2 = run_stage2(&stage1.samples).map_err(|e| e.to_string())?;
    let report = run_stage3(&stage2);
    print!("{report}");
    Ok(())
}
