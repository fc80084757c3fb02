mod args;
mod console_driver;
mod input;
mod output;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use kempe_backend::Allocator;
use kempe_frontend::parse;

use args::Arguments;
use console_driver::ConsoleDriver;
use input::read_file;
use output::Report;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Arguments::parse();
    args.color.apply();

    let source = read_file(&args.path)?;
    let name = args.path.display().to_string();
    let mut driver = ConsoleDriver::new(name, source.clone(), args.color.into());

    let Some(liveness) = parse(&mut driver, &source) else {
        return Ok(ExitCode::FAILURE);
    };

    let mut allocator = Allocator::new(liveness.registers, liveness.points);
    let coloring = allocator.color(args.method);

    let report = Report::new(&allocator, args.method, &coloring);
    if !args.quiet {
        report.print_input()?;
    }

    report.print_allocation()?;
    report.print_summary()?;

    Ok(ExitCode::SUCCESS)
}
