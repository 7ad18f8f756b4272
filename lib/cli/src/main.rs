use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use elapsed::measure_time;
use itertools::Itertools;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use cnf_nexus_core::{demos, to_clauses, to_cnf, to_dimacs, Cnf, Expr};

#[derive(Parser, Debug)]
#[clap(author, version)]
struct Cli {
    /// Formula to convert (puzzle, tautology)
    #[clap(value_name = "DEMO")]
    demo: String,

    /// Output format (dimacs, clauses, math, code)
    #[clap(short, long, default_value = "dimacs")]
    format: String,

    /// Output file, stdout if omitted
    #[clap(short, long, parse(from_os_str), value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    let level = match args.log.to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => bail!("Bad log level '{}'", &args.log),
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    let formula = match args.demo.to_ascii_lowercase().as_str() {
        "puzzle" => demos::puzzle()?,
        "tautology" => demos::tautology()?,
        _ => bail!("Bad demo '{}'", &args.demo),
    };
    info!("formula = {}", formula);
    info!("formula has {} variable(s)", formula.num_vars());

    info!("Converting to CNF...");
    let (elapsed, cnf) = measure_time(|| to_cnf(formula));
    let cnf = cnf?;
    info!("Converted in {}", elapsed);
    info!(
        "cnf has {} clause(s) over {} variable(s)",
        Cnf::from_expr(&cnf)?.num_clauses(),
        cnf.num_vars()
    );

    let rendered = render(&cnf, &args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered).wrap_err_with(|| format!("Could not write to '{}'", path.display()))?;
            info!("Output written to '{}'", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn render(cnf: &Expr, format: &str) -> color_eyre::Result<String> {
    let rendered = match format.to_ascii_lowercase().as_str() {
        "dimacs" => to_dimacs(cnf)?,
        "clauses" => to_clauses(cnf)?
            .iter()
            .map(|clause| format!("{}\n", clause.iter().join(" ")))
            .collect(),
        "math" => format!("{}\n", cnf),
        "code" => format!("{:#}\n", cnf),
        _ => bail!("Bad format '{}'", format),
    };
    Ok(rendered)
}
