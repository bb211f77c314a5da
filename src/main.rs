use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use toll_delivery::{map_file, solve_cases, SolverConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Prints the cargo needed at the start of the cheapest route for every map")]
struct ProgramArguments {
    #[arg(default_value = "input.txt", help = "map file path")]
    input: PathBuf,

    #[arg(long, help = "print every map before the results")]
    echo_maps: bool,

    #[arg(long, help = "print the chosen route after the amount")]
    show_route: bool,

    #[arg(long, help = "maximum number of paths examined per map")]
    max_paths: Option<usize>,

    #[arg(long, help = "maximum number of locations on a path")]
    max_depth: Option<usize>,

    #[arg(long, help = "maximum number of partial paths extended per map")]
    max_expansions: Option<usize>,

    #[arg(
        long,
        help = "examine every path, however many there are",
        conflicts_with_all = ["max_paths", "max_depth", "max_expansions"]
    )]
    unbounded: bool,
}

impl ProgramArguments {
    fn solver_config(&self) -> SolverConfig {
        let mut config = if self.unbounded {
            SolverConfig::UNBOUNDED
        } else {
            SolverConfig::default()
        };
        if let Some(max_paths) = self.max_paths {
            config = config.with_max_paths(max_paths);
        }
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        if let Some(max_expansions) = self.max_expansions {
            config = config.with_max_expansions(max_expansions);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = ProgramArguments::parse();
    info!("{:?}", &args);

    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("could not read {}", args.input.display()))?;
    let cases = map_file::parse_cases(&input)
        .with_context(|| format!("could not parse {}", args.input.display()))?;
    info!("loaded {} maps", cases.len());

    if args.echo_maps {
        for (i, case) in cases.iter().enumerate() {
            println!("Map case {}: {}", i + 1, case);
        }
    }

    let results = solve_cases(&cases, args.solver_config());

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(route) if args.show_route => println!("Case {}: {} ({})", i + 1, route.required(), route),
            Ok(route) => println!("Case {}: {}", i + 1, route.required()),
            Err(err) => println!("Case {}: {}", i + 1, err),
        }
    }

    Ok(())
}
