use swarm_pso::benchmarks::Benchmark;
use swarm_pso::report::{run_benchmark, to_json};
use swarm_pso::OptimizerConfig;

fn usage() -> ! {
    eprintln!("Usage: swarm_pso_run <function> <dimensions> [iterations] [seed]");
    eprintln!();
    eprintln!("Functions: sphere, rosenbrock, rastrigin, abs-cos");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  swarm_pso_run rastrigin 5 2000 42");
    std::process::exit(2);
}

fn parse_or_usage<T: std::str::FromStr>(arg: &str) -> T {
    arg.parse().unwrap_or_else(|_| usage())
}

fn main() {
    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 4 {
        usage();
    }

    let benchmark: Benchmark = parse_or_usage(&args.remove(0));
    let dimensions: usize = parse_or_usage(&args.remove(0));

    let mut config = OptimizerConfig::new();
    if !args.is_empty() {
        config = config.with_iterations(parse_or_usage(&args.remove(0)));
    }
    let seed = if args.is_empty() {
        0
    } else {
        parse_or_usage(&args.remove(0))
    };

    let report = match run_benchmark(benchmark, dimensions, config, seed) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match to_json(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
