use clap::{value_t_or_exit, App, Arg};

use dynamic_array_benchmarks::benchmarks::{BenchmarkMode, BenchmarkParams, GeneratorMode, run_benchmarks};

fn main() {
    #[rustfmt::skip]
    let matches = App::new("Benchmark runner")
        .arg(Arg::with_name("bench-mode")
                 .long("bench-mode")
                 .short("b")
                 .default_value("append")
                 .possible_values(&["append", "insert", "remove", "sort"])
                 .help("Benchmark mode"))
        .arg(Arg::with_name("gen-mode")
                 .long("gen-mode")
                 .short("g")
                 .default_value("avg")
                 .possible_values(&["avg", "asc", "dsc"])
                 .help("Generator mode"))
        .arg(Arg::with_name("size")
                 .long("size")
                 .short("n")
                 .default_value("100000")
                 .help("Number of values"))
        .arg(Arg::with_name("runs")
                 .long("runs")
                 .short("r")
                 .default_value("3")
                 .help("Number of measured runs (an additional warm up run is always performed)"))
        .arg(Arg::with_name("all")
                 .long("all")
                 .short("a")
                 .help("Include the Vec-backed reference model"))
        .get_matches();

    let bench_mode = clap::value_t_or_exit!(matches, "bench-mode", BenchmarkMode);
    let gen_mode = clap::value_t_or_exit!(matches, "gen-mode", GeneratorMode);
    let n = clap::value_t_or_exit!(matches, "size", usize);
    let num_runs = clap::value_t_or_exit!(matches, "runs", i32);

    let bench_params = BenchmarkParams {
        n,
        measure_every: 25,
        num_runs,
        all_combatants: matches.is_present("all"),
    };

    run_benchmarks(bench_mode, bench_params, gen_mode);
}
