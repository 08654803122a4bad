use clap::{value_t_or_exit, App, Arg};

use dynamic_array_benchmarks::benchmarks::GeneratorMode;
use dynamic_array_benchmarks::helpers;

use dynamic_array::DynamicArray;

use pretty_assertions::assert_eq;

fn run_growth_statistics() {
    #[rustfmt::skip]
    let matches = App::new("Growth statistics")
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
        .get_matches();

    let gen_mode = clap::value_t_or_exit!(matches, "gen-mode", GeneratorMode);
    let n = clap::value_t_or_exit!(matches, "size", usize);
    let measure_every = 10;
    let values = helpers::gen_values(gen_mode, n);

    let mut array = DynamicArray::new();

    let mut iters = Vec::new();
    let mut phases = Vec::new();
    let mut lengths = Vec::new();
    let mut capacities = Vec::new();

    println!("Inserting...");
    for (i, x) in values.iter().enumerate() {
        let idx = helpers::insert_position(*x, array.len());
        if let Err(err) = array.insert_at(idx, *x) {
            println!("Unexpected insert failure: {}", err);
            return;
        }
        let len = i + 1;
        if len % measure_every == 0 {
            iters.push(len);
            phases.push("insert");
            lengths.push(array.len());
            capacities.push(array.capacity());
        }
    }
    assert_eq!(array.len(), values.len());

    let values_to_remove = helpers::shuffle_clone(&values);

    println!("Removing...");
    for (i, x) in values_to_remove.iter().enumerate() {
        let idx = helpers::remove_position(*x, array.len());
        if let Err(err) = array.remove_at(idx) {
            println!("Unexpected remove failure: {}", err);
            return;
        }
        let len = i + 1;
        if len % measure_every == 0 {
            iters.push(values.len() + len);
            phases.push("remove");
            lengths.push(array.len());
            capacities.push(array.capacity());
        }
    }

    array.clear();
    iters.push(2 * values.len() + 1);
    phases.push("clear");
    lengths.push(array.len());
    capacities.push(array.capacity());

    println!("Exporting...");
    if let Err(err) = helpers::export_stats(&gen_mode.to_string(), &iters, &phases, &lengths, &capacities) {
        println!("Failed to export statistics: {}", err);
    }
}

fn main() {
    run_growth_statistics();
}
