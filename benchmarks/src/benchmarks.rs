use crate::create_counted;
use super::helpers;
use super::helpers::{insert_position, remove_position};

use super::alternatives::plain_array::PlainArray;
use dynamic_array::{sort, DynamicArray};
use skiplist::ordered_skiplist::OrderedSkipList;
use skiplist::skiplist::SkipList;

use pretty_assertions::assert_eq;
use std::rc::Rc;
use std::time::Instant;


create_counted!(
    KeyDynamicArray,
    get_num_calls_dynamic_array,
    NUM_CALLS_DYNAMIC_ARRAY
);
create_counted!(KeyVec, get_num_calls_vec, NUM_CALLS_VEC);
create_counted!(KeySkipList, get_num_calls_skip_list, NUM_CALLS_SKIP_LIST);
create_counted!(
    KeyPlainArray,
    get_num_calls_plain_array,
    NUM_CALLS_PLAIN_ARRAY
);


#[derive(Clone, Copy)]
pub struct BenchmarkParams {
    pub n: usize,
    pub measure_every: usize,
    pub num_runs: i32,
    pub all_combatants: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BenchmarkMode {
    Append,
    Insert,
    Remove,
    Sort,
}

impl std::fmt::Display for BenchmarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            BenchmarkMode::Append => "append",
            BenchmarkMode::Insert => "insert",
            BenchmarkMode::Remove => "remove",
            BenchmarkMode::Sort => "sort",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for BenchmarkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(BenchmarkMode::Append),
            "insert" => Ok(BenchmarkMode::Insert),
            "remove" => Ok(BenchmarkMode::Remove),
            "sort" => Ok(BenchmarkMode::Sort),
            _ => Err(format!("Illegal benchmark mode: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeneratorMode {
    Avg,
    Asc,
    Dsc,
}

impl std::fmt::Display for GeneratorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            GeneratorMode::Avg => "avg",
            GeneratorMode::Asc => "asc",
            GeneratorMode::Dsc => "dsc",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for GeneratorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(GeneratorMode::Avg),
            "asc" => Ok(GeneratorMode::Asc),
            "dsc" => Ok(GeneratorMode::Dsc),
            _ => Err(format!("Illegal generator mode: {}", s)),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generic_benchmark<T, Init, Append, Insert, Remove, GetLen, Sort>(
    mode: BenchmarkMode,
    params: BenchmarkParams,
    values: &[u64],
    init: Init,
    append: Append,
    insert: Insert,
    remove: Remove,
    get_len: GetLen,
    sort: Sort,
) -> Vec<(usize, f64)>
where
    Init: Fn() -> T,
    Append: Fn(&mut T, u64),
    Insert: Fn(&mut T, usize, u64),
    Remove: Fn(&mut T, usize),
    GetLen: Fn(&T) -> usize,
    Sort: Fn(&mut T),
{
    let mut set = init();
    let mut elapsed_times = Vec::with_capacity(values.len() / params.measure_every + 1);

    match mode {
        BenchmarkMode::Append => {
            let start = Instant::now();
            for (i, x) in values.iter().enumerate() {
                append(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            assert_eq!(get_len(&set), values.len());
        }
        BenchmarkMode::Insert => {
            let start = Instant::now();
            for (i, x) in values.iter().enumerate() {
                insert(&mut set, insert_position(*x, i), *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            assert_eq!(get_len(&set), values.len());
        }
        BenchmarkMode::Remove => {
            // Fill
            for x in values {
                append(&mut set, *x);
            }
            assert_eq!(get_len(&set), values.len());

            let positions = helpers::shuffle_clone(values);

            // Remove
            let start = Instant::now();
            for (i, x) in positions.iter().enumerate() {
                remove(&mut set, remove_position(*x, values.len() - i));

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            assert_eq!(get_len(&set), 0);

            // Note: we reverse the elapsed times so that the reported N corresponds to the collection size.
            let mut elapsed_times_reversed = Vec::with_capacity(elapsed_times.len());
            let mut t = 0.0;
            let mut n = 0;
            for i in (0 .. elapsed_times.len()).rev() {
                let delta_t = if i > 0 {
                    elapsed_times[i].1 - elapsed_times[i - 1].1
                } else {
                    elapsed_times[0].1
                };
                let delta_n = if i > 0 {
                    elapsed_times[i].0 - elapsed_times[i - 1].0
                } else {
                    elapsed_times[0].0
                };
                t += delta_t;
                n += delta_n;
                elapsed_times_reversed.push((n, t));
            }
            elapsed_times = elapsed_times_reversed;
        }
        BenchmarkMode::Sort => {
            for x in values {
                append(&mut set, *x);
            }
            let start = Instant::now();
            sort(&mut set);
            elapsed_times.push((values.len(), start.elapsed().as_secs_f64()));
            assert_eq!(get_len(&set), values.len());
        }
    }

    elapsed_times
}

type BenchFunc = Rc<dyn Fn(BenchmarkMode, BenchmarkParams, &[u64]) -> Vec<(usize, f64)>>;

struct AllBenches {
    bench_dynamic_array: BenchFunc,
    bench_vec: BenchFunc,
    bench_skiplist: BenchFunc,
    bench_plain_array: BenchFunc,
}

impl AllBenches {
    fn new() -> Self {
        let bench_dynamic_array = |mode: BenchmarkMode, params: BenchmarkParams, values: &[u64]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                DynamicArray::new,
                |set, x| {
                    set.append(KeyDynamicArray(x));
                },
                |set, idx, x| {
                    set.insert_at(idx, KeyDynamicArray(x)).unwrap();
                },
                |set, idx| {
                    set.remove_at(idx).unwrap();
                },
                |set| set.len(),
                |set| {
                    sort(set).unwrap();
                },
            )
        };
        let bench_vec = |mode: BenchmarkMode, params: BenchmarkParams, values: &[u64]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                Vec::new,
                |set, x| set.push(KeyVec(x)),
                |set, idx, x| set.insert(idx, KeyVec(x)),
                |set, idx| {
                    set.remove(idx);
                },
                |set| set.len(),
                |set| set.sort_unstable(),
            )
        };
        let bench_skiplist = |mode: BenchmarkMode, params: BenchmarkParams, values: &[u64]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                SkipList::new,
                |set, x| set.push_back(KeySkipList(x)),
                |set, idx, x| set.insert(KeySkipList(x), idx),
                |set, idx| {
                    set.remove(idx);
                },
                |set| set.len(),
                |set| {
                    // The skip list has no positional sort, an ordered skip list does the sorting.
                    let mut ordered = OrderedSkipList::new();
                    for x in set.iter() {
                        ordered.insert(*x);
                    }
                    let mut sorted = SkipList::new();
                    for x in ordered.iter() {
                        sorted.push_back(*x);
                    }
                    *set = sorted;
                },
            )
        };
        let bench_plain_array = |mode: BenchmarkMode, params: BenchmarkParams, values: &[u64]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                || PlainArray::new(1024),
                |set, x| {
                    set.append(KeyPlainArray(x));
                },
                |set, idx, x| {
                    set.insert_at(idx, KeyPlainArray(x));
                },
                |set, idx| {
                    set.remove_at(idx);
                },
                |set| set.len(),
                |set| set.sort(),
            )
        };
        AllBenches {
            bench_dynamic_array: Rc::new(bench_dynamic_array),
            bench_vec: Rc::new(bench_vec),
            bench_skiplist: Rc::new(bench_skiplist),
            bench_plain_array: Rc::new(bench_plain_array),
        }
    }
}

#[derive(Clone)]
struct BenchmarkTask {
    name: String,
    func: BenchFunc,
    run: i32,
}

fn construct_benchmark_tasks(
    all_benches: &AllBenches,
    run: i32,
    all_combatants: bool,
) -> Vec<BenchmarkTask> {
    let mut benchmarks: Vec<BenchmarkTask> = vec![
        BenchmarkTask {
            run,
            name: "DynamicArray".to_string(),
            func: all_benches.bench_dynamic_array.clone(),
        },
        BenchmarkTask {
            run,
            name: "Vec".to_string(),
            func: all_benches.bench_vec.clone(),
        },
        BenchmarkTask {
            run,
            name: "SkipList".to_string(),
            func: all_benches.bench_skiplist.clone(),
        },
    ];
    if all_combatants {
        benchmarks.push(BenchmarkTask {
            run,
            name: "PlainArray".to_string(),
            func: all_benches.bench_plain_array.clone(),
        });
    }
    helpers::shuffle(&mut benchmarks);
    benchmarks
}


pub fn run_benchmarks(mode: BenchmarkMode, params: BenchmarkParams, gen_mode: GeneratorMode) {
    if cfg!(debug_assertions) {
        println!(
            "WARNING: Debug assertions are enabled. Benchmarking should be done in `--release`."
        );
    }
    println!("Running benchmark...");
    println!("    Benchmark mode: {}", mode);
    println!("    Generator mode: {}", gen_mode);
    println!("    N: {}", params.n);
    println!("    Measure every: {}", params.measure_every);
    println!("    Num runs: {}", params.num_runs);

    let all_benches = AllBenches::new();

    for run in 0 ..= params.num_runs {
        let benchmark_tasks = construct_benchmark_tasks(&all_benches, run, params.all_combatants);

        let values = helpers::gen_values(gen_mode, params.n);
        assert_eq!(values.len(), params.n);

        for benchmark_task in benchmark_tasks {
            println!(
                "Running benchmark task: {} / {}",
                benchmark_task.name, benchmark_task.run
            );

            let measurements = (benchmark_task.func)(mode, params, &values);

            // Use zero-th iteration for warm up
            if run > 0 {
                let iters: Vec<_> = measurements.iter().map(|i_t| i_t.0).collect();
                let times: Vec<_> = measurements.iter().map(|i_t| i_t.1).collect();
                let filename = format!(
                    "results/{}_{}_{}_{}.json",
                    mode, gen_mode, benchmark_task.name, benchmark_task.run
                );
                if let Err(err) = helpers::export_elapsed_times(
                    &benchmark_task.name,
                    benchmark_task.run,
                    &mode.to_string(),
                    &gen_mode.to_string(),
                    params.n,
                    params.measure_every,
                    &filename,
                    &iters,
                    &times,
                ) {
                    println!("Failed to export {}: {}", filename, err);
                }
            }
        }
    }

    println!("Num cmp calls dynamic array: {:12}", get_num_calls_dynamic_array());
    println!("Num cmp calls vec:           {:12}", get_num_calls_vec());
    println!("Num cmp calls skip list:     {:12}", get_num_calls_skip_list());
    println!("Num cmp calls plain array:   {:12}", get_num_calls_plain_array());
}
