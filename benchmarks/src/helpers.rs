use std::fs::{create_dir_all, File};
use std::path::Path;
use serde_json::json;

use rand::Rng;
use rand::seq::SliceRandom;
use rand::thread_rng;

use super::benchmarks::GeneratorMode;

/// Defines a `u64` newtype whose `Ord` implementation counts its invocations,
/// plus a getter for the count.
#[macro_export]
macro_rules! create_counted {
    ($name:ident, $get:ident, $count:ident) => {
        static $count: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub u64);

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                self.0.cmp(&other.0)
            }
        }

        #[allow(dead_code)]
        pub fn $get() -> u64 {
            $count.load(std::sync::atomic::Ordering::Relaxed)
        }
    };
}


pub fn gen_rand_values(n: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    (0 .. n).map(|_| rng.gen_range(0, n.max(1) as u64)).collect()
}

pub fn gen_values(gen_mode: GeneratorMode, n: usize) -> Vec<u64> {
    match gen_mode {
        GeneratorMode::Avg => gen_rand_values(n),
        GeneratorMode::Asc => (0 .. n as u64).collect(),
        GeneratorMode::Dsc => (0 .. n as u64).rev().collect(),
    }
}

/// Maps a generated value to a valid insert position for a collection of length `len`.
#[inline]
pub fn insert_position(value: u64, len: usize) -> usize {
    (value % (len as u64 + 1)) as usize
}

/// Maps a generated value to a valid element position for a non-empty collection of length `len`.
#[inline]
pub fn remove_position(value: u64, len: usize) -> usize {
    (value % len as u64) as usize
}

pub fn shuffle<T>(v: &mut [T]) {
    let mut rng = thread_rng();
    v.shuffle(&mut rng);
}

pub fn shuffle_clone<T>(v: &[T]) -> Vec<T>
where
    T: Clone
{
    let mut v_cloned = v.to_vec();
    shuffle(&mut v_cloned);
    v_cloned
}


#[allow(clippy::too_many_arguments)]
pub fn export_elapsed_times(
    name: &str,
    run: i32,
    mode: &str,
    gen_mode: &str,
    n: usize,
    measure_every: usize,
    filename: &str,
    iters: &[usize],
    times: &[f64],
) -> std::io::Result<()> {
    let json_data = json!({
        "name": name,
        "run": run,
        "mode": mode,
        "gen_mode": gen_mode,
        "n": n,
        "measure_every": measure_every,
        "iters": iters,
        "times": times,
    });
    write_json(filename, &json_data)
}


pub fn export_stats(
    gen_mode: &str,
    iters: &[usize],
    phases: &[&str],
    lengths: &[usize],
    capacities: &[usize],
) -> std::io::Result<()> {
    let json_data = json!({
        "gen_mode": gen_mode,
        "iters": iters,
        "phases": phases,
        "lengths": lengths,
        "capacities": capacities,
    });
    write_json("results/growth_stats.json", &json_data)
}


fn write_json(filename: &str, json_data: &serde_json::Value) -> std::io::Result<()> {
    let path = Path::new(filename);
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let f = File::create(path)?;
    serde_json::to_writer_pretty(f, json_data)?;
    Ok(())
}
