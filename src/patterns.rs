//! Provides a set of input patterns for testing and benchmarking the sort.
//! All values are non-negative i32, the same domain the command line accepts.

use rand::prelude::*;

use once_cell::sync::OnceCell;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_uniform(size, 0..=i32::MAX)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Seed shared by every pattern in this process, so a failing input can be reproduced.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, tests print it for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed() {
        assert_eq!(random_init_seed(), random_init_seed());
        assert_eq!(random(50), random(50));
    }

    #[test]
    fn shapes() {
        assert!(random(1_000).iter().all(|&val| val >= 0));
        assert!(random_uniform(100, 0..4).iter().all(|&val| (0..4).contains(&val)));
        assert_eq!(ascending(4), [0, 1, 2, 3]);
        assert_eq!(descending(4), [3, 2, 1, 0]);
        assert_eq!(all_equal(3), [66, 66, 66]);
        assert_eq!(saw_mixed(37, 5).len(), 37);
        assert_eq!(pipe_organ(0), Vec::<i32>::new());
    }
}
