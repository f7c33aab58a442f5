#![no_main]

use libfuzzer_sys::fuzz_target;
use petri_engine::{Grid, stamp};

fuzz_target!(|data: &str| {
    // stamp should never panic on any input, only report out-of-bounds
    let mut grid = Grid::new(10, 40);
    let _ = stamp(&mut grid, data, 0, 0);
    let mut grid = Grid::new(10, 40);
    let _ = stamp(&mut grid, data, usize::MAX, usize::MAX);
});
