pub mod extremum_sorter;
pub mod heap_sorter;
pub mod iter_sorter;
pub mod loop_sorter;
pub mod std_sorter;
