pub mod stats_atomics;
