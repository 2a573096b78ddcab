mod simulate;

pub use simulate::{run_simulation, Simulation};
