//! CPU scheduling simulator.
//!
//! Computes the execution timeline and performance metrics (wait,
//! turnaround, throughput) of a set of processes under four classic
//! single-CPU disciplines: FCFS, SJF, priority-SJF and round-robin.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `RuntimeProcess`, `TimeSlice`,
//!   `Timeline`, `ScheduleRow`, `RunMetrics`, `ScheduleReport`
//! - **`dispatching`**: Selection rules used at dispatch boundaries
//! - **`scheduler`**: The FCFS, dispatch-boundary and round-robin schedulers
//! - **`simulator`**: Runs the configured algorithms over one workload
//! - **`validation`**: Input integrity checks (empty input, IDs, bursts)
//! - **`workload`**: Seeded random workloads
//!
//! # Architecture
//!
//! Simulations are pure and deterministic. Every run owns a working copy of
//! the input, so runs never share mutable state. Output is structured data;
//! rendering tables or Gantt charts is left to the caller.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use simulator::Simulator;
