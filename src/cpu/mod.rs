//! Computer opponent for vs-CPU games.
//!
//! - `CpuMemory`: every card either seat has turned up this game
//! - `CpuPolicy`: trait for choosing flips from memory and the board
//! - `RememberingPolicy`: exploit known pairs, otherwise explore
//! - `ComputerOpponent`: policy + memory, owned by the engine

pub mod memory;
pub mod opponent;
pub mod policy;

pub use memory::{CpuMemory, MemoryGroups};
pub use opponent::ComputerOpponent;
pub use policy::{CpuPolicy, RememberingPolicy, TurnPlan};
