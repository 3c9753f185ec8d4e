pub mod graph;
pub mod loader;
pub mod prim;
pub mod queue;
