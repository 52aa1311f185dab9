//! Path search for skerry charts.
//!
//! This crate implements the informed best-first search over a
//! `skerry_core::Grid` and the reconstruction of its result:
//!
//! - **[`Search`]** — A* over the chart's 8-connected cells, keyed by
//!   `fcost` with `hcost` tie-breaking, writing costs and parent links
//!   into the cells themselves ([`Search::find_path`])
//! - **[`retrace`]** — follow parent links target-to-start and return the
//!   ordered path
//! - **[`Search::plot`]** — search, retrace and mark the path on the
//!   chart's text overlay
//!
//! `Search` owns and reuses its internal open/closed scratch so repeated
//! queries incur no allocations after warm-up.

mod astar;
mod path;

pub use astar::Search;
pub use path::retrace;
