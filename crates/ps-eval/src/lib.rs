//! `ps-eval` — statistics evaluators observing a running port.
//!
//! # Crate layout
//!
//! | Module                  | Contents                                          |
//! |-------------------------|---------------------------------------------------|
//! | [`evaluator`]           | `StatisticsEvaluator` trait, `EvaluatorKind`      |
//! | [`context`]             | `EvalContext` (read-only port view)               |
//! | [`cargo_decomposition`] | inbound cargo by class and type                   |
//! | [`quay_occupancy`]      | occupied quay count                               |
//! | [`ship_flag`]           | inbound ships by origin flag                      |
//! | [`ship_throughput`]     | departures in the last 60 minutes                 |
//! | [`error`]               | `EvalError`, `EvalResult<T>`                      |
//!
//! # Notification order (per tick)
//!
//! ```text
//! for each executed movement m:   every evaluator.on_movement(m, ctx)
//! after the last movement:        every evaluator.on_tick(ctx)
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Distribution maps use FxHash instead of SipHash.         |
//! | `serde`   | Adds `Serialize`/`Deserialize` to `EvaluatorKind`.       |

pub mod cargo_decomposition;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod quay_occupancy;
pub mod ship_flag;
pub mod ship_throughput;


pub use cargo_decomposition::CargoDecompositionEvaluator;
pub use context::EvalContext;
pub use error::{EvalError, EvalResult};
pub use evaluator::{EvaluatorKind, StatisticsEvaluator};
pub use quay_occupancy::QuayOccupancyEvaluator;
pub use ship_flag::ShipFlagEvaluator;
pub use ship_throughput::{ShipThroughputEvaluator, THROUGHPUT_WINDOW_MINUTES};

/// Count-per-key map used by the distribution evaluators.
#[cfg(feature = "fx-hash")]
pub type DistMap<K> = rustc_hash::FxHashMap<K, u32>;

/// Count-per-key map used by the distribution evaluators.
#[cfg(not(feature = "fx-hash"))]
pub type DistMap<K> = std::collections::HashMap<K, u32>;
