//! `bg-spatial` — road network, spatial indexing, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder` |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`          |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                 |

pub mod error;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use router::{DijkstraRouter, Route, Router};
