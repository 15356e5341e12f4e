#![forbid(unsafe_code)]

pub mod dashboard;
pub mod directory;
pub mod error;
pub mod mock;
pub mod roster;

pub use bloom_core::Clock;

pub use dashboard::{DashboardService, OverviewSnapshot};
pub use directory::{RosterQuery, SchoolDirectory};
pub use error::{DashboardError, DirectoryError, RosterError};
pub use mock::MockDirectory;
pub use roster::RosterService;
