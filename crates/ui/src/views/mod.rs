mod focus;
mod overview;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use focus::FocusView;
pub use overview::OverviewView;
pub use state::{ViewError, ViewState, view_state_from_resource};
