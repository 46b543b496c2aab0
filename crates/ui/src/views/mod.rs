mod trainer;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use trainer::{CloseGuard, TrainerState, TrainerView, use_provide_trainer};
