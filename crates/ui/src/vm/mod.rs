mod trainer_vm;

pub use trainer_vm::{CardSide, CardVm, START_PROMPT, StatusVm};
