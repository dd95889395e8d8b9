mod assembler;
pub mod grocery;
mod macros;
mod pool;
mod sampler;
mod substitution;

pub use assembler::*;
pub use macros::*;
pub use pool::*;
pub use sampler::*;
pub use substitution::*;

pub use nutriplan_shared::mealplan::GenerateError;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
