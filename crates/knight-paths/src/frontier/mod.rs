//! The three frontier backends plus an instrumenting wrapper.

mod array;
mod counting;
mod deque;
mod linked;

pub use array::ArrayFrontier;
pub use counting::CountingFrontier;
pub use deque::DequeFrontier;
pub use linked::LinkedFrontier;
