mod goal;
mod todo;

pub use goal::Goal;
pub use todo::Todo;
