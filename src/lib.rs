mod bindable;
mod variable;

pub use bindable::*;
pub use variable::*;

#[cfg(doctest)]
mod tests_readme;
