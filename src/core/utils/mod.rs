#[macro_use]
pub(crate) mod console;
