pub mod cube;
pub mod r#move;
pub mod scramble;
pub mod solver;

pub mod prelude;

#[cfg(test)]
mod test;
