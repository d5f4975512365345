pub mod setup;
mod tests;
