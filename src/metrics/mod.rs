/// Held-out evaluation counts and rates
pub mod confusion;
