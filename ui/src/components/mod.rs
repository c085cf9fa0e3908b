pub mod countdown;
pub mod features;
pub mod hero;
