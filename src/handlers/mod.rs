pub mod listing;
pub mod mortgage;
pub mod premium;
pub mod tour;
