pub mod premium;
