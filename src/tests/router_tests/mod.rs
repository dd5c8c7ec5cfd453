mod embed_tests;
mod listing_tests;
mod mortgage_tests;
mod premium_tests;
mod tour_tests;
