mod arbitrage_tests;
mod engine_tests;
mod pricing_tests;
mod solver_tests;
