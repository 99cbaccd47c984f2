/// runnable demonstrations of reaction thermochemistry, TST rate coefficients and network rates
pub mod reaction_examples;
