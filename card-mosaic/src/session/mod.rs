/// Options and the load → plan → composite → write driver.
pub mod generate;
