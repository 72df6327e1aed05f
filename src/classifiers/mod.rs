pub mod model;
pub mod naive_bayes;
pub mod scorer;
pub mod shared;
pub mod trainer;
