pub mod address;
pub mod batch;
pub mod bundle;
pub mod featurecollection;
pub mod generate;
pub mod generator;
pub mod hotels;
pub mod names;
pub mod places;
pub mod region;
pub mod restaurants;
pub mod transport;
pub mod vocabulary;
