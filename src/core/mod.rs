pub mod emissions;
pub mod heating_control;
pub mod house_energy;
pub mod material_properties;
pub mod network;
pub mod pipework;
pub mod population;
pub mod random_source;
pub mod units;
pub mod weather;
