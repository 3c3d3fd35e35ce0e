pub mod class_parameters;
pub mod detection_set;
pub mod object_detector;
pub mod region_associator;
