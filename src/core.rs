pub mod catalog;
pub mod form;
pub mod stats;
pub mod translator;
