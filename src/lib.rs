pub mod db;

pub mod buildings;
pub mod expenditures;
pub mod sections;

pub mod constants;
pub mod errors;
pub mod schema;

pub use buildings::*;
pub use expenditures::*;
pub use sections::*;
