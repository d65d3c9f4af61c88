pub mod appointment;
pub mod assessment;
pub mod education;
pub mod enums;
pub mod facility;
pub mod filters;
pub mod prescription;
pub mod user;

pub use appointment::*;
pub use assessment::*;
pub use education::*;
pub use enums::*;
pub use facility::*;
pub use filters::*;
pub use prescription::*;
pub use user::*;
