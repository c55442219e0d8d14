pub mod ctrl_c;
pub mod run;
pub mod surface;

pub use run::RunMsg;
pub use surface::TermSurface;
