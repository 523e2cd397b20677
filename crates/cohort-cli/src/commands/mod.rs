pub mod census;
pub mod graduate;
pub mod roster;
