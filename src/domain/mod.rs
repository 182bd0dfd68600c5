pub mod artwork;
pub mod credits;
pub mod track;
