pub mod astro;
pub mod horizon;
pub mod observatory;
pub mod profile;
