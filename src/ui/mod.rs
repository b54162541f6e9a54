pub mod figure;
pub mod output;
pub mod plot;
pub mod theme;
