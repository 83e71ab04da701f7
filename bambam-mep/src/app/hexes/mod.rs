mod hexes_app;

pub use hexes_app::run;
