pub mod day_night_cycle;

pub use day_night_cycle::DayNightCycle;
