use console::Style;
use once_cell::sync::Lazy;

pub static TITLE_STYLE: Lazy<Style> = Lazy::new(|| Style::new().blue().bold());
pub static CLOCK_STYLE: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static DIM_STYLE: Lazy<Style> = Lazy::new(|| Style::new().dim());
