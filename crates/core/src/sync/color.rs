//! Event color selection

use std::sync::Arc;

use planshot_domain::{ColorId, ColorSelection};
use rand::seq::SliceRandom;

/// Chooses the display color for each created event.
pub trait ColorStrategy: Send + Sync {
    /// Color for the next event, or `None` to keep the calendar default.
    fn next_color(&self) -> Option<ColorId>;
}

/// Leaves every event with the calendar's default color.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoColor;

impl ColorStrategy for NoColor {
    fn next_color(&self) -> Option<ColorId> {
        None
    }
}

/// Uses the same color for every event.
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub ColorId);

impl ColorStrategy for FixedColor {
    fn next_color(&self) -> Option<ColorId> {
        Some(self.0)
    }
}

/// Picks uniformly from the 11-color palette, independently per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPaletteColor;

impl ColorStrategy for RandomPaletteColor {
    fn next_color(&self) -> Option<ColorId> {
        ColorId::PALETTE.choose(&mut rand::thread_rng()).copied()
    }
}

/// Build the strategy for a configured selection.
pub fn strategy_for(selection: ColorSelection) -> Arc<dyn ColorStrategy> {
    match selection {
        ColorSelection::None => Arc::new(NoColor),
        ColorSelection::Random => Arc::new(RandomPaletteColor),
        ColorSelection::Fixed(id) => Arc::new(FixedColor(id)),
    }
}
