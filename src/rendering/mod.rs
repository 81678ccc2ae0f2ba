//! Low-level rendering for friend cards.

pub mod card_renderer;
