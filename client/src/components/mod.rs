//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render data they are handed; fetching and state transitions
//! stay in `pages` and `state`.

pub mod favorite_toggle;
pub mod missing_product;
pub mod nav_bar;
pub mod product_card;
pub mod star_rating;
