//! Five-star rating row with the numeric summary.

use leptos::prelude::*;
use products::Rating;

use crate::util::rating::{STAR_COUNT, StarCounts, rating_summary, star_counts};

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

#[component]
pub fn StarRating(rating: Rating) -> impl IntoView {
    let StarCounts { filled, .. } = star_counts(rating.rate);
    let label = format!("{filled} out of {STAR_COUNT} stars");

    view! {
        <div class="star-rating" role="img" aria-label=label>
            {(0..STAR_COUNT)
                .map(|i| {
                    let lit = i < filled;
                    view! {
                        <svg
                            class="star-rating__star"
                            class:star-rating__star--filled=lit
                            viewBox="0 0 20 20"
                            fill="currentColor"
                            aria-hidden="true"
                        >
                            <path d=STAR_PATH></path>
                        </svg>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="star-rating__summary">{rating_summary(&rating)}</span>
        </div>
    }
}
