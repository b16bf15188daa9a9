pub mod card_animated;
pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
pub mod ui;
