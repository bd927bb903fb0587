pub use event_details::EventDetails;
pub use hero_section::HeroSection;
pub use message_popup::MessagePopup;
pub use puzzle_card::PuzzleCard;
pub use puzzles_section::PuzzlesSection;
pub use rsvp_section::RsvpSection;

mod event_details;
mod hero_section;
mod message_popup;
mod puzzle_card;
mod puzzles_section;
mod rsvp_section;
