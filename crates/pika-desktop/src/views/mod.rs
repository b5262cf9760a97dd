pub mod message_card;
pub mod reactions_dialog;
