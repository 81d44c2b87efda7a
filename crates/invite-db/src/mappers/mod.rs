//! Row model -> entity decoding

mod invitation;
