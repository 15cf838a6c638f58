/// Card discovery, decoding and height normalization.
pub mod cards;
