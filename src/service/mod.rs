//! Business logic layer.
//!
//! Holds the giveaway lifecycle manager, which orchestrates the announcement
//! channel and the giveaway store. The bot glue and startup code sit above
//! this layer; the collaborator traits sit below it.

pub mod giveaway;

#[cfg(test)]
mod test;
