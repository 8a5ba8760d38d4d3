pub use super::giveaway::Entity as Giveaway;
