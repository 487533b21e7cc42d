pub mod actions;
pub mod badges;
pub mod icons;
pub mod nav;
pub mod restaurant_card;
pub mod thumbs;
