mod loading;
mod product_card;

pub use loading::Loading;
pub use product_card::ProductCard;
