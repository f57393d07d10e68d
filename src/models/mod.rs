//! Data consumed by the selector: variations, selections and the product context.

pub mod product;
pub mod variation;

pub use product::{BuyButton, Item, ItemImage, Product, ProductContext, SelectedSku, Seller};
pub use variation::{OptionImage, SelectionState, SelectorOption, Variation};
