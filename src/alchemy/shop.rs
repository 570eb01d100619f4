//! Shop purchase pipeline.
//!
//! A purchase runs a fixed, ordered list of checks and then settles:
//! 1. stock check -> [`AlchemyError::OutOfStock`]
//! 2. funds check -> [`AlchemyError::InsufficientFunds`]
//! 3. settlement (gold out, ingredient in, stock down)
//!
//! The first failing check aborts with no mutation. Settlement only runs once
//! every check has passed, so a purchase is all-or-nothing.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::alchemy::errors::AlchemyError;
use crate::alchemy::types::{Player, Shop};

/// Borrowed view of a purchase under validation.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseRequest<'a> {
    pub player: &'a Player,
    pub shop: &'a Shop,
    pub ingredient: &'a str,
    pub quantity: u32,
}

impl PurchaseRequest<'_> {
    /// Unit price and total cost. Only meaningful once the stock check passed.
    fn cost(&self) -> (u32, u64) {
        let price = self
            .shop
            .get_entry(self.ingredient)
            .map(|e| e.price)
            .unwrap_or(0);
        (price, price as u64 * self.quantity as u64)
    }
}

/// A single validation step.
pub type PurchaseCheck = fn(&PurchaseRequest<'_>) -> Result<(), AlchemyError>;

/// Checks in evaluation order. Settlement follows the last one.
pub const PURCHASE_CHECKS: [PurchaseCheck; 2] = [check_stock, check_funds];

/// Shop must list the ingredient with at least the requested quantity.
pub fn check_stock(request: &PurchaseRequest<'_>) -> Result<(), AlchemyError> {
    let available = request
        .shop
        .get_entry(request.ingredient)
        .map(|e| e.quantity)
        .unwrap_or(0);
    if available < request.quantity {
        return Err(AlchemyError::OutOfStock {
            ingredient: request.ingredient.to_string(),
            requested: request.quantity,
            available,
        });
    }
    Ok(())
}

/// Player gold must cover price * quantity.
pub fn check_funds(request: &PurchaseRequest<'_>) -> Result<(), AlchemyError> {
    let (_, total) = request.cost();
    if (request.player.gold as u64) < total {
        return Err(AlchemyError::InsufficientFunds {
            needed: total,
            available: request.player.gold,
        });
    }
    Ok(())
}

/// Outcome of a settled purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub ingredient: String,
    pub quantity: u32,
    pub unit_price: u32,
    pub total_cost: u32,
}

/// Run every check in order without mutating anything.
pub fn validate_purchase(request: &PurchaseRequest<'_>) -> Result<(), AlchemyError> {
    PURCHASE_CHECKS.iter().try_for_each(|check| check(request))
}

/// Validate and settle a purchase of `quantity` units of `ingredient`.
pub fn process_purchase(
    player: &mut Player,
    shop: &mut Shop,
    ingredient: &str,
    quantity: u32,
) -> Result<PurchaseReceipt, AlchemyError> {
    if quantity == 0 {
        return Err(AlchemyError::InvalidQuantity);
    }

    let request = PurchaseRequest {
        player: &*player,
        shop: &*shop,
        ingredient,
        quantity,
    };
    if let Err(e) = validate_purchase(&request) {
        warn!("purchase rejected at {}: {}", shop.name, e);
        return Err(e);
    }
    let (unit_price, total) = request.cost();
    // Funds check bounds total by player.gold, so it fits in u32.
    let total_cost = total as u32;

    player.gold -= total_cost;
    player.add_ingredient(ingredient, quantity);
    shop.reduce_stock(ingredient, quantity);

    info!(
        "{} bought {} x {} at {} for {} gold",
        player.name, quantity, ingredient, shop.name, total_cost
    );

    Ok(PurchaseReceipt {
        ingredient: ingredient.to_string(),
        quantity,
        unit_price,
        total_cost,
    })
}

/// Format shop stock as numbered lines
pub fn format_shop_listing(shop: &Shop) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("=== {} ===", shop.name));

    if shop.inventory.is_empty() {
        lines.push("Nothing left for sale.".to_string());
        return lines;
    }

    for (idx, (ingredient, entry)) in shop.inventory.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) - {}g",
            idx + 1,
            ingredient,
            entry.quantity,
            entry.price
        ));
    }

    lines
}
