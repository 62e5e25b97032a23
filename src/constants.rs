/// Fractional digits stored for unit prices
pub const PRICE_SCALE: u32 = 2;

/// Fractional digits stored for quantities
pub const QUANTITY_SCALE: u32 = 8;

/// Expenditure type for construction works
pub const EXPENDITURE_TYPE_WORK: &str = "WORK";

/// Expenditure type for materials
pub const EXPENDITURE_TYPE_MATERIAL: &str = "MATERIAL";
