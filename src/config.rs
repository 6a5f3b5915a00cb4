use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// default annual property tax, as a fraction of home price (1.2%)
pub const DEFAULT_PROPERTY_TAX_RATE: Rate = Rate::from_decimal(dec!(0.012));

/// default annual home insurance, as a fraction of home price (0.5%)
pub const DEFAULT_HOME_INSURANCE_RATE: Rate = Rate::from_decimal(dec!(0.005));

/// engine configuration
///
/// property tax and home insurance are estimated as fixed annual fractions
/// of the home price; both are overridable here rather than hard-coded in
/// the calculation path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub property_tax_rate: Rate,
    pub home_insurance_rate: Rate,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            property_tax_rate: DEFAULT_PROPERTY_TAX_RATE,
            home_insurance_rate: DEFAULT_HOME_INSURANCE_RATE,
        }
    }
}

impl EngineConfig {
    /// configuration with explicit tax and insurance assumptions
    pub fn new(property_tax_rate: Rate, home_insurance_rate: Rate) -> Self {
        Self {
            property_tax_rate,
            home_insurance_rate,
        }
    }
}
