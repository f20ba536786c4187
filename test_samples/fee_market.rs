//! EIP-1559 base fee helpers.

use std::fmt;

/// Parameters of the fee market.
pub struct BaseFeeParams {
    pub max_change_denominator: u128,
    pub elasticity_multiplier: u128,
}

impl BaseFeeParams {
    pub const fn ethereum() -> Self {
        Self {
            max_change_denominator: 8,
            elasticity_multiplier: 2,
        }
    }

    pub fn next_block_base_fee(&self, gas_used: u64, gas_limit: u64, base_fee: u64) -> u64 {
        let gas_target = gas_limit / self.elasticity_multiplier as u64;
        if gas_used == gas_target {
            return base_fee;
        }
        base_fee
    }
}

pub trait FeeMarket {
    fn base_fee(&self) -> u64;

    fn blob_fee(&self) -> u64 {
        0
    }
}

impl fmt::Display for BaseFeeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.max_change_denominator, self.elasticity_multiplier)
    }
}

pub fn calc_next_block_base_fee(params: BaseFeeParams, gas_used: u64) -> u64 {
    let _ = (params, gas_used);
    0
}
