//! Static Amount Factory Descriptors
//!
//! Concrete [`AmountFactory`] implementations carrying nothing but their
//! registration surface: type identity, a diagnostic name, and the
//! capability envelope query providers match against. The two standard
//! descriptors mirror the classic pairing of an unbounded decimal
//! representation and a fast fixed-scale one.

use maf_domain::ports::AmountFactory;
use maf_domain::value_objects::{AmountType, FactoryCapabilities};

/// Fixed scale of the `fast` representation (fractional digits)
pub const FAST_SCALE: i32 = 5;

/// Maximum precision of the `fast` representation in digits
pub const FAST_MAX_PRECISION: u32 = 19;

/// Maximum scale of the `decimal` representation
pub const DECIMAL_MAX_SCALE: i32 = 28;

/// Amount factory defined entirely by its registration metadata
pub struct StaticAmountFactory {
    amount_type: AmountType,
    name: String,
    capabilities: FactoryCapabilities,
}

impl StaticAmountFactory {
    /// Create a factory descriptor for the given type
    pub fn new<S: Into<String>>(
        amount_type: AmountType,
        name: S,
        capabilities: FactoryCapabilities,
    ) -> Self {
        Self {
            amount_type,
            name: name.into(),
            capabilities,
        }
    }

    /// The standard `decimal` factory: unbounded precision, variable scale
    pub fn decimal() -> Self {
        Self::new(
            AmountType::new("decimal"),
            "decimal",
            FactoryCapabilities::new().with_max_scale(DECIMAL_MAX_SCALE),
        )
    }

    /// The standard `fast` factory: bounded precision, fixed scale of 5
    pub fn fast() -> Self {
        Self::new(
            AmountType::new("fast"),
            "fast",
            FactoryCapabilities::new()
                .with_max_precision(FAST_MAX_PRECISION)
                .with_max_scale(FAST_SCALE)
                .with_fixed_scale(true),
        )
    }
}

impl AmountFactory for StaticAmountFactory {
    fn amount_type(&self) -> AmountType {
        self.amount_type.clone()
    }

    fn factory_name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> FactoryCapabilities {
        self.capabilities.clone()
    }
}

impl std::fmt::Debug for StaticAmountFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAmountFactory")
            .field("amount_type", &self.amount_type)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
