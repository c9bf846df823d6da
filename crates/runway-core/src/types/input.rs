//! Business input record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RunwayError, RunwayResult};

/// Upper bound for any monetary input (one trillion).
///
/// Keeps every product the engine forms (amount x `u32` count) well inside
/// `Decimal`'s 96-bit mantissa, so only the two quotients can overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

// =============================================================================
// INPUT FIELD
// =============================================================================

/// Names one field of an [`InputRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Average revenue per customer per period.
    Arpu,
    /// Fraction of revenue retained after direct costs.
    GrossMargin,
    /// Expected customer retention in periods.
    Lifetime,
    /// Cost to acquire one customer.
    Cac,
    /// New customers acquired in the period.
    NewCustomers,
    /// Fixed overhead per period.
    FixedCosts,
}

impl InputField {
    /// All fields in record order.
    pub const ALL: [InputField; 6] = [
        InputField::Arpu,
        InputField::GrossMargin,
        InputField::Lifetime,
        InputField::Cac,
        InputField::NewCustomers,
        InputField::FixedCosts,
    ];

    /// Returns the snake_case key used in config files and overrides.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            InputField::Arpu => "arpu",
            InputField::GrossMargin => "gross_margin",
            InputField::Lifetime => "lifetime",
            InputField::Cac => "cac",
            InputField::NewCustomers => "new_customers",
            InputField::FixedCosts => "fixed_costs",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InputField::Arpu => "ARPU",
            InputField::GrossMargin => "Gross Margin",
            InputField::Lifetime => "Customer Lifetime (Months)",
            InputField::Cac => "CAC",
            InputField::NewCustomers => "New Customers",
            InputField::FixedCosts => "Fixed Costs",
        }
    }

    /// Returns true for the two whole-number fields.
    #[must_use]
    pub fn is_count(self) -> bool {
        matches!(self, InputField::Lifetime | InputField::NewCustomers)
    }

    /// Returns true for the three non-negative monetary fields.
    #[must_use]
    pub fn is_monetary(self) -> bool {
        matches!(
            self,
            InputField::Arpu | InputField::Cac | InputField::FixedCosts
        )
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for InputField {
    type Err = RunwayError;

    /// Accepts the snake_case key, case-insensitively, with `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        InputField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| RunwayError::unknown_field(s.trim()))
    }
}

// =============================================================================
// INPUT RECORD
// =============================================================================

/// The six business inputs the engine computes from.
///
/// Every constructor validates, so a value of this type always satisfies:
///
/// - `arpu`, `cac`, `fixed_costs` in `[0, MAX_AMOUNT]`
/// - `gross_margin` in `[0, 1]`, at any precision
/// - `lifetime >= 1`, `new_customers >= 1`
///
/// # Example
///
/// ```rust
/// use runway_core::types::InputRecord;
/// use rust_decimal_macros::dec;
///
/// let input = InputRecord::builder()
///     .arpu(dec!(200))
///     .gross_margin(dec!(0.80))
///     .lifetime(24)
///     .cac(dec!(200))
///     .new_customers(250)
///     .fixed_costs(dec!(40000))
///     .build()
///     .unwrap();
/// assert_eq!(input.lifetime(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInputRecord")]
pub struct InputRecord {
    arpu: Decimal,
    gross_margin: Decimal,
    lifetime: u32,
    cac: Decimal,
    new_customers: u32,
    fixed_costs: Decimal,
}

impl InputRecord {
    /// Creates a validated input record.
    pub fn new(
        arpu: Decimal,
        gross_margin: Decimal,
        lifetime: u32,
        cac: Decimal,
        new_customers: u32,
        fixed_costs: Decimal,
    ) -> RunwayResult<Self> {
        let record = Self {
            arpu,
            gross_margin,
            lifetime,
            cac,
            new_customers,
            fixed_costs,
        };
        record.validate()?;
        Ok(record)
    }

    /// Builds a record from whole-dollar amounts and a margin in percent.
    ///
    /// Usable in const context, which is how the scenario presets are
    /// declared. Returns `None` when `gross_margin_pct > 100` or a count is
    /// zero; `u32` amounts are non-negative and below [`MAX_AMOUNT`].
    #[must_use]
    pub const fn preset(
        arpu: u32,
        gross_margin_pct: u32,
        lifetime: u32,
        cac: u32,
        new_customers: u32,
        fixed_costs: u32,
    ) -> Option<Self> {
        if gross_margin_pct > 100 || lifetime == 0 || new_customers == 0 {
            return None;
        }
        Some(Self {
            arpu: Decimal::from_parts(arpu, 0, 0, false, 0),
            gross_margin: Decimal::from_parts(gross_margin_pct, 0, 0, false, 2),
            lifetime,
            cac: Decimal::from_parts(cac, 0, 0, false, 0),
            new_customers,
            fixed_costs: Decimal::from_parts(fixed_costs, 0, 0, false, 0),
        })
    }

    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> InputRecordBuilder {
        InputRecordBuilder::default()
    }

    /// Returns a builder pre-filled with this record's values.
    #[must_use]
    pub fn to_builder(&self) -> InputRecordBuilder {
        InputRecordBuilder::from(*self)
    }

    /// Checks every field against its domain.
    ///
    /// Reports the first violation in record order.
    pub fn validate(&self) -> RunwayResult<()> {
        check_amount(InputField::Arpu, self.arpu)?;

        if self.gross_margin < Decimal::ZERO || self.gross_margin > Decimal::ONE {
            return Err(RunwayError::invalid_input(
                InputField::GrossMargin,
                format!("{} must be within [0, 1]", self.gross_margin),
            ));
        }

        if self.lifetime == 0 {
            return Err(RunwayError::invalid_input(
                InputField::Lifetime,
                "must be at least 1 period",
            ));
        }

        check_amount(InputField::Cac, self.cac)?;

        if self.new_customers == 0 {
            return Err(RunwayError::invalid_input(
                InputField::NewCustomers,
                "must be at least 1 customer",
            ));
        }

        check_amount(InputField::FixedCosts, self.fixed_costs)
    }

    /// Average revenue per customer per period.
    pub fn arpu(&self) -> Decimal {
        self.arpu
    }

    /// Gross margin as a fraction in `[0, 1]`.
    pub fn gross_margin(&self) -> Decimal {
        self.gross_margin
    }

    /// Customer lifetime in periods.
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    /// Customer acquisition cost.
    pub fn cac(&self) -> Decimal {
        self.cac
    }

    /// New customers acquired per period.
    pub fn new_customers(&self) -> u32 {
        self.new_customers
    }

    /// Fixed costs per period.
    pub fn fixed_costs(&self) -> Decimal {
        self.fixed_costs
    }

    /// Returns the value of one field, widened to `Decimal`.
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::Arpu => self.arpu,
            InputField::GrossMargin => self.gross_margin,
            InputField::Lifetime => Decimal::from(self.lifetime),
            InputField::Cac => self.cac,
            InputField::NewCustomers => Decimal::from(self.new_customers),
            InputField::FixedCosts => self.fixed_costs,
        }
    }
}

fn check_amount(field: InputField, value: Decimal) -> RunwayResult<()> {
    if value < Decimal::ZERO {
        return Err(RunwayError::invalid_input(
            field,
            format!("{} must not be negative", value),
        ));
    }
    if value > MAX_AMOUNT {
        return Err(RunwayError::invalid_input(
            field,
            format!("{} exceeds the maximum of {}", value, MAX_AMOUNT),
        ));
    }
    Ok(())
}

/// Unvalidated wire shape; every field is required.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInputRecord {
    arpu: Decimal,
    gross_margin: Decimal,
    lifetime: u32,
    cac: Decimal,
    new_customers: u32,
    fixed_costs: Decimal,
}

impl TryFrom<RawInputRecord> for InputRecord {
    type Error = RunwayError;

    fn try_from(raw: RawInputRecord) -> Result<Self, Self::Error> {
        InputRecord::new(
            raw.arpu,
            raw.gross_margin,
            raw.lifetime,
            raw.cac,
            raw.new_customers,
            raw.fixed_costs,
        )
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builder for [`InputRecord`].
///
/// `build()` fails with `InvalidInput` if any field is missing or out of
/// domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputRecordBuilder {
    arpu: Option<Decimal>,
    gross_margin: Option<Decimal>,
    lifetime: Option<u32>,
    cac: Option<Decimal>,
    new_customers: Option<u32>,
    fixed_costs: Option<Decimal>,
}

impl InputRecordBuilder {
    /// Sets ARPU.
    pub fn arpu(mut self, value: Decimal) -> Self {
        self.arpu = Some(value);
        self
    }

    /// Sets gross margin.
    pub fn gross_margin(mut self, value: Decimal) -> Self {
        self.gross_margin = Some(value);
        self
    }

    /// Sets customer lifetime.
    pub fn lifetime(mut self, value: u32) -> Self {
        self.lifetime = Some(value);
        self
    }

    /// Sets CAC.
    pub fn cac(mut self, value: Decimal) -> Self {
        self.cac = Some(value);
        self
    }

    /// Sets new customers per period.
    pub fn new_customers(mut self, value: u32) -> Self {
        self.new_customers = Some(value);
        self
    }

    /// Sets fixed costs.
    pub fn fixed_costs(mut self, value: Decimal) -> Self {
        self.fixed_costs = Some(value);
        self
    }

    /// Builds and validates the record.
    pub fn build(self) -> RunwayResult<InputRecord> {
        InputRecord::new(
            required(InputField::Arpu, self.arpu)?,
            required(InputField::GrossMargin, self.gross_margin)?,
            required(InputField::Lifetime, self.lifetime)?,
            required(InputField::Cac, self.cac)?,
            required(InputField::NewCustomers, self.new_customers)?,
            required(InputField::FixedCosts, self.fixed_costs)?,
        )
    }
}

impl From<InputRecord> for InputRecordBuilder {
    fn from(record: InputRecord) -> Self {
        Self {
            arpu: Some(record.arpu),
            gross_margin: Some(record.gross_margin),
            lifetime: Some(record.lifetime),
            cac: Some(record.cac),
            new_customers: Some(record.new_customers),
            fixed_costs: Some(record.fixed_costs),
        }
    }
}

fn required<T>(field: InputField, value: Option<T>) -> RunwayResult<T> {
    value.ok_or_else(|| RunwayError::invalid_input(field, "missing"))
}
