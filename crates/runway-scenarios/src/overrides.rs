//! Per-field input overrides.
//!
//! An [`InputOverrides`] holds an optional replacement for each of the six
//! input fields. Applying it to a preset replaces only the fields that are
//! set and re-validates the result.

use std::str::FromStr;

use runway_core::{InputField, InputRecord, RunwayError, RunwayResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional replacement values for an [`InputRecord`].
///
/// Deserializes from a table keyed by the snake_case field names, e.g. the
/// `[overrides]` section of a config file:
///
/// ```toml
/// cac = 0
/// gross_margin = 0.75
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOverrides {
    /// Replacement ARPU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arpu: Option<Decimal>,
    /// Replacement gross margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_margin: Option<Decimal>,
    /// Replacement customer lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<u32>,
    /// Replacement CAC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cac: Option<Decimal>,
    /// Replacement new customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_customers: Option<u32>,
    /// Replacement fixed costs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_costs: Option<Decimal>,
}

impl InputOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to override ARPU.
    pub fn with_arpu(mut self, value: Decimal) -> Self {
        self.arpu = Some(value);
        self
    }

    /// Builder method to override gross margin.
    pub fn with_gross_margin(mut self, value: Decimal) -> Self {
        self.gross_margin = Some(value);
        self
    }

    /// Builder method to override customer lifetime.
    pub fn with_lifetime(mut self, value: u32) -> Self {
        self.lifetime = Some(value);
        self
    }

    /// Builder method to override CAC.
    pub fn with_cac(mut self, value: Decimal) -> Self {
        self.cac = Some(value);
        self
    }

    /// Builder method to override new customers.
    pub fn with_new_customers(mut self, value: u32) -> Self {
        self.new_customers = Some(value);
        self
    }

    /// Builder method to override fixed costs.
    pub fn with_fixed_costs(mut self, value: Decimal) -> Self {
        self.fixed_costs = Some(value);
        self
    }

    /// Parses `raw` for `field` and stores it, replacing any earlier value.
    ///
    /// Accepted forms:
    /// - money: `40000`, `40,000`, `$40,000.50`
    /// - gross margin: `0.8` or `80%`
    /// - counts: whole numbers only
    ///
    /// Parsing only checks the shape of the value; domain checks happen in
    /// [`apply`](Self::apply).
    pub fn set(&mut self, field: InputField, raw: &str) -> RunwayResult<()> {
        if field.is_count() {
            let value = parse_count(field, raw)?;
            match field {
                InputField::Lifetime => self.lifetime = Some(value),
                _ => self.new_customers = Some(value),
            }
            return Ok(());
        }

        let value = parse_decimal(field, raw)?;
        match field {
            InputField::Arpu => self.arpu = Some(value),
            InputField::GrossMargin => self.gross_margin = Some(value),
            InputField::Cac => self.cac = Some(value),
            _ => self.fixed_costs = Some(value),
        }
        Ok(())
    }

    /// Parses a `key=value` assignment such as `cac=0` and stores it.
    pub fn parse_assignment(&mut self, assignment: &str) -> RunwayResult<()> {
        let (key, raw) = assignment.split_once('=').ok_or_else(|| RunwayError::InvalidInput {
            field: assignment.trim().to_string(),
            reason: "expected key=value".to_string(),
        })?;
        let field = InputField::from_str(key)?;
        self.set(field, raw)
    }

    /// Builds an override set from `key=value` assignments; later ones win.
    pub fn from_assignments<'a, I>(assignments: I) -> RunwayResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut overrides = Self::new();
        for assignment in assignments {
            overrides.parse_assignment(assignment)?;
        }
        Ok(overrides)
    }

    /// Returns the override for `field`, widened to `Decimal`.
    pub fn get(&self, field: InputField) -> Option<Decimal> {
        match field {
            InputField::Arpu => self.arpu,
            InputField::GrossMargin => self.gross_margin,
            InputField::Lifetime => self.lifetime.map(Decimal::from),
            InputField::Cac => self.cac,
            InputField::NewCustomers => self.new_customers.map(Decimal::from),
            InputField::FixedCosts => self.fixed_costs,
        }
    }

    /// Removes the override for `field`.
    pub fn clear(&mut self, field: InputField) {
        match field {
            InputField::Arpu => self.arpu = None,
            InputField::GrossMargin => self.gross_margin = None,
            InputField::Lifetime => self.lifetime = None,
            InputField::Cac => self.cac = None,
            InputField::NewCustomers => self.new_customers = None,
            InputField::FixedCosts => self.fixed_costs = None,
        }
    }

    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.overridden_fields().is_empty()
    }

    /// Fields that carry an override, in record order.
    pub fn overridden_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
            .collect()
    }

    /// Layers `higher` on top of `self`; `higher` wins wherever it is set.
    #[must_use]
    pub fn merge(&self, higher: &InputOverrides) -> InputOverrides {
        InputOverrides {
            arpu: higher.arpu.or(self.arpu),
            gross_margin: higher.gross_margin.or(self.gross_margin),
            lifetime: higher.lifetime.or(self.lifetime),
            cac: higher.cac.or(self.cac),
            new_customers: higher.new_customers.or(self.new_customers),
            fixed_costs: higher.fixed_costs.or(self.fixed_costs),
        }
    }

    /// Applies the overrides to `base`.
    ///
    /// Fields without an override keep the base value. The result is always
    /// rebuilt and validated, so an out-of-domain override fails with
    /// `InvalidInput`.
    pub fn apply(&self, base: &InputRecord) -> RunwayResult<InputRecord> {
        let mut builder = base.to_builder();
        if let Some(v) = self.arpu {
            builder = builder.arpu(v);
        }
        if let Some(v) = self.gross_margin {
            builder = builder.gross_margin(v);
        }
        if let Some(v) = self.lifetime {
            builder = builder.lifetime(v);
        }
        if let Some(v) = self.cac {
            builder = builder.cac(v);
        }
        if let Some(v) = self.new_customers {
            builder = builder.new_customers(v);
        }
        if let Some(v) = self.fixed_costs {
            builder = builder.fixed_costs(v);
        }

        let input = builder.build()?;
        tracing::debug!(fields = ?self.overridden_fields(), "applied input overrides");
        Ok(input)
    }
}

fn parse_decimal(field: InputField, raw: &str) -> RunwayResult<Decimal> {
    let trimmed = raw.trim();
    let (body, percent) = match trimmed.strip_suffix('%') {
        Some(body) if field == InputField::GrossMargin => (body, true),
        _ => (trimmed, false),
    };
    let cleaned: String = body
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect();

    let value = Decimal::from_str(&cleaned).map_err(|_| {
        RunwayError::invalid_input(field, format!("'{}' is not a number", trimmed))
    })?;

    Ok(if percent {
        value / Decimal::ONE_HUNDRED
    } else {
        value
    })
}

fn parse_count(field: InputField, raw: &str) -> RunwayResult<u32> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect();

    cleaned.parse::<u32>().map_err(|_| {
        RunwayError::invalid_input(
            field,
            format!("'{}' is not a non-negative whole number", raw.trim()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{resolve, BASE};
    use runway_core::ScenarioName;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_overrides_return_base() {
        let overrides = InputOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply(&BASE).unwrap(), BASE);
    }

    #[test]
    fn test_fractional_margin_override() {
        let mut overrides = InputOverrides::new();
        overrides.set(InputField::GrossMargin, "33.3333%").unwrap();
        let input = overrides.apply(&BASE).unwrap();
        assert_eq!(input.gross_margin(), dec!(0.333333));
        assert_eq!(input.arpu(), dec!(200));
    }

    #[test]
    fn test_single_override_keeps_other_fields() {
        let base = resolve(ScenarioName::Base);
        let input = InputOverrides::new().with_cac(dec!(0)).apply(&base).unwrap();

        assert_eq!(input.cac(), dec!(0));
        assert_eq!(input.arpu(), dec!(200));
        assert_eq!(input.gross_margin(), dec!(0.80));
        assert_eq!(input.lifetime(), 24);
        assert_eq!(input.new_customers(), 250);
        assert_eq!(input.fixed_costs(), dec!(40000));
    }

    #[test]
    fn test_every_field_overridden() {
        let overrides = InputOverrides::new()
            .with_arpu(dec!(99))
            .with_gross_margin(dec!(0.5))
            .with_lifetime(12)
            .with_cac(dec!(10))
            .with_new_customers(7)
            .with_fixed_costs(dec!(1000));
        let input = overrides.apply(&BASE).unwrap();
        let expected =
            InputRecord::new(dec!(99), dec!(0.5), 12, dec!(10), 7, dec!(1000)).unwrap();
        assert_eq!(input, expected);
        assert_eq!(overrides.overridden_fields(), InputField::ALL.to_vec());
    }

    #[test]
    fn test_out_of_domain_override_rejected() {
        let err = InputOverrides::new()
            .with_gross_margin(dec!(1.2))
            .apply(&BASE)
            .unwrap_err();
        assert!(matches!(err, RunwayError::InvalidInput { ref field, .. } if field == "gross_margin"));

        let err = InputOverrides::new()
            .with_new_customers(0)
            .apply(&BASE)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_set_parses_money_forms() {
        let mut overrides = InputOverrides::new();
        overrides.set(InputField::FixedCosts, "$40,000.50").unwrap();
        overrides.set(InputField::Arpu, " 1_250 ").unwrap();
        assert_eq!(overrides.fixed_costs, Some(dec!(40000.50)));
        assert_eq!(overrides.arpu, Some(dec!(1250)));
    }

    #[test]
    fn test_set_parses_margin_percent() {
        let mut overrides = InputOverrides::new();
        overrides.set(InputField::GrossMargin, "75%").unwrap();
        assert_eq!(overrides.gross_margin, Some(dec!(0.75)));

        overrides.set(InputField::GrossMargin, "0.6").unwrap();
        assert_eq!(overrides.gross_margin, Some(dec!(0.6)));
    }

    #[test]
    fn test_percent_only_for_margin() {
        let mut overrides = InputOverrides::new();
        assert!(overrides.set(InputField::Cac, "50%").is_err());
    }

    #[test]
    fn test_set_rejects_fractional_counts() {
        let mut overrides = InputOverrides::new();
        let err = overrides.set(InputField::Lifetime, "2.5").unwrap_err();
        assert!(matches!(err, RunwayError::InvalidInput { ref field, .. } if field == "lifetime"));
        assert!(overrides.set(InputField::NewCustomers, "-3").is_err());
        overrides.set(InputField::NewCustomers, "1,000").unwrap();
        assert_eq!(overrides.new_customers, Some(1000));
    }

    #[test]
    fn test_set_rejects_garbage() {
        let mut overrides = InputOverrides::new();
        let err = overrides.set(InputField::Cac, "lots").unwrap_err();
        assert_eq!(
            err,
            RunwayError::invalid_input(InputField::Cac, "'lots' is not a number")
        );
    }

    #[test]
    fn test_assignments() {
        let overrides = InputOverrides::from_assignments(["cac=0", "new-customers=10", "cac=5"])
            .unwrap();
        assert_eq!(overrides.cac, Some(dec!(5)));
        assert_eq!(overrides.new_customers, Some(10));

        let err = InputOverrides::from_assignments(["churn=0.1"]).unwrap_err();
        assert!(matches!(err, RunwayError::InvalidInput { ref field, .. } if field == "churn"));

        assert!(InputOverrides::from_assignments(["cac"]).is_err());
    }

    #[test]
    fn test_parse_assignment() {
        let mut overrides = InputOverrides::new();
        overrides.parse_assignment("cac=0").unwrap();
        overrides.parse_assignment(" gross_margin = 80% ").unwrap();
        assert_eq!(overrides.cac, Some(dec!(0)));
        assert_eq!(overrides.gross_margin, Some(dec!(0.8)));

        let err = overrides.parse_assignment("cac").unwrap_err();
        assert_eq!(
            err,
            RunwayError::InvalidInput {
                field: "cac".into(),
                reason: "expected key=value".into(),
            }
        );
    }

    #[test]
    fn test_merge_prefers_higher() {
        let config = InputOverrides::new().with_cac(dec!(100)).with_lifetime(12);
        let cli = InputOverrides::new().with_cac(dec!(0));
        let merged = config.merge(&cli);
        assert_eq!(merged.cac, Some(dec!(0)));
        assert_eq!(merged.lifetime, Some(12));
        assert_eq!(merged.arpu, None);
    }

    #[test]
    fn test_clear() {
        let mut overrides = InputOverrides::new().with_cac(dec!(1));
        overrides.clear(InputField::Cac);
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let overrides: InputOverrides = toml::from_str("cac = 0\ngross_margin = 0.75\n").unwrap();
        assert_eq!(overrides.cac, Some(dec!(0)));
        assert_eq!(overrides.gross_margin, Some(dec!(0.75)));
        assert_eq!(overrides.overridden_fields(), vec![InputField::GrossMargin, InputField::Cac]);

        assert!(toml::from_str::<InputOverrides>("churn = 0.1").is_err());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&InputOverrides::new().with_lifetime(6)).unwrap();
        assert_eq!(json, r#"{"lifetime":6}"#);
    }
}
