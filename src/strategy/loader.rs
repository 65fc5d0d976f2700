//! JSON-based strategy configuration loader

use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::StrategyConfig;

/// Load a strategy configuration from a JSON file
pub fn load_strategy(path: &Path) -> Result<StrategyConfig, Box<dyn Error>> {
    let file = File::open(path)?;
    let config: StrategyConfig = serde_json::from_reader(file)?;
    Ok(config)
}

/// Load from a path when given, otherwise fall back to the example agency
pub fn load_or_example(path: Option<&Path>) -> Result<StrategyConfig, Box<dyn Error>> {
    match path {
        Some(p) => load_strategy(p),
        None => Ok(StrategyConfig::example_agency()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_json() {
        let config = StrategyConfig::example_agency();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StrategyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.horizon_months, config.horizon_months);
        assert_eq!(parsed.starting_policies, config.starting_policies);
        assert_eq!(parsed.marketing.referral, config.marketing.referral);
    }

    #[test]
    fn test_technology_flags_default_false() {
        // Omitted flags deserialize as disabled
        let json = r#"{"renewal_program": true}"#;
        let flags: crate::strategy::TechnologyFlags = serde_json::from_str(json).unwrap();
        assert!(flags.renewal_program);
        assert!(!flags.eo_automation);
        assert!(!flags.cross_sell_program);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_strategy(Path::new("does/not/exist.json")).is_err());
    }
}
