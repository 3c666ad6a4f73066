//! Configuration loading and fatal validation.

use formica_core::error::ConfigError;
use formica_core::types::DepositRule;
use formica_runtime::ant_system::AntSystemUpdateRule;
use formica_runtime::backend::{create_matrix, MatrixBackend};
use formica_runtime::config::{AntSystemConfig, UpdateRuleParams};
use std::io::Write;

fn config_from(toml: &str) -> Result<AntSystemConfig, ConfigError> {
    let params = UpdateRuleParams::from_toml_str(toml, Some("update_rule"))?;
    AntSystemConfig::from_params(&params)
}

#[test]
fn loads_rule_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[update_rule]
decay_rate = 0.1
deposit_rule = "AntCycle"
q = 100.0

[matrix]
kind = "dense"
nodes = 8
initial = 0.01
"#
    )
    .unwrap();

    let params = UpdateRuleParams::load(file.path(), Some("update_rule")).unwrap();
    let rule = AntSystemUpdateRule::from_params(&params).unwrap();
    assert_eq!(rule.config().decay_rate(), 0.1);
    assert_eq!(rule.config().deposit_rule(), DepositRule::AntCycle);
    assert_eq!(rule.config().q(), Some(100.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = UpdateRuleParams::load(&dir.path().join("absent.toml"), None).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn invalid_decay_rates_are_fatal() {
    for raw in ["-0.1", "1.0", "nan", "inf"] {
        let err = config_from(&format!(
            "[update_rule]\ndecay_rate = {raw}\ndeposit_rule = \"AntCycle\"\n"
        ))
        .unwrap_err();
        match err {
            ConfigError::InvalidDecayRate { parameter, .. } => {
                assert_eq!(parameter, "update_rule.decay_rate")
            }
            other => panic!("decay rate {raw} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn bogus_rule_lists_exactly_three_variants() {
    let err = config_from("[update_rule]\ndecay_rate = 0.5\ndeposit_rule = \"bogus\"\n").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("'bogus'"));
    assert!(message.contains("update_rule.deposit_rule"));
    assert!(message.ends_with("[AntCycle, AntDensity, AntQuantity]"));
}

#[test]
fn rule_names_are_case_sensitive() {
    for name in ["antcycle", "ANT_CYCLE", "Antcycle"] {
        let err = config_from(&format!(
            "[update_rule]\ndecay_rate = 0.5\ndeposit_rule = \"{name}\"\n"
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDepositRule { .. }));
    }
}

#[test]
fn ant_cycle_q_is_defaulted_and_checked() {
    let config = config_from("[update_rule]\ndecay_rate = 0.5\ndeposit_rule = \"AntCycle\"\n").unwrap();
    assert_eq!(config.q(), Some(1.0));

    let err = config_from("[update_rule]\ndecay_rate = 0.5\ndeposit_rule = \"AntCycle\"\nq = -1.0\n")
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidQ {
            parameter: "update_rule.q".into(),
            value: -1.0
        }
    );
}

#[test]
fn ant_quantity_q_is_taken_as_given() {
    let config = config_from("[update_rule]\ndecay_rate = 0.5\ndeposit_rule = \"AntQuantity\"\nq = 0.0\n")
        .unwrap();
    assert_eq!(config.q(), Some(0.0));
    assert!(config.is_consistent());
}

#[test]
fn matrix_backend_shares_the_file() {
    #[derive(serde::Deserialize)]
    struct Settings {
        matrix: MatrixBackend,
    }

    let settings: Settings = toml::from_str(
        r#"
        [matrix]
        kind = "dense"
        nodes = 8
        initial = 0.01
        "#,
    )
    .unwrap();
    assert_eq!(settings.matrix, MatrixBackend::dense(8, 0.01));
    assert!(create_matrix(&settings.matrix).is_ok());
}
