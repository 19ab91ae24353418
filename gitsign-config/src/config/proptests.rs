//! Property-based tests for configuration resolution.

use super::environment::{EnvironmentConfig, MapEnvironment};
use super::keys::{apply_git_options, classify_key};
use super::parser::RawConfig;
use super::resolver::ConfigResolver;
use super::schema::{Config, Field};
use super::source::StaticSource;
use proptest::prelude::*;

// Strategy for a single whitespace-free token
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._:/@-]{1,16}"
}

// Apply an upper/lower case mask to a string
fn recase(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| {
            if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn string_field_strategy() -> impl Strategy<Value = Field> {
    prop::sample::select(
        Field::ALL
            .iter()
            .copied()
            .filter(|&f| f != Field::MatchCommitter)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Lines without a second token never reach the mapping
    #[test]
    fn single_token_lines_are_dropped(
        keys in prop::collection::vec(token_strategy(), 0..10),
        padding in "[ \t]{0,3}",
    ) {
        let text: String = keys
            .iter()
            .map(|k| format!("{padding}{k}{padding}\n"))
            .collect();
        prop_assert!(RawConfig::parse(&text).is_empty());
    }

    // Every two-token line is kept, and the last value for a key wins
    #[test]
    fn last_value_wins(
        pairs in prop::collection::vec((token_strategy(), token_strategy()), 1..20),
    ) {
        let text: String = pairs.iter().map(|(k, v)| format!("{k} {v}\n")).collect();
        let raw = RawConfig::parse(&text);

        for (key, _) in &pairs {
            let expected = pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
            prop_assert_eq!(raw.get(key), expected);
        }
    }

    // Values are rejoined with single spaces
    #[test]
    fn value_tokens_rejoined(
        key in token_strategy(),
        words in prop::collection::vec(token_strategy(), 1..6),
        gap in "[ \t]{1,4}",
    ) {
        let line = format!("{key}{gap}{}", words.join(&gap));
        let raw = RawConfig::parse(&line);
        let expected = words.join(" ");
        prop_assert_eq!(raw.get(&key), Some(expected.as_str()));
    }

    // Letter case of a key never changes its effect
    #[test]
    fn classification_is_case_insensitive(
        field in prop::sample::select(Field::ALL.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 1..8),
        value in token_strategy(),
    ) {
        let key = recase(field.git_key(), &mask);
        prop_assert_eq!(classify_key(&key), Some(field));

        let mut canonical = Config::default();
        apply_git_options(&mut canonical, &RawConfig::parse(&format!("{} {value}", field.git_key())));

        let mut recased = Config::default();
        apply_git_options(&mut recased, &RawConfig::parse(&format!("{key} {value}")));

        prop_assert_eq!(canonical, recased);
    }

    // matchCommitter is true exactly for the literal "true" in any case
    #[test]
    fn match_committer_only_literal_true(value in "[a-zA-Z0-9]{1,6}") {
        let mut config = Config::default();
        apply_git_options(&mut config, &RawConfig::parse(&format!("gitsign.matchCommitter {value}")));
        prop_assert_eq!(config.match_committer, value.eq_ignore_ascii_case("true"));
    }

    // The tool prefix always wins over the shared prefix
    #[test]
    fn tool_prefix_wins(
        field in string_field_strategy(),
        shared in proptest::option::of(token_strategy()),
        tool in proptest::option::of(token_strategy()),
        git in proptest::option::of(token_strategy()),
    ) {
        let Some(tool_var) = EnvironmentConfig::tool_variable(field) else {
            return Ok(());
        };
        let shared_var = tool_var.replacen("GITSIGN", "SIGSTORE", 1);

        let mut env = MapEnvironment::new();
        if let Some(v) = &shared {
            env = env.with(shared_var, v.clone());
        }
        if let Some(v) = &tool {
            env = env.with(tool_var, v.clone());
        }
        let text = git
            .as_ref()
            .map(|v| format!("{} {v}\n", field.git_key()))
            .unwrap_or_default();

        let config = ConfigResolver::new()
            .with_source(StaticSource::new(text))
            .with_environment(env)
            .resolve()
            .unwrap();

        let mut expected_config = Config::default();
        if let Some(v) = &git {
            expected_config.set(field, v);
        }
        let tool_only = matches!(field, Field::LogPath | Field::RekorMode);
        let expected = tool
            .clone()
            .or_else(|| if tool_only { None } else { shared.clone() })
            .unwrap_or_else(|| expected_config.get(field));

        prop_assert_eq!(config.get(field), expected);
    }
}
