//! Tests for the JSON collaborator layer.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tempfile::{NamedTempFile, tempdir};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Sample {
    log_level: String,
    build: BuildSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct BuildSection {
    version: String,
    commit: String,
}

fn builtin() -> Sample {
    Sample {
        log_level: "INFO".to_string(),
        build: BuildSection {
            version: "1.0.0".to_string(),
            commit: String::new(),
        },
    }
}

fn file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

mod load_json {
    use super::*;

    #[test]
    fn loads_valid_file() {
        let file = file_with(
            r#"{"log_level": "DEBUG", "build": {"version": "2.0.0", "commit": "abc"}}"#,
        );

        let sample: Sample = load_json(file.path()).unwrap();

        assert_eq!(sample.log_level, "DEBUG");
        assert_eq!(sample.build.version, "2.0.0");
    }

    #[test]
    fn missing_file_returns_error() {
        let result: Result<Sample, _> =
            load_json(std::path::Path::new("nonexistent_file_12345.json"));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn malformed_json_returns_error() {
        let file = file_with("{not json");

        let result: Result<Sample, _> = load_json(file.path());

        assert!(matches!(result, Err(ConfigError::JsonParse(_))));
    }
}

mod defaults_or {
    use super::*;

    #[test]
    fn missing_path_keeps_builtin_defaults() {
        let sample = defaults_or(
            std::path::Path::new("nonexistent_file_12345.json"),
            builtin(),
        );

        assert_eq!(sample, builtin());
    }

    #[test]
    fn directory_path_keeps_builtin_defaults() {
        let dir = tempdir().unwrap();

        let sample = defaults_or(dir.path(), builtin());

        assert_eq!(sample, builtin());
    }

    #[test]
    fn malformed_file_keeps_builtin_defaults() {
        let file = file_with("{broken");

        let sample = defaults_or(file.path(), builtin());

        assert_eq!(sample, builtin());
    }

    #[test]
    fn partial_file_merges_over_builtin() {
        // Fields the file omits keep their built-in values
        let file = file_with(r#"{"build": {"commit": "deadbeef"}}"#);

        let sample = defaults_or(file.path(), builtin());

        assert_eq!(sample.log_level, "INFO");
        assert_eq!(sample.build.version, "1.0.0");
        assert_eq!(sample.build.commit, "deadbeef");
    }
}

mod update_from_json {
    use super::*;

    #[test]
    fn absent_fields_retain_previous_values() {
        let mut sample = builtin();

        update_from_json(&mut sample, r#"{"log_level": "WARN"}"#).unwrap();

        assert_eq!(sample.log_level, "WARN");
        assert_eq!(sample.build.version, "1.0.0");
    }

    #[test]
    fn nested_objects_merge_field_wise() {
        let mut sample = builtin();

        update_from_json(&mut sample, r#"{"build": {"commit": "abc123"}}"#).unwrap();

        assert_eq!(sample.build.version, "1.0.0");
        assert_eq!(sample.build.commit, "abc123");
    }

    #[test]
    fn invalid_json_returns_error_and_keeps_record() {
        let mut sample = builtin();

        let result = update_from_json(&mut sample, "not json");

        assert!(matches!(result, Err(ConfigError::JsonParse(_))));
        assert_eq!(sample, builtin());
    }

    #[test]
    fn shape_mismatch_returns_error() {
        let mut sample = builtin();

        let result = update_from_json(&mut sample, r#"{"log_level": 42}"#);

        assert!(matches!(result, Err(ConfigError::JsonParse(_))));
    }
}

mod to_json_string {
    use super::*;

    #[test]
    fn serializes_record() {
        let json = to_json_string(&builtin()).unwrap();

        assert!(json.contains(r#""log_level":"INFO""#));
        assert!(json.contains(r#""version":"1.0.0""#));
    }
}
